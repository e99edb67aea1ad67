use serde_json::{json, Value};

use super::url::{build_path, encode_json};
use super::DtaleClient;
use crate::protocol::ClientError;

impl DtaleClient {
    /// Persists the instance settings object (sort, filters, display
    /// options) for one dataset.
    pub async fn update_settings(
        &self,
        data_id: &str,
        settings: &Value,
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/update-settings/{}", data_id),
            &[("settings", encode_json(settings)?)],
        )?;
        self.transport().get(&path).await
    }

    pub async fn drop_filtered_rows(&self, data_id: &str) -> Result<Value, ClientError> {
        self.transport()
            .get(&format!("/dtale/drop-filtered-rows/{}", data_id))
            .await
    }

    pub async fn move_filters_to_custom(&self, data_id: &str) -> Result<Value, ClientError> {
        self.transport()
            .get(&format!("/dtale/move-filters-to-custom/{}", data_id))
            .await
    }

    pub async fn save_range_highlights(
        &self,
        data_id: &str,
        ranges: &Value,
    ) -> Result<Value, ClientError> {
        let body = json!({ "ranges": encode_json(ranges)? });
        self.transport()
            .post(&format!("/dtale/save-range-highlights/{}", data_id), &body)
            .await
    }

    pub async fn edit_cell(
        &self,
        data_id: &str,
        col: &str,
        row_index: usize,
        updated: &str,
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/edit-cell/{}", data_id),
            &[
                ("col", col.to_string()),
                ("rowIndex", row_index.to_string()),
                ("updated", updated.to_string()),
            ],
        )?;
        self.transport().get(&path).await
    }

    pub async fn load_filtered_ranges(&self, data_id: &str) -> Result<Value, ClientError> {
        self.transport()
            .get(&format!("/dtale/load-filtered-ranges/{}", data_id))
            .await
    }
}
