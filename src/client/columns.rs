use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::url::{build_path, encode_json};
use super::DtaleClient;
use crate::protocol::types::{ColumnFormat, LockAction, PositionAction};
use crate::protocol::ClientError;

impl DtaleClient {
    pub async fn update_column_position(
        &self,
        data_id: &str,
        col: &str,
        action: PositionAction,
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/update-column-position/{}", data_id),
            &[
                ("col", col.to_string()),
                ("action", action.as_str().to_string()),
            ],
        )?;
        self.transport().get(&path).await
    }

    pub async fn update_locked(
        &self,
        data_id: &str,
        col: &str,
        action: LockAction,
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/update-locked/{}", data_id),
            &[
                ("col", col.to_string()),
                ("action", action.as_str().to_string()),
            ],
        )?;
        self.transport().get(&path).await
    }

    /// Replaces the full visibility map for a dataset.
    pub async fn update_visibility(
        &self,
        data_id: &str,
        visibility: &BTreeMap<String, bool>,
    ) -> Result<Value, ClientError> {
        let body = json!({ "visibility": encode_json(visibility)? });
        self.transport()
            .post(&format!("/dtale/update-visibility/{}", data_id), &body)
            .await
    }

    /// Flips visibility of a single column.
    pub async fn toggle_visibility(&self, data_id: &str, col: &str) -> Result<Value, ClientError> {
        let body = json!({ "toggle": col });
        self.transport()
            .post(&format!("/dtale/update-visibility/{}", data_id), &body)
            .await
    }

    pub async fn rename_column(
        &self,
        data_id: &str,
        col: &str,
        rename: &str,
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/rename-col/{}", data_id),
            &[("col", col.to_string()), ("rename", rename.to_string())],
        )?;
        self.transport().get(&path).await
    }

    /// Persists a column's format spec. `all` applies the format to every
    /// column of the same dtype; `nan_display` is the string shown for
    /// missing values.
    pub async fn update_formats(
        &self,
        data_id: &str,
        col: &str,
        format: &ColumnFormat,
        all: bool,
        nan_display: &str,
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/update-formats/{}", data_id),
            &[
                ("col", col.to_string()),
                ("format", encode_json(format)?),
                ("all", all.to_string()),
                ("nanDisplay", nan_display.to_string()),
            ],
        )?;
        self.transport().get(&path).await
    }

    pub async fn delete_columns(
        &self,
        data_id: &str,
        cols: &[String],
    ) -> Result<Value, ClientError> {
        let path = build_path(
            &format!("/dtale/delete-col/{}", data_id),
            &[("cols", encode_json(&cols)?)],
        )?;
        self.transport().get(&path).await
    }
}
