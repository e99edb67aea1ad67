use serde_json::Value;

use super::url::build_path;
use super::DtaleClient;
use crate::protocol::types::{QueryEngine, ThemeVariant};
use crate::protocol::ClientError;

// Application-scoped preferences. These endpoints carry no dataset id.
impl DtaleClient {
    pub async fn update_theme(&self, theme: ThemeVariant) -> Result<Value, ClientError> {
        let path = build_path(
            "/dtale/update-theme",
            &[("theme", theme.as_str().to_string())],
        )?;
        self.transport().get(&path).await
    }

    pub async fn update_query_engine(&self, engine: QueryEngine) -> Result<Value, ClientError> {
        let path = build_path(
            "/dtale/update-query-engine",
            &[("engine", engine.as_str().to_string())],
        )?;
        self.transport().get(&path).await
    }

    pub async fn update_pin_menu(&self, pinned: bool) -> Result<Value, ClientError> {
        let path = build_path("/dtale/update-pin-menu", &[("pinned", pinned.to_string())])?;
        self.transport().get(&path).await
    }

    pub async fn update_language(&self, language: &str) -> Result<Value, ClientError> {
        let path = build_path(
            "/dtale/update-language",
            &[("language", language.to_string())],
        )?;
        self.transport().get(&path).await
    }

    /// `None` clears the limit.
    pub async fn update_maximum_column_width(
        &self,
        width: Option<u32>,
    ) -> Result<Value, ClientError> {
        let value = width.map(|w| w.to_string()).unwrap_or_default();
        let path = build_path("/dtale/update-maximum-column-width", &[("width", value)])?;
        self.transport().get(&path).await
    }

    /// `None` clears the limit.
    pub async fn update_maximum_row_height(
        &self,
        height: Option<u32>,
    ) -> Result<Value, ClientError> {
        let value = height.map(|h| h.to_string()).unwrap_or_default();
        let path = build_path("/dtale/update-maximum-row-height", &[("height", value)])?;
        self.transport().get(&path).await
    }
}
