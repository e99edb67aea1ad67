//! State-sync dispatcher.
//!
//! Maps each grid intent to exactly one outbound request, applies the
//! optimistic view-state patch, and reconciles completion. Persistence is
//! fire-and-forget: transport failures are logged and swallowed here, and
//! the already-applied local patch is never rolled back.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, error, warn};

use super::state::{StateSink, ViewPatch};
use crate::arrange::{self, Arrangement, PersistSpec};
use crate::client::DtaleClient;
use crate::protocol::response::Ack;
use crate::protocol::types::{
    ColumnDef, ColumnFormat, MoveDirection, MoveEdge, QueryEngine, ThemeVariant,
};
use crate::protocol::ClientError;

/// Resolution of a fire-and-forget persistence request.
///
/// `settled` yields `Some(body)` once the request succeeded; a failed or
/// abandoned request yields `None`. No error detail crosses this boundary;
/// failures have already been logged by the dispatcher.
pub struct Completion {
    rx: oneshot::Receiver<Value>,
}

impl Completion {
    pub async fn settled(self) -> Option<Value> {
        self.rx.await.ok()
    }
}

/// Translates grid operations into backend calls plus local state patches.
///
/// Requests are sent in call order; responses may settle out of order. No
/// retries, no request serialization.
pub struct SyncDispatcher {
    client: Arc<DtaleClient>,
    state: Arc<dyn StateSink>,
}

impl SyncDispatcher {
    pub fn new(client: Arc<DtaleClient>, state: Arc<dyn StateSink>) -> Self {
        SyncDispatcher { client, state }
    }

    fn spawn_persist<F>(&self, operation: &'static str, request: F) -> Completion
    where
        F: Future<Output = Result<Value, ClientError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            debug!(operation, "issuing persistence request");
            match request.await {
                Ok(body) => {
                    if let Some(ack) = Ack::from_body(&body) {
                        if !ack.success {
                            warn!(
                                operation,
                                error = ack.error.as_deref().unwrap_or("unknown"),
                                "backend reported failure"
                            );
                        }
                    }
                    let _ = tx.send(body);
                }
                Err(e) => {
                    error!(operation, "persistence request failed: {}", e);
                }
            }
        });
        Completion { rx }
    }

    // ------------------------------------------------------------------
    // Column arrangement
    // ------------------------------------------------------------------

    /// Moves `selected` one step within the unlocked region. Returns
    /// `None` without issuing a request when the move is a logic no-op
    /// (boundary position, or a locked/unknown selection).
    pub async fn move_one(
        &self,
        data_id: &str,
        columns: &[ColumnDef],
        selected: &str,
        direction: MoveDirection,
    ) -> Option<Completion> {
        let outcome = arrange::move_one_position(columns, selected, direction);
        self.apply_arrangement(data_id, outcome).await
    }

    /// Moves `selected` to the front or back of the unlocked region.
    pub async fn move_to_edge(
        &self,
        data_id: &str,
        columns: &[ColumnDef],
        selected: &str,
        edge: MoveEdge,
    ) -> Option<Completion> {
        let outcome = arrange::move_to_edge(columns, selected, edge);
        self.apply_arrangement(data_id, outcome).await
    }

    /// Pins the selected columns and persists the first selected name.
    pub async fn lock_columns(
        &self,
        data_id: &str,
        columns: &[ColumnDef],
        selected: &[String],
    ) -> Option<Completion> {
        let outcome = arrange::lock_columns(columns, selected);
        self.apply_arrangement(data_id, outcome).await
    }

    /// Unpins the selected columns and persists the first selected name.
    pub async fn unlock_columns(
        &self,
        data_id: &str,
        columns: &[ColumnDef],
        selected: &[String],
    ) -> Option<Completion> {
        let outcome = arrange::unlock_columns(columns, selected);
        self.apply_arrangement(data_id, outcome).await
    }

    async fn apply_arrangement(&self, data_id: &str, outcome: Arrangement) -> Option<Completion> {
        let spec = outcome.persist?;

        let client = self.client.clone();
        let data_id = data_id.to_string();
        let completion = match spec {
            PersistSpec::ColumnPosition { col, action } => {
                self.spawn_persist("update-column-position", async move {
                    client.update_column_position(&data_id, &col, action).await
                })
            }
            PersistSpec::LockedState { col, action } => {
                self.spawn_persist("update-locked", async move {
                    client.update_locked(&data_id, &col, action).await
                })
            }
        };

        // Lock/unlock also clears the selection and forces a re-layout.
        let pinning = outcome.fixed_column_count.is_some();
        self.state
            .apply(ViewPatch {
                columns: Some(outcome.columns),
                fixed_column_count: outcome.fixed_column_count,
                clear_selection: pinning,
                trigger_resize: pinning,
            })
            .await;
        Some(completion)
    }

    // ------------------------------------------------------------------
    // Fire-and-forget persistence
    // ------------------------------------------------------------------

    pub fn update_visibility(&self, data_id: &str, visibility: BTreeMap<String, bool>) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        self.spawn_persist("update-visibility", async move {
            client.update_visibility(&data_id, &visibility).await
        })
    }

    pub fn update_settings(&self, data_id: &str, settings: Value) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        self.spawn_persist("update-settings", async move {
            client.update_settings(&data_id, &settings).await
        })
    }

    pub fn drop_filtered_rows(&self, data_id: &str) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        self.spawn_persist("drop-filtered-rows", async move {
            client.drop_filtered_rows(&data_id).await
        })
    }

    pub fn move_filters_to_custom(&self, data_id: &str) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        self.spawn_persist("move-filters-to-custom", async move {
            client.move_filters_to_custom(&data_id).await
        })
    }

    pub fn rename_column(&self, data_id: &str, col: &str, rename: &str) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        let col = col.to_string();
        let rename = rename.to_string();
        self.spawn_persist("rename-col", async move {
            client.rename_column(&data_id, &col, &rename).await
        })
    }

    pub fn update_formats(
        &self,
        data_id: &str,
        col: &str,
        format: ColumnFormat,
        all: bool,
        nan_display: &str,
    ) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        let col = col.to_string();
        let nan_display = nan_display.to_string();
        self.spawn_persist("update-formats", async move {
            client
                .update_formats(&data_id, &col, &format, all, &nan_display)
                .await
        })
    }

    pub fn save_range_highlights(&self, data_id: &str, ranges: Value) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        self.spawn_persist("save-range-highlights", async move {
            client.save_range_highlights(&data_id, &ranges).await
        })
    }

    pub fn edit_cell(
        &self,
        data_id: &str,
        col: &str,
        row_index: usize,
        updated: &str,
    ) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        let col = col.to_string();
        let updated = updated.to_string();
        self.spawn_persist("edit-cell", async move {
            client.edit_cell(&data_id, &col, row_index, &updated).await
        })
    }

    pub fn delete_columns(&self, data_id: &str, cols: Vec<String>) -> Completion {
        let client = self.client.clone();
        let data_id = data_id.to_string();
        self.spawn_persist("delete-col", async move {
            client.delete_columns(&data_id, &cols).await
        })
    }

    pub fn update_theme(&self, theme: ThemeVariant) -> Completion {
        let client = self.client.clone();
        self.spawn_persist("update-theme", async move {
            client.update_theme(theme).await
        })
    }

    pub fn update_query_engine(&self, engine: QueryEngine) -> Completion {
        let client = self.client.clone();
        self.spawn_persist("update-query-engine", async move {
            client.update_query_engine(engine).await
        })
    }

    pub fn update_pin_menu(&self, pinned: bool) -> Completion {
        let client = self.client.clone();
        self.spawn_persist("update-pin-menu", async move {
            client.update_pin_menu(pinned).await
        })
    }

    pub fn update_language(&self, language: &str) -> Completion {
        let client = self.client.clone();
        let language = language.to_string();
        self.spawn_persist("update-language", async move {
            client.update_language(&language).await
        })
    }

    pub fn update_maximum_column_width(&self, width: Option<u32>) -> Completion {
        let client = self.client.clone();
        self.spawn_persist("update-maximum-column-width", async move {
            client.update_maximum_column_width(width).await
        })
    }

    pub fn update_maximum_row_height(&self, height: Option<u32>) -> Completion {
        let client = self.client.clone();
        self.spawn_persist("update-maximum-row-height", async move {
            client.update_maximum_row_height(height).await
        })
    }

    // ------------------------------------------------------------------
    // Awaited variants
    // ------------------------------------------------------------------

    /// Flips one column's visibility and waits for the backend. Failures
    /// are logged and reported as `None`.
    pub async fn toggle_visibility(&self, data_id: &str, col: &str) -> Option<Value> {
        match self.client.toggle_visibility(data_id, col).await {
            Ok(body) => Some(body),
            Err(e) => {
                error!(operation = "toggle-visibility", "persistence request failed: {}", e);
                None
            }
        }
    }

    /// Fetches the filtered-range metadata for a dataset. Failures are
    /// logged and reported as `None`.
    pub async fn load_filtered_ranges(&self, data_id: &str) -> Option<Value> {
        match self.client.load_filtered_ranges(data_id).await {
            Ok(body) => Some(body),
            Err(e) => {
                error!(operation = "load-filtered-ranges", "request failed: {}", e);
                None
            }
        }
    }
}
