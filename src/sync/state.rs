use async_trait::async_trait;

use crate::protocol::types::ColumnDef;

/// Partial view-state update produced by a grid operation.
///
/// Only the fields an operation touches are set; the state container
/// merges the patch into the authoritative UI state atomically (single
/// writer, whole-sequence swap).
#[derive(Debug, Clone, Default)]
pub struct ViewPatch {
    /// Replacement column sequence.
    pub columns: Option<Vec<ColumnDef>>,
    /// New count of columns pinned to the fixed left region.
    pub fixed_column_count: Option<usize>,
    /// Clear the current column selection.
    pub clear_selection: bool,
    /// Signal the view to recompute its layout.
    pub trigger_resize: bool,
}

/// Owner of the authoritative view state.
///
/// `apply` merges the patch and returns once the merge (and any associated
/// re-render) has settled; dispatcher methods do not resolve until then.
#[async_trait]
pub trait StateSink: Send + Sync {
    async fn apply(&self, patch: ViewPatch);
}
