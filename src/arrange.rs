//! Column arrangement engine.
//!
//! Pure reordering and pinning transforms over a column sequence. Each
//! operation consumes the current sequence and returns an [`Arrangement`]:
//! the full new sequence plus the single persistence call it implies.
//! Nothing here does I/O; the sequence is owned by the caller's view state
//! and swapped wholesale.
//!
//! A sequence always partitions into a locked prefix (pin order) followed
//! by an unlocked suffix (display order). Every transform preserves that
//! invariant.

use crate::protocol::types::{ColumnDef, LockAction, MoveDirection, MoveEdge, PositionAction};

/// Outcome of an arrangement operation.
#[derive(Debug, Clone)]
pub struct Arrangement {
    /// The full new column sequence.
    pub columns: Vec<ColumnDef>,
    /// The one server call to issue, or `None` for a logic-level no-op.
    pub persist: Option<PersistSpec>,
    /// New fixed-column count; set by lock/unlock only.
    pub fixed_column_count: Option<usize>,
}

impl Arrangement {
    fn unchanged(columns: &[ColumnDef]) -> Self {
        Arrangement {
            columns: columns.to_vec(),
            persist: None,
            fixed_column_count: None,
        }
    }
}

/// The server call an arrangement implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistSpec {
    ColumnPosition { col: String, action: PositionAction },
    LockedState { col: String, action: LockAction },
}

fn partition(columns: &[ColumnDef]) -> (Vec<ColumnDef>, Vec<ColumnDef>) {
    let locked = columns.iter().filter(|c| c.locked).cloned().collect();
    let unlocked = columns.iter().filter(|c| !c.locked).cloned().collect();
    (locked, unlocked)
}

/// Swaps `selected` with its immediate neighbor inside the unlocked suffix.
///
/// Boundary moves are silent no-ops, as is a `selected` that is locked or
/// unknown: a pinned column is not part of the scrollable region, so
/// moving it one step is meaningless rather than an error.
pub fn move_one_position(
    columns: &[ColumnDef],
    selected: &str,
    direction: MoveDirection,
) -> Arrangement {
    let (locked, mut unlocked) = partition(columns);
    let Some(idx) = unlocked.iter().position(|c| c.name == selected) else {
        return Arrangement::unchanged(columns);
    };
    match direction {
        MoveDirection::Right if idx + 1 >= unlocked.len() => {
            return Arrangement::unchanged(columns)
        }
        MoveDirection::Left if idx == 0 => return Arrangement::unchanged(columns),
        MoveDirection::Right => unlocked.swap(idx, idx + 1),
        MoveDirection::Left => unlocked.swap(idx, idx - 1),
    }
    let mut result = locked;
    result.extend(unlocked);
    Arrangement {
        columns: result,
        persist: Some(PersistSpec::ColumnPosition {
            col: selected.to_string(),
            action: direction.into(),
        }),
        fixed_column_count: None,
    }
}

/// Moves `selected` to the front or back of the unlocked suffix.
///
/// The front position is immediately after the locked prefix. A locked
/// `selected` already occupies the front and is a silent no-op.
pub fn move_to_edge(columns: &[ColumnDef], selected: &str, edge: MoveEdge) -> Arrangement {
    let to_move: Vec<ColumnDef> = columns
        .iter()
        .filter(|c| c.name == selected && !c.locked)
        .cloned()
        .collect();
    if to_move.is_empty() {
        return Arrangement::unchanged(columns);
    }
    let rest = columns
        .iter()
        .filter(|c| c.name != selected && !c.locked)
        .cloned();

    let mut result: Vec<ColumnDef> = columns.iter().filter(|c| c.locked).cloned().collect();
    match edge {
        MoveEdge::Front => {
            result.extend(to_move);
            result.extend(rest);
        }
        MoveEdge::Back => {
            result.extend(rest);
            result.extend(to_move);
        }
    }
    Arrangement {
        columns: result,
        persist: Some(PersistSpec::ColumnPosition {
            col: selected.to_string(),
            action: edge.into(),
        }),
        fixed_column_count: None,
    }
}

/// Pins every column named in `selected`, appending them after the
/// existing locked prefix in their original relative order.
///
/// Only the first selected name is transmitted to the server; the backend
/// accepts one column per `update-locked` call.
pub fn lock_columns(columns: &[ColumnDef], selected: &[String]) -> Arrangement {
    let mut locked: Vec<ColumnDef> = columns.iter().filter(|c| c.locked).cloned().collect();
    locked.extend(
        columns
            .iter()
            .filter(|c| !c.locked && selected.contains(&c.name))
            .cloned()
            .map(|mut c| {
                c.locked = true;
                c
            }),
    );
    let fixed = locked.len();

    let mut result = locked;
    let pinned: Vec<String> = result.iter().map(|c| c.name.clone()).collect();
    result.extend(
        columns
            .iter()
            .filter(|c| !pinned.contains(&c.name))
            .cloned(),
    );
    Arrangement {
        columns: result,
        persist: selected.first().map(|col| PersistSpec::LockedState {
            col: col.clone(),
            action: LockAction::Lock,
        }),
        fixed_column_count: Some(fixed),
    }
}

/// Unpins every column named in `selected`. Newly-unlocked columns land
/// immediately after the remaining locked prefix, ahead of the columns
/// that were already unlocked.
pub fn unlock_columns(columns: &[ColumnDef], selected: &[String]) -> Arrangement {
    let still_locked: Vec<ColumnDef> = columns
        .iter()
        .filter(|c| c.locked && !selected.contains(&c.name))
        .cloned()
        .collect();
    let newly_unlocked = columns
        .iter()
        .filter(|c| c.locked && selected.contains(&c.name))
        .cloned()
        .map(|mut c| {
            c.locked = false;
            c
        });
    let fixed = still_locked.len();

    let mut result = still_locked;
    result.extend(newly_unlocked);
    result.extend(columns.iter().filter(|c| !c.locked).cloned());
    Arrangement {
        columns: result,
        persist: selected.first().map(|col| PersistSpec::LockedState {
            col: col.clone(),
            action: LockAction::Unlock,
        }),
        fixed_column_count: Some(fixed),
    }
}
