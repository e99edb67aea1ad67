//! Column Arrangement Tests
//!
//! Tests for the pure reordering and pinning transforms, including:
//! - Boundary no-ops for one-step moves
//! - Swap inverse behavior
//! - Front/back placement relative to the locked prefix
//! - Lock/unlock ordering and fixed-column counts

mod common;

use common::{assert_partitioned, cols, names};
use dtale_client::arrange::{
    lock_columns, move_one_position, move_to_edge, unlock_columns, PersistSpec,
};
use dtale_client::{ColumnDef, LockAction, MoveDirection, MoveEdge, PositionAction};

// ============================================================================
// move_one_position
// ============================================================================

#[test]
fn test_move_left_swaps_with_left_neighbor() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = move_one_position(&columns, "B", MoveDirection::Left);

    assert_eq!(names(&outcome.columns), ["B", "A", "C"]);
    assert_eq!(
        outcome.persist,
        Some(PersistSpec::ColumnPosition {
            col: "B".to_string(),
            action: PositionAction::Left,
        })
    );
    assert!(outcome.fixed_column_count.is_none());
}

#[test]
fn test_move_right_swaps_with_right_neighbor() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = move_one_position(&columns, "B", MoveDirection::Right);

    assert_eq!(names(&outcome.columns), ["A", "C", "B"]);
}

#[test]
fn test_move_first_unlocked_left_is_noop() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = move_one_position(&columns, "A", MoveDirection::Left);

    assert_eq!(names(&outcome.columns), ["A", "B", "C"]);
    assert!(outcome.persist.is_none());
}

#[test]
fn test_move_last_unlocked_right_is_noop() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = move_one_position(&columns, "C", MoveDirection::Right);

    assert_eq!(names(&outcome.columns), ["A", "B", "C"]);
    assert!(outcome.persist.is_none());
}

#[test]
fn test_boundary_noops_with_locked_prefix() {
    let mut columns = vec![ColumnDef::pinned("P"), ColumnDef::pinned("Q")];
    columns.extend(cols(&["A", "B"]));

    // First/last of the unlocked region, not of the whole sequence.
    let left = move_one_position(&columns, "A", MoveDirection::Left);
    assert!(left.persist.is_none());
    let right = move_one_position(&columns, "B", MoveDirection::Right);
    assert!(right.persist.is_none());
}

#[test]
fn test_move_one_keeps_locked_prefix_intact() {
    let mut columns = vec![ColumnDef::pinned("P")];
    columns.extend(cols(&["A", "B", "C"]));

    let outcome = move_one_position(&columns, "C", MoveDirection::Left);

    assert_eq!(names(&outcome.columns), ["P", "A", "C", "B"]);
    assert_partitioned(&outcome.columns);
}

#[test]
fn test_move_locked_selection_is_noop() {
    let mut columns = vec![ColumnDef::pinned("P")];
    columns.extend(cols(&["A", "B"]));

    for direction in [MoveDirection::Left, MoveDirection::Right] {
        let outcome = move_one_position(&columns, "P", direction);
        assert_eq!(names(&outcome.columns), ["P", "A", "B"]);
        assert!(outcome.persist.is_none());
    }
}

#[test]
fn test_move_unknown_selection_is_noop() {
    let columns = cols(&["A", "B"]);
    let outcome = move_one_position(&columns, "missing", MoveDirection::Right);

    assert_eq!(names(&outcome.columns), ["A", "B"]);
    assert!(outcome.persist.is_none());
}

#[test]
fn test_left_then_right_restores_order() {
    let columns = cols(&["A", "B", "C", "D"]);

    let moved = move_one_position(&columns, "C", MoveDirection::Left);
    let restored = move_one_position(&moved.columns, "C", MoveDirection::Right);

    assert_eq!(names(&restored.columns), names(&columns));
}

// ============================================================================
// move_to_edge
// ============================================================================

#[test]
fn test_move_to_front_places_after_locked_prefix() {
    let mut columns = vec![ColumnDef::pinned("P")];
    columns.extend(cols(&["A", "B", "C"]));

    let outcome = move_to_edge(&columns, "C", MoveEdge::Front);

    assert_eq!(names(&outcome.columns), ["P", "C", "A", "B"]);
    assert_eq!(
        outcome.persist,
        Some(PersistSpec::ColumnPosition {
            col: "C".to_string(),
            action: PositionAction::Front,
        })
    );
    assert_partitioned(&outcome.columns);
}

#[test]
fn test_move_to_front_from_any_position() {
    for selected in ["A", "B", "C"] {
        let columns = cols(&["A", "B", "C"]);
        let outcome = move_to_edge(&columns, selected, MoveEdge::Front);
        assert_eq!(outcome.columns[0].name, selected);
    }
}

#[test]
fn test_move_to_back() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = move_to_edge(&columns, "A", MoveEdge::Back);

    assert_eq!(names(&outcome.columns), ["B", "C", "A"]);
    assert_eq!(
        outcome.persist,
        Some(PersistSpec::ColumnPosition {
            col: "A".to_string(),
            action: PositionAction::Back,
        })
    );
}

#[test]
fn test_move_locked_selection_to_edge_is_noop() {
    let mut columns = vec![ColumnDef::pinned("P")];
    columns.extend(cols(&["A", "B"]));

    let outcome = move_to_edge(&columns, "P", MoveEdge::Back);

    assert_eq!(names(&outcome.columns), ["P", "A", "B"]);
    assert!(outcome.persist.is_none());
}

// ============================================================================
// lock_columns
// ============================================================================

#[test]
fn test_lock_single_column() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = lock_columns(&columns, &["C".to_string()]);

    assert_eq!(names(&outcome.columns), ["C", "A", "B"]);
    assert!(outcome.columns[0].locked);
    assert!(!outcome.columns[1].locked);
    assert_eq!(outcome.fixed_column_count, Some(1));
    assert_eq!(
        outcome.persist,
        Some(PersistSpec::LockedState {
            col: "C".to_string(),
            action: LockAction::Lock,
        })
    );
}

#[test]
fn test_lock_two_columns_preserves_selection_order() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = lock_columns(&columns, &["A".to_string(), "B".to_string()]);

    assert_eq!(names(&outcome.columns), ["A", "B", "C"]);
    assert!(outcome.columns[0].locked && outcome.columns[1].locked);
    assert_eq!(outcome.fixed_column_count, Some(2));
    assert_partitioned(&outcome.columns);
}

#[test]
fn test_lock_appends_after_existing_prefix() {
    let mut columns = vec![ColumnDef::pinned("P")];
    columns.extend(cols(&["A", "B"]));

    let outcome = lock_columns(&columns, &["B".to_string()]);

    assert_eq!(names(&outcome.columns), ["P", "B", "A"]);
    assert_eq!(outcome.fixed_column_count, Some(2));
}

#[test]
fn test_lock_transmits_only_first_selected_name() {
    let columns = cols(&["A", "B", "C"]);
    let outcome = lock_columns(&columns, &["B".to_string(), "C".to_string()]);

    assert_eq!(
        outcome.persist,
        Some(PersistSpec::LockedState {
            col: "B".to_string(),
            action: LockAction::Lock,
        })
    );
}

#[test]
fn test_lock_already_locked_column_does_not_duplicate() {
    let mut columns = vec![ColumnDef::pinned("P")];
    columns.extend(cols(&["A"]));

    let outcome = lock_columns(&columns, &["P".to_string()]);

    assert_eq!(names(&outcome.columns), ["P", "A"]);
    assert_eq!(outcome.fixed_column_count, Some(1));
}

// ============================================================================
// unlock_columns
// ============================================================================

#[test]
fn test_unlock_every_locked_column() {
    let columns = vec![
        ColumnDef::pinned("P"),
        ColumnDef::pinned("Q"),
        ColumnDef::new("A"),
    ];
    let outcome = unlock_columns(&columns, &["P".to_string(), "Q".to_string()]);

    assert!(outcome.columns.iter().all(|c| !c.locked));
    assert_eq!(outcome.fixed_column_count, Some(0));
}

#[test]
fn test_unlocked_columns_land_ahead_of_previously_unlocked() {
    let columns = vec![
        ColumnDef::pinned("P"),
        ColumnDef::pinned("Q"),
        ColumnDef::new("A"),
        ColumnDef::new("B"),
    ];
    let outcome = unlock_columns(&columns, &["Q".to_string()]);

    assert_eq!(names(&outcome.columns), ["P", "Q", "A", "B"]);
    assert!(outcome.columns[0].locked);
    assert!(!outcome.columns[1].locked);
    assert_eq!(outcome.fixed_column_count, Some(1));
    assert_partitioned(&outcome.columns);
}

#[test]
fn test_unlock_transmits_only_first_selected_name() {
    let columns = vec![ColumnDef::pinned("P"), ColumnDef::pinned("Q")];
    let outcome = unlock_columns(&columns, &["Q".to_string(), "P".to_string()]);

    assert_eq!(
        outcome.persist,
        Some(PersistSpec::LockedState {
            col: "Q".to_string(),
            action: LockAction::Unlock,
        })
    );
}

#[test]
fn test_lock_then_unlock_leaves_no_locked_columns() {
    let columns = cols(&["A", "B", "C"]);

    let locked = lock_columns(&columns, &["B".to_string()]);
    assert_eq!(locked.fixed_column_count, Some(1));

    let unlocked = unlock_columns(&locked.columns, &["B".to_string()]);
    assert!(unlocked.columns.iter().all(|c| !c.locked));
    assert_eq!(unlocked.fixed_column_count, Some(0));
}

#[test]
fn test_operations_do_not_touch_other_attributes() {
    let mut column = ColumnDef::new("A");
    column.dtype = Some("float64".to_string());
    column.width = Some(120);
    let columns = vec![column, ColumnDef::new("B")];

    let outcome = lock_columns(&columns, &["A".to_string()]);

    assert_eq!(outcome.columns[0].dtype.as_deref(), Some("float64"));
    assert_eq!(outcome.columns[0].width, Some(120));
    assert!(outcome.columns[0].locked);
}
