use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One grid column.
///
/// `name` is unique within a dataset. `locked` pins the column to the fixed
/// left region; it is the only field the arrangement engine ever mutates.
/// Display and format attributes the engine does not interpret ride along
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_visible() -> bool {
    true
}

impl ColumnDef {
    pub fn new(name: &str) -> Self {
        ColumnDef {
            name: name.to_string(),
            locked: false,
            dtype: None,
            visible: true,
            width: None,
            extra: Map::new(),
        }
    }

    pub fn pinned(name: &str) -> Self {
        ColumnDef {
            locked: true,
            ..Self::new(name)
        }
    }
}

/// One-step move direction within the unlocked region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Edge target for a whole-region move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEdge {
    Front,
    Back,
}

/// Wire form of the `action` parameter on `update-column-position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionAction {
    Front,
    Back,
    Left,
    Right,
}

impl PositionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionAction::Front => "front",
            PositionAction::Back => "back",
            PositionAction::Left => "left",
            PositionAction::Right => "right",
        }
    }
}

impl From<MoveDirection> for PositionAction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Left => PositionAction::Left,
            MoveDirection::Right => PositionAction::Right,
        }
    }
}

impl From<MoveEdge> for PositionAction {
    fn from(edge: MoveEdge) -> Self {
        match edge {
            MoveEdge::Front => PositionAction::Front,
            MoveEdge::Back => PositionAction::Back,
        }
    }
}

/// Wire form of the `action` parameter on `update-locked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    Lock,
    Unlock,
}

impl LockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockAction::Lock => "lock",
            LockAction::Unlock => "unlock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }
}

/// Engine the backend uses to evaluate custom filter queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEngine {
    #[default]
    Python,
    Numexpr,
}

impl QueryEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryEngine::Python => "python",
            QueryEngine::Numexpr => "numexpr",
        }
    }
}

/// Format specification persisted for a column by `update-formats`.
///
/// `fmt` is the format string or structured format object understood by
/// the backend; anything else the UI attaches travels in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnFormat {
    pub fmt: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
