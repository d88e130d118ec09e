use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::CellCategory;
use crate::interventions::{InterventionId, PlacementId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    /// The action succeeded but produced a warning the caller should see
    /// (e.g. a factor set outside its usual range).
    SuccessWithWarning(String),
    /// An intervention was placed under this id.
    Placed(PlacementId),
    Error(ActionError),
}

impl ActionResult {
    /// Returns `true` for every variant except `Error`.
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Error(_))
    }

    /// Extract the warning string if present.
    pub fn warning(&self) -> Option<&str> {
        match self {
            ActionResult::SuccessWithWarning(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            ActionResult::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ActionError> for ActionResult {
    fn from(err: ActionError) -> Self {
        ActionResult::Error(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionError {
    /// The referenced cell is not on the grid.
    OutOfBounds,
    NotSuitable {
        intervention: InterventionId,
        category: CellCategory,
    },
    NotFound,
    InvalidParameter(String),
    /// There was no deferred recalculation to cancel.
    NothingPending,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::OutOfBounds => write!(f, "cell is outside the grid"),
            ActionError::NotSuitable {
                intervention,
                category,
            } => write!(
                f,
                "{} is not suitable for {category} cells",
                intervention.entry().name
            ),
            ActionError::NotFound => write!(f, "not found"),
            ActionError::InvalidParameter(msg) => write!(f, "{msg}"),
            ActionError::NothingPending => write!(f, "no recalculation is pending"),
        }
    }
}

impl std::error::Error for ActionError {}
