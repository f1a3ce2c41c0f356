//! Error types for the elevator controller.
//!
//! Request errors are policy rejections: they are logged and published as
//! events but never handed back to whoever pressed the button. Invariant
//! violations mean the control loop reached a state the direction decision
//! should have ruled out.

use thiserror::Error;

use crate::utilities::direction::Direction;
use crate::utilities::Floor;

/// Reasons a panel press or hall call is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("floor {floor} is outside [{min_floor}, {max_floor}]")]
    FloorOutOfRange {
        floor: Floor,
        min_floor: Floor,
        max_floor: Floor,
    },

    #[error("no floor above {0}, cannot call upwards from the top floor")]
    NoFloorAbove(Floor),

    #[error("no floor below {0}, cannot call downwards from the bottom floor")]
    NoFloorBelow(Floor),

    #[error("a hall call needs a direction of travel, got {0}")]
    NoHallDirection(Direction),

    #[error("unrecognised call direction {0:?}, expected \"up\" or \"down\"")]
    UnknownDirection(String),
}

/// Internal-consistency failures caught by the movement guards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("refused to move from floor {floor} with doors not closed")]
    DoorsOpenDuringMove { floor: Floor },

    #[error("hop {direction} from floor {floor} would leave the shaft")]
    TargetOutOfRange { floor: Floor, direction: Direction },
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_floor ({min_floor}) must be below max_floor ({max_floor})")]
    InvalidFloorRange { min_floor: Floor, max_floor: Floor },

    #[error("shaft spans {floors} floors, at most {max_floors} are supported")]
    TooManyFloors { floors: i64, max_floors: i64 },

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}
