use std::fmt;

use tracing::{debug, error, info, warn};

use crate::utilities::direction::Direction;
use crate::utilities::error::{InvariantViolation, RequestError};
use crate::utilities::request::Request;
use crate::utilities::Floor;

/// Everything the controller reports about itself, in the order it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ElevatorEvent {
    Started,
    Stopped,
    RequestAccepted(Request),
    RequestRejected(RequestError),
    DirectionChanged { from: Direction, to: Direction },
    Departing { from: Floor, to: Floor },
    Arrived { floor: Floor },
    Passed { floor: Floor },
    DoorsOpening { floor: Floor },
    DoorsOpened { floor: Floor },
    DoorsClosing { floor: Floor },
    DoorsClosed { floor: Floor },
    RequestServed(Request),
    InvariantViolation(InvariantViolation),
}

impl ElevatorEvent {
    pub fn log(&self, name: &str) {
        match self {
            ElevatorEvent::RequestRejected(_) => warn!(elevator = name, "{}", self),
            ElevatorEvent::InvariantViolation(_) => error!(elevator = name, "{}", self),
            ElevatorEvent::Passed { .. } | ElevatorEvent::Departing { .. } => debug!(elevator = name, "{}", self),
            _ => info!(elevator = name, "{}", self),
        }
    }
}

impl fmt::Display for ElevatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorEvent::Started => write!(f, "control loop started"),
            ElevatorEvent::Stopped => write!(f, "control loop stopped"),
            ElevatorEvent::RequestAccepted(request) => write!(f, "accepted {}", request),
            ElevatorEvent::RequestRejected(reason) => write!(f, "rejected request: {}", reason),
            ElevatorEvent::DirectionChanged { from, to } => write!(f, "direction {} -> {}", from, to),
            ElevatorEvent::Departing { from, to } => write!(f, "moving {} -> {}", from, to),
            ElevatorEvent::Arrived { floor } => write!(f, "arrived at floor {}", floor),
            ElevatorEvent::Passed { floor } => write!(f, "passing floor {}", floor),
            ElevatorEvent::DoorsOpening { floor } => write!(f, "opening doors at floor {}", floor),
            ElevatorEvent::DoorsOpened { floor } => write!(f, "doors open at floor {}", floor),
            ElevatorEvent::DoorsClosing { floor } => write!(f, "closing doors at floor {}", floor),
            ElevatorEvent::DoorsClosed { floor } => write!(f, "doors closed at floor {}", floor),
            ElevatorEvent::RequestServed(request) => write!(f, "served {}", request),
            ElevatorEvent::InvariantViolation(violation) => write!(f, "invariant violated: {}", violation),
        }
    }
}
