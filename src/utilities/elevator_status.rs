use std::fmt;

use crate::utilities::config::ElevatorSettings;
use crate::utilities::direction::Direction;
use crate::utilities::request::Request;
use crate::utilities::requests::Requests;
use crate::utilities::Floor;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum DoorState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl DoorState {
    pub fn as_string(&self) -> String {
        match self {
            DoorState::Closed => String::from("closed"),
            DoorState::Opening => String::from("opening"),
            DoorState::Open => String::from("open"),
            DoorState::Closing => String::from("closing"),
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Everything known about the car. The control loop owns `floor`,
/// `direction` and `doors`; callers only ever add to `requests`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorStatus {
    pub requests: Requests,
    pub floor: Floor,
    pub direction: Direction,
    pub doors: DoorState,
}

impl ElevatorStatus {
    /// A parked car at the bottom floor with its doors closed.
    pub fn new(settings: &ElevatorSettings) -> Self {
        ElevatorStatus {
            requests: Requests::new(settings.min_floor, settings.max_floor),
            floor: settings.min_floor,
            direction: Direction::Idle,
            doors: DoorState::Closed,
        }
    }

    /// Anything but fully closed counts as open for movement purposes.
    pub fn doors_open(&self) -> bool {
        self.doors != DoorState::Closed
    }

    pub fn should_stop(&self) -> bool {
        self.requests.should_stop(self.floor, self.direction)
    }

    pub fn requests_at_this_floor(&self) -> bool {
        self.requests.requests_at_floor(self.floor)
    }

    /// Whether the car should cycle its doors here before doing anything
    /// else this iteration.
    pub fn should_serve_here(&self) -> bool {
        match self.direction {
            Direction::Idle => self.requests_at_this_floor(),
            Direction::Up | Direction::Down => self.should_stop(),
        }
    }

    pub fn next_direction(&self) -> Direction {
        self.requests.next_direction(self.floor, self.direction)
    }

    pub fn serve_requests_here(&mut self) -> Vec<Request> {
        self.requests.serve_requests_here(self.floor, self.direction)
    }
}
