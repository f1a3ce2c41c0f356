use std::fmt;

use crate::utilities::call::Call;
use crate::utilities::config::ElevatorSettings;
use crate::utilities::direction::Direction;
use crate::utilities::error::RequestError;
use crate::utilities::Floor;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    pub floor: Floor,
    pub call: Call,
}

impl Request {
    pub fn cab(floor: Floor) -> Self {
        Request { floor, call: Call::Cab }
    }

    /// Hall call at `floor` towards `direction`. `Idle` does not name a
    /// direction of travel and is refused.
    pub fn hall(floor: Floor, direction: Direction) -> Result<Self, RequestError> {
        match direction.to_call() {
            Some(call) => Ok(Request { floor, call }),
            None => Err(RequestError::NoHallDirection(direction)),
        }
    }

    /// Checks the request against the shaft of `settings`.
    pub fn validate(&self, settings: &ElevatorSettings) -> Result<(), RequestError> {
        if !settings.contains(self.floor) {
            return Err(RequestError::FloorOutOfRange {
                floor: self.floor,
                min_floor: settings.min_floor,
                max_floor: settings.max_floor,
            });
        }
        match self.call {
            Call::HallUp if self.floor == settings.max_floor => Err(RequestError::NoFloorAbove(self.floor)),
            Call::HallDown if self.floor == settings.min_floor => Err(RequestError::NoFloorBelow(self.floor)),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} request at floor {}", self.call, self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ElevatorSettings {
        ElevatorSettings { min_floor: 1, max_floor: 5, ..Default::default() }
    }

    #[test]
    fn accepts_floors_inside_the_shaft() {
        let settings = settings();
        for floor in 1..=5 {
            assert_eq!(Request::cab(floor).validate(&settings), Ok(()));
        }
    }

    #[test]
    fn rejects_floors_outside_the_shaft() {
        let settings = settings();
        for floor in [-3, 0, 6, 100] {
            assert_eq!(
                Request::cab(floor).validate(&settings),
                Err(RequestError::FloorOutOfRange { floor, min_floor: 1, max_floor: 5 })
            );
        }
    }

    #[test]
    fn rejects_impossible_hall_calls() {
        let settings = settings();
        let up_from_top = Request::hall(5, Direction::Up).unwrap();
        let down_from_bottom = Request::hall(1, Direction::Down).unwrap();
        assert_eq!(up_from_top.validate(&settings), Err(RequestError::NoFloorAbove(5)));
        assert_eq!(down_from_bottom.validate(&settings), Err(RequestError::NoFloorBelow(1)));
        assert_eq!(Request::hall(5, Direction::Down).unwrap().validate(&settings), Ok(()));
        assert_eq!(Request::hall(1, Direction::Up).unwrap().validate(&settings), Ok(()));
    }

    #[test]
    fn idle_is_not_a_hall_direction() {
        assert_eq!(
            Request::hall(3, Direction::Idle),
            Err(RequestError::NoHallDirection(Direction::Idle))
        );
    }
}
