use std::fmt;

use crate::utilities::direction::Direction;

/// Kind of demand registered at a floor. `Cab` is a press on the panel inside
/// the car, the hall variants are calls from a landing.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
    Cab = 2,
}

impl Call {
    pub fn num_calls() -> usize {
        3
    }

    pub fn iter() -> impl Iterator<Item = Call> {
        [Call::HallUp, Call::HallDown, Call::Cab].iter().copied()
    }

    pub fn iter_hall() -> impl Iterator<Item = Call> {
        [Call::HallUp, Call::HallDown].iter().copied()
    }

    /// Travel direction a hall call asks for.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Call::HallUp => Some(Direction::Up),
            Call::HallDown => Some(Direction::Down),
            Call::Cab => None,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("hall up"),
            Call::HallDown => String::from("hall down"),
            Call::Cab => String::from("panel"),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}
