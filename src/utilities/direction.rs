use std::fmt;
use std::str::FromStr;

use crate::utilities::call::Call;
use crate::utilities::error::RequestError;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Idle,
    Up,
}

impl Direction {
    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Idle => String::from("idle"),
            Direction::Up => String::from("up"),
        }
    }

    /// Floor delta of a single hop in this direction.
    pub fn offset(self) -> i32 {
        match self {
            Direction::Down => -1,
            Direction::Idle => 0,
            Direction::Up => 1,
        }
    }

    pub fn to_call(self) -> Option<Call> {
        match self {
            Direction::Up => Some(Call::HallUp),
            Direction::Down => Some(Call::HallDown),
            Direction::Idle => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for Direction {
    type Err = RequestError;

    /// Only `up` and `down` name a travel direction; anything else is refused
    /// rather than silently read as a down call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(RequestError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_up_and_down_case_insensitively() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" DOWN ".parse::<Direction>().unwrap(), Direction::Down);
    }

    #[test]
    fn rejects_anything_else() {
        assert_eq!(
            "upp".parse::<Direction>(),
            Err(RequestError::UnknownDirection(String::from("upp")))
        );
        assert!("idle".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn hall_call_for_direction() {
        assert_eq!(Direction::Up.to_call(), Some(Call::HallUp));
        assert_eq!(Direction::Down.to_call(), Some(Call::HallDown));
        assert_eq!(Direction::Idle.to_call(), None);
    }
}
