use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::utilities::call::Call;
use crate::utilities::direction::Direction;
use crate::utilities::request::Request;
use crate::utilities::Floor;

/// Outstanding demand of one car: a floor × call grid covering
/// `[min_floor, max_floor]`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Requests {
    min_floor: Floor,
    requests: Vec<Vec<bool>>,
}

impl Requests {
    pub fn new(min_floor: Floor, max_floor: Floor) -> Self {
        let num_floors = usize::try_from(i64::from(max_floor) - i64::from(min_floor) + 1).unwrap_or(0);
        Requests {
            min_floor,
            requests: vec![vec![false; Call::num_calls()]; num_floors],
        }
    }

    pub fn max_floor(&self) -> Floor {
        self.min_floor.saturating_add(self.requests.len() as Floor - 1)
    }

    pub fn floors(&self) -> RangeInclusive<Floor> {
        self.min_floor..=self.max_floor()
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.index(floor).is_some()
    }

    fn index(&self, floor: Floor) -> Option<usize> {
        let index = usize::try_from(i64::from(floor) - i64::from(self.min_floor)).ok()?;
        (index < self.requests.len()).then_some(index)
    }

    /// Marks the request as outstanding. Returns false if it already was, or
    /// if the floor is not in the shaft.
    pub fn add_order(&mut self, floor: Floor, call: Call) -> bool {
        match self.index(floor) {
            Some(index) => {
                let newly_added = !self.requests[index][call as usize];
                self.requests[index][call as usize] = true;
                newly_added
            },
            None => false,
        }
    }

    /// Returns whether there was anything to clear.
    pub fn clear_request(&mut self, call: Call, floor: Floor) -> bool {
        match self.index(floor) {
            Some(index) => std::mem::replace(&mut self.requests[index][call as usize], false),
            None => false,
        }
    }

    pub fn has_request(&self, floor: Floor, call: Call) -> bool {
        self.index(floor)
            .map(|index| self.requests[index][call as usize])
            .unwrap_or(false)
    }

    pub fn cab_request_at_floor(&self, floor: Floor) -> bool {
        self.has_request(floor, Call::Cab)
    }

    pub fn requests_in_direction_at_this_floor(&self, floor: Floor, direction: Direction) -> bool {
        match direction.to_call() {
            Some(call) => self.has_request(floor, call),
            None => false,
        }
    }

    pub fn requests_at_floor(&self, floor: Floor) -> bool {
        Call::iter().any(|call| self.has_request(floor, call))
    }

    pub fn is_empty(&self) -> bool {
        self.requests.iter().all(|calls| calls.iter().all(|c| !c))
    }

    /// Closest floor strictly beyond `floor` in `direction` that has demand.
    pub fn nearest_in_direction(&self, floor: Floor, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up => (floor..=self.max_floor()).skip(1).find(|f| self.requests_at_floor(*f)),
            Direction::Down => (self.min_floor..floor).rev().find(|f| self.requests_at_floor(*f)),
            Direction::Idle => None,
        }
    }

    /// Collective dispatch: keep going while there is demand ahead, then
    /// reverse; from rest head for the nearer demand, ties going up.
    pub fn next_direction(&self, floor: Floor, last_direction: Direction) -> Direction {
        let above = self.nearest_in_direction(floor, Direction::Up);
        let below = self.nearest_in_direction(floor, Direction::Down);
        match (last_direction, above, below) {
            (_, None, None) => Direction::Idle,
            (Direction::Up, Some(_), _) | (Direction::Down, Some(_), None) => Direction::Up,
            (Direction::Down, _, Some(_)) | (Direction::Up, None, Some(_)) => Direction::Down,
            (Direction::Idle, Some(up), Some(down)) => {
                if up - floor <= floor - down { Direction::Up } else { Direction::Down }
            },
            (Direction::Idle, Some(_), None) => Direction::Up,
            (Direction::Idle, None, Some(_)) => Direction::Down,
        }
    }

    /// Whether a car heading `direction` has a reason to open at `floor`.
    pub fn should_stop(&self, floor: Floor, direction: Direction) -> bool {
        self.cab_request_at_floor(floor)
            || self.requests_in_direction_at_this_floor(floor, direction)
    }

    /// Clears what a door opening at `floor` fulfills and returns it. An idle
    /// car takes every hall call at the floor, a moving one only the call in
    /// its own direction.
    pub fn serve_requests_here(&mut self, floor: Floor, direction: Direction) -> Vec<Request> {
        let mut served = Vec::new();
        if self.clear_request(Call::Cab, floor) {
            served.push(Request { floor, call: Call::Cab });
        }
        let hall_calls: Vec<Call> = match direction.to_call() {
            Some(call) => vec![call],
            None => Call::iter_hall().collect(),
        };
        for call in hall_calls {
            if self.clear_request(call, floor) {
                served.push(Request { floor, call });
            }
        }
        served
    }

    /// Floors with an outstanding panel press, ascending.
    pub fn cab_requests(&self) -> Vec<Floor> {
        self.floors().filter(|f| self.cab_request_at_floor(*f)).collect()
    }

    /// Hall calls keyed by floor. Floors without a call have no entry.
    pub fn hall_calls(&self) -> BTreeMap<Floor, Vec<Direction>> {
        let mut hall_calls = BTreeMap::new();
        for floor in self.floors() {
            let directions: Vec<Direction> = Call::iter_hall()
                .filter(|call| self.has_request(floor, *call))
                .filter_map(Call::direction)
                .collect();
            if !directions.is_empty() {
                hall_calls.insert(floor, directions);
            }
        }
        hall_calls
    }

    pub fn get_requests_at_floor(&self, floor: Floor) -> Vec<bool> {
        match self.index(floor) {
            Some(index) => self.requests[index].clone(),
            None => vec![false; Call::num_calls()],
        }
    }
}
