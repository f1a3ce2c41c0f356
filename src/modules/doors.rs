//! ----- DOORS MODULE -----
//! Door cycle of the car: Closed -> Opening -> Open -> (dwell) -> Closing ->
//! Closed. Opening fulfills whatever the stop satisfies.

use crate::modules::fsm::Fsm;
use crate::utilities::direction::Direction;
use crate::utilities::elevator_status::DoorState;
use crate::utilities::event::ElevatorEvent;

impl Fsm {
    /// Opens, dwells and closes again.
    pub(crate) fn cycle_doors(&self) {
        self.open_doors();
        if self.settings.door_dwell_ms > 0 {
            self.timer.sleep(self.settings.door_dwell_time());
        }
        self.close_doors();
    }

    pub(crate) fn open_doors(&self) {
        let floor = {
            let mut status = self.status.lock();
            if status.doors != DoorState::Closed {
                return;
            }
            status.doors = DoorState::Opening;
            status.floor
        };
        self.emit(ElevatorEvent::DoorsOpening { floor });
        self.timer.sleep(self.settings.door_operate_time());

        let mut status = self.status.lock();
        status.doors = DoorState::Open;
        self.emit(ElevatorEvent::DoorsOpened { floor });

        // With nothing left beyond this floor the car is at rest here and
        // picks up callers for either direction. A reversal is left to the
        // next iteration: the stop is served in the arrival direction.
        if status.next_direction() == Direction::Idle {
            self.set_direction(&mut status, Direction::Idle);
        }
        for request in status.serve_requests_here() {
            self.emit(ElevatorEvent::RequestServed(request));
        }
    }

    pub(crate) fn close_doors(&self) {
        let floor = {
            let mut status = self.status.lock();
            if status.doors != DoorState::Open {
                return;
            }
            status.doors = DoorState::Closing;
            status.floor
        };
        self.emit(ElevatorEvent::DoorsClosing { floor });
        self.timer.sleep(self.settings.door_operate_time());

        self.status.lock().doors = DoorState::Closed;
        self.emit(ElevatorEvent::DoorsClosed { floor });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossbeam_channel::{unbounded, Receiver};
    use parking_lot::Mutex;

    use crate::modules::fsm::Fsm;
    use crate::utilities::call::Call;
    use crate::utilities::config::ElevatorSettings;
    use crate::utilities::direction::Direction;
    use crate::utilities::elevator_status::{DoorState, ElevatorStatus};
    use crate::utilities::event::ElevatorEvent;
    use crate::utilities::request::Request;
    use crate::utilities::timer::VirtualTimer;

    fn fsm(door_dwell_ms: u64) -> (Fsm, Receiver<ElevatorEvent>) {
        let settings = ElevatorSettings {
            min_floor: 1,
            max_floor: 5,
            door_operate_ms: 100,
            door_dwell_ms,
            ..Default::default()
        };
        let status = Arc::new(Mutex::new(ElevatorStatus::new(&settings)));
        let (events_tx, events_rx) = unbounded();
        (Fsm::new(settings, status, Arc::new(VirtualTimer::new()), events_tx), events_rx)
    }

    #[test]
    fn full_cycle_takes_operate_dwell_operate() {
        let (fsm, events_rx) = fsm(500);
        fsm.cycle_doors();
        assert_eq!(fsm.timer.elapsed(), Duration::from_millis(700));
        assert_eq!(fsm.status.lock().doors, DoorState::Closed);
        let events: Vec<ElevatorEvent> = events_rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ElevatorEvent::DoorsOpening { floor: 1 },
                ElevatorEvent::DoorsOpened { floor: 1 },
                ElevatorEvent::DoorsClosing { floor: 1 },
                ElevatorEvent::DoorsClosed { floor: 1 },
            ]
        );
    }

    #[test]
    fn zero_dwell_skips_the_wait() {
        let (fsm, _events_rx) = fsm(0);
        fsm.cycle_doors();
        assert_eq!(fsm.timer.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn open_and_close_are_no_ops_when_already_there() {
        let (fsm, events_rx) = fsm(0);
        fsm.close_doors();
        fsm.status.lock().doors = DoorState::Open;
        fsm.open_doors();
        fsm.status.lock().doors = DoorState::Opening;
        fsm.open_doors();
        fsm.close_doors();
        assert!(events_rx.try_iter().next().is_none());
        assert_eq!(fsm.timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn opening_clears_panel_and_matching_call_only() {
        let (fsm, events_rx) = fsm(0);
        {
            let mut status = fsm.status.lock();
            status.floor = 3;
            status.direction = Direction::Up;
            status.requests.add_order(3, Call::Cab);
            status.requests.add_order(3, Call::HallUp);
            status.requests.add_order(3, Call::HallDown);
            status.requests.add_order(5, Call::Cab);
        }
        fsm.open_doors();
        let status = fsm.status.lock().clone();
        assert_eq!(status.doors, DoorState::Open);
        assert_eq!(status.requests.cab_requests(), vec![5]);
        assert_eq!(status.requests.hall_calls().get(&3), Some(&vec![Direction::Down]));
        let served: Vec<ElevatorEvent> = events_rx
            .try_iter()
            .filter(|e| matches!(e, ElevatorEvent::RequestServed(_)))
            .collect();
        assert_eq!(
            served,
            vec![
                ElevatorEvent::RequestServed(Request::cab(3)),
                ElevatorEvent::RequestServed(Request { floor: 3, call: Call::HallUp }),
            ]
        );
    }

    #[test]
    fn opening_before_a_reversal_serves_the_arrival_direction() {
        let (fsm, _events_rx) = fsm(0);
        {
            let mut status = fsm.status.lock();
            status.floor = 3;
            status.direction = Direction::Up;
            status.requests.add_order(3, Call::HallUp);
            status.requests.add_order(3, Call::HallDown);
            status.requests.add_order(1, Call::Cab);
        }
        fsm.open_doors();
        let status = fsm.status.lock().clone();
        assert_eq!(status.direction, Direction::Up);
        assert_eq!(status.requests.hall_calls().get(&3), Some(&vec![Direction::Down]));
        assert_eq!(status.requests.cab_requests(), vec![1]);
    }

    #[test]
    fn opening_at_rest_clears_every_call() {
        let (fsm, _events_rx) = fsm(0);
        {
            let mut status = fsm.status.lock();
            status.floor = 2;
            status.direction = Direction::Up;
            status.requests.add_order(2, Call::HallUp);
            status.requests.add_order(2, Call::HallDown);
        }
        fsm.open_doors();
        let status = fsm.status.lock().clone();
        assert_eq!(status.direction, Direction::Idle);
        assert!(status.requests.is_empty());
    }
}
