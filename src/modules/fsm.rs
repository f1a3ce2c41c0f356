//! ----- FSM MODULE -----
//! This module is the control loop driving the car. Each iteration decides a
//! direction from the outstanding demand, serves the current floor if there
//! is reason to, and otherwise makes a single floor-to-floor hop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::Mutex;

use crate::utilities::config::ElevatorSettings;
use crate::utilities::direction::Direction;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::error::InvariantViolation;
use crate::utilities::event::ElevatorEvent;
use crate::utilities::timer::Timer;

pub struct Fsm {
    pub(crate) settings: ElevatorSettings,
    pub(crate) status: Arc<Mutex<ElevatorStatus>>,
    pub(crate) timer: Arc<dyn Timer>,
    events_tx: Sender<ElevatorEvent>,
    // held for a whole iteration so two callers never drive the car at once
    stepping: Mutex<()>,
}

impl Fsm {
    pub fn new(
        settings: ElevatorSettings,
        status: Arc<Mutex<ElevatorStatus>>,
        timer: Arc<dyn Timer>,
        events_tx: Sender<ElevatorEvent>,
    ) -> Self {
        Fsm { settings, status, timer, events_tx, stepping: Mutex::new(()) }
    }

    /// Logs the event and hands it to whoever listens. A dropped receiver
    /// only means nobody is watching.
    pub(crate) fn emit(&self, event: ElevatorEvent) {
        event.log(&self.settings.name);
        let _ = self.events_tx.send(event);
    }

    /// Steps until `running` is cleared. The flag is only looked at between
    /// iterations, so a hop or door cycle in flight always completes.
    pub fn run(&self, running: &AtomicBool) {
        self.emit(ElevatorEvent::Started);
        while running.load(Ordering::SeqCst) {
            self.step();
        }
        self.emit(ElevatorEvent::Stopped);
    }

    /// One pass of the control loop. Returns the direction decided at its
    /// start.
    pub fn step(&self) -> Direction {
        let _stepping = self.stepping.lock();
        let (direction, serve_here) = {
            let mut status = self.status.lock();
            let direction = status.next_direction();
            self.set_direction(&mut status, direction);
            (direction, status.should_serve_here())
        };

        if serve_here {
            self.cycle_doors();
            return direction;
        }
        if direction == Direction::Idle {
            self.timer.sleep(self.settings.idle_poll_time());
            return direction;
        }

        if self.status.lock().doors_open() {
            self.close_doors();
        }
        self.move_one_floor(direction);
        direction
    }

    pub(crate) fn set_direction(&self, status: &mut ElevatorStatus, direction: Direction) {
        if status.direction != direction {
            let from = status.direction;
            status.direction = direction;
            self.emit(ElevatorEvent::DirectionChanged { from, to: direction });
        }
    }

    fn move_one_floor(&self, direction: Direction) {
        let (from, target) = {
            let mut status = self.status.lock();
            let floor = status.floor;
            if status.doors_open() {
                self.emit(ElevatorEvent::InvariantViolation(
                    InvariantViolation::DoorsOpenDuringMove { floor },
                ));
                return;
            }
            match floor.checked_add(direction.offset()).filter(|target| self.settings.contains(*target)) {
                Some(target) => (floor, target),
                None => {
                    self.set_direction(&mut status, Direction::Idle);
                    self.emit(ElevatorEvent::InvariantViolation(
                        InvariantViolation::TargetOutOfRange { floor, direction },
                    ));
                    return;
                },
            }
        };

        self.emit(ElevatorEvent::Departing { from, to: target });
        self.timer.sleep(self.settings.travel_time());

        let should_stop = {
            let mut status = self.status.lock();
            status.floor = target;
            status.should_stop()
        };
        if should_stop {
            self.emit(ElevatorEvent::Arrived { floor: target });
            self.cycle_doors();
        } else {
            self.emit(ElevatorEvent::Passed { floor: target });
        }
    }
}
