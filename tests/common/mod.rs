#![allow(dead_code)]

use std::sync::Arc;

use crossbeam_channel::Receiver;
use elevator::{Direction, Elevator, ElevatorEvent, ElevatorSettings, VirtualTimer};

pub fn settings() -> ElevatorSettings {
    ElevatorSettings {
        name: String::from("test"),
        min_floor: 1,
        max_floor: 5,
        travel_time_ms: 1000,
        door_operate_ms: 200,
        door_dwell_ms: 500,
        idle_poll_ms: 250,
    }
}

pub fn elevator() -> (Elevator, Receiver<ElevatorEvent>, Arc<VirtualTimer>) {
    elevator_with(settings())
}

pub fn elevator_with(settings: ElevatorSettings) -> (Elevator, Receiver<ElevatorEvent>, Arc<VirtualTimer>) {
    let timer = Arc::new(VirtualTimer::new());
    let (elevator, events_rx) = Elevator::init(settings, timer.clone()).unwrap();
    (elevator, events_rx, timer)
}

/// Steps until the car rests with no demand left.
pub fn run_until_idle(elevator: &Elevator) {
    for _ in 0..200 {
        elevator.step().expect("no loop thread should be running");
        let status = elevator.status();
        if status.direction == Direction::Idle && status.requests.is_empty() && !status.doors_open() {
            return;
        }
    }
    panic!("elevator never came to rest: {:?}", elevator.status());
}

/// Movement, door and fulfillment events, without the registration noise.
pub fn motion(events_rx: &Receiver<ElevatorEvent>) -> Vec<ElevatorEvent> {
    events_rx
        .try_iter()
        .filter(|event| {
            !matches!(
                event,
                ElevatorEvent::RequestAccepted(_)
                    | ElevatorEvent::RequestRejected(_)
                    | ElevatorEvent::Started
                    | ElevatorEvent::Stopped
            )
        })
        .collect()
}
