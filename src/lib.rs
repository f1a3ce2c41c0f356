//! Single-car elevator controller.
//!
//! An [`Elevator`] accepts panel presses and hall calls from any thread and
//! runs a control loop that moves the car one floor at a time, opening its
//! doors wherever a stop fulfills outstanding demand. Progress is reported as
//! [`ElevatorEvent`]s on the channel returned by [`Elevator::init`].

pub mod modules;
pub mod utilities;

pub use modules::fsm::Fsm;
pub use modules::Elevator;
pub use utilities::call::Call;
pub use utilities::config::{Config, DemoSettings, ElevatorSettings, ScriptedInput};
pub use utilities::direction::Direction;
pub use utilities::elevator_status::{DoorState, ElevatorStatus};
pub use utilities::error::{ConfigError, InvariantViolation, RequestError};
pub use utilities::event::ElevatorEvent;
pub use utilities::request::Request;
pub use utilities::requests::Requests;
pub use utilities::timer::{SystemTimer, Timer, VirtualTimer};
pub use utilities::Floor;
