use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver};
use parking_lot::Mutex;
use tracing::info;

use crate::utilities::config::ElevatorSettings;
use crate::utilities::direction::Direction;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::error::{ConfigError, RequestError};
use crate::utilities::event::ElevatorEvent;
use crate::utilities::request::Request;
use crate::utilities::timer::Timer;
use crate::utilities::Floor;

pub mod doors;
pub mod fsm;

use fsm::Fsm;

struct Run {
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Handle to one car. Demand can be registered at any time, from any
/// thread; the control loop runs on its own thread between `start` and
/// `stop`.
pub struct Elevator {
    fsm: Arc<Fsm>,
    run: Mutex<Option<Run>>,
}

impl Elevator {
    /// Builds a parked car at `min_floor` and the channel its events are
    /// published on.
    pub fn init(
        settings: ElevatorSettings,
        timer: Arc<dyn Timer>,
    ) -> Result<(Self, Receiver<ElevatorEvent>), ConfigError> {
        settings.validate()?;
        let (events_tx, events_rx) = unbounded();
        let status = Arc::new(Mutex::new(ElevatorStatus::new(&settings)));
        info!(
            elevator = settings.name.as_str(),
            "configured floors {}..={}", settings.min_floor, settings.max_floor
        );
        let fsm = Arc::new(Fsm::new(settings, status, timer, events_tx));
        Ok((Elevator { fsm, run: Mutex::new(None) }, events_rx))
    }

    pub fn name(&self) -> &str {
        &self.fsm.settings.name
    }

    pub fn settings(&self) -> &ElevatorSettings {
        &self.fsm.settings
    }

    /// Snapshot of the car and its outstanding demand.
    pub fn status(&self) -> ElevatorStatus {
        self.fsm.status.lock().clone()
    }

    /// Panel press inside the car.
    pub fn press_floor(&self, floor: Floor) {
        self.register(Ok(Request::cab(floor)));
    }

    /// Hall call from `floor` wanting to travel `direction`.
    pub fn call_from(&self, floor: Floor, direction: Direction) {
        self.register(Request::hall(floor, direction));
    }

    /// Hall call with the direction given as text, `"up"` or `"down"`.
    pub fn call_from_str(&self, floor: Floor, direction: &str) {
        self.register(direction.parse::<Direction>().and_then(|direction| Request::hall(floor, direction)));
    }

    fn register(&self, request: Result<Request, RequestError>) {
        let request = match request.and_then(|request| request.validate(&self.fsm.settings).map(|_| request)) {
            Ok(request) => request,
            Err(reason) => {
                self.fsm.emit(ElevatorEvent::RequestRejected(reason));
                return;
            },
        };
        let mut status = self.fsm.status.lock();
        if status.requests.add_order(request.floor, request.call) {
            self.fsm.emit(ElevatorEvent::RequestAccepted(request));
        }
    }

    /// Spawns the control loop. Does nothing while a loop is already running;
    /// after a `stop` it waits for the previous loop to wind down first.
    pub fn start(&self) -> io::Result<()> {
        let mut run = self.run.lock();
        if let Some(previous) = run.take() {
            if previous.running.load(Ordering::SeqCst) {
                *run = Some(previous);
                return Ok(());
            }
            let _ = previous.handle.join();
        }

        let running = Arc::new(AtomicBool::new(true));
        let handle = {
            let running = running.clone();
            let fsm = self.fsm.clone();
            thread::Builder::new()
                .name(format!("fsm-{}", self.name()))
                .spawn(move || fsm.run(&running))?
        };
        *run = Some(Run { running, handle });
        Ok(())
    }

    /// Asks the control loop to exit once its current operation completes.
    pub fn stop(&self) {
        if let Some(run) = self.run.lock().as_ref() {
            run.running.store(false, Ordering::SeqCst);
        }
    }

    pub fn is_running(&self) -> bool {
        self.run
            .lock()
            .as_ref()
            .map(|run| run.running.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    /// Runs a single control-loop iteration on the calling thread. Returns
    /// `None` without doing anything while a loop thread is still alive.
    pub fn step(&self) -> Option<Direction> {
        let loop_alive = self.run.lock().as_ref().map_or(false, |run| !run.handle.is_finished());
        if loop_alive {
            return None;
        }
        Some(self.fsm.step())
    }

    /// Blocks until the control loop has exited. Only returns after `stop`.
    pub fn join(&self) {
        let run = self.run.lock().take();
        if let Some(run) = run {
            let _ = run.handle.join();
        }
    }
}

impl Drop for Elevator {
    fn drop(&mut self) {
        self.stop();
        self.join();
    }
}
