use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, Result};

use super::config::ElevatorSettings;
use super::elevator_status::ElevatorStatus;

pub struct Debug {
    stdout: Stdout,
    status_size: u16,
}

impl Debug {
    pub fn new(settings: &ElevatorSettings) -> Self {
        Debug { stdout: stdout(), status_size: status_size(settings) }
    }

    /// Reserves the lines `printstatus` redraws over.
    pub fn init(&mut self) -> Result<()> {
        for _ in 0..self.status_size {
            writeln!(self.stdout)?;
        }
        Ok(())
    }

    pub fn printstatus(&mut self, name: &str, status: &ElevatorStatus) -> Result<()> {
        self.stdout.execute(cursor::MoveUp(self.status_size))?;
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        writeln!(self.stdout, "+---------------------------------------------------+")?;
        writeln!(self.stdout, "| ORDERS FOR {0:<38} |", name.to_uppercase())?;
        writeln!(self.stdout, "+------------+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "FLOOR", "HALL UP", "HALL DOWN", "PANEL")?;
        for floor in status.requests.floors().rev() {
            writeln!(self.stdout, "+------------+------------+------------+------------+")?;
            let floor_i = status.requests.get_requests_at_floor(floor);
            let car = if floor == status.floor { "*" } else { "" };
            writeln!(
                self.stdout,
                "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
                format!("{}{}", floor, car), floor_i[0], floor_i[1], floor_i[2]
            )?;
        }
        writeln!(self.stdout, "+------------+------------+------------+------------+\n\n")?;

        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| STATE MACHINE           |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "FLOOR", status.floor)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "DIRECTION", status.direction.as_string())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "DOORS", status.doors.as_string())?;
        writeln!(self.stdout, "+------------+------------+")?;

        Ok(())
    }
}

/// Lines the table takes: header, two rows per floor, footer, state block.
/// Saturates for shafts taller than a terminal could show anyway.
fn status_size(settings: &ElevatorSettings) -> u16 {
    let num_floors = i64::from(settings.max_floor) - i64::from(settings.min_floor) + 1;
    u16::try_from(4 + 2 * num_floors + 3 + 9).unwrap_or(u16::MAX)
}
