use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::utilities::direction::Direction;
use crate::utilities::error::ConfigError;
use crate::utilities::Floor;

const CONFIG_FILE_PATH: &str = "config.json";
/// Largest shaft a car can be configured for.
pub const MAX_FLOORS: i64 = 1024;

/// Construction-time settings of one car. Durations are in milliseconds.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ElevatorSettings {
    pub name: String,
    pub min_floor: Floor,
    pub max_floor: Floor,
    pub travel_time_ms: u64,
    pub door_operate_ms: u64,
    pub door_dwell_ms: u64,
    pub idle_poll_ms: u64,
}

impl Default for ElevatorSettings {
    fn default() -> Self {
        ElevatorSettings {
            name: String::from("elevator"),
            min_floor: 1,
            max_floor: 10,
            travel_time_ms: 2000,
            door_operate_ms: 1000,
            door_dwell_ms: 3000,
            idle_poll_ms: 250,
        }
    }
}

impl ElevatorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_floor >= self.max_floor {
            return Err(ConfigError::InvalidFloorRange {
                min_floor: self.min_floor,
                max_floor: self.max_floor,
            });
        }
        let floors = i64::from(self.max_floor) - i64::from(self.min_floor) + 1;
        if floors > MAX_FLOORS {
            return Err(ConfigError::TooManyFloors { floors, max_floors: MAX_FLOORS });
        }
        Ok(())
    }

    pub fn contains(&self, floor: Floor) -> bool {
        (self.min_floor..=self.max_floor).contains(&floor)
    }

    pub fn travel_time(&self) -> Duration {
        Duration::from_millis(self.travel_time_ms)
    }

    pub fn door_operate_time(&self) -> Duration {
        Duration::from_millis(self.door_operate_ms)
    }

    pub fn door_dwell_time(&self) -> Duration {
        Duration::from_millis(self.door_dwell_ms)
    }

    pub fn idle_poll_time(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms)
    }
}

/// One stimulus the demo driver injects, `at_ms` after start.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptedInput {
    Press { at_ms: u64, floor: Floor },
    Call { at_ms: u64, floor: Floor, direction: String },
}

impl ScriptedInput {
    pub fn at(&self) -> Duration {
        match self {
            ScriptedInput::Press { at_ms, .. } | ScriptedInput::Call { at_ms, .. } => {
                Duration::from_millis(*at_ms)
            },
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoSettings {
    pub duration_ms: u64,
    pub inputs: Vec<ScriptedInput>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            duration_ms: 40_000,
            inputs: vec![
                ScriptedInput::Call { at_ms: 0, floor: 3, direction: Direction::Up.as_string() },
                ScriptedInput::Press { at_ms: 500, floor: 5 },
                ScriptedInput::Call { at_ms: 8_000, floor: 7, direction: Direction::Down.as_string() },
                ScriptedInput::Press { at_ms: 20_000, floor: 1 },
            ],
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorSettings,
    pub demo: DemoSettings,
}

impl Config {
    /// Reads `path`, or `config.json` in the working directory. A missing
    /// default file falls back to built-in settings; an explicitly named file
    /// must exist.
    pub fn get(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE_PATH);
                if default_path.exists() {
                    Self::read(default_path)?
                } else {
                    info!("No configuration file provided, using default settings...");
                    Config::default()
                }
            },
        };
        config.elevator.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let config_contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config_contents)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(ElevatorSettings::default().validate().is_ok());
        assert!(Config::default().elevator.validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_inverted_floor_range() {
        let flat = ElevatorSettings { min_floor: 3, max_floor: 3, ..Default::default() };
        assert!(matches!(flat.validate(), Err(ConfigError::InvalidFloorRange { .. })));
        let inverted = ElevatorSettings { min_floor: 5, max_floor: 1, ..Default::default() };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn rejects_shafts_too_tall_to_track() {
        let whole_range = ElevatorSettings { min_floor: i32::MIN, max_floor: i32::MAX, ..Default::default() };
        assert!(matches!(
            whole_range.validate(),
            Err(ConfigError::TooManyFloors { floors, max_floors: MAX_FLOORS }) if floors == 1 << 32
        ));
        let just_fits = ElevatorSettings { min_floor: 0, max_floor: MAX_FLOORS as i32 - 1, ..Default::default() };
        assert!(just_fits.validate().is_ok());
        let near_the_top = ElevatorSettings { min_floor: i32::MAX - 4, max_floor: i32::MAX, ..Default::default() };
        assert!(near_the_top.validate().is_ok());
    }

    #[test]
    fn reads_partial_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "elevator": {{ "name": "west", "min_floor": -1, "max_floor": 4, "travel_time_ms": 10 }},
                "demo": {{ "duration_ms": 100, "inputs": [
                    {{ "kind": "press", "at_ms": 0, "floor": 4 }},
                    {{ "kind": "call", "at_ms": 5, "floor": 0, "direction": "down" }}
                ] }}
            }}"#
        )
        .unwrap();

        let config = Config::get(Some(file.path())).unwrap();
        assert_eq!(config.elevator.name, "west");
        assert_eq!(config.elevator.min_floor, -1);
        assert_eq!(config.elevator.travel_time(), Duration::from_millis(10));
        assert_eq!(config.elevator.door_dwell_ms, ElevatorSettings::default().door_dwell_ms);
        assert_eq!(config.demo.inputs.len(), 2);
        assert_eq!(config.demo.inputs[1].at(), Duration::from_millis(5));
    }

    #[test]
    fn invalid_file_contents_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "elevator": {{ "min_floor": 9, "max_floor": 2 }} }}"#).unwrap();
        assert!(matches!(
            Config::get(Some(file.path())),
            Err(ConfigError::InvalidFloorRange { min_floor: 9, max_floor: 2 })
        ));

        let mut garbage = tempfile::NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(matches!(Config::get(Some(garbage.path())), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_named_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(Config::get(Some(&missing)), Err(ConfigError::Io(_))));
    }
}
