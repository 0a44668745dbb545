//! Line definitions read from JSON, plus the built-in sample line.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::error::LineError;
use crate::logger::Logger;
use crate::model::line::LineBalance;
use crate::model::policy::InputPolicy;
use crate::model::process::Process;
use crate::report;

pub const DEFAULT_UNIT: &str = "seconds";

#[derive(Debug, Clone, Deserialize)]
pub struct LineConfig {
    pub working_hours_per_day: f64,
    pub daily_demand: f64,
    /// Label for the cycle-time unit shown in the report and on the chart
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub stations: Vec<StationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub processes: Vec<Process>,
}

impl LineConfig {
    pub fn load(config_path: &Path, logger: &Logger) -> Result<Self, LineError> {
        let display = config_path.display().to_string();
        logger.info(&format!("Loading line config from {}", display));

        if !config_path.exists() {
            return Err(LineError::ConfigNotFound(display));
        }

        let contents = fs::read_to_string(config_path).map_err(|source| LineError::ConfigRead {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&contents, &display)
    }

    pub fn from_json(contents: &str, origin: &str) -> Result<Self, LineError> {
        serde_json::from_str(contents).map_err(|source| LineError::ConfigParse {
            path: origin.to_string(),
            source,
        })
    }

    /// Two stations on an 8 hour day at 480 units: takt time is 60 seconds
    pub fn sample() -> Self {
        LineConfig {
            working_hours_per_day: 8.0,
            daily_demand: 480.0,
            unit: None,
            stations: vec![
                StationConfig {
                    name: Some("Station 1".to_string()),
                    processes: vec![
                        Process::new("Assembly", 45.0),
                        Process::new("Quality Check", 15.0),
                    ],
                },
                StationConfig {
                    name: Some("Station 2".to_string()),
                    processes: vec![Process::new("Packaging", 30.0)],
                },
            ],
        }
    }

    /// Build the line station by station, printing the same output the
    /// interactive entry does.
    pub fn build(
        &self,
        policy: InputPolicy,
        unit: &str,
        out: &mut impl Write,
        logger: &Logger,
    ) -> Result<LineBalance, LineError> {
        let mut line = LineBalance::new(self.working_hours_per_day, self.daily_demand, policy)?;
        report::write_takt(out, line.takt())?;

        for station_cfg in &self.stations {
            let station = line.add_station(station_cfg.name.as_deref(), station_cfg.processes.clone())?;
            report::write_station(out, station, unit)?;
            for process in station.processes().iter().filter(|p| p.cycle_time < 0.0) {
                logger.warning(&format!(
                    "Accepted negative cycle time {} for '{}'",
                    process.cycle_time, process.description
                ));
            }
            logger.debug(&format!(
                "{} built with {} processes",
                station.name(),
                station.processes().len()
            ));
        }

        Ok(line)
    }
}
