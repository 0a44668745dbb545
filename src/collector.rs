//! Interactive station entry.
//!
//! Prompts for the run scalars, then for each station and each of its
//! processes. Takt time is printed as soon as it is known and each station's
//! result as soon as its last process is entered. Bad input is fatal: there
//! is no retry prompt.

use std::io::{BufRead, Write};

use crate::error::LineError;
use crate::logger::Logger;
use crate::model::line::LineBalance;
use crate::model::policy::InputPolicy;
use crate::model::process::Process;
use crate::report;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    policy: InputPolicy,
    unit: String,
    logger: Logger,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, policy: InputPolicy, unit: &str, logger: &Logger) -> Self {
        Prompter {
            input,
            output,
            policy,
            unit: unit.to_string(),
            logger: logger.for_target("collector"),
        }
    }

    /// Print `prompt` and read one line without its line ending
    fn ask(&mut self, prompt: &str, field: &str) -> Result<String, LineError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LineError::UnexpectedEof(field.to_string()));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn ask_int(&mut self, prompt: &str, field: &str) -> Result<i64, LineError> {
        let answer = self.ask(prompt, field)?;
        answer.trim().parse::<i64>().map_err(|_| LineError::Parse {
            field: field.to_string(),
            input: answer,
            expected: "integer",
        })
    }

    fn ask_float(&mut self, prompt: &str, field: &str) -> Result<f64, LineError> {
        let answer = self.ask(prompt, field)?;
        answer.trim().parse::<f64>().map_err(|_| LineError::Parse {
            field: field.to_string(),
            input: answer,
            expected: "number",
        })
    }

    fn ask_count(&mut self, prompt: &str, field: &str) -> Result<usize, LineError> {
        let count = self.ask_int(prompt, field)?;
        self.policy.check_count(field, count)?;
        // A negative count enters nothing
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Run the whole entry sequence and return the balanced line
    pub fn collect(&mut self) -> Result<LineBalance, LineError> {
        let hours = self.ask_int(
            "Enter available working hours per day: ",
            "working hours per day",
        )?;
        let demand = self.ask_int("Enter daily demand: ", "daily demand")?;

        let mut line = LineBalance::new(hours as f64, demand as f64, self.policy)?;
        report::write_takt(&mut self.output, line.takt())?;
        self.logger.info(&format!(
            "Takt time {:.3}s from {} h and {} units",
            line.takt().seconds(),
            hours,
            demand
        ));

        let num_stations = self.ask_count("\nEnter number of stations: ", "number of stations")?;

        for i in 0..num_stations {
            writeln!(self.output, "\nStation {}", i + 1)?;
            let num_processes =
                self.ask_count("Enter number of processes: ", "number of processes")?;

            let mut processes = Vec::with_capacity(num_processes);
            for j in 0..num_processes {
                let description = self.ask(
                    &format!("  Enter description for process {}: ", j + 1),
                    "process description",
                )?;
                let field = format!("cycle time for process {}", j + 1);
                let cycle_time =
                    self.ask_float(&format!("  Enter cycle time for process {}: ", j + 1), &field)?;
                // Rejected here, before the next prompt
                self.policy.check_positive(&field, cycle_time)?;
                if cycle_time < 0.0 {
                    self.logger.warning(&format!(
                        "Accepted negative cycle time {} for '{}'",
                        cycle_time, description
                    ));
                }
                processes.push(Process {
                    description,
                    cycle_time,
                });
            }

            let station = line.add_station(None, processes)?;
            report::write_station(&mut self.output, station, &self.unit)?;
            self.logger.debug(&format!(
                "{} finalized with {} processes",
                station.name(),
                station.processes().len()
            ));
        }

        Ok(line)
    }
}
