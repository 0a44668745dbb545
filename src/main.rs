mod chart;
mod collector;
mod config;
mod display;
mod error;
mod logger;
mod model;
mod report;

use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use clap::Parser;
use collector::Prompter;
use config::{LineConfig, DEFAULT_UNIT};
use error::LineError;
use logger::{LogLevel, Logger};
use model::line::LineBalance;
use model::policy::InputPolicy;

/// Takt time, station load and operator count for a production line
#[derive(Debug, Parser)]
#[command(name = "line-balance", version)]
struct Cli {
    /// Read the line from a JSON file instead of prompting
    #[arg(short, long, value_name = "PATH", conflicts_with = "demo")]
    config: Option<PathBuf>,

    /// Use the built-in two-station sample line
    #[arg(long)]
    demo: bool,

    /// Reject non-positive hours, demand and cycle times and negative counts
    #[arg(long)]
    strict: bool,

    /// Unit label for cycle times [default: seconds]
    #[arg(long, value_name = "LABEL")]
    unit: Option<String>,

    /// Write the chart as text to PATH instead of opening the viewer
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Exported chart width in columns
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Exported chart height in rows
    #[arg(long, default_value_t = 30)]
    height: u16,

    #[arg(long, value_enum, default_value_t = LogLevel::Warning)]
    log_level: LogLevel,

    /// Also append log lines to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn policy(&self) -> InputPolicy {
        if self.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Permissive
        }
    }

    /// The flag wins over the config file's unit
    fn unit(&self, from_config: Option<&str>) -> String {
        self.unit
            .as_deref()
            .or(from_config)
            .unwrap_or(DEFAULT_UNIT)
            .to_string()
    }
}

fn main() {
    let cli = Cli::parse();

    let logger = match &cli.log_file {
        Some(path) => match Logger::with_file(cli.log_level, path) {
            Ok(logger) => logger,
            Err(err) => {
                eprintln!("Failed to open log file {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => Logger::new(cli.log_level),
    };

    if let Err(err) = run(&cli, &logger) {
        logger.error(&format!("Line balancing failed: {}", err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), LineError> {
    let policy = cli.policy();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (line, unit) = if let Some(path) = &cli.config {
        let config = LineConfig::load(path, logger)?;
        let unit = cli.unit(config.unit.as_deref());
        (config.build(policy, &unit, &mut out, logger)?, unit)
    } else if cli.demo {
        logger.info("No config file provided - balancing the sample line");
        let unit = cli.unit(None);
        (LineConfig::sample().build(policy, &unit, &mut out, logger)?, unit)
    } else {
        let unit = cli.unit(None);
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), &mut out, policy, &unit, logger);
        (prompter.collect()?, unit)
    };

    logger.debug(&format!(
        "Balanced {} stations under {:?} input policy",
        line.stations().len(),
        line.policy()
    ));
    report::write_summary(&mut out, &line, &unit)?;
    out.flush()?;
    drop(out);

    render(cli, &line, &unit, logger)
}

fn render(cli: &Cli, line: &LineBalance, unit: &str, logger: &Logger) -> Result<(), LineError> {
    let logger = logger.for_target("chart");
    let data = chart::ChartData::from_line(line, unit);

    if let Some(path) = &cli.export {
        fs::write(path, chart::render_text(&data, cli.width, cli.height))?;
        logger.info(&format!("Chart written to {}", path.display()));
    } else if io::stdout().is_terminal() {
        logger.debug("Opening chart viewer");
        display::show_chart(line, &data)?;
    } else {
        logger.info("stdout is not a terminal - printing the chart as text");
        print!("{}", chart::render_text(&data, cli.width, cli.height));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_permissive_interactive_entry() {
        let cli = Cli::parse_from(["line-balance"]);
        assert!(cli.config.is_none());
        assert!(!cli.demo);
        assert_eq!(cli.policy(), InputPolicy::Permissive);
        assert_eq!(cli.unit(None), "seconds");
        assert_eq!(cli.log_level, LogLevel::Warning);
        assert_eq!((cli.width, cli.height), (100, 30));
    }

    #[test]
    fn unit_flag_overrides_config() {
        let cli = Cli::parse_from(["line-balance", "--unit", "min", "--strict"]);
        assert_eq!(cli.unit(Some("sec")), "min");
        assert_eq!(cli.policy(), InputPolicy::Strict);

        let cli = Cli::parse_from(["line-balance", "-c", "line.json"]);
        assert_eq!(cli.unit(Some("sec")), "sec");
    }

    #[test]
    fn config_and_demo_conflict() {
        let result = Cli::try_parse_from(["line-balance", "--demo", "--config", "line.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_level_parses_by_name() {
        let cli = Cli::parse_from(["line-balance", "--log-level", "debug"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn export_writes_chart_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.txt");
        let cli = Cli::parse_from([
            "line-balance",
            "--demo",
            "--export",
            path.to_str().unwrap(),
            "--width",
            "60",
            "--height",
            "20",
        ]);

        let mut sink = Vec::new();
        let line = LineConfig::sample()
            .build(cli.policy(), DEFAULT_UNIT, &mut sink, &Logger::default())
            .unwrap();
        render(&cli, &line, DEFAULT_UNIT, &Logger::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 20);
        assert!(text.contains("Station 1"));
        assert!(text.contains("Station 2"));
        assert!(text.contains("Takt Time (60.00)"));
    }
}
