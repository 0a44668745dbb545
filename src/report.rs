//! Console report: the takt line, one block per finalized station and a
//! closing line summary.

use std::io::Write;

use crate::model::line::LineBalance;
use crate::model::station::Station;
use crate::model::takt::TaktTime;

pub fn write_takt(out: &mut impl Write, takt: TaktTime) -> std::io::Result<()> {
    writeln!(out, "Takt Time is: {:.2} seconds", takt.seconds())
}

pub fn write_station(out: &mut impl Write, station: &Station, unit: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "{} total cycle time: {:.2} {}",
        station.name(),
        station.station_total(),
        unit
    )?;
    writeln!(
        out,
        "{} number of operators required: {}",
        station.name(),
        station.num_operators()
    )
}

/// Summary lines shared by the console report and the chart's details panel
pub fn summary_lines(line: &LineBalance, unit: &str) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Working hours per day: {} | Daily demand: {}",
            line.working_hours_per_day(),
            line.daily_demand()
        ),
        format!("Takt time: {:.2} seconds", line.takt().seconds()),
        format!(
            "Stations: {} ({} over takt)",
            line.stations().len(),
            line.stations_over_takt()
        ),
        format!("Total operators required: {}", line.total_operators()),
    ];
    if let Some((_, station)) = line.bottleneck() {
        lines.push(format!(
            "Bottleneck: {} ({:.2} {})",
            station.name(),
            station.station_total(),
            unit
        ));
    }
    lines
}

pub fn write_summary(out: &mut impl Write, line: &LineBalance, unit: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Line summary")?;
    for text in summary_lines(line, unit) {
        writeln!(out, "  {}", text)?;
    }
    Ok(())
}
