use super::process::Process;
use super::takt::TaktTime;
use crate::error::LineError;

/// A station groups sequential processes worked by one or more operators.
///
/// The total and operator count are derived once from the processes when the
/// station is built and cannot be changed afterwards.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    processes: Vec<Process>,
    station_total: f64,
    num_operators: i64,
}

impl Station {
    pub fn new(name: &str, processes: Vec<Process>, takt: TaktTime) -> Result<Self, LineError> {
        let station_total = processes.iter().fold(0.0, |total, p| total + p.cycle_time);
        let num_operators = takt.operators_for(station_total)?;

        Ok(Station {
            name: name.to_string(),
            processes,
            station_total,
            num_operators,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Sum of the processes' cycle times
    pub fn station_total(&self) -> f64 {
        self.station_total
    }

    pub fn num_operators(&self) -> i64 {
        self.num_operators
    }
}

/// Label used for the 1-indexed station at `index` when no name is given
pub fn default_station_name(index: usize) -> String {
    format!("Station {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn takt() -> TaktTime {
        TaktTime::from_seconds(288.0)
    }

    #[test]
    fn sums_processes_and_rounds_operators_up() {
        let station = Station::new(
            "Station 1",
            vec![Process::new("Weld", 150.0), Process::new("Grind", 100.0)],
            takt(),
        )
        .unwrap();
        assert_eq!(station.station_total(), 250.0);
        assert_eq!(station.num_operators(), 1);
        assert_eq!(station.processes().len(), 2);
    }

    #[test]
    fn overloaded_station_needs_two_operators() {
        let station = Station::new("Station 2", vec![Process::new("Paint", 400.0)], takt()).unwrap();
        assert_eq!(station.station_total(), 400.0);
        assert_eq!(station.num_operators(), 2);
    }

    #[test]
    fn empty_station_has_no_work() {
        let station = Station::new("Station 3", Vec::new(), takt()).unwrap();
        assert_eq!(station.station_total(), 0.0);
        assert!(station.station_total().is_sign_positive());
        assert_eq!(format!("{:.2}", station.station_total()), "0.00");
        assert_eq!(station.num_operators(), 0);
    }

    #[test]
    fn total_is_order_independent() {
        let times = [12.0, 30.5, 7.25, 90.0];
        let forward: Vec<Process> = times.iter().map(|&t| Process::new("step", t)).collect();
        let reversed: Vec<Process> = times.iter().rev().map(|&t| Process::new("step", t)).collect();

        let a = Station::new("A", forward, takt()).unwrap();
        let b = Station::new("B", reversed, takt()).unwrap();
        assert_eq!(a.station_total(), b.station_total());
        assert_eq!(a.station_total(), 139.75);
    }

    #[test]
    fn negative_cycle_times_are_carried_through() {
        let station = Station::new(
            "Rework",
            vec![Process::new("Credit", -50.0), Process::new("Check", 20.0)],
            takt(),
        )
        .unwrap();
        assert_eq!(station.station_total(), -30.0);
        assert_eq!(station.num_operators(), 0);
    }

    #[test]
    fn zero_takt_fails_even_without_processes() {
        let result = Station::new("Station 1", Vec::new(), TaktTime::from_seconds(0.0));
        assert!(matches!(result, Err(LineError::DivisionByZero(_))));
    }

    #[test]
    fn non_finite_total_is_rejected() {
        let result = Station::new("Station 1", vec![Process::new("Stall", f64::NAN)], takt());
        assert!(matches!(result, Err(LineError::Invalid { .. })));
    }

    #[test]
    fn default_names_are_one_indexed() {
        assert_eq!(default_station_name(0), "Station 1");
        assert_eq!(default_station_name(9), "Station 10");
    }
}
