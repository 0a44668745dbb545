use super::policy::InputPolicy;
use super::process::Process;
use super::station::{default_station_name, Station};
use super::takt::TaktTime;
use crate::error::LineError;

/// A balanced line: the run-level scalars, the takt time derived from them
/// and the stations entered so far, in entry order.
#[derive(Debug, Clone)]
pub struct LineBalance {
    working_hours_per_day: f64,
    daily_demand: f64,
    takt: TaktTime,
    policy: InputPolicy,
    stations: Vec<Station>,
    total_operators: i64,
}

impl LineBalance {
    /// Fix the takt time for the run. Fails before any station is accepted
    /// when the demand makes takt time undefined.
    pub fn new(
        working_hours_per_day: f64,
        daily_demand: f64,
        policy: InputPolicy,
    ) -> Result<Self, LineError> {
        let takt = TaktTime::from_demand(working_hours_per_day, daily_demand, policy)?;
        Ok(LineBalance {
            working_hours_per_day,
            daily_demand,
            takt,
            policy,
            stations: Vec::new(),
            total_operators: 0,
        })
    }

    /// Finalize the next station from its processes.
    ///
    /// Unnamed stations are called "Station i", counting from 1.
    pub fn add_station(
        &mut self,
        name: Option<&str>,
        processes: Vec<Process>,
    ) -> Result<&Station, LineError> {
        let index = self.stations.len();
        let name = match name {
            Some(name) => name.to_string(),
            None => default_station_name(index),
        };

        // File input reaches this check only here; prompts also check at entry
        for process in &processes {
            self.policy.check_positive(
                &format!("cycle time of '{}' at {}", process.description, name),
                process.cycle_time,
            )?;
        }

        let station = Station::new(&name, processes, self.takt)?;
        self.total_operators = self
            .total_operators
            .checked_add(station.num_operators())
            .ok_or_else(|| {
                LineError::invalid(
                    "total operators",
                    format!("adding {} overflows the line total", name),
                )
            })?;
        self.stations.push(station);
        Ok(&self.stations[index])
    }

    pub fn working_hours_per_day(&self) -> f64 {
        self.working_hours_per_day
    }

    pub fn daily_demand(&self) -> f64 {
        self.daily_demand
    }

    pub fn takt(&self) -> TaktTime {
        self.takt
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Sum of station operator counts, kept checked as stations are added
    pub fn total_operators(&self) -> i64 {
        self.total_operators
    }

    /// The station with the largest total; the earliest one wins a tie
    pub fn bottleneck(&self) -> Option<(usize, &Station)> {
        let mut best: Option<(usize, &Station)> = None;
        for (idx, station) in self.stations.iter().enumerate() {
            match best {
                Some((_, current)) if current.station_total() >= station.station_total() => {}
                _ => best = Some((idx, station)),
            }
        }
        best
    }

    pub fn stations_over_takt(&self) -> usize {
        self.stations
            .iter()
            .filter(|s| self.takt.is_exceeded_by(s.station_total()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line() -> LineBalance {
        let mut line = LineBalance::new(8.0, 100.0, InputPolicy::Permissive).unwrap();
        line.add_station(
            None,
            vec![Process::new("Weld", 150.0), Process::new("Grind", 100.0)],
        )
        .unwrap();
        line.add_station(None, vec![Process::new("Paint", 400.0)]).unwrap();
        line
    }

    #[test]
    fn test_two_station_scenario() {
        let line = sample_line();
        assert!((line.takt().seconds() - 288.0).abs() < 1e-9);

        let stations = line.stations();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name(), "Station 1");
        assert_eq!(stations[0].station_total(), 250.0);
        assert_eq!(stations[0].num_operators(), 1);
        assert_eq!(stations[1].name(), "Station 2");
        assert_eq!(stations[1].station_total(), 400.0);
        assert_eq!(stations[1].num_operators(), 2);

        assert_eq!(line.total_operators(), 3);
        assert_eq!(line.stations_over_takt(), 1);
        let (idx, bottleneck) = line.bottleneck().unwrap();
        assert_eq!(idx, 1);
        assert_eq!(bottleneck.name(), "Station 2");
    }

    #[test]
    fn test_named_stations_keep_their_names() {
        let mut line = LineBalance::new(8.0, 480.0, InputPolicy::Permissive).unwrap();
        let station = line
            .add_station(Some("Packing"), vec![Process::new("Box", 30.0)])
            .unwrap();
        assert_eq!(station.name(), "Packing");
        let station = line.add_station(None, Vec::new()).unwrap();
        assert_eq!(station.name(), "Station 2");
    }

    #[test]
    fn test_zero_demand_fails_before_stations() {
        let result = LineBalance::new(8.0, 0.0, InputPolicy::Permissive);
        assert!(matches!(result, Err(LineError::DivisionByZero("daily demand"))));
    }

    #[test]
    fn test_zero_hours_fails_at_first_station() {
        let mut line = LineBalance::new(0.0, 100.0, InputPolicy::Permissive).unwrap();
        assert_eq!(line.takt().seconds(), 0.0);
        let result = line.add_station(None, Vec::new());
        assert!(matches!(result, Err(LineError::DivisionByZero("takt time"))));
        assert!(line.stations().is_empty());
    }

    #[test]
    fn test_strict_rejects_negative_cycle_time() {
        let mut line = LineBalance::new(8.0, 100.0, InputPolicy::Strict).unwrap();
        let result = line.add_station(None, vec![Process::new("Credit", -10.0)]);
        assert!(matches!(result, Err(LineError::Invalid { .. })));
        assert!(line.stations().is_empty());
    }

    #[test]
    fn test_permissive_accepts_negative_cycle_time() {
        let mut line = LineBalance::new(8.0, 100.0, InputPolicy::Permissive).unwrap();
        let station = line
            .add_station(None, vec![Process::new("Credit", -10.0)])
            .unwrap();
        assert_eq!(station.station_total(), -10.0);
    }

    #[test]
    fn test_operator_total_overflow_is_rejected() {
        let mut line = LineBalance::new(8.0, 100.0, InputPolicy::Permissive).unwrap();
        // Each station alone needs just under i64::MAX / 2 operators at 288 s takt
        let cycle_time = 288.0 * 4.0e18;
        line.add_station(None, vec![Process::new("A", cycle_time)]).unwrap();
        line.add_station(None, vec![Process::new("B", cycle_time)]).unwrap();
        let before = line.total_operators();

        let result = line.add_station(None, vec![Process::new("C", cycle_time)]);
        assert!(matches!(result, Err(LineError::Invalid { .. })));
        assert_eq!(line.stations().len(), 2);
        assert_eq!(line.total_operators(), before);
    }

    #[test]
    fn test_bottleneck_tie_keeps_first() {
        let mut line = LineBalance::new(8.0, 100.0, InputPolicy::Permissive).unwrap();
        line.add_station(None, vec![Process::new("A", 100.0)]).unwrap();
        line.add_station(None, vec![Process::new("B", 100.0)]).unwrap();
        assert_eq!(line.bottleneck().unwrap().0, 0);
    }

    #[test]
    fn test_empty_line() {
        let line = LineBalance::new(8.0, 100.0, InputPolicy::Permissive).unwrap();
        assert!(line.bottleneck().is_none());
        assert_eq!(line.total_operators(), 0);
        assert_eq!(line.stations_over_takt(), 0);
    }
}
