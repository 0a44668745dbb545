use serde::Deserialize;

/// One process step performed at a station
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Process {
    pub description: String,
    /// Time to complete this step on one unit
    pub cycle_time: f64,
}

impl Process {
    pub fn new(description: &str, cycle_time: f64) -> Self {
        Process {
            description: description.to_string(),
            cycle_time,
        }
    }
}
