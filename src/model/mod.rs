/// The model module contains the line-balancing data and arithmetic
pub mod line;
pub mod policy;
pub mod process;
pub mod station;
pub mod takt;
