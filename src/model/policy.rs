use crate::error::LineError;

/// How much checking is applied to entered values.
///
/// `Permissive` accepts anything that parses and lets the arithmetic fail
/// where it must (zero demand, zero takt). `Strict` rejects non-positive
/// scalars, negative counts and non-finite numbers up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    #[default]
    Permissive,
    Strict,
}

impl InputPolicy {
    pub fn is_strict(self) -> bool {
        self == InputPolicy::Strict
    }

    pub fn check_positive(self, field: &str, value: f64) -> Result<(), LineError> {
        if !self.is_strict() {
            return Ok(());
        }
        if !value.is_finite() {
            return Err(LineError::invalid(field, format!("{} is not a finite number", value)));
        }
        if value <= 0.0 {
            return Err(LineError::invalid(field, format!("must be greater than zero, got {}", value)));
        }
        Ok(())
    }

    pub fn check_count(self, field: &str, value: i64) -> Result<(), LineError> {
        if self.is_strict() && value < 0 {
            return Err(LineError::invalid(field, format!("cannot be negative, got {}", value)));
        }
        Ok(())
    }
}
