use std::fmt;

use serde::{Deserialize, Serialize};

/// Length unit for layer thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Mm,
    Cm,
    M,
}

impl LengthUnit {
    /// Conversion factor to centimeters.
    pub fn to_cm(self) -> f64 {
        match self {
            Self::Mm => 0.1,
            Self::Cm => 1.0,
            Self::M => 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::M => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A thickness value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thickness {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Thickness {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Thickness { value, unit }
    }

    pub fn mm(value: f64) -> Self {
        Thickness::new(value, LengthUnit::Mm)
    }

    /// The thickness converted to centimeters.
    pub fn in_cm(&self) -> f64 {
        self.value * self.unit.to_cm()
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cm() {
        assert_eq!(Thickness::mm(0.025).in_cm(), 0.0025);
        assert_eq!(Thickness::new(2.0, LengthUnit::Cm).in_cm(), 2.0);
        assert_eq!(Thickness::new(0.5, LengthUnit::M).in_cm(), 50.0);
    }
}
