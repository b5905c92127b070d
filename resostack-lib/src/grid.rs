use serde::{Deserialize, Serialize};

use crate::constants::{ENERGY_CEILING_EV, ENERGY_FLOOR_EV};
use crate::error::{ResoError, Result};

/// The uniform energy grid every cross-section curve is evaluated on.
///
/// All values are in eV. The grid carries `floor((max - min) / step) + 1`
/// evenly spaced points from `min` to `max` inclusive; when the range is not
/// an exact multiple of `step` the effective spacing differs slightly from
/// the nominal step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl EnergyGrid {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let grid = EnergyGrid { min, max, step };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &'static str| {
            Err(ResoError::EnergyRange {
                min: self.min,
                max: self.max,
                step: self.step,
                reason,
            })
        };
        if !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() {
            return fail("energy bounds must be finite");
        }
        if self.min < ENERGY_FLOOR_EV {
            return fail("energy_min is below the supported floor");
        }
        if self.max > ENERGY_CEILING_EV {
            return fail("energy_max is above the supported ceiling");
        }
        if self.min >= self.max {
            return fail("energy_min must be below energy_max");
        }
        if self.step <= 0.0 {
            return fail("energy_step must be positive");
        }
        if self.max - self.min < self.step {
            return fail("energy range is smaller than energy_step");
        }
        Ok(())
    }

    /// Number of grid points.
    pub fn nbr_points(&self) -> usize {
        ((self.max - self.min) / self.step).floor() as usize + 1
    }

    /// The energy axis in eV.
    pub fn axis(&self) -> Vec<f64> {
        let n = self.nbr_points();
        if n == 1 {
            return vec![self.min];
        }
        let span = self.max - self.min;
        (0..n)
            .map(|i| self.min + span * i as f64 / (n - 1) as f64)
            .collect()
    }
}

impl Default for EnergyGrid {
    fn default() -> Self {
        EnergyGrid {
            min: ENERGY_FLOOR_EV,
            max: 300.0,
            step: 0.01,
        }
    }
}
