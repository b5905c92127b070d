/// Avogadro's number (mol^-1)
pub const AVOGADRO: f64 = 6.02214076e23;

/// One barn in cm^2
pub const BARN_CM2: f64 = 1e-24;

/// Lowest energy (eV) any supported nuclide table covers
pub const ENERGY_FLOOR_EV: f64 = 1e-5;

/// Highest energy (eV) any supported nuclide table covers
pub const ENERGY_CEILING_EV: f64 = 1e8;
