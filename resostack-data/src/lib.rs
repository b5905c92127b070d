#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One isotope of an element, as listed by a nuclide-data provider.
///
/// `id` follows the `<mass_number>-<symbol>` convention (`"107-Ag"`);
/// `source` is the provider's reference for the tabulated cross-section
/// curve behind this isotope (`"Ag-107.csv"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsotopeEntry {
    pub id: String,
    pub source: String,
}

/// Physical reference data for a single isotope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IsotopeInfo {
    /// Atomic mass in g/mol.
    pub mass: f64,
    /// Natural abundance as a fraction in [0, 1].
    pub natural_abundance: f64,
    /// Density in g/cm3.
    pub density: f64,
}

/// Raw tabulated cross-section curve for one isotope.
///
/// Energies in eV, cross sections in barns, both in ascending energy order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigmaTable {
    pub energy_ev: Vec<f64>,
    pub sigma_b: Vec<f64>,
}
