#![allow(dead_code)]

use resostack::{Database, EnergyGrid, MemoryProvider, Resonance};
use resostack_data::{IsotopeInfo, SigmaTable};

pub const DB: Database = Database::EndfViii;

fn info(mass: f64, natural_abundance: f64, density: f64) -> IsotopeInfo {
    IsotopeInfo {
        mass,
        natural_abundance,
        density,
    }
}

/// Piecewise-linear sigma curve covering the full supported energy range.
fn smooth_table(base: f64) -> SigmaTable {
    SigmaTable {
        energy_ev: vec![1e-5, 1.0, 10.0, 100.0, 1e3, 1e8],
        sigma_b: vec![5.0 * base, 4.0 * base, 3.0 * base, 2.0 * base, base, base],
    }
}

/// Nuclide reference data for Co, Ag, U, O and H.
///
/// Masses and abundances match the published values; isotope densities are
/// the element density scaled by the isotope/element mass ratio, so the
/// abundance-weighted sums land on the element values (Co 8.9, Ag 10.5,
/// U 18.95 g/cm3).
pub fn provider() -> MemoryProvider {
    let mut p = MemoryProvider::new();

    p.insert_isotope(DB, "Co", "58-Co", "Co-58.csv", info(57.9357576, 0.0, 8.7494));
    p.insert_isotope(DB, "Co", "59-Co", "Co-59.csv", info(58.9332002, 1.0, 8.9));

    p.insert_isotope(DB, "Ag", "107-Ag", "Ag-107.csv", info(106.905093, 0.51839, 10.4062));
    p.insert_isotope(DB, "Ag", "109-Ag", "Ag-109.csv", info(108.904756, 0.48161, 10.6009));

    p.insert_isotope(DB, "U", "233-U", "U-233.csv", info(233.039628, 0.0, 18.5527));
    p.insert_isotope(DB, "U", "234-U", "U-234.csv", info(234.0409456, 5.5e-5, 18.6324));
    p.insert_isotope(DB, "U", "235-U", "U-235.csv", info(235.0439231, 0.0072, 18.7123));
    p.insert_isotope(DB, "U", "238-U", "U-238.csv", info(238.0507826, 0.992745, 18.9517));

    p.insert_isotope(DB, "O", "16-O", "O-16.csv", info(15.9949146221, 0.99757, 1.4286e-3));
    p.insert_isotope(DB, "O", "17-O", "O-17.csv", info(16.9991315, 3.8e-4, 1.5182e-3));
    p.insert_isotope(DB, "O", "18-O", "O-18.csv", info(17.9991604, 2.05e-3, 1.6075e-3));

    // Single-isotope element with an exactly linear segment between 100 and
    // 1000 eV: sigma(E) = 6 + E/100 there.
    p.insert_isotope(DB, "H", "1-H", "H-1.csv", info(1.0078250319, 1.0, 8.988e-5));
    p.insert_table(
        DB,
        "H-1.csv",
        SigmaTable {
            energy_ev: vec![1e-5, 100.0, 1000.0, 1e8],
            sigma_b: vec![7.0, 7.0, 16.0, 16.0],
        },
    );

    p.insert_table(DB, "Co-58.csv", smooth_table(8.0));
    p.insert_table(DB, "Co-59.csv", smooth_table(37.2));
    p.insert_table(DB, "Ag-107.csv", smooth_table(34.0));
    p.insert_table(DB, "Ag-109.csv", smooth_table(4.0));
    p.insert_table(DB, "U-233.csv", smooth_table(45.0));
    p.insert_table(DB, "U-234.csv", smooth_table(100.0));
    p.insert_table(DB, "U-235.csv", smooth_table(700.0));
    p.insert_table(DB, "U-238.csv", smooth_table(12.0));
    p.insert_table(DB, "O-16.csv", smooth_table(3.9));
    p.insert_table(DB, "O-17.csv", smooth_table(4.2));
    p.insert_table(DB, "O-18.csv", smooth_table(4.3));

    p
}

/// A grid small enough to keep the tests fast.
pub fn grid() -> EnergyGrid {
    EnergyGrid::new(1.0, 100.0, 1.0).unwrap()
}

/// Engine over the fixture data with an empty stack.
pub fn engine() -> Resonance<MemoryProvider> {
    Resonance::new(provider(), DB, grid()).unwrap()
}

/// Engine with the CoAg reference layer (no user density).
pub fn engine_with_coag() -> Resonance<MemoryProvider> {
    let mut reso = engine();
    reso.add_layer("CoAg", 0.025, None).unwrap();
    reso
}
