pub mod constants;
pub mod database;
pub mod engine;
pub mod error;
pub mod formula;
pub mod grid;
pub mod interp;
pub mod provider;
pub(crate) mod quantities;
pub mod sigma;
pub mod signal;
pub mod stack;
pub mod units;

pub use database::Database;
pub use engine::Resonance;
pub use error::{ResoError, Result};
pub use grid::EnergyGrid;
pub use provider::{MemoryProvider, NuclideProvider};
pub use sigma::StackSigma;
pub use signal::{StackSignal, TotalSignal};
pub use stack::{LayerSpec, Stack};
pub use units::{LengthUnit, Thickness};
pub use resostack_data;
