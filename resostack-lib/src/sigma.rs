use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::{ResoError, Result};
use crate::grid::EnergyGrid;
use crate::interp::interp;
use crate::provider::NuclideProvider;
use crate::stack::Stack;

/// Interpolated cross-section curves for one isotope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeSigma {
    pub id: String,
    pub energy_ev: Vec<f64>,
    /// Interpolated curve before isotopic-ratio scaling.
    pub sigma_b_raw: Vec<f64>,
    /// Ratio-scaled curve; what element aggregation sums.
    pub sigma_b: Vec<f64>,
}

/// Aggregated cross-section curve for one element of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSigma {
    pub symbol: String,
    /// Pointwise mean of the isotope energy axes.
    pub energy_ev: Vec<f64>,
    /// Sum of the ratio-scaled isotope curves.
    pub sigma_b: Vec<f64>,
    pub isotopes: Vec<IsotopeSigma>,
}

impl ElementSigma {
    pub fn isotope(&self, id: &str) -> Option<&IsotopeSigma> {
        self.isotopes.iter().find(|i| i.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSigma {
    pub name: String,
    pub elements: Vec<ElementSigma>,
}

impl LayerSigma {
    pub fn element(&self, symbol: &str) -> Option<&ElementSigma> {
        self.elements.iter().find(|e| e.symbol == symbol)
    }
}

/// Every cross-section curve of the stack, rebuilt wholesale on each
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSigma {
    pub layers: Vec<LayerSigma>,
}

impl StackSigma {
    pub fn layer(&self, name: &str) -> Option<&LayerSigma> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// Fetch, interpolate and aggregate every cross-section curve in the stack.
///
/// Each isotope gets its own copy of the energy axis and of the interpolated
/// values; ratio scaling never writes through shared storage.
pub(crate) fn evaluate<P: NuclideProvider>(
    provider: &P,
    database: Database,
    grid: &EnergyGrid,
    stack: &Stack,
) -> Result<StackSigma> {
    let axis = grid.axis();
    let n = axis.len();

    let mut layers = Vec::with_capacity(stack.layers.len());
    for layer in &stack.layers {
        let mut elements = Vec::with_capacity(layer.elements.len());
        for element in &layer.elements {
            let mut isotopes = Vec::with_capacity(element.isotopes.len());
            for isotope in &element.isotopes {
                if !isotope.source.ends_with(".csv") {
                    return Err(ResoError::UnsupportedFileType(isotope.source.clone()));
                }
                let table = provider.cross_section_table(&isotope.source, database)?;
                let raw = interp(&axis, &table.energy_ev, &table.sigma_b);
                let scaled: Vec<f64> = raw.iter().map(|s| s * isotope.ratio).collect();
                isotopes.push(IsotopeSigma {
                    id: isotope.id.clone(),
                    energy_ev: axis.clone(),
                    sigma_b_raw: raw,
                    sigma_b: scaled,
                });
            }

            let mut sigma_b = vec![0.0; n];
            for iso in &isotopes {
                for i in 0..n {
                    sigma_b[i] += iso.sigma_b[i];
                }
            }

            // The element axis is the mean of the isotope axes, which
            // tolerates per-isotope rounding in the tabulated sources. The
            // mean is taken around the first axis so that identical axes stay
            // bit-identical regardless of the isotope count.
            let mut energy_ev = isotopes[0].energy_ev.clone();
            if isotopes.len() > 1 {
                let count = isotopes.len() as f64;
                for i in 0..n {
                    let base = energy_ev[i];
                    let jitter: f64 = isotopes.iter().map(|iso| iso.energy_ev[i] - base).sum();
                    energy_ev[i] = base + jitter / count;
                }
            }

            elements.push(ElementSigma {
                symbol: element.symbol.clone(),
                energy_ev,
                sigma_b,
                isotopes,
            });
        }
        layers.push(LayerSigma {
            name: layer.name.clone(),
            elements,
        });
    }
    Ok(StackSigma { layers })
}
