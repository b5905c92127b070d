use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::{ResoError, Result};
use crate::formula::parse_formula;
use crate::provider::NuclideProvider;
use crate::units::Thickness;

/// Specification of one layer before nuclide data is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub elements: Vec<String>,
    pub stoichiometric_ratio: Vec<u32>,
    pub thickness: Thickness,
    /// User-supplied density in g/cm3; `None` (or a non-finite value) means
    /// the layer density is derived from its elements.
    pub density: Option<f64>,
}

impl LayerSpec {
    /// Build a spec from a chemical formula, named after the formula itself.
    pub fn from_formula(formula: &str, thickness: Thickness, density: Option<f64>) -> Result<Self> {
        let (elements, ratios) = parse_formula(formula)?.into_iter().unzip();
        Ok(LayerSpec {
            name: formula.to_string(),
            elements,
            stoichiometric_ratio: ratios,
            thickness,
            density,
        })
    }
}

/// One isotope inside an element of one layer.
///
/// Reference data (`mass`, `natural_abundance`, `density`) comes from the
/// nuclide provider and is never edited; `ratio` starts at the natural
/// abundance and may be overridden per layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isotope {
    pub id: String,
    pub source: String,
    pub mass: f64,
    pub natural_abundance: f64,
    pub density: f64,
    pub ratio: f64,
}

/// One element inside a layer. Owned exclusively by that layer: the same
/// symbol in two layers is two independent nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub symbol: String,
    pub stoichiometric_ratio: u32,
    pub isotopes: Vec<Isotope>,
    /// Derived: sum of isotope mass x ratio, g/mol.
    pub molar_mass: f64,
    /// Derived: sum of isotope density x ratio, g/cm3.
    pub density: f64,
    /// Derived: layer atoms/cm3 x stoichiometric ratio.
    pub atoms_per_cm3: f64,
}

/// One slab of the sample, with its derived quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    /// Declaration order matters: density averaging walks this order.
    pub elements: Vec<Element>,
    pub thickness: Thickness,
    /// g/cm3; NaN on an unlocked layer until derived.
    pub density: f64,
    /// Fixed when the layer is introduced: a finite user density pins the
    /// layer against automatic recomputation.
    pub density_locked: bool,
    /// Derived: sum of stoichiometric ratio x element molar mass, g/mol.
    pub molar_mass: f64,
    /// Derived: Avogadro x density / molar mass.
    pub atoms_per_cm3: f64,
}

impl Layer {
    pub fn element(&self, symbol: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.symbol == symbol)
    }

    pub(crate) fn element_mut(&mut self, symbol: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.symbol == symbol)
    }
}

/// The whole sample: layers in insertion order, keyed by unique name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stack {
    pub layers: Vec<Layer>,
}

impl Stack {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub(crate) fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Insert a layer; an existing layer with the same name is replaced in
    /// place, subtree and lock included (last write wins).
    pub(crate) fn insert(&mut self, layer: Layer) {
        match self.layers.iter_mut().find(|l| l.name == layer.name) {
            Some(slot) => *slot = layer,
            None => self.layers.push(layer),
        }
    }
}

/// Expand a layer specification into a fully populated subtree.
///
/// Every provider lookup completes before the caller touches the stack, so a
/// failed element or isotope lookup leaves no partial layer behind.
pub(crate) fn build_layer<P: NuclideProvider>(
    provider: &P,
    database: Database,
    spec: &LayerSpec,
) -> Result<Layer> {
    if spec.elements.len() != spec.stoichiometric_ratio.len() {
        return Err(ResoError::MalformedStack(format!(
            "layer '{}': elements and stoichiometric_ratio must have the same size",
            spec.name
        )));
    }
    if spec.elements.is_empty() {
        return Err(ResoError::MalformedStack(format!(
            "layer '{}' has no elements",
            spec.name
        )));
    }
    if !spec.thickness.value.is_finite() {
        return Err(ResoError::MalformedStack(format!(
            "layer '{}': thickness must be a finite number",
            spec.name
        )));
    }
    if spec.stoichiometric_ratio.contains(&0) {
        return Err(ResoError::MalformedStack(format!(
            "layer '{}': stoichiometric ratios must be positive",
            spec.name
        )));
    }
    let density = spec.density.unwrap_or(f64::NAN);
    let density_locked = density.is_finite();
    if density_locked && density <= 0.0 {
        return Err(ResoError::MalformedStack(format!(
            "layer '{}': density must be positive",
            spec.name
        )));
    }

    let mut elements = Vec::with_capacity(spec.elements.len());
    for (symbol, &ratio) in spec.elements.iter().zip(&spec.stoichiometric_ratio) {
        let entries = provider.list_isotopes(symbol, database)?;
        let mut isotopes = Vec::with_capacity(entries.len());
        for entry in entries {
            let info = provider.isotope_info(&entry.id, database)?;
            isotopes.push(Isotope {
                id: entry.id,
                source: entry.source,
                mass: info.mass,
                natural_abundance: info.natural_abundance,
                density: info.density,
                ratio: info.natural_abundance,
            });
        }
        elements.push(Element {
            symbol: symbol.clone(),
            stoichiometric_ratio: ratio,
            isotopes,
            molar_mass: f64::NAN,
            density: f64::NAN,
            atoms_per_cm3: f64::NAN,
        });
    }

    Ok(Layer {
        name: spec.name.clone(),
        elements,
        thickness: spec.thickness,
        density,
        density_locked,
        molar_mass: f64::NAN,
        atoms_per_cm3: f64::NAN,
    })
}
