use std::fmt;

use crate::database::Database;
use crate::error::{ResoError, Result};
use crate::grid::EnergyGrid;
use crate::provider::NuclideProvider;
use crate::quantities;
use crate::sigma::{self, StackSigma};
use crate::signal::{self, StackSignal, TotalSignal};
use crate::stack::{LayerSpec, Stack, build_layer};
use crate::units::Thickness;

/// The resonance-signal engine.
///
/// Owns the composition tree, the configured energy grid and database, and
/// every derived curve. Single-threaded by design: setters mutate the tree
/// directly and rerun the affected computation stages before returning, so
/// the snapshots handed out by the accessors are always consistent with each
/// other. Callers holding the engine across threads must serialize mutations
/// themselves.
pub struct Resonance<P: NuclideProvider> {
    provider: P,
    database: Database,
    grid: EnergyGrid,
    stack: Stack,
    stack_sigma: StackSigma,
    stack_signal: StackSignal,
    total_signal: TotalSignal,
}

impl<P: NuclideProvider> Resonance<P> {
    /// Create an engine with an empty stack.
    pub fn new(provider: P, database: Database, grid: EnergyGrid) -> Result<Self> {
        grid.validate()?;
        Ok(Resonance {
            provider,
            database,
            grid,
            stack: Stack::default(),
            stack_sigma: StackSigma::default(),
            stack_signal: StackSignal::default(),
            total_signal: TotalSignal::default(),
        })
    }

    /// Create an engine and add every layer of `specs`, in order.
    pub fn with_stack(
        provider: P,
        database: Database,
        grid: EnergyGrid,
        specs: &[LayerSpec],
    ) -> Result<Self> {
        let mut engine = Self::new(provider, database, grid)?;
        for spec in specs {
            engine.add_layer_spec(spec)?;
        }
        Ok(engine)
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn energy_grid(&self) -> EnergyGrid {
        self.grid
    }

    /// The fully resolved composition tree.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Raw and ratio-weighted cross-section curves, nested by
    /// layer/element/isotope.
    pub fn stack_sigma(&self) -> &StackSigma {
        &self.stack_sigma
    }

    /// Transmission/attenuation curves, nested by layer/element/isotope.
    pub fn stack_signal(&self) -> &StackSignal {
        &self.stack_signal
    }

    /// The whole-sample signal.
    pub fn total_signal(&self) -> &TotalSignal {
        &self.total_signal
    }

    /// Add a layer from an explicit specification. An existing layer with
    /// the same name is replaced wholesale, isotope overrides included.
    ///
    /// A failed lookup — in the composition build or in the cross-section
    /// fetch — aborts the whole operation and leaves the stack as it was.
    pub fn add_layer_spec(&mut self, spec: &LayerSpec) -> Result<()> {
        let layer = build_layer(&self.provider, self.database, spec)?;
        let name = layer.name.clone();
        let previous = self.stack.layer(&name).cloned();
        self.stack.insert(layer);
        let result = self.evaluate();
        if result.is_err() {
            match previous {
                Some(old) => self.stack.insert(old),
                None => self.stack.layers.retain(|l| l.name != name),
            }
        }
        result
    }

    /// Add a layer from a chemical formula; thickness in mm, density in
    /// g/cm3 (`None` derives it from the composition).
    pub fn add_layer(&mut self, formula: &str, thickness_mm: f64, density: Option<f64>) -> Result<()> {
        let spec = LayerSpec::from_formula(formula, Thickness::mm(thickness_mm), density)?;
        self.add_layer_spec(&spec)
    }

    /// Replace the energy grid, then rebuild every curve. An invalid grid
    /// leaves the engine untouched.
    pub fn set_energy_grid(&mut self, grid: EnergyGrid) -> Result<()> {
        grid.validate()?;
        self.grid = grid;
        self.refresh_curves()
    }

    /// Override the isotopic ratios of one element within one layer.
    ///
    /// Ratios are taken literally (no renormalization to 1). The element's
    /// molar mass and density follow immediately; the layer density follows
    /// only when the layer is unlocked. Cross sections and signals are
    /// rebuilt either way, since the ratios scale the isotope curves and the
    /// atom densities regardless of the lock.
    pub fn set_isotopic_ratio(&mut self, layer: &str, element: &str, ratios: &[f64]) -> Result<()> {
        let layer_node = self
            .stack
            .layer_mut(layer)
            .ok_or_else(|| ResoError::UnknownLayer(layer.to_string()))?;
        let element_node = layer_node
            .element_mut(element)
            .ok_or_else(|| ResoError::UnknownElement(element.to_string()))?;
        if ratios.len() != element_node.isotopes.len() {
            return Err(ResoError::SizeMismatch {
                expected: element_node.isotopes.len(),
                got: ratios.len(),
            });
        }

        for (isotope, &ratio) in element_node.isotopes.iter_mut().zip(ratios) {
            isotope.ratio = ratio;
        }
        quantities::update_element(element_node);
        quantities::update_layer(layer_node);
        self.refresh_curves()
    }

    /// Set the density of one element within one layer.
    ///
    /// Allowed even when the layer's own density is locked; the new value
    /// only reaches the layer average on unlocked layers. Cross sections are
    /// unaffected, so only atom densities and signals are rebuilt.
    pub fn set_density(&mut self, layer: &str, element: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ResoError::MalformedStack(
                "density must be a positive number".to_string(),
            ));
        }
        let layer_node = self
            .stack
            .layer_mut(layer)
            .ok_or_else(|| ResoError::UnknownLayer(layer.to_string()))?;
        let element_node = layer_node
            .element_mut(element)
            .ok_or_else(|| ResoError::UnknownElement(element.to_string()))?;

        element_node.density = value;
        quantities::update_layer(layer_node);
        self.refresh_signal()
    }

    /// Current isotopic ratios of one element, keyed by isotope identifier.
    pub fn get_isotopic_ratio(&self, layer: &str, element: &str) -> Result<Vec<(String, f64)>> {
        let layer_node = self
            .stack
            .layer(layer)
            .ok_or_else(|| ResoError::UnknownLayer(layer.to_string()))?;
        let element_node = layer_node
            .element(element)
            .ok_or_else(|| ResoError::UnknownElement(element.to_string()))?;
        Ok(element_node
            .isotopes
            .iter()
            .map(|i| (i.id.clone(), i.ratio))
            .collect())
    }

    /// Every isotopic ratio in the stack as (layer, element, isotope, ratio)
    /// rows, in stack order.
    pub fn get_isotopic_ratio_all(&self) -> Vec<(String, String, String, f64)> {
        let mut rows = Vec::new();
        for layer in &self.stack.layers {
            for element in &layer.elements {
                for isotope in &element.isotopes {
                    rows.push((
                        layer.name.clone(),
                        element.symbol.clone(),
                        isotope.id.clone(),
                        isotope.ratio,
                    ));
                }
            }
        }
        rows
    }

    /// Current density of one element within one layer, in g/cm3.
    pub fn get_density(&self, layer: &str, element: &str) -> Result<f64> {
        let layer_node = self
            .stack
            .layer(layer)
            .ok_or_else(|| ResoError::UnknownLayer(layer.to_string()))?;
        let element_node = layer_node
            .element(element)
            .ok_or_else(|| ResoError::UnknownElement(element.to_string()))?;
        Ok(element_node.density)
    }

    /// Every element density in the stack as (layer, element, density) rows.
    pub fn get_density_all(&self) -> Vec<(String, String, f64)> {
        let mut rows = Vec::new();
        for layer in &self.stack.layers {
            for element in &layer.elements {
                rows.push((layer.name.clone(), element.symbol.clone(), element.density));
            }
        }
        rows
    }

    /// Full math pass: derived quantities, then cross sections, then signals.
    fn evaluate(&mut self) -> Result<()> {
        quantities::evaluate(&mut self.stack);
        self.refresh_curves()
    }

    fn refresh_curves(&mut self) -> Result<()> {
        self.stack_sigma = sigma::evaluate(&self.provider, self.database, &self.grid, &self.stack)?;
        self.refresh_signal()
    }

    fn refresh_signal(&mut self) -> Result<()> {
        let (stack_signal, total_signal) = signal::evaluate(&self.stack, &self.stack_sigma)?;
        self.stack_signal = stack_signal;
        self.total_signal = total_signal;
        Ok(())
    }
}

impl<P: NuclideProvider> fmt::Display for Resonance<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Resonance [{}] {} to {} eV, step {}",
            self.database, self.grid.min, self.grid.max, self.grid.step
        )?;
        for layer in &self.stack.layers {
            let lock = if layer.density_locked { "locked" } else { "derived" };
            writeln!(
                f,
                "  {}: thickness {}, density {} g/cm3 ({lock})",
                layer.name, layer.thickness, layer.density
            )?;
        }
        Ok(())
    }
}
