use crate::constants::AVOGADRO;
use crate::stack::{Element, Layer, Stack};

/// Recompute an element's molar mass and density from its isotopes.
///
/// Ratios are used literally: a user override that does not sum to 1 is not
/// renormalized, and the weighted sums reflect that.
pub(crate) fn update_element(element: &mut Element) {
    element.molar_mass = element.isotopes.iter().map(|i| i.mass * i.ratio).sum();
    element.density = element.isotopes.iter().map(|i| i.density * i.ratio).sum();
}

/// Recompute a layer's density, molar mass and atom densities from its
/// elements. Locked layers keep their user-supplied density.
///
/// A density that cannot be resolved to a finite number leaves NaN in
/// `atoms_per_cm3` and everything downstream; nothing raises here.
pub(crate) fn update_layer(layer: &mut Layer) {
    if !layer.density_locked {
        layer.density = compound_density(layer);
    }
    layer.molar_mass = layer
        .elements
        .iter()
        .map(|e| e.stoichiometric_ratio as f64 * e.molar_mass)
        .sum();
    layer.atoms_per_cm3 = AVOGADRO * layer.density / layer.molar_mass;
    let layer_atoms = layer.atoms_per_cm3;
    for element in &mut layer.elements {
        element.atoms_per_cm3 = layer_atoms * element.stoichiometric_ratio as f64;
    }
}

/// Stoichiometric-ratio-weighted average of the element densities, walked in
/// declaration order.
fn compound_density(layer: &Layer) -> f64 {
    let ratio_sum: f64 = layer
        .elements
        .iter()
        .map(|e| e.stoichiometric_ratio as f64)
        .sum();
    let weighted: f64 = layer
        .elements
        .iter()
        .map(|e| e.stoichiometric_ratio as f64 * e.density)
        .sum();
    weighted / ratio_sum
}

/// Full derived-quantity pass over every layer.
pub(crate) fn evaluate(stack: &mut Stack) {
    for layer in &mut stack.layers {
        for element in &mut layer.elements {
            update_element(element);
        }
        update_layer(layer);
    }
}
