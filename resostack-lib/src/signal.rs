use serde::{Deserialize, Serialize};

use crate::constants::BARN_CM2;
use crate::error::{ResoError, Result};
use crate::sigma::StackSigma;
use crate::stack::Stack;

/// Transmission signal for one isotope of one element of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotopeSignal {
    pub id: String,
    pub energy_ev: Vec<f64>,
    pub miu_per_cm: Vec<f64>,
    pub transmission: Vec<f64>,
    pub attenuation: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSignal {
    pub symbol: String,
    pub energy_ev: Vec<f64>,
    pub miu_per_cm: Vec<f64>,
    pub transmission: Vec<f64>,
    pub attenuation: Vec<f64>,
    pub isotopes: Vec<IsotopeSignal>,
}

impl ElementSignal {
    pub fn isotope(&self, id: &str) -> Option<&IsotopeSignal> {
        self.isotopes.iter().find(|i| i.id == id)
    }
}

/// Signal for one layer; transmission is the product over its elements
/// (independent absorbers in series).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSignal {
    pub name: String,
    pub energy_ev: Vec<f64>,
    pub miu_per_cm: Vec<f64>,
    pub transmission: Vec<f64>,
    pub attenuation: Vec<f64>,
    pub elements: Vec<ElementSignal>,
}

impl LayerSignal {
    pub fn element(&self, symbol: &str) -> Option<&ElementSignal> {
        self.elements.iter().find(|e| e.symbol == symbol)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackSignal {
    pub layers: Vec<LayerSignal>,
}

impl StackSignal {
    pub fn layer(&self, name: &str) -> Option<&LayerSignal> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// Whole-sample signal: the product of every layer's transmission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalSignal {
    pub energy_ev: Vec<f64>,
    pub transmission: Vec<f64>,
    pub attenuation: Vec<f64>,
}

fn miu_per_cm(sigma_b: &[f64], atoms_per_cm3: f64) -> Vec<f64> {
    sigma_b.iter().map(|s| BARN_CM2 * s * atoms_per_cm3).collect()
}

fn transmission(thickness_cm: f64, miu: &[f64]) -> Vec<f64> {
    miu.iter().map(|m| (-thickness_cm * m).exp()).collect()
}

fn attenuation(transmission: &[f64]) -> Vec<f64> {
    transmission.iter().map(|t| 1.0 - t).collect()
}

/// Convert aggregated cross sections into transmission and attenuation at
/// isotope, element and layer level, plus the whole-sample total.
///
/// Isotope curves already carry the isotopic ratio, so every level uses the
/// parent element's atoms/cm3. All elements of a layer must share one energy
/// axis (and all layers must share one axis for the total); a divergence is
/// an error, not a silent first-wins pick.
pub(crate) fn evaluate(stack: &Stack, sigma: &StackSigma) -> Result<(StackSignal, TotalSignal)> {
    let mut layers = Vec::with_capacity(stack.layers.len());
    for (layer, layer_sigma) in stack.layers.iter().zip(&sigma.layers) {
        let thickness_cm = layer.thickness.in_cm();

        let mut elements = Vec::with_capacity(layer.elements.len());
        for (element, element_sigma) in layer.elements.iter().zip(&layer_sigma.elements) {
            let atoms = element.atoms_per_cm3;

            let mut isotopes = Vec::with_capacity(element_sigma.isotopes.len());
            for isotope_sigma in &element_sigma.isotopes {
                let miu = miu_per_cm(&isotope_sigma.sigma_b, atoms);
                let trans = transmission(thickness_cm, &miu);
                let atten = attenuation(&trans);
                isotopes.push(IsotopeSignal {
                    id: isotope_sigma.id.clone(),
                    energy_ev: isotope_sigma.energy_ev.clone(),
                    miu_per_cm: miu,
                    transmission: trans,
                    attenuation: atten,
                });
            }

            let miu = miu_per_cm(&element_sigma.sigma_b, atoms);
            let trans = transmission(thickness_cm, &miu);
            let atten = attenuation(&trans);
            elements.push(ElementSignal {
                symbol: element.symbol.clone(),
                energy_ev: element_sigma.energy_ev.clone(),
                miu_per_cm: miu,
                transmission: trans,
                attenuation: atten,
                isotopes,
            });
        }

        for element in &elements[1..] {
            if element.energy_ev != elements[0].energy_ev {
                return Err(ResoError::EnergyAxisMismatch(layer.name.clone()));
            }
        }

        let energy_ev = elements[0].energy_ev.clone();
        let mut miu = vec![0.0; energy_ev.len()];
        let mut trans = vec![1.0; energy_ev.len()];
        for element in &elements {
            for i in 0..energy_ev.len() {
                miu[i] += element.miu_per_cm[i];
                trans[i] *= element.transmission[i];
            }
        }
        let atten = attenuation(&trans);
        layers.push(LayerSignal {
            name: layer.name.clone(),
            energy_ev,
            miu_per_cm: miu,
            transmission: trans,
            attenuation: atten,
            elements,
        });
    }

    let total = if layers.is_empty() {
        TotalSignal::default()
    } else {
        for layer in &layers[1..] {
            if layer.energy_ev != layers[0].energy_ev {
                return Err(ResoError::EnergyAxisMismatch("stack".to_string()));
            }
        }
        let energy_ev = layers[0].energy_ev.clone();
        let mut trans = vec![1.0; energy_ev.len()];
        for layer in &layers {
            for i in 0..energy_ev.len() {
                trans[i] *= layer.transmission[i];
            }
        }
        let atten = attenuation(&trans);
        TotalSignal {
            energy_ev,
            transmission: trans,
            attenuation: atten,
        }
    };

    Ok((StackSignal { layers }, total))
}
