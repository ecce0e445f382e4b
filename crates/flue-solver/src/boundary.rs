//! Convective boundary formula.

use flue_core::Properties;

/// One-sided energy balance on a convective wall face.
///
/// Combines conduction from the node one step into the wall with
/// convection from an ambient fluid:
///
/// ```text
/// T = (2k·T_nb + 2·h_c·h·T_amb) / (2k + 2·h_c·h)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConvectiveFace {
    conductivity: f64,
    coefficient: f64,
    ambient: f64,
    spacing: f64,
}

impl ConvectiveFace {
    /// Face with explicit coefficients.
    pub fn new(conductivity: f64, coefficient: f64, ambient: f64, spacing: f64) -> Self {
        Self {
            conductivity,
            coefficient,
            ambient,
            spacing,
        }
    }

    /// Wall/flue interface: convection from the internal gas.
    pub fn inner(properties: &Properties, spacing: f64) -> Self {
        Self::new(
            properties.conductivity,
            properties.inner_coefficient,
            properties.internal_temperature,
            spacing,
        )
    }

    /// Outer face: convection to the outside air.
    pub fn outer(properties: &Properties, spacing: f64) -> Self {
        Self::new(
            properties.conductivity,
            properties.outer_coefficient,
            properties.external_temperature,
            spacing,
        )
    }

    /// Ambient temperature the face convects with.
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    /// Face temperature given the inward neighbour's temperature.
    #[inline]
    pub fn relax(&self, neighbour: f64) -> f64 {
        let conduction = 2.0 * self.conductivity;
        let convection = 2.0 * self.coefficient * self.spacing;
        (conduction * neighbour + convection * self.ambient) / (conduction + convection)
    }
}
