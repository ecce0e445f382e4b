//! Run configuration, defaults, and validation.
//!
//! [`SimulationConfig`] is the single immutable input for one simulation
//! run. [`validate()`](SimulationConfig::validate) checks every structural
//! and numerical invariant up front, so the solver never sees a zero
//! conductivity or a two-node mesh.

use crate::error::ConfigError;
use crate::snap_to_index;

/// Upper bound on nodes per axis of the quarter-domain.
///
/// Keeps `n²` (quadrant) and `(2n)²` (full field) far from overflow and the
/// working set within a few gigabytes.
pub const MAX_NODES_PER_AXIS: usize = 16_384;

// ── Properties ─────────────────────────────────────────────────────

/// Material and ambient properties of the chimney wall.
#[derive(Clone, Debug, PartialEq)]
pub struct Properties {
    /// Thermal conductivity `k` of the wall (W/m·°C). Default: 1.4.
    pub conductivity: f64,
    /// Internal convection coefficient `h_i` (W/m²·°C). Default: 60.
    pub inner_coefficient: f64,
    /// External convection coefficient `h_o` (W/m²·°C). Default: 12.
    pub outer_coefficient: f64,
    /// Temperature of the flue gas (°C). Default: 350.
    pub internal_temperature: f64,
    /// Temperature of the outside air (°C). Default: 25.
    pub external_temperature: f64,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            conductivity: 1.4,
            inner_coefficient: 60.0,
            outer_coefficient: 12.0,
            internal_temperature: 350.0,
            external_temperature: 25.0,
        }
    }
}

impl Properties {
    /// Mean of the two ambient temperatures, used to seed the solid wall.
    pub fn mean_temperature(&self) -> f64 {
        (self.internal_temperature + self.external_temperature) / 2.0
    }

    /// Check that coefficients are positive and temperatures finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("conductivity", self.conductivity),
            ("inner_coefficient", self.inner_coefficient),
            ("outer_coefficient", self.outer_coefficient),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveProperty { name, value });
            }
        }
        for (name, value) in [
            ("internal_temperature", self.internal_temperature),
            ("external_temperature", self.external_temperature),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteTemperature { name, value });
            }
        }
        Ok(())
    }
}

// ── Geometry ───────────────────────────────────────────────────────

/// Square chimney cross-section.
///
/// The quarter-domain spans `0..=outer_side / 2` along each axis, measured
/// from the chimney's centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Outer side length `L_ext` (m). Default: 0.30.
    pub outer_side: f64,
    /// Inner side length `L_int` (m). Default: 0.25.
    pub inner_side: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            outer_side: 0.30,
            inner_side: 0.25,
        }
    }
}

impl Geometry {
    /// Extent of the quarter-domain along each axis, `L_ext / 2`.
    pub fn half_side(&self) -> f64 {
        self.outer_side / 2.0
    }

    /// Wall thickness `e = (L_ext - L_int) / 2`.
    pub fn wall_thickness(&self) -> f64 {
        (self.outer_side - self.inner_side) / 2.0
    }

    /// Check `0 < inner_side < outer_side`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.outer_side.is_finite()
            && self.inner_side.is_finite()
            && self.inner_side > 0.0
            && self.inner_side < self.outer_side;
        if !ok {
            return Err(ConfigError::InvalidGeometry {
                outer_side: self.outer_side,
                inner_side: self.inner_side,
            });
        }
        Ok(())
    }
}

// ── Mesh ───────────────────────────────────────────────────────────

/// Finite-difference mesh resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Node spacing `h` (m). Default: 0.01.
    pub spacing: f64,
}

impl Default for Mesh {
    fn default() -> Self {
        Self { spacing: 0.01 }
    }
}

impl Mesh {
    /// Nodes per axis of the quarter-domain: `floor((L_ext/2) / h) + 1`.
    ///
    /// A ratio within [`INDEX_SNAP`](crate::INDEX_SNAP) of an integer is
    /// snapped to it before flooring. Fails for invalid spacing or when the
    /// count falls outside `3..=MAX_NODES_PER_AXIS`.
    pub fn node_count(&self, geometry: &Geometry) -> Result<usize, ConfigError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                value: self.spacing,
            });
        }
        let ratio = geometry.half_side() / self.spacing;
        if !ratio.is_finite() || ratio >= MAX_NODES_PER_AXIS as f64 {
            return Err(ConfigError::MeshTooFine {
                nodes: if ratio.is_finite() {
                    (ratio as usize).saturating_add(1)
                } else {
                    usize::MAX
                },
                max: MAX_NODES_PER_AXIS,
            });
        }
        let intervals = snap_to_index(ratio).unwrap_or_else(|| ratio.max(0.0).floor() as usize);
        let nodes = intervals + 1;
        if nodes < 3 {
            return Err(ConfigError::MeshTooCoarse { nodes });
        }
        if nodes > MAX_NODES_PER_AXIS {
            return Err(ConfigError::MeshTooFine {
                nodes,
                max: MAX_NODES_PER_AXIS,
            });
        }
        Ok(nodes)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Treatment of the last row and column of the quarter-domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OuterEdge {
    /// The outermost ring is never updated and keeps its seeded value; the
    /// sweep stops one node short of the outer face.
    #[default]
    Frozen,
    /// The sweep also covers the last row and column, applying the
    /// external-convection formula there.
    Convective,
}

/// Gauss-Seidel iteration controls.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Stop once the largest per-sweep change drops below this (°C). Default: 1e-4.
    pub tolerance: f64,
    /// Hard cap on the number of sweeps. Default: 5000.
    pub max_iterations: usize,
    /// Whether the outer face takes part in the sweep. Default: [`OuterEdge::Frozen`].
    pub outer_edge: OuterEdge,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 5000,
            outer_edge: OuterEdge::Frozen,
        }
    }
}

impl SolverConfig {
    /// Check tolerance and iteration cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete, immutable input for one chimney simulation.
///
/// `Default` reproduces the reference chimney: a 30 cm brick-like wall
/// around a 25 cm flue, 350 °C gas, 25 °C outside air, 1 cm mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationConfig {
    /// Material and ambient properties.
    pub properties: Properties,
    /// Cross-section dimensions.
    pub geometry: Geometry,
    /// Mesh resolution.
    pub mesh: Mesh,
    /// Iteration controls.
    pub solver: SolverConfig,
}

impl SimulationConfig {
    /// Validate all invariants, in order: properties, temperatures,
    /// geometry, mesh, solver.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.properties.validate()?;
        self.geometry.validate()?;
        self.mesh.node_count(&self.geometry)?;
        self.solver.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SimulationConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.mesh.node_count(&cfg.geometry).unwrap(), 16);
    }

    #[test]
    fn default_geometry_derivations() {
        let g = Geometry::default();
        assert!((g.half_side() - 0.15).abs() < 1e-15);
        assert!((g.wall_thickness() - 0.025).abs() < 1e-15);
    }

    #[test]
    fn mean_temperature_is_midpoint() {
        assert!((Properties::default().mean_temperature() - 187.5).abs() < 1e-12);
    }

    #[test]
    fn zero_conductivity_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.properties.conductivity = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveProperty {
                name: "conductivity",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_coefficients_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.properties.inner_coefficient = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveProperty {
                name: "inner_coefficient",
                ..
            })
        ));

        let mut cfg = SimulationConfig::default();
        cfg.properties.outer_coefficient = f64::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveProperty {
                name: "outer_coefficient",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_temperature_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.properties.external_temperature = f64::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFiniteTemperature {
                name: "external_temperature",
                ..
            })
        ));
    }

    #[test]
    fn inverted_geometry_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.geometry.inner_side = 0.30;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidGeometry { .. })
        ));
        cfg.geometry.inner_side = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn bad_spacing_rejected() {
        let g = Geometry::default();
        for spacing in [0.0, -0.01, f64::NAN] {
            assert!(matches!(
                Mesh { spacing }.node_count(&g),
                Err(ConfigError::InvalidSpacing { .. })
            ));
        }
    }

    #[test]
    fn coarse_mesh_rejected() {
        // 0.15 / 0.1 = 1.5 -> 2 nodes.
        let g = Geometry::default();
        assert_eq!(
            Mesh { spacing: 0.1 }.node_count(&g),
            Err(ConfigError::MeshTooCoarse { nodes: 2 })
        );
        // 0.15 / 0.075 = 2 -> 3 nodes, the minimum.
        assert_eq!(Mesh { spacing: 0.075 }.node_count(&g), Ok(3));
    }

    #[test]
    fn fine_mesh_rejected() {
        let g = Geometry::default();
        assert!(matches!(
            Mesh { spacing: 1e-9 }.node_count(&g),
            Err(ConfigError::MeshTooFine { .. })
        ));
    }

    #[test]
    fn node_count_snaps_float_noise() {
        // 0.3 / 2 / 0.05 is 2.9999999999999996 in binary floating point.
        let g = Geometry {
            outer_side: 0.3,
            inner_side: 0.2,
        };
        assert_eq!(Mesh { spacing: 0.05 }.node_count(&g), Ok(4));
    }

    #[test]
    fn solver_limits_rejected() {
        let mut cfg = SimulationConfig::default();
        cfg.solver.tolerance = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidTolerance { .. })
        ));
        let mut cfg = SimulationConfig::default();
        cfg.solver.max_iterations = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn outer_edge_defaults_to_frozen() {
        assert_eq!(SolverConfig::default().outer_edge, OuterEdge::Frozen);
    }
}
