//! The quarter-domain grid: node layout, solid mask, boundary lines.
//!
//! Node `(r, c)` sits at `x = axis[c]`, `y = axis[r]`, measured from the
//! chimney's centre. The wall occupies every node whose coordinates are both
//! at least the wall thickness `e`; everything else is flue cavity.
//!
//! Boundary lines are located by index arithmetic rather than by comparing
//! floating-point coordinates. The inner interface is the node index
//! `e / dx` when that ratio lands on the lattice, and absent otherwise; the
//! outer face is always the last index.

use flue_core::{snap_to_index, ConfigError, Geometry, Grid2, Mesh};

use crate::axis::Axis;

/// One grid step towards a neighbouring node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `(r, c + 1)`.
    PlusX,
    /// `(r + 1, c)`.
    PlusY,
    /// `(r, c - 1)`.
    MinusX,
    /// `(r - 1, c)`.
    MinusY,
}

impl Step {
    /// Coordinates of the neighbour of `(r, c)` in this direction.
    ///
    /// Callers must not step off the grid; [`QuarterGrid::classify`] only
    /// hands out steps that stay inside for rows and columns `>= 1`.
    #[inline]
    pub fn neighbour(self, r: usize, c: usize) -> (usize, usize) {
        match self {
            Self::PlusX => (r, c + 1),
            Self::PlusY => (r + 1, c),
            Self::MinusX => (r, c - 1),
            Self::MinusY => (r - 1, c),
        }
    }
}

/// Which update rule a node takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Pure conduction: mean of the four axis neighbours.
    Interior,
    /// On the wall/flue interface; convects with the internal gas.
    InnerFace(Step),
    /// On the outer face; convects with the outside air.
    OuterFace(Step),
}

/// Quarter-domain grid with its solid mask.
#[derive(Clone, Debug)]
pub struct QuarterGrid {
    nodes: usize,
    spacing: f64,
    thickness: f64,
    axis: Axis,
    interface: Option<usize>,
    first_solid: usize,
    mask: Grid2<bool>,
}

impl QuarterGrid {
    /// Build the grid for a cross-section and mesh.
    ///
    /// Returns `Err(ConfigError::InvalidGeometry)` unless
    /// `0 < inner_side < outer_side`, and the mesh errors of
    /// [`Mesh::node_count`] for bad spacing.
    ///
    /// # Examples
    ///
    /// ```
    /// use flue_core::{Geometry, Mesh};
    /// use flue_mesh::QuarterGrid;
    ///
    /// let grid = QuarterGrid::build(&Geometry::default(), &Mesh::default()).unwrap();
    /// assert_eq!(grid.nodes(), 16);
    /// // The centre lies in the flue, the outer corner in the wall.
    /// assert!(!grid.is_solid(0, 0));
    /// assert!(grid.is_solid(15, 15));
    /// ```
    pub fn build(geometry: &Geometry, mesh: &Mesh) -> Result<Self, ConfigError> {
        geometry.validate()?;
        let nodes = mesh.node_count(geometry)?;
        let axis = Axis::linspace(0.0, geometry.half_side(), nodes);
        let thickness = geometry.wall_thickness();

        // e > 0, so node 0 (x = 0) is always cavity even when the ratio
        // snaps down to it.
        let ratio = thickness / axis.step();
        let snapped = snap_to_index(ratio);
        let first_solid = snapped
            .unwrap_or_else(|| ratio.ceil() as usize)
            .clamp(1, nodes - 1);
        // An interface on the centre line or the outer face would step off
        // the swept range; there the cavity or outer rule applies instead.
        let interface = snapped.filter(|&i| i >= 1 && i < nodes - 1);

        let mask = Grid2::from_fn(nodes, nodes, |r, c| r >= first_solid && c >= first_solid);

        tracing::debug!(
            nodes,
            node_step = axis.step(),
            thickness,
            interface = ?interface,
            first_solid,
            "built quarter grid"
        );

        Ok(Self {
            nodes,
            spacing: mesh.spacing,
            thickness,
            axis,
            interface,
            first_solid,
            mask,
        })
    }

    /// Nodes per axis, `n`.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Configured mesh spacing `h`, as used in the finite-difference formulas.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Wall thickness `e`.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Node coordinates along either axis (the grid is square).
    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    /// Index of the wall/flue interface line, if it falls on a node
    /// strictly between the centre line and the outer face.
    pub fn interface_index(&self) -> Option<usize> {
        self.interface
    }

    /// Index of the outer face line, `n - 1`.
    pub fn outer_index(&self) -> usize {
        self.nodes - 1
    }

    /// Lowest index whose coordinate is at least the wall thickness.
    pub fn first_solid_index(&self) -> usize {
        self.first_solid
    }

    /// The `n × n` solid mask.
    pub fn mask(&self) -> &Grid2<bool> {
        &self.mask
    }

    /// `true` if node `(r, c)` lies in the wall material.
    pub fn is_solid(&self, r: usize, c: usize) -> bool {
        self.mask.get(r, c).copied().unwrap_or(false)
    }

    /// Number of wall nodes.
    pub fn solid_count(&self) -> usize {
        let side = self.nodes - self.first_solid;
        side * side
    }

    /// Update rule for node `(r, c)`.
    ///
    /// Checked in fixed priority: `x` on the interface, `y` on the
    /// interface, `x` on the outer face, `y` on the outer face, else
    /// interior. The interface test wins even for nodes inside the wall.
    pub fn classify(&self, r: usize, c: usize) -> NodeKind {
        let outer = self.outer_index();
        if self.interface == Some(c) {
            NodeKind::InnerFace(Step::PlusX)
        } else if self.interface == Some(r) {
            NodeKind::InnerFace(Step::PlusY)
        } else if c == outer {
            NodeKind::OuterFace(Step::MinusX)
        } else if r == outer {
            NodeKind::OuterFace(Step::MinusY)
        } else {
            NodeKind::Interior
        }
    }
}
