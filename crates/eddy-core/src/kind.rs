//! Field kind classification driving the boundary sign rules.

use std::fmt;

/// Classification of a field for boundary enforcement.
///
/// Every field the solver touches is one of three kinds. The kind decides
/// the sign applied when a border cell mirrors its interior neighbour and
/// when an obstacle cell reflects the surrounding flow:
///
/// - [`Scalar`](Self::Scalar) fields mirror unchanged everywhere.
/// - [`VelocityX`](Self::VelocityX) negates across the left/right domain
///   edges — no flow through a vertical wall.
/// - [`VelocityY`](Self::VelocityY) negates across the top/bottom domain
///   edges — no flow through a horizontal wall.
///
/// Both velocity kinds negate at obstacle faces: obstacles are solid, so
/// no flow is permitted into them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A quantity carried by the flow (density, pressure, divergence).
    Scalar,
    /// The horizontal velocity component.
    VelocityX,
    /// The vertical velocity component.
    VelocityY,
}

impl FieldKind {
    /// Whether this kind is a velocity component.
    ///
    /// Velocity components are negated at obstacle faces; scalars are not.
    pub fn is_velocity(self) -> bool {
        matches!(self, Self::VelocityX | Self::VelocityY)
    }

    /// Whether values mirror with a sign flip across the left/right edges.
    pub fn negates_at_vertical_edge(self) -> bool {
        matches!(self, Self::VelocityX)
    }

    /// Whether values mirror with a sign flip across the top/bottom edges.
    pub fn negates_at_horizontal_edge(self) -> bool {
        matches!(self, Self::VelocityY)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::VelocityX => write!(f, "x-velocity"),
            Self::VelocityY => write!(f, "y-velocity"),
        }
    }
}
