//! Phases of water.

use std::fmt;

/// Phase a property is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    Vapor,
    Liquid,
    /// Ice Ih.
    Ice,
}

impl Phase {
    /// Fluid phases are described by the bulk equation of state; ice has its own.
    pub fn is_fluid(self) -> bool {
        matches!(self, Self::Vapor | Self::Liquid)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vapor => write!(f, "vapor"),
            Self::Liquid => write!(f, "liquid"),
            Self::Ice => write!(f, "ice"),
        }
    }
}
