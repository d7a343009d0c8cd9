//! h2o-curves: phase-boundary and isobar curves for water and ice, and the
//! latent heat and specific volume scenarios assembled from them.
//!
//! Each curve kind names a pressure source (a coexistence pressure or a fixed
//! isobar) and its participating phases. Per phase, a [`DensityStrategy`]
//! decides whether the density comes from a closed-form correlation or from
//! a Newton solve against the bulk equation of state.

pub mod builder;
pub mod config;
pub mod curve;
pub mod error;
pub mod kind;
pub mod sampling;
pub mod scenario;

pub use builder::{CurveOptions, StrategyOverride, build_curve};
pub use config::{LatentHeatConfig, ScenarioConfig, VolumeConfig, load_yaml, save_yaml};
pub use curve::{Curve, PhaseBranch, PhaseState};
pub use error::{CurveError, CurveFailure, CurveResult};
pub use kind::{CurveKind, DensityStrategy, Seed};
pub use sampling::{ReferencePoint, SweepRange, TemperatureBound, TemperatureSweep};
pub use scenario::{
    Annotation, Quantity, Scenario, ScenarioName, Series, SeriesRole, assemble,
};
