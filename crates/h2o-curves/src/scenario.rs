//! Scenario assembly: the latent heat and specific volume figures.

use crate::builder::build_curve;
use crate::config::ScenarioConfig;
use crate::curve::Curve;
use crate::error::{CurveError, CurveFailure, CurveResult};
use crate::kind::CurveKind;
use crate::sampling::SweepRange;
use h2o_eos::{EquationOfState, Phase};
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioName {
    /// Latent heats of vaporization, sublimation and fusion
    LatentHeat,
    /// Specific volume of liquid and ice at the isobar pressure
    Volume,
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatentHeat => write!(f, "latent heat"),
            Self::Volume => write!(f, "volume"),
        }
    }
}

/// What a scenario's series values measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// J/kg
    LatentHeat,
    /// m³/kg
    SpecificVolume,
}

/// Where a series belongs in the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    Main,
    /// Close-up panel
    Inset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub kind: CurveKind,
    pub role: SeriesRole,
    /// Temperatures [K]
    pub temperatures: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures.iter().copied().zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Vertical reference line [K]
    Temperature { label: String, temperature: f64 },
    /// Pressure the figure was computed at [Pa]
    Pressure { label: String, pressure: f64 },
    /// Dashed line joining two series end points, (T [K], value)
    Connector { from: (f64, f64), to: (f64, f64) },
}

/// Assembled series plus whatever failed along the way.
#[derive(Debug)]
pub struct Scenario {
    pub name: ScenarioName,
    pub quantity: Quantity,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub failures: Vec<CurveFailure>,
}

impl Scenario {
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn collected failures into one error.
    pub fn ensure_complete(self) -> CurveResult<Self> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(CurveError::Incomplete(self.failures))
        }
    }
}

pub const VAPORIZATION: &str = "Vaporization";
pub const SUBLIMATION: &str = "Sublimation";
pub const FUSION: &str = "Fusion";
pub const LIQUID: &str = "Liquid water";
pub const ICE: &str = "Ice Ih";
pub const LIQUID_INSET: &str = "Liquid water (near triple point)";

/// Build every curve of `name`. Curves fail independently; failures are
/// collected on the returned scenario.
pub fn assemble<E>(name: ScenarioName, eos: &E, config: &ScenarioConfig) -> Scenario
where
    E: EquationOfState + ?Sized,
{
    let mut assembler = Assembler {
        eos,
        config,
        series: Vec::new(),
        failures: Vec::new(),
    };

    let (quantity, annotations) = match name {
        ScenarioName::LatentHeat => (Quantity::LatentHeat, assembler.latent_heat()),
        ScenarioName::Volume => (Quantity::SpecificVolume, assembler.volume()),
    };

    info!(
        scenario = %name,
        eos = eos.name(),
        series = assembler.series.len(),
        failures = assembler.failures.len(),
        "scenario assembled"
    );

    Scenario {
        name,
        quantity,
        series: assembler.series,
        annotations,
        failures: assembler.failures,
    }
}

struct Assembler<'a, E: ?Sized> {
    eos: &'a E,
    config: &'a ScenarioConfig,
    series: Vec<Series>,
    failures: Vec<CurveFailure>,
}

impl<E: EquationOfState + ?Sized> Assembler<'_, E> {
    fn build(&mut self, label: &str, kind: CurveKind, range: &SweepRange) -> Option<Curve> {
        let result = range
            .sweep(self.eos)
            .and_then(|sweep| build_curve(kind, &sweep, self.eos, &self.config.curves));
        match result {
            Ok(curve) => Some(curve),
            Err(error) => {
                warn!(curve = label, %error, "curve failed");
                self.failures.push(CurveFailure {
                    label: label.to_string(),
                    kind,
                    error,
                });
                None
            }
        }
    }

    fn push(&mut self, label: &str, role: SeriesRole, curve: Curve, values: Vec<f64>) {
        self.series.push(Series {
            label: label.to_string(),
            kind: curve.kind,
            role,
            temperatures: curve.temperatures,
            values,
        });
    }

    fn latent_heat(&mut self) -> Vec<Annotation> {
        let cfg = &self.config.latent_heat;
        let curves = [
            (VAPORIZATION, CurveKind::Vaporization, cfg.vaporization),
            (SUBLIMATION, CurveKind::Sublimation, cfg.sublimation),
            (FUSION, CurveKind::Fusion, cfg.fusion),
        ];
        for (label, kind, range) in curves {
            if let Some(curve) = self.build(label, kind, &range)
                && let Some(latent) = curve.latent_heat()
            {
                self.push(label, SeriesRole::Main, curve, latent);
            }
        }

        vec![
            Annotation::Temperature {
                label: "Triple point".into(),
                temperature: self.eos.triple_point_temperature(),
            },
            Annotation::Temperature {
                label: "Critical point".into(),
                temperature: self.eos.critical_temperature(),
            },
        ]
    }

    fn volume(&mut self) -> Vec<Annotation> {
        let cfg = &self.config.volume;
        let (liquid, solid, inset) = (cfg.liquid, cfg.solid, cfg.inset);

        let mut liquid_start = None;
        let mut ice_end = None;

        if let Some(curve) = self.build(LIQUID, CurveKind::LiquidIsobar, &liquid) {
            let volumes = specific_volumes(&curve, Phase::Liquid);
            liquid_start = curve.temperatures.first().copied().zip(volumes.first().copied());
            self.push(LIQUID, SeriesRole::Main, curve, volumes);
        }
        if let Some(curve) = self.build(ICE, CurveKind::SolidIsobar, &solid) {
            let volumes = specific_volumes(&curve, Phase::Ice);
            ice_end = curve.temperatures.last().copied().zip(volumes.last().copied());
            self.push(ICE, SeriesRole::Main, curve, volumes);
        }
        if let Some(curve) = self.build(LIQUID_INSET, CurveKind::LiquidIsobar, &inset) {
            let volumes = specific_volumes(&curve, Phase::Liquid);
            self.push(LIQUID_INSET, SeriesRole::Inset, curve, volumes);
        }

        let mut annotations = vec![
            Annotation::Pressure {
                label: "Isobar".into(),
                pressure: self.config.curves.isobar_pressure,
            },
            Annotation::Temperature {
                label: "Triple point".into(),
                temperature: self.eos.triple_point_temperature(),
            },
        ];
        if let (Some(from), Some(to)) = (ice_end, liquid_start) {
            annotations.push(Annotation::Connector { from, to });
        }
        annotations
    }
}

fn specific_volumes(curve: &Curve, phase: Phase) -> Vec<f64> {
    curve
        .branch(phase)
        .map(|b| b.specific_volumes())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::TemperatureBound;
    use h2o_eos::Water;

    fn small_config() -> ScenarioConfig {
        let mut config = ScenarioConfig::default();
        config.latent_heat.vaporization.samples = 12;
        config.latent_heat.sublimation.samples = 12;
        config.latent_heat.fusion.samples = 12;
        config.volume.liquid.samples = 12;
        config.volume.solid.samples = 12;
        config.volume.inset.samples = 12;
        config
    }

    #[test]
    fn latent_heat_scenario_has_three_series() {
        let water = Water::new();
        let scenario = assemble(ScenarioName::LatentHeat, &water, &small_config());
        assert!(scenario.is_complete(), "{:?}", scenario.failures);
        assert_eq!(scenario.quantity, Quantity::LatentHeat);
        let labels: Vec<_> = scenario.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec![VAPORIZATION, SUBLIMATION, FUSION]);
        for s in &scenario.series {
            assert_eq!(s.temperatures.len(), 12);
            assert_eq!(s.values.len(), 12);
        }
    }

    #[test]
    fn volume_scenario_reports_connector() {
        let water = Water::new();
        let scenario = assemble(ScenarioName::Volume, &water, &small_config());
        assert!(scenario.is_complete(), "{:?}", scenario.failures);
        let inset = scenario.series(LIQUID_INSET).unwrap();
        assert_eq!(inset.role, SeriesRole::Inset);
        let connector = scenario
            .annotations
            .iter()
            .find_map(|a| match a {
                Annotation::Connector { from, to } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        assert_eq!(connector.0.0, 273.15);
        assert_eq!(connector.1.0, 273.16);
        // Ice is less dense than the liquid it melts into
        assert!(connector.0.1 > connector.1.1);
    }

    #[test]
    fn bad_range_fails_only_its_curve() {
        let water = Water::new();
        let mut config = small_config();
        config.latent_heat.sublimation.start = TemperatureBound::Kelvin(20.0);
        let scenario = assemble(ScenarioName::LatentHeat, &water, &config);
        assert_eq!(scenario.series.len(), 2);
        assert_eq!(scenario.failures.len(), 1);
        assert_eq!(scenario.failures[0].label, SUBLIMATION);
        assert_eq!(scenario.failures[0].error.temperature(), Some(20.0));
        assert!(matches!(
            scenario.ensure_complete(),
            Err(CurveError::Incomplete(f)) if f.len() == 1
        ));
    }
}
