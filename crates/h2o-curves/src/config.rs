//! Scenario configuration file.

use crate::builder::CurveOptions;
use crate::error::{CurveError, CurveResult};
use crate::sampling::{ReferencePoint, SweepRange, TemperatureBound};
use serde::{Deserialize, Serialize};
use std::path::Path;

const TRIPLE: TemperatureBound = TemperatureBound::Reference(ReferencePoint::TriplePoint);
const CRITICAL: TemperatureBound = TemperatureBound::Reference(ReferencePoint::CriticalPoint);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatentHeatConfig {
    pub vaporization: SweepRange,
    pub sublimation: SweepRange,
    pub fusion: SweepRange,
}

impl Default for LatentHeatConfig {
    fn default() -> Self {
        Self {
            vaporization: SweepRange::new(TRIPLE, CRITICAL, 300),
            sublimation: SweepRange::new(TemperatureBound::Kelvin(150.0), TRIPLE, 300),
            // Ice Ih-III-liquid triple point up to the triple point
            fusion: SweepRange::new(TemperatureBound::Kelvin(251.165), TRIPLE, 300),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub liquid: SweepRange,
    pub solid: SweepRange,
    /// Dense liquid samples near the triple point
    pub inset: SweepRange,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            liquid: SweepRange::new(TRIPLE, TemperatureBound::Kelvin(373.15), 200),
            solid: SweepRange::new(
                TemperatureBound::Kelvin(248.15),
                TemperatureBound::Kelvin(273.15),
                100,
            ),
            inset: SweepRange::new(TRIPLE, TemperatureBound::Kelvin(283.15), 100),
        }
    }
}

/// Sample ranges and curve options for both scenarios.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub latent_heat: LatentHeatConfig,
    pub volume: VolumeConfig,
    pub curves: CurveOptions,
}

impl ScenarioConfig {
    pub fn validate(&self) -> CurveResult<()> {
        let ranges = [
            ("latent_heat.vaporization", &self.latent_heat.vaporization),
            ("latent_heat.sublimation", &self.latent_heat.sublimation),
            ("latent_heat.fusion", &self.latent_heat.fusion),
            ("volume.liquid", &self.volume.liquid),
            ("volume.solid", &self.volume.solid),
            ("volume.inset", &self.volume.inset),
        ];
        for (name, range) in ranges {
            if range.samples == 0 {
                return Err(CurveError::Config {
                    what: format!("{name}: samples must be at least 1"),
                });
            }
            for bound in [range.start, range.end] {
                if let TemperatureBound::Kelvin(t) = bound
                    && !(t.is_finite() && t > 0.0)
                {
                    return Err(CurveError::Config {
                        what: format!("{name}: temperature {t} K is not physical"),
                    });
                }
            }
        }
        self.curves.validate()
    }

    pub fn from_yaml_str(content: &str) -> CurveResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> CurveResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub fn load_yaml(path: &Path) -> CurveResult<ScenarioConfig> {
    let content = std::fs::read_to_string(path)?;
    ScenarioConfig::from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, config: &ScenarioConfig) -> CurveResult<()> {
    config.validate()?;
    std::fs::write(path, config.to_yaml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{CurveKind, DensityStrategy, Seed};
    use h2o_eos::Phase;

    #[test]
    fn empty_document_gives_defaults() {
        let config = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ScenarioConfig::default());
        assert_eq!(config.latent_heat.vaporization.samples, 300);
        assert_eq!(config.volume.inset.samples, 100);
        assert_eq!(config.curves.isobar_pressure, 101_325.0);
        assert!(!config.curves.carry_seed);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let yaml = r#"
latent_heat:
  fusion:
    start: 255.0
    end: triple_point
    samples: 20
curves:
  carry_seed: true
  solver:
    max_iterations: 80
  strategies:
    - kind: fusion
      phase: liquid
      strategy:
        type: solve
        seed:
          type: constant
          density: 1050.0
"#;
        let config = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.latent_heat.fusion.samples, 20);
        assert_eq!(config.latent_heat.sublimation.samples, 300);
        assert!(config.curves.carry_seed);
        assert_eq!(config.curves.solver.max_iterations, 80);
        assert_eq!(config.curves.solver.tolerance.rel, 1e-6);
        assert_eq!(
            config.curves.strategy(CurveKind::Fusion, Phase::Liquid),
            DensityStrategy::Solve {
                seed: Seed::Constant { density: 1050.0 }
            }
        );
    }

    #[test]
    fn partial_tolerance_keeps_other_bound() {
        let yaml = "curves:\n  solver:\n    tolerance:\n      abs: 1.0e-6\n";
        let config = ScenarioConfig::from_yaml_str(yaml).unwrap();
        let tolerance = config.curves.solver.tolerance;
        assert_eq!(tolerance.abs, 1e-6);
        assert_eq!(tolerance.rel, 1e-6);
        assert_eq!(config.curves.solver.max_iterations, 50);
    }

    #[test]
    fn yaml_roundtrip() {
        let mut config = ScenarioConfig::default();
        config.volume.solid.samples = 42;
        config.curves.carry_seed = true;
        let yaml = config.to_yaml_string().unwrap();
        let back = ScenarioConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            ScenarioConfig::from_yaml_str("volume:\n  liquid:\n    start: 280.0\n    end: 300.0\n    samples: 0\n"),
            Err(CurveError::Config { .. })
        ));
        assert!(matches!(
            ScenarioConfig::from_yaml_str("curves:\n  isobar_pressure: -1.0\n"),
            Err(CurveError::Config { .. })
        ));
        assert!(matches!(
            ScenarioConfig::from_yaml_str("latent_heat: [1, 2]"),
            Err(CurveError::Yaml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_yaml(Path::new("/nonexistent/h2o-scenario.yaml")).unwrap_err();
        assert!(matches!(err, CurveError::Io(_)));
    }
}
