//! Display units for each scenario's axes.

use h2o_core::{k, to_celsius};
use h2o_curves::{Quantity, Series};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_unit: &'static str,
    pub y_unit: &'static str,
    celsius: bool,
    y_scale: f64,
}

impl Axes {
    pub fn for_quantity(quantity: Quantity) -> Self {
        match quantity {
            Quantity::LatentHeat => Self {
                x_label: "Temperature (K)",
                y_label: "Enthalpy of transformation (MJ/kg)",
                x_unit: "K",
                y_unit: "MJ/kg",
                celsius: false,
                y_scale: 1e-6,
            },
            Quantity::SpecificVolume => Self {
                x_label: "Temperature (°C)",
                y_label: "Volume (L/kg)",
                x_unit: "°C",
                y_unit: "L/kg",
                celsius: true,
                y_scale: 1e3,
            },
        }
    }

    /// Temperature [K] on the x axis.
    pub fn x(&self, t: f64) -> f64 {
        if self.celsius { to_celsius(k(t)) } else { t }
    }

    /// SI value on the y axis.
    pub fn y(&self, v: f64) -> f64 {
        v * self.y_scale
    }

    pub fn points(&self, series: &Series) -> Vec<(f64, f64)> {
        series.points().map(|(t, v)| (self.x(t), self.y(v))).collect()
    }
}

/// Data range widened by `pad` of its span on both sides.
pub fn padded_range(values: impl Iterator<Item = f64>, pad: f64) -> Option<Range<f64>> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let span = if hi > lo { hi - lo } else { lo.abs().max(1.0) };
    Some(lo - pad * span..hi + pad * span)
}
