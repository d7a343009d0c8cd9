use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute + relative tolerance pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-6,
        }
    }
}

impl Tolerances {
    /// Allowed magnitude of an error measured against `scale`.
    pub fn bound(&self, scale: Real) -> Real {
        self.abs + self.rel * scale.abs()
    }

    /// True when `error` is within `abs + rel * |scale|`.
    pub fn accepts(&self, error: Real, scale: Real) -> bool {
        error.abs() <= self.bound(scale)
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Evenly spaced samples over `[start, end]`, both endpoints included.
///
/// The last sample is pinned to `end` so range checks on closed validity
/// intervals see the exact bound.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Result<Vec<Real>, CoreError> {
    ensure_finite(start, "linspace start")?;
    ensure_finite(end, "linspace end")?;
    match num_points {
        0 => Err(CoreError::InvalidArg {
            what: "linspace needs at least one point",
        }),
        1 => Ok(vec![start]),
        _ => {
            let delta = (end - start) / (num_points - 1) as Real;
            let mut points: Vec<Real> = (0..num_points)
                .map(|i| start + i as Real * delta)
                .collect();
            points[num_points - 1] = end;
            Ok(points)
        }
    }
}

/// Check that `values` is non-empty, finite and strictly increasing or
/// strictly decreasing.
pub fn ensure_strictly_monotonic(values: &[Real]) -> Result<(), CoreError> {
    let Some(&first) = values.first() else {
        return Err(CoreError::InvalidArg {
            what: "sequence must not be empty",
        });
    };
    ensure_finite(first, "sequence value")?;
    if values.len() == 1 {
        return Ok(());
    }

    let increasing = values[1] > first;
    for (i, pair) in values.windows(2).enumerate() {
        ensure_finite(pair[1], "sequence value")?;
        let ok = if increasing {
            pair[1] > pair[0]
        } else {
            pair[1] < pair[0]
        };
        if !ok {
            return Err(CoreError::NotMonotonic { index: i + 1 });
        }
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_monotonic(
            start in 1.0_f64..500.0,
            span in 1e-3_f64..500.0,
            n in 2_usize..400,
        ) {
            let points = linspace(start, start + span, n).unwrap();
            prop_assert_eq!(points.len(), n);
            prop_assert!(ensure_strictly_monotonic(&points).is_ok());
        }
    }
}
