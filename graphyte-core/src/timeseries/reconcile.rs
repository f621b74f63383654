use serde::Serialize;

use crate::series::Series;
use crate::timeseries::resample::resample;
use crate::{Aggregation, GraphyteError};

/// Greatest common divisor by the Euclidean algorithm.
#[must_use]
pub const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

/// Least common multiple of two positive steps, `None` on overflow.
#[must_use]
pub const fn lcm(a: i64, b: i64) -> Option<i64> {
    let g = gcd(a, b);
    if g == 0 {
        return None;
    }
    (a / g).checked_mul(b)
}

/// Least common multiple of every step in the collection.
///
/// Order-independent. An empty collection yields `1`.
///
/// # Errors
/// Returns `IncompatibleFrequencies` for a non-positive step or when the
/// result overflows `i64`.
///
/// ```
/// use graphyte_core::timeseries::reconcile::common_step;
/// assert_eq!(common_step([60, 120, 300]).unwrap(), 600);
/// assert!(common_step([60, 0]).is_err());
/// ```
pub fn common_step<I>(steps: I) -> Result<i64, GraphyteError>
where
    I: IntoIterator<Item = i64>,
{
    steps.into_iter().try_fold(1_i64, |acc, step| {
        if step <= 0 {
            return Err(GraphyteError::IncompatibleFrequencies(format!(
                "step must be positive, got {step}"
            )));
        }
        lcm(acc, step).ok_or_else(|| {
            GraphyteError::IncompatibleFrequencies(format!(
                "lcm of steps overflows ({acc} and {step})"
            ))
        })
    })
}

/// What the reconciler decided to do with a batch of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResamplePlan {
    /// All series already share one step.
    Keep {
        /// The shared step in seconds.
        step: i64,
    },
    /// Every series is resampled onto the same grid.
    Resample {
        /// Target step in seconds.
        step: i64,
        /// Bucket aggregation.
        aggregation: Aggregation,
    },
}

impl ResamplePlan {
    /// Step of the reconciled grid.
    #[must_use]
    pub const fn step(&self) -> i64 {
        match self {
            Self::Keep { step } | Self::Resample { step, .. } => *step,
        }
    }
}

/// Choose how to bring `steps` onto a common grid.
///
/// - explicit `requested >= lcm(steps)`: resample to `requested`;
/// - explicit `requested < lcm(steps)`: ignored, planned as if absent;
/// - no request and differing steps: resample to the largest step;
/// - no request and equal steps: keep.
///
/// # Errors
/// Returns `EmptySeriesSet` for no steps and `IncompatibleFrequencies` for a
/// non-positive step or request.
pub fn plan(
    steps: &[i64],
    requested: Option<i64>,
    aggregation: Aggregation,
) -> Result<ResamplePlan, GraphyteError> {
    if steps.is_empty() {
        return Err(GraphyteError::EmptySeriesSet);
    }
    let common = common_step(steps.iter().copied())?;

    if let Some(freq) = requested {
        if freq <= 0 {
            return Err(GraphyteError::IncompatibleFrequencies(format!(
                "requested frequency must be positive, got {freq}s"
            )));
        }
        if freq >= common {
            return Ok(ResamplePlan::Resample {
                step: freq,
                aggregation,
            });
        }
    }

    let max = steps.iter().copied().max().unwrap_or(common);
    if steps.iter().all(|&s| s == max) {
        Ok(ResamplePlan::Keep { step: max })
    } else {
        Ok(ResamplePlan::Resample {
            step: max,
            aggregation,
        })
    }
}

/// Outcome of reconciling a batch, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Least common multiple of the input steps.
    pub common_step: i64,
    /// The plan that was applied.
    pub plan: ResamplePlan,
}

/// Bring a batch of normalized series onto one step.
///
/// # Errors
/// See [`plan`]; resampling errors are propagated as well.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "graphyte_core::reconcile",
        skip(series),
        fields(series = series.len(), requested = ?requested, aggregation = %aggregation),
    )
)]
pub fn reconcile(
    series: Vec<Series>,
    requested: Option<i64>,
    aggregation: Aggregation,
) -> Result<(Vec<Series>, Reconciliation), GraphyteError> {
    let steps: Vec<i64> = series.iter().map(|s| s.step).collect();
    let plan = plan(&steps, requested, aggregation)?;
    let common_step = common_step(steps.iter().copied())?;

    let out = match plan {
        ResamplePlan::Keep { .. } => series,
        ResamplePlan::Resample { step, aggregation } => {
            #[cfg(feature = "tracing")]
            tracing::debug!(step, %aggregation, "resampling series onto common grid");
            series
                .into_iter()
                .map(|s| resample(s, step, aggregation))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok((out, Reconciliation { common_step, plan }))
}
