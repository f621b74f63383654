use serde::Serialize;

use crate::series::Sample;
use crate::table::Table;

/// Variances at or below this fraction of the mean square count as zero.
const RELATIVE_EPSILON: f64 = 1e-12;

/// Pearson correlation over the rows where both inputs are present.
///
/// Returns `None` when fewer than two rows pair up or either side has
/// (numerically) zero variance.
#[must_use]
pub fn pearson(xs: &[Sample], ys: &[Sample]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x.value()?, y.value()?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    let (mut mag_x, mut mag_y) = (0.0, 0.0);
    for &(x, y) in &pairs {
        let (dx, dy) = (x - mean_x, y - mean_y);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
        mag_x += x * x;
        mag_y += y * y;
    }
    if sxx <= RELATIVE_EPSILON * mag_x || syy <= RELATIVE_EPSILON * mag_y {
        return None;
    }
    let r = sxy / (sxx * syy).sqrt();
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Symmetric pairwise correlation matrix with a unit diagonal.
///
/// Pairs without a defined correlation are reported as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlate every pair of columns in `table`.
    #[must_use]
    pub fn compute(table: &Table) -> Self {
        let cols = table.columns();
        let n = cols.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let r = pearson(&cols[i].values, &cols[j].values).unwrap_or(0.0);
                values[i][j] = r;
                values[j][i] = r;
            }
            values[i][i] = 1.0;
        }
        Self {
            names: cols.iter().map(|c| c.name.clone()).collect(),
            values,
        }
    }

    /// Series names in matrix order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Correlation between two named series.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        Some(self.values[i][j])
    }

    /// All correlations of one series, in matrix order.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<Vec<(String, f64)>> {
        let i = self.position(name)?;
        Some(
            self.names
                .iter()
                .cloned()
                .zip(self.values[i].iter().copied())
                .collect(),
        )
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
