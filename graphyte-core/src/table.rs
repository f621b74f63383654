//! Time-indexed table built by outer-joining reconciled series.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::GraphyteError;
use crate::series::{Sample, Series};
use crate::timeseries::infer::estimate_step_seconds;

/// One named column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Series name.
    pub name: String,
    /// One sample per index position.
    pub values: Vec<Sample>,
}

impl Column {
    /// Present values in row order.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| v.value())
    }
}

/// Ordered columns aligned to one shared, strictly increasing time index.
///
/// Every column has exactly one sample per index position and column names
/// are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    step: i64,
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl Table {
    /// Outer-join series on their timestamps.
    ///
    /// Column order equals input order. Positions a series does not cover are
    /// `Missing`.
    ///
    /// # Errors
    /// - `EmptySeriesSet` when `series` is empty.
    /// - `MalformedSeries` for a duplicate name or timestamps that are not
    ///   strictly increasing.
    ///
    /// ```
    /// use graphyte_core::{RawSeries, Sample, Table, timeseries::normalize::normalize};
    /// let a = normalize(RawSeries::new("a", 0, 60, [1.0, 2.0])).unwrap();
    /// let b = normalize(RawSeries::new("b", 60, 60, [3.0, 4.0])).unwrap();
    /// let t = Table::assemble(vec![a, b]).unwrap();
    /// assert_eq!(t.len(), 3);
    /// assert_eq!(t.column("b").unwrap().values[0], Sample::Missing);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "graphyte_core::table::assemble", skip(series), fields(series = series.len()))
    )]
    pub fn assemble(series: Vec<Series>) -> Result<Self, GraphyteError> {
        if series.is_empty() {
            return Err(GraphyteError::EmptySeriesSet);
        }

        let mut seen = HashSet::with_capacity(series.len());
        for s in &series {
            if !seen.insert(s.name.as_str()) {
                return Err(GraphyteError::malformed(&s.name, "duplicate series name"));
            }
            if s.points.windows(2).any(|w| w[1].ts <= w[0].ts) {
                return Err(GraphyteError::malformed(
                    &s.name,
                    "timestamps are not strictly increasing",
                ));
            }
        }

        let index: Vec<DateTime<Utc>> = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.ts))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let step = table_step(&series, &index);

        let columns = series
            .into_iter()
            .map(|s| {
                let mut values = Vec::with_capacity(index.len());
                let mut points = s.points.iter().peekable();
                for ts in &index {
                    match points.peek() {
                        Some(p) if p.ts == *ts => {
                            values.push(p.value);
                            points.next();
                        }
                        _ => values.push(Sample::Missing),
                    }
                }
                Column {
                    name: s.name,
                    values,
                }
            })
            .collect();

        Ok(Self {
            step,
            index,
            columns,
        })
    }

    /// Spacing of the index in seconds.
    ///
    /// The shared series step when every series sits on one grid; otherwise
    /// inferred from the index, so out-of-phase series report the finer
    /// spacing they produce together.
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Shared time index.
    #[must_use]
    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// Columns in input order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by series name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Replace every cell of the rows rejected by `keep` with `Missing`.
    ///
    /// Rows are never removed. Returns the number of masked rows.
    pub fn mask_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(DateTime<Utc>) -> bool,
    {
        let mut masked = 0;
        for (row, ts) in self.index.iter().enumerate() {
            if keep(*ts) {
                continue;
            }
            masked += 1;
            for col in &mut self.columns {
                col.values[row] = Sample::Missing;
            }
        }
        masked
    }
}

fn table_step(series: &[Series], index: &[DateTime<Utc>]) -> i64 {
    let first = series[0].step;
    let secs: Vec<i64> = index.iter().map(DateTime::timestamp).collect();
    let shared = series.iter().all(|s| s.step == first);
    let in_phase = secs
        .first()
        .is_none_or(|&t0| secs.iter().all(|&t| (t - t0) % first == 0));
    if shared && in_phase {
        return first;
    }
    estimate_step_seconds(&secs)
        .unwrap_or_else(|| series.iter().map(|s| s.step).max().unwrap_or(first))
}

/// Conversion into a `polars` frame.
#[cfg(feature = "dataframe")]
pub trait ToDataFrame {
    /// Build a frame with a `timestamp` column (epoch milliseconds) followed by
    /// one nullable `f64` column per series.
    ///
    /// # Errors
    /// Propagates `polars` construction errors.
    fn to_dataframe(&self) -> polars::prelude::PolarsResult<polars::prelude::DataFrame>;
}

#[cfg(feature = "dataframe")]
impl ToDataFrame for Table {
    fn to_dataframe(&self) -> polars::prelude::PolarsResult<polars::prelude::DataFrame> {
        use polars::prelude::{Column as PlColumn, DataFrame};

        let ts: Vec<i64> = self.index.iter().map(DateTime::timestamp_millis).collect();
        let mut cols = Vec::with_capacity(self.columns.len() + 1);
        cols.push(PlColumn::new("timestamp".into(), ts));
        for c in &self.columns {
            let values: Vec<Option<f64>> = c.values.iter().map(|v| v.value()).collect();
            cols.push(PlColumn::new(c.name.as_str().into(), values));
        }
        DataFrame::new(cols)
    }
}
