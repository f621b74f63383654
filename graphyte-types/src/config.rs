//! Configuration types shared across the orchestrator, connectors, and the pipeline.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GraphyteError;

/// Aggregation applied to the samples that fall into one resample bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Sum of present samples. Used by the raw fetch path.
    Sum,
    /// Arithmetic mean of present samples. Used by the interactive path.
    #[default]
    Mean,
    /// Median of present samples.
    Median,
    /// Smallest present sample.
    Min,
    /// Largest present sample.
    Max,
    /// Earliest present sample.
    First,
    /// Latest present sample.
    Last,
    /// Number of present samples.
    Count,
}

impl Aggregation {
    /// Lowercase label used in logs and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Min => "min",
            Self::Max => "max",
            Self::First => "first",
            Self::Last => "last",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = GraphyteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "mean" | "avg" | "average" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "count" => Ok(Self::Count),
            other => Err(GraphyteError::InvalidArg(format!(
                "unknown aggregation method: {other}"
            ))),
        }
    }
}

/// Payload format requested from the Graphite render API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RenderFormat {
    /// `name,start,end,step|v1,v2,...` lines; steps are declared by the backend.
    #[default]
    Raw,
    /// `[{"target": .., "datapoints": [[value, ts], ..]}]`; steps are inferred.
    Json,
}

impl RenderFormat {
    /// Value of the `format` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Json => "json",
        }
    }
}

/// PEM-encoded client certificate presented to the render endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCert {
    /// Path to the PEM certificate chain.
    pub cert_pem: PathBuf,
    /// Path to the PEM (PKCS#8) private key.
    pub key_pem: PathBuf,
}

/// Connection settings for a Graphite render endpoint.
///
/// Passed explicitly to the connector at construction time; there is no
/// process-wide backend host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphiteConfig {
    /// Full URL of the render endpoint, e.g. `https://graphite.example.com/render`.
    pub host: String,
    /// Optional client certificate for mutual TLS.
    pub client_cert: Option<ClientCert>,
    /// Skip server certificate verification.
    pub accept_invalid_certs: bool,
    /// Payload format requested from the backend.
    pub format: RenderFormat,
}

impl Default for GraphiteConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8080/render".to_string(),
            client_cert: None,
            accept_invalid_certs: false,
            format: RenderFormat::Raw,
        }
    }
}

/// Global configuration for the `Graphyte` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphyteConfig {
    /// Upper bound for a single connector fetch.
    pub fetch_timeout: Duration,
    /// Options applied when a caller does not pass their own.
    pub default_options: AnalysisOptions,
}

impl Default for GraphyteConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            default_options: AnalysisOptions::default(),
        }
    }
}

/// Daily time-of-day window applied to a table.
///
/// `start_hour == end_hour == 0` disables the window. `end_hour` is exclusive.
/// When `start_hour > end_hour` the window wraps past midnight and covers
/// `[start_hour, 24) ∪ [0, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayWindow {
    /// First hour kept (0-23).
    pub start_hour: u8,
    /// First hour masked again (0-23).
    pub end_hour: u8,
    /// Zone used to compute the local time of day; UTC when `None`.
    pub timezone: Option<chrono_tz::Tz>,
    /// Also mask Saturdays and Sundays.
    pub weekdays_only: bool,
}

impl DayWindow {
    /// The disabled sentinel (0/0).
    pub const DISABLED: Self = Self {
        start_hour: 0,
        end_hour: 0,
        timezone: None,
        weekdays_only: false,
    };

    /// Build a validated window from an hour pair.
    ///
    /// # Errors
    /// Returns `InvalidArg` if an hour is above 23 or if `start == end` while
    /// not being the 0/0 sentinel.
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, GraphyteError> {
        let w = Self {
            start_hour,
            end_hour,
            timezone: None,
            weekdays_only: false,
        };
        w.validate()?;
        Ok(w)
    }

    /// Set the zone used to compute local hours.
    #[must_use]
    pub const fn with_timezone(mut self, tz: chrono_tz::Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Toggle masking of weekend days.
    #[must_use]
    pub const fn weekdays_only(mut self, yes: bool) -> Self {
        self.weekdays_only = yes;
        self
    }

    /// True for the 0/0 sentinel without a weekday restriction.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.start_hour == 0 && self.end_hour == 0 && !self.weekdays_only
    }

    /// Check hour bounds and reject empty windows.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the window is out of range or empty.
    pub fn validate(&self) -> Result<(), GraphyteError> {
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(GraphyteError::InvalidArg(format!(
                "day window hours must be within 0-23, got {}..{}",
                self.start_hour, self.end_hour
            )));
        }
        if self.start_hour == self.end_hour && self.start_hour != 0 {
            return Err(GraphyteError::InvalidArg(format!(
                "empty day window {}..{}",
                self.start_hour, self.end_hour
            )));
        }
        Ok(())
    }

    /// Whether a local hour of day falls inside the window.
    ///
    /// The 0/0 sentinel admits every hour.
    #[must_use]
    pub const fn admits_hour(&self, hour: u32) -> bool {
        let start = self.start_hour as u32;
        let end = self.end_hour as u32;
        if start == 0 && end == 0 {
            true
        } else if start < end {
            hour >= start && hour < end
        } else {
            hour >= start || hour < end
        }
    }
}

/// Per-request reshaping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Explicit target frequency in seconds; reconciled automatically when `None`.
    pub resample_seconds: Option<i64>,
    /// Aggregation used whenever a series is resampled.
    pub aggregation: Aggregation,
    /// Daily time-of-day window.
    pub day_window: DayWindow,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::interactive()
    }
}

impl AnalysisOptions {
    /// Options for the interactive path: `Mean` aggregation, no window.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            resample_seconds: None,
            aggregation: Aggregation::Mean,
            day_window: DayWindow::DISABLED,
        }
    }

    /// Options for the raw fetch path: `Sum` aggregation, no window.
    #[must_use]
    pub const fn raw() -> Self {
        Self {
            resample_seconds: None,
            aggregation: Aggregation::Sum,
            day_window: DayWindow::DISABLED,
        }
    }

    /// Request an explicit resample frequency.
    #[must_use]
    pub const fn resample(mut self, seconds: i64, aggregation: Aggregation) -> Self {
        self.resample_seconds = Some(seconds);
        self.aggregation = aggregation;
        self
    }

    /// Restrict rows to a daily window.
    #[must_use]
    pub const fn day_window(mut self, window: DayWindow) -> Self {
        self.day_window = window;
        self
    }
}
