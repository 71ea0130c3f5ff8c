//! Monitoring profiles documented on the site.
//!
//! The `monitor` command checks an endpoint on a fixed schedule. In smart
//! mode it additionally runs an AI analysis over the recent check history
//! every few checks. The site quotes these numbers in several places, so
//! they live here once and every page computes from them.

use serde::Serialize;

use crate::error::CatalogError;

/// Seconds between health checks, in every mode.
pub const BASE_INTERVAL_SECONDS: u32 = 30;

/// In smart mode, AI analysis runs once every this many checks.
pub const AI_ANALYSIS_EVERY_N_CHECKS: u32 = 3;

/// Monitoring mode selected by the `--smart` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringMode {
    /// Health checks only.
    #[default]
    Basic,
    /// Health checks plus periodic AI analysis.
    Smart,
}

impl MonitoringMode {
    /// Lowercase identifier used in JSON output and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitoringMode::Basic => "basic",
            MonitoringMode::Smart => "smart",
        }
    }

    /// Heading shown on rendered pages.
    pub fn display_name(&self) -> &'static str {
        match self {
            MonitoringMode::Basic => "Basic",
            MonitoringMode::Smart => "Smart",
        }
    }

    /// Parse a mode name, case-insensitively.
    pub fn from_str_loose(s: &str) -> Option<MonitoringMode> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Some(MonitoringMode::Basic),
            "smart" => Some(MonitoringMode::Smart),
            _ => None,
        }
    }
}

/// What the `monitor` command does in one mode.
///
/// `ai_analysis_every_n_checks` is `None` in basic mode and the field is
/// omitted from serialized JSON, so machine readers never see an AI knob
/// on a profile that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitoringProfile {
    /// Mode this profile describes.
    pub mode: MonitoringMode,
    /// Seconds between health checks.
    pub base_interval_seconds: u32,
    /// Checks between AI analyses; smart mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis_every_n_checks: Option<u32>,
}

impl MonitoringProfile {
    /// Seconds between AI analyses, if the mode runs any.
    ///
    /// # Examples
    ///
    /// ```
    /// use nuts_catalog::monitoring::{MonitoringMode, profile};
    ///
    /// let smart = profile(MonitoringMode::Smart);
    /// assert_eq!(smart.effective_ai_interval_seconds(), Some(90));
    /// ```
    pub fn effective_ai_interval_seconds(&self) -> Option<u32> {
        self.ai_analysis_every_n_checks
            .map(|n| n * self.base_interval_seconds)
    }
}

/// The profile for a mode. Total over the closed enum.
pub fn profile(mode: MonitoringMode) -> MonitoringProfile {
    match mode {
        MonitoringMode::Basic => MonitoringProfile {
            mode,
            base_interval_seconds: BASE_INTERVAL_SECONDS,
            ai_analysis_every_n_checks: None,
        },
        MonitoringMode::Smart => MonitoringProfile {
            mode,
            base_interval_seconds: BASE_INTERVAL_SECONDS,
            ai_analysis_every_n_checks: Some(AI_ANALYSIS_EVERY_N_CHECKS),
        },
    }
}

/// Both profiles, basic first.
pub fn profiles() -> [MonitoringProfile; 2] {
    [
        profile(MonitoringMode::Basic),
        profile(MonitoringMode::Smart),
    ]
}

/// The profile for a mode given as a string.
///
/// Fails with [`CatalogError::InvalidMode`] on anything outside `basic`
/// and `smart`; matching is case-insensitive.
pub fn describe(input: &str) -> Result<MonitoringProfile, CatalogError> {
    MonitoringMode::from_str_loose(input)
        .map(profile)
        .ok_or_else(|| CatalogError::InvalidMode(input.to_string()))
}
