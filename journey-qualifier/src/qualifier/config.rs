//! Qualification policy configuration.

use serde::Deserialize;

/// Networks whose trains disqualify a journey from the cheap tag.
pub const DEFAULT_EXCLUDED_NETWORKS: [&str; 2] = ["network:TER", "network:SNCF"];

/// Configuration parameters for a qualification pass.
///
/// The defaults reproduce the historical behaviour of the engine. The two
/// flags exist to opt into corrected semantics without changing what
/// existing callers observe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QualifierConfig {
    /// Network identifiers treated as train operators by the cheap rule.
    pub excluded_networks: Vec<String>,

    /// Use three-way arrival/departure criteria.
    /// When false, a later arrival (or earlier departure) is reported as
    /// "no preference" rather than "worse", and the next criterion decides.
    pub strict_time_criteria: bool,

    /// For arrival-anchored requests, measure the goal shift on departure
    /// times instead of arrival times.
    pub departure_goal_shift: bool,
}

impl QualifierConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        excluded_networks: Vec<String>,
        strict_time_criteria: bool,
        departure_goal_shift: bool,
    ) -> Self {
        Self {
            excluded_networks,
            strict_time_criteria,
            departure_goal_shift,
        }
    }

    /// Replace the excluded train networks.
    pub fn with_excluded_networks<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_networks = networks.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable three-way time criteria.
    pub fn with_strict_time_criteria(mut self, strict: bool) -> Self {
        self.strict_time_criteria = strict;
        self
    }

    /// Enable or disable departure-based goal shift for arrival requests.
    pub fn with_departure_goal_shift(mut self, enabled: bool) -> Self {
        self.departure_goal_shift = enabled;
        self
    }

    /// Returns true if `network` is one of the excluded train networks.
    pub fn is_excluded_network(&self, network: &str) -> bool {
        self.excluded_networks.iter().any(|n| n == network)
    }
}

impl Default for QualifierConfig {
    fn default() -> Self {
        Self {
            excluded_networks: DEFAULT_EXCLUDED_NETWORKS
                .iter()
                .map(|n| n.to_string())
                .collect(),
            strict_time_criteria: false,
            departure_goal_shift: false,
        }
    }
}
