//! The qualification pass.
//!
//! Runs every rule of the table over the candidate list and stamps each
//! rule's winner with the rule's tag.

use tracing::{debug, info};

use crate::domain::{Journey, TimeError};

use super::config::QualifierConfig;
use super::criteria::{best_crit, min_from_criteria};
use super::request::RequestType;
use super::rules::{RuleContext, trip_caracs};
use super::standard::choose_standard;

/// Error from a qualification pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QualifyError {
    /// A timestamp needed by a constraint could not be parsed
    #[error("cannot qualify journeys: {0}")]
    Time(#[from] TimeError),

    /// No standard journey could be chosen from a non-empty list
    #[error("no standard journey among {0} candidates")]
    NoStandard(usize),
}

/// Qualify `journeys` in place using the default configuration.
pub fn qualify(journeys: &mut [Journey], request_type: RequestType) -> Result<(), QualifyError> {
    qualifier_one(journeys, request_type, &QualifierConfig::default())
}

/// Qualify `journeys` in place.
///
/// For each rule of the table, in order, the journeys satisfying all of
/// the rule's constraints are reduced with the rule's criteria and the
/// winner's `journey_type` is overwritten with the rule's tag. A journey
/// winning several rules keeps the tag of the last one. Journeys that win
/// nothing are left untouched.
///
/// An empty list is a no-op.
///
/// # Errors
///
/// Returns `QualifyError::Time` if a timestamp involved in a goal shift
/// check is malformed. Tags already stamped by earlier rules are kept.
pub fn qualifier_one(
    journeys: &mut [Journey],
    request_type: RequestType,
    config: &QualifierConfig,
) -> Result<(), QualifyError> {
    if journeys.is_empty() {
        info!("no journeys to qualify");
        return Ok(());
    }

    let best_crit = best_crit(request_type, config);

    // Owned copy: winners are stamped while the rules still read it
    let standard = choose_standard(journeys, best_crit)
        .cloned()
        .ok_or(QualifyError::NoStandard(journeys.len()))?;

    debug!(
        candidates = journeys.len(),
        request_type = %request_type,
        standard_arrival = %standard.arrival_date_time,
        standard_duration = standard.duration,
        "Standard chosen"
    );

    let ctx = RuleContext {
        standard: &standard,
        request_type,
        config,
    };

    for (tag, carac) in trip_caracs(best_crit) {
        let (eligible, winner) = {
            let mut eligible = Vec::new();
            for journey in journeys.iter() {
                if carac.is_eligible(journey, &ctx)? {
                    eligible.push(journey);
                }
            }
            let winner = min_from_criteria(eligible.iter().copied(), &carac.criteria)
                .and_then(|best| journeys.iter().position(|j| std::ptr::eq(j, best)));
            (eligible.len(), winner)
        };

        debug!(tag = %tag, eligible, winner = ?winner, "Rule evaluated");

        if let Some(idx) = winner {
            journeys[idx].journey_type = tag;
        }
    }

    Ok(())
}
