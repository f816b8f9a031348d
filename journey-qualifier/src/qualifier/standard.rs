//! Selection of the standard journey.
//!
//! The standard is the reference the relative constraints are measured
//! against. Car journeys make a poor reference, so any car-free candidate
//! takes precedence over them.

use crate::domain::Journey;

use super::criteria::{Criterion, Verdict};
use super::predicates::has_car;

/// Pick the standard among `journeys`.
///
/// Scanning in order, a journey becomes the standard when there is none
/// yet, when the current standard uses a car and the journey does not, or
/// when the journey is car-free and wins against the standard under
/// `best_crit`.
///
/// Returns `None` only for an empty list. The result uses a car only if
/// every candidate does.
pub fn choose_standard<'a>(journeys: &'a [Journey], best_crit: Criterion) -> Option<&'a Journey> {
    let mut standard: Option<&Journey> = None;

    for journey in journeys {
        let car = has_car(journey);
        match standard {
            None => standard = Some(journey),
            Some(current) if has_car(current) && !car => standard = Some(journey),
            Some(current) if !car && best_crit(journey, current) == Verdict::Replace => {
                standard = Some(journey)
            }
            Some(_) => {}
        }
    }

    standard
}
