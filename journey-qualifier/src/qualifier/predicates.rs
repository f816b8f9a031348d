//! Journey predicates.
//!
//! Pure functions over a single journey, or over a journey and the
//! standard it is measured against. Nothing here mutates its input.

use chrono::Duration;

use crate::domain::{
    CompactDateTime, Journey, JourneyType, SectionType, StreetNetworkMode, TimeError,
};

use super::config::QualifierConfig;
use super::request::RequestType;

/// Time spent off a vehicle: summed duration of street network and
/// transfer sections, in seconds.
pub fn non_transport_duration(journey: &Journey) -> i64 {
    journey
        .sections
        .iter()
        .filter(|s| s.section_type.is_non_transport())
        .map(|s| s.duration)
        .sum()
}

/// Returns true if some street network section uses `mode`.
pub fn has_fall_back_mode(journey: &Journey, mode: StreetNetworkMode) -> bool {
    journey.sections.iter().any(|s| s.uses_mode(mode))
}

/// Returns true if some street network section is driven.
pub fn has_car(journey: &Journey) -> bool {
    has_fall_back_mode(journey, StreetNetworkMode::Car)
}

/// Returns true if no street network section is driven.
pub fn has_no_car(journey: &Journey) -> bool {
    !has_car(journey)
}

/// Returns true if some street network section is cycled.
pub fn has_bike(journey: &Journey) -> bool {
    has_fall_back_mode(journey, StreetNetworkMode::Bike)
}

/// Returns true if the journey has no public transport at all: every
/// section is on the street network.
///
/// A journey without sections qualifies.
pub fn non_pt_journey(journey: &Journey) -> bool {
    journey
        .sections
        .iter()
        .all(|s| s.section_type == SectionType::StreetNetwork)
}

/// Returns true if no section runs on one of the excluded train networks.
pub fn no_train(journey: &Journey, config: &QualifierConfig) -> bool {
    !journey.sections.iter().any(|s| {
        s.network
            .as_deref()
            .is_some_and(|n| config.is_excluded_network(n))
    })
}

/// Returns true if the planner marked the journey as a cheap candidate.
pub fn is_possible_cheap(journey: &Journey) -> bool {
    journey.journey_type == JourneyType::PossibleCheap
}

/// Parses the journey's arrival timestamp.
pub fn arrival_datetime(journey: &Journey) -> Result<CompactDateTime, TimeError> {
    journey.arrival()
}

/// Parses the journey's departure timestamp.
pub fn departure_datetime(journey: &Journey) -> Result<CompactDateTime, TimeError> {
    journey.departure()
}

/// Duration no longer than the standard's, grown by `max_evolution`
/// (0.2 allows 20% more).
pub fn journey_length_constraint(journey: &Journey, standard: &Journey, max_evolution: f64) -> bool {
    let max_allowed = standard.duration as f64 * (1.0 + max_evolution);
    journey.duration as f64 <= max_allowed
}

/// Arrival no more than `max_mn_shift` minutes after the standard's.
pub fn journey_arrival_constraint(
    journey: &Journey,
    standard: &Journey,
    max_mn_shift: i64,
) -> Result<bool, TimeError> {
    let latest = arrival_datetime(standard)?.checked_add(Duration::minutes(max_mn_shift));
    let arrival = arrival_datetime(journey)?;
    // Past the representable range every journey is within the shift
    Ok(latest.is_none_or(|latest| arrival <= latest))
}

/// Departure no more than `max_mn_shift` minutes before the standard's.
pub fn journey_departure_constraint(
    journey: &Journey,
    standard: &Journey,
    max_mn_shift: i64,
) -> Result<bool, TimeError> {
    let earliest = departure_datetime(standard)?.checked_sub(Duration::minutes(max_mn_shift));
    let departure = departure_datetime(journey)?;
    Ok(earliest.is_none_or(|earliest| departure >= earliest))
}

/// Goal shift check for the request orientation.
///
/// Departure requests compare arrivals. Arrival requests also compare
/// arrivals unless `departure_goal_shift` is enabled, in which case they
/// compare departures.
pub fn journey_goal_constraint(
    journey: &Journey,
    standard: &Journey,
    max_mn_shift: i64,
    request_type: RequestType,
    config: &QualifierConfig,
) -> Result<bool, TimeError> {
    match request_type {
        RequestType::Arrival if config.departure_goal_shift => {
            journey_departure_constraint(journey, standard, max_mn_shift)
        }
        RequestType::Arrival | RequestType::Departure => {
            journey_arrival_constraint(journey, standard, max_mn_shift)
        }
    }
}

/// Non-transport duration no longer than the standard's scaled by
/// `1 + evol` (-0.1 demands 10% less).
pub fn non_transport_relative_constraint(journey: &Journey, standard: &Journey, evol: f64) -> bool {
    let max_allowed = non_transport_duration(standard) as f64 * (1.0 + evol);
    non_transport_duration(journey) as f64 <= max_allowed
}

/// Non-transport duration no more than `max_shift_secs` above the
/// standard's.
pub fn non_transport_abs_constraint(journey: &Journey, standard: &Journey, max_shift_secs: i64) -> bool {
    non_transport_duration(journey) <= non_transport_duration(standard) + max_shift_secs
}
