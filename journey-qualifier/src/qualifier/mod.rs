//! Journey qualification.
//!
//! This module tags candidate journeys with qualitative categories. A fixed
//! table of rules is evaluated in order; each rule filters the candidates
//! through its constraints, then picks a single winner using an ordered
//! chain of pairwise criteria.
//!
//! Relative constraints are measured against a "standard" journey: the
//! best car-free candidate for the request's time objective.

mod config;
mod criteria;
mod predicates;
mod qualify;
mod request;
mod rules;
mod standard;


pub use config::{DEFAULT_EXCLUDED_NETWORKS, QualifierConfig};
pub use criteria::{
    Criterion, Verdict, arrival_crit, arrival_crit_strict, best_crit, compare_minus,
    departure_crit, departure_crit_strict, min_from_criteria, non_transport_crit, transfers_crit,
};
pub use predicates::{
    arrival_datetime, departure_datetime, has_bike, has_car, has_fall_back_mode, has_no_car,
    is_possible_cheap, journey_arrival_constraint, journey_departure_constraint,
    journey_goal_constraint, journey_length_constraint, no_train, non_pt_journey,
    non_transport_abs_constraint, non_transport_duration, non_transport_relative_constraint,
};
pub use qualify::{QualifyError, qualifier_one, qualify};
pub use request::RequestType;
pub use rules::{Constraint, RuleContext, TripCarac, trip_caracs};
pub use standard::choose_standard;
