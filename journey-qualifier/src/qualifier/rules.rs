//! The qualification rule table.
//!
//! Each rule pairs a tag with a trip characteristic: the constraints a
//! journey must all satisfy to compete for the tag, and the criteria that
//! pick the winner among the eligible journeys. Rules are evaluated in
//! table order and a later winner overwrites an earlier tag, so the order
//! of the table is part of its meaning.

use crate::domain::{Journey, JourneyType, TimeError};

use super::config::QualifierConfig;
use super::criteria::{Criterion, non_transport_crit, transfers_crit};
use super::predicates::{
    has_car, has_no_car, is_possible_cheap, journey_goal_constraint, journey_length_constraint,
    no_train, non_pt_journey, non_transport_abs_constraint, non_transport_relative_constraint,
};
use super::request::RequestType;

/// What a rule's constraints are evaluated against besides the journey.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Reference journey for relative constraints
    pub standard: &'a Journey,
    pub request_type: RequestType,
    pub config: &'a QualifierConfig,
}

/// An eligibility predicate with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// No car fallback
    NoCar,
    /// A car fallback
    HasCar,
    /// Marked upstream as a cheap candidate
    PossibleCheap,
    /// No section on an excluded train network
    NoTrain,
    /// Street network sections only
    NonPublicTransport,
    /// Duration at most the standard's times `1 + evolution`
    MaxDurationEvolution(f64),
    /// Goal time at most this many minutes off the standard's
    MaxGoalShift(i64),
    /// Non-transport duration at most the standard's times `1 + evolution`
    NonTransportRelative(f64),
    /// Non-transport duration at most this many seconds above the standard's
    NonTransportAbsolute(i64),
}

impl Constraint {
    /// Returns true if `journey` satisfies the constraint.
    ///
    /// Only the goal shift constraint parses timestamps and can fail.
    pub fn check(&self, journey: &Journey, ctx: &RuleContext<'_>) -> Result<bool, TimeError> {
        let ok = match *self {
            Constraint::NoCar => has_no_car(journey),
            Constraint::HasCar => has_car(journey),
            Constraint::PossibleCheap => is_possible_cheap(journey),
            Constraint::NoTrain => no_train(journey, ctx.config),
            Constraint::NonPublicTransport => non_pt_journey(journey),
            Constraint::MaxDurationEvolution(evolution) => {
                journey_length_constraint(journey, ctx.standard, evolution)
            }
            Constraint::MaxGoalShift(minutes) => {
                return journey_goal_constraint(
                    journey,
                    ctx.standard,
                    minutes,
                    ctx.request_type,
                    ctx.config,
                );
            }
            Constraint::NonTransportRelative(evolution) => {
                non_transport_relative_constraint(journey, ctx.standard, evolution)
            }
            Constraint::NonTransportAbsolute(seconds) => {
                non_transport_abs_constraint(journey, ctx.standard, seconds)
            }
        };
        Ok(ok)
    }
}

/// A trip characteristic: constraints combined by AND, and criteria in
/// priority order.
#[derive(Debug, Clone)]
pub struct TripCarac {
    pub constraints: Vec<Constraint>,
    pub criteria: Vec<Criterion>,
}

impl TripCarac {
    /// Creates a rule from its constraints and its criteria in priority order.
    pub fn new(constraints: Vec<Constraint>, criteria: Vec<Criterion>) -> Self {
        Self {
            constraints,
            criteria,
        }
    }

    /// Returns true if `journey` satisfies every constraint.
    ///
    /// Constraints are checked in order and checking stops at the first
    /// one that fails, so a later constraint never sees a journey an
    /// earlier one rejected.
    pub fn is_eligible(&self, journey: &Journey, ctx: &RuleContext<'_>) -> Result<bool, TimeError> {
        for constraint in &self.constraints {
            if !constraint.check(journey, ctx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Build the rule table, in evaluation order.
pub fn trip_caracs(best_crit: Criterion) -> Vec<(JourneyType, TripCarac)> {
    use Constraint::*;

    vec![
        // The cheap journey is the best one without a train
        (
            JourneyType::Cheap,
            TripCarac::new(
                vec![NoCar, PossibleCheap, NoTrain],
                vec![transfers_crit, best_crit, non_transport_crit],
            ),
        ),
        (
            JourneyType::Healthy,
            TripCarac::new(
                vec![
                    NoCar,
                    MaxDurationEvolution(0.20),
                    MaxGoalShift(20),
                    NonTransportAbsolute(20 * 60),
                ],
                vec![transfers_crit, best_crit, non_transport_crit],
            ),
        ),
        (
            JourneyType::Comfort,
            TripCarac::new(
                vec![
                    NoCar,
                    MaxDurationEvolution(0.40),
                    MaxGoalShift(40),
                    NonTransportRelative(-0.1),
                ],
                vec![transfers_crit, non_transport_crit, best_crit],
            ),
        ),
        // Walking, biking or driving only
        (
            JourneyType::NonPt,
            TripCarac::new(vec![NonPublicTransport], vec![best_crit]),
        ),
        // At most one car journey
        (
            JourneyType::Car,
            TripCarac::new(vec![HasCar], vec![best_crit]),
        ),
        (
            JourneyType::Rapid,
            TripCarac::new(
                vec![MaxDurationEvolution(0.10), MaxGoalShift(10)],
                vec![transfers_crit, best_crit, non_transport_crit],
            ),
        ),
    ]
}
