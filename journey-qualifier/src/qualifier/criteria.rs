//! Pairwise criteria and the best-of-list reducer.
//!
//! A criterion compares a candidate against the current best and says
//! whether the candidate should take its place. Criteria are chained in
//! priority order: the first one with an opinion settles the contest and
//! the rest are not consulted.

use crate::domain::Journey;

use super::config::QualifierConfig;
use super::predicates::non_transport_duration;
use super::request::RequestType;

/// Outcome of comparing a candidate with the current best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Verdict {
    /// The current best stays
    Keep = -1,
    /// No preference, ask the next criterion
    Undecided = 0,
    /// The candidate becomes the new best
    Replace = 1,
}

impl Verdict {
    /// Returns the verdict as -1, 0 or 1.
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Returns true unless the verdict is `Undecided`.
    pub fn is_decisive(self) -> bool {
        self != Verdict::Undecided
    }
}

/// A boolean preference can only say "replace" or "no opinion".
impl From<bool> for Verdict {
    fn from(prefer_candidate: bool) -> Self {
        if prefer_candidate {
            Verdict::Replace
        } else {
            Verdict::Undecided
        }
    }
}

/// A pairwise criterion: `criterion(candidate, best)`.
pub type Criterion = fn(&Journey, &Journey) -> Verdict;

/// Smaller is better, equal is undecided.
///
/// # Examples
///
/// ```
/// use journey_qualifier::qualifier::{Verdict, compare_minus};
///
/// assert_eq!(compare_minus(3, 3), Verdict::Undecided);
/// assert_eq!(compare_minus(1, 3), Verdict::Replace);
/// assert_eq!(compare_minus(3, 1), Verdict::Keep);
/// ```
pub fn compare_minus<T: PartialOrd>(field_1: T, field_2: T) -> Verdict {
    if field_1 == field_2 {
        Verdict::Undecided
    } else if field_1 < field_2 {
        Verdict::Replace
    } else {
        Verdict::Keep
    }
}

/// Fewer transfers wins.
pub fn transfers_crit(candidate: &Journey, best: &Journey) -> Verdict {
    compare_minus(candidate.nb_transfers, best.nb_transfers)
}

/// Less time off a vehicle wins.
pub fn non_transport_crit(candidate: &Journey, best: &Journey) -> Verdict {
    compare_minus(
        non_transport_duration(candidate),
        non_transport_duration(best),
    )
}

/// Earlier arrival wins; a later or equal arrival is undecided.
pub fn arrival_crit(candidate: &Journey, best: &Journey) -> Verdict {
    Verdict::from(candidate.arrival_date_time < best.arrival_date_time)
}

/// Later departure wins; an earlier or equal departure is undecided.
pub fn departure_crit(candidate: &Journey, best: &Journey) -> Verdict {
    Verdict::from(candidate.departure_date_time > best.departure_date_time)
}

/// Earlier arrival wins, later arrival loses.
pub fn arrival_crit_strict(candidate: &Journey, best: &Journey) -> Verdict {
    compare_minus(&candidate.arrival_date_time, &best.arrival_date_time)
}

/// Later departure wins, earlier departure loses.
pub fn departure_crit_strict(candidate: &Journey, best: &Journey) -> Verdict {
    // Larger is better: swap the operands
    compare_minus(&best.departure_date_time, &candidate.departure_date_time)
}

/// Primary time objective for the request.
///
/// "Arrive by" searches want the latest departure, everything else wants
/// the earliest arrival.
pub fn best_crit(request_type: RequestType, config: &QualifierConfig) -> Criterion {
    match (request_type, config.strict_time_criteria) {
        (RequestType::Arrival, false) => departure_crit,
        (RequestType::Arrival, true) => departure_crit_strict,
        (RequestType::Departure, false) => arrival_crit,
        (RequestType::Departure, true) => arrival_crit_strict,
    }
}

/// Returns the best candidate according to `criteria`.
///
/// The first candidate is the initial best. Each later candidate is
/// compared with the best by walking the criteria in order; the first
/// decisive verdict applies and ends the comparison. Returns `None` for an
/// empty input.
pub fn min_from_criteria<'a, I>(candidates: I, criteria: &[Criterion]) -> Option<&'a Journey>
where
    I: IntoIterator<Item = &'a Journey>,
{
    let mut candidates = candidates.into_iter();
    let mut best = candidates.next()?;

    for candidate in candidates {
        let verdict = criteria
            .iter()
            .map(|crit| crit(candidate, best))
            .find(|v| v.is_decisive());

        if verdict == Some(Verdict::Replace) {
            best = candidate;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Section, StreetNetworkMode};

    fn journey(dep: &str, arr: &str, transfers: u32) -> Journey {
        Journey::new(dep, arr, 3600, transfers)
    }

    fn walking(j: Journey, secs: i64) -> Journey {
        j.with_sections(vec![
            Section::street_network(StreetNetworkMode::Walking, secs),
            Section::public_transport("network:RATP", 3600 - secs),
        ])
    }

    fn undecided(_: &Journey, _: &Journey) -> Verdict {
        Verdict::Undecided
    }

    fn always_keep(_: &Journey, _: &Journey) -> Verdict {
        Verdict::Keep
    }

    #[test]
    fn compare_minus_values() {
        assert_eq!(compare_minus(5, 5).as_i8(), 0);
        assert_eq!(compare_minus(4, 5).as_i8(), 1);
        assert_eq!(compare_minus(6, 5).as_i8(), -1);
        assert_eq!(compare_minus("a", "b"), Verdict::Replace);
    }

    #[test]
    fn time_criteria_are_two_valued() {
        let early = journey("20240315T080000", "20240315T090000", 0);
        let late = journey("20240315T081000", "20240315T091000", 0);

        assert_eq!(arrival_crit(&early, &late), Verdict::Replace);
        assert_eq!(arrival_crit(&late, &early), Verdict::Undecided);
        assert_eq!(arrival_crit(&early, &early), Verdict::Undecided);

        assert_eq!(departure_crit(&late, &early), Verdict::Replace);
        assert_eq!(departure_crit(&early, &late), Verdict::Undecided);
    }

    #[test]
    fn strict_time_criteria_are_three_valued() {
        let early = journey("20240315T080000", "20240315T090000", 0);
        let late = journey("20240315T081000", "20240315T091000", 0);

        assert_eq!(arrival_crit_strict(&early, &late), Verdict::Replace);
        assert_eq!(arrival_crit_strict(&late, &early), Verdict::Keep);
        assert_eq!(arrival_crit_strict(&late, &late), Verdict::Undecided);

        assert_eq!(departure_crit_strict(&late, &early), Verdict::Replace);
        assert_eq!(departure_crit_strict(&early, &late), Verdict::Keep);
    }

    #[test]
    fn best_crit_follows_request_type() {
        let early = journey("20240315T080000", "20240315T090000", 0);
        let late = journey("20240315T081000", "20240315T091000", 0);
        let legacy = QualifierConfig::default();
        let strict = QualifierConfig::default().with_strict_time_criteria(true);

        // Arrival requests prefer the later departure
        assert_eq!(best_crit(RequestType::Arrival, &legacy)(&late, &early), Verdict::Replace);
        // Departure requests prefer the earlier arrival
        assert_eq!(best_crit(RequestType::Departure, &legacy)(&early, &late), Verdict::Replace);
        assert_eq!(best_crit(RequestType::Departure, &legacy)(&late, &early), Verdict::Undecided);
        assert_eq!(best_crit(RequestType::Departure, &strict)(&late, &early), Verdict::Keep);
    }

    #[test]
    fn empty_input_has_no_best() {
        let criteria: [Criterion; 1] = [transfers_crit];
        assert!(min_from_criteria(&[] as &[Journey], &criteria).is_none());
    }

    #[test]
    fn single_candidate_wins() {
        let only = journey("20240315T080000", "20240315T090000", 2);
        let best = min_from_criteria([&only], &[transfers_crit]).unwrap();
        assert!(std::ptr::eq(best, &only));
    }

    #[test]
    fn first_decisive_criterion_wins() {
        // b arrives earlier but has more transfers: transfers decide first
        let a = journey("20240315T080000", "20240315T093000", 0);
        let b = journey("20240315T080000", "20240315T090000", 1);
        let list = [a, b];

        let best = min_from_criteria(&list, &[transfers_crit, arrival_crit]).unwrap();
        assert!(std::ptr::eq(best, &list[0]));

        let best = min_from_criteria(&list, &[arrival_crit, transfers_crit]).unwrap();
        assert!(std::ptr::eq(best, &list[1]));
    }

    #[test]
    fn undecided_criterion_is_skipped() {
        let a = journey("20240315T080000", "20240315T090000", 2);
        let b = journey("20240315T080000", "20240315T090000", 1);
        let c = journey("20240315T080000", "20240315T090000", 3);
        let list = [a, b, c];

        let best = min_from_criteria(&list, &[undecided, transfers_crit]).unwrap();
        assert!(std::ptr::eq(best, &list[1]));
    }

    #[test]
    fn keep_stops_the_chain() {
        let a = journey("20240315T080000", "20240315T093000", 1);
        let b = journey("20240315T080000", "20240315T090000", 0);
        let list = [a, b];

        // always_keep is decisive, so transfers never get a say
        let best = min_from_criteria(&list, &[always_keep, transfers_crit]).unwrap();
        assert!(std::ptr::eq(best, &list[0]));
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let a = journey("20240315T080000", "20240315T090000", 1);
        let b = journey("20240315T080000", "20240315T090000", 1);
        let list = [a, b];

        let best = min_from_criteria(&list, &[transfers_crit, arrival_crit]).unwrap();
        assert!(std::ptr::eq(best, &list[0]));
    }

    #[test]
    fn later_arrival_falls_through_to_next_criterion() {
        // b arrives later, which the two-valued arrival criterion cannot
        // hold against it, so the walking time decides
        let a = walking(journey("20240315T080000", "20240315T090000", 0), 900);
        let b = walking(journey("20240315T080000", "20240315T090500", 0), 300);
        let list = [a, b];
        let criteria: [Criterion; 3] = [transfers_crit, arrival_crit, non_transport_crit];

        let best = min_from_criteria(&list, &criteria).unwrap();
        assert!(std::ptr::eq(best, &list[1]));

        let strict: [Criterion; 3] = [transfers_crit, arrival_crit_strict, non_transport_crit];
        let best = min_from_criteria(&list, &strict).unwrap();
        assert!(std::ptr::eq(best, &list[0]));
    }
}
