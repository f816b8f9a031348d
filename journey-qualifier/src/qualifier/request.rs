//! Request orientation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which end of the journey the user anchored the search on.
///
/// Derived from the `datetime_represents` parameter of the journey request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestType {
    /// "Arrive by": the latest departure is best
    Arrival,
    /// "Leave at": the earliest arrival is best
    #[default]
    Departure,
}

impl RequestType {
    /// Interpret a request parameter.
    ///
    /// Only the exact string `"arrival"` selects `Arrival`; any other value
    /// is treated as a departure-oriented search.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_qualifier::qualifier::RequestType;
    ///
    /// assert_eq!(RequestType::parse("arrival"), RequestType::Arrival);
    /// assert_eq!(RequestType::parse("departure"), RequestType::Departure);
    /// assert_eq!(RequestType::parse("Arrival"), RequestType::Departure);
    /// assert_eq!(RequestType::parse(""), RequestType::Departure);
    /// ```
    pub fn parse(s: &str) -> Self {
        if s == "arrival" {
            RequestType::Arrival
        } else {
            RequestType::Departure
        }
    }

    /// Returns the parameter value for this orientation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Arrival => "arrival",
            RequestType::Departure => "departure",
        }
    }
}

impl FromStr for RequestType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for RequestType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anything_but_arrival_is_departure() {
        for s in ["departure", "clockwise", "ARRIVAL", " arrival", ""] {
            assert_eq!(RequestType::from(s), RequestType::Departure, "{s:?}");
        }
        assert_eq!("arrival".parse::<RequestType>(), Ok(RequestType::Arrival));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for rt in [RequestType::Arrival, RequestType::Departure] {
            assert_eq!(RequestType::parse(&rt.to_string()), rt);
        }
    }
}
