//! Journey types.
//!
//! A `Journey` is one complete candidate itinerary handed over by the
//! upstream planner. Everything on it is read-only for the qualifier except
//! `journey_type`, which receives the qualification tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CompactDateTime, Section, TimeError};

/// Qualitative category stamped onto a journey.
///
/// Serialized as a plain string. Values the qualifier does not know are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JourneyType {
    /// Not qualified (yet)
    #[default]
    Unset,
    /// Marked upstream as a candidate for the cheap tag
    PossibleCheap,
    Cheap,
    Healthy,
    Comfort,
    NonPt,
    Car,
    Rapid,
    /// A type set upstream that carries no meaning here (e.g. "best")
    Other(String),
}

impl JourneyType {
    /// Returns the wire name of the tag (empty for `Unset`).
    pub fn as_str(&self) -> &str {
        match self {
            JourneyType::Unset => "",
            JourneyType::PossibleCheap => "possible_cheap",
            JourneyType::Cheap => "cheap",
            JourneyType::Healthy => "healthy",
            JourneyType::Comfort => "comfort",
            JourneyType::NonPt => "non_pt",
            JourneyType::Car => "car",
            JourneyType::Rapid => "rapid",
            JourneyType::Other(name) => name,
        }
    }

    /// Returns true if the journey has not been given any tag.
    pub fn is_unset(&self) -> bool {
        *self == JourneyType::Unset
    }
}

impl From<&str> for JourneyType {
    fn from(s: &str) -> Self {
        match s {
            "" | "unset" => JourneyType::Unset,
            "possible_cheap" => JourneyType::PossibleCheap,
            "cheap" => JourneyType::Cheap,
            "healthy" => JourneyType::Healthy,
            "comfort" => JourneyType::Comfort,
            "non_pt" => JourneyType::NonPt,
            "car" => JourneyType::Car,
            "rapid" => JourneyType::Rapid,
            other => JourneyType::Other(other.to_owned()),
        }
    }
}

impl From<String> for JourneyType {
    fn from(s: String) -> Self {
        match JourneyType::from(s.as_str()) {
            JourneyType::Other(_) => JourneyType::Other(s),
            known => known,
        }
    }
}

impl From<JourneyType> for String {
    fn from(journey_type: JourneyType) -> Self {
        match journey_type {
            JourneyType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for JourneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete candidate itinerary.
///
/// Timestamps are kept exactly as the planner produced them. The criteria
/// compare them as strings (the compact format sorts chronologically) and
/// the constraints parse them on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    /// Legs in travel order
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Total duration in seconds
    pub duration: i64,

    /// Number of public transport changes
    pub nb_transfers: u32,

    /// Departure, "YYYYMMDDTHHMMSS"
    pub departure_date_time: String,

    /// Arrival, "YYYYMMDDTHHMMSS"
    pub arrival_date_time: String,

    /// Qualification tag
    #[serde(rename = "type", default)]
    pub journey_type: JourneyType,

    /// Free-form markers set upstream (e.g. "ridesharing")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Journey {
    /// Creates a journey without sections, tags or type.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_qualifier::domain::{Journey, JourneyType};
    ///
    /// let journey = Journey::new("20240315T080000", "20240315T090000", 3600, 1);
    ///
    /// assert_eq!(journey.nb_transfers, 1);
    /// assert_eq!(journey.journey_type, JourneyType::Unset);
    /// assert!(journey.sections.is_empty());
    /// ```
    pub fn new(
        departure_date_time: impl Into<String>,
        arrival_date_time: impl Into<String>,
        duration: i64,
        nb_transfers: u32,
    ) -> Self {
        Self {
            sections: Vec::new(),
            duration,
            nb_transfers,
            departure_date_time: departure_date_time.into(),
            arrival_date_time: arrival_date_time.into(),
            journey_type: JourneyType::Unset,
            tags: Vec::new(),
        }
    }

    /// Sets the sections.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Sets the journey type.
    pub fn with_type(mut self, journey_type: JourneyType) -> Self {
        self.journey_type = journey_type;
        self
    }

    /// Adds a marker tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Returns true if the marker tag is present.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parses the departure timestamp.
    pub fn departure(&self) -> Result<CompactDateTime, TimeError> {
        CompactDateTime::parse(&self.departure_date_time)
    }

    /// Parses the arrival timestamp.
    pub fn arrival(&self) -> Result<CompactDateTime, TimeError> {
        CompactDateTime::parse(&self.arrival_date_time)
    }
}
