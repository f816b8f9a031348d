//! Journey sections.
//!
//! A `Section` is one leg of a candidate journey as produced by the
//! upstream planner: a public transport ride, a fallback on the street
//! network, a transfer, or a straight-line teleport.

use serde::{Deserialize, Serialize};

/// The kind of leg a section represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    /// A ride on a public transport vehicle
    PublicTransport,
    /// A fallback on the street network (walk, bike, car, ...)
    StreetNetwork,
    /// Waiting at a stop point
    Waiting,
    /// Staying in the same vehicle across a line change
    StayIn,
    /// Walking between two stop points during a change
    Transfer,
    /// Straight-line teleport between a place and a stop point
    CrowFly,
    /// On-demand transport ride
    OnDemandTransport,
    /// Renting a bike-share bike
    BssRent,
    /// Returning a bike-share bike
    BssPutBack,
    /// Parking a vehicle
    Park,
    /// Leaving a parking
    LeaveParking,
    /// A ridesharing offer
    Ridesharing,
    /// Any other kind of leg (boarding, alighting, ...)
    #[serde(other)]
    Other,
}

impl SectionType {
    /// Returns true for sections that count as time spent off a vehicle.
    pub fn is_non_transport(&self) -> bool {
        matches!(self, SectionType::StreetNetwork | SectionType::Transfer)
    }
}

/// Fallback mode used on a street network section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetNetworkMode {
    Walking,
    Bike,
    Car,
    Bss,
    Ridesharing,
    Taxi,
    #[serde(other)]
    Other,
}

/// One leg of a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Kind of leg
    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Fallback mode, for street network sections
    #[serde(default)]
    pub mode: Option<StreetNetworkMode>,

    /// Duration in seconds
    pub duration: i64,

    /// Start of the leg ("YYYYMMDDTHHMMSS")
    #[serde(default)]
    pub begin_date_time: String,

    /// End of the leg ("YYYYMMDDTHHMMSS")
    #[serde(default)]
    pub end_date_time: String,

    /// Network identifier of the line, for public transport sections
    #[serde(default)]
    pub network: Option<String>,
}

impl Section {
    /// Creates a section of the given type and duration with no mode,
    /// times or network.
    pub fn new(section_type: SectionType, duration: i64) -> Self {
        Self {
            section_type,
            mode: None,
            duration,
            begin_date_time: String::new(),
            end_date_time: String::new(),
            network: None,
        }
    }

    /// Creates a street network section using the given fallback mode.
    pub fn street_network(mode: StreetNetworkMode, duration: i64) -> Self {
        Self {
            mode: Some(mode),
            ..Self::new(SectionType::StreetNetwork, duration)
        }
    }

    /// Creates a public transport section on the given network.
    pub fn public_transport(network: impl Into<String>, duration: i64) -> Self {
        Self {
            network: Some(network.into()),
            ..Self::new(SectionType::PublicTransport, duration)
        }
    }

    /// Sets the begin and end timestamps.
    pub fn with_times(mut self, begin: impl Into<String>, end: impl Into<String>) -> Self {
        self.begin_date_time = begin.into();
        self.end_date_time = end.into();
        self
    }

    /// Returns true if this is a street network section using `mode`.
    pub fn uses_mode(&self, mode: StreetNetworkMode) -> bool {
        self.section_type == SectionType::StreetNetwork && self.mode == Some(mode)
    }
}
