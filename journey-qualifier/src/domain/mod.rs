//! Domain types for the journey qualifier.
//!
//! This module contains the candidate journey model exactly as the
//! upstream planner hands it over. Timestamps stay in their compact string
//! form on the records and are parsed through `CompactDateTime` when
//! arithmetic is needed.

mod journey;
mod section;
mod time;

pub use journey::{Journey, JourneyType};
pub use section::{Section, SectionType, StreetNetworkMode};
pub use time::{COMPACT_FORMAT, CompactDateTime, TimeError};
