//! Journey qualification engine.
//!
//! Takes the candidate itineraries computed by a journey planner and tags
//! a few of them with human-meaningful categories ("cheap", "healthy",
//! "comfort", "non_pt", "car", "rapid").

pub mod domain;
pub mod input;
pub mod qualifier;
