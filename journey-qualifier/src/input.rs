//! Loading candidate journeys and configuration from JSON files.
//!
//! The qualifier never talks to the planner directly. These helpers let a
//! planner's output be dumped to disk and replayed through a qualification
//! pass.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::Journey;
use crate::qualifier::QualifierConfig;

/// Errors that can occur when reading an input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File contents are not valid JSON for the expected shape
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A planner response wrapping the journeys list.
#[derive(Debug, serde::Deserialize)]
struct JourneysResponse {
    journeys: Vec<Journey>,
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, InputError> {
    serde_json::from_str(contents).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load candidate journeys from a JSON file.
///
/// Accepts either a bare array of journeys or an object with a
/// `journeys` field, as found in a planner response. The first
/// significant character picks the shape, so a malformed journey is
/// reported with its own error and position.
pub fn load_journeys(path: impl AsRef<Path>) -> Result<Vec<Journey>, InputError> {
    let path = path.as_ref();
    let contents = read_file(path)?;

    if contents.trim_start().starts_with('{') {
        let response: JourneysResponse = parse_json(path, &contents)?;
        Ok(response.journeys)
    } else {
        parse_json(path, &contents)
    }
}

/// Load a qualifier configuration from a JSON file.
///
/// Missing fields keep their default values.
pub fn load_config(path: impl AsRef<Path>) -> Result<QualifierConfig, InputError> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    parse_json(path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JourneyType, SectionType};
    use tempfile::tempdir;

    const JOURNEY: &str = r#"{
        "sections": [
            {"type": "street_network", "mode": "walking", "duration": 300},
            {"type": "public_transport", "duration": 1500, "network": "network:RATP"}
        ],
        "duration": 1800,
        "nb_transfers": 0,
        "departure_date_time": "20240315T080000",
        "arrival_date_time": "20240315T083000",
        "type": "possible_cheap",
        "tags": ["ecologic"]
    }"#;

    #[test]
    fn load_bare_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journeys.json");
        std::fs::write(&path, format!("[{JOURNEY}, {JOURNEY}]")).unwrap();

        let journeys = load_journeys(&path).unwrap();
        assert_eq!(journeys.len(), 2);
        assert_eq!(journeys[0].journey_type, JourneyType::PossibleCheap);
        assert!(journeys[1].has_tag("ecologic"));
    }

    #[test]
    fn load_response_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, format!(r#"{{"journeys": [{JOURNEY}]}}"#)).unwrap();

        let journeys = load_journeys(&path).unwrap();
        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].sections.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_journeys("/nonexistent/path/journeys.json").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/path/journeys.json"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journeys.json");
        std::fs::write(&path, r#"[{"duration": "long"}]"#).unwrap();

        let err = load_journeys(&path).unwrap_err();
        assert!(matches!(err, InputError::Json { .. }));
    }

    #[test]
    fn journey_error_is_reported_as_is() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journeys.json");
        std::fs::write(&path, r#"[{"duration": 60}]"#).unwrap();

        let err = load_journeys(&path).unwrap_err().to_string();
        assert!(err.contains("missing field"), "{err}");
        assert!(!err.contains("untagged"), "{err}");

        let path = dir.path().join("response.json");
        std::fs::write(&path, r#"{"journeys": [{"duration": "long"}]}"#).unwrap();

        let err = load_journeys(&path).unwrap_err().to_string();
        assert!(err.contains("invalid type"), "{err}");
    }

    #[test]
    fn load_unknown_upstream_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journeys.json");
        let json = JOURNEY
            .replace(r#""possible_cheap""#, r#""best""#)
            .replace(r#""street_network", "mode": "walking""#, r#""alighting""#);
        std::fs::write(&path, format!("[{json}]")).unwrap();

        let journeys = load_journeys(&path).unwrap();
        assert_eq!(journeys[0].journey_type, JourneyType::Other("best".into()));
        assert_eq!(journeys[0].sections[0].section_type, SectionType::Other);
    }

    #[test]
    fn load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"excluded_networks": ["network:DB"]}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.is_excluded_network("network:DB"));
        assert!(!config.is_excluded_network("network:SNCF"));
        assert!(!config.strict_time_criteria);
    }
}
