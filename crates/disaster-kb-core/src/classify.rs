//! Hazard-family classification of incident types

/// Terms commonly used by FEMA for weather-driven hazards.
///
/// Matched as substrings, so incidental matches are possible
/// (e.g. "ice" inside an unrelated word).
pub const WEATHER_INCIDENT_TERMS: &[&str] = &[
    "storm",
    "hurricane",
    "typhoon",
    "cyclone",
    "tornado",
    "flood",
    "snow",
    "blizzard",
    "freeze",
    "freezing",
    "ice",
    "winter",
    "wind",
    "rain",
    "hail",
    "coastal",
    "wave",
    "weather",
];

fn normalize(incident_type: &str) -> String {
    incident_type.trim().to_lowercase()
}

/// Whether an incident type belongs to the weather hazard family
pub fn is_weather_incident(incident_type: &str) -> bool {
    matched_term(incident_type).is_some()
}

/// First vocabulary term found in the incident type, if any
pub fn matched_term(incident_type: &str) -> Option<&'static str> {
    let incident = normalize(incident_type);
    WEATHER_INCIDENT_TERMS
        .iter()
        .copied()
        .find(|term| incident.contains(term))
}
