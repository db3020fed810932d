//! Lookup tables tying sensor ids to room names, plus the query resolver.

pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Location names the API recognizes, lower-cased for membership tests.
const KNOWN_LOCATIONS: [&str; 4] = ["living room", "bedroom", "kitchen", "unknown"];

/// Forward lookup: sensor id to room name.
pub fn location_for_sensor(sensor_id: i64) -> &'static str {
    match sensor_id {
        1 => "Living Room",
        2 => "Bedroom",
        3 => "Kitchen",
        _ => UNKNOWN_LOCATION,
    }
}

/// Reverse lookup: canonical room name to sensor id. "0" for anything
/// outside the table, including "Unknown" itself.
pub fn sensor_id_for_location(location: &str) -> &'static str {
    match location.to_lowercase().as_str() {
        "living room" => "1",
        "bedroom" => "2",
        "kitchen" => "3",
        _ => "0",
    }
}

pub fn is_known_location(location: &str) -> bool {
    KNOWN_LOCATIONS.contains(&location.to_lowercase().as_str())
}

/// Title-case every whitespace-separated word: first letter uppercased,
/// the rest lowercased. Whitespace is preserved as-is.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Resolve the `location` query parameter to the string handed to the
/// reading builder.
///
/// Missing or blank input short-circuits to "Unknown". A numeric value is
/// treated as a sensor id and mapped through the location table. Anything
/// else passes through verbatim; title casing and the final known-location
/// check happen when the reading is built.
pub fn resolve_query_location(location: Option<&str>) -> String {
    let Some(raw) = location else {
        return UNKNOWN_LOCATION.to_string();
    };
    if raw.trim().is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }
    match raw.trim().parse::<i64>() {
        Ok(sensor_id) => location_for_sensor(sensor_id).to_string(),
        Err(_) => raw.to_string(),
    }
}
