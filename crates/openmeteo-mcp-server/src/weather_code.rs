//! WMO present-weather codes as reported by Open-Meteo.
//!
//! Reference: <https://open-meteo.com/en/docs#weathervariables>

/// Static code → description table.
const WMO_CODES: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Code reported when the upstream omits `weathercode`.
pub const MISSING_CODE: i64 = -1;

/// Look up the table entry for a code, if any.
pub fn lookup(code: i64) -> Option<&'static str> {
    WMO_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
}

/// Human-readable description for a WMO code. Never fails: codes outside
/// the table become `"Unknown code (N)"`.
pub fn describe(code: i64) -> String {
    match lookup(code) {
        Some(desc) => desc.to_string(),
        None => format!("Unknown code ({})", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_table_entries() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(1), "Mainly clear");
        assert_eq!(describe(48), "Depositing rime fog");
        assert_eq!(describe(82), "Violent rain showers");
        assert_eq!(describe(99), "Thunderstorm with heavy hail");
    }

    #[test]
    fn every_table_entry_is_stable() {
        for (code, desc) in WMO_CODES {
            assert_eq!(describe(*code), *desc);
            assert_eq!(describe(*code), describe(*code));
        }
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes: Vec<i64> = WMO_CODES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), WMO_CODES.len());
    }

    #[test]
    fn unknown_codes_are_labelled() {
        assert_eq!(describe(4), "Unknown code (4)");
        assert_eq!(describe(100), "Unknown code (100)");
        assert_eq!(describe(MISSING_CODE), "Unknown code (-1)");
        assert_eq!(describe(i64::MAX), format!("Unknown code ({})", i64::MAX));
        assert!(lookup(42).is_none());
    }
}
