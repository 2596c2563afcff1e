use std::collections::HashMap;

/// Normalized key -> canonical display name. Fixed at compile time.
const CITY_TABLE: [(&str, &str); 5] = [
    ("москва", "Москва"),
    ("санкт-петербург", "Санкт-Петербург"),
    ("новосибирск", "Новосибирск"),
    ("екатеринбург", "Екатеринбург"),
    ("казань", "Казань"),
];

/// Immutable lookup table from normalized city keys to canonical names.
#[derive(Debug, Clone)]
pub struct CityDirectory {
    entries: HashMap<&'static str, &'static str>,
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self {
            entries: CITY_TABLE.into_iter().collect(),
        }
    }
}

impl CityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve free-form user input to a canonical city name.
    ///
    /// Input is trimmed and lowercased before lookup, so "  МОСКВА " and
    /// "москва" both resolve. `None` means the city is not in the table;
    /// that is a valid outcome, not an error.
    pub fn resolve(&self, input: &str) -> Option<&'static str> {
        let key = input.trim().to_lowercase();
        self.entries.get(key.as_str()).copied()
    }

    /// Canonical display names in stable table order.
    pub fn canonical_names(&self) -> Vec<&'static str> {
        CITY_TABLE.iter().map(|(_, name)| *name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_known_keys() {
        let cities = CityDirectory::new();

        for (key, canonical) in CITY_TABLE {
            assert_eq!(cities.resolve(key), Some(canonical));
        }
    }

    #[test]
    fn resolve_is_case_insensitive_and_trims() {
        let cities = CityDirectory::new();

        assert_eq!(cities.resolve("Москва"), Some("Москва"));
        assert_eq!(cities.resolve("МОСКВА"), Some("Москва"));
        assert_eq!(cities.resolve("  казань  "), Some("Казань"));
        assert_eq!(cities.resolve("\tСанкт-Петербург\n"), Some("Санкт-Петербург"));
    }

    #[test]
    fn unknown_input_resolves_to_none() {
        let cities = CityDirectory::new();

        assert_eq!(cities.resolve("Unknownville"), None);
        assert_eq!(cities.resolve(""), None);
        assert_eq!(cities.resolve("   "), None);
    }

    #[test]
    fn canonical_names_keep_table_order() {
        let cities = CityDirectory::new();

        assert_eq!(
            cities.canonical_names(),
            vec!["Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань"]
        );
    }
}
