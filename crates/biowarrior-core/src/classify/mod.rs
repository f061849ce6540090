//! Country name → continental region classification.
//!
//! Resolution goes name → ISO alpha-2 → continent code → `Region`. Names are
//! compared after normalization (trimmed, whitespace collapsed, lowercased,
//! curly apostrophes straightened, common Latin diacritics folded). Anything
//! that does not resolve, including aggregates such as "World", classifies as
//! `Region::Unknown`; classification never fails.

pub mod countries;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::region::Region;
use countries::{CountryEntry, ALIASES, COUNTRIES};

/// Two-letter continent code as assigned to ISO countries.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    AF,
    AS,
    EU,
    NA,
    SA,
    OC,
    /// Antarctica and the sub-antarctic territories. Not one of the six regions.
    AN,
}

impl Continent {
    pub fn region(self) -> Region {
        match self {
            Continent::AF => Region::Africa,
            Continent::AS => Region::Asia,
            Continent::EU => Region::Europe,
            Continent::NA => Region::NorthAmerica,
            Continent::SA => Region::SouthAmerica,
            Continent::OC => Region::Oceania,
            Continent::AN => Region::Unknown,
        }
    }
}

/// Name and code indexes over the static country table, built on first use.
pub struct CountryIndex {
    by_name: HashMap<String, &'static CountryEntry>,
    by_alpha2: HashMap<&'static str, &'static CountryEntry>,
}

impl CountryIndex {
    pub fn global() -> &'static CountryIndex {
        static INSTANCE: OnceLock<CountryIndex> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut by_name = HashMap::with_capacity(COUNTRIES.len() + ALIASES.len());
            let mut by_alpha2 = HashMap::with_capacity(COUNTRIES.len());
            for entry in COUNTRIES {
                by_alpha2.insert(entry.alpha2, entry);
                by_name.insert(normalize_name(entry.name), entry);
            }
            for &(alias, code) in ALIASES {
                if let Some(&entry) = by_alpha2.get(code) {
                    by_name.entry(normalize_name(alias)).or_insert(entry);
                }
            }
            CountryIndex { by_name, by_alpha2 }
        })
    }

    pub fn by_name(&self, name: &str) -> Option<&'static CountryEntry> {
        self.by_name.get(&normalize_name(name)).copied()
    }

    pub fn by_alpha2(&self, code: &str) -> Option<&'static CountryEntry> {
        self.by_alpha2.get(code.trim().to_ascii_uppercase().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_alpha2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alpha2.is_empty()
    }
}

/// ISO alpha-2 code for a country name, if it resolves.
pub fn country_alpha2(name: &str) -> Option<&'static str> {
    CountryIndex::global().by_name(name).map(|e| e.alpha2)
}

/// Continent of an ISO alpha-2 code, if the code is known.
pub fn alpha2_continent(code: &str) -> Option<Continent> {
    CountryIndex::global().by_alpha2(code).map(|e| e.continent)
}

/// Classify a country or territory name into one of the six regions.
pub fn classify(country_name: &str) -> Region {
    country_alpha2(country_name)
        .and_then(alpha2_continent)
        .map_or(Region::Unknown, Continent::region)
}

/// Canonical form used for name comparison.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in fold_char(ch).to_lowercase() {
            out.push(lower);
        }
    }
    out
}

fn fold_char(ch: char) -> char {
    match ch {
        '\u{2018}' | '\u{2019}' | '`' | '´' => '\'',
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_names_resolve_to_known_regions() {
        for entry in COUNTRIES {
            let region = classify(entry.name);
            if entry.continent == Continent::AN {
                assert_eq!(region, Region::Unknown, "{}", entry.name);
            } else {
                assert!(region.is_known(), "{} classified as Unknown", entry.name);
            }
        }
    }

    #[test]
    fn continent_mapping_samples() {
        assert_eq!(classify("Kenya"), Region::Africa);
        assert_eq!(classify("Japan"), Region::Asia);
        assert_eq!(classify("France"), Region::Europe);
        assert_eq!(classify("Mexico"), Region::NorthAmerica);
        assert_eq!(classify("Peru"), Region::SouthAmerica);
        assert_eq!(classify("Fiji"), Region::Oceania);
    }

    #[test]
    fn unresolvable_names_are_unknown() {
        assert_eq!(classify("World"), Region::Unknown);
        assert_eq!(classify("Sub-Saharan Africa"), Region::Unknown);
        assert_eq!(classify("Yugoslavia"), Region::Unknown);
        assert_eq!(classify(""), Region::Unknown);
        assert_eq!(classify("Antarctica"), Region::Unknown);
    }

    #[test]
    fn un_style_aliases_resolve() {
        assert_eq!(country_alpha2("Bolivia (Plurinational State of)"), Some("BO"));
        assert_eq!(country_alpha2("United Kingdom of Great Britain and Northern Ireland"), Some("GB"));
        assert_eq!(country_alpha2("Côte d\u{2019}Ivoire"), Some("CI"));
        assert_eq!(classify("Türkiye"), Region::Asia);
        assert_eq!(classify("Turkey"), Region::Asia);
    }

    #[test]
    fn normalization_ignores_case_whitespace_and_diacritics() {
        assert_eq!(normalize_name("  Viet   Nam "), "viet nam");
        assert_eq!(normalize_name("Curaçao"), normalize_name("curacao"));
        assert_eq!(classify("  united   states "), Region::NorthAmerica);
        assert_eq!(classify("Reunion"), Region::Africa);
    }

    #[test]
    fn aliases_all_target_known_codes() {
        let index = CountryIndex::global();
        for &(alias, code) in ALIASES {
            assert!(index.by_alpha2(code).is_some(), "alias {alias} → unknown code {code}");
        }
        assert_eq!(index.len(), COUNTRIES.len());
    }

    #[test]
    fn alpha2_lookup_is_case_insensitive() {
        assert_eq!(alpha2_continent("br"), Some(Continent::SA));
        assert_eq!(alpha2_continent("XX"), None);
    }
}
