use serde::{Deserialize, Serialize};

use crate::error::{FluidError, FluidResult};
use crate::fluid::FluidBuilder;
use crate::tables::{EthylAlcohol, Water};

/// Built-in fluids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidKind {
    Water,
    EthylAlcohol,
}

impl FluidKind {
    /// Start building an instance of this fluid.
    pub fn builder(self) -> FluidBuilder {
        match self {
            FluidKind::Water => FluidBuilder::new(Water),
            FluidKind::EthylAlcohol => FluidBuilder::new(EthylAlcohol),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub kind: FluidKind,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Whether the fluid takes a concentration.
    pub mixture: bool,
}

impl FluidCatalogEntry {
    /// Exact, case-insensitive match on the id or an alias.
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.canonical_id.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

static CATALOG: [FluidCatalogEntry; 2] = [
    FluidCatalogEntry {
        kind: FluidKind::Water,
        canonical_id: "water",
        display_name: "Water",
        aliases: &["h2o"],
        mixture: false,
    },
    FluidCatalogEntry {
        kind: FluidKind::EthylAlcohol,
        canonical_id: "ethyl_alcohol",
        display_name: "Ethyl Alcohol",
        aliases: &["ethylalcohol", "ethanol", "ea"],
        mixture: true,
    },
];

pub fn catalog() -> &'static [FluidCatalogEntry] {
    &CATALOG
}

/// Look a fluid up by canonical id or alias.
pub fn find(name: &str) -> FluidResult<&'static FluidCatalogEntry> {
    catalog()
        .iter()
        .find(|entry| entry.matches_name(name))
        .ok_or_else(|| FluidError::UnknownFluid {
            name: name.to_string(),
        })
}

pub fn filter_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("WATER").unwrap().kind, FluidKind::Water);
        assert_eq!(find("EthylAlcohol").unwrap().kind, FluidKind::EthylAlcohol);
        assert_eq!(find(" ethanol ").unwrap().kind, FluidKind::EthylAlcohol);
    }

    #[test]
    fn find_rejects_unknown_names() {
        let err = find("propylene_glycol").unwrap_err();
        assert!(matches!(err, FluidError::UnknownFluid { .. }));
        // Substrings are not names.
        assert!(find("eth").is_err());
    }

    #[test]
    fn search_uses_substrings() {
        let results = filter_catalog("alcohol");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, FluidKind::EthylAlcohol);
        assert_eq!(filter_catalog("").len(), catalog().len());
    }

    #[test]
    fn builders_match_entries() {
        for entry in catalog() {
            let fluid = entry.kind.builder().concentration(0.2).build().unwrap();
            assert_eq!(fluid.concentration_limits().is_some(), entry.mixture);
        }
    }
}
