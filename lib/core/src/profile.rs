use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flavor compound known to a molecular data source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Compound {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Chemical family, e.g. "Terpenes". Metadata only.
    #[serde(default)]
    pub family: String,
    /// Odor description, e.g. "Citrus, Fresh". Metadata only.
    #[serde(default)]
    pub odor: String,
}

impl Compound {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        family: impl Into<String>,
        odor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            family: family.into(),
            odor: odor.into(),
        }
    }

    /// A compound with nothing but an id
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            family: String::new(),
            odor: String::new(),
        }
    }
}

/// The set of compounds associated with one ingredient
///
/// Compounds are keyed by id, so a profile never holds the same id twice.
/// When constructed from a list with duplicate ids the first occurrence wins.
/// Profiles are plain values: built per lookup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MolecularProfile {
    ingredient: String,
    compounds: BTreeMap<String, Compound>,
}

impl MolecularProfile {
    pub fn new(ingredient: impl Into<String>, compounds: impl IntoIterator<Item = Compound>) -> Self {
        let mut by_id = BTreeMap::new();
        for compound in compounds {
            by_id.entry(compound.id.clone()).or_insert(compound);
        }
        Self {
            ingredient: ingredient.into(),
            compounds: by_id,
        }
    }

    /// Profile with no known compounds
    pub fn empty(ingredient: impl Into<String>) -> Self {
        Self::new(ingredient, std::iter::empty())
    }

    /// Build a profile from bare compound ids
    pub fn from_ids<I, S>(ingredient: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ingredient, ids.into_iter().map(Compound::bare))
    }

    #[inline]
    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    #[inline]
    pub fn contains(&self, compound_id: &str) -> bool {
        self.compounds.contains_key(compound_id)
    }

    /// Compound ids in ascending order
    pub fn compound_ids(&self) -> impl Iterator<Item = &str> {
        self.compounds.keys().map(String::as_str)
    }

    /// Compounds in ascending id order
    pub fn compounds(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.values()
    }

    pub fn get(&self, compound_id: &str) -> Option<&Compound> {
        self.compounds.get(compound_id)
    }
}

/// Wire shape shared with the molecular source: `{"name": .., "molecules": [..]}`
#[derive(Serialize, Deserialize)]
struct ProfileRepr {
    name: String,
    #[serde(default)]
    molecules: Vec<Compound>,
}

impl Serialize for MolecularProfile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ProfileRepr {
            name: self.ingredient.clone(),
            molecules: self.compounds.values().cloned().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MolecularProfile {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ProfileRepr::deserialize(deserializer)?;
        Ok(MolecularProfile::new(repr.name, repr.molecules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_collapse() {
        let profile = MolecularProfile::new(
            "basil",
            vec![
                Compound::new("mol_001", "Linalool", "Terpenes", "Floral, Sweet"),
                Compound::new("mol_001", "Linalool (dup)", "", ""),
                Compound::new("mol_003", "Limonene", "Terpenes", "Citrus, Fresh"),
            ],
        );

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("mol_001").unwrap().name, "Linalool");
        assert_eq!(profile.compound_ids().collect::<Vec<_>>(), vec!["mol_001", "mol_003"]);
    }

    #[test]
    fn test_empty_profile() {
        let profile = MolecularProfile::empty("unobtainium");
        assert!(profile.is_empty());
        assert_eq!(profile.ingredient(), "unobtainium");
    }

    #[test]
    fn test_json_shape() {
        let profile = MolecularProfile::from_ids("garlic", ["mol_b", "mol_a"]);
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["name"], "garlic");
        assert_eq!(value["molecules"][0]["id"], "mol_a");
        assert_eq!(value["molecules"][1]["id"], "mol_b");
    }

    #[test]
    fn test_missing_molecules_is_empty() {
        let profile: MolecularProfile = serde_json::from_str(r#"{"name": "saffron"}"#).unwrap();
        assert!(profile.is_empty());
    }
}
