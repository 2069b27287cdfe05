use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

use crate::tagging::infer_tags;

/// A drink recipe.
///
/// An empty `tags` set means the tags were never computed; call
/// [`Drink::ensure_tags`] before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Drink {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
    ) -> Self {
        let name = name.into();
        let id = fingerprint(&name, &ingredients);

        Self {
            id,
            name,
            description: description.into(),
            ingredients,
            steps,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Infers tags from the ingredient list when none are present.
    pub fn ensure_tags(&mut self) {
        if !self.has_tags() {
            self.tags = infer_tags(&self.ingredients);
        }
    }

    /// Text read aloud by a narrator: name, description, the first six
    /// ingredients and the first three steps.
    pub fn narration(&self) -> String {
        let ingredients = self
            .ingredients
            .iter()
            .take(6)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let steps = self
            .steps
            .iter()
            .take(3)
            .map(|s| s.trim_end_matches('.'))
            .collect::<Vec<_>>()
            .join(". ");

        format!(
            "{}. {}. Ingredients: {}. Steps: {}. Cheers.",
            self.name,
            self.description.trim_end_matches('.'),
            ingredients,
            steps
        )
    }
}

/// Content-derived drink id: `d_` + 16 hex chars of SHA3-256 over the name
/// and ingredient list.
pub fn fingerprint(name: &str, ingredients: &[String]) -> String {
    let digest = Sha3_256::digest(format!("{}|{}", name, ingredients.join(",")).as_bytes());
    let hex = digest
        .iter()
        .take(8)
        .map(|b| format!("{b:02x}"))
        .collect::<String>();

    format!("d_{hex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Drink {
        Drink::new(
            "Golden Lagoon",
            "A tropical drink built on dark rum.",
            vec![
                "2 oz dark rum".to_owned(),
                "4 oz pineapple juice".to_owned(),
                "0.5 oz lime juice".to_owned(),
                "Garnish: pineapple wedge".to_owned(),
            ],
            vec![
                "Fill a shaker with ice.".to_owned(),
                "Add the dark rum and pineapple juice.".to_owned(),
                "Add 0.5 oz lime juice and shake until chilled.".to_owned(),
                "Strain into a chilled glass and garnish with pineapple wedge.".to_owned(),
            ],
        )
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_bound() {
        let a = sample();
        let b = sample();
        assert_eq!(a.id, b.id);
        assert!(a.id.starts_with("d_"));
        assert_eq!(a.id.len(), 18);

        let other = Drink::new("Golden Harbor", "", a.ingredients.clone(), vec![]);
        assert_ne!(a.id, other.id);
    }

    #[test]
    fn test_ensure_tags_infers_only_when_missing() {
        let mut drink = sample();
        assert!(!drink.has_tags());
        drink.ensure_tags();
        assert!(drink.tags.contains("rum"));
        assert!(drink.tags.contains("pineapple"));

        let mut tagged = sample().with_tags(["house-special"]);
        tagged.ensure_tags();
        assert_eq!(tagged.tags.len(), 1);
        assert!(tagged.tags.contains("house-special"));
    }

    #[test]
    fn test_narration() {
        let script = sample().narration();
        assert!(script.starts_with("Golden Lagoon. A tropical drink built on dark rum. Ingredients: 2 oz dark rum"));
        assert!(script.contains("Steps: Fill a shaker with ice. Add the dark rum and pineapple juice."));
        assert!(!script.contains("Strain"));
        assert!(script.ends_with("Cheers."));
    }

    #[test]
    fn test_missing_tags_deserialize_as_empty() {
        let drink: Drink = serde_json::from_str(
            r#"{"id":"d_1","name":"x","description":"","ingredients":[],"steps":[]}"#,
        )
        .unwrap();
        assert!(!drink.has_tags());
    }
}
