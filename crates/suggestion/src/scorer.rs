use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::drink::Drink;

/// Tags a user has liked and disliked, derived from their current ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    #[serde(default)]
    pub liked_tags: BTreeSet<String>,
    #[serde(default)]
    pub disliked_tags: BTreeSet<String>,
}

impl UserPreference {
    pub fn is_empty(&self) -> bool {
        self.liked_tags.is_empty() && self.disliked_tags.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub liked: f64,
    pub disliked: f64,
    pub jitter: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            liked: 5.0,
            disliked: 6.0,
            jitter: 0.6,
        }
    }
}

impl ScoringWeights {
    /// Jitter must stay below the liked weight so that a single matching tag
    /// always outranks a drink with no match.
    pub fn validate(&self) -> Result<(), String> {
        let all_finite = [self.liked, self.disliked, self.jitter]
            .iter()
            .all(|w| w.is_finite());

        if !all_finite {
            return Err("Scoring weights must be finite numbers".to_string());
        }

        if self.jitter < 0.0 {
            return Err("Scoring jitter cannot be negative".to_string());
        }

        if self.liked <= self.jitter {
            return Err("Liked weight must be greater than jitter".to_string());
        }

        if self.disliked < self.liked {
            return Err("Disliked weight must be at least the liked weight".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Jitter-free part of the score.
    pub fn base_score(&self, drink: &Drink, preference: &UserPreference) -> f64 {
        drink.tags.iter().fold(0.0, |score, tag| {
            let mut score = score;
            if preference.liked_tags.contains(tag) {
                score += self.weights.liked;
            }
            if preference.disliked_tags.contains(tag) {
                score -= self.weights.disliked;
            }
            score
        })
    }

    /// Scores a drink for a user. Without a (non-empty) preference the score
    /// is uniform in `[0, 1)`.
    pub fn score<R: Rng + ?Sized>(
        &self,
        drink: &Drink,
        preference: Option<&UserPreference>,
        rng: &mut R,
    ) -> f64 {
        let Some(preference) = preference.filter(|p| !p.is_empty()) else {
            return rng.random::<f64>();
        };

        let jitter = if self.weights.jitter > 0.0 {
            rng.random_range(0.0..self.weights.jitter)
        } else {
            0.0
        };

        self.base_score(drink, preference) + jitter
    }
}
