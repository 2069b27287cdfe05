use thiserror::Error;

use crate::generator::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("flavor profile {profile} has no {category} entries")]
    EmptyCategory { profile: String, category: Category },

    #[error("word list for drink names is empty")]
    EmptyNameList,

    #[error("no flavor profile available")]
    NoProfile,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("Invalid candidate count: {requested} (expected between 1 and {max})")]
    InvalidCandidateCount { requested: usize, max: usize },

    #[error("Insufficient candidates: none of the {requested} generation attempts succeeded")]
    InsufficientCandidates { requested: usize },
}
