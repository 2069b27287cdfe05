//! Drink suggestion engine
//!
//! Generates drinks from a fixed flavor taxonomy, infers their tags, scores
//! them against a user's like/dislike history and ranks the candidates.
//! Every random decision goes through a generator passed in by the caller.

mod drink;
mod error;
mod generator;
mod ranking;
mod scorer;
mod tagging;

pub use drink::*;
pub use error::*;
pub use generator::*;
pub use ranking::*;
pub use scorer::*;
pub use tagging::*;
