//! Drink catalogue and everything users do with drinks: ratings, the
//! preference derived from them, the drink log, comments and the
//! leaderboard.

mod comment;
mod leaderboard;
mod log;
mod rating;
pub(crate) mod repository;
mod root;
mod streak;

pub use comment::*;
pub use leaderboard::*;
pub use log::*;
pub use rating::*;
pub use root::*;
pub use streak::*;
