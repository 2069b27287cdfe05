mod generate;
mod migrate;
mod server;

pub use generate::generate;
pub use migrate::{migrate, reset};
pub use server::serve;
