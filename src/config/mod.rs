#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use seed::{default_portfolio, load_seed};
