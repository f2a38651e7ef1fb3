// Receipt Points - Core Library
// Exposes all modules for use in the CLI, the API server, and tests

pub mod config;
pub mod engine;
pub mod error;
pub mod fixtures;
pub mod receipt;
pub mod registry;
pub mod rules;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::ServerConfig;
pub use engine::{compute_score, RulePoints, ScoreBreakdown};
pub use error::{Error, Result};
pub use fixtures::demo_items;
pub use receipt::{parse_amount, Item, Receipt};
pub use registry::{ReceiptRegistry, RegistryEntry};
pub use rules::Rule;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
