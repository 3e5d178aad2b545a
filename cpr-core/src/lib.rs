// cpr-core/src/lib.rs

pub mod classpath;
pub mod command;
pub mod discover;

// Re-export key types for easier use by the CLI crate
pub use classpath::{ClassPathResolver, DependencyKind, TychoClassPathResolver, TychoDependency};
pub use command::{mvn_command, mvn_command_for};
pub use discover::{discover_descriptors, find_descriptor};
