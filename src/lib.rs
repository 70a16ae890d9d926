//! In-memory INI configuration store.
//!
//! Parses INI text into a two-level map of sections holding key/value string
//! pairs, supports editing the map in place, and serializes it back to INI
//! text. Values are plain strings: no type coercion, no multi-line values, no
//! dialect extensions.
//!
//! ```
//! use inistore::IniConfig;
//!
//! let mut config: IniConfig = "[server]\nport=8080\n".parse().unwrap();
//! assert_eq!(config.get("server", "port").unwrap(), "8080");
//!
//! config.set("server", "host", "0.0.0.0").unwrap();
//! let text = config.to_string();
//! assert!(text.contains("host=0.0.0.0"));
//! ```
//!
//! All operations are direct, blocking calls. [`IniConfig`] performs no
//! internal locking; sharing one instance across threads requires external
//! synchronization on the caller's side.

pub mod config;
pub mod utils;

pub use config::{ConfigError, ConfigMap, IniConfig, Section};
