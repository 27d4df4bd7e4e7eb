//! # VectorKit Settings
//!
//! Configuration value objects for the snapping engine and the persisted
//! editor configuration that aggregates them.
//!
//! Snap settings are immutable for the duration of one filter evaluation; the
//! editing session that owns them replaces them wholesale when the user
//! changes a preference.

pub mod config;
pub mod error;
pub mod flags;

pub use config::{Config, GridSnapSettings, LineSnapSettings, StrokeStyle};
pub use error::{SettingsError, SettingsResult};
pub use flags::{GridSnapMode, LineSnapMode, LineSnapTarget};
