//! Application layer: report model, domain logic and the state coordinator.
//!
//! # Structure
//!
//! - `report` / `registry` - the loaded report and its raw-data sections
//! - `highlight` / `modal` - JSON highlighter and the viewer state machine
//! - `clipboard` / `export` - copy acknowledgment and section export
//! - `settings` / `platform` - persisted preferences, theme detection
//! - `state.rs` - main application coordinator

pub mod clipboard;
pub mod error;
pub mod export;
pub mod highlight;
pub mod messages;
pub mod modal;
pub mod platform;
pub mod registry;
pub mod report;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use platform::detect_system_dark_mode;
pub use report::{Priority, PriorityFilter, Report, Severity};
pub use settings::{AppSettings, ThemeMode};
