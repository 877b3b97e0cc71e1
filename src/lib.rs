//! SecReport - local viewer for security monitor JSON reports.
//!
//! The `app` layer holds the domain logic (report model, section registry,
//! JSON highlighter, modal state machine) and the state coordinator; the
//! `ui` layer builds the FLTK widgets and owns everything look-and-feel.

pub mod app;
pub mod ui;
