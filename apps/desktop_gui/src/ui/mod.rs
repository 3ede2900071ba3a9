//! UI layer for the desktop GUI: the three forms and their output sections.

pub mod app;

pub use app::DigitalWorldApp;
