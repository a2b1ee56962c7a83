//! Hang demo page server — watch, publish and support pages.

pub mod api;
pub mod config;
pub mod document;
