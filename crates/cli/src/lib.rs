//! Hang demo CLI — offline name resolution.

pub mod cli;
pub mod commands;
