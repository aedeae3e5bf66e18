//! CLI library components for the ICI outcome explorer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
