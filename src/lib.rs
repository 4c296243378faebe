// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod api;
pub mod config;
pub mod error;
pub mod favorites;
pub mod gui;
pub mod loader;
pub mod progress;
pub mod table;
pub mod time;
pub mod views;

#[cfg(feature = "cli")]
pub mod cli;
