//! Profile Cards Library
//!
//! Builds HackTheBox and TryHackMe SVG stat cards from profile APIs, with
//! league-change tracking persisted between runs.

pub mod config;
pub mod embed;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod render;
pub mod scrapers;
pub mod state;
pub mod types;
pub mod validate;

pub use error::{CardError, Result};
pub use types::*;
