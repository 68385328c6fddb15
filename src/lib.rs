// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod fixture;
pub mod input;
pub mod plan;
pub mod sql;
pub mod csv;

pub mod cli;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;

pub use error::FixtureError;
pub use fixture::{generate, Fixture, FixtureSet};
