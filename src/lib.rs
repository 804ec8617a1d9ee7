// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod index;
pub mod model;
pub mod progress;
pub mod relations;
pub mod runner;
pub mod store;
pub mod validate;
