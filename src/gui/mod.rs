// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod pages;
pub mod progress;
pub mod router;
pub mod table_model;

pub use app::run;
