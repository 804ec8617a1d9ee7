// src/gui/components/mod.rs
pub mod about_panel;
pub mod data_table;
pub mod picker;
pub mod status_bar;
pub mod tabs;
