// src/core/mod.rs

pub mod decode;
pub mod html;
pub mod net;
pub mod sanitize;
