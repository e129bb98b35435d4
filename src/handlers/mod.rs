// src/handlers/mod.rs

pub mod answer;
pub mod auth;
