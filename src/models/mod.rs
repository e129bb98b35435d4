// src/models/mod.rs

pub mod answer;
pub mod sound_test;
pub mod user;
