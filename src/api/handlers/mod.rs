// src/api/handlers/mod.rs
pub mod education;
pub mod generator;
pub mod strength;
