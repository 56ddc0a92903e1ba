// src/api/mod.rs

pub mod models;
pub mod tmdb;
