// src/handlers/mod.rs

pub mod broadcast;
pub mod sessions;
pub mod teachers;
pub mod users;
