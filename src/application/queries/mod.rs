// src/application/queries/mod.rs
pub mod home;
pub mod posts;
pub mod tools;
