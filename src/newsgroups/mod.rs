// src/newsgroups/mod.rs
pub mod client;
pub mod models;
