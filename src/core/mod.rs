//! Configuration and domain types shared by the classifier, renderer and worker.

pub mod config;
pub mod models;
