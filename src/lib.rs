pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod normalizer;
pub mod services;
pub mod sources;
