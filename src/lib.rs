// src/lib.rs

pub mod config;
pub mod core;
pub mod counting;
pub mod error;
pub mod nlp;
pub mod persistence;

pub use crate::config::Config;
pub use crate::core::engine::{run, ComparisonEngine, ComparisonReport};
pub use crate::error::{LemmaError, Result};
