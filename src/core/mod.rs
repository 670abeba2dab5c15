pub mod diff;
pub mod engine;
pub mod filter;
pub mod normalizer;
pub mod types;
