pub mod app;
pub mod composition;
pub mod config;
pub mod domain;
pub mod error;
pub mod fasta;
pub mod locator;
pub mod ncbi;
pub mod output;
pub mod roster;
