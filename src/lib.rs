//! MicroSpotter CLI
//!
//! Web版と同じ画像ストアをローカルファイルで扱う

pub mod cli;
pub mod config;
pub mod error;
pub mod file_store;
pub mod spotter;
