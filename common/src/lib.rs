//! MicroSpotter Common Library
//!
//! Web(WASM)とCLIで共有される型とロジック

pub mod catalog;
pub mod data_url;
pub mod error;
pub mod login;
pub mod progress;
pub mod selection;
pub mod store;

pub use catalog::{Organism, CATALOG};
pub use error::{Error, Result};
pub use login::{LoginField, LoginFields};
pub use selection::DialogState;
pub use store::{ImageStore, KeyValueStore, MemoryStorage, UploadedImages, STORAGE_KEY};
