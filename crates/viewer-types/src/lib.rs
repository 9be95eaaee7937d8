pub mod config;
pub mod data_set;
pub mod error;
pub mod event;
pub mod service;


pub use error::ViewerError;
pub type Result<T> = std::result::Result<T, ViewerError>;
