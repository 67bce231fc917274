pub mod api;
pub mod app;
pub mod config;
pub mod encode;
pub mod error;
pub mod shell;
pub mod submitter;
pub mod view;

pub use error::{Error, Result};
