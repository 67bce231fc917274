mod client;
mod types;

#[cfg(test)]
pub use client::MockBackend;
pub use client::{Backend, HttpBackend};
pub use types::*;
