#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod error;
mod models;

pub use client::VisionClient;
pub use error::VisionError;
pub use models::*;
