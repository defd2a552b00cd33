//! Static file serving
//!
//! This module implements the file-serving side of the server: resolving a
//! request path to a file under the configured root, bootstrapping the root
//! directory, and turning filesystem outcomes into HTTP responses.

pub mod service;

pub use service::{Outcome, StaticFiles};
