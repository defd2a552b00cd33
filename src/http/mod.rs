//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 surface of a single-shot static file
//! server: one request line in, one response out, then the connection closes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving read, parse, dispatch, write
//! - **`parser`**: Extracts the request line from a raw read buffer
//! - **`request`**: HTTP request representation (method, path, version)
//! - **`response`**: HTTP response representation with fixed error pages
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection Lifecycle
//!
//! Each client connection goes through a straight line, never a loop:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of the request bytes
//!        └──────┬──────┘
//!               │ Request line parsed (else close silently)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← GET → static files, other → 501
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Head + body (or streamed file)
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (Connection: close is always advertised)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hearth::files::StaticFiles;
//! use hearth::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let files = StaticFiles::new("./public".into());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let files = files.clone();
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, files);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
