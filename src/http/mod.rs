//! HTTP protocol implementation.
//!
//! This module implements the single-request file-serving protocol: each
//! connection carries exactly one GET request, receives one response, and
//! is closed (`Connection: close` is always sent).
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection worker driving the full request/response cycle
//! - **`parser`**: Line-oriented request parsing (request line + discarded headers)
//! - **`request`**: HTTP request representation
//! - **`response`**: Status codes emitted by this server
//! - **`writer`**: Serializes and writes the fixed response header block
//! - **`mime`**: Content type detection based on file extensions
//! - **`render`**: Body streaming with template-tag substitution
//!
//! # Request lifecycle
//!
//! Each client connection moves through a fixed sequence:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Parsing   │ ← Read request line, discard headers
//!        └──────┬──────┘
//!               │ GET path recovered
//!               ▼
//!        ┌──────────────────┐
//!        │   Resolving      │ ← Map path to a file, check existence,
//!        └──────┬───────────┘   classify content type
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Header block, then streamed body
//!        └──────┬───────────┘   (tags substituted in HTML)
//!               │ Response sent
//!               ▼
//!             Closed          ← always; no keep-alive
//! ```
//!
//! # Template tags
//!
//! HTML bodies are scanned line-by-line for two literal tags, replaced at
//! serve time: [`render::DATE_TAG`] becomes the current HTTP-formatted
//! date and [`render::SERVER_TAG`] becomes the configured server name.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod render;
pub mod request;
pub mod response;
pub mod writer;
