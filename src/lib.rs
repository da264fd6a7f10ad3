//! Tagserve - Tag-substituting static file server
//!
//! Core library for the HTTP worker pipeline and the accept loop.

pub mod config;
pub mod http;
pub mod server;
