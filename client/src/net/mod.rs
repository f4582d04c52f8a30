//! Networking for the geometry service.
//!
//! `types` mirrors the JSON wire schema and `api` wraps the four endpoints the
//! sketcher calls through the server's `/api` forwarder.

pub mod api;
pub mod types;
