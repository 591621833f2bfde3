//! Vidgate Server Library
//!
//! This module exports the server components for testing and reuse.

pub mod client_ip;
pub mod docs;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
