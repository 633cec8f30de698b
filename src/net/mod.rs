//! Networking modules for the resume REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the I/O seam, `client` layers base path, bearer token and
//! error mapping on top of it, `api` names the concrete endpoints, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod client;
pub mod transport;
pub mod types;
