//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused
//! models. Only the auth session is app-wide; page-local state lives in
//! signals inside each page.

pub mod auth;
