//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (persistence, token
//! decoding, URL building, navigation guarding) from page and component logic
//! so they can be tested natively.

pub mod auth;
pub mod jwt;
pub mod query;
pub mod storage;
