//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state in local signals and reads the
//! session through context. Access control is the router guard's job, not
//! the pages'.

pub mod cv_browse;
pub mod cv_edit;
pub mod login;
pub mod person_create;
