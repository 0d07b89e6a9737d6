//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own generation and session bookkeeping so route handlers
//! can stay focused on form parsing and response shaping.

pub mod ai;
pub mod session;
