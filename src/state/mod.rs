/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The per-session selections, uploads and outputs (session.rs)

pub mod data;
pub mod session;
