// Public API exports
pub mod config;
pub mod domain;
pub mod shared;
pub mod stream;

// Server-side modules
pub mod handlers;
pub mod infrastructure;
