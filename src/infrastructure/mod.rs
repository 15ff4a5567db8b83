// External service clients
// Upstream intent-search over streamed HTTP

pub mod upstream;

pub use upstream::IntentClient;
