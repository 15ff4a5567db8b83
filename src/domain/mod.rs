// Domain layer
pub mod models;
