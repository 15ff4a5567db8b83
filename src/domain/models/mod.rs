// Domain models (business entities)
// Request and result types shared by the gateway and the CLI

pub mod intent;
pub mod product;

pub use intent::IntentQuery;
pub use product::{IntentResults, ProductRecord, PREVIEW_LIMIT};
