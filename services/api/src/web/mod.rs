pub mod catalog;
pub mod interactions;
pub mod medications;
pub mod protocol;
pub mod rest;
pub mod state;

// Re-export the handlers and router so the binary can build the web server
// without reaching into submodules.
pub use catalog::{autocomplete_handler, autofill_handler};
pub use interactions::has_interactions_handler;
pub use medications::{add_medication_handler, delete_medication_handler, get_medications_handler};
pub use rest::{api_router, ApiDoc};
