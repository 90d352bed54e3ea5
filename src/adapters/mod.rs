// Adapters layer: concrete implementations of the domain ports (persistence,
// context lookup, outcome delivery).

pub mod file_store;
pub mod http_context;
pub mod http_sender;

pub use file_store::JsonFileStore;
pub use http_context::HttpContextStore;
pub use http_sender::HttpOutcomeSender;
