// Adapters layer: concrete implementations for external systems (model files, HTTP, HTML).

pub mod http;
pub mod model_store;
pub mod render;
