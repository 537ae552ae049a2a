// Adapters layer: concrete implementations for external systems (downstream
// fighter services, fight persistence).

pub mod clients;
pub mod store;
