mod cors;
mod panic;

pub use cors::cors_layer;
pub use panic::panic_response;
