pub mod contact_handlers;

pub use contact_handlers::*;
