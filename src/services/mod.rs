mod contact_service_impl;

pub use contact_service_impl::{
    ContactServiceBuilder, ContactServiceImpl, DEFAULT_CONFIRMATION_MESSAGE,
};
