//! Data models for the Nieuwe Vloer backend.
//!
//! This module contains the contact submission entity and the static
//! service catalog entries exposed by the public API.

pub mod contact_message;
pub mod service_item;

pub use contact_message::ContactMessage;
pub use service_item::{service_catalog, ServiceItem};
