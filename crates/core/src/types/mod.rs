//! Core types for Brand Hangar order lookup.
//!
//! This module provides type-safe wrappers for the Mintsoft order payloads.

pub mod order;
pub mod order_number;
pub mod status;

pub use order::{OrderRecord, RawOrderResponse};
pub use order_number::{OrderNumber, OrderNumberError};
pub use status::*;
