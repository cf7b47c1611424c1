//! Brand Hangar Core - Shared order lookup library.
//!
//! This crate provides the types and pure logic shared by all Brand Hangar
//! order lookup components:
//! - `proxy` - HTTP gateway in front of the Mintsoft order search API
//! - `cli` - Command-line order lookup client
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order records, order numbers and status display types
//! - [`resolver`] - Picks the one order that matches a requested number
//! - [`lookup`] - Client-side lookup session and order panel rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod lookup;
pub mod resolver;
pub mod types;

pub use lookup::{LookupSession, LookupTicket, LookupView, NOT_FOUND_MESSAGE, OrderPanel};
pub use resolver::resolve;
pub use types::*;
