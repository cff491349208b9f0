//! Outbound adapters implementing the domain's driven ports.
//!
//! [`memory`] keeps users, pages and study fields in process, optionally
//! seeded from a JSON document.

pub mod memory;
