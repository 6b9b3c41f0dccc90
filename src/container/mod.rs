//! Ad hoc JSON payload container.
//!
//! This module provides [`AdHoc`], a thin wrapper holding an arbitrary
//! structured JSON value, plus the [`PayloadError`] raised when a caller
//! tries to store a non-structured payload.
//!
//! The wire-facing contract is deliberately minimal:
//! `container.serialize()` is exactly the JSON encoding of the held value,
//! and [`AdHoc::parse`] is the inverse factory, propagating JSON parse errors
//! unmodified.
//!
//! # Examples
//!
//! ```rust
//! use veckit::container::AdHoc;
//! use serde_json::json;
//!
//! let container = AdHoc::from_value(json!({"a": 1}))?;
//! let encoded = container.serialize()?;
//! let round_tripped = AdHoc::parse(&encoded)?;
//! assert_eq!(round_tripped.data(), container.data());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod adhoc;

pub use adhoc::{AdHoc, PayloadError};
