//! Decode and encode a device's persisted preference store.
//!
//! # Overview
//!
//! A preference store is serialized as a protobuf map from string keys to
//! typed values: booleans, 32/64-bit integers and floats, UTF-8 strings,
//! string sets, and raw bytes. This crate converts between that wire format
//! and a typed [`Preference`] collection so that tooling can inspect,
//! migrate, or edit a store outside the runtime that owns it.
//!
//! The codec is two pure functions: [`decode`] parses wire bytes into an
//! ordered list of records and [`encode`] serializes a list of records back
//! into wire bytes. Neither holds state between calls, so concurrent use
//! requires no coordination. Store-level concerns (atomic writes, the meaning
//! of any key, schema evolution) belong to the caller.
//!
//! # Example
//!
//! ```
//! use datastore_preferences::{decode, encode, Preference};
//!
//! let preferences = vec![
//!     Preference::Integer {
//!         key: "launch-count".into(),
//!         value: 5,
//!     },
//!     Preference::Boolean {
//!         key: "onboarded".into(),
//!         value: true,
//!     },
//! ];
//!
//! let content = encode(&preferences);
//! assert_eq!(decode(&content).unwrap(), preferences);
//! ```

mod codec;
mod error;
mod preference;

mod wire {
    include!(concat!(env!("OUT_DIR"), "/wire.rs"));
}

pub use codec::{decode, encode};
pub use error::Error;
pub use preference::Preference;
