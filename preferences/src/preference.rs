//! Typed preference records.

use bytes::Bytes;
use std::{collections::BTreeSet, fmt};

/// A single entry in a preference store.
///
/// Each record pairs a key with exactly one typed payload. Records are
/// immutable once constructed and carry no identity beyond their key and
/// value; the collection holding them is their sole owner.
#[derive(Clone, Debug, PartialEq)]
pub enum Preference {
    Boolean {
        key: String,
        value: bool,
    },
    Float {
        key: String,
        value: f32,
    },
    Integer {
        key: String,
        value: i32,
    },
    Long {
        key: String,
        value: i64,
    },
    /// A UTF-8 string, possibly empty.
    String {
        key: String,
        value: String,
    },
    /// A set of UTF-8 strings. Duplicates collapse and insertion order is
    /// not significant.
    StringSet {
        key: String,
        entries: BTreeSet<String>,
    },
    Double {
        key: String,
        value: f64,
    },
    /// An arbitrary byte sequence, possibly empty.
    ByteArray {
        key: String,
        value: Bytes,
    },
}

impl Preference {
    /// Returns the key identifying this record within its store.
    pub fn key(&self) -> &str {
        match self {
            Self::Boolean { key, .. }
            | Self::Float { key, .. }
            | Self::Integer { key, .. }
            | Self::Long { key, .. }
            | Self::String { key, .. }
            | Self::StringSet { key, .. }
            | Self::Double { key, .. }
            | Self::ByteArray { key, .. } => key,
        }
    }

    /// Returns the fixed display label for this record's type.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Boolean { .. } => "Boolean",
            Self::Float { .. } => "Float",
            Self::Integer { .. } => "Integer",
            Self::Long { .. } => "Long",
            Self::String { .. } => "String",
            Self::StringSet { .. } => "String Set",
            Self::Double { .. } => "Double",
            Self::ByteArray { .. } => "Byte Array",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean { key, value } => write!(f, "{key}={value}"),
            Self::Float { key, value } => write!(f, "{key}={value}"),
            Self::Integer { key, value } => write!(f, "{key}={value}"),
            Self::Long { key, value } => write!(f, "{key}={value}"),
            Self::String { key, value } => write!(f, "{key}={value}"),
            Self::StringSet { key, entries } => {
                write!(f, "{key}=")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                Ok(())
            }
            Self::Double { key, value } => write!(f, "{key}={value}"),
            Self::ByteArray { key, value } => {
                write!(f, "{key}=")?;
                for byte in value {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
