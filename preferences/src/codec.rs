//! Conversion between wire bytes and typed preference records.

use crate::{wire, Error, Preference};
use prost::Message;
use std::collections::{hash_map, HashMap};
use tracing::debug;

/// Parse `content` into an ordered list of preferences.
///
/// Output order follows the wire order of the map entries. An entry whose
/// value is unset is a valid wire state and is dropped, not treated as an
/// error. Duplicate keys cannot occur in valid input; if present, the last
/// occurrence wins (protobuf map semantics).
///
/// Returns [`Error::MalformedContent`] if `content` is not a valid
/// serialization of a preference map.
pub fn decode(content: &[u8]) -> Result<Vec<Preference>, Error> {
    let map = wire::PreferenceMap::decode(content)?;

    let mut records = Vec::with_capacity(map.preferences.len());
    let mut positions = HashMap::with_capacity(map.preferences.len());
    for entry in map.preferences {
        let key = entry.key;
        let Some(value) = entry.value.and_then(|value| value.value) else {
            debug!(key = %key, "dropped preference entry with unset value");
            continue;
        };
        let position_key = key.clone();
        let record = match value {
            wire::value::Value::Boolean(value) => Preference::Boolean { key, value },
            wire::value::Value::Float(value) => Preference::Float { key, value },
            wire::value::Value::Integer(value) => Preference::Integer { key, value },
            wire::value::Value::Long(value) => Preference::Long { key, value },
            wire::value::Value::String(value) => Preference::String { key, value },
            wire::value::Value::StringSet(set) => Preference::StringSet {
                key,
                entries: set.strings.into_iter().collect(),
            },
            wire::value::Value::Double(value) => Preference::Double { key, value },
            wire::value::Value::BytesArray(value) => Preference::ByteArray { key, value },
        };
        match positions.entry(position_key) {
            hash_map::Entry::Occupied(at) => records[*at.get()] = record,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(records.len());
                records.push(record);
            }
        }
    }
    Ok(records)
}

/// Encode `preferences` as a wire preference map.
///
/// Entries are written in the order given. If two records share a key, the
/// last one wins (map semantics: the later record overwrites the earlier
/// entry in place). An empty slice encodes to the empty map, which is zero
/// bytes on the wire.
pub fn encode(preferences: &[Preference]) -> Vec<u8> {
    let mut entries: Vec<wire::preference_map::Entry> = Vec::with_capacity(preferences.len());
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(preferences.len());
    for preference in preferences {
        let value = match preference {
            Preference::Boolean { value, .. } => wire::value::Value::Boolean(*value),
            Preference::Float { value, .. } => wire::value::Value::Float(*value),
            Preference::Integer { value, .. } => wire::value::Value::Integer(*value),
            Preference::Long { value, .. } => wire::value::Value::Long(*value),
            Preference::String { value, .. } => wire::value::Value::String(value.clone()),
            Preference::StringSet { entries, .. } => {
                wire::value::Value::StringSet(wire::StringSet {
                    strings: entries.iter().cloned().collect(),
                })
            }
            Preference::Double { value, .. } => wire::value::Value::Double(*value),
            Preference::ByteArray { value, .. } => wire::value::Value::BytesArray(value.clone()),
        };
        let entry = wire::preference_map::Entry {
            key: preference.key().to_string(),
            value: Some(wire::Value { value: Some(value) }),
        };
        match positions.entry(preference.key()) {
            hash_map::Entry::Occupied(at) => entries[*at.get()] = entry,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(entry);
            }
        }
    }

    wire::PreferenceMap {
        preferences: entries,
    }
    .encode_to_vec()
}
