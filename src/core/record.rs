use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::ForgeError;

/// One generated fixture element.
///
/// `index` is the element's position at creation time; it is never renumbered.
/// Keys other than the three known ones are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub index: u64,
    pub name: String,
    pub timestamp: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            name: default_name(index),
            timestamp: now_secs(),
            extra: Map::new(),
        }
    }
}

pub fn default_name(index: u64) -> String {
    format!("name_{index}")
}

/// Seconds since the Unix epoch, with sub-second precision.
pub fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

pub fn build_records(elements: i64) -> Result<Vec<Record>, ForgeError> {
    if elements <= 0 {
        return Err(ForgeError::InvalidElementCount { elements });
    }

    Ok((0..elements as u64).map(Record::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sequential_records() {
        for n in [1, 2, 3, 17] {
            let records = build_records(n).unwrap();
            assert_eq!(records.len(), n as usize);
            for (i, record) in records.iter().enumerate() {
                assert_eq!(record.index, i as u64);
                assert_eq!(record.name, format!("name_{i}"));
                assert!(record.timestamp > 0.0);
                assert!(record.extra.is_empty());
            }
        }
    }

    #[test]
    fn rejects_non_positive_counts() {
        for n in [0, -1, -42, i64::MIN] {
            match build_records(n) {
                Err(ForgeError::InvalidElementCount { elements }) => assert_eq!(elements, n),
                other => panic!("expected InvalidElementCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_keys_survive_deserialization() {
        let raw = r#"{"index": 4, "name": "x", "timestamp": 1.5, "tag": "keep"}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.index, 4);
        assert_eq!(record.extra.get("tag"), Some(&Value::from("keep")));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["tag"], "keep");
    }
}
