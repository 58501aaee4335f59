//! Pure functions for serializing/deserializing the locality snapshot to/from
//! cache bytes.
//!
//! The snapshot is a JSON array of localities in wire (camelCase) format, so
//! cached values are human-readable and easy to inspect with `redis-cli`.

use crate::locality::Locality;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an ordered slice of localities to JSON bytes.
pub fn serialize_localities(localities: &[Locality]) -> Result<Vec<u8>> {
    serde_json::to_vec(localities).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an ordered vector of localities.
pub fn deserialize_localities(bytes: &[u8]) -> Result<Vec<Locality>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha() -> Locality {
        Locality::new(1, "Alpha")
            .with_statistical_code(10)
            .with_status(1)
    }

    fn beta() -> Locality {
        Locality::new(2, "Beta")
            .with_statistical_code(20)
            .with_status(1)
            .with_parent_code(1)
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let localities = vec![beta(), alpha()];

        let bytes = serialize_localities(&localities).expect("serialize should succeed");
        let deserialized = deserialize_localities(&bytes).expect("deserialize should succeed");

        assert_eq!(deserialized, localities);
        assert_eq!(deserialized[0].code, 2);
    }

    #[test]
    fn test_snapshot_wire_format_is_camel_case_array() {
        let bytes = serialize_localities(&[alpha()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            r#"[{"code":1,"statisticalCode":10,"name":"Alpha","status":1,"parentCode":0}]"#
        );
    }

    #[test]
    fn test_serialize_empty_snapshot() {
        let bytes = serialize_localities(&[]).expect("serialize should succeed");

        assert_eq!(bytes, b"[]");
        assert!(deserialize_localities(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result = deserialize_localities(b"not valid json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_object_instead_of_array() {
        let result = deserialize_localities(br#"{"code": 1}"#);

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
