use core::fmt::Debug;

use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Asserts that the value serializes to the given JSON string.
#[track_caller]
pub fn test_string_serialization<T>(value: T, expected: &str)
where
    T: Serialize,
{
    pretty_assertions::assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{expected}\"")
    );
}

/// Asserts that the JSON string deserializes to the given value.
#[track_caller]
pub fn test_string_deserialization<T>(value: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    test_deserialization(&format!("\"{value}\""), expected);
}

/// Asserts that the raw JSON deserializes to the given value.
#[track_caller]
pub fn test_deserialization<T>(json: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    pretty_assertions::assert_eq!(serde_json::from_str::<T>(json).unwrap(), expected);
}
