//! The [`AdHoc`] wrapper and its payload validation error.

use serde_json::{Map, Value};

/// Represents an error when a non-structured payload is offered to [`AdHoc`].
///
/// The payload of an [`AdHoc`] container must be a structured, non-null JSON
/// value (an object or an array). Scalars and `null` are rejected at the
/// setter, never silently coerced.
///
/// # Examples
///
/// ```rust
/// use veckit::container::PayloadError;
///
/// let error = PayloadError { value_kind: "null" };
/// assert_eq!(
///     format!("{}", error),
///     "ad hoc payload must be a JSON object or array, got null",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadError {
    /// The JSON kind of the rejected payload (`"null"`, `"boolean"`,
    /// `"number"`, or `"string"`).
    pub value_kind: &'static str,
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "ad hoc payload must be a JSON object or array, got {}",
            self.value_kind
        )
    }
}

impl std::error::Error for PayloadError {}

/// A thin wrapper holding an arbitrary structured JSON value.
///
/// A freshly constructed container holds an empty JSON object. The payload is
/// replaceable through [`set_data`](Self::set_data), which insists on a
/// structured, non-null value; serialization is a plain JSON encoding of the
/// payload, and [`parse`](Self::parse) is the inverse factory.
///
/// Note the asymmetry, which is part of the contract: [`parse`](Self::parse)
/// performs no shape validation beyond successful JSON parsing, so a
/// container deserialized from `"null"` or a scalar document holds that value
/// as-is.
///
/// # Examples
///
/// ```rust
/// use veckit::container::AdHoc;
/// use serde_json::json;
///
/// let mut container = AdHoc::new();
/// assert_eq!(container.serialize().unwrap(), "{}");
///
/// container.set_data(json!({"a": 1})).unwrap();
/// assert_eq!(container.serialize().unwrap(), r#"{"a":1}"#);
///
/// assert!(container.set_data(json!(null)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdHoc {
    data: Value,
}

impl AdHoc {
    /// Creates a container holding an empty JSON object.
    pub fn new() -> Self {
        Self {
            data: Value::Object(Map::new()),
        }
    }

    /// Creates a container holding the given payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the payload is not a JSON object or
    /// array.
    pub fn from_value(data: Value) -> Result<Self, PayloadError> {
        validate(&data)?;
        Ok(Self { data })
    }

    /// Returns the held payload.
    #[inline]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Replaces the held payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the payload is not a JSON object or
    /// array; the previous payload is kept in that case.
    pub fn set_data(&mut self, data: Value) -> Result<(), PayloadError> {
        validate(&data)?;
        self.data = data;
        Ok(())
    }

    /// Encodes the held payload as a JSON string.
    ///
    /// # Errors
    ///
    /// Propagates the encoder's [`serde_json::Error`]; a plain
    /// [`serde_json::Value`] payload does not fail in practice.
    pub fn serialize(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }

    /// Parses a JSON string into a new container.
    ///
    /// No shape validation happens beyond parsing: whatever JSON value the
    /// document encodes becomes the payload, `null` and scalars included.
    ///
    /// # Errors
    ///
    /// Propagates the [`serde_json::Error`] of a malformed document
    /// unmodified.
    pub fn parse(input: &str) -> serde_json::Result<Self> {
        let data = serde_json::from_str(input)?;
        Ok(Self { data })
    }
}

impl Default for AdHoc {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(AdHoc: Send, Sync);

/// The payload contract: structured and non-null.
const fn validate(data: &Value) -> Result<(), PayloadError> {
    match data {
        Value::Object(_) | Value::Array(_) => Ok(()),
        Value::Null => Err(PayloadError { value_kind: "null" }),
        Value::Bool(_) => Err(PayloadError {
            value_kind: "boolean",
        }),
        Value::Number(_) => Err(PayloadError {
            value_kind: "number",
        }),
        Value::String(_) => Err(PayloadError {
            value_kind: "string",
        }),
    }
}
