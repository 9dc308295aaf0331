//! Student aggregate and the coercion applied to incoming payloads.
//!
//! Records are schema-flexible JSON documents. A payload is coerced field by
//! field into a [`StudentDocument`] before it reaches a store: `name` becomes
//! text, `age` becomes a number, unknown keys are dropped and `null` clears a
//! field. Reading goes the other way and tolerates whatever the store holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use thiserror::Error;
use uuid::Uuid;

/// Document key holding the student's name.
pub const NAME_FIELD: &str = "name";
/// Document key holding the student's age.
pub const AGE_FIELD: &str = "age";

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Store-assigned, immutable student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

/// Validation errors raised when parsing a [`StudentId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentIdValidationError {
    /// The identifier is empty once trimmed.
    #[error("student id must not be empty")]
    Empty,
    /// The identifier is not a UUID.
    #[error("invalid student id \"{value}\": expected a UUID")]
    Malformed { value: String },
}

impl StudentId {
    /// Parse an identifier taken from a request path.
    ///
    /// # Examples
    /// ```
    /// use student_records::domain::StudentId;
    ///
    /// let id = StudentId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(StudentId::new("42").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, StudentIdValidationError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(StudentIdValidationError::Empty);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| StudentIdValidationError::Malformed {
                value: raw.to_owned(),
            })
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from a store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = StudentIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A student's age. Any finite number is accepted.
///
/// Integral ages serialise as JSON integers (`21`, not `21.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Age(f64);

/// Validation errors raised when constructing an [`Age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeValidationError {
    /// NaN and infinities have no JSON representation.
    #[error("age must be a finite number")]
    NotFinite,
}

impl Age {
    /// Validate and construct an age.
    pub fn new(value: f64) -> Result<Self, AgeValidationError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AgeValidationError::NotFinite)
        }
    }

    /// The numeric value.
    pub fn value(self) -> f64 {
        self.0
    }

    fn as_integer(self) -> Option<i64> {
        if self.0.fract() != 0.0 || self.0.abs() > MAX_SAFE_INTEGER {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is integral and within the exactly representable range"
        )]
        let integer = self.0 as i64;
        Some(integer)
    }

    fn to_json(self) -> Value {
        match self.as_integer() {
            Some(integer) => Value::from(integer),
            None => Number::from_f64(self.0).map_or(Value::Null, Value::Number),
        }
    }
}

impl TryFrom<f64> for Age {
    type Error = AgeValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(integer) => serializer.serialize_i64(integer),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(integer) => write!(f, "{integer}"),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Errors raised while coercing a payload into a [`StudentDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentCoercionError {
    /// The payload is not a JSON object.
    #[error("student payload must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
    /// A field value cannot be converted to the field's type.
    #[error(
        "student validation failed: {field}: cast to {expected} failed for value {value} (type {found})"
    )]
    Cast {
        field: &'static str,
        expected: &'static str,
        value: String,
        found: &'static str,
    },
}

/// The schema-coerced fields of a student record.
///
/// A document only holds keys that were present in its source: a partial
/// payload yields a partial document, which is what update operations merge
/// over the stored record. A `null` value records that the field was cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDocument {
    fields: Map<String, Value>,
}

impl StudentDocument {
    /// Coerce a request payload.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use student_records::domain::StudentDocument;
    ///
    /// let doc = StudentDocument::from_payload(&json!({ "name": "Ada", "age": "21", "extra": true }))
    ///     .expect("coercible payload");
    /// assert_eq!(doc.to_value(), json!({ "name": "Ada", "age": 21 }));
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self, StudentCoercionError> {
        let Value::Object(object) = payload else {
            return Err(StudentCoercionError::NotAnObject {
                found: json_type_name(payload),
            });
        };

        let mut fields = Map::new();
        if let Some(raw) = object.get(NAME_FIELD) {
            fields.insert(NAME_FIELD.to_owned(), coerce_name(raw)?);
        }
        if let Some(raw) = object.get(AGE_FIELD) {
            fields.insert(AGE_FIELD.to_owned(), coerce_age(raw)?);
        }
        Ok(Self { fields })
    }

    /// Wrap a document read back from a store without coercion.
    ///
    /// Anything other than a JSON object reads as an empty document.
    pub fn from_stored(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.fields
            .insert(NAME_FIELD.to_owned(), Value::String(name.into()));
        self
    }

    /// Set the age.
    pub fn with_age(mut self, age: Age) -> Self {
        self.fields.insert(AGE_FIELD.to_owned(), age.to_json());
        self
    }

    /// The stored name, if it is text.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// The stored age, if it is a finite number.
    pub fn age(&self) -> Option<Age> {
        self.fields
            .get(AGE_FIELD)
            .and_then(Value::as_f64)
            .and_then(|value| Age::new(value).ok())
    }

    /// Whether the document carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overwrite every field present in `patch`, leaving the others intact.
    pub fn merge(&mut self, patch: &Self) {
        for (key, value) in &patch.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// The document as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Attach an identifier, producing the resource representation.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name().map(str::to_owned),
            age: self.age(),
        }
    }
}

fn coerce_name(raw: &Value) -> Result<Value, StudentCoercionError> {
    match raw {
        Value::Null | Value::String(_) => Ok(raw.clone()),
        Value::Number(number) => Ok(Value::String(number.to_string())),
        Value::Bool(flag) => Ok(Value::String(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err(cast_error(NAME_FIELD, "string", raw)),
    }
}

fn coerce_age(raw: &Value) -> Result<Value, StudentCoercionError> {
    match raw {
        Value::Null | Value::Number(_) => Ok(raw.clone()),
        Value::Bool(flag) => Ok(Value::from(u8::from(*flag))),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(Value::Null);
            }
            parse_numeric_text(trimmed)
                .and_then(|value| Age::new(value).ok())
                .map(Age::to_json)
                .ok_or_else(|| cast_error(AGE_FIELD, "number", raw))
        }
        Value::Array(_) | Value::Object(_) => Err(cast_error(AGE_FIELD, "number", raw)),
    }
}

/// Parse numeric text the way loosely typed clients write it: decimal with
/// optional sign and exponent, or unsigned `0x`/`0o`/`0b` integers.
///
/// Spelled-out infinities and NaN are not numbers here; no age can hold them.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let prefixed = text.get(..2).zip(text.get(2..));
    if let Some((prefix, digits)) = prefixed {
        let radix = match prefix {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix_digits(digits, radix);
        }
    }

    let decimal_chars = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if !text.chars().all(decimal_chars) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

fn cast_error(field: &'static str, expected: &'static str, raw: &Value) -> StudentCoercionError {
    StudentCoercionError::Cast {
        field,
        expected,
        value: raw.to_string(),
        found: json_type_name(raw),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A stored student record as exposed by the API.
///
/// The identifier is serialised under `_id`; absent or cleared fields are
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    id: StudentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<Age>,
}

impl Student {
    /// Assemble a student from its parts.
    pub fn new(id: StudentId, name: Option<String>, age: Option<Age>) -> Self {
        Self { id, name, age }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &StudentId {
        &self.id
    }

    /// Name, when set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Age, when set.
    pub fn age(&self) -> Option<Age> {
        self.age
    }
}
