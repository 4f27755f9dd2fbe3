use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value extracted from a configuration script token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Truncating integer coercion. Strings must spell an integer.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(x) if x.is_finite() => Some(x.trunc() as i64),
            Value::Float(_) => None,
            Value::Str(s) => s.trim().parse().ok(),
        }
    }

    pub fn checked_add(&self, rhs: &Value) -> Option<Value> {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }

    pub fn checked_sub(&self, rhs: &Value) -> Option<Value> {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }

    pub fn checked_mul(&self, rhs: &Value) -> Option<Value> {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }

    // Int op Int stays integral; any float operand promotes the result.
    fn combine(
        &self,
        rhs: &Value,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Option<Value> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => int_op(*a, *b).map(Value::Int),
            _ => {
                let result = float_op(self.as_f64()?, rhs.as_f64()?);
                result.is_finite().then_some(Value::Float(result))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

/// Errors raised at the capture boundary. Parsing and derivation never fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("datagram truncated: {0} bytes, header needs 10")]
    TruncatedHeader(usize),
    #[error("missing capture parameter: {0}")]
    MissingParameter(&'static str),
    #[error("invalid capture parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("frame source failure: {0}")]
    Source(String),
}

pub type CaptureResult<T> = Result<T, CaptureError>;
