//! Valor de columna tal como llegó en el JSON de una actualización
//!
//! Las actualizaciones no validan tipos: el valor se envía a MySQL con el
//! tipo que trae y es la base de datos la que lo acepta o lo rechaza.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Arreglos u objetos; se envían como su texto JSON
    Json(serde_json::Value),
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Json(value) => write!(f, "{}", value),
        }
    }
}
