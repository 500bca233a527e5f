//! Utilidades de validación
//!
//! Un campo obligatorio cuenta como presente solo si trae un valor no vacío
//! (un texto vacío, `null` o un año `0` equivalen a no enviarlo).

use serde::{de, Deserialize, Deserializer};
use tracing::debug;
use validator::Validate;

use crate::utils::errors::{AppError, AppResult};

/// Validar una petición; cualquier fallo se reporta con `message`
pub fn validate_required<T: Validate>(request: &T, message: &str) -> AppResult<()> {
    request.validate().map_err(|errors| {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        debug!("Campos faltantes o vacíos: {:?}", fields);
        AppError::Validation(message.to_string())
    })
}

/// Deserializar un año que puede llegar como número (`2019`) o como texto (`"2019"`).
/// `0` y el texto vacío cuentan como año no enviado; los negativos se aceptan.
pub fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Number(i64),
        Text(String),
    }

    let year = match Option::<YearValue>::deserialize(deserializer)? {
        None => None,
        Some(YearValue::Number(n)) => Some(
            i32::try_from(n).map_err(|_| de::Error::custom(format!("año fuera de rango: {}", n)))?,
        ),
        Some(YearValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(
                    trimmed
                        .parse::<i32>()
                        .map_err(|_| de::Error::custom(format!("año inválido: '{}'", text)))?,
                )
            }
        }
    };

    Ok(year.filter(|&n| n != 0))
}
