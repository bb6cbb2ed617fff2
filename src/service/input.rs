use serde_json::Value;

use super::error::ValidationError;
use crate::item::NewItem;

/// Validate a raw creation body.
///
/// Rules are checked in order and the first failure wins:
/// `name` must be a non-blank string, `category` must be a non-blank
/// string, and `price`, when the key is present, must be a JSON number.
/// A numeric string or an explicit `null` is not a price.
pub fn validate(input: &Value) -> Result<NewItem, ValidationError> {
    let body = input.as_object().ok_or(ValidationError::Body)?;

    let name = non_blank(body.get("name")).ok_or(ValidationError::Name)?;
    let category = non_blank(body.get("category")).ok_or(ValidationError::Category)?;
    let price = match body.get("price") {
        None => None,
        Some(Value::Number(n)) => Some(n.as_f64().ok_or(ValidationError::Price)?),
        Some(_) => return Err(ValidationError::Price),
    };

    Ok(NewItem::new(name, category, price))
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
