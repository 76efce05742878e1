//! Request validation for the create-association payload.

use crate::error::AppError;
use crate::models::{NewRestaurantPizza, MAX_PRICE, MIN_PRICE};
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 3] = ["price", "pizza_id", "restaurant_id"];

pub struct RequestValidator;

impl RequestValidator {
    /// Checks run in order and stop at the first failure: required keys present,
    /// price a whole number within bounds, ids usable as row keys.
    ///
    /// A key holding `null` counts as present. An id that is not an integer can
    /// never match a row, so it is reported as a missing reference.
    pub fn restaurant_pizza(body: &Value) -> Result<NewRestaurantPizza, AppError> {
        let obj = body.as_object().ok_or(AppError::MissingFields)?;
        if !REQUIRED_FIELDS.iter().all(|k| obj.contains_key(*k)) {
            return Err(AppError::MissingFields);
        }

        let price = whole_number(&obj["price"]).ok_or(AppError::Validation)?;
        if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
            return Err(AppError::Validation);
        }

        let pizza_id = whole_number(&obj["pizza_id"]).ok_or(AppError::MissingReference)?;
        let restaurant_id = whole_number(&obj["restaurant_id"]).ok_or(AppError::MissingReference)?;

        Ok(NewRestaurantPizza {
            price,
            pizza_id,
            restaurant_id,
        })
    }
}

/// JSON integers only: `15` passes, `15.0`, `"15"` and `true` do not.
fn whole_number(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) if n.is_i64() => n.as_i64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_payload() {
        let new = RequestValidator::restaurant_pizza(&json!({
            "price": 15, "pizza_id": 2, "restaurant_id": 3
        }))
        .unwrap();
        assert_eq!(
            new,
            NewRestaurantPizza {
                price: 15,
                pizza_id: 2,
                restaurant_id: 3
            }
        );
    }

    #[test]
    fn price_bounds_are_inclusive() {
        for price in [1, 30] {
            let body = json!({ "price": price, "pizza_id": 1, "restaurant_id": 1 });
            assert!(RequestValidator::restaurant_pizza(&body).is_ok(), "price {price}");
        }
        for price in [0, 31, -4] {
            let body = json!({ "price": price, "pizza_id": 1, "restaurant_id": 1 });
            assert!(matches!(
                RequestValidator::restaurant_pizza(&body),
                Err(AppError::Validation)
            ));
        }
    }

    #[test]
    fn price_must_be_an_integer() {
        for price in [json!(15.5), json!(15.0), json!("15"), json!(true), json!(null)] {
            let body = json!({ "price": price, "pizza_id": 1, "restaurant_id": 1 });
            assert!(
                matches!(RequestValidator::restaurant_pizza(&body), Err(AppError::Validation)),
                "price {price}"
            );
        }
    }

    #[test]
    fn missing_keys_are_reported_before_price() {
        let body = json!({ "price": 99, "pizza_id": 1 });
        assert!(matches!(
            RequestValidator::restaurant_pizza(&body),
            Err(AppError::MissingFields)
        ));
        assert!(matches!(
            RequestValidator::restaurant_pizza(&json!([1, 2, 3])),
            Err(AppError::MissingFields)
        ));
    }

    #[test]
    fn non_integer_ids_cannot_reference_rows() {
        let body = json!({ "price": 10, "pizza_id": "one", "restaurant_id": 1 });
        assert!(matches!(
            RequestValidator::restaurant_pizza(&body),
            Err(AppError::MissingReference)
        ));
        let body = json!({ "price": 10, "pizza_id": 1, "restaurant_id": null });
        assert!(matches!(
            RequestValidator::restaurant_pizza(&body),
            Err(AppError::MissingReference)
        ));
    }
}
