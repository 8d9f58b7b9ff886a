//! Response classification.
//!
//! [`validate_response`] turns an application-level failure signalled by the
//! API into a typed error, and [`expected_delivery_date`] extracts the date
//! returned by the en-route and getting-ready-for-pickup transitions.
//! Both functions are pure.

use chrono::NaiveDate;

use crate::clients::errors::{
    InvalidRequestError, InvalidRequestType, ResponseError, ZboziApiError,
};
use crate::clients::http_response::ZboziApiResponse;
use crate::error::TypeValidationError;

const KEY_STATUS: &str = "status";
const KEY_MESSAGES: &str = "messages";
const KEY_EXPECTED_DELIVERY_DATE: &str = "expectedDeliveryDate";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks whether a response signals success.
///
/// - 2xx responses are valid regardless of their body.
/// - 4xx responses must carry `status` and `messages`; the `status` is mapped
///   to an [`InvalidRequestType`].
/// - Any other status code is unexpected.
///
/// # Errors
///
/// Returns [`ZboziApiError::InvalidRequest`] for a recognized business-rule
/// violation, [`ZboziApiError::Response`] for malformed or unexpected
/// responses, and [`ZboziApiError::TypeValidation`] when `messages` is not a
/// list of strings.
///
/// # Example
///
/// ```rust
/// use zbozi_api::clients::{validate_response, ZboziApiResponse};
/// use zbozi_api::{InvalidRequestType, ZboziApiError};
/// use serde_json::json;
///
/// assert!(validate_response(&ZboziApiResponse::without_body(204)).is_ok());
///
/// let body = json!({"status": 3, "messages": ["OrderId #45445 not found."]});
/// let response = ZboziApiResponse::new(404, body.as_object().cloned());
/// let error = validate_response(&response).unwrap_err();
/// assert_eq!(error.invalid_request_type(), Some(InvalidRequestType::OrderNotFound));
/// ```
pub fn validate_response(response: &ZboziApiResponse) -> Result<(), ZboziApiError> {
    let code = response.status_code();

    if response.is_success() {
        return Ok(());
    }

    if !response.is_client_error() {
        return Err(ResponseError::UnexpectedStatusCode { code }.into());
    }

    let status = present(response, KEY_STATUS).ok_or(ResponseError::MissingStatus { code })?;
    let messages =
        present(response, KEY_MESSAGES).ok_or(ResponseError::MissingMessages { code })?;

    let kind = status_code(status)
        .and_then(InvalidRequestType::from_code)
        .ok_or_else(|| ResponseError::UnknownStatus {
            code,
            status: display_value(status),
        })?;

    Err(InvalidRequestError::new(kind, string_list(messages)?).into())
}

/// Extracts `expectedDeliveryDate` from a successful response.
///
/// Call this only after [`validate_response`] accepted the response.
///
/// # Errors
///
/// Returns [`ZboziApiError::Response`] if the key is missing or its value is
/// not a `YYYY-MM-DD` date.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use zbozi_api::clients::{expected_delivery_date, ZboziApiResponse};
/// use serde_json::json;
///
/// let body = json!({"expectedDeliveryDate": "2012-01-01"});
/// let response = ZboziApiResponse::new(200, body.as_object().cloned());
///
/// assert_eq!(
///     expected_delivery_date(&response).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 1, 1).unwrap()
/// );
/// ```
pub fn expected_delivery_date(response: &ZboziApiResponse) -> Result<NaiveDate, ZboziApiError> {
    let value = present(response, KEY_EXPECTED_DELIVERY_DATE)
        .ok_or(ResponseError::MissingExpectedDeliveryDate)?;

    value
        .as_str()
        .and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())
        .ok_or_else(|| {
            ResponseError::InvalidExpectedDeliveryDate {
                value: display_value(value),
            }
            .into()
        })
}

/// Returns a body value, treating `null` the same as a missing key.
fn present<'a>(response: &'a ZboziApiResponse, key: &str) -> Option<&'a serde_json::Value> {
    response.get(key).filter(|value| !value.is_null())
}

/// Reads a `status` value as an integer code.
///
/// Whole-number floats (`1.0`) and numeric strings (`"1"`) are accepted as
/// well; anything else yields `None`.
#[allow(clippy::cast_possible_truncation)]
fn status_code(value: &serde_json::Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }
    let number = value
        .as_f64()
        .or_else(|| value.as_str().and_then(|text| text.trim().parse::<f64>().ok()))?;
    (number.fract() == 0.0).then(|| number as i64)
}

/// Renders a JSON value for an error message, without quotes around strings.
fn display_value(value: &serde_json::Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

/// Converts a decoded `messages` value into a list of strings.
fn string_list(value: &serde_json::Value) -> Result<Vec<String>, TypeValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| TypeValidationError::unexpected_json("String[]", value))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| TypeValidationError::unexpected_json("String", item))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: serde_json::Value) -> ZboziApiResponse {
        ZboziApiResponse::new(code, body.as_object().cloned())
    }

    fn client_error_response(code: u16, status: i64, messages: &[&str]) -> ZboziApiResponse {
        response(code, json!({"status": status, "messages": messages}))
    }

    fn expect_invalid_request(response: &ZboziApiResponse) -> InvalidRequestError {
        match validate_response(response) {
            Err(ZboziApiError::InvalidRequest(error)) => error,
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_any_2xx_response_is_valid() {
        assert!(validate_response(&ZboziApiResponse::without_body(200)).is_ok());
        assert!(validate_response(&ZboziApiResponse::without_body(204)).is_ok());
        assert!(validate_response(&response(200, json!({"status": 1}))).is_ok());
        assert!(validate_response(&response(299, json!({"anything": [1, 2]}))).is_ok());
    }

    #[test]
    fn test_bad_request_joins_messages() {
        let error = expect_invalid_request(&client_error_response(
            400,
            1,
            &["Row 1, missing amount key.", "Row 1, missing slevomatId key."],
        ));

        assert_eq!(error.kind(), InvalidRequestType::BadRequest);
        assert_eq!(
            error.to_string(),
            "Row 1, missing amount key. | Row 1, missing slevomatId key."
        );
    }

    #[test]
    fn test_each_status_maps_to_its_variant() {
        let cases = [
            (400, 1, InvalidRequestType::BadRequest),
            (403, 2, InvalidRequestType::InvalidCredentials),
            (404, 3, InvalidRequestType::OrderNotFound),
            (404, 4, InvalidRequestType::OrderItemNotFound),
            (422, 5, InvalidRequestType::InvalidStatusChange),
            (422, 6, InvalidRequestType::InvalidCancel),
            (422, 7, InvalidRequestType::OtherError),
            (422, 8, InvalidRequestType::OrderNotExported),
        ];

        for (code, status, expected) in cases {
            let error = expect_invalid_request(&client_error_response(code, status, &["some error"]));
            assert_eq!(error.kind(), expected, "status {status}");
            assert_eq!(error.messages(), ["some error"]);
        }
    }

    #[test]
    fn test_unknown_status() {
        let error = validate_response(&client_error_response(422, 999, &["x"])).unwrap_err();
        assert!(matches!(
            error,
            ZboziApiError::Response(ResponseError::UnknownStatus { code: 422, .. })
        ));
        assert!(error.to_string().contains("unknown status 999"));

        let error = validate_response(&client_error_response(422, 700_000, &["x"])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Slevomat API 422 response contains unknown status 700000."
        );
    }

    #[test]
    fn test_non_integer_status_is_unknown() {
        let error =
            validate_response(&response(400, json!({"status": "bad", "messages": []}))).unwrap_err();
        assert!(error.to_string().contains("unknown status bad"));
    }

    #[test]
    fn test_whole_number_status_maps_to_its_variant() {
        for status in [json!(1.0), json!("1"), json!(" 1 ")] {
            let error =
                validate_response(&response(400, json!({"status": status, "messages": ["a"]})))
                    .unwrap_err();
            assert_eq!(
                error.invalid_request_type(),
                Some(InvalidRequestType::BadRequest),
                "status {status}"
            );
        }
    }

    #[test]
    fn test_fractional_status_is_unknown() {
        let error =
            validate_response(&response(400, json!({"status": 1.5, "messages": ["a"]}))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Slevomat API 400 response contains unknown status 1.5."
        );
    }

    #[test]
    fn test_missing_status() {
        let error =
            validate_response(&response(400, json!({"messages": ["someError"]}))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Slevomat API invalid 400 response: missing status."
        );
    }

    #[test]
    fn test_null_status_counts_as_missing() {
        let error = validate_response(&response(400, json!({"status": null, "messages": []})))
            .unwrap_err();
        assert!(matches!(
            error,
            ZboziApiError::Response(ResponseError::MissingStatus { code: 400 })
        ));
    }

    #[test]
    fn test_missing_messages() {
        let error = validate_response(&response(400, json!({"status": 1}))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Slevomat API invalid 400 response: missing messages."
        );
    }

    #[test]
    fn test_4xx_without_body_is_missing_status() {
        let error = validate_response(&ZboziApiResponse::without_body(404)).unwrap_err();
        assert!(matches!(
            error,
            ZboziApiError::Response(ResponseError::MissingStatus { code: 404 })
        ));
    }

    #[test]
    fn test_messages_must_be_list_of_strings() {
        let error =
            validate_response(&response(400, json!({"status": 1, "messages": "oops"}))).unwrap_err();
        assert!(matches!(
            error,
            ZboziApiError::TypeValidation(TypeValidationError::UnexpectedType {
                expected: "String[]",
                given: "string"
            })
        ));

        let error =
            validate_response(&response(400, json!({"status": 1, "messages": ["ok", 5]}))).unwrap_err();
        assert!(matches!(error, ZboziApiError::TypeValidation(_)));
    }

    #[test]
    fn test_unexpected_http_status() {
        for code in [100, 300, 301, 500, 503] {
            let error = validate_response(&ZboziApiResponse::without_body(code)).unwrap_err();
            assert_eq!(
                error.to_string(),
                format!("Slevomat API responded with unexpected HTTP status code: {code}.")
            );
        }
    }

    #[test]
    fn test_expected_delivery_date_is_parsed() {
        let date =
            expected_delivery_date(&response(200, json!({"expectedDeliveryDate": "2012-01-01"})))
                .unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
    }

    #[test]
    fn test_expected_delivery_date_missing() {
        let error = expected_delivery_date(&response(200, json!({}))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Slevomat API response doesn't contain expectedDeliveryDate."
        );

        let error = expected_delivery_date(&ZboziApiResponse::without_body(200)).unwrap_err();
        assert!(error.to_string().contains("doesn't contain"));
    }

    #[test]
    fn test_expected_delivery_date_invalid() {
        let error =
            expected_delivery_date(&response(200, json!({"expectedDeliveryDate": "nonsense"})))
                .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Slevomat API invalid response: invalid expectedDeliveryDate nonsense."
        );

        for invalid in [json!("2012-02-30"), json!("01.01.2012"), json!(20_120_101)] {
            let error =
                expected_delivery_date(&response(200, json!({"expectedDeliveryDate": invalid})))
                    .unwrap_err();
            assert!(matches!(
                error,
                ZboziApiError::Response(ResponseError::InvalidExpectedDeliveryDate { .. })
            ));
        }
    }
}
