//! Network fetching utilities with timeout support.
//!
//! Provides async JSON request functions built on the Fetch API, with
//! timeout racing and decoding of prediction service error bodies.

use js_sys::{Array, Promise};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(rejection_message(&e)),
    }
}

/// Readable message for a rejected promise.
///
/// Fetch rejects with a `TypeError` object rather than a string, so the
/// message is read from the `Error` before falling back.
fn rejection_message(reason: &JsValue) -> String {
    reason
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| reason.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Error body returned by the prediction service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode a response body according to its HTTP status.
///
/// Successful responses are parsed as `T`. Failures carrying an
/// `{"error": ...}` body become [`FetchError::Api`]; anything else becomes
/// [`FetchError::HttpError`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) => FetchError::Api {
                status,
                message: error,
            },
            Err(_) => FetchError::HttpError(status),
        });
    }

    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let (status, body) = send("GET", url, None).await?;
    decode_response(status, &body)
}

/// POST a JSON body and parse the JSON response.
pub async fn post_json<B, T>(url: &str, payload: &B) -> Result<T, FetchError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(payload).map_err(|e| FetchError::EncodeFailed(e.to_string()))?;
    let (status, body) = send("POST", url, Some(&body)).await?;
    decode_response(status, &body)
}

/// Issue a request using the Fetch API with timeout.
///
/// Returns the HTTP status and the response text, whatever the status.
/// If the request takes longer than `FETCH_TIMEOUT_MS`, returns
/// `FetchError::Timeout`.
async fn send(method: &str, url: &str, body: Option<&str>) -> Result<(u16, String), FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(body) = body {
        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            let text = text.as_string().ok_or(FetchError::InvalidContent)?;
            Ok((resp.status(), text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherForecast;

    #[test]
    fn test_decode_success() {
        let forecast: WeatherForecast =
            decode_response(200, r#"{"predicted_temperature":18.25}"#).unwrap();
        assert_eq!(forecast.predicted_temperature, 18.25);
    }

    #[test]
    fn test_decode_service_error() {
        let err = decode_response::<WeatherForecast>(
            400,
            r#"{"error":"Invalid input size. Expected a JSON array with exactly 3 values, but got 2 values."}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FetchError::Api {
                status: 400,
                message: "Invalid input size. Expected a JSON array with exactly 3 values, but got 2 values."
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_decode_error_without_body() {
        let err = decode_response::<WeatherForecast>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, FetchError::HttpError(502));
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<WeatherForecast>(200, r#"{"temp":1}"#).unwrap_err();
        assert!(matches!(err, FetchError::JsonParseError(_)));
    }
}
