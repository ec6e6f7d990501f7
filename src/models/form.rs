//! Form field descriptions and request lifecycle state.

use crate::core::error::InputError;

/// A numeric form field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericField {
    /// Key used in the request body.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Unit shown next to the input (empty when unitless).
    pub unit: &'static str,
    /// Inclusive bounds, if the value is constrained.
    pub range: Option<(f64, f64)>,
    /// Whether negative values are rejected.
    pub non_negative: bool,
}

impl NumericField {
    /// Parse raw input text for this field.
    pub fn parse(&self, raw: &str) -> Result<f64, InputError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(InputError::Missing { field: self.key });
        }

        let value: f64 = raw.parse().map_err(|_| InputError::NotANumber {
            field: self.key,
            value: raw.to_string(),
        })?;
        if !value.is_finite() {
            return Err(InputError::NotANumber {
                field: self.key,
                value: raw.to_string(),
            });
        }

        if let Some((min, max)) = self.range {
            if value < min || value > max {
                return Err(InputError::OutOfRange {
                    field: self.key,
                    min,
                    max,
                });
            }
        } else if self.non_negative && value < 0.0 {
            return Err(InputError::Negative { field: self.key });
        }

        Ok(value)
    }
}

/// Parse a fixed-size set of raw inputs against their field descriptions.
pub fn parse_fields<const N: usize>(
    fields: &[NumericField; N],
    inputs: &[String],
) -> Result<[f64; N], InputError> {
    if inputs.len() != N {
        return Err(InputError::FieldCount {
            expected: N,
            got: inputs.len(),
        });
    }

    let mut values = [0.0; N];
    for ((slot, field), raw) in values.iter_mut().zip(fields).zip(inputs) {
        *slot = field.parse(raw)?;
    }
    Ok(values)
}

/// Lifecycle of a single request issued from a form.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState<T> {
    /// Nothing submitted yet.
    Idle,
    /// Request in flight.
    Pending,
    /// Request succeeded.
    Ready(T),
    /// Validation or request failure, with a display message.
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Convert a request outcome into its final state.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTH: NumericField = NumericField {
        key: "depth",
        label: "Depth",
        unit: "cm",
        range: None,
        non_negative: true,
    };

    const ACIDITY: NumericField = NumericField {
        key: "pH",
        label: "pH",
        unit: "",
        range: Some((0.0, 14.0)),
        non_negative: true,
    };

    const OFFSET: NumericField = NumericField {
        key: "offset",
        label: "Offset",
        unit: "",
        range: None,
        non_negative: false,
    };

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(DEPTH.parse("  12.5 "), Ok(12.5));
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(DEPTH.parse("   "), Err(InputError::Missing { field: "depth" }));
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_finite() {
        assert!(matches!(
            DEPTH.parse("12cm"),
            Err(InputError::NotANumber { .. })
        ));
        assert!(matches!(DEPTH.parse("NaN"), Err(InputError::NotANumber { .. })));
        assert!(matches!(DEPTH.parse("inf"), Err(InputError::NotANumber { .. })));
    }

    #[test]
    fn test_parse_sign_and_range_rules() {
        assert_eq!(DEPTH.parse("-1"), Err(InputError::Negative { field: "depth" }));
        assert_eq!(OFFSET.parse("-1"), Ok(-1.0));
        assert_eq!(ACIDITY.parse("14"), Ok(14.0));
        assert!(matches!(
            ACIDITY.parse("14.1"),
            Err(InputError::OutOfRange { field: "pH", .. })
        ));
    }

    #[test]
    fn test_parse_fields_checks_count_first() {
        let inputs = vec!["1".to_string()];
        assert_eq!(
            parse_fields(&[DEPTH, OFFSET], &inputs),
            Err(InputError::FieldCount {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_parse_fields_reports_first_bad_field() {
        let inputs = vec!["".to_string(), "x".to_string()];
        assert_eq!(
            parse_fields(&[DEPTH, OFFSET], &inputs),
            Err(InputError::Missing { field: "depth" })
        );

        let inputs = vec!["3".to_string(), "-2".to_string()];
        assert_eq!(parse_fields(&[DEPTH, OFFSET], &inputs), Ok([3.0, -2.0]));
    }

    #[test]
    fn test_request_state_from_result() {
        let ok: RequestState<u8> = RequestState::from_result(Ok::<_, InputError>(7));
        assert_eq!(ok, RequestState::Ready(7));

        let failed: RequestState<u8> =
            RequestState::from_result(Err(InputError::Missing { field: "N" }));
        assert_eq!(failed, RequestState::Failed("N is required".to_string()));
        assert!(!failed.is_pending());
        assert!(RequestState::<u8>::Pending.is_pending());
    }
}
