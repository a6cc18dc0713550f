use crate::{Error, ErrorKind, RollResult};


/// A caller asking for a roll: `{ "notation": "2d6+2", "seed": 42 }`.
///
/// `seed` may be left out or `null` for a non reproducible roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollRequest {
    /// Dice notation to parse.
    pub notation: String,
    /// Seed for a reproducible roll.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u64>
}

impl RollRequest {
    /// Builds a request.
    pub fn new<S: Into<String>>(notation: S, seed: Option<u64>) -> Self {
        Self { notation: notation.into(), seed }
    }

    /// Parses the notation and rolls it once.
    ///
    /// # Errors
    /// Returns the parse error unchanged, see [`crate::parse`].
    ///
    /// # Examples
    /// ```
    /// use dice_roller::RollRequest;
    ///
    /// let result = RollRequest::new("3d6+2", Some(42)).handle().unwrap();
    /// assert_eq!(result.notation(), "3d6+2");
    /// ```
    pub fn handle(&self) -> Result<RollResult, Error> {
        crate::roll(&self.notation, self.seed)
    }

    /// Like [`RollRequest::handle`] but folds errors into a [`Response`].
    pub fn respond(&self) -> Response {
        match self.handle() {
            Ok(result) => Response::Rolled(result),
            Err(err) => Response::Failed(err.into())
        }
    }
}


/// The error object sent back in place of a [`RollResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorResponse {
    /// `FormatError`, `RangeError` or `OperatorError`.
    pub kind: ErrorKind,
    /// Human readable description.
    pub message: String
}

impl From<Error> for ErrorResponse {
    fn from(err: Error) -> Self {
        Self { kind: err.kind(), message: err.to_string() }
    }
}


/// Either outcome of a [`RollRequest`], serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Response {
    /// The roll succeeded.
    Rolled(RollResult),
    /// The notation was rejected.
    Failed(ErrorResponse)
}

impl Response {
    /// `true` for [`Response::Rolled`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Rolled(_))
    }
}


#[cfg(test)]
mod test {
    use super::*;


    #[test]
    fn test_handle_is_reproducible() {
        let request = RollRequest::new("36d12-10", Some(2024));
        assert_eq!(request.handle().unwrap(), request.handle().unwrap());
    }

    #[test]
    fn test_respond_with_error() {
        let response = RollRequest::new("d1", None).respond();

        match response {
            Response::Failed(err) => {
                assert_eq!(err.kind, ErrorKind::RangeError);
                assert_eq!(err.message, "Invalid count of sides '1' must be at least 2");
            },
            other => panic!("unexpected response {other:?}")
        }
    }

    #[cfg(feature = "serde")]
    mod serde_shape {
        use super::super::*;
        use serde_json::json;


        #[test]
        fn test_request_seed_is_optional() {
            let request: RollRequest = serde_json::from_value(json!({ "notation": "d20" })).unwrap();
            assert_eq!(request, RollRequest::new("d20", None));

            let request: RollRequest = serde_json::from_value(json!({ "notation": "d20", "seed": null })).unwrap();
            assert_eq!(request.seed, None);

            let request: RollRequest = serde_json::from_value(json!({ "notation": "2d6", "seed": 7 })).unwrap();
            assert_eq!(request.seed, Some(7));
        }

        #[test]
        fn test_result_shape() {
            let response = RollRequest::new("3D6+2", Some(9)).respond();
            assert!(response.is_ok());

            let value = serde_json::to_value(&response).unwrap();
            let object = value.as_object().unwrap();

            let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, vec!["explanation", "notation", "rawTotal", "result", "rollResults"]);

            assert_eq!(value["notation"], "3d6+2");
            assert_eq!(value["explanation"], "Roll 3 6 sided dice, add 2 to the result.");

            let rolls: Vec<i64> = value["rollResults"].as_array().unwrap()
                .iter()
                .map(|v| v.as_i64().unwrap())
                .collect();
            let raw_total: i64 = rolls.iter().sum();

            assert_eq!(rolls.len(), 3);
            assert_eq!(value["rawTotal"], raw_total);
            assert_eq!(value["result"], raw_total + 2);
        }

        #[test]
        fn test_error_shape() {
            let value = serde_json::to_value(RollRequest::new("xyz", None).respond()).unwrap();

            assert_eq!(value["kind"], "FormatError");
            assert!(value["message"].as_str().unwrap().contains("'2d12+2'"));
            assert_eq!(value.as_object().map(|o| o.len()), Some(2));
        }
    }
}
