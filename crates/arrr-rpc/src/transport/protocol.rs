use crate::error::Error;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    pub(super) params: Vec<serde_json::Value>,
}

/// Version marker sent on every request. pirated, like the other
/// Komodo/Zcash-family daemons, speaks the bitcoind 1.0 dialect.
pub(super) const JSONRPC_VERSION: &str = "1.0";

/// Decode a response body into the `result` value or a structured error.
///
/// The discriminant rules, in order:
/// - `error` and `result` both non-null is malformed and decodes to
///   [`Error::Decode`], as is an object carrying neither key.
/// - `error` non-null wins and becomes [`Error::Rpc`] (or
///   [`Error::Decode`] if the error object has no integer `code` and
///   string `message`).
/// - an explicit `result: null` is a successful null; void wallet calls
///   such as `walletlock` answer exactly that.
pub(super) fn decode_response(body: &str) -> Result<serde_json::Value, Error> {
    let parsed: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("response body is not JSON: {e}")))?;

    let object = match parsed {
        serde_json::Value::Object(object) => object,
        other => {
            return Err(Error::Decode(format!(
                "response body is not a JSON object: {other}"
            )))
        }
    };

    if !object.contains_key("result") && !object.contains_key("error") {
        return Err(Error::Decode(
            "response carries neither result nor error".to_owned(),
        ));
    }

    let result = object.get("result").filter(|v| !v.is_null());
    let error = object.get("error").filter(|v| !v.is_null());

    match (result, error) {
        (Some(_), Some(error)) => Err(Error::Decode(format!(
            "response carries both result and error: {error}"
        ))),
        (_, Some(error)) => Err(parse_jsonrpc_error(error)),
        (result, None) => Ok(result.cloned().unwrap_or(serde_json::Value::Null)),
    }
}

/// Parse a JSON-RPC error value into [`Error::Rpc`].
///
/// The protocol defines errors as `{"code": <int>, "message": <string>}`.
/// Anything else is a malformed response rather than a daemon error.
fn parse_jsonrpc_error(err: &serde_json::Value) -> Error {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => Error::Rpc {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => Error::Decode(format!("non-standard JSON-RPC error: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_result_passthrough() {
        let value = decode_response(r#"{"result": {"blocks": 42}, "error": null, "id": 1}"#)
            .expect("should decode");
        assert_eq!(value, serde_json::json!({"blocks": 42}));
    }

    #[test]
    fn decode_null_result_is_success() {
        let value =
            decode_response(r#"{"result": null, "error": null, "id": 1}"#).expect("should decode");
        assert!(value.is_null());
    }

    #[test]
    fn decode_error_object() {
        let err = decode_response(
            r#"{"result": null, "error": {"code": -14, "message": "wrong passphrase"}, "id": 1}"#,
        )
        .expect_err("must surface daemon error");
        assert!(
            matches!(err, Error::Rpc { code: -14, ref message } if message == "wrong passphrase")
        );
    }

    #[test]
    fn decode_rejects_non_json_body() {
        let err = decode_response("Work queue depth exceeded").expect_err("must reject");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn decode_rejects_non_object_body() {
        let err = decode_response("[1, 2, 3]").expect_err("must reject");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn decode_rejects_missing_discriminant() {
        let err = decode_response(r#"{"id": 1}"#).expect_err("must reject");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn decode_rejects_both_result_and_error() {
        let err = decode_response(
            r#"{"result": 1, "error": {"code": -1, "message": "boom"}, "id": 1}"#,
        )
        .expect_err("must reject");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn decode_rejects_non_standard_error_shape() {
        let err = decode_response(r#"{"result": null, "error": "boom", "id": 1}"#)
            .expect_err("must reject");
        assert!(matches!(err, Error::Decode(ref message) if message.contains("non-standard")));
    }
}
