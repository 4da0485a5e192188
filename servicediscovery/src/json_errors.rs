/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::metadata::{Builder as ErrorMetadataBuilder, ErrorMetadata};
use http::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Key of the request ID in [`ErrorMetadata`] extras.
pub(crate) const AWS_REQUEST_ID: &str = "aws_request_id";

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// A modeled service fault deserialized from an error body.
pub(crate) trait ModeledError {
    /// Attaches the metadata parsed from the response, filling the message when the body had none.
    fn attach_meta(&mut self, meta: ErrorMetadata);
}

/// Reduces `prefix#Name:uri` (any part optional) to `Name`.
fn sanitize_error_code(error_code: &str) -> &str {
    let code = error_code
        .split_once(':')
        .map_or(error_code, |(code, _uri)| code);
    code.split_once('#').map_or(code, |(_namespace, name)| name)
}

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

fn body_str<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| body.get(key).and_then(Value::as_str))
}

/// Extracts code, message and request ID from an awsJson1.1 error response.
///
/// The code comes from the `x-amzn-errortype` header when present, otherwise from the body's
/// `code` or `__type` member. A body that is not JSON still yields the header-derived fields.
pub(crate) fn parse_error_metadata(headers: &HeaderMap, body: &[u8]) -> ErrorMetadataBuilder {
    let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let mut builder = ErrorMetadata::builder();

    let header_code = headers
        .get(ERROR_TYPE_HEADER)
        .and_then(|value| value.to_str().ok());
    if let Some(code) = header_code.or_else(|| body_str(&body, &["code", "__type"])) {
        builder = builder.code(sanitize_error_code(code));
    }
    if let Some(message) = body_str(&body, &["message", "Message", "errorMessage"]) {
        builder = builder.message(message);
    }
    if let Some(request_id) = request_id(headers) {
        builder = builder.custom(AWS_REQUEST_ID, request_id);
    }
    builder
}

/// Metadata for a successful response: only the request ID.
pub(crate) fn success_metadata(headers: &HeaderMap) -> ErrorMetadata {
    let mut builder = ErrorMetadata::builder();
    if let Some(request_id) = request_id(headers) {
        builder = builder.custom(AWS_REQUEST_ID, request_id);
    }
    builder.build()
}

/// Copies `meta` with its message replaced, keeping the code and request ID.
pub(crate) fn replace_message(meta: &ErrorMetadata, message: Option<&str>) -> ErrorMetadata {
    let mut builder = ErrorMetadata::builder();
    if let Some(code) = meta.code() {
        builder = builder.code(code);
    }
    if let Some(message) = message {
        builder = builder.message(message);
    }
    if let Some(request_id) = meta.extra(AWS_REQUEST_ID) {
        builder = builder.custom(AWS_REQUEST_ID, request_id);
    }
    builder.build()
}

/// Deserializes a modeled fault from an error body and attaches a copy of `meta` to it.
pub(crate) fn parse_modeled<T>(body: &[u8], meta: &ErrorMetadata) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + ModeledError,
{
    let mut err: T = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")?
    } else {
        serde_json::from_slice(body)?
    };
    err.attach_meta(meta.clone());
    Ok(err)
}

#[cfg(test)]
mod test {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn error_type_sanitization() {
        let full = "com.amazonaws.servicediscovery#ServiceAlreadyExists:http://internal.amazon.com/coral/com.amazon.coral.validate/";
        assert_eq!(sanitize_error_code(full), "ServiceAlreadyExists");
        assert_eq!(sanitize_error_code("OperationNotFound"), "OperationNotFound");
        assert_eq!(sanitize_error_code(""), "");
        assert_eq!(
            sanitize_error_code("com.amazonaws.servicediscovery#NamespaceNotFound"),
            "NamespaceNotFound"
        );
        assert_eq!(sanitize_error_code("InvalidInput:"), "InvalidInput");
    }

    #[test]
    fn code_from_type_member() {
        let body = br#"{"__type": "com.amazonaws.servicediscovery#ServiceNotFound", "Message": "no such service"}"#;
        let meta = parse_error_metadata(&HeaderMap::new(), body).build();
        assert_eq!(meta.code(), Some("ServiceNotFound"));
        assert_eq!(meta.message(), Some("no such service"));
        assert_eq!(meta.extra(AWS_REQUEST_ID), None);
    }

    #[test]
    fn header_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("InstanceNotFound:http://internal.amazon.com/"),
        );
        headers.insert(
            "x-amzn-requestid",
            HeaderValue::from_static("b9c1a3f4-5e0b-4b0a-9a77-1e8c3f7a2d10"),
        );
        let body = br#"{"code": "ServiceNotFound", "message": "lower case message"}"#;
        let meta = parse_error_metadata(&headers, body).build();
        assert_eq!(meta.code(), Some("InstanceNotFound"));
        assert_eq!(meta.message(), Some("lower case message"));
        assert_eq!(
            meta.extra(AWS_REQUEST_ID),
            Some("b9c1a3f4-5e0b-4b0a-9a77-1e8c3f7a2d10")
        );
    }

    #[test]
    fn unparseable_body() {
        let meta = parse_error_metadata(&HeaderMap::new(), b"<html>bad gateway</html>").build();
        assert_eq!(meta.code(), None);
        assert_eq!(meta.message(), None);
    }

    #[test]
    fn success_metadata_keeps_only_the_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-7"));
        headers.insert("x-amzn-errortype", HeaderValue::from_static("InvalidInput"));
        let meta = success_metadata(&headers);
        assert_eq!(meta.extra(AWS_REQUEST_ID), Some("req-7"));
        assert_eq!(meta.code(), None);
        assert_eq!(success_metadata(&HeaderMap::new()).extra(AWS_REQUEST_ID), None);
    }

    #[test]
    fn replacing_the_message_keeps_code_and_request_id() {
        let meta = ErrorMetadata::builder()
            .code("InvalidInput")
            .message("old")
            .custom(AWS_REQUEST_ID, "req-8")
            .build();
        let replaced = replace_message(&meta, Some("new"));
        assert_eq!(replaced.code(), Some("InvalidInput"));
        assert_eq!(replaced.message(), Some("new"));
        assert_eq!(replaced.extra(AWS_REQUEST_ID), Some("req-8"));
        assert_eq!(replace_message(&meta, None).message(), None);
    }

    #[test]
    fn error_message_member() {
        let body = br#"{"__type": "InvalidInput", "errorMessage": "bad filter"}"#;
        let meta = parse_error_metadata(&HeaderMap::new(), body).build();
        assert_eq!(meta.code(), Some("InvalidInput"));
        assert_eq!(meta.message(), Some("bad filter"));
    }
}
