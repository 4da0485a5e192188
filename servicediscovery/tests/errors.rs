/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};
use bytes::Bytes;
use servicediscovery::error::{
    CreateHttpNamespaceError, DeleteServiceError, DiscoverInstancesError, DuplicateRequest,
    GetInstanceError, GetNamespaceError, NamespaceAlreadyExists, RegisterInstanceError, RequestId,
    TooManyTagsException, UpdateServiceError,
};
use servicediscovery::operation::{
    CreateHttpNamespace, DeleteService, DiscoverInstances, GetInstance, GetNamespace,
    RegisterInstance, UpdateService,
};
use servicediscovery::response::ParseStrictResponse;
use std::error::Error;

fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> http::Response<Bytes> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Bytes::from_static(body.as_bytes())).unwrap()
}

#[test]
fn namespace_already_exists_exposes_namespace_id() {
    let mut err = NamespaceAlreadyExists::new("namespace exists");
    err.set_namespace_id(Some("ns-123".to_string()));
    assert_eq!(err.namespace_id(), Some("ns-123"));
    assert_eq!(err.message(), Some("namespace exists"));
    assert_eq!(err.creator_request_id(), None);
    assert_eq!(ProvideErrorMetadata::code(&err), Some("NamespaceAlreadyExists"));
    assert_eq!(err.to_string(), "NamespaceAlreadyExists: namespace exists");
}

#[test]
fn set_message_updates_the_metadata() {
    let resp = response(
        400,
        &[("x-amzn-requestid", "req-11")],
        r#"{"__type": "NamespaceAlreadyExists", "Message": "from the service"}"#,
    );
    let mut err = match CreateHttpNamespace::new().parse(&resp).unwrap_err() {
        CreateHttpNamespaceError::NamespaceAlreadyExists(inner) => inner,
        other => panic!("unexpected error: {:?}", other),
    };
    err.set_message(Some("rewritten".to_string()));
    assert_eq!(err.message(), Some("rewritten"));
    assert_eq!(ProvideErrorMetadata::message(&err), Some("rewritten"));
    assert_eq!(ProvideErrorMetadata::code(&err), Some("NamespaceAlreadyExists"));
    assert_eq!(err.request_id(), Some("req-11"));

    err.set_message(None);
    assert_eq!(err.message(), None);
    assert_eq!(ProvideErrorMetadata::message(&err), None);
    assert_eq!(err.to_string(), "NamespaceAlreadyExists");
}

#[test]
fn exception_builders() {
    let err = TooManyTagsException::builder()
        .message("too many tags")
        .resource_name("arn:aws:servicediscovery:us-east-1:123456789012:service/srv-1")
        .build();
    assert_eq!(
        err.resource_name(),
        Some("arn:aws:servicediscovery:us-east-1:123456789012:service/srv-1")
    );
    assert_eq!(ProvideErrorMetadata::message(&err), Some("too many tags"));

    let err = DuplicateRequest::builder().build();
    assert_eq!(err.to_string(), "DuplicateRequest");
    assert_eq!(err.duplicate_operation_id(), None);
}

#[test]
fn typed_fault_from_type_member() {
    let resp = response(
        400,
        &[("x-amzn-requestid", "0b3f5a9e-7c1d-4a2b-8e6f-9d0c1b2a3e4f")],
        r#"{"__type": "com.amazonaws.servicediscovery#NamespaceAlreadyExists",
            "Message": "Namespace already exists",
            "CreatorRequestId": "req-9",
            "NamespaceId": "ns-123"}"#,
    );
    let err = CreateHttpNamespace::new().parse(&resp).unwrap_err();
    assert_eq!(err.request_id(), Some("0b3f5a9e-7c1d-4a2b-8e6f-9d0c1b2a3e4f"));
    assert_eq!(ProvideErrorMetadata::code(&err), Some("NamespaceAlreadyExists"));
    match err {
        CreateHttpNamespaceError::NamespaceAlreadyExists(inner) => {
            assert_eq!(inner.namespace_id(), Some("ns-123"));
            assert_eq!(inner.creator_request_id(), Some("req-9"));
            assert_eq!(inner.message(), Some("Namespace already exists"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn typed_fault_from_header() {
    let resp = response(
        400,
        &[("x-amzn-errortype", "DuplicateRequest:http://internal.amazon.com/coral/")],
        r#"{"message": "already in progress", "DuplicateOperationId": "op-7"}"#,
    );
    let err = RegisterInstance::new().parse(&resp).unwrap_err();
    assert!(err.is_duplicate_request());
    assert!(!err.is_service_not_found());
    assert_eq!(err.to_string(), "DuplicateRequest: already in progress");
    assert!(err.source().is_some());
    if let RegisterInstanceError::DuplicateRequest(inner) = &err {
        assert_eq!(inner.duplicate_operation_id(), Some("op-7"));
    } else {
        panic!("expected DuplicateRequest, got {:?}", err);
    }
}

#[test]
fn message_falls_back_to_metadata() {
    let resp = response(
        404,
        &[("x-amzn-errortype", "InstanceNotFound")],
        r#"{"errorMessage": "no instance i-1"}"#,
    );
    match GetInstance::new().parse(&resp).unwrap_err() {
        GetInstanceError::InstanceNotFound(inner) => {
            assert_eq!(inner.message(), Some("no instance i-1"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn fault_not_modeled_for_the_operation_is_unhandled() {
    // DeleteService does not document DuplicateRequest
    let resp = response(
        400,
        &[],
        r#"{"__type": "DuplicateRequest", "Message": "dup"}"#,
    );
    let err = DeleteService::new().parse(&resp).unwrap_err();
    assert!(matches!(err, DeleteServiceError::Unhandled(_)));
    assert_eq!(ProvideErrorMetadata::code(&err), Some("DuplicateRequest"));
    assert_eq!(ProvideErrorMetadata::message(&err), Some("dup"));
    assert_eq!(err.to_string(), "unhandled error (DuplicateRequest)");
}

#[test]
fn unknown_code_is_unhandled() {
    let resp = response(
        500,
        &[("x-amzn-requestid", "req-500")],
        r#"{"__type": "InternalFailure", "message": "boom"}"#,
    );
    let err = UpdateService::new().parse(&resp).unwrap_err();
    match &err {
        UpdateServiceError::Unhandled(inner) => {
            assert_eq!(inner.source().unwrap().to_string(), "Error [InternalFailure]: boom");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.request_id(), Some("req-500"));
    assert_eq!(err.retryable_error_kind(), None);
}

#[test]
fn malformed_modeled_body_is_unhandled() {
    let resp = response(
        400,
        &[("x-amzn-errortype", "ServiceNotFound")],
        r#"{"Message": 17}"#,
    );
    let err = GetInstance::new().parse(&resp).unwrap_err();
    assert!(matches!(err, GetInstanceError::Unhandled(_)));
    assert_eq!(ProvideErrorMetadata::code(&err), Some("ServiceNotFound"));
}

#[test]
fn non_json_error_body_keeps_code_and_request_id() {
    let resp = response(
        404,
        &[
            ("x-amzn-errortype", "InstanceNotFound"),
            ("x-amzn-requestid", "req-42"),
        ],
        "<html>not found</html>",
    );
    let err = GetInstance::new().parse(&resp).unwrap_err();
    assert!(matches!(err, GetInstanceError::Unhandled(_)), "{:?}", err);
    assert_eq!(ProvideErrorMetadata::code(&err), Some("InstanceNotFound"));
    assert_eq!(err.request_id(), Some("req-42"));
    assert_eq!(err.to_string(), "unhandled error (InstanceNotFound)");
    let unhandled = err.source().unwrap();
    assert!(unhandled.source().is_some());
}

#[test]
fn unparseable_success_body_keeps_request_id() {
    let resp = response(
        200,
        &[("x-amzn-requestid", "req-43")],
        r#"{"Namespace": {"Type": "DNS_FUTURE"}}"#,
    );
    let err = GetNamespace::new().parse(&resp).unwrap_err();
    assert!(matches!(err, GetNamespaceError::Unhandled(_)), "{:?}", err);
    assert_eq!(err.request_id(), Some("req-43"));
    assert_eq!(ProvideErrorMetadata::code(&err), None);
    assert_eq!(err.to_string(), "unhandled error");
}

#[test]
fn request_limit_exceeded_is_throttling() {
    let resp = response(
        400,
        &[],
        r#"{"__type": "RequestLimitExceeded", "Message": "slow down"}"#,
    );
    let err = DiscoverInstances::new().parse(&resp).unwrap_err();
    assert!(err.is_request_limit_exceeded());
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
    assert_eq!(ProvideErrorKind::code(&err), Some("RequestLimitExceeded"));

    let err = DiscoverInstancesError::generic(
        aws_smithy_types::error::metadata::ErrorMetadata::builder()
            .code("ServiceUnavailable")
            .build(),
    );
    assert_eq!(err.retryable_error_kind(), None);
}

#[test]
fn unhandled_wraps_any_error() {
    let err = DeleteServiceError::unhandled("connection reset");
    assert_eq!(err.to_string(), "unhandled error");
    let unhandled = err.source().unwrap();
    assert_eq!(unhandled.source().unwrap().to_string(), "connection reset");
    assert_eq!(err.request_id(), None);
}
