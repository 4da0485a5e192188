/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by Cloud Map and by this crate.
//!
//! Every fault the service models is a standalone type (`InstanceNotFound`, `DuplicateRequest`,
//! ...). Each operation has an error enum (`GetInstanceError`, ...) holding the faults it
//! can return, plus [`Unhandled`] for anything the model does not describe.

use aws_smithy_types::error::metadata::{ErrorMetadata, ProvideErrorMetadata};
use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::error::Error;
use std::fmt;

/// A string did not match any member of a closed enum.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown enum variant: '{value}'")]
pub struct UnknownVariantError {
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Failure to construct an HTTP request for an operation.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BuildRequestError {
    /// Neither a region nor an endpoint URL was configured.
    #[error("no region or endpoint URL configured")]
    MissingRegion,
    /// The resolved endpoint is not a valid URI.
    #[error("invalid endpoint `{endpoint}`")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why the endpoint was rejected.
        #[source]
        source: http::uri::InvalidUri,
    },
    /// The input could not be serialized to JSON.
    #[error("failed to serialize the request body")]
    Serialization(#[from] serde_json::Error),
    /// The HTTP request could not be assembled.
    #[error("failed to build the HTTP request")]
    Http(#[from] http::Error),
}

/// An error response whose code is not modeled by the operation.
#[derive(Debug)]
struct UnmodeledError {
    code: Option<String>,
    message: Option<String>,
}

impl fmt::Display for UnmodeledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error")?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl Error for UnmodeledError {}

/// An unexpected error: an unknown error code, or a response that could not be parsed.
///
/// Match on the operation error's other variants for modeled faults; inspect this one through
/// [`ProvideErrorMetadata`] and [`Error::source`].
#[derive(Debug)]
pub struct Unhandled {
    source: Box<dyn Error + Send + Sync + 'static>,
    meta: ErrorMetadata,
}

impl Unhandled {
    pub(crate) fn new(source: Box<dyn Error + Send + Sync + 'static>, meta: ErrorMetadata) -> Self {
        Self { source, meta }
    }

    pub(crate) fn from_meta(meta: ErrorMetadata) -> Self {
        let source = UnmodeledError {
            code: meta.code().map(str::to_owned),
            message: meta.message().map(str::to_owned),
        };
        Self {
            source: Box::new(source),
            meta,
        }
    }
}

impl fmt::Display for Unhandled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.meta.code() {
            Some(code) => write!(f, "unhandled error ({})", code),
            None => write!(f, "unhandled error"),
        }
    }
}

impl Error for Unhandled {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl ProvideErrorMetadata for Unhandled {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}

/// Access to the request ID the service returned with an error.
pub trait RequestId {
    /// The `x-amzn-requestid` of the failed request, when the response carried one.
    fn request_id(&self) -> Option<&str>;
}

impl<E: ProvideErrorMetadata> RequestId for E {
    fn request_id(&self) -> Option<&str> {
        self.meta().extra(crate::json_errors::AWS_REQUEST_ID)
    }
}

/// <p>The health check for the instance that's specified by <code>ServiceId</code> and <code>InstanceId</code> isn't a custom health check.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct CustomHealthNotFound {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl CustomHealthNotFound {
    /// Creates a `CustomHealthNotFound` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("CustomHealthNotFound")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`CustomHealthNotFound`](crate::error::CustomHealthNotFound).
    pub fn builder() -> crate::error::custom_health_not_found::Builder {
        crate::error::custom_health_not_found::Builder::default()
    }
}
impl std::fmt::Display for CustomHealthNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustomHealthNotFound")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for CustomHealthNotFound {}
impl ProvideErrorMetadata for CustomHealthNotFound {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for CustomHealthNotFound {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`CustomHealthNotFound`](crate::error::CustomHealthNotFound).
pub mod custom_health_not_found {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`CustomHealthNotFound`](crate::error::CustomHealthNotFound).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`CustomHealthNotFound`](crate::error::CustomHealthNotFound).
        pub fn build(self) -> crate::error::CustomHealthNotFound {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("CustomHealthNotFound");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::CustomHealthNotFound {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The operation is already in progress.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct DuplicateRequest {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    /// <p>The ID of the operation that's already in progress.</p>
    #[serde(rename = "DuplicateOperationId", default)]
    pub(crate) duplicate_operation_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl DuplicateRequest {
    /// Creates a `DuplicateRequest` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("DuplicateRequest")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// <p>The ID of the operation that's already in progress.</p>
    pub fn duplicate_operation_id(&self) -> std::option::Option<&str> {
        self.duplicate_operation_id.as_deref()
    }
    /// <p>The ID of the operation that's already in progress.</p>
    pub fn set_duplicate_operation_id(&mut self, duplicate_operation_id: std::option::Option<std::string::String>) {
        self.duplicate_operation_id = duplicate_operation_id;
    }
    /// Creates a new builder-style object to manufacture [`DuplicateRequest`](crate::error::DuplicateRequest).
    pub fn builder() -> crate::error::duplicate_request::Builder {
        crate::error::duplicate_request::Builder::default()
    }
}
impl std::fmt::Display for DuplicateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DuplicateRequest")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for DuplicateRequest {}
impl ProvideErrorMetadata for DuplicateRequest {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for DuplicateRequest {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`DuplicateRequest`](crate::error::DuplicateRequest).
pub mod duplicate_request {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`DuplicateRequest`](crate::error::DuplicateRequest).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        duplicate_operation_id: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The ID of the operation that's already in progress.</p>
        pub fn duplicate_operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.duplicate_operation_id = Some(input.into());
            self
        }
        /// <p>The ID of the operation that's already in progress.</p>
        pub fn set_duplicate_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.duplicate_operation_id = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`DuplicateRequest`](crate::error::DuplicateRequest).
        pub fn build(self) -> crate::error::DuplicateRequest {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("DuplicateRequest");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::DuplicateRequest {
                message: self.message,
                duplicate_operation_id: self.duplicate_operation_id,
                meta,
            }
        }
    }
}

/// <p>No instance exists with the specified ID, or the instance was recently registered, and information about the instance hasn't propagated yet.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct InstanceNotFound {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl InstanceNotFound {
    /// Creates a `InstanceNotFound` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("InstanceNotFound")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`InstanceNotFound`](crate::error::InstanceNotFound).
    pub fn builder() -> crate::error::instance_not_found::Builder {
        crate::error::instance_not_found::Builder::default()
    }
}
impl std::fmt::Display for InstanceNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstanceNotFound")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InstanceNotFound {}
impl ProvideErrorMetadata for InstanceNotFound {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for InstanceNotFound {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`InstanceNotFound`](crate::error::InstanceNotFound).
pub mod instance_not_found {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`InstanceNotFound`](crate::error::InstanceNotFound).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`InstanceNotFound`](crate::error::InstanceNotFound).
        pub fn build(self) -> crate::error::InstanceNotFound {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("InstanceNotFound");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::InstanceNotFound {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct InvalidInput {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl InvalidInput {
    /// Creates a `InvalidInput` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("InvalidInput")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`InvalidInput`](crate::error::InvalidInput).
    pub fn builder() -> crate::error::invalid_input::Builder {
        crate::error::invalid_input::Builder::default()
    }
}
impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidInput")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidInput {}
impl ProvideErrorMetadata for InvalidInput {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for InvalidInput {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`InvalidInput`](crate::error::InvalidInput).
pub mod invalid_input {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`InvalidInput`](crate::error::InvalidInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`InvalidInput`](crate::error::InvalidInput).
        pub fn build(self) -> crate::error::InvalidInput {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("InvalidInput");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::InvalidInput {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The namespace that you're trying to create already exists.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NamespaceAlreadyExists {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    /// <p>The <code>CreatorRequestId</code> that was used to create the namespace.</p>
    #[serde(rename = "CreatorRequestId", default)]
    pub(crate) creator_request_id: std::option::Option<std::string::String>,
    /// <p>The ID of the existing namespace.</p>
    #[serde(rename = "NamespaceId", default)]
    pub(crate) namespace_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl NamespaceAlreadyExists {
    /// Creates a `NamespaceAlreadyExists` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("NamespaceAlreadyExists")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// <p>The <code>CreatorRequestId</code> that was used to create the namespace.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>The <code>CreatorRequestId</code> that was used to create the namespace.</p>
    pub fn set_creator_request_id(&mut self, creator_request_id: std::option::Option<std::string::String>) {
        self.creator_request_id = creator_request_id;
    }
    /// <p>The ID of the existing namespace.</p>
    pub fn namespace_id(&self) -> std::option::Option<&str> {
        self.namespace_id.as_deref()
    }
    /// <p>The ID of the existing namespace.</p>
    pub fn set_namespace_id(&mut self, namespace_id: std::option::Option<std::string::String>) {
        self.namespace_id = namespace_id;
    }
    /// Creates a new builder-style object to manufacture [`NamespaceAlreadyExists`](crate::error::NamespaceAlreadyExists).
    pub fn builder() -> crate::error::namespace_already_exists::Builder {
        crate::error::namespace_already_exists::Builder::default()
    }
}
impl std::fmt::Display for NamespaceAlreadyExists {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NamespaceAlreadyExists")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NamespaceAlreadyExists {}
impl ProvideErrorMetadata for NamespaceAlreadyExists {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for NamespaceAlreadyExists {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`NamespaceAlreadyExists`](crate::error::NamespaceAlreadyExists).
pub mod namespace_already_exists {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`NamespaceAlreadyExists`](crate::error::NamespaceAlreadyExists).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        creator_request_id: std::option::Option<std::string::String>,
        namespace_id: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The <code>CreatorRequestId</code> that was used to create the namespace.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>The <code>CreatorRequestId</code> that was used to create the namespace.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>The ID of the existing namespace.</p>
        pub fn namespace_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.namespace_id = Some(input.into());
            self
        }
        /// <p>The ID of the existing namespace.</p>
        pub fn set_namespace_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.namespace_id = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`NamespaceAlreadyExists`](crate::error::NamespaceAlreadyExists).
        pub fn build(self) -> crate::error::NamespaceAlreadyExists {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("NamespaceAlreadyExists");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::NamespaceAlreadyExists {
                message: self.message,
                creator_request_id: self.creator_request_id,
                namespace_id: self.namespace_id,
                meta,
            }
        }
    }
}

/// <p>No namespace exists with the specified ID.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NamespaceNotFound {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl NamespaceNotFound {
    /// Creates a `NamespaceNotFound` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("NamespaceNotFound")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`NamespaceNotFound`](crate::error::NamespaceNotFound).
    pub fn builder() -> crate::error::namespace_not_found::Builder {
        crate::error::namespace_not_found::Builder::default()
    }
}
impl std::fmt::Display for NamespaceNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NamespaceNotFound")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for NamespaceNotFound {}
impl ProvideErrorMetadata for NamespaceNotFound {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for NamespaceNotFound {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`NamespaceNotFound`](crate::error::NamespaceNotFound).
pub mod namespace_not_found {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`NamespaceNotFound`](crate::error::NamespaceNotFound).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`NamespaceNotFound`](crate::error::NamespaceNotFound).
        pub fn build(self) -> crate::error::NamespaceNotFound {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("NamespaceNotFound");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::NamespaceNotFound {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>No operation exists with the specified ID.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct OperationNotFound {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl OperationNotFound {
    /// Creates a `OperationNotFound` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("OperationNotFound")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`OperationNotFound`](crate::error::OperationNotFound).
    pub fn builder() -> crate::error::operation_not_found::Builder {
        crate::error::operation_not_found::Builder::default()
    }
}
impl std::fmt::Display for OperationNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OperationNotFound")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for OperationNotFound {}
impl ProvideErrorMetadata for OperationNotFound {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for OperationNotFound {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`OperationNotFound`](crate::error::OperationNotFound).
pub mod operation_not_found {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`OperationNotFound`](crate::error::OperationNotFound).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`OperationNotFound`](crate::error::OperationNotFound).
        pub fn build(self) -> crate::error::OperationNotFound {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("OperationNotFound");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::OperationNotFound {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The operation can't be completed because you've reached the quota for the number of requests.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct RequestLimitExceeded {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl RequestLimitExceeded {
    /// Creates a `RequestLimitExceeded` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("RequestLimitExceeded")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`RequestLimitExceeded`](crate::error::RequestLimitExceeded).
    pub fn builder() -> crate::error::request_limit_exceeded::Builder {
        crate::error::request_limit_exceeded::Builder::default()
    }
}
impl std::fmt::Display for RequestLimitExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RequestLimitExceeded")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for RequestLimitExceeded {}
impl ProvideErrorMetadata for RequestLimitExceeded {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for RequestLimitExceeded {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`RequestLimitExceeded`](crate::error::RequestLimitExceeded).
pub mod request_limit_exceeded {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`RequestLimitExceeded`](crate::error::RequestLimitExceeded).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`RequestLimitExceeded`](crate::error::RequestLimitExceeded).
        pub fn build(self) -> crate::error::RequestLimitExceeded {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("RequestLimitExceeded");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::RequestLimitExceeded {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The specified resource can't be deleted because it contains other resources. For example, you can't delete a service that contains any instances.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ResourceInUse {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl ResourceInUse {
    /// Creates a `ResourceInUse` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("ResourceInUse")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`ResourceInUse`](crate::error::ResourceInUse).
    pub fn builder() -> crate::error::resource_in_use::Builder {
        crate::error::resource_in_use::Builder::default()
    }
}
impl std::fmt::Display for ResourceInUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceInUse")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceInUse {}
impl ProvideErrorMetadata for ResourceInUse {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for ResourceInUse {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`ResourceInUse`](crate::error::ResourceInUse).
pub mod resource_in_use {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`ResourceInUse`](crate::error::ResourceInUse).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`ResourceInUse`](crate::error::ResourceInUse).
        pub fn build(self) -> crate::error::ResourceInUse {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("ResourceInUse");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::ResourceInUse {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The resource can't be created because you've reached the quota on the number of resources.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ResourceLimitExceeded {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl ResourceLimitExceeded {
    /// Creates a `ResourceLimitExceeded` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("ResourceLimitExceeded")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`ResourceLimitExceeded`](crate::error::ResourceLimitExceeded).
    pub fn builder() -> crate::error::resource_limit_exceeded::Builder {
        crate::error::resource_limit_exceeded::Builder::default()
    }
}
impl std::fmt::Display for ResourceLimitExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceLimitExceeded")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceLimitExceeded {}
impl ProvideErrorMetadata for ResourceLimitExceeded {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for ResourceLimitExceeded {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`ResourceLimitExceeded`](crate::error::ResourceLimitExceeded).
pub mod resource_limit_exceeded {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`ResourceLimitExceeded`](crate::error::ResourceLimitExceeded).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`ResourceLimitExceeded`](crate::error::ResourceLimitExceeded).
        pub fn build(self) -> crate::error::ResourceLimitExceeded {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("ResourceLimitExceeded");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::ResourceLimitExceeded {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The operation can't be completed because the resource was not found.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ResourceNotFoundException {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl ResourceNotFoundException {
    /// Creates a `ResourceNotFoundException` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("ResourceNotFoundException")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`ResourceNotFoundException`](crate::error::ResourceNotFoundException).
    pub fn builder() -> crate::error::resource_not_found_exception::Builder {
        crate::error::resource_not_found_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundException {}
impl ProvideErrorMetadata for ResourceNotFoundException {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for ResourceNotFoundException {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`ResourceNotFoundException`](crate::error::ResourceNotFoundException).
pub mod resource_not_found_exception {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`ResourceNotFoundException`](crate::error::ResourceNotFoundException).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`ResourceNotFoundException`](crate::error::ResourceNotFoundException).
        pub fn build(self) -> crate::error::ResourceNotFoundException {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("ResourceNotFoundException");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::ResourceNotFoundException {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The service can't be created because a service with the same name already exists.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ServiceAlreadyExists {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    /// <p>The <code>CreatorRequestId</code> that was used to create the service.</p>
    #[serde(rename = "CreatorRequestId", default)]
    pub(crate) creator_request_id: std::option::Option<std::string::String>,
    /// <p>The ID of the existing service.</p>
    #[serde(rename = "ServiceId", default)]
    pub(crate) service_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl ServiceAlreadyExists {
    /// Creates a `ServiceAlreadyExists` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("ServiceAlreadyExists")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// <p>The <code>CreatorRequestId</code> that was used to create the service.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>The <code>CreatorRequestId</code> that was used to create the service.</p>
    pub fn set_creator_request_id(&mut self, creator_request_id: std::option::Option<std::string::String>) {
        self.creator_request_id = creator_request_id;
    }
    /// <p>The ID of the existing service.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>The ID of the existing service.</p>
    pub fn set_service_id(&mut self, service_id: std::option::Option<std::string::String>) {
        self.service_id = service_id;
    }
    /// Creates a new builder-style object to manufacture [`ServiceAlreadyExists`](crate::error::ServiceAlreadyExists).
    pub fn builder() -> crate::error::service_already_exists::Builder {
        crate::error::service_already_exists::Builder::default()
    }
}
impl std::fmt::Display for ServiceAlreadyExists {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceAlreadyExists")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceAlreadyExists {}
impl ProvideErrorMetadata for ServiceAlreadyExists {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for ServiceAlreadyExists {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`ServiceAlreadyExists`](crate::error::ServiceAlreadyExists).
pub mod service_already_exists {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`ServiceAlreadyExists`](crate::error::ServiceAlreadyExists).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        creator_request_id: std::option::Option<std::string::String>,
        service_id: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The <code>CreatorRequestId</code> that was used to create the service.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>The <code>CreatorRequestId</code> that was used to create the service.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>The ID of the existing service.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the existing service.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`ServiceAlreadyExists`](crate::error::ServiceAlreadyExists).
        pub fn build(self) -> crate::error::ServiceAlreadyExists {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("ServiceAlreadyExists");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::ServiceAlreadyExists {
                message: self.message,
                creator_request_id: self.creator_request_id,
                service_id: self.service_id,
                meta,
            }
        }
    }
}

/// <p>No service exists with the specified ID.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ServiceNotFound {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl ServiceNotFound {
    /// Creates a `ServiceNotFound` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("ServiceNotFound")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// Creates a new builder-style object to manufacture [`ServiceNotFound`](crate::error::ServiceNotFound).
    pub fn builder() -> crate::error::service_not_found::Builder {
        crate::error::service_not_found::Builder::default()
    }
}
impl std::fmt::Display for ServiceNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceNotFound")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceNotFound {}
impl ProvideErrorMetadata for ServiceNotFound {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for ServiceNotFound {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`ServiceNotFound`](crate::error::ServiceNotFound).
pub mod service_not_found {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`ServiceNotFound`](crate::error::ServiceNotFound).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`ServiceNotFound`](crate::error::ServiceNotFound).
        pub fn build(self) -> crate::error::ServiceNotFound {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("ServiceNotFound");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::ServiceNotFound {
                message: self.message,
                meta,
            }
        }
    }
}

/// <p>The list of tags on the resource is over the quota. The maximum number of tags that can be applied to a resource is 50.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct TooManyTagsException {
    #[serde(rename = "Message", alias = "message", default)]
    pub(crate) message: std::option::Option<std::string::String>,
    /// <p>The name of the resource.</p>
    #[serde(rename = "ResourceName", default)]
    pub(crate) resource_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub(crate) meta: ErrorMetadata,
}
impl TooManyTagsException {
    /// Creates a `TooManyTagsException` error carrying the given message.
    pub fn new(message: impl Into<std::string::String>) -> Self {
        let message = message.into();
        Self {
            meta: ErrorMetadata::builder()
                .code("TooManyTagsException")
                .message(message.clone())
                .build(),
            message: Some(message),
            ..Default::default()
        }
    }
    /// Returns the error message.
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    /// Replaces the error message, both here and in the error metadata.
    pub fn set_message(&mut self, message: std::option::Option<std::string::String>) {
        self.meta = crate::json_errors::replace_message(&self.meta, message.as_deref());
        self.message = message;
    }
    /// <p>The name of the resource.</p>
    pub fn resource_name(&self) -> std::option::Option<&str> {
        self.resource_name.as_deref()
    }
    /// <p>The name of the resource.</p>
    pub fn set_resource_name(&mut self, resource_name: std::option::Option<std::string::String>) {
        self.resource_name = resource_name;
    }
    /// Creates a new builder-style object to manufacture [`TooManyTagsException`](crate::error::TooManyTagsException).
    pub fn builder() -> crate::error::too_many_tags_exception::Builder {
        crate::error::too_many_tags_exception::Builder::default()
    }
}
impl std::fmt::Display for TooManyTagsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TooManyTagsException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for TooManyTagsException {}
impl ProvideErrorMetadata for TooManyTagsException {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}
impl crate::json_errors::ModeledError for TooManyTagsException {
    fn attach_meta(&mut self, meta: ErrorMetadata) {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        self.meta = meta;
    }
}
/// See [`TooManyTagsException`](crate::error::TooManyTagsException).
pub mod too_many_tags_exception {

    use aws_smithy_types::error::metadata::ErrorMetadata;

    /// A builder for [`TooManyTagsException`](crate::error::TooManyTagsException).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        resource_name: std::option::Option<std::string::String>,
        meta: std::option::Option<ErrorMetadata>,
    }
    impl Builder {
        /// <p>The error message.</p>
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        /// <p>The error message.</p>
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// <p>The name of the resource.</p>
        pub fn resource_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_name = Some(input.into());
            self
        }
        /// <p>The name of the resource.</p>
        pub fn set_resource_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_name = input;
            self
        }
        /// Sets the error metadata. When unset, metadata carrying the error code and message is derived.
        pub fn meta(mut self, meta: ErrorMetadata) -> Self {
            self.meta = Some(meta);
            self
        }
        /// Consumes the builder and constructs a [`TooManyTagsException`](crate::error::TooManyTagsException).
        pub fn build(self) -> crate::error::TooManyTagsException {
            let meta = match self.meta {
                Some(meta) => meta,
                None => {
                    let mut builder = ErrorMetadata::builder().code("TooManyTagsException");
                    if let Some(message) = &self.message {
                        builder = builder.message(message.clone());
                    }
                    builder.build()
                }
            };
            crate::error::TooManyTagsException {
                message: self.message,
                resource_name: self.resource_name,
                meta,
            }
        }
    }
}

/// Error type for the `CreateHttpNamespace` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum CreateHttpNamespaceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The namespace that you're trying to create already exists.</p>
    NamespaceAlreadyExists(crate::error::NamespaceAlreadyExists),
    /// <p>The resource can't be created because you've reached the quota on the number of resources.</p>
    ResourceLimitExceeded(crate::error::ResourceLimitExceeded),
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// <p>The list of tags on the resource is over the quota. The maximum number of tags that can be applied to a resource is 50.</p>
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl CreateHttpNamespaceError {
    /// Creates the `CreateHttpNamespaceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `CreateHttpNamespaceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `CreateHttpNamespaceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `CreateHttpNamespaceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `CreateHttpNamespaceError::NamespaceAlreadyExists`.
    pub fn is_namespace_already_exists(&self) -> bool {
        matches!(self, Self::NamespaceAlreadyExists(_))
    }
    /// Returns `true` if the error kind is `CreateHttpNamespaceError::ResourceLimitExceeded`.
    pub fn is_resource_limit_exceeded(&self) -> bool {
        matches!(self, Self::ResourceLimitExceeded(_))
    }
    /// Returns `true` if the error kind is `CreateHttpNamespaceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
    /// Returns `true` if the error kind is `CreateHttpNamespaceError::TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Self::TooManyTagsException(_))
    }
}
impl std::fmt::Display for CreateHttpNamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceAlreadyExists(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::TooManyTagsException(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for CreateHttpNamespaceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::NamespaceAlreadyExists(inner) => Some(inner),
            Self::ResourceLimitExceeded(inner) => Some(inner),
            Self::DuplicateRequest(inner) => Some(inner),
            Self::TooManyTagsException(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for CreateHttpNamespaceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::NamespaceAlreadyExists(inner) => inner.meta(),
            Self::ResourceLimitExceeded(inner) => inner.meta(),
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::TooManyTagsException(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for CreateHttpNamespaceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `CreatePrivateDnsNamespace` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum CreatePrivateDnsNamespaceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The namespace that you're trying to create already exists.</p>
    NamespaceAlreadyExists(crate::error::NamespaceAlreadyExists),
    /// <p>The resource can't be created because you've reached the quota on the number of resources.</p>
    ResourceLimitExceeded(crate::error::ResourceLimitExceeded),
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// <p>The list of tags on the resource is over the quota. The maximum number of tags that can be applied to a resource is 50.</p>
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl CreatePrivateDnsNamespaceError {
    /// Creates the `CreatePrivateDnsNamespaceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `CreatePrivateDnsNamespaceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `CreatePrivateDnsNamespaceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `CreatePrivateDnsNamespaceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `CreatePrivateDnsNamespaceError::NamespaceAlreadyExists`.
    pub fn is_namespace_already_exists(&self) -> bool {
        matches!(self, Self::NamespaceAlreadyExists(_))
    }
    /// Returns `true` if the error kind is `CreatePrivateDnsNamespaceError::ResourceLimitExceeded`.
    pub fn is_resource_limit_exceeded(&self) -> bool {
        matches!(self, Self::ResourceLimitExceeded(_))
    }
    /// Returns `true` if the error kind is `CreatePrivateDnsNamespaceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
    /// Returns `true` if the error kind is `CreatePrivateDnsNamespaceError::TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Self::TooManyTagsException(_))
    }
}
impl std::fmt::Display for CreatePrivateDnsNamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceAlreadyExists(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::TooManyTagsException(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for CreatePrivateDnsNamespaceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::NamespaceAlreadyExists(inner) => Some(inner),
            Self::ResourceLimitExceeded(inner) => Some(inner),
            Self::DuplicateRequest(inner) => Some(inner),
            Self::TooManyTagsException(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for CreatePrivateDnsNamespaceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::NamespaceAlreadyExists(inner) => inner.meta(),
            Self::ResourceLimitExceeded(inner) => inner.meta(),
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::TooManyTagsException(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for CreatePrivateDnsNamespaceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `CreatePublicDnsNamespace` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum CreatePublicDnsNamespaceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The namespace that you're trying to create already exists.</p>
    NamespaceAlreadyExists(crate::error::NamespaceAlreadyExists),
    /// <p>The resource can't be created because you've reached the quota on the number of resources.</p>
    ResourceLimitExceeded(crate::error::ResourceLimitExceeded),
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// <p>The list of tags on the resource is over the quota. The maximum number of tags that can be applied to a resource is 50.</p>
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl CreatePublicDnsNamespaceError {
    /// Creates the `CreatePublicDnsNamespaceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `CreatePublicDnsNamespaceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `CreatePublicDnsNamespaceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `CreatePublicDnsNamespaceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `CreatePublicDnsNamespaceError::NamespaceAlreadyExists`.
    pub fn is_namespace_already_exists(&self) -> bool {
        matches!(self, Self::NamespaceAlreadyExists(_))
    }
    /// Returns `true` if the error kind is `CreatePublicDnsNamespaceError::ResourceLimitExceeded`.
    pub fn is_resource_limit_exceeded(&self) -> bool {
        matches!(self, Self::ResourceLimitExceeded(_))
    }
    /// Returns `true` if the error kind is `CreatePublicDnsNamespaceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
    /// Returns `true` if the error kind is `CreatePublicDnsNamespaceError::TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Self::TooManyTagsException(_))
    }
}
impl std::fmt::Display for CreatePublicDnsNamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceAlreadyExists(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::TooManyTagsException(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for CreatePublicDnsNamespaceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::NamespaceAlreadyExists(inner) => Some(inner),
            Self::ResourceLimitExceeded(inner) => Some(inner),
            Self::DuplicateRequest(inner) => Some(inner),
            Self::TooManyTagsException(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for CreatePublicDnsNamespaceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::NamespaceAlreadyExists(inner) => inner.meta(),
            Self::ResourceLimitExceeded(inner) => inner.meta(),
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::TooManyTagsException(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for CreatePublicDnsNamespaceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `CreateService` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum CreateServiceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The resource can't be created because you've reached the quota on the number of resources.</p>
    ResourceLimitExceeded(crate::error::ResourceLimitExceeded),
    /// <p>No namespace exists with the specified ID.</p>
    NamespaceNotFound(crate::error::NamespaceNotFound),
    /// <p>The service can't be created because a service with the same name already exists.</p>
    ServiceAlreadyExists(crate::error::ServiceAlreadyExists),
    /// <p>The list of tags on the resource is over the quota. The maximum number of tags that can be applied to a resource is 50.</p>
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl CreateServiceError {
    /// Creates the `CreateServiceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `CreateServiceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `CreateServiceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `CreateServiceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `CreateServiceError::ResourceLimitExceeded`.
    pub fn is_resource_limit_exceeded(&self) -> bool {
        matches!(self, Self::ResourceLimitExceeded(_))
    }
    /// Returns `true` if the error kind is `CreateServiceError::NamespaceNotFound`.
    pub fn is_namespace_not_found(&self) -> bool {
        matches!(self, Self::NamespaceNotFound(_))
    }
    /// Returns `true` if the error kind is `CreateServiceError::ServiceAlreadyExists`.
    pub fn is_service_already_exists(&self) -> bool {
        matches!(self, Self::ServiceAlreadyExists(_))
    }
    /// Returns `true` if the error kind is `CreateServiceError::TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Self::TooManyTagsException(_))
    }
}
impl std::fmt::Display for CreateServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceAlreadyExists(inner) => std::fmt::Display::fmt(inner, f),
            Self::TooManyTagsException(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for CreateServiceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::ResourceLimitExceeded(inner) => Some(inner),
            Self::NamespaceNotFound(inner) => Some(inner),
            Self::ServiceAlreadyExists(inner) => Some(inner),
            Self::TooManyTagsException(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for CreateServiceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::ResourceLimitExceeded(inner) => inner.meta(),
            Self::NamespaceNotFound(inner) => inner.meta(),
            Self::ServiceAlreadyExists(inner) => inner.meta(),
            Self::TooManyTagsException(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for CreateServiceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `DeleteNamespace` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum DeleteNamespaceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No namespace exists with the specified ID.</p>
    NamespaceNotFound(crate::error::NamespaceNotFound),
    /// <p>The specified resource can't be deleted because it contains other resources. For example, you can't delete a service that contains any instances.</p>
    ResourceInUse(crate::error::ResourceInUse),
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl DeleteNamespaceError {
    /// Creates the `DeleteNamespaceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `DeleteNamespaceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `DeleteNamespaceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `DeleteNamespaceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `DeleteNamespaceError::NamespaceNotFound`.
    pub fn is_namespace_not_found(&self) -> bool {
        matches!(self, Self::NamespaceNotFound(_))
    }
    /// Returns `true` if the error kind is `DeleteNamespaceError::ResourceInUse`.
    pub fn is_resource_in_use(&self) -> bool {
        matches!(self, Self::ResourceInUse(_))
    }
    /// Returns `true` if the error kind is `DeleteNamespaceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
}
impl std::fmt::Display for DeleteNamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceInUse(inner) => std::fmt::Display::fmt(inner, f),
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for DeleteNamespaceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::NamespaceNotFound(inner) => Some(inner),
            Self::ResourceInUse(inner) => Some(inner),
            Self::DuplicateRequest(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for DeleteNamespaceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::NamespaceNotFound(inner) => inner.meta(),
            Self::ResourceInUse(inner) => inner.meta(),
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for DeleteNamespaceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `DeleteService` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum DeleteServiceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// <p>The specified resource can't be deleted because it contains other resources. For example, you can't delete a service that contains any instances.</p>
    ResourceInUse(crate::error::ResourceInUse),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl DeleteServiceError {
    /// Creates the `DeleteServiceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `DeleteServiceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `DeleteServiceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `DeleteServiceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `DeleteServiceError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
    /// Returns `true` if the error kind is `DeleteServiceError::ResourceInUse`.
    pub fn is_resource_in_use(&self) -> bool {
        matches!(self, Self::ResourceInUse(_))
    }
}
impl std::fmt::Display for DeleteServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceInUse(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for DeleteServiceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::ResourceInUse(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for DeleteServiceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::ResourceInUse(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for DeleteServiceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `DeregisterInstance` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum DeregisterInstanceError {
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No instance exists with the specified ID, or the instance was recently registered, and information about the instance hasn't propagated yet.</p>
    InstanceNotFound(crate::error::InstanceNotFound),
    /// <p>The specified resource can't be deleted because it contains other resources. For example, you can't delete a service that contains any instances.</p>
    ResourceInUse(crate::error::ResourceInUse),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl DeregisterInstanceError {
    /// Creates the `DeregisterInstanceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `DeregisterInstanceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `DeregisterInstanceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `DeregisterInstanceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
    /// Returns `true` if the error kind is `DeregisterInstanceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `DeregisterInstanceError::InstanceNotFound`.
    pub fn is_instance_not_found(&self) -> bool {
        matches!(self, Self::InstanceNotFound(_))
    }
    /// Returns `true` if the error kind is `DeregisterInstanceError::ResourceInUse`.
    pub fn is_resource_in_use(&self) -> bool {
        matches!(self, Self::ResourceInUse(_))
    }
    /// Returns `true` if the error kind is `DeregisterInstanceError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}
impl std::fmt::Display for DeregisterInstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::InstanceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceInUse(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for DeregisterInstanceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateRequest(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::InstanceNotFound(inner) => Some(inner),
            Self::ResourceInUse(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for DeregisterInstanceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::InstanceNotFound(inner) => inner.meta(),
            Self::ResourceInUse(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for DeregisterInstanceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `DiscoverInstances` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum DiscoverInstancesError {
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// <p>No namespace exists with the specified ID.</p>
    NamespaceNotFound(crate::error::NamespaceNotFound),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The operation can't be completed because you've reached the quota for the number of requests.</p>
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl DiscoverInstancesError {
    /// Creates the `DiscoverInstancesError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `DiscoverInstancesError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `DiscoverInstancesError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `DiscoverInstancesError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
    /// Returns `true` if the error kind is `DiscoverInstancesError::NamespaceNotFound`.
    pub fn is_namespace_not_found(&self) -> bool {
        matches!(self, Self::NamespaceNotFound(_))
    }
    /// Returns `true` if the error kind is `DiscoverInstancesError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `DiscoverInstancesError::RequestLimitExceeded`.
    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(self, Self::RequestLimitExceeded(_))
    }
}
impl std::fmt::Display for DiscoverInstancesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::RequestLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for DiscoverInstancesError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ServiceNotFound(inner) => Some(inner),
            Self::NamespaceNotFound(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::RequestLimitExceeded(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for DiscoverInstancesError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::NamespaceNotFound(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::RequestLimitExceeded(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for DiscoverInstancesError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        match self {
            Self::RequestLimitExceeded(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `GetInstance` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum GetInstanceError {
    /// <p>No instance exists with the specified ID, or the instance was recently registered, and information about the instance hasn't propagated yet.</p>
    InstanceNotFound(crate::error::InstanceNotFound),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl GetInstanceError {
    /// Creates the `GetInstanceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `GetInstanceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `GetInstanceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `GetInstanceError::InstanceNotFound`.
    pub fn is_instance_not_found(&self) -> bool {
        matches!(self, Self::InstanceNotFound(_))
    }
    /// Returns `true` if the error kind is `GetInstanceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `GetInstanceError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}
impl std::fmt::Display for GetInstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstanceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for GetInstanceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InstanceNotFound(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for GetInstanceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InstanceNotFound(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for GetInstanceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `GetInstancesHealthStatus` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum GetInstancesHealthStatusError {
    /// <p>No instance exists with the specified ID, or the instance was recently registered, and information about the instance hasn't propagated yet.</p>
    InstanceNotFound(crate::error::InstanceNotFound),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl GetInstancesHealthStatusError {
    /// Creates the `GetInstancesHealthStatusError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `GetInstancesHealthStatusError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `GetInstancesHealthStatusError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `GetInstancesHealthStatusError::InstanceNotFound`.
    pub fn is_instance_not_found(&self) -> bool {
        matches!(self, Self::InstanceNotFound(_))
    }
    /// Returns `true` if the error kind is `GetInstancesHealthStatusError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `GetInstancesHealthStatusError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}
impl std::fmt::Display for GetInstancesHealthStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstanceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for GetInstancesHealthStatusError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InstanceNotFound(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for GetInstancesHealthStatusError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InstanceNotFound(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for GetInstancesHealthStatusError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `GetNamespace` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum GetNamespaceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No namespace exists with the specified ID.</p>
    NamespaceNotFound(crate::error::NamespaceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl GetNamespaceError {
    /// Creates the `GetNamespaceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `GetNamespaceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `GetNamespaceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `GetNamespaceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `GetNamespaceError::NamespaceNotFound`.
    pub fn is_namespace_not_found(&self) -> bool {
        matches!(self, Self::NamespaceNotFound(_))
    }
}
impl std::fmt::Display for GetNamespaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::NamespaceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for GetNamespaceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::NamespaceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for GetNamespaceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::NamespaceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for GetNamespaceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `GetOperation` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum GetOperationError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No operation exists with the specified ID.</p>
    OperationNotFound(crate::error::OperationNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl GetOperationError {
    /// Creates the `GetOperationError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `GetOperationError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `GetOperationError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `GetOperationError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `GetOperationError::OperationNotFound`.
    pub fn is_operation_not_found(&self) -> bool {
        matches!(self, Self::OperationNotFound(_))
    }
}
impl std::fmt::Display for GetOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::OperationNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for GetOperationError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::OperationNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for GetOperationError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::OperationNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for GetOperationError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `GetService` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum GetServiceError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl GetServiceError {
    /// Creates the `GetServiceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `GetServiceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `GetServiceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `GetServiceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `GetServiceError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}
impl std::fmt::Display for GetServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for GetServiceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for GetServiceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for GetServiceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `ListInstances` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum ListInstancesError {
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl ListInstancesError {
    /// Creates the `ListInstancesError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `ListInstancesError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `ListInstancesError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `ListInstancesError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
    /// Returns `true` if the error kind is `ListInstancesError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for ListInstancesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for ListInstancesError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ServiceNotFound(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for ListInstancesError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for ListInstancesError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `ListNamespaces` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum ListNamespacesError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl ListNamespacesError {
    /// Creates the `ListNamespacesError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `ListNamespacesError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `ListNamespacesError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `ListNamespacesError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for ListNamespacesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for ListNamespacesError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for ListNamespacesError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for ListNamespacesError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `ListOperations` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum ListOperationsError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl ListOperationsError {
    /// Creates the `ListOperationsError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `ListOperationsError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `ListOperationsError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `ListOperationsError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for ListOperationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for ListOperationsError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for ListOperationsError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for ListOperationsError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `ListServices` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum ListServicesError {
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl ListServicesError {
    /// Creates the `ListServicesError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `ListServicesError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `ListServicesError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `ListServicesError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for ListServicesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for ListServicesError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for ListServicesError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for ListServicesError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `ListTagsForResource` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum ListTagsForResourceError {
    /// <p>The operation can't be completed because the resource was not found.</p>
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl ListTagsForResourceError {
    /// Creates the `ListTagsForResourceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `ListTagsForResourceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `ListTagsForResourceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `ListTagsForResourceError::ResourceNotFoundException`.
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Self::ResourceNotFoundException(_))
    }
    /// Returns `true` if the error kind is `ListTagsForResourceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for ListTagsForResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for ListTagsForResourceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceNotFoundException(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for ListTagsForResourceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::ResourceNotFoundException(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for ListTagsForResourceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `RegisterInstance` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum RegisterInstanceError {
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>The specified resource can't be deleted because it contains other resources. For example, you can't delete a service that contains any instances.</p>
    ResourceInUse(crate::error::ResourceInUse),
    /// <p>The resource can't be created because you've reached the quota on the number of resources.</p>
    ResourceLimitExceeded(crate::error::ResourceLimitExceeded),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl RegisterInstanceError {
    /// Creates the `RegisterInstanceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `RegisterInstanceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `RegisterInstanceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `RegisterInstanceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
    /// Returns `true` if the error kind is `RegisterInstanceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `RegisterInstanceError::ResourceInUse`.
    pub fn is_resource_in_use(&self) -> bool {
        matches!(self, Self::ResourceInUse(_))
    }
    /// Returns `true` if the error kind is `RegisterInstanceError::ResourceLimitExceeded`.
    pub fn is_resource_limit_exceeded(&self) -> bool {
        matches!(self, Self::ResourceLimitExceeded(_))
    }
    /// Returns `true` if the error kind is `RegisterInstanceError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}
impl std::fmt::Display for RegisterInstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceInUse(inner) => std::fmt::Display::fmt(inner, f),
            Self::ResourceLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for RegisterInstanceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateRequest(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::ResourceInUse(inner) => Some(inner),
            Self::ResourceLimitExceeded(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for RegisterInstanceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::ResourceInUse(inner) => inner.meta(),
            Self::ResourceLimitExceeded(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for RegisterInstanceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `TagResource` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum TagResourceError {
    /// <p>The operation can't be completed because the resource was not found.</p>
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// <p>The list of tags on the resource is over the quota. The maximum number of tags that can be applied to a resource is 50.</p>
    TooManyTagsException(crate::error::TooManyTagsException),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl TagResourceError {
    /// Creates the `TagResourceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `TagResourceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `TagResourceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `TagResourceError::ResourceNotFoundException`.
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Self::ResourceNotFoundException(_))
    }
    /// Returns `true` if the error kind is `TagResourceError::TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Self::TooManyTagsException(_))
    }
    /// Returns `true` if the error kind is `TagResourceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for TagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Self::TooManyTagsException(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for TagResourceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceNotFoundException(inner) => Some(inner),
            Self::TooManyTagsException(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for TagResourceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::ResourceNotFoundException(inner) => inner.meta(),
            Self::TooManyTagsException(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for TagResourceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `UntagResource` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum UntagResourceError {
    /// <p>The operation can't be completed because the resource was not found.</p>
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl UntagResourceError {
    /// Creates the `UntagResourceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `UntagResourceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `UntagResourceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `UntagResourceError::ResourceNotFoundException`.
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Self::ResourceNotFoundException(_))
    }
    /// Returns `true` if the error kind is `UntagResourceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for UntagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for UntagResourceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceNotFoundException(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for UntagResourceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::ResourceNotFoundException(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for UntagResourceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `UpdateInstanceCustomHealthStatus` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum UpdateInstanceCustomHealthStatusError {
    /// <p>No instance exists with the specified ID, or the instance was recently registered, and information about the instance hasn't propagated yet.</p>
    InstanceNotFound(crate::error::InstanceNotFound),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// <p>The health check for the instance that's specified by <code>ServiceId</code> and <code>InstanceId</code> isn't a custom health check.</p>
    CustomHealthNotFound(crate::error::CustomHealthNotFound),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl UpdateInstanceCustomHealthStatusError {
    /// Creates the `UpdateInstanceCustomHealthStatusError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `UpdateInstanceCustomHealthStatusError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `UpdateInstanceCustomHealthStatusError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `UpdateInstanceCustomHealthStatusError::InstanceNotFound`.
    pub fn is_instance_not_found(&self) -> bool {
        matches!(self, Self::InstanceNotFound(_))
    }
    /// Returns `true` if the error kind is `UpdateInstanceCustomHealthStatusError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
    /// Returns `true` if the error kind is `UpdateInstanceCustomHealthStatusError::CustomHealthNotFound`.
    pub fn is_custom_health_not_found(&self) -> bool {
        matches!(self, Self::CustomHealthNotFound(_))
    }
    /// Returns `true` if the error kind is `UpdateInstanceCustomHealthStatusError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
impl std::fmt::Display for UpdateInstanceCustomHealthStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstanceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::CustomHealthNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for UpdateInstanceCustomHealthStatusError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InstanceNotFound(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::CustomHealthNotFound(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for UpdateInstanceCustomHealthStatusError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::InstanceNotFound(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::CustomHealthNotFound(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for UpdateInstanceCustomHealthStatusError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}

/// Error type for the `UpdateService` operation.
#[non_exhaustive]
#[derive(Debug)]
pub enum UpdateServiceError {
    /// <p>The operation is already in progress.</p>
    DuplicateRequest(crate::error::DuplicateRequest),
    /// <p>One or more specified values aren't valid. For example, a required value might be missing, a numeric value might be outside the allowed range, or a string value might exceed length constraints.</p>
    InvalidInput(crate::error::InvalidInput),
    /// <p>No service exists with the specified ID.</p>
    ServiceNotFound(crate::error::ServiceNotFound),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown error code).
    Unhandled(crate::error::Unhandled),
}
impl UpdateServiceError {
    /// Creates the `UpdateServiceError::Unhandled` variant from any error type.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), ErrorMetadata::default()))
    }
    /// Creates the `UpdateServiceError::Unhandled` variant from an error that occurred while parsing a response
    /// described by `meta`.
    pub(crate) fn unhandled_with_meta(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>, meta: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::new(err.into(), meta))
    }
    /// Creates the `UpdateServiceError::Unhandled` variant from an [`ErrorMetadata`].
    pub fn generic(err: ErrorMetadata) -> Self {
        Self::Unhandled(crate::error::Unhandled::from_meta(err))
    }
    /// Returns `true` if the error kind is `UpdateServiceError::DuplicateRequest`.
    pub fn is_duplicate_request(&self) -> bool {
        matches!(self, Self::DuplicateRequest(_))
    }
    /// Returns `true` if the error kind is `UpdateServiceError::InvalidInput`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
    /// Returns `true` if the error kind is `UpdateServiceError::ServiceNotFound`.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}
impl std::fmt::Display for UpdateServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRequest(inner) => std::fmt::Display::fmt(inner, f),
            Self::InvalidInput(inner) => std::fmt::Display::fmt(inner, f),
            Self::ServiceNotFound(inner) => std::fmt::Display::fmt(inner, f),
            Self::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl std::error::Error for UpdateServiceError {
    fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateRequest(inner) => Some(inner),
            Self::InvalidInput(inner) => Some(inner),
            Self::ServiceNotFound(inner) => Some(inner),
            Self::Unhandled(inner) => Some(inner),
        }
    }
}
impl ProvideErrorMetadata for UpdateServiceError {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::DuplicateRequest(inner) => inner.meta(),
            Self::InvalidInput(inner) => inner.meta(),
            Self::ServiceNotFound(inner) => inner.meta(),
            Self::Unhandled(inner) => inner.meta(),
        }
    }
}
impl ProvideErrorKind for UpdateServiceError {
    fn retryable_error_kind(&self) -> std::option::Option<ErrorKind> {
        None
    }

    fn code(&self) -> std::option::Option<&str> {
        ProvideErrorMetadata::code(self)
    }
}
