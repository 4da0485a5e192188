/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Cloud Map operations.
//!
//! Each operation is a unit struct that turns an input into an awsJson1.1 `http::Request` and
//! parses the service's `http::Response` into the operation's output or error.

use crate::error::BuildRequestError;
use crate::json_errors::{parse_error_metadata, parse_modeled, success_metadata};
use crate::response::ParseStrictResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

fn aws_json_request(
    target: &'static str,
    body: Vec<u8>,
    config: &crate::config::Config,
) -> Result<http::Request<Bytes>, BuildRequestError> {
    let endpoint = config.endpoint()?;
    let uri = format!("{}/", endpoint.trim_end_matches('/'));
    let uri: http::Uri = uri
        .parse()
        .map_err(|source| BuildRequestError::InvalidEndpoint { endpoint, source })?;
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header("x-amz-target", target)
        .header(http::header::CONTENT_LENGTH, body.len().to_string())
        .body(Bytes::from(body))?;
    tracing::debug!(operation = target, uri = %request.uri(), "built request");
    Ok(request)
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// <p>Creates an HTTP namespace. Service instances registered using an HTTP namespace can be discovered using a <code>DiscoverInstances</code> request but can't be discovered using DNS.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateHttpNamespace;
impl CreateHttpNamespace {
    /// The wire name of the operation.
    pub const NAME: &'static str = "CreateHttpNamespace";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.CreateHttpNamespace";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::CreateHttpNamespaceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let mut input = input.clone();
        if input.creator_request_id.is_none() {
            input.creator_request_id = Some(config.idempotency_token_provider().make_idempotency_token());
        }
        let body = serde_json::to_vec(&input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for CreateHttpNamespace {
    type Output = Result<crate::output::CreateHttpNamespaceOutput, crate::error::CreateHttpNamespaceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::CreateHttpNamespaceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateHttpNamespaceError::InvalidInput(err),
                Err(err) => crate::error::CreateHttpNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceAlreadyExists") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateHttpNamespaceError::NamespaceAlreadyExists(err),
                Err(err) => crate::error::CreateHttpNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceLimitExceeded") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateHttpNamespaceError::ResourceLimitExceeded(err),
                Err(err) => crate::error::CreateHttpNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateHttpNamespaceError::DuplicateRequest(err),
                Err(err) => crate::error::CreateHttpNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("TooManyTagsException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateHttpNamespaceError::TooManyTagsException(err),
                Err(err) => crate::error::CreateHttpNamespaceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::CreateHttpNamespaceError::generic(meta)
            }
        })
    }
}

/// <p>Creates a private namespace based on DNS, which is visible only inside a specified Amazon VPC.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct CreatePrivateDnsNamespace;
impl CreatePrivateDnsNamespace {
    /// The wire name of the operation.
    pub const NAME: &'static str = "CreatePrivateDnsNamespace";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.CreatePrivateDnsNamespace";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::CreatePrivateDnsNamespaceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let mut input = input.clone();
        if input.creator_request_id.is_none() {
            input.creator_request_id = Some(config.idempotency_token_provider().make_idempotency_token());
        }
        let body = serde_json::to_vec(&input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for CreatePrivateDnsNamespace {
    type Output = Result<crate::output::CreatePrivateDnsNamespaceOutput, crate::error::CreatePrivateDnsNamespaceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::CreatePrivateDnsNamespaceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePrivateDnsNamespaceError::InvalidInput(err),
                Err(err) => crate::error::CreatePrivateDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceAlreadyExists") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePrivateDnsNamespaceError::NamespaceAlreadyExists(err),
                Err(err) => crate::error::CreatePrivateDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceLimitExceeded") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePrivateDnsNamespaceError::ResourceLimitExceeded(err),
                Err(err) => crate::error::CreatePrivateDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePrivateDnsNamespaceError::DuplicateRequest(err),
                Err(err) => crate::error::CreatePrivateDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("TooManyTagsException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePrivateDnsNamespaceError::TooManyTagsException(err),
                Err(err) => crate::error::CreatePrivateDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::CreatePrivateDnsNamespaceError::generic(meta)
            }
        })
    }
}

/// <p>Creates a public namespace based on DNS, which is visible on the internet.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct CreatePublicDnsNamespace;
impl CreatePublicDnsNamespace {
    /// The wire name of the operation.
    pub const NAME: &'static str = "CreatePublicDnsNamespace";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.CreatePublicDnsNamespace";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::CreatePublicDnsNamespaceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let mut input = input.clone();
        if input.creator_request_id.is_none() {
            input.creator_request_id = Some(config.idempotency_token_provider().make_idempotency_token());
        }
        let body = serde_json::to_vec(&input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for CreatePublicDnsNamespace {
    type Output = Result<crate::output::CreatePublicDnsNamespaceOutput, crate::error::CreatePublicDnsNamespaceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::CreatePublicDnsNamespaceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePublicDnsNamespaceError::InvalidInput(err),
                Err(err) => crate::error::CreatePublicDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceAlreadyExists") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePublicDnsNamespaceError::NamespaceAlreadyExists(err),
                Err(err) => crate::error::CreatePublicDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceLimitExceeded") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePublicDnsNamespaceError::ResourceLimitExceeded(err),
                Err(err) => crate::error::CreatePublicDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePublicDnsNamespaceError::DuplicateRequest(err),
                Err(err) => crate::error::CreatePublicDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("TooManyTagsException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreatePublicDnsNamespaceError::TooManyTagsException(err),
                Err(err) => crate::error::CreatePublicDnsNamespaceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::CreatePublicDnsNamespaceError::generic(meta)
            }
        })
    }
}

/// <p>Creates a service, which defines the configuration for the DNS records and optional health checks that Cloud Map creates when instances are registered.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateService;
impl CreateService {
    /// The wire name of the operation.
    pub const NAME: &'static str = "CreateService";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.CreateService";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::CreateServiceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let mut input = input.clone();
        if input.creator_request_id.is_none() {
            input.creator_request_id = Some(config.idempotency_token_provider().make_idempotency_token());
        }
        let body = serde_json::to_vec(&input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for CreateService {
    type Output = Result<crate::output::CreateServiceOutput, crate::error::CreateServiceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::CreateServiceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateServiceError::InvalidInput(err),
                Err(err) => crate::error::CreateServiceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceLimitExceeded") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateServiceError::ResourceLimitExceeded(err),
                Err(err) => crate::error::CreateServiceError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateServiceError::NamespaceNotFound(err),
                Err(err) => crate::error::CreateServiceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceAlreadyExists") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateServiceError::ServiceAlreadyExists(err),
                Err(err) => crate::error::CreateServiceError::unhandled_with_meta(err, meta),
            },
            Some("TooManyTagsException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::CreateServiceError::TooManyTagsException(err),
                Err(err) => crate::error::CreateServiceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::CreateServiceError::generic(meta)
            }
        })
    }
}

/// <p>Deletes a namespace from the current account. If the namespace still contains one or more services, the request fails.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteNamespace;
impl DeleteNamespace {
    /// The wire name of the operation.
    pub const NAME: &'static str = "DeleteNamespace";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.DeleteNamespace";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::DeleteNamespaceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for DeleteNamespace {
    type Output = Result<crate::output::DeleteNamespaceOutput, crate::error::DeleteNamespaceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::DeleteNamespaceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteNamespaceError::InvalidInput(err),
                Err(err) => crate::error::DeleteNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteNamespaceError::NamespaceNotFound(err),
                Err(err) => crate::error::DeleteNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceInUse") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteNamespaceError::ResourceInUse(err),
                Err(err) => crate::error::DeleteNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteNamespaceError::DuplicateRequest(err),
                Err(err) => crate::error::DeleteNamespaceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::DeleteNamespaceError::generic(meta)
            }
        })
    }
}

/// <p>Deletes a specified service. If the service still contains one or more registered instances, the request fails.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteService;
impl DeleteService {
    /// The wire name of the operation.
    pub const NAME: &'static str = "DeleteService";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.DeleteService";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::DeleteServiceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for DeleteService {
    type Output = Result<crate::output::DeleteServiceOutput, crate::error::DeleteServiceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::DeleteServiceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteServiceError::InvalidInput(err),
                Err(err) => crate::error::DeleteServiceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteServiceError::ServiceNotFound(err),
                Err(err) => crate::error::DeleteServiceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceInUse") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeleteServiceError::ResourceInUse(err),
                Err(err) => crate::error::DeleteServiceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::DeleteServiceError::generic(meta)
            }
        })
    }
}

/// <p>Deletes the Route 53 DNS record and health check, if any, that Cloud Map created for the specified instance.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DeregisterInstance;
impl DeregisterInstance {
    /// The wire name of the operation.
    pub const NAME: &'static str = "DeregisterInstance";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.DeregisterInstance";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::DeregisterInstanceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for DeregisterInstance {
    type Output = Result<crate::output::DeregisterInstanceOutput, crate::error::DeregisterInstanceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::DeregisterInstanceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeregisterInstanceError::DuplicateRequest(err),
                Err(err) => crate::error::DeregisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeregisterInstanceError::InvalidInput(err),
                Err(err) => crate::error::DeregisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("InstanceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeregisterInstanceError::InstanceNotFound(err),
                Err(err) => crate::error::DeregisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceInUse") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeregisterInstanceError::ResourceInUse(err),
                Err(err) => crate::error::DeregisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DeregisterInstanceError::ServiceNotFound(err),
                Err(err) => crate::error::DeregisterInstanceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::DeregisterInstanceError::generic(meta)
            }
        })
    }
}

/// <p>Discovers registered instances for a specified namespace and service.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscoverInstances;
impl DiscoverInstances {
    /// The wire name of the operation.
    pub const NAME: &'static str = "DiscoverInstances";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.DiscoverInstances";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::DiscoverInstancesInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for DiscoverInstances {
    type Output = Result<crate::output::DiscoverInstancesOutput, crate::error::DiscoverInstancesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::DiscoverInstancesError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DiscoverInstancesError::ServiceNotFound(err),
                Err(err) => crate::error::DiscoverInstancesError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DiscoverInstancesError::NamespaceNotFound(err),
                Err(err) => crate::error::DiscoverInstancesError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DiscoverInstancesError::InvalidInput(err),
                Err(err) => crate::error::DiscoverInstancesError::unhandled_with_meta(err, meta),
            },
            Some("RequestLimitExceeded") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::DiscoverInstancesError::RequestLimitExceeded(err),
                Err(err) => crate::error::DiscoverInstancesError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::DiscoverInstancesError::generic(meta)
            }
        })
    }
}

/// <p>Gets information about a specified instance.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetInstance;
impl GetInstance {
    /// The wire name of the operation.
    pub const NAME: &'static str = "GetInstance";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.GetInstance";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::GetInstanceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for GetInstance {
    type Output = Result<crate::output::GetInstanceOutput, crate::error::GetInstanceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::GetInstanceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InstanceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetInstanceError::InstanceNotFound(err),
                Err(err) => crate::error::GetInstanceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetInstanceError::InvalidInput(err),
                Err(err) => crate::error::GetInstanceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetInstanceError::ServiceNotFound(err),
                Err(err) => crate::error::GetInstanceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::GetInstanceError::generic(meta)
            }
        })
    }
}

/// <p>Gets the current health status (<code>Healthy</code>, <code>Unhealthy</code>, or <code>Unknown</code>) of one or more instances that are associated with a specified service.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetInstancesHealthStatus;
impl GetInstancesHealthStatus {
    /// The wire name of the operation.
    pub const NAME: &'static str = "GetInstancesHealthStatus";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.GetInstancesHealthStatus";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::GetInstancesHealthStatusInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for GetInstancesHealthStatus {
    type Output = Result<crate::output::GetInstancesHealthStatusOutput, crate::error::GetInstancesHealthStatusError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::GetInstancesHealthStatusError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InstanceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetInstancesHealthStatusError::InstanceNotFound(err),
                Err(err) => crate::error::GetInstancesHealthStatusError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetInstancesHealthStatusError::InvalidInput(err),
                Err(err) => crate::error::GetInstancesHealthStatusError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetInstancesHealthStatusError::ServiceNotFound(err),
                Err(err) => crate::error::GetInstancesHealthStatusError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::GetInstancesHealthStatusError::generic(meta)
            }
        })
    }
}

/// <p>Gets information about a namespace.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetNamespace;
impl GetNamespace {
    /// The wire name of the operation.
    pub const NAME: &'static str = "GetNamespace";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.GetNamespace";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::GetNamespaceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for GetNamespace {
    type Output = Result<crate::output::GetNamespaceOutput, crate::error::GetNamespaceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::GetNamespaceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetNamespaceError::InvalidInput(err),
                Err(err) => crate::error::GetNamespaceError::unhandled_with_meta(err, meta),
            },
            Some("NamespaceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetNamespaceError::NamespaceNotFound(err),
                Err(err) => crate::error::GetNamespaceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::GetNamespaceError::generic(meta)
            }
        })
    }
}

/// <p>Gets information about any operation that returns an operation ID in the response, such as a <code>CreateService</code> request.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetOperation;
impl GetOperation {
    /// The wire name of the operation.
    pub const NAME: &'static str = "GetOperation";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.GetOperation";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::GetOperationInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for GetOperation {
    type Output = Result<crate::output::GetOperationOutput, crate::error::GetOperationError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::GetOperationError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetOperationError::InvalidInput(err),
                Err(err) => crate::error::GetOperationError::unhandled_with_meta(err, meta),
            },
            Some("OperationNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetOperationError::OperationNotFound(err),
                Err(err) => crate::error::GetOperationError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::GetOperationError::generic(meta)
            }
        })
    }
}

/// <p>Gets the settings for a specified service.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetService;
impl GetService {
    /// The wire name of the operation.
    pub const NAME: &'static str = "GetService";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.GetService";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::GetServiceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for GetService {
    type Output = Result<crate::output::GetServiceOutput, crate::error::GetServiceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::GetServiceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetServiceError::InvalidInput(err),
                Err(err) => crate::error::GetServiceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::GetServiceError::ServiceNotFound(err),
                Err(err) => crate::error::GetServiceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::GetServiceError::generic(meta)
            }
        })
    }
}

/// <p>Lists summary information about the instances that you registered by using a specified service.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct ListInstances;
impl ListInstances {
    /// The wire name of the operation.
    pub const NAME: &'static str = "ListInstances";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.ListInstances";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::ListInstancesInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for ListInstances {
    type Output = Result<crate::output::ListInstancesOutput, crate::error::ListInstancesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::ListInstancesError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListInstancesError::ServiceNotFound(err),
                Err(err) => crate::error::ListInstancesError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListInstancesError::InvalidInput(err),
                Err(err) => crate::error::ListInstancesError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::ListInstancesError::generic(meta)
            }
        })
    }
}

/// <p>Lists summary information about the namespaces that were created by the current account.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct ListNamespaces;
impl ListNamespaces {
    /// The wire name of the operation.
    pub const NAME: &'static str = "ListNamespaces";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.ListNamespaces";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::ListNamespacesInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for ListNamespaces {
    type Output = Result<crate::output::ListNamespacesOutput, crate::error::ListNamespacesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::ListNamespacesError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListNamespacesError::InvalidInput(err),
                Err(err) => crate::error::ListNamespacesError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::ListNamespacesError::generic(meta)
            }
        })
    }
}

/// <p>Lists operations that match the criteria that you specify.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct ListOperations;
impl ListOperations {
    /// The wire name of the operation.
    pub const NAME: &'static str = "ListOperations";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.ListOperations";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::ListOperationsInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for ListOperations {
    type Output = Result<crate::output::ListOperationsOutput, crate::error::ListOperationsError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::ListOperationsError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListOperationsError::InvalidInput(err),
                Err(err) => crate::error::ListOperationsError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::ListOperationsError::generic(meta)
            }
        })
    }
}

/// <p>Lists summary information for all the services that are associated with one or more specified namespaces.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct ListServices;
impl ListServices {
    /// The wire name of the operation.
    pub const NAME: &'static str = "ListServices";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.ListServices";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::ListServicesInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for ListServices {
    type Output = Result<crate::output::ListServicesOutput, crate::error::ListServicesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::ListServicesError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListServicesError::InvalidInput(err),
                Err(err) => crate::error::ListServicesError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::ListServicesError::generic(meta)
            }
        })
    }
}

/// <p>Lists tags for the specified resource.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct ListTagsForResource;
impl ListTagsForResource {
    /// The wire name of the operation.
    pub const NAME: &'static str = "ListTagsForResource";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.ListTagsForResource";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::ListTagsForResourceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for ListTagsForResource {
    type Output = Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::ListTagsForResourceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("ResourceNotFoundException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListTagsForResourceError::ResourceNotFoundException(err),
                Err(err) => crate::error::ListTagsForResourceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::ListTagsForResourceError::InvalidInput(err),
                Err(err) => crate::error::ListTagsForResourceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::ListTagsForResourceError::generic(meta)
            }
        })
    }
}

/// <p>Creates or updates one or more records and, optionally, creates a health check based on the settings in a specified service.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct RegisterInstance;
impl RegisterInstance {
    /// The wire name of the operation.
    pub const NAME: &'static str = "RegisterInstance";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.RegisterInstance";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::RegisterInstanceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let mut input = input.clone();
        if input.creator_request_id.is_none() {
            input.creator_request_id = Some(config.idempotency_token_provider().make_idempotency_token());
        }
        let body = serde_json::to_vec(&input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for RegisterInstance {
    type Output = Result<crate::output::RegisterInstanceOutput, crate::error::RegisterInstanceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::RegisterInstanceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::RegisterInstanceError::DuplicateRequest(err),
                Err(err) => crate::error::RegisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::RegisterInstanceError::InvalidInput(err),
                Err(err) => crate::error::RegisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceInUse") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::RegisterInstanceError::ResourceInUse(err),
                Err(err) => crate::error::RegisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("ResourceLimitExceeded") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::RegisterInstanceError::ResourceLimitExceeded(err),
                Err(err) => crate::error::RegisterInstanceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::RegisterInstanceError::ServiceNotFound(err),
                Err(err) => crate::error::RegisterInstanceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::RegisterInstanceError::generic(meta)
            }
        })
    }
}

/// <p>Adds one or more tags to the specified resource.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct TagResource;
impl TagResource {
    /// The wire name of the operation.
    pub const NAME: &'static str = "TagResource";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.TagResource";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::TagResourceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for TagResource {
    type Output = Result<crate::output::TagResourceOutput, crate::error::TagResourceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::TagResourceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("ResourceNotFoundException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::TagResourceError::ResourceNotFoundException(err),
                Err(err) => crate::error::TagResourceError::unhandled_with_meta(err, meta),
            },
            Some("TooManyTagsException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::TagResourceError::TooManyTagsException(err),
                Err(err) => crate::error::TagResourceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::TagResourceError::InvalidInput(err),
                Err(err) => crate::error::TagResourceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::TagResourceError::generic(meta)
            }
        })
    }
}

/// <p>Removes one or more tags from the specified resource.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct UntagResource;
impl UntagResource {
    /// The wire name of the operation.
    pub const NAME: &'static str = "UntagResource";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.UntagResource";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::UntagResourceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for UntagResource {
    type Output = Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::UntagResourceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("ResourceNotFoundException") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UntagResourceError::ResourceNotFoundException(err),
                Err(err) => crate::error::UntagResourceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UntagResourceError::InvalidInput(err),
                Err(err) => crate::error::UntagResourceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::UntagResourceError::generic(meta)
            }
        })
    }
}

/// <p>Submits a request to change the health status of a custom health check to healthy or unhealthy.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateInstanceCustomHealthStatus;
impl UpdateInstanceCustomHealthStatus {
    /// The wire name of the operation.
    pub const NAME: &'static str = "UpdateInstanceCustomHealthStatus";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.UpdateInstanceCustomHealthStatus";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::UpdateInstanceCustomHealthStatusInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for UpdateInstanceCustomHealthStatus {
    type Output = Result<crate::output::UpdateInstanceCustomHealthStatusOutput, crate::error::UpdateInstanceCustomHealthStatusError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::UpdateInstanceCustomHealthStatusError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("InstanceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateInstanceCustomHealthStatusError::InstanceNotFound(err),
                Err(err) => crate::error::UpdateInstanceCustomHealthStatusError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateInstanceCustomHealthStatusError::ServiceNotFound(err),
                Err(err) => crate::error::UpdateInstanceCustomHealthStatusError::unhandled_with_meta(err, meta),
            },
            Some("CustomHealthNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateInstanceCustomHealthStatusError::CustomHealthNotFound(err),
                Err(err) => crate::error::UpdateInstanceCustomHealthStatusError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateInstanceCustomHealthStatusError::InvalidInput(err),
                Err(err) => crate::error::UpdateInstanceCustomHealthStatusError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::UpdateInstanceCustomHealthStatusError::generic(meta)
            }
        })
    }
}

/// <p>Submits a request to update a specified service: add, update, or delete DNS records and the health check configuration.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateService;
impl UpdateService {
    /// The wire name of the operation.
    pub const NAME: &'static str = "UpdateService";
    /// The value sent in the `x-amz-target` header.
    pub const TARGET: &'static str = "Route53AutoNaming_v20170314.UpdateService";

    /// Creates the operation.
    pub fn new() -> Self {
        Self
    }

    /// Builds the HTTP request for `input` against the endpoint resolved from `config`.
    pub fn build_request(
        input: &crate::input::UpdateServiceInput,
        config: &crate::config::Config,
    ) -> Result<http::Request<Bytes>, BuildRequestError> {
        let body = serde_json::to_vec(input)?;
        aws_json_request(Self::TARGET, body, config)
    }
}
impl ParseStrictResponse for UpdateService {
    type Output = Result<crate::output::UpdateServiceOutput, crate::error::UpdateServiceError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            return parse_body(response.body())
                .map_err(|err| crate::error::UpdateServiceError::unhandled_with_meta(err, success_metadata(response.headers())));
        }
        let meta = parse_error_metadata(response.headers(), response.body()).build();
        let code = meta.code().map(str::to_owned);
        Err(match code.as_deref() {
            Some("DuplicateRequest") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateServiceError::DuplicateRequest(err),
                Err(err) => crate::error::UpdateServiceError::unhandled_with_meta(err, meta),
            },
            Some("InvalidInput") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateServiceError::InvalidInput(err),
                Err(err) => crate::error::UpdateServiceError::unhandled_with_meta(err, meta),
            },
            Some("ServiceNotFound") => match parse_modeled(response.body(), &meta) {
                Ok(err) => crate::error::UpdateServiceError::ServiceNotFound(err),
                Err(err) => crate::error::UpdateServiceError::unhandled_with_meta(err, meta),
            },
            _ => {
                tracing::debug!(operation = Self::NAME, code = ?code, "unmodeled error response");
                crate::error::UpdateServiceError::generic(meta)
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::Region;

    #[test]
    fn empty_bodies_parse_as_empty_objects() {
        let parsed: serde_json::Value = parse_body(b"").unwrap();
        assert_eq!(parsed, serde_json::json!({}));
        let parsed: serde_json::Value = parse_body(b" \n").unwrap();
        assert_eq!(parsed, serde_json::json!({}));
    }

    #[test]
    fn request_targets_the_endpoint_root() {
        let config = Config::builder()
            .endpoint_url("http://localhost:4566/")
            .build();
        let request = aws_json_request("Svc.Op", b"{}".to_vec(), &config).unwrap();
        assert_eq!(request.uri().to_string(), "http://localhost:4566/");
        assert_eq!(request.headers()["content-length"], "2");
        assert_eq!(request.headers()["x-amz-target"], "Svc.Op");
    }

    #[test]
    fn bad_endpoint_is_rejected() {
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .endpoint_url("not a uri")
            .build();
        let err = aws_json_request("Svc.Op", Vec::new(), &config).unwrap_err();
        assert!(matches!(err, BuildRequestError::InvalidEndpoint { .. }), "{:?}", err);
    }
}
