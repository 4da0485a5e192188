/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Response parsing.

use bytes::Bytes;

/// Parse an HTTP response into a response type.
///
/// The response body is fully buffered before parsing: Cloud Map responses are small JSON
/// documents, and none of its operations stream.
///
/// Every operation in [`crate::operation`] implements this trait with
/// `Output = Result<OperationOutput, OperationError>`.
pub trait ParseStrictResponse {
    /// The type returned by this parser.
    type Output;

    /// Parse an [`http::Response<Bytes>`] into `Self::Output`.
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}
