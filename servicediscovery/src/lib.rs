/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data model and awsJson1.1 protocol shapes for AWS Cloud Map (`servicediscovery`).
//!
//! Every Cloud Map operation has an input in [`input`], an output in [`output`], an error enum in
//! [`error`] and a unit struct in [`operation`] that builds the `http::Request` for an input and
//! parses an `http::Response` into the output or error:
//!
//! ```no_run
//! use servicediscovery::operation::GetInstance;
//! use servicediscovery::response::ParseStrictResponse;
//! use servicediscovery::{Config, Region};
//!
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let input = servicediscovery::input::GetInstanceInput::builder()
//!     .service_id("srv-e4anhexample0004")
//!     .instance_id("i-abcd1234")
//!     .build();
//! let request = GetInstance::build_request(&input, &config).expect("valid request");
//! # let response = http::Response::new(bytes::Bytes::new());
//! // sign and send `request`, then:
//! let output = GetInstance::new().parse(&response);
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod idempotency;
pub mod input;
mod instant_epoch;
mod json_errors;
pub mod model;
pub mod operation;
pub mod output;
mod render;
pub mod response;

pub use aws_types::region::Region;
pub use config::Config;
