/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client-side configuration: where requests go and how idempotency tokens are made.

use crate::error::BuildRequestError;
use crate::idempotency::IdempotencyTokenProvider;
use aws_types::region::Region;

const REGION_ENV_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];

/// Configuration used to build Cloud Map requests.
#[derive(Clone, Debug, Default)]
pub struct Config {
    region: Option<Region>,
    endpoint_url: Option<String>,
    idempotency_token_provider: IdempotencyTokenProvider,
}

impl Config {
    /// Creates a new [`Builder`].
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region taken from `AWS_REGION` or `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        let mut builder = Builder::default();
        for var in REGION_ENV_VARS {
            match std::env::var(var) {
                Ok(region) if !region.trim().is_empty() => {
                    tracing::debug!(var = *var, region = %region, "loaded region from environment");
                    builder.set_region(Region::new(region));
                    break;
                }
                _ => continue,
            }
        }
        builder.build()
    }

    /// Configured region.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Configured endpoint URL, overriding the regional endpoint.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Provider of `CreatorRequestId` values for requests that leave them unset.
    pub fn idempotency_token_provider(&self) -> &IdempotencyTokenProvider {
        &self.idempotency_token_provider
    }

    /// The endpoint requests are sent to: the configured endpoint URL, or the regional
    /// `https://servicediscovery.{region}.amazonaws.com`.
    pub fn endpoint(&self) -> Result<String, BuildRequestError> {
        let endpoint = match (&self.endpoint_url, &self.region) {
            (Some(url), _) => url.clone(),
            (None, Some(region)) => format!("https://servicediscovery.{}.amazonaws.com", region.as_ref()),
            (None, None) => return Err(BuildRequestError::MissingRegion),
        };
        tracing::trace!(endpoint = %endpoint, "resolved endpoint");
        Ok(endpoint)
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    idempotency_token_provider: Option<IdempotencyTokenProvider>,
}

impl Builder {
    /// Set the region for the builder
    ///
    /// # Examples
    /// ```rust
    /// use servicediscovery::{Config, Region};
    /// let config = Config::builder().region(Region::new("us-east-1")).build();
    /// ```
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region);
        self
    }

    /// Set the region for the builder
    pub fn set_region(&mut self, region: impl Into<Option<Region>>) -> &mut Self {
        self.region = region.into();
        self
    }

    /// Set the endpoint URL, e.g. `http://localhost:4566` for a local emulator.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.set_endpoint_url(Some(endpoint_url.into()));
        self
    }

    /// Set the endpoint URL
    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Set the idempotency token provider. Defaults to [`IdempotencyTokenProvider::random`].
    pub fn idempotency_token_provider(mut self, provider: IdempotencyTokenProvider) -> Self {
        self.set_idempotency_token_provider(Some(provider));
        self
    }

    /// Set the idempotency token provider
    pub fn set_idempotency_token_provider(
        &mut self,
        provider: Option<IdempotencyTokenProvider>,
    ) -> &mut Self {
        self.idempotency_token_provider = provider;
        self
    }

    /// Build a [`Config`].
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
            idempotency_token_provider: self.idempotency_token_provider.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn regional_endpoint() {
        let config = Config::builder().region(Region::new("us-west-2")).build();
        assert_eq!(
            config.endpoint().unwrap(),
            "https://servicediscovery.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn endpoint_url_wins() {
        let config = Config::builder()
            .region(Region::new("us-west-2"))
            .endpoint_url("http://localhost:4566")
            .build();
        assert_eq!(config.endpoint().unwrap(), "http://localhost:4566");
        assert_eq!(config.endpoint_url(), Some("http://localhost:4566"));
    }

    #[test]
    fn no_region_no_endpoint() {
        let config = Config::builder().build();
        assert!(matches!(
            config.endpoint(),
            Err(BuildRequestError::MissingRegion)
        ));
    }

    #[test]
    fn region_can_be_cleared() {
        let mut builder = Config::builder().region(Region::new("eu-west-1"));
        builder.set_region(None::<Region>);
        assert_eq!(builder.build().region(), None);
    }
}
