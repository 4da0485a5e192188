/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

/// <p>Creates an HTTP namespace. Service instances registered using an HTTP namespace can be discovered using a <code>DiscoverInstances</code> request but can't be discovered using DNS.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CreateHttpNamespaceInput {
    /// <p>The name that you want to assign to this namespace.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
    /// <p>A description for the namespace.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateHttpNamespaceInput {
    /// <p>The name that you want to assign to this namespace.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>A description for the namespace.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Display for CreateHttpNamespaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("CreatorRequestId", &self.creator_request_id)
            .field("Description", &self.description)
            .field("Tags", &self.tags)
            .finish()
    }
}
/// See [`CreateHttpNamespaceInput`](crate::input::CreateHttpNamespaceInput).
pub mod create_http_namespace_input {

    /// A builder for [`CreateHttpNamespaceInput`](crate::input::CreateHttpNamespaceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The name that you want to assign to this namespace.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name that you want to assign to this namespace.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name that you want to assign to this namespace.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// <p>A description for the namespace.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the namespace.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>A description for the namespace.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// Consumes the builder and constructs a [`CreateHttpNamespaceInput`](crate::input::CreateHttpNamespaceInput).
        pub fn build(self) -> crate::input::CreateHttpNamespaceInput {
            crate::input::CreateHttpNamespaceInput {
                name: self.name,
                creator_request_id: self.creator_request_id,
                description: self.description,
                tags: self.tags,
            }
        }
    }
}
impl CreateHttpNamespaceInput {
    /// Creates a new builder-style object to manufacture [`CreateHttpNamespaceInput`](crate::input::CreateHttpNamespaceInput).
    pub fn builder() -> crate::input::create_http_namespace_input::Builder {
        crate::input::create_http_namespace_input::Builder::default()
    }
}

/// <p>Creates a private namespace based on DNS, which is visible only inside a specified Amazon VPC.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CreatePrivateDnsNamespaceInput {
    /// <p>The name that you want to assign to this namespace. When you create a private DNS namespace, Cloud Map automatically creates a Route 53 private hosted zone that has the same name as the namespace.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
    /// <p>A description for the namespace.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The ID of the Amazon VPC that you want to associate the namespace with.</p>
    #[serde(rename = "Vpc", default, skip_serializing_if = "Option::is_none")]
    pub vpc: std::option::Option<std::string::String>,
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreatePrivateDnsNamespaceInput {
    /// <p>The name that you want to assign to this namespace. When you create a private DNS namespace, Cloud Map automatically creates a Route 53 private hosted zone that has the same name as the namespace.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>A description for the namespace.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The ID of the Amazon VPC that you want to associate the namespace with.</p>
    pub fn vpc(&self) -> std::option::Option<&str> {
        self.vpc.as_deref()
    }
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Display for CreatePrivateDnsNamespaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("CreatorRequestId", &self.creator_request_id)
            .field("Description", &self.description)
            .field("Vpc", &self.vpc)
            .field("Tags", &self.tags)
            .finish()
    }
}
/// See [`CreatePrivateDnsNamespaceInput`](crate::input::CreatePrivateDnsNamespaceInput).
pub mod create_private_dns_namespace_input {

    /// A builder for [`CreatePrivateDnsNamespaceInput`](crate::input::CreatePrivateDnsNamespaceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) vpc: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The name that you want to assign to this namespace. When you create a private DNS namespace, Cloud Map automatically creates a Route 53 private hosted zone that has the same name as the namespace.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name that you want to assign to this namespace. When you create a private DNS namespace, Cloud Map automatically creates a Route 53 private hosted zone that has the same name as the namespace.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name that you want to assign to this namespace. When you create a private DNS namespace, Cloud Map automatically creates a Route 53 private hosted zone that has the same name as the namespace.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// <p>A description for the namespace.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the namespace.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>A description for the namespace.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// <p>The ID of the Amazon VPC that you want to associate the namespace with.</p>
        pub fn vpc(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc = Some(input.into());
            self
        }
        /// <p>The ID of the Amazon VPC that you want to associate the namespace with.</p>
        pub fn set_vpc(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc = input;
            self
        }
        /// <p>The ID of the Amazon VPC that you want to associate the namespace with.</p>
        pub fn get_vpc(&self) -> &std::option::Option<std::string::String> {
            &self.vpc
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// Consumes the builder and constructs a [`CreatePrivateDnsNamespaceInput`](crate::input::CreatePrivateDnsNamespaceInput).
        pub fn build(self) -> crate::input::CreatePrivateDnsNamespaceInput {
            crate::input::CreatePrivateDnsNamespaceInput {
                name: self.name,
                creator_request_id: self.creator_request_id,
                description: self.description,
                vpc: self.vpc,
                tags: self.tags,
            }
        }
    }
}
impl CreatePrivateDnsNamespaceInput {
    /// Creates a new builder-style object to manufacture [`CreatePrivateDnsNamespaceInput`](crate::input::CreatePrivateDnsNamespaceInput).
    pub fn builder() -> crate::input::create_private_dns_namespace_input::Builder {
        crate::input::create_private_dns_namespace_input::Builder::default()
    }
}

/// <p>Creates a public namespace based on DNS, which is visible on the internet.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CreatePublicDnsNamespaceInput {
    /// <p>The name that you want to assign to this namespace.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
    /// <p>A description for the namespace.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreatePublicDnsNamespaceInput {
    /// <p>The name that you want to assign to this namespace.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>A description for the namespace.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Display for CreatePublicDnsNamespaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("CreatorRequestId", &self.creator_request_id)
            .field("Description", &self.description)
            .field("Tags", &self.tags)
            .finish()
    }
}
/// See [`CreatePublicDnsNamespaceInput`](crate::input::CreatePublicDnsNamespaceInput).
pub mod create_public_dns_namespace_input {

    /// A builder for [`CreatePublicDnsNamespaceInput`](crate::input::CreatePublicDnsNamespaceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The name that you want to assign to this namespace.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name that you want to assign to this namespace.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name that you want to assign to this namespace.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// <p>A description for the namespace.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the namespace.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>A description for the namespace.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// Consumes the builder and constructs a [`CreatePublicDnsNamespaceInput`](crate::input::CreatePublicDnsNamespaceInput).
        pub fn build(self) -> crate::input::CreatePublicDnsNamespaceInput {
            crate::input::CreatePublicDnsNamespaceInput {
                name: self.name,
                creator_request_id: self.creator_request_id,
                description: self.description,
                tags: self.tags,
            }
        }
    }
}
impl CreatePublicDnsNamespaceInput {
    /// Creates a new builder-style object to manufacture [`CreatePublicDnsNamespaceInput`](crate::input::CreatePublicDnsNamespaceInput).
    pub fn builder() -> crate::input::create_public_dns_namespace_input::Builder {
        crate::input::create_public_dns_namespace_input::Builder::default()
    }
}

/// <p>Creates a service, which defines the configuration for the DNS records and optional health checks that Cloud Map creates when instances are registered.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CreateServiceInput {
    /// <p>The name that you want to assign to the service.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>The ID of the namespace that you want to use to create the service.</p>
    #[serde(rename = "NamespaceId", default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: std::option::Option<std::string::String>,
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
    /// <p>A description for the service.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    #[serde(rename = "DnsConfig", default, skip_serializing_if = "Option::is_none")]
    pub dns_config: std::option::Option<crate::model::DnsConfig>,
    /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains the settings for an optional Route 53 health check.</p>
    #[serde(rename = "HealthCheckConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
    /// <p>A complex type that contains information about an optional custom health check.</p>
    #[serde(rename = "HealthCheckCustomConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_custom_config: std::option::Option<crate::model::HealthCheckCustomConfig>,
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateServiceInput {
    /// <p>The name that you want to assign to the service.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The ID of the namespace that you want to use to create the service.</p>
    pub fn namespace_id(&self) -> std::option::Option<&str> {
        self.namespace_id.as_deref()
    }
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>A description for the service.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    pub fn dns_config(&self) -> std::option::Option<&crate::model::DnsConfig> {
        self.dns_config.as_ref()
    }
    /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains the settings for an optional Route 53 health check.</p>
    pub fn health_check_config(&self) -> std::option::Option<&crate::model::HealthCheckConfig> {
        self.health_check_config.as_ref()
    }
    /// <p>A complex type that contains information about an optional custom health check.</p>
    pub fn health_check_custom_config(&self) -> std::option::Option<&crate::model::HealthCheckCustomConfig> {
        self.health_check_custom_config.as_ref()
    }
    /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Display for CreateServiceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("NamespaceId", &self.namespace_id)
            .field("CreatorRequestId", &self.creator_request_id)
            .field("Description", &self.description)
            .field("DnsConfig", &self.dns_config)
            .field("HealthCheckConfig", &self.health_check_config)
            .field("HealthCheckCustomConfig", &self.health_check_custom_config)
            .field("Tags", &self.tags)
            .finish()
    }
}
/// See [`CreateServiceInput`](crate::input::CreateServiceInput).
pub mod create_service_input {

    /// A builder for [`CreateServiceInput`](crate::input::CreateServiceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) namespace_id: std::option::Option<std::string::String>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) dns_config: std::option::Option<crate::model::DnsConfig>,
        pub(crate) health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
        pub(crate) health_check_custom_config: std::option::Option<crate::model::HealthCheckCustomConfig>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The name that you want to assign to the service.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name that you want to assign to the service.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name that you want to assign to the service.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The ID of the namespace that you want to use to create the service.</p>
        pub fn namespace_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.namespace_id = Some(input.into());
            self
        }
        /// <p>The ID of the namespace that you want to use to create the service.</p>
        pub fn set_namespace_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.namespace_id = input;
            self
        }
        /// <p>The ID of the namespace that you want to use to create the service.</p>
        pub fn get_namespace_id(&self) -> &std::option::Option<std::string::String> {
            &self.namespace_id
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// <p>A description for the service.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>A description for the service.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>A description for the service.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn dns_config(mut self, input: crate::model::DnsConfig) -> Self {
            self.dns_config = Some(input);
            self
        }
        /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn set_dns_config(mut self, input: std::option::Option<crate::model::DnsConfig>) -> Self {
            self.dns_config = input;
            self
        }
        /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn get_dns_config(&self) -> &std::option::Option<crate::model::DnsConfig> {
            &self.dns_config
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains the settings for an optional Route 53 health check.</p>
        pub fn health_check_config(mut self, input: crate::model::HealthCheckConfig) -> Self {
            self.health_check_config = Some(input);
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains the settings for an optional Route 53 health check.</p>
        pub fn set_health_check_config(mut self, input: std::option::Option<crate::model::HealthCheckConfig>) -> Self {
            self.health_check_config = input;
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains the settings for an optional Route 53 health check.</p>
        pub fn get_health_check_config(&self) -> &std::option::Option<crate::model::HealthCheckConfig> {
            &self.health_check_config
        }
        /// <p>A complex type that contains information about an optional custom health check.</p>
        pub fn health_check_custom_config(mut self, input: crate::model::HealthCheckCustomConfig) -> Self {
            self.health_check_custom_config = Some(input);
            self
        }
        /// <p>A complex type that contains information about an optional custom health check.</p>
        pub fn set_health_check_custom_config(mut self, input: std::option::Option<crate::model::HealthCheckCustomConfig>) -> Self {
            self.health_check_custom_config = input;
            self
        }
        /// <p>A complex type that contains information about an optional custom health check.</p>
        pub fn get_health_check_custom_config(&self) -> &std::option::Option<crate::model::HealthCheckCustomConfig> {
            &self.health_check_custom_config
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>The tags to add to the resource. Each tag consists of a key and an optional value, both of which you define.</p>
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// Consumes the builder and constructs a [`CreateServiceInput`](crate::input::CreateServiceInput).
        pub fn build(self) -> crate::input::CreateServiceInput {
            crate::input::CreateServiceInput {
                name: self.name,
                namespace_id: self.namespace_id,
                creator_request_id: self.creator_request_id,
                description: self.description,
                dns_config: self.dns_config,
                health_check_config: self.health_check_config,
                health_check_custom_config: self.health_check_custom_config,
                tags: self.tags,
            }
        }
    }
}
impl CreateServiceInput {
    /// Creates a new builder-style object to manufacture [`CreateServiceInput`](crate::input::CreateServiceInput).
    pub fn builder() -> crate::input::create_service_input::Builder {
        crate::input::create_service_input::Builder::default()
    }
}

/// <p>Deletes a namespace from the current account. If the namespace still contains one or more services, the request fails.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DeleteNamespaceInput {
    /// <p>The ID of the namespace that you want to delete.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
}
impl DeleteNamespaceInput {
    /// <p>The ID of the namespace that you want to delete.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
}
impl std::fmt::Display for DeleteNamespaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .finish()
    }
}
/// See [`DeleteNamespaceInput`](crate::input::DeleteNamespaceInput).
pub mod delete_namespace_input {

    /// A builder for [`DeleteNamespaceInput`](crate::input::DeleteNamespaceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the namespace that you want to delete.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the namespace that you want to delete.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the namespace that you want to delete.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// Consumes the builder and constructs a [`DeleteNamespaceInput`](crate::input::DeleteNamespaceInput).
        pub fn build(self) -> crate::input::DeleteNamespaceInput {
            crate::input::DeleteNamespaceInput {
                id: self.id,
            }
        }
    }
}
impl DeleteNamespaceInput {
    /// Creates a new builder-style object to manufacture [`DeleteNamespaceInput`](crate::input::DeleteNamespaceInput).
    pub fn builder() -> crate::input::delete_namespace_input::Builder {
        crate::input::delete_namespace_input::Builder::default()
    }
}

/// <p>Deletes a specified service. If the service still contains one or more registered instances, the request fails.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DeleteServiceInput {
    /// <p>The ID of the service that you want to delete.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
}
impl DeleteServiceInput {
    /// <p>The ID of the service that you want to delete.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
}
impl std::fmt::Display for DeleteServiceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .finish()
    }
}
/// See [`DeleteServiceInput`](crate::input::DeleteServiceInput).
pub mod delete_service_input {

    /// A builder for [`DeleteServiceInput`](crate::input::DeleteServiceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the service that you want to delete.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the service that you want to delete.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the service that you want to delete.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// Consumes the builder and constructs a [`DeleteServiceInput`](crate::input::DeleteServiceInput).
        pub fn build(self) -> crate::input::DeleteServiceInput {
            crate::input::DeleteServiceInput {
                id: self.id,
            }
        }
    }
}
impl DeleteServiceInput {
    /// Creates a new builder-style object to manufacture [`DeleteServiceInput`](crate::input::DeleteServiceInput).
    pub fn builder() -> crate::input::delete_service_input::Builder {
        crate::input::delete_service_input::Builder::default()
    }
}

/// <p>Deletes the Route 53 DNS record and health check, if any, that Cloud Map created for the specified instance.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DeregisterInstanceInput {
    /// <p>The ID of the service that the instance is associated with.</p>
    #[serde(rename = "ServiceId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: std::option::Option<std::string::String>,
    /// <p>The value that you specified for <code>Id</code> in the <code>RegisterInstance</code> request.</p>
    #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,
}
impl DeregisterInstanceInput {
    /// <p>The ID of the service that the instance is associated with.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>The value that you specified for <code>Id</code> in the <code>RegisterInstance</code> request.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }
}
impl std::fmt::Display for DeregisterInstanceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ServiceId", &self.service_id)
            .field("InstanceId", &self.instance_id)
            .finish()
    }
}
/// See [`DeregisterInstanceInput`](crate::input::DeregisterInstanceInput).
pub mod deregister_instance_input {

    /// A builder for [`DeregisterInstanceInput`](crate::input::DeregisterInstanceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service_id: std::option::Option<std::string::String>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn get_service_id(&self) -> &std::option::Option<std::string::String> {
            &self.service_id
        }
        /// <p>The value that you specified for <code>Id</code> in the <code>RegisterInstance</code> request.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The value that you specified for <code>Id</code> in the <code>RegisterInstance</code> request.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }
        /// <p>The value that you specified for <code>Id</code> in the <code>RegisterInstance</code> request.</p>
        pub fn get_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_id
        }
        /// Consumes the builder and constructs a [`DeregisterInstanceInput`](crate::input::DeregisterInstanceInput).
        pub fn build(self) -> crate::input::DeregisterInstanceInput {
            crate::input::DeregisterInstanceInput {
                service_id: self.service_id,
                instance_id: self.instance_id,
            }
        }
    }
}
impl DeregisterInstanceInput {
    /// Creates a new builder-style object to manufacture [`DeregisterInstanceInput`](crate::input::DeregisterInstanceInput).
    pub fn builder() -> crate::input::deregister_instance_input::Builder {
        crate::input::deregister_instance_input::Builder::default()
    }
}

/// <p>Discovers registered instances for a specified namespace and service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct DiscoverInstancesInput {
    /// <p>The name of the namespace that you specified when you registered the instance.</p>
    #[serde(rename = "NamespaceName", default, skip_serializing_if = "Option::is_none")]
    pub namespace_name: std::option::Option<std::string::String>,
    /// <p>The name of the service that you specified when you registered the instance.</p>
    #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
    pub service_name: std::option::Option<std::string::String>,
    /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>DiscoverInstances</code> request.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: std::option::Option<i32>,
    /// <p>Filters to scope the results based on custom attributes for the instance. Only instances that match all the specified key-value pairs are returned.</p>
    #[serde(rename = "QueryParameters", default, skip_serializing_if = "Option::is_none")]
    pub query_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    /// <p>The health status of the instances that you want to discover.</p>
    #[serde(rename = "HealthStatus", default, skip_serializing_if = "Option::is_none")]
    pub health_status: std::option::Option<crate::model::HealthStatusFilter>,
}
impl DiscoverInstancesInput {
    /// <p>The name of the namespace that you specified when you registered the instance.</p>
    pub fn namespace_name(&self) -> std::option::Option<&str> {
        self.namespace_name.as_deref()
    }
    /// <p>The name of the service that you specified when you registered the instance.</p>
    pub fn service_name(&self) -> std::option::Option<&str> {
        self.service_name.as_deref()
    }
    /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>DiscoverInstances</code> request.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
    /// <p>Filters to scope the results based on custom attributes for the instance. Only instances that match all the specified key-value pairs are returned.</p>
    pub fn query_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.query_parameters.as_ref()
    }
    /// <p>The health status of the instances that you want to discover.</p>
    pub fn health_status(&self) -> std::option::Option<&crate::model::HealthStatusFilter> {
        self.health_status.as_ref()
    }
}
impl std::fmt::Display for DiscoverInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("NamespaceName", &self.namespace_name)
            .field("ServiceName", &self.service_name)
            .field("MaxResults", &self.max_results)
            .field("QueryParameters", &self.query_parameters)
            .field("HealthStatus", &self.health_status)
            .finish()
    }
}
/// See [`DiscoverInstancesInput`](crate::input::DiscoverInstancesInput).
pub mod discover_instances_input {

    /// A builder for [`DiscoverInstancesInput`](crate::input::DiscoverInstancesInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) namespace_name: std::option::Option<std::string::String>,
        pub(crate) service_name: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) query_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        pub(crate) health_status: std::option::Option<crate::model::HealthStatusFilter>,
    }
    impl Builder {
        /// <p>The name of the namespace that you specified when you registered the instance.</p>
        pub fn namespace_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.namespace_name = Some(input.into());
            self
        }
        /// <p>The name of the namespace that you specified when you registered the instance.</p>
        pub fn set_namespace_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.namespace_name = input;
            self
        }
        /// <p>The name of the namespace that you specified when you registered the instance.</p>
        pub fn get_namespace_name(&self) -> &std::option::Option<std::string::String> {
            &self.namespace_name
        }
        /// <p>The name of the service that you specified when you registered the instance.</p>
        pub fn service_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_name = Some(input.into());
            self
        }
        /// <p>The name of the service that you specified when you registered the instance.</p>
        pub fn set_service_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_name = input;
            self
        }
        /// <p>The name of the service that you specified when you registered the instance.</p>
        pub fn get_service_name(&self) -> &std::option::Option<std::string::String> {
            &self.service_name
        }
        /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>DiscoverInstances</code> request.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>DiscoverInstances</code> request.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>DiscoverInstances</code> request.</p>
        pub fn get_max_results(&self) -> &std::option::Option<i32> {
            &self.max_results
        }
        /// Adds a key-value pair to `query_parameters`.
        ///
        /// To override the contents of this collection use [`set_query_parameters`](Self::set_query_parameters).
        ///
        /// <p>Filters to scope the results based on custom attributes for the instance. Only instances that match all the specified key-value pairs are returned.</p>
        pub fn query_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.query_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.query_parameters = Some(hash_map);
            self
        }
        /// <p>Filters to scope the results based on custom attributes for the instance. Only instances that match all the specified key-value pairs are returned.</p>
        pub fn set_query_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.query_parameters = input;
            self
        }
        /// <p>Filters to scope the results based on custom attributes for the instance. Only instances that match all the specified key-value pairs are returned.</p>
        pub fn get_query_parameters(&self) -> &std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>> {
            &self.query_parameters
        }
        /// <p>The health status of the instances that you want to discover.</p>
        pub fn health_status(mut self, input: crate::model::HealthStatusFilter) -> Self {
            self.health_status = Some(input);
            self
        }
        /// <p>The health status of the instances that you want to discover.</p>
        pub fn set_health_status(mut self, input: std::option::Option<crate::model::HealthStatusFilter>) -> Self {
            self.health_status = input;
            self
        }
        /// <p>The health status of the instances that you want to discover.</p>
        pub fn get_health_status(&self) -> &std::option::Option<crate::model::HealthStatusFilter> {
            &self.health_status
        }
        /// Consumes the builder and constructs a [`DiscoverInstancesInput`](crate::input::DiscoverInstancesInput).
        pub fn build(self) -> crate::input::DiscoverInstancesInput {
            crate::input::DiscoverInstancesInput {
                namespace_name: self.namespace_name,
                service_name: self.service_name,
                max_results: self.max_results,
                query_parameters: self.query_parameters,
                health_status: self.health_status,
            }
        }
    }
}
impl DiscoverInstancesInput {
    /// Creates a new builder-style object to manufacture [`DiscoverInstancesInput`](crate::input::DiscoverInstancesInput).
    pub fn builder() -> crate::input::discover_instances_input::Builder {
        crate::input::discover_instances_input::Builder::default()
    }
}

/// <p>Gets information about a specified instance.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GetInstanceInput {
    /// <p>The ID of the service that the instance is associated with.</p>
    #[serde(rename = "ServiceId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: std::option::Option<std::string::String>,
    /// <p>The ID of the instance that you want to get information about.</p>
    #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,
}
impl GetInstanceInput {
    /// <p>The ID of the service that the instance is associated with.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>The ID of the instance that you want to get information about.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }
}
impl std::fmt::Display for GetInstanceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ServiceId", &self.service_id)
            .field("InstanceId", &self.instance_id)
            .finish()
    }
}
/// See [`GetInstanceInput`](crate::input::GetInstanceInput).
pub mod get_instance_input {

    /// A builder for [`GetInstanceInput`](crate::input::GetInstanceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service_id: std::option::Option<std::string::String>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn get_service_id(&self) -> &std::option::Option<std::string::String> {
            &self.service_id
        }
        /// <p>The ID of the instance that you want to get information about.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The ID of the instance that you want to get information about.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }
        /// <p>The ID of the instance that you want to get information about.</p>
        pub fn get_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_id
        }
        /// Consumes the builder and constructs a [`GetInstanceInput`](crate::input::GetInstanceInput).
        pub fn build(self) -> crate::input::GetInstanceInput {
            crate::input::GetInstanceInput {
                service_id: self.service_id,
                instance_id: self.instance_id,
            }
        }
    }
}
impl GetInstanceInput {
    /// Creates a new builder-style object to manufacture [`GetInstanceInput`](crate::input::GetInstanceInput).
    pub fn builder() -> crate::input::get_instance_input::Builder {
        crate::input::get_instance_input::Builder::default()
    }
}

/// <p>Gets the current health status (<code>Healthy</code>, <code>Unhealthy</code>, or <code>Unknown</code>) of one or more instances that are associated with a specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GetInstancesHealthStatusInput {
    /// <p>The ID of the service that the instance is associated with.</p>
    #[serde(rename = "ServiceId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: std::option::Option<std::string::String>,
    /// <p>An array that contains the IDs of all the instances that you want to get the health status for. If you omit <code>Instances</code>, Cloud Map returns the health status for all the instances that are associated with the specified service.</p>
    #[serde(rename = "Instances", default, skip_serializing_if = "Option::is_none")]
    pub instances: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>GetInstancesHealthStatus</code> request.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: std::option::Option<i32>,
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl GetInstancesHealthStatusInput {
    /// <p>The ID of the service that the instance is associated with.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>An array that contains the IDs of all the instances that you want to get the health status for. If you omit <code>Instances</code>, Cloud Map returns the health status for all the instances that are associated with the specified service.</p>
    pub fn instances(&self) -> std::option::Option<&[std::string::String]> {
        self.instances.as_deref()
    }
    /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>GetInstancesHealthStatus</code> request.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Display for GetInstancesHealthStatusInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ServiceId", &self.service_id)
            .field("Instances", &self.instances)
            .field("MaxResults", &self.max_results)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
/// See [`GetInstancesHealthStatusInput`](crate::input::GetInstancesHealthStatusInput).
pub mod get_instances_health_status_input {

    /// A builder for [`GetInstancesHealthStatusInput`](crate::input::GetInstancesHealthStatusInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service_id: std::option::Option<std::string::String>,
        pub(crate) instances: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// <p>The ID of the service that the instance is associated with.</p>
        pub fn get_service_id(&self) -> &std::option::Option<std::string::String> {
            &self.service_id
        }
        /// Appends an item to `instances`.
        ///
        /// To override the contents of this collection use [`set_instances`](Self::set_instances).
        ///
        /// <p>An array that contains the IDs of all the instances that you want to get the health status for. If you omit <code>Instances</code>, Cloud Map returns the health status for all the instances that are associated with the specified service.</p>
        pub fn instances(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.instances.unwrap_or_default();
            v.push(input.into());
            self.instances = Some(v);
            self
        }
        /// <p>An array that contains the IDs of all the instances that you want to get the health status for. If you omit <code>Instances</code>, Cloud Map returns the health status for all the instances that are associated with the specified service.</p>
        pub fn set_instances(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.instances = input;
            self
        }
        /// <p>An array that contains the IDs of all the instances that you want to get the health status for. If you omit <code>Instances</code>, Cloud Map returns the health status for all the instances that are associated with the specified service.</p>
        pub fn get_instances(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.instances
        }
        /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>GetInstancesHealthStatus</code> request.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>GetInstancesHealthStatus</code> request.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// <p>The maximum number of instances that you want Cloud Map to return in the response to a <code>GetInstancesHealthStatus</code> request.</p>
        pub fn get_max_results(&self) -> &std::option::Option<i32> {
            &self.max_results
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`GetInstancesHealthStatusInput`](crate::input::GetInstancesHealthStatusInput).
        pub fn build(self) -> crate::input::GetInstancesHealthStatusInput {
            crate::input::GetInstancesHealthStatusInput {
                service_id: self.service_id,
                instances: self.instances,
                max_results: self.max_results,
                next_token: self.next_token,
            }
        }
    }
}
impl GetInstancesHealthStatusInput {
    /// Creates a new builder-style object to manufacture [`GetInstancesHealthStatusInput`](crate::input::GetInstancesHealthStatusInput).
    pub fn builder() -> crate::input::get_instances_health_status_input::Builder {
        crate::input::get_instances_health_status_input::Builder::default()
    }
}

/// <p>Gets information about a namespace.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GetNamespaceInput {
    /// <p>The ID of the namespace that you want to get information about.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
}
impl GetNamespaceInput {
    /// <p>The ID of the namespace that you want to get information about.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
}
impl std::fmt::Display for GetNamespaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .finish()
    }
}
/// See [`GetNamespaceInput`](crate::input::GetNamespaceInput).
pub mod get_namespace_input {

    /// A builder for [`GetNamespaceInput`](crate::input::GetNamespaceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the namespace that you want to get information about.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the namespace that you want to get information about.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the namespace that you want to get information about.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// Consumes the builder and constructs a [`GetNamespaceInput`](crate::input::GetNamespaceInput).
        pub fn build(self) -> crate::input::GetNamespaceInput {
            crate::input::GetNamespaceInput {
                id: self.id,
            }
        }
    }
}
impl GetNamespaceInput {
    /// Creates a new builder-style object to manufacture [`GetNamespaceInput`](crate::input::GetNamespaceInput).
    pub fn builder() -> crate::input::get_namespace_input::Builder {
        crate::input::get_namespace_input::Builder::default()
    }
}

/// <p>Gets information about any operation that returns an operation ID in the response, such as a <code>CreateService</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GetOperationInput {
    /// <p>The ID of the operation that you want to get more information about.</p>
    #[serde(rename = "OperationId", default, skip_serializing_if = "Option::is_none")]
    pub operation_id: std::option::Option<std::string::String>,
}
impl GetOperationInput {
    /// <p>The ID of the operation that you want to get more information about.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for GetOperationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`GetOperationInput`](crate::input::GetOperationInput).
pub mod get_operation_input {

    /// A builder for [`GetOperationInput`](crate::input::GetOperationInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the operation that you want to get more information about.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>The ID of the operation that you want to get more information about.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>The ID of the operation that you want to get more information about.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`GetOperationInput`](crate::input::GetOperationInput).
        pub fn build(self) -> crate::input::GetOperationInput {
            crate::input::GetOperationInput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl GetOperationInput {
    /// Creates a new builder-style object to manufacture [`GetOperationInput`](crate::input::GetOperationInput).
    pub fn builder() -> crate::input::get_operation_input::Builder {
        crate::input::get_operation_input::Builder::default()
    }
}

/// <p>Gets the settings for a specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GetServiceInput {
    /// <p>The ID of the service that you want to get settings for.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
}
impl GetServiceInput {
    /// <p>The ID of the service that you want to get settings for.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
}
impl std::fmt::Display for GetServiceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .finish()
    }
}
/// See [`GetServiceInput`](crate::input::GetServiceInput).
pub mod get_service_input {

    /// A builder for [`GetServiceInput`](crate::input::GetServiceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of the service that you want to get settings for.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the service that you want to get settings for.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the service that you want to get settings for.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// Consumes the builder and constructs a [`GetServiceInput`](crate::input::GetServiceInput).
        pub fn build(self) -> crate::input::GetServiceInput {
            crate::input::GetServiceInput {
                id: self.id,
            }
        }
    }
}
impl GetServiceInput {
    /// Creates a new builder-style object to manufacture [`GetServiceInput`](crate::input::GetServiceInput).
    pub fn builder() -> crate::input::get_service_input::Builder {
        crate::input::get_service_input::Builder::default()
    }
}

/// <p>Lists summary information about the instances that you registered by using a specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListInstancesInput {
    /// <p>The ID of the service that you want to list instances for.</p>
    #[serde(rename = "ServiceId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: std::option::Option<std::string::String>,
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: std::option::Option<i32>,
}
impl ListInstancesInput {
    /// <p>The ID of the service that you want to list instances for.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
impl std::fmt::Display for ListInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ServiceId", &self.service_id)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .finish()
    }
}
/// See [`ListInstancesInput`](crate::input::ListInstancesInput).
pub mod list_instances_input {

    /// A builder for [`ListInstancesInput`](crate::input::ListInstancesInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service_id: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The ID of the service that you want to list instances for.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the service that you want to list instances for.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// <p>The ID of the service that you want to list instances for.</p>
        pub fn get_service_id(&self) -> &std::option::Option<std::string::String> {
            &self.service_id
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn get_max_results(&self) -> &std::option::Option<i32> {
            &self.max_results
        }
        /// Consumes the builder and constructs a [`ListInstancesInput`](crate::input::ListInstancesInput).
        pub fn build(self) -> crate::input::ListInstancesInput {
            crate::input::ListInstancesInput {
                service_id: self.service_id,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListInstancesInput {
    /// Creates a new builder-style object to manufacture [`ListInstancesInput`](crate::input::ListInstancesInput).
    pub fn builder() -> crate::input::list_instances_input::Builder {
        crate::input::list_instances_input::Builder::default()
    }
}

/// <p>Lists summary information about the namespaces that were created by the current account.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListNamespacesInput {
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: std::option::Option<i32>,
    /// <p>A complex type that contains specifications for the namespaces that you want to list.</p>
    #[serde(rename = "Filters", default, skip_serializing_if = "Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::NamespaceFilter>>,
}
impl ListNamespacesInput {
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
    /// <p>A complex type that contains specifications for the namespaces that you want to list.</p>
    pub fn filters(&self) -> std::option::Option<&[crate::model::NamespaceFilter]> {
        self.filters.as_deref()
    }
}
impl std::fmt::Display for ListNamespacesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .field("Filters", &self.filters)
            .finish()
    }
}
/// See [`ListNamespacesInput`](crate::input::ListNamespacesInput).
pub mod list_namespaces_input {

    /// A builder for [`ListNamespacesInput`](crate::input::ListNamespacesInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::NamespaceFilter>>,
    }
    impl Builder {
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn get_max_results(&self) -> &std::option::Option<i32> {
            &self.max_results
        }
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>A complex type that contains specifications for the namespaces that you want to list.</p>
        pub fn filters(mut self, input: crate::model::NamespaceFilter) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input);
            self.filters = Some(v);
            self
        }
        /// <p>A complex type that contains specifications for the namespaces that you want to list.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::NamespaceFilter>>) -> Self {
            self.filters = input;
            self
        }
        /// <p>A complex type that contains specifications for the namespaces that you want to list.</p>
        pub fn get_filters(&self) -> &std::option::Option<std::vec::Vec<crate::model::NamespaceFilter>> {
            &self.filters
        }
        /// Consumes the builder and constructs a [`ListNamespacesInput`](crate::input::ListNamespacesInput).
        pub fn build(self) -> crate::input::ListNamespacesInput {
            crate::input::ListNamespacesInput {
                next_token: self.next_token,
                max_results: self.max_results,
                filters: self.filters,
            }
        }
    }
}
impl ListNamespacesInput {
    /// Creates a new builder-style object to manufacture [`ListNamespacesInput`](crate::input::ListNamespacesInput).
    pub fn builder() -> crate::input::list_namespaces_input::Builder {
        crate::input::list_namespaces_input::Builder::default()
    }
}

/// <p>Lists operations that match the criteria that you specify.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListOperationsInput {
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: std::option::Option<i32>,
    /// <p>A complex type that contains specifications for the operations that you want to list, for example, operations that you started between a specified start date and end date.</p>
    #[serde(rename = "Filters", default, skip_serializing_if = "Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::OperationFilter>>,
}
impl ListOperationsInput {
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
    /// <p>A complex type that contains specifications for the operations that you want to list, for example, operations that you started between a specified start date and end date.</p>
    pub fn filters(&self) -> std::option::Option<&[crate::model::OperationFilter]> {
        self.filters.as_deref()
    }
}
impl std::fmt::Display for ListOperationsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .field("Filters", &self.filters)
            .finish()
    }
}
/// See [`ListOperationsInput`](crate::input::ListOperationsInput).
pub mod list_operations_input {

    /// A builder for [`ListOperationsInput`](crate::input::ListOperationsInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::OperationFilter>>,
    }
    impl Builder {
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn get_max_results(&self) -> &std::option::Option<i32> {
            &self.max_results
        }
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>A complex type that contains specifications for the operations that you want to list, for example, operations that you started between a specified start date and end date.</p>
        pub fn filters(mut self, input: crate::model::OperationFilter) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input);
            self.filters = Some(v);
            self
        }
        /// <p>A complex type that contains specifications for the operations that you want to list, for example, operations that you started between a specified start date and end date.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::OperationFilter>>) -> Self {
            self.filters = input;
            self
        }
        /// <p>A complex type that contains specifications for the operations that you want to list, for example, operations that you started between a specified start date and end date.</p>
        pub fn get_filters(&self) -> &std::option::Option<std::vec::Vec<crate::model::OperationFilter>> {
            &self.filters
        }
        /// Consumes the builder and constructs a [`ListOperationsInput`](crate::input::ListOperationsInput).
        pub fn build(self) -> crate::input::ListOperationsInput {
            crate::input::ListOperationsInput {
                next_token: self.next_token,
                max_results: self.max_results,
                filters: self.filters,
            }
        }
    }
}
impl ListOperationsInput {
    /// Creates a new builder-style object to manufacture [`ListOperationsInput`](crate::input::ListOperationsInput).
    pub fn builder() -> crate::input::list_operations_input::Builder {
        crate::input::list_operations_input::Builder::default()
    }
}

/// <p>Lists summary information for all the services that are associated with one or more specified namespaces.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListServicesInput {
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: std::option::Option<i32>,
    /// <p>A complex type that contains specifications for the namespaces that you want to list services for.</p>
    #[serde(rename = "Filters", default, skip_serializing_if = "Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::ServiceFilter>>,
}
impl ListServicesInput {
    /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
    /// <p>The maximum number of results that you want the service to return in the response.</p>
    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
    /// <p>A complex type that contains specifications for the namespaces that you want to list services for.</p>
    pub fn filters(&self) -> std::option::Option<&[crate::model::ServiceFilter]> {
        self.filters.as_deref()
    }
}
impl std::fmt::Display for ListServicesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .field("Filters", &self.filters)
            .finish()
    }
}
/// See [`ListServicesInput`](crate::input::ListServicesInput).
pub mod list_services_input {

    /// A builder for [`ListServicesInput`](crate::input::ListServicesInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filters: std::option::Option<std::vec::Vec<crate::model::ServiceFilter>>,
    }
    impl Builder {
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>The token to use to get the next group of results. It is returned by the previous response when there are more results than <code>MaxResults</code>.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// <p>The maximum number of results that you want the service to return in the response.</p>
        pub fn get_max_results(&self) -> &std::option::Option<i32> {
            &self.max_results
        }
        /// Appends an item to `filters`.
        ///
        /// To override the contents of this collection use [`set_filters`](Self::set_filters).
        ///
        /// <p>A complex type that contains specifications for the namespaces that you want to list services for.</p>
        pub fn filters(mut self, input: crate::model::ServiceFilter) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(input);
            self.filters = Some(v);
            self
        }
        /// <p>A complex type that contains specifications for the namespaces that you want to list services for.</p>
        pub fn set_filters(mut self, input: std::option::Option<std::vec::Vec<crate::model::ServiceFilter>>) -> Self {
            self.filters = input;
            self
        }
        /// <p>A complex type that contains specifications for the namespaces that you want to list services for.</p>
        pub fn get_filters(&self) -> &std::option::Option<std::vec::Vec<crate::model::ServiceFilter>> {
            &self.filters
        }
        /// Consumes the builder and constructs a [`ListServicesInput`](crate::input::ListServicesInput).
        pub fn build(self) -> crate::input::ListServicesInput {
            crate::input::ListServicesInput {
                next_token: self.next_token,
                max_results: self.max_results,
                filters: self.filters,
            }
        }
    }
}
impl ListServicesInput {
    /// Creates a new builder-style object to manufacture [`ListServicesInput`](crate::input::ListServicesInput).
    pub fn builder() -> crate::input::list_services_input::Builder {
        crate::input::list_services_input::Builder::default()
    }
}

/// <p>Lists tags for the specified resource.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListTagsForResourceInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
    #[serde(rename = "ResourceARN", default, skip_serializing_if = "Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
}
impl ListTagsForResourceInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
}
impl std::fmt::Display for ListTagsForResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ResourceARN", &self.resource_arn)
            .finish()
    }
}
/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
pub mod list_tags_for_resource_input {

    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn get_resource_arn(&self) -> &std::option::Option<std::string::String> {
            &self.resource_arn
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
        pub fn build(self) -> crate::input::ListTagsForResourceInput {
            crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            }
        }
    }
}
impl ListTagsForResourceInput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput).
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}

/// <p>Creates or updates one or more records and, optionally, creates a health check based on the settings in a specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RegisterInstanceInput {
    /// <p>The ID of the service that you want to use for settings for the instance.</p>
    #[serde(rename = "ServiceId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: std::option::Option<std::string::String>,
    /// <p>An identifier that you want to associate with the instance.</p>
    #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice. If it's not set, a token is generated when the request is built.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
    /// <p>A string map that contains the attributes for the instance, such as <code>AWS_INSTANCE_IPV4</code> or <code>AWS_INSTANCE_PORT</code>.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
}
impl RegisterInstanceInput {
    /// <p>The ID of the service that you want to use for settings for the instance.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>An identifier that you want to associate with the instance.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }
    /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice. If it's not set, a token is generated when the request is built.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>A string map that contains the attributes for the instance, such as <code>AWS_INSTANCE_IPV4</code> or <code>AWS_INSTANCE_PORT</code>.</p>
    pub fn attributes(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.attributes.as_ref()
    }
}
impl std::fmt::Display for RegisterInstanceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ServiceId", &self.service_id)
            .field("InstanceId", &self.instance_id)
            .field("CreatorRequestId", &self.creator_request_id)
            .field("Attributes", &self.attributes)
            .finish()
    }
}
/// See [`RegisterInstanceInput`](crate::input::RegisterInstanceInput).
pub mod register_instance_input {

    /// A builder for [`RegisterInstanceInput`](crate::input::RegisterInstanceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service_id: std::option::Option<std::string::String>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// <p>The ID of the service that you want to use for settings for the instance.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the service that you want to use for settings for the instance.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// <p>The ID of the service that you want to use for settings for the instance.</p>
        pub fn get_service_id(&self) -> &std::option::Option<std::string::String> {
            &self.service_id
        }
        /// <p>An identifier that you want to associate with the instance.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>An identifier that you want to associate with the instance.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }
        /// <p>An identifier that you want to associate with the instance.</p>
        pub fn get_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_id
        }
        /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice. If it's not set, a token is generated when the request is built.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        /// <p>A string map that contains the attributes for the instance, such as <code>AWS_INSTANCE_IPV4</code> or <code>AWS_INSTANCE_PORT</code>.</p>
        pub fn attributes(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        /// <p>A string map that contains the attributes for the instance, such as <code>AWS_INSTANCE_IPV4</code> or <code>AWS_INSTANCE_PORT</code>.</p>
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>A string map that contains the attributes for the instance, such as <code>AWS_INSTANCE_IPV4</code> or <code>AWS_INSTANCE_PORT</code>.</p>
        pub fn get_attributes(&self) -> &std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>> {
            &self.attributes
        }
        /// Consumes the builder and constructs a [`RegisterInstanceInput`](crate::input::RegisterInstanceInput).
        pub fn build(self) -> crate::input::RegisterInstanceInput {
            crate::input::RegisterInstanceInput {
                service_id: self.service_id,
                instance_id: self.instance_id,
                creator_request_id: self.creator_request_id,
                attributes: self.attributes,
            }
        }
    }
}
impl RegisterInstanceInput {
    /// Creates a new builder-style object to manufacture [`RegisterInstanceInput`](crate::input::RegisterInstanceInput).
    pub fn builder() -> crate::input::register_instance_input::Builder {
        crate::input::register_instance_input::Builder::default()
    }
}

/// <p>Adds one or more tags to the specified resource.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TagResourceInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
    #[serde(rename = "ResourceARN", default, skip_serializing_if = "Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    /// <p>The tags to add to the specified resource. Specifying the tag key is required. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl TagResourceInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
    /// <p>The tags to add to the specified resource. Specifying the tag key is required. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Display for TagResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ResourceARN", &self.resource_arn)
            .field("Tags", &self.tags)
            .finish()
    }
}
/// See [`TagResourceInput`](crate::input::TagResourceInput).
pub mod tag_resource_input {

    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn get_resource_arn(&self) -> &std::option::Option<std::string::String> {
            &self.resource_arn
        }
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags to add to the specified resource. Specifying the tag key is required. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// <p>The tags to add to the specified resource. Specifying the tag key is required. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>The tags to add to the specified resource. Specifying the tag key is required. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput).
        pub fn build(self) -> crate::input::TagResourceInput {
            crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}
impl TagResourceInput {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput).
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}

/// <p>Removes one or more tags from the specified resource.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct UntagResourceInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
    #[serde(rename = "ResourceARN", default, skip_serializing_if = "Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    /// <p>The tag keys to remove from the specified resource.</p>
    #[serde(rename = "TagKeys", default, skip_serializing_if = "Option::is_none")]
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl UntagResourceInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }
    /// <p>The tag keys to remove from the specified resource.</p>
    pub fn tag_keys(&self) -> std::option::Option<&[std::string::String]> {
        self.tag_keys.as_deref()
    }
}
impl std::fmt::Display for UntagResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ResourceARN", &self.resource_arn)
            .field("TagKeys", &self.tag_keys)
            .finish()
    }
}
/// See [`UntagResourceInput`](crate::input::UntagResourceInput).
pub mod untag_resource_input {

    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) of the resource that you want to retrieve tags for.</p>
        pub fn get_resource_arn(&self) -> &std::option::Option<std::string::String> {
            &self.resource_arn
        }
        /// Appends an item to `tag_keys`.
        ///
        /// To override the contents of this collection use [`set_tag_keys`](Self::set_tag_keys).
        ///
        /// <p>The tag keys to remove from the specified resource.</p>
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        /// <p>The tag keys to remove from the specified resource.</p>
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// <p>The tag keys to remove from the specified resource.</p>
        pub fn get_tag_keys(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.tag_keys
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput).
        pub fn build(self) -> crate::input::UntagResourceInput {
            crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            }
        }
    }
}
impl UntagResourceInput {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput).
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}

/// <p>Submits a request to change the health status of a custom health check to healthy or unhealthy.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct UpdateInstanceCustomHealthStatusInput {
    /// <p>The ID of the service that includes the configuration for the custom health check that you want to change the status for.</p>
    #[serde(rename = "ServiceId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: std::option::Option<std::string::String>,
    /// <p>The ID of the instance that you want to change the health status for.</p>
    #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>The new status of the instance, <code>HEALTHY</code> or <code>UNHEALTHY</code>.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: std::option::Option<crate::model::CustomHealthStatus>,
}
impl UpdateInstanceCustomHealthStatusInput {
    /// <p>The ID of the service that includes the configuration for the custom health check that you want to change the status for.</p>
    pub fn service_id(&self) -> std::option::Option<&str> {
        self.service_id.as_deref()
    }
    /// <p>The ID of the instance that you want to change the health status for.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }
    /// <p>The new status of the instance, <code>HEALTHY</code> or <code>UNHEALTHY</code>.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::CustomHealthStatus> {
        self.status.as_ref()
    }
}
impl std::fmt::Display for UpdateInstanceCustomHealthStatusInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("ServiceId", &self.service_id)
            .field("InstanceId", &self.instance_id)
            .field("Status", &self.status)
            .finish()
    }
}
/// See [`UpdateInstanceCustomHealthStatusInput`](crate::input::UpdateInstanceCustomHealthStatusInput).
pub mod update_instance_custom_health_status_input {

    /// A builder for [`UpdateInstanceCustomHealthStatusInput`](crate::input::UpdateInstanceCustomHealthStatusInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service_id: std::option::Option<std::string::String>,
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::CustomHealthStatus>,
    }
    impl Builder {
        /// <p>The ID of the service that includes the configuration for the custom health check that you want to change the status for.</p>
        pub fn service_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_id = Some(input.into());
            self
        }
        /// <p>The ID of the service that includes the configuration for the custom health check that you want to change the status for.</p>
        pub fn set_service_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_id = input;
            self
        }
        /// <p>The ID of the service that includes the configuration for the custom health check that you want to change the status for.</p>
        pub fn get_service_id(&self) -> &std::option::Option<std::string::String> {
            &self.service_id
        }
        /// <p>The ID of the instance that you want to change the health status for.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The ID of the instance that you want to change the health status for.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }
        /// <p>The ID of the instance that you want to change the health status for.</p>
        pub fn get_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_id
        }
        /// <p>The new status of the instance, <code>HEALTHY</code> or <code>UNHEALTHY</code>.</p>
        pub fn status(mut self, input: crate::model::CustomHealthStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The new status of the instance, <code>HEALTHY</code> or <code>UNHEALTHY</code>.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::CustomHealthStatus>) -> Self {
            self.status = input;
            self
        }
        /// <p>The new status of the instance, <code>HEALTHY</code> or <code>UNHEALTHY</code>.</p>
        pub fn get_status(&self) -> &std::option::Option<crate::model::CustomHealthStatus> {
            &self.status
        }
        /// Consumes the builder and constructs a [`UpdateInstanceCustomHealthStatusInput`](crate::input::UpdateInstanceCustomHealthStatusInput).
        pub fn build(self) -> crate::input::UpdateInstanceCustomHealthStatusInput {
            crate::input::UpdateInstanceCustomHealthStatusInput {
                service_id: self.service_id,
                instance_id: self.instance_id,
                status: self.status,
            }
        }
    }
}
impl UpdateInstanceCustomHealthStatusInput {
    /// Creates a new builder-style object to manufacture [`UpdateInstanceCustomHealthStatusInput`](crate::input::UpdateInstanceCustomHealthStatusInput).
    pub fn builder() -> crate::input::update_instance_custom_health_status_input::Builder {
        crate::input::update_instance_custom_health_status_input::Builder::default()
    }
}

/// <p>Submits a request to update a specified service: add, update, or delete DNS records and the health check configuration.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct UpdateServiceInput {
    /// <p>The ID of the service that you want to update.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>A complex type that contains the new settings for the service.</p>
    #[serde(rename = "Service", default, skip_serializing_if = "Option::is_none")]
    pub service: std::option::Option<crate::model::ServiceChange>,
}
impl UpdateServiceInput {
    /// <p>The ID of the service that you want to update.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>A complex type that contains the new settings for the service.</p>
    pub fn service(&self) -> std::option::Option<&crate::model::ServiceChange> {
        self.service.as_ref()
    }
}
impl std::fmt::Display for UpdateServiceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Service", &self.service)
            .finish()
    }
}
/// See [`UpdateServiceInput`](crate::input::UpdateServiceInput).
pub mod update_service_input {

    /// A builder for [`UpdateServiceInput`](crate::input::UpdateServiceInput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) service: std::option::Option<crate::model::ServiceChange>,
    }
    impl Builder {
        /// <p>The ID of the service that you want to update.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the service that you want to update.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the service that you want to update.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>A complex type that contains the new settings for the service.</p>
        pub fn service(mut self, input: crate::model::ServiceChange) -> Self {
            self.service = Some(input);
            self
        }
        /// <p>A complex type that contains the new settings for the service.</p>
        pub fn set_service(mut self, input: std::option::Option<crate::model::ServiceChange>) -> Self {
            self.service = input;
            self
        }
        /// <p>A complex type that contains the new settings for the service.</p>
        pub fn get_service(&self) -> &std::option::Option<crate::model::ServiceChange> {
            &self.service
        }
        /// Consumes the builder and constructs a [`UpdateServiceInput`](crate::input::UpdateServiceInput).
        pub fn build(self) -> crate::input::UpdateServiceInput {
            crate::input::UpdateServiceInput {
                id: self.id,
                service: self.service,
            }
        }
    }
}
impl UpdateServiceInput {
    /// Creates a new builder-style object to manufacture [`UpdateServiceInput`](crate::input::UpdateServiceInput).
    pub fn builder() -> crate::input::update_service_input::Builder {
        crate::input::update_service_input::Builder::default()
    }
}
