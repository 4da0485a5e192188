/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data structures and enums shared by Cloud Map operations.

/// The status that you want Cloud Map to assign to a custom health check instance.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomHealthStatus {
    #[allow(missing_docs)] // documentation missing in model
    Healthy,
    #[allow(missing_docs)] // documentation missing in model
    Unhealthy,
}
impl CustomHealthStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomHealthStatus::Healthy => "HEALTHY",
            CustomHealthStatus::Unhealthy => "UNHEALTHY",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["HEALTHY", "UNHEALTHY"]
    }
}
impl std::str::FromStr for CustomHealthStatus {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "HEALTHY" => Ok(CustomHealthStatus::Healthy),
            "UNHEALTHY" => Ok(CustomHealthStatus::Unhealthy),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for CustomHealthStatus {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for CustomHealthStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for CustomHealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for CustomHealthStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for CustomHealthStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>A complex type that contains information about the Amazon Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DnsConfig {
    /// <p>The ID of the namespace to use for DNS configuration.</p>
    #[serde(rename = "NamespaceId", default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: std::option::Option<std::string::String>,
    /// <p>The routing policy that you want to apply to all Route 53 DNS records that Cloud Map creates when you register an instance and specify this service.</p>
    #[serde(rename = "RoutingPolicy", default, skip_serializing_if = "Option::is_none")]
    pub routing_policy: std::option::Option<crate::model::RoutingPolicy>,
    /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 DNS record that you want Cloud Map to create when you register an instance.</p>
    #[serde(rename = "DnsRecords", default, skip_serializing_if = "Option::is_none")]
    pub dns_records: std::option::Option<std::vec::Vec<crate::model::DnsRecord>>,
}
impl DnsConfig {
    /// <p>The ID of the namespace to use for DNS configuration.</p>
    pub fn namespace_id(&self) -> std::option::Option<&str> {
        self.namespace_id.as_deref()
    }
    /// <p>The routing policy that you want to apply to all Route 53 DNS records that Cloud Map creates when you register an instance and specify this service.</p>
    pub fn routing_policy(&self) -> std::option::Option<&crate::model::RoutingPolicy> {
        self.routing_policy.as_ref()
    }
    /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 DNS record that you want Cloud Map to create when you register an instance.</p>
    pub fn dns_records(&self) -> std::option::Option<&[crate::model::DnsRecord]> {
        self.dns_records.as_deref()
    }
}
impl std::fmt::Display for DnsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("NamespaceId", &self.namespace_id)
            .field("RoutingPolicy", &self.routing_policy)
            .field("DnsRecords", &self.dns_records)
            .finish()
    }
}
/// See [`DnsConfig`](crate::model::DnsConfig).
pub mod dns_config {

    /// A builder for [`DnsConfig`](crate::model::DnsConfig).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) namespace_id: std::option::Option<std::string::String>,
        pub(crate) routing_policy: std::option::Option<crate::model::RoutingPolicy>,
        pub(crate) dns_records: std::option::Option<std::vec::Vec<crate::model::DnsRecord>>,
    }
    impl Builder {
        /// <p>The ID of the namespace to use for DNS configuration.</p>
        pub fn namespace_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.namespace_id = Some(input.into());
            self
        }
        /// <p>The ID of the namespace to use for DNS configuration.</p>
        pub fn set_namespace_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.namespace_id = input;
            self
        }
        /// <p>The ID of the namespace to use for DNS configuration.</p>
        pub fn get_namespace_id(&self) -> &std::option::Option<std::string::String> {
            &self.namespace_id
        }
        /// <p>The routing policy that you want to apply to all Route 53 DNS records that Cloud Map creates when you register an instance and specify this service.</p>
        pub fn routing_policy(mut self, input: crate::model::RoutingPolicy) -> Self {
            self.routing_policy = Some(input);
            self
        }
        /// <p>The routing policy that you want to apply to all Route 53 DNS records that Cloud Map creates when you register an instance and specify this service.</p>
        pub fn set_routing_policy(mut self, input: std::option::Option<crate::model::RoutingPolicy>) -> Self {
            self.routing_policy = input;
            self
        }
        /// <p>The routing policy that you want to apply to all Route 53 DNS records that Cloud Map creates when you register an instance and specify this service.</p>
        pub fn get_routing_policy(&self) -> &std::option::Option<crate::model::RoutingPolicy> {
            &self.routing_policy
        }
        /// Appends an item to `dns_records`.
        ///
        /// To override the contents of this collection use [`set_dns_records`](Self::set_dns_records).
        ///
        /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 DNS record that you want Cloud Map to create when you register an instance.</p>
        pub fn dns_records(mut self, input: crate::model::DnsRecord) -> Self {
            let mut v = self.dns_records.unwrap_or_default();
            v.push(input);
            self.dns_records = Some(v);
            self
        }
        /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 DNS record that you want Cloud Map to create when you register an instance.</p>
        pub fn set_dns_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::DnsRecord>>) -> Self {
            self.dns_records = input;
            self
        }
        /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 DNS record that you want Cloud Map to create when you register an instance.</p>
        pub fn get_dns_records(&self) -> &std::option::Option<std::vec::Vec<crate::model::DnsRecord>> {
            &self.dns_records
        }
        /// Consumes the builder and constructs a [`DnsConfig`](crate::model::DnsConfig).
        pub fn build(self) -> crate::model::DnsConfig {
            crate::model::DnsConfig {
                namespace_id: self.namespace_id,
                routing_policy: self.routing_policy,
                dns_records: self.dns_records,
            }
        }
    }
}
impl DnsConfig {
    /// Creates a new builder-style object to manufacture [`DnsConfig`](crate::model::DnsConfig).
    pub fn builder() -> crate::model::dns_config::Builder {
        crate::model::dns_config::Builder::default()
    }
}

/// <p>A complex type that contains information about changes to the Route 53 DNS records that Cloud Map creates when you register an instance.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DnsConfigChange {
    /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 record that you want Cloud Map to create when you register an instance.</p>
    #[serde(rename = "DnsRecords", default, skip_serializing_if = "Option::is_none")]
    pub dns_records: std::option::Option<std::vec::Vec<crate::model::DnsRecord>>,
}
impl DnsConfigChange {
    /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 record that you want Cloud Map to create when you register an instance.</p>
    pub fn dns_records(&self) -> std::option::Option<&[crate::model::DnsRecord]> {
        self.dns_records.as_deref()
    }
}
impl std::fmt::Display for DnsConfigChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("DnsRecords", &self.dns_records)
            .finish()
    }
}
/// See [`DnsConfigChange`](crate::model::DnsConfigChange).
pub mod dns_config_change {

    /// A builder for [`DnsConfigChange`](crate::model::DnsConfigChange).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) dns_records: std::option::Option<std::vec::Vec<crate::model::DnsRecord>>,
    }
    impl Builder {
        /// Appends an item to `dns_records`.
        ///
        /// To override the contents of this collection use [`set_dns_records`](Self::set_dns_records).
        ///
        /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 record that you want Cloud Map to create when you register an instance.</p>
        pub fn dns_records(mut self, input: crate::model::DnsRecord) -> Self {
            let mut v = self.dns_records.unwrap_or_default();
            v.push(input);
            self.dns_records = Some(v);
            self
        }
        /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 record that you want Cloud Map to create when you register an instance.</p>
        pub fn set_dns_records(mut self, input: std::option::Option<std::vec::Vec<crate::model::DnsRecord>>) -> Self {
            self.dns_records = input;
            self
        }
        /// <p>An array that contains one <code>DnsRecord</code> object for each Route 53 record that you want Cloud Map to create when you register an instance.</p>
        pub fn get_dns_records(&self) -> &std::option::Option<std::vec::Vec<crate::model::DnsRecord>> {
            &self.dns_records
        }
        /// Consumes the builder and constructs a [`DnsConfigChange`](crate::model::DnsConfigChange).
        pub fn build(self) -> crate::model::DnsConfigChange {
            crate::model::DnsConfigChange {
                dns_records: self.dns_records,
            }
        }
    }
}
impl DnsConfigChange {
    /// Creates a new builder-style object to manufacture [`DnsConfigChange`](crate::model::DnsConfigChange).
    pub fn builder() -> crate::model::dns_config_change::Builder {
        crate::model::dns_config_change::Builder::default()
    }
}

/// <p>A complex type that contains the ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DnsProperties {
    /// <p>The ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
    #[serde(rename = "HostedZoneId", default, skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: std::option::Option<std::string::String>,
}
impl DnsProperties {
    /// <p>The ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
    pub fn hosted_zone_id(&self) -> std::option::Option<&str> {
        self.hosted_zone_id.as_deref()
    }
}
impl std::fmt::Display for DnsProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("HostedZoneId", &self.hosted_zone_id)
            .finish()
    }
}
/// See [`DnsProperties`](crate::model::DnsProperties).
pub mod dns_properties {

    /// A builder for [`DnsProperties`](crate::model::DnsProperties).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) hosted_zone_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
        pub fn hosted_zone_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.hosted_zone_id = Some(input.into());
            self
        }
        /// <p>The ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
        pub fn set_hosted_zone_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hosted_zone_id = input;
            self
        }
        /// <p>The ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
        pub fn get_hosted_zone_id(&self) -> &std::option::Option<std::string::String> {
            &self.hosted_zone_id
        }
        /// Consumes the builder and constructs a [`DnsProperties`](crate::model::DnsProperties).
        pub fn build(self) -> crate::model::DnsProperties {
            crate::model::DnsProperties {
                hosted_zone_id: self.hosted_zone_id,
            }
        }
    }
}
impl DnsProperties {
    /// Creates a new builder-style object to manufacture [`DnsProperties`](crate::model::DnsProperties).
    pub fn builder() -> crate::model::dns_properties::Builder {
        crate::model::dns_properties::Builder::default()
    }
}

/// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DnsRecord {
    /// <p>The type of the resource, which indicates the type of value that Route 53 returns in response to DNS queries.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: std::option::Option<crate::model::RecordType>,
    /// <p>The amount of time, in seconds, that you want DNS resolvers to cache the settings for this record.</p>
    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: std::option::Option<i64>,
}
impl DnsRecord {
    /// <p>The type of the resource, which indicates the type of value that Route 53 returns in response to DNS queries.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::RecordType> {
        self.r#type.as_ref()
    }
    /// <p>The amount of time, in seconds, that you want DNS resolvers to cache the settings for this record.</p>
    pub fn ttl(&self) -> std::option::Option<i64> {
        self.ttl
    }
}
impl std::fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Type", &self.r#type)
            .field("TTL", &self.ttl)
            .finish()
    }
}
/// See [`DnsRecord`](crate::model::DnsRecord).
pub mod dns_record {

    /// A builder for [`DnsRecord`](crate::model::DnsRecord).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::RecordType>,
        pub(crate) ttl: std::option::Option<i64>,
    }
    impl Builder {
        /// <p>The type of the resource, which indicates the type of value that Route 53 returns in response to DNS queries.</p>
        pub fn r#type(mut self, input: crate::model::RecordType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of the resource, which indicates the type of value that Route 53 returns in response to DNS queries.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::RecordType>) -> Self {
            self.r#type = input;
            self
        }
        /// <p>The type of the resource, which indicates the type of value that Route 53 returns in response to DNS queries.</p>
        pub fn get_type(&self) -> &std::option::Option<crate::model::RecordType> {
            &self.r#type
        }
        /// <p>The amount of time, in seconds, that you want DNS resolvers to cache the settings for this record.</p>
        pub fn ttl(mut self, input: i64) -> Self {
            self.ttl = Some(input);
            self
        }
        /// <p>The amount of time, in seconds, that you want DNS resolvers to cache the settings for this record.</p>
        pub fn set_ttl(mut self, input: std::option::Option<i64>) -> Self {
            self.ttl = input;
            self
        }
        /// <p>The amount of time, in seconds, that you want DNS resolvers to cache the settings for this record.</p>
        pub fn get_ttl(&self) -> &std::option::Option<i64> {
            &self.ttl
        }
        /// Consumes the builder and constructs a [`DnsRecord`](crate::model::DnsRecord).
        pub fn build(self) -> crate::model::DnsRecord {
            crate::model::DnsRecord {
                r#type: self.r#type,
                ttl: self.ttl,
            }
        }
    }
}
impl DnsRecord {
    /// Creates a new builder-style object to manufacture [`DnsRecord`](crate::model::DnsRecord).
    pub fn builder() -> crate::model::dns_record::Builder {
        crate::model::dns_record::Builder::default()
    }
}

/// The operator used to compare the values in a filter with the values of a resource.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCondition {
    #[allow(missing_docs)] // documentation missing in model
    Eq,
    #[allow(missing_docs)] // documentation missing in model
    In,
    #[allow(missing_docs)] // documentation missing in model
    Between,
}
impl FilterCondition {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCondition::Eq => "EQ",
            FilterCondition::In => "IN",
            FilterCondition::Between => "BETWEEN",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["EQ", "IN", "BETWEEN"]
    }
}
impl std::str::FromStr for FilterCondition {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "EQ" => Ok(FilterCondition::Eq),
            "IN" => Ok(FilterCondition::In),
            "BETWEEN" => Ok(FilterCondition::Between),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for FilterCondition {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for FilterCondition {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for FilterCondition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FilterCondition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains settings for an optional Route 53 health check.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HealthCheckConfig {
    /// <p>The type of health check that you want to create, which indicates how Route 53 determines whether an endpoint is healthy.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: std::option::Option<crate::model::HealthCheckType>,
    /// <p>The path that you want Route 53 to request when performing health checks.</p>
    #[serde(rename = "ResourcePath", default, skip_serializing_if = "Option::is_none")]
    pub resource_path: std::option::Option<std::string::String>,
    /// <p>The number of consecutive health checks that an endpoint must pass or fail for Route 53 to change the current status of the endpoint from unhealthy to healthy or the other way around.</p>
    #[serde(rename = "FailureThreshold", default, skip_serializing_if = "Option::is_none")]
    pub failure_threshold: std::option::Option<i32>,
}
impl HealthCheckConfig {
    /// <p>The type of health check that you want to create, which indicates how Route 53 determines whether an endpoint is healthy.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::HealthCheckType> {
        self.r#type.as_ref()
    }
    /// <p>The path that you want Route 53 to request when performing health checks.</p>
    pub fn resource_path(&self) -> std::option::Option<&str> {
        self.resource_path.as_deref()
    }
    /// <p>The number of consecutive health checks that an endpoint must pass or fail for Route 53 to change the current status of the endpoint from unhealthy to healthy or the other way around.</p>
    pub fn failure_threshold(&self) -> std::option::Option<i32> {
        self.failure_threshold
    }
}
impl std::fmt::Display for HealthCheckConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Type", &self.r#type)
            .field("ResourcePath", &self.resource_path)
            .field("FailureThreshold", &self.failure_threshold)
            .finish()
    }
}
/// See [`HealthCheckConfig`](crate::model::HealthCheckConfig).
pub mod health_check_config {

    /// A builder for [`HealthCheckConfig`](crate::model::HealthCheckConfig).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::HealthCheckType>,
        pub(crate) resource_path: std::option::Option<std::string::String>,
        pub(crate) failure_threshold: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The type of health check that you want to create, which indicates how Route 53 determines whether an endpoint is healthy.</p>
        pub fn r#type(mut self, input: crate::model::HealthCheckType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of health check that you want to create, which indicates how Route 53 determines whether an endpoint is healthy.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::HealthCheckType>) -> Self {
            self.r#type = input;
            self
        }
        /// <p>The type of health check that you want to create, which indicates how Route 53 determines whether an endpoint is healthy.</p>
        pub fn get_type(&self) -> &std::option::Option<crate::model::HealthCheckType> {
            &self.r#type
        }
        /// <p>The path that you want Route 53 to request when performing health checks.</p>
        pub fn resource_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_path = Some(input.into());
            self
        }
        /// <p>The path that you want Route 53 to request when performing health checks.</p>
        pub fn set_resource_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_path = input;
            self
        }
        /// <p>The path that you want Route 53 to request when performing health checks.</p>
        pub fn get_resource_path(&self) -> &std::option::Option<std::string::String> {
            &self.resource_path
        }
        /// <p>The number of consecutive health checks that an endpoint must pass or fail for Route 53 to change the current status of the endpoint from unhealthy to healthy or the other way around.</p>
        pub fn failure_threshold(mut self, input: i32) -> Self {
            self.failure_threshold = Some(input);
            self
        }
        /// <p>The number of consecutive health checks that an endpoint must pass or fail for Route 53 to change the current status of the endpoint from unhealthy to healthy or the other way around.</p>
        pub fn set_failure_threshold(mut self, input: std::option::Option<i32>) -> Self {
            self.failure_threshold = input;
            self
        }
        /// <p>The number of consecutive health checks that an endpoint must pass or fail for Route 53 to change the current status of the endpoint from unhealthy to healthy or the other way around.</p>
        pub fn get_failure_threshold(&self) -> &std::option::Option<i32> {
            &self.failure_threshold
        }
        /// Consumes the builder and constructs a [`HealthCheckConfig`](crate::model::HealthCheckConfig).
        pub fn build(self) -> crate::model::HealthCheckConfig {
            crate::model::HealthCheckConfig {
                r#type: self.r#type,
                resource_path: self.resource_path,
                failure_threshold: self.failure_threshold,
            }
        }
    }
}
impl HealthCheckConfig {
    /// Creates a new builder-style object to manufacture [`HealthCheckConfig`](crate::model::HealthCheckConfig).
    pub fn builder() -> crate::model::health_check_config::Builder {
        crate::model::health_check_config::Builder::default()
    }
}

/// <p>A complex type that contains information about an optional custom health check.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HealthCheckCustomConfig {
    /// <p>The number of 30-second intervals that you want Cloud Map to wait after receiving an <code>UpdateInstanceCustomHealthStatus</code> request before it changes the health status of a service instance.</p>
    #[serde(rename = "FailureThreshold", default, skip_serializing_if = "Option::is_none")]
    pub failure_threshold: std::option::Option<i32>,
}
impl HealthCheckCustomConfig {
    /// <p>The number of 30-second intervals that you want Cloud Map to wait after receiving an <code>UpdateInstanceCustomHealthStatus</code> request before it changes the health status of a service instance.</p>
    pub fn failure_threshold(&self) -> std::option::Option<i32> {
        self.failure_threshold
    }
}
impl std::fmt::Display for HealthCheckCustomConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("FailureThreshold", &self.failure_threshold)
            .finish()
    }
}
/// See [`HealthCheckCustomConfig`](crate::model::HealthCheckCustomConfig).
pub mod health_check_custom_config {

    /// A builder for [`HealthCheckCustomConfig`](crate::model::HealthCheckCustomConfig).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) failure_threshold: std::option::Option<i32>,
    }
    impl Builder {
        /// <p>The number of 30-second intervals that you want Cloud Map to wait after receiving an <code>UpdateInstanceCustomHealthStatus</code> request before it changes the health status of a service instance.</p>
        pub fn failure_threshold(mut self, input: i32) -> Self {
            self.failure_threshold = Some(input);
            self
        }
        /// <p>The number of 30-second intervals that you want Cloud Map to wait after receiving an <code>UpdateInstanceCustomHealthStatus</code> request before it changes the health status of a service instance.</p>
        pub fn set_failure_threshold(mut self, input: std::option::Option<i32>) -> Self {
            self.failure_threshold = input;
            self
        }
        /// <p>The number of 30-second intervals that you want Cloud Map to wait after receiving an <code>UpdateInstanceCustomHealthStatus</code> request before it changes the health status of a service instance.</p>
        pub fn get_failure_threshold(&self) -> &std::option::Option<i32> {
            &self.failure_threshold
        }
        /// Consumes the builder and constructs a [`HealthCheckCustomConfig`](crate::model::HealthCheckCustomConfig).
        pub fn build(self) -> crate::model::HealthCheckCustomConfig {
            crate::model::HealthCheckCustomConfig {
                failure_threshold: self.failure_threshold,
            }
        }
    }
}
impl HealthCheckCustomConfig {
    /// Creates a new builder-style object to manufacture [`HealthCheckCustomConfig`](crate::model::HealthCheckCustomConfig).
    pub fn builder() -> crate::model::health_check_custom_config::Builder {
        crate::model::health_check_custom_config::Builder::default()
    }
}

/// The type of health check that Route 53 performs to determine whether an endpoint is healthy.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthCheckType {
    #[allow(missing_docs)] // documentation missing in model
    Http,
    #[allow(missing_docs)] // documentation missing in model
    Https,
    #[allow(missing_docs)] // documentation missing in model
    Tcp,
}
impl HealthCheckType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCheckType::Http => "HTTP",
            HealthCheckType::Https => "HTTPS",
            HealthCheckType::Tcp => "TCP",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["HTTP", "HTTPS", "TCP"]
    }
}
impl std::str::FromStr for HealthCheckType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "HTTP" => Ok(HealthCheckType::Http),
            "HTTPS" => Ok(HealthCheckType::Https),
            "TCP" => Ok(HealthCheckType::Tcp),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for HealthCheckType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for HealthCheckType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for HealthCheckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for HealthCheckType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HealthCheckType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The health status of an instance as reported by Cloud Map.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthStatus {
    #[allow(missing_docs)] // documentation missing in model
    Healthy,
    #[allow(missing_docs)] // documentation missing in model
    Unhealthy,
    #[allow(missing_docs)] // documentation missing in model
    Unknown,
}
impl HealthStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Unhealthy => "UNHEALTHY",
            HealthStatus::Unknown => "UNKNOWN",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["HEALTHY", "UNHEALTHY", "UNKNOWN"]
    }
}
impl std::str::FromStr for HealthStatus {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "HEALTHY" => Ok(HealthStatus::Healthy),
            "UNHEALTHY" => Ok(HealthStatus::Unhealthy),
            "UNKNOWN" => Ok(HealthStatus::Unknown),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for HealthStatus {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for HealthStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for HealthStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HealthStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Restricts discovered instances to the given health status.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthStatusFilter {
    #[allow(missing_docs)] // documentation missing in model
    Healthy,
    #[allow(missing_docs)] // documentation missing in model
    Unhealthy,
    #[allow(missing_docs)] // documentation missing in model
    All,
}
impl HealthStatusFilter {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatusFilter::Healthy => "HEALTHY",
            HealthStatusFilter::Unhealthy => "UNHEALTHY",
            HealthStatusFilter::All => "ALL",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["HEALTHY", "UNHEALTHY", "ALL"]
    }
}
impl std::str::FromStr for HealthStatusFilter {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "HEALTHY" => Ok(HealthStatusFilter::Healthy),
            "UNHEALTHY" => Ok(HealthStatusFilter::Unhealthy),
            "ALL" => Ok(HealthStatusFilter::All),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for HealthStatusFilter {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for HealthStatusFilter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for HealthStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for HealthStatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for HealthStatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>In a response to a <code>DiscoverInstances</code> request, <code>HttpInstanceSummary</code> contains information about one instance that matches the values that you specified in the request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HttpInstanceSummary {
    /// <p>The ID of an instance that matches the values that you specified in the request.</p>
    #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
    pub instance_id: std::option::Option<std::string::String>,
    /// <p>The name of the namespace that you specified when you registered the instance.</p>
    #[serde(rename = "NamespaceName", default, skip_serializing_if = "Option::is_none")]
    pub namespace_name: std::option::Option<std::string::String>,
    /// <p>The name of the service that you specified when you registered the instance.</p>
    #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
    pub service_name: std::option::Option<std::string::String>,
    /// <p>If you configured health checking in the service, the current health status of the service instance.</p>
    #[serde(rename = "HealthStatus", default, skip_serializing_if = "Option::is_none")]
    pub health_status: std::option::Option<crate::model::HealthStatus>,
    /// <p>If you included any attributes when you registered the instance, the values of those attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
}
impl HttpInstanceSummary {
    /// <p>The ID of an instance that matches the values that you specified in the request.</p>
    pub fn instance_id(&self) -> std::option::Option<&str> {
        self.instance_id.as_deref()
    }
    /// <p>The name of the namespace that you specified when you registered the instance.</p>
    pub fn namespace_name(&self) -> std::option::Option<&str> {
        self.namespace_name.as_deref()
    }
    /// <p>The name of the service that you specified when you registered the instance.</p>
    pub fn service_name(&self) -> std::option::Option<&str> {
        self.service_name.as_deref()
    }
    /// <p>If you configured health checking in the service, the current health status of the service instance.</p>
    pub fn health_status(&self) -> std::option::Option<&crate::model::HealthStatus> {
        self.health_status.as_ref()
    }
    /// <p>If you included any attributes when you registered the instance, the values of those attributes.</p>
    pub fn attributes(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.attributes.as_ref()
    }
}
impl std::fmt::Display for HttpInstanceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("InstanceId", &self.instance_id)
            .field("NamespaceName", &self.namespace_name)
            .field("ServiceName", &self.service_name)
            .field("HealthStatus", &self.health_status)
            .field("Attributes", &self.attributes)
            .finish()
    }
}
/// See [`HttpInstanceSummary`](crate::model::HttpInstanceSummary).
pub mod http_instance_summary {

    /// A builder for [`HttpInstanceSummary`](crate::model::HttpInstanceSummary).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) instance_id: std::option::Option<std::string::String>,
        pub(crate) namespace_name: std::option::Option<std::string::String>,
        pub(crate) service_name: std::option::Option<std::string::String>,
        pub(crate) health_status: std::option::Option<crate::model::HealthStatus>,
        pub(crate) attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// <p>The ID of an instance that matches the values that you specified in the request.</p>
        pub fn instance_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// <p>The ID of an instance that matches the values that you specified in the request.</p>
        pub fn set_instance_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.instance_id = input;
            self
        }
        /// <p>The ID of an instance that matches the values that you specified in the request.</p>
        pub fn get_instance_id(&self) -> &std::option::Option<std::string::String> {
            &self.instance_id
        }
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
        /// <p>If you configured health checking in the service, the current health status of the service instance.</p>
        pub fn health_status(mut self, input: crate::model::HealthStatus) -> Self {
            self.health_status = Some(input);
            self
        }
        /// <p>If you configured health checking in the service, the current health status of the service instance.</p>
        pub fn set_health_status(mut self, input: std::option::Option<crate::model::HealthStatus>) -> Self {
            self.health_status = input;
            self
        }
        /// <p>If you configured health checking in the service, the current health status of the service instance.</p>
        pub fn get_health_status(&self) -> &std::option::Option<crate::model::HealthStatus> {
            &self.health_status
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        /// <p>If you included any attributes when you registered the instance, the values of those attributes.</p>
        pub fn attributes(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        /// <p>If you included any attributes when you registered the instance, the values of those attributes.</p>
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>If you included any attributes when you registered the instance, the values of those attributes.</p>
        pub fn get_attributes(&self) -> &std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>> {
            &self.attributes
        }
        /// Consumes the builder and constructs a [`HttpInstanceSummary`](crate::model::HttpInstanceSummary).
        pub fn build(self) -> crate::model::HttpInstanceSummary {
            crate::model::HttpInstanceSummary {
                instance_id: self.instance_id,
                namespace_name: self.namespace_name,
                service_name: self.service_name,
                health_status: self.health_status,
                attributes: self.attributes,
            }
        }
    }
}
impl HttpInstanceSummary {
    /// Creates a new builder-style object to manufacture [`HttpInstanceSummary`](crate::model::HttpInstanceSummary).
    pub fn builder() -> crate::model::http_instance_summary::Builder {
        crate::model::http_instance_summary::Builder::default()
    }
}

/// <p>A complex type that contains the name of an HTTP namespace.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HttpProperties {
    /// <p>The name of an HTTP namespace.</p>
    #[serde(rename = "HttpName", default, skip_serializing_if = "Option::is_none")]
    pub http_name: std::option::Option<std::string::String>,
}
impl HttpProperties {
    /// <p>The name of an HTTP namespace.</p>
    pub fn http_name(&self) -> std::option::Option<&str> {
        self.http_name.as_deref()
    }
}
impl std::fmt::Display for HttpProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("HttpName", &self.http_name)
            .finish()
    }
}
/// See [`HttpProperties`](crate::model::HttpProperties).
pub mod http_properties {

    /// A builder for [`HttpProperties`](crate::model::HttpProperties).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) http_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The name of an HTTP namespace.</p>
        pub fn http_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.http_name = Some(input.into());
            self
        }
        /// <p>The name of an HTTP namespace.</p>
        pub fn set_http_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.http_name = input;
            self
        }
        /// <p>The name of an HTTP namespace.</p>
        pub fn get_http_name(&self) -> &std::option::Option<std::string::String> {
            &self.http_name
        }
        /// Consumes the builder and constructs a [`HttpProperties`](crate::model::HttpProperties).
        pub fn build(self) -> crate::model::HttpProperties {
            crate::model::HttpProperties {
                http_name: self.http_name,
            }
        }
    }
}
impl HttpProperties {
    /// Creates a new builder-style object to manufacture [`HttpProperties`](crate::model::HttpProperties).
    pub fn builder() -> crate::model::http_properties::Builder {
        crate::model::http_properties::Builder::default()
    }
}

/// <p>A complex type that contains information about an instance that Cloud Map creates when you submit a <code>RegisterInstance</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Instance {
    /// <p>An identifier that you want to associate with the instance.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
    /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
}
impl Instance {
    /// <p>An identifier that you want to associate with the instance.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
    /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
    pub fn attributes(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.attributes.as_ref()
    }
}
impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("CreatorRequestId", &self.creator_request_id)
            .field("Attributes", &self.attributes)
            .finish()
    }
}
/// See [`Instance`](crate::model::Instance).
pub mod instance {

    /// A builder for [`Instance`](crate::model::Instance).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// <p>An identifier that you want to associate with the instance.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>An identifier that you want to associate with the instance.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>An identifier that you want to associate with the instance.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed <code>RegisterInstance</code> requests to be retried without the risk of executing the operation twice.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
        pub fn attributes(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
        pub fn get_attributes(&self) -> &std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>> {
            &self.attributes
        }
        /// Consumes the builder and constructs a [`Instance`](crate::model::Instance).
        pub fn build(self) -> crate::model::Instance {
            crate::model::Instance {
                id: self.id,
                creator_request_id: self.creator_request_id,
                attributes: self.attributes,
            }
        }
    }
}
impl Instance {
    /// Creates a new builder-style object to manufacture [`Instance`](crate::model::Instance).
    pub fn builder() -> crate::model::instance::Builder {
        crate::model::instance::Builder::default()
    }
}

/// <p>A complex type that contains information about the instances that you registered by using a specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct InstanceSummary {
    /// <p>The ID for an instance that you created by using a specified service.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
}
impl InstanceSummary {
    /// <p>The ID for an instance that you created by using a specified service.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
    pub fn attributes(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.attributes.as_ref()
    }
}
impl std::fmt::Display for InstanceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Attributes", &self.attributes)
            .finish()
    }
}
/// See [`InstanceSummary`](crate::model::InstanceSummary).
pub mod instance_summary {

    /// A builder for [`InstanceSummary`](crate::model::InstanceSummary).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        /// <p>The ID for an instance that you created by using a specified service.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID for an instance that you created by using a specified service.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID for an instance that you created by using a specified service.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// Adds a key-value pair to `attributes`.
        ///
        /// To override the contents of this collection use [`set_attributes`](Self::set_attributes).
        ///
        /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
        pub fn attributes(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.attributes = input;
            self
        }
        /// <p>A string map that contains the attributes that were specified when the instance was registered.</p>
        pub fn get_attributes(&self) -> &std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>> {
            &self.attributes
        }
        /// Consumes the builder and constructs a [`InstanceSummary`](crate::model::InstanceSummary).
        pub fn build(self) -> crate::model::InstanceSummary {
            crate::model::InstanceSummary {
                id: self.id,
                attributes: self.attributes,
            }
        }
    }
}
impl InstanceSummary {
    /// Creates a new builder-style object to manufacture [`InstanceSummary`](crate::model::InstanceSummary).
    pub fn builder() -> crate::model::instance_summary::Builder {
        crate::model::instance_summary::Builder::default()
    }
}

/// <p>A complex type that contains information about a specified namespace.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Namespace {
    /// <p>The ID of a namespace.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
    #[serde(rename = "Arn", default, skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the namespace, such as <code>example.com</code>.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>The type of the namespace. The methods for discovering instances depends on the value that you specify.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: std::option::Option<crate::model::NamespaceType>,
    /// <p>The description that you specify for the namespace when you create it.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The number of services that are associated with the namespace.</p>
    #[serde(rename = "ServiceCount", default, skip_serializing_if = "Option::is_none")]
    pub service_count: std::option::Option<i32>,
    /// <p>A complex type that contains information that's specific to the type of the namespace.</p>
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: std::option::Option<crate::model::NamespaceProperties>,
    /// <p>The date that the namespace was created.</p>
    #[serde(rename = "CreateDate", default, skip_serializing_if = "Option::is_none", with = "crate::instant_epoch")]
    pub create_date: std::option::Option<aws_smithy_types::DateTime>,
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running an operation twice.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
}
impl Namespace {
    /// <p>The ID of a namespace.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The name of the namespace, such as <code>example.com</code>.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The type of the namespace. The methods for discovering instances depends on the value that you specify.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::NamespaceType> {
        self.r#type.as_ref()
    }
    /// <p>The description that you specify for the namespace when you create it.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The number of services that are associated with the namespace.</p>
    pub fn service_count(&self) -> std::option::Option<i32> {
        self.service_count
    }
    /// <p>A complex type that contains information that's specific to the type of the namespace.</p>
    pub fn properties(&self) -> std::option::Option<&crate::model::NamespaceProperties> {
        self.properties.as_ref()
    }
    /// <p>The date that the namespace was created.</p>
    pub fn create_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.create_date.as_ref()
    }
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running an operation twice.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
}
impl Eq for Namespace {}
impl std::hash::Hash for Namespace {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.id, state);
        std::hash::Hash::hash(&self.arn, state);
        std::hash::Hash::hash(&self.name, state);
        std::hash::Hash::hash(&self.r#type, state);
        std::hash::Hash::hash(&self.description, state);
        std::hash::Hash::hash(&self.service_count, state);
        std::hash::Hash::hash(&self.properties, state);
        std::hash::Hash::hash(&self.create_date.map(|date| (date.secs(), date.subsec_nanos())), state);
        std::hash::Hash::hash(&self.creator_request_id, state);
    }
}
impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Arn", &self.arn)
            .field("Name", &self.name)
            .field("Type", &self.r#type)
            .field("Description", &self.description)
            .field("ServiceCount", &self.service_count)
            .field("Properties", &self.properties)
            .field("CreateDate", &self.create_date)
            .field("CreatorRequestId", &self.creator_request_id)
            .finish()
    }
}
/// See [`Namespace`](crate::model::Namespace).
pub mod namespace {

    /// A builder for [`Namespace`](crate::model::Namespace).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::NamespaceType>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) service_count: std::option::Option<i32>,
        pub(crate) properties: std::option::Option<crate::model::NamespaceProperties>,
        pub(crate) create_date: std::option::Option<aws_smithy_types::DateTime>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID of a namespace.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of a namespace.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of a namespace.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
        pub fn get_arn(&self) -> &std::option::Option<std::string::String> {
            &self.arn
        }
        /// <p>The name of the namespace, such as <code>example.com</code>.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the namespace, such as <code>example.com</code>.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name of the namespace, such as <code>example.com</code>.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The type of the namespace. The methods for discovering instances depends on the value that you specify.</p>
        pub fn r#type(mut self, input: crate::model::NamespaceType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of the namespace. The methods for discovering instances depends on the value that you specify.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::NamespaceType>) -> Self {
            self.r#type = input;
            self
        }
        /// <p>The type of the namespace. The methods for discovering instances depends on the value that you specify.</p>
        pub fn get_type(&self) -> &std::option::Option<crate::model::NamespaceType> {
            &self.r#type
        }
        /// <p>The description that you specify for the namespace when you create it.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>The description that you specify for the namespace when you create it.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>The description that you specify for the namespace when you create it.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// <p>The number of services that are associated with the namespace.</p>
        pub fn service_count(mut self, input: i32) -> Self {
            self.service_count = Some(input);
            self
        }
        /// <p>The number of services that are associated with the namespace.</p>
        pub fn set_service_count(mut self, input: std::option::Option<i32>) -> Self {
            self.service_count = input;
            self
        }
        /// <p>The number of services that are associated with the namespace.</p>
        pub fn get_service_count(&self) -> &std::option::Option<i32> {
            &self.service_count
        }
        /// <p>A complex type that contains information that's specific to the type of the namespace.</p>
        pub fn properties(mut self, input: crate::model::NamespaceProperties) -> Self {
            self.properties = Some(input);
            self
        }
        /// <p>A complex type that contains information that's specific to the type of the namespace.</p>
        pub fn set_properties(mut self, input: std::option::Option<crate::model::NamespaceProperties>) -> Self {
            self.properties = input;
            self
        }
        /// <p>A complex type that contains information that's specific to the type of the namespace.</p>
        pub fn get_properties(&self) -> &std::option::Option<crate::model::NamespaceProperties> {
            &self.properties
        }
        /// <p>The date that the namespace was created.</p>
        pub fn create_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.create_date = Some(input);
            self
        }
        /// <p>The date that the namespace was created.</p>
        pub fn set_create_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.create_date = input;
            self
        }
        /// <p>The date that the namespace was created.</p>
        pub fn get_create_date(&self) -> &std::option::Option<aws_smithy_types::DateTime> {
            &self.create_date
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running an operation twice.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running an operation twice.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running an operation twice.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// Consumes the builder and constructs a [`Namespace`](crate::model::Namespace).
        pub fn build(self) -> crate::model::Namespace {
            crate::model::Namespace {
                id: self.id,
                arn: self.arn,
                name: self.name,
                r#type: self.r#type,
                description: self.description,
                service_count: self.service_count,
                properties: self.properties,
                create_date: self.create_date,
                creator_request_id: self.creator_request_id,
            }
        }
    }
}
impl Namespace {
    /// Creates a new builder-style object to manufacture [`Namespace`](crate::model::Namespace).
    pub fn builder() -> crate::model::namespace::Builder {
        crate::model::namespace::Builder::default()
    }
}

/// <p>A complex type that identifies the namespaces that you want to list.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NamespaceFilter {
    /// <p>Specify <code>TYPE</code>.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<crate::model::NamespaceFilterName>,
    /// <p>If you specify <code>EQ</code> for <code>Condition</code>, specify either <code>DNS_PUBLIC</code> or <code>DNS_PRIVATE</code>.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The operator that you want to use to determine whether <code>ListNamespaces</code> returns a namespace.</p>
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: std::option::Option<crate::model::FilterCondition>,
}
impl NamespaceFilter {
    /// <p>Specify <code>TYPE</code>.</p>
    pub fn name(&self) -> std::option::Option<&crate::model::NamespaceFilterName> {
        self.name.as_ref()
    }
    /// <p>If you specify <code>EQ</code> for <code>Condition</code>, specify either <code>DNS_PUBLIC</code> or <code>DNS_PRIVATE</code>.</p>
    pub fn values(&self) -> std::option::Option<&[std::string::String]> {
        self.values.as_deref()
    }
    /// <p>The operator that you want to use to determine whether <code>ListNamespaces</code> returns a namespace.</p>
    pub fn condition(&self) -> std::option::Option<&crate::model::FilterCondition> {
        self.condition.as_ref()
    }
}
impl std::fmt::Display for NamespaceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("Values", &self.values)
            .field("Condition", &self.condition)
            .finish()
    }
}
/// See [`NamespaceFilter`](crate::model::NamespaceFilter).
pub mod namespace_filter {

    /// A builder for [`NamespaceFilter`](crate::model::NamespaceFilter).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<crate::model::NamespaceFilterName>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) condition: std::option::Option<crate::model::FilterCondition>,
    }
    impl Builder {
        /// <p>Specify <code>TYPE</code>.</p>
        pub fn name(mut self, input: crate::model::NamespaceFilterName) -> Self {
            self.name = Some(input);
            self
        }
        /// <p>Specify <code>TYPE</code>.</p>
        pub fn set_name(mut self, input: std::option::Option<crate::model::NamespaceFilterName>) -> Self {
            self.name = input;
            self
        }
        /// <p>Specify <code>TYPE</code>.</p>
        pub fn get_name(&self) -> &std::option::Option<crate::model::NamespaceFilterName> {
            &self.name
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        ///
        /// <p>If you specify <code>EQ</code> for <code>Condition</code>, specify either <code>DNS_PUBLIC</code> or <code>DNS_PRIVATE</code>.</p>
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        /// <p>If you specify <code>EQ</code> for <code>Condition</code>, specify either <code>DNS_PUBLIC</code> or <code>DNS_PRIVATE</code>.</p>
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// <p>If you specify <code>EQ</code> for <code>Condition</code>, specify either <code>DNS_PUBLIC</code> or <code>DNS_PRIVATE</code>.</p>
        pub fn get_values(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.values
        }
        /// <p>The operator that you want to use to determine whether <code>ListNamespaces</code> returns a namespace.</p>
        pub fn condition(mut self, input: crate::model::FilterCondition) -> Self {
            self.condition = Some(input);
            self
        }
        /// <p>The operator that you want to use to determine whether <code>ListNamespaces</code> returns a namespace.</p>
        pub fn set_condition(mut self, input: std::option::Option<crate::model::FilterCondition>) -> Self {
            self.condition = input;
            self
        }
        /// <p>The operator that you want to use to determine whether <code>ListNamespaces</code> returns a namespace.</p>
        pub fn get_condition(&self) -> &std::option::Option<crate::model::FilterCondition> {
            &self.condition
        }
        /// Consumes the builder and constructs a [`NamespaceFilter`](crate::model::NamespaceFilter).
        pub fn build(self) -> crate::model::NamespaceFilter {
            crate::model::NamespaceFilter {
                name: self.name,
                values: self.values,
                condition: self.condition,
            }
        }
    }
}
impl NamespaceFilter {
    /// Creates a new builder-style object to manufacture [`NamespaceFilter`](crate::model::NamespaceFilter).
    pub fn builder() -> crate::model::namespace_filter::Builder {
        crate::model::namespace_filter::Builder::default()
    }
}

/// The attribute of a namespace that a namespace filter compares.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamespaceFilterName {
    #[allow(missing_docs)] // documentation missing in model
    Type,
}
impl NamespaceFilterName {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamespaceFilterName::Type => "TYPE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["TYPE"]
    }
}
impl std::str::FromStr for NamespaceFilterName {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "TYPE" => Ok(NamespaceFilterName::Type),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for NamespaceFilterName {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for NamespaceFilterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for NamespaceFilterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for NamespaceFilterName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for NamespaceFilterName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>A complex type that contains information that's specific to the namespace type.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NamespaceProperties {
    /// <p>A complex type that contains the ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
    #[serde(rename = "DnsProperties", default, skip_serializing_if = "Option::is_none")]
    pub dns_properties: std::option::Option<crate::model::DnsProperties>,
    /// <p>A complex type that contains the name of an HTTP namespace.</p>
    #[serde(rename = "HttpProperties", default, skip_serializing_if = "Option::is_none")]
    pub http_properties: std::option::Option<crate::model::HttpProperties>,
}
impl NamespaceProperties {
    /// <p>A complex type that contains the ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
    pub fn dns_properties(&self) -> std::option::Option<&crate::model::DnsProperties> {
        self.dns_properties.as_ref()
    }
    /// <p>A complex type that contains the name of an HTTP namespace.</p>
    pub fn http_properties(&self) -> std::option::Option<&crate::model::HttpProperties> {
        self.http_properties.as_ref()
    }
}
impl std::fmt::Display for NamespaceProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("DnsProperties", &self.dns_properties)
            .field("HttpProperties", &self.http_properties)
            .finish()
    }
}
/// See [`NamespaceProperties`](crate::model::NamespaceProperties).
pub mod namespace_properties {

    /// A builder for [`NamespaceProperties`](crate::model::NamespaceProperties).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) dns_properties: std::option::Option<crate::model::DnsProperties>,
        pub(crate) http_properties: std::option::Option<crate::model::HttpProperties>,
    }
    impl Builder {
        /// <p>A complex type that contains the ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
        pub fn dns_properties(mut self, input: crate::model::DnsProperties) -> Self {
            self.dns_properties = Some(input);
            self
        }
        /// <p>A complex type that contains the ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
        pub fn set_dns_properties(mut self, input: std::option::Option<crate::model::DnsProperties>) -> Self {
            self.dns_properties = input;
            self
        }
        /// <p>A complex type that contains the ID for the Route 53 hosted zone that Cloud Map creates when you create a namespace.</p>
        pub fn get_dns_properties(&self) -> &std::option::Option<crate::model::DnsProperties> {
            &self.dns_properties
        }
        /// <p>A complex type that contains the name of an HTTP namespace.</p>
        pub fn http_properties(mut self, input: crate::model::HttpProperties) -> Self {
            self.http_properties = Some(input);
            self
        }
        /// <p>A complex type that contains the name of an HTTP namespace.</p>
        pub fn set_http_properties(mut self, input: std::option::Option<crate::model::HttpProperties>) -> Self {
            self.http_properties = input;
            self
        }
        /// <p>A complex type that contains the name of an HTTP namespace.</p>
        pub fn get_http_properties(&self) -> &std::option::Option<crate::model::HttpProperties> {
            &self.http_properties
        }
        /// Consumes the builder and constructs a [`NamespaceProperties`](crate::model::NamespaceProperties).
        pub fn build(self) -> crate::model::NamespaceProperties {
            crate::model::NamespaceProperties {
                dns_properties: self.dns_properties,
                http_properties: self.http_properties,
            }
        }
    }
}
impl NamespaceProperties {
    /// Creates a new builder-style object to manufacture [`NamespaceProperties`](crate::model::NamespaceProperties).
    pub fn builder() -> crate::model::namespace_properties::Builder {
        crate::model::namespace_properties::Builder::default()
    }
}

/// <p>A complex type that contains information about a namespace.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NamespaceSummary {
    /// <p>The ID of the namespace.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
    #[serde(rename = "Arn", default, skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the namespace. When you create a namespace, Cloud Map automatically creates a Route 53 hosted zone that has the same name as the namespace.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>The type of the namespace, either public or private.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: std::option::Option<crate::model::NamespaceType>,
    /// <p>A description for the namespace.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The number of services that were created using the namespace.</p>
    #[serde(rename = "ServiceCount", default, skip_serializing_if = "Option::is_none")]
    pub service_count: std::option::Option<i32>,
    /// <p>A complex type that contains information that's specific to the namespace type.</p>
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: std::option::Option<crate::model::NamespaceProperties>,
    /// <p>The date and time that the namespace was created.</p>
    #[serde(rename = "CreateDate", default, skip_serializing_if = "Option::is_none", with = "crate::instant_epoch")]
    pub create_date: std::option::Option<aws_smithy_types::DateTime>,
}
impl NamespaceSummary {
    /// <p>The ID of the namespace.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The name of the namespace. When you create a namespace, Cloud Map automatically creates a Route 53 hosted zone that has the same name as the namespace.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The type of the namespace, either public or private.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::NamespaceType> {
        self.r#type.as_ref()
    }
    /// <p>A description for the namespace.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The number of services that were created using the namespace.</p>
    pub fn service_count(&self) -> std::option::Option<i32> {
        self.service_count
    }
    /// <p>A complex type that contains information that's specific to the namespace type.</p>
    pub fn properties(&self) -> std::option::Option<&crate::model::NamespaceProperties> {
        self.properties.as_ref()
    }
    /// <p>The date and time that the namespace was created.</p>
    pub fn create_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.create_date.as_ref()
    }
}
impl Eq for NamespaceSummary {}
impl std::hash::Hash for NamespaceSummary {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.id, state);
        std::hash::Hash::hash(&self.arn, state);
        std::hash::Hash::hash(&self.name, state);
        std::hash::Hash::hash(&self.r#type, state);
        std::hash::Hash::hash(&self.description, state);
        std::hash::Hash::hash(&self.service_count, state);
        std::hash::Hash::hash(&self.properties, state);
        std::hash::Hash::hash(&self.create_date.map(|date| (date.secs(), date.subsec_nanos())), state);
    }
}
impl std::fmt::Display for NamespaceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Arn", &self.arn)
            .field("Name", &self.name)
            .field("Type", &self.r#type)
            .field("Description", &self.description)
            .field("ServiceCount", &self.service_count)
            .field("Properties", &self.properties)
            .field("CreateDate", &self.create_date)
            .finish()
    }
}
/// See [`NamespaceSummary`](crate::model::NamespaceSummary).
pub mod namespace_summary {

    /// A builder for [`NamespaceSummary`](crate::model::NamespaceSummary).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::NamespaceType>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) service_count: std::option::Option<i32>,
        pub(crate) properties: std::option::Option<crate::model::NamespaceProperties>,
        pub(crate) create_date: std::option::Option<aws_smithy_types::DateTime>,
    }
    impl Builder {
        /// <p>The ID of the namespace.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the namespace.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the namespace.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the namespace when you create it.</p>
        pub fn get_arn(&self) -> &std::option::Option<std::string::String> {
            &self.arn
        }
        /// <p>The name of the namespace. When you create a namespace, Cloud Map automatically creates a Route 53 hosted zone that has the same name as the namespace.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the namespace. When you create a namespace, Cloud Map automatically creates a Route 53 hosted zone that has the same name as the namespace.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name of the namespace. When you create a namespace, Cloud Map automatically creates a Route 53 hosted zone that has the same name as the namespace.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The type of the namespace, either public or private.</p>
        pub fn r#type(mut self, input: crate::model::NamespaceType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The type of the namespace, either public or private.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::NamespaceType>) -> Self {
            self.r#type = input;
            self
        }
        /// <p>The type of the namespace, either public or private.</p>
        pub fn get_type(&self) -> &std::option::Option<crate::model::NamespaceType> {
            &self.r#type
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
        /// <p>The number of services that were created using the namespace.</p>
        pub fn service_count(mut self, input: i32) -> Self {
            self.service_count = Some(input);
            self
        }
        /// <p>The number of services that were created using the namespace.</p>
        pub fn set_service_count(mut self, input: std::option::Option<i32>) -> Self {
            self.service_count = input;
            self
        }
        /// <p>The number of services that were created using the namespace.</p>
        pub fn get_service_count(&self) -> &std::option::Option<i32> {
            &self.service_count
        }
        /// <p>A complex type that contains information that's specific to the namespace type.</p>
        pub fn properties(mut self, input: crate::model::NamespaceProperties) -> Self {
            self.properties = Some(input);
            self
        }
        /// <p>A complex type that contains information that's specific to the namespace type.</p>
        pub fn set_properties(mut self, input: std::option::Option<crate::model::NamespaceProperties>) -> Self {
            self.properties = input;
            self
        }
        /// <p>A complex type that contains information that's specific to the namespace type.</p>
        pub fn get_properties(&self) -> &std::option::Option<crate::model::NamespaceProperties> {
            &self.properties
        }
        /// <p>The date and time that the namespace was created.</p>
        pub fn create_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.create_date = Some(input);
            self
        }
        /// <p>The date and time that the namespace was created.</p>
        pub fn set_create_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.create_date = input;
            self
        }
        /// <p>The date and time that the namespace was created.</p>
        pub fn get_create_date(&self) -> &std::option::Option<aws_smithy_types::DateTime> {
            &self.create_date
        }
        /// Consumes the builder and constructs a [`NamespaceSummary`](crate::model::NamespaceSummary).
        pub fn build(self) -> crate::model::NamespaceSummary {
            crate::model::NamespaceSummary {
                id: self.id,
                arn: self.arn,
                name: self.name,
                r#type: self.r#type,
                description: self.description,
                service_count: self.service_count,
                properties: self.properties,
                create_date: self.create_date,
            }
        }
    }
}
impl NamespaceSummary {
    /// Creates a new builder-style object to manufacture [`NamespaceSummary`](crate::model::NamespaceSummary).
    pub fn builder() -> crate::model::namespace_summary::Builder {
        crate::model::namespace_summary::Builder::default()
    }
}

/// The kind of namespace: public DNS, private DNS or HTTP.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamespaceType {
    #[allow(missing_docs)] // documentation missing in model
    DnsPublic,
    #[allow(missing_docs)] // documentation missing in model
    DnsPrivate,
    #[allow(missing_docs)] // documentation missing in model
    Http,
}
impl NamespaceType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamespaceType::DnsPublic => "DNS_PUBLIC",
            NamespaceType::DnsPrivate => "DNS_PRIVATE",
            NamespaceType::Http => "HTTP",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["DNS_PUBLIC", "DNS_PRIVATE", "HTTP"]
    }
}
impl std::str::FromStr for NamespaceType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "DNS_PUBLIC" => Ok(NamespaceType::DnsPublic),
            "DNS_PRIVATE" => Ok(NamespaceType::DnsPrivate),
            "HTTP" => Ok(NamespaceType::Http),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for NamespaceType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for NamespaceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for NamespaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for NamespaceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for NamespaceType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>A complex type that contains information about a specified operation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Operation {
    /// <p>The ID of the operation that you want to get information about.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>The name of the operation that's associated with the specified ID.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: std::option::Option<crate::model::OperationType>,
    /// <p>The status of the operation.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: std::option::Option<crate::model::OperationStatus>,
    /// <p>If the value of <code>Status</code> is <code>FAIL</code>, the reason that the operation failed.</p>
    #[serde(rename = "ErrorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: std::option::Option<std::string::String>,
    /// <p>The code associated with <code>ErrorMessage</code>.</p>
    #[serde(rename = "ErrorCode", default, skip_serializing_if = "Option::is_none")]
    pub error_code: std::option::Option<std::string::String>,
    /// <p>The date and time that the request was submitted.</p>
    #[serde(rename = "CreateDate", default, skip_serializing_if = "Option::is_none", with = "crate::instant_epoch")]
    pub create_date: std::option::Option<aws_smithy_types::DateTime>,
    /// <p>The date and time that the value of <code>Status</code> changed to the current value.</p>
    #[serde(rename = "UpdateDate", default, skip_serializing_if = "Option::is_none", with = "crate::instant_epoch")]
    pub update_date: std::option::Option<aws_smithy_types::DateTime>,
    /// <p>The name of the target entity that's associated with the operation, keyed by the kind of target.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: std::option::Option<std::collections::BTreeMap<crate::model::OperationTargetType, std::string::String>>,
}
impl Operation {
    /// <p>The ID of the operation that you want to get information about.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the operation that's associated with the specified ID.</p>
    pub fn r#type(&self) -> std::option::Option<&crate::model::OperationType> {
        self.r#type.as_ref()
    }
    /// <p>The status of the operation.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::OperationStatus> {
        self.status.as_ref()
    }
    /// <p>If the value of <code>Status</code> is <code>FAIL</code>, the reason that the operation failed.</p>
    pub fn error_message(&self) -> std::option::Option<&str> {
        self.error_message.as_deref()
    }
    /// <p>The code associated with <code>ErrorMessage</code>.</p>
    pub fn error_code(&self) -> std::option::Option<&str> {
        self.error_code.as_deref()
    }
    /// <p>The date and time that the request was submitted.</p>
    pub fn create_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.create_date.as_ref()
    }
    /// <p>The date and time that the value of <code>Status</code> changed to the current value.</p>
    pub fn update_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.update_date.as_ref()
    }
    /// <p>The name of the target entity that's associated with the operation, keyed by the kind of target.</p>
    pub fn targets(&self) -> std::option::Option<&std::collections::BTreeMap<crate::model::OperationTargetType, std::string::String>> {
        self.targets.as_ref()
    }
}
impl Eq for Operation {}
impl std::hash::Hash for Operation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.id, state);
        std::hash::Hash::hash(&self.r#type, state);
        std::hash::Hash::hash(&self.status, state);
        std::hash::Hash::hash(&self.error_message, state);
        std::hash::Hash::hash(&self.error_code, state);
        std::hash::Hash::hash(&self.create_date.map(|date| (date.secs(), date.subsec_nanos())), state);
        std::hash::Hash::hash(&self.update_date.map(|date| (date.secs(), date.subsec_nanos())), state);
        std::hash::Hash::hash(&self.targets, state);
    }
}
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Type", &self.r#type)
            .field("Status", &self.status)
            .field("ErrorMessage", &self.error_message)
            .field("ErrorCode", &self.error_code)
            .field("CreateDate", &self.create_date)
            .field("UpdateDate", &self.update_date)
            .field("Targets", &self.targets)
            .finish()
    }
}
/// See [`Operation`](crate::model::Operation).
pub mod operation {

    /// A builder for [`Operation`](crate::model::Operation).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::OperationType>,
        pub(crate) status: std::option::Option<crate::model::OperationStatus>,
        pub(crate) error_message: std::option::Option<std::string::String>,
        pub(crate) error_code: std::option::Option<std::string::String>,
        pub(crate) create_date: std::option::Option<aws_smithy_types::DateTime>,
        pub(crate) update_date: std::option::Option<aws_smithy_types::DateTime>,
        pub(crate) targets: std::option::Option<std::collections::BTreeMap<crate::model::OperationTargetType, std::string::String>>,
    }
    impl Builder {
        /// <p>The ID of the operation that you want to get information about.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID of the operation that you want to get information about.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID of the operation that you want to get information about.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The name of the operation that's associated with the specified ID.</p>
        pub fn r#type(mut self, input: crate::model::OperationType) -> Self {
            self.r#type = Some(input);
            self
        }
        /// <p>The name of the operation that's associated with the specified ID.</p>
        pub fn set_type(mut self, input: std::option::Option<crate::model::OperationType>) -> Self {
            self.r#type = input;
            self
        }
        /// <p>The name of the operation that's associated with the specified ID.</p>
        pub fn get_type(&self) -> &std::option::Option<crate::model::OperationType> {
            &self.r#type
        }
        /// <p>The status of the operation.</p>
        pub fn status(mut self, input: crate::model::OperationStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The status of the operation.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::OperationStatus>) -> Self {
            self.status = input;
            self
        }
        /// <p>The status of the operation.</p>
        pub fn get_status(&self) -> &std::option::Option<crate::model::OperationStatus> {
            &self.status
        }
        /// <p>If the value of <code>Status</code> is <code>FAIL</code>, the reason that the operation failed.</p>
        pub fn error_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.error_message = Some(input.into());
            self
        }
        /// <p>If the value of <code>Status</code> is <code>FAIL</code>, the reason that the operation failed.</p>
        pub fn set_error_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error_message = input;
            self
        }
        /// <p>If the value of <code>Status</code> is <code>FAIL</code>, the reason that the operation failed.</p>
        pub fn get_error_message(&self) -> &std::option::Option<std::string::String> {
            &self.error_message
        }
        /// <p>The code associated with <code>ErrorMessage</code>.</p>
        pub fn error_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.error_code = Some(input.into());
            self
        }
        /// <p>The code associated with <code>ErrorMessage</code>.</p>
        pub fn set_error_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.error_code = input;
            self
        }
        /// <p>The code associated with <code>ErrorMessage</code>.</p>
        pub fn get_error_code(&self) -> &std::option::Option<std::string::String> {
            &self.error_code
        }
        /// <p>The date and time that the request was submitted.</p>
        pub fn create_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.create_date = Some(input);
            self
        }
        /// <p>The date and time that the request was submitted.</p>
        pub fn set_create_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.create_date = input;
            self
        }
        /// <p>The date and time that the request was submitted.</p>
        pub fn get_create_date(&self) -> &std::option::Option<aws_smithy_types::DateTime> {
            &self.create_date
        }
        /// <p>The date and time that the value of <code>Status</code> changed to the current value.</p>
        pub fn update_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.update_date = Some(input);
            self
        }
        /// <p>The date and time that the value of <code>Status</code> changed to the current value.</p>
        pub fn set_update_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.update_date = input;
            self
        }
        /// <p>The date and time that the value of <code>Status</code> changed to the current value.</p>
        pub fn get_update_date(&self) -> &std::option::Option<aws_smithy_types::DateTime> {
            &self.update_date
        }
        /// Adds a key-value pair to `targets`.
        ///
        /// To override the contents of this collection use [`set_targets`](Self::set_targets).
        ///
        /// <p>The name of the target entity that's associated with the operation, keyed by the kind of target.</p>
        pub fn targets(mut self, k: crate::model::OperationTargetType, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.targets.unwrap_or_default();
            hash_map.insert(k, v.into());
            self.targets = Some(hash_map);
            self
        }
        /// <p>The name of the target entity that's associated with the operation, keyed by the kind of target.</p>
        pub fn set_targets(mut self, input: std::option::Option<std::collections::BTreeMap<crate::model::OperationTargetType, std::string::String>>) -> Self {
            self.targets = input;
            self
        }
        /// <p>The name of the target entity that's associated with the operation, keyed by the kind of target.</p>
        pub fn get_targets(&self) -> &std::option::Option<std::collections::BTreeMap<crate::model::OperationTargetType, std::string::String>> {
            &self.targets
        }
        /// Consumes the builder and constructs a [`Operation`](crate::model::Operation).
        pub fn build(self) -> crate::model::Operation {
            crate::model::Operation {
                id: self.id,
                r#type: self.r#type,
                status: self.status,
                error_message: self.error_message,
                error_code: self.error_code,
                create_date: self.create_date,
                update_date: self.update_date,
                targets: self.targets,
            }
        }
    }
}
impl Operation {
    /// Creates a new builder-style object to manufacture [`Operation`](crate::model::Operation).
    pub fn builder() -> crate::model::operation::Builder {
        crate::model::operation::Builder::default()
    }
}

/// <p>A complex type that lets you select the operations that you want to list.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OperationFilter {
    /// <p>Specify the operations that you want to get.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<crate::model::OperationFilterName>,
    /// <p>Specify values that are applicable to the value that you specify for <code>Name</code>.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The operator that you want to use to determine whether an operation matches the specified value.</p>
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: std::option::Option<crate::model::FilterCondition>,
}
impl OperationFilter {
    /// <p>Specify the operations that you want to get.</p>
    pub fn name(&self) -> std::option::Option<&crate::model::OperationFilterName> {
        self.name.as_ref()
    }
    /// <p>Specify values that are applicable to the value that you specify for <code>Name</code>.</p>
    pub fn values(&self) -> std::option::Option<&[std::string::String]> {
        self.values.as_deref()
    }
    /// <p>The operator that you want to use to determine whether an operation matches the specified value.</p>
    pub fn condition(&self) -> std::option::Option<&crate::model::FilterCondition> {
        self.condition.as_ref()
    }
}
impl std::fmt::Display for OperationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("Values", &self.values)
            .field("Condition", &self.condition)
            .finish()
    }
}
/// See [`OperationFilter`](crate::model::OperationFilter).
pub mod operation_filter {

    /// A builder for [`OperationFilter`](crate::model::OperationFilter).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<crate::model::OperationFilterName>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) condition: std::option::Option<crate::model::FilterCondition>,
    }
    impl Builder {
        /// <p>Specify the operations that you want to get.</p>
        pub fn name(mut self, input: crate::model::OperationFilterName) -> Self {
            self.name = Some(input);
            self
        }
        /// <p>Specify the operations that you want to get.</p>
        pub fn set_name(mut self, input: std::option::Option<crate::model::OperationFilterName>) -> Self {
            self.name = input;
            self
        }
        /// <p>Specify the operations that you want to get.</p>
        pub fn get_name(&self) -> &std::option::Option<crate::model::OperationFilterName> {
            &self.name
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        ///
        /// <p>Specify values that are applicable to the value that you specify for <code>Name</code>.</p>
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        /// <p>Specify values that are applicable to the value that you specify for <code>Name</code>.</p>
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// <p>Specify values that are applicable to the value that you specify for <code>Name</code>.</p>
        pub fn get_values(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.values
        }
        /// <p>The operator that you want to use to determine whether an operation matches the specified value.</p>
        pub fn condition(mut self, input: crate::model::FilterCondition) -> Self {
            self.condition = Some(input);
            self
        }
        /// <p>The operator that you want to use to determine whether an operation matches the specified value.</p>
        pub fn set_condition(mut self, input: std::option::Option<crate::model::FilterCondition>) -> Self {
            self.condition = input;
            self
        }
        /// <p>The operator that you want to use to determine whether an operation matches the specified value.</p>
        pub fn get_condition(&self) -> &std::option::Option<crate::model::FilterCondition> {
            &self.condition
        }
        /// Consumes the builder and constructs a [`OperationFilter`](crate::model::OperationFilter).
        pub fn build(self) -> crate::model::OperationFilter {
            crate::model::OperationFilter {
                name: self.name,
                values: self.values,
                condition: self.condition,
            }
        }
    }
}
impl OperationFilter {
    /// Creates a new builder-style object to manufacture [`OperationFilter`](crate::model::OperationFilter).
    pub fn builder() -> crate::model::operation_filter::Builder {
        crate::model::operation_filter::Builder::default()
    }
}

/// The attribute of an operation that an operation filter compares.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationFilterName {
    #[allow(missing_docs)] // documentation missing in model
    NamespaceId,
    #[allow(missing_docs)] // documentation missing in model
    ServiceId,
    #[allow(missing_docs)] // documentation missing in model
    Status,
    #[allow(missing_docs)] // documentation missing in model
    Type,
    #[allow(missing_docs)] // documentation missing in model
    UpdateDate,
}
impl OperationFilterName {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationFilterName::NamespaceId => "NAMESPACE_ID",
            OperationFilterName::ServiceId => "SERVICE_ID",
            OperationFilterName::Status => "STATUS",
            OperationFilterName::Type => "TYPE",
            OperationFilterName::UpdateDate => "UPDATE_DATE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NAMESPACE_ID", "SERVICE_ID", "STATUS", "TYPE", "UPDATE_DATE"]
    }
}
impl std::str::FromStr for OperationFilterName {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NAMESPACE_ID" => Ok(OperationFilterName::NamespaceId),
            "SERVICE_ID" => Ok(OperationFilterName::ServiceId),
            "STATUS" => Ok(OperationFilterName::Status),
            "TYPE" => Ok(OperationFilterName::Type),
            "UPDATE_DATE" => Ok(OperationFilterName::UpdateDate),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for OperationFilterName {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for OperationFilterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for OperationFilterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for OperationFilterName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for OperationFilterName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The progress of an asynchronous operation.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationStatus {
    #[allow(missing_docs)] // documentation missing in model
    Submitted,
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Success,
    #[allow(missing_docs)] // documentation missing in model
    Fail,
}
impl OperationStatus {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Submitted => "SUBMITTED",
            OperationStatus::Pending => "PENDING",
            OperationStatus::Success => "SUCCESS",
            OperationStatus::Fail => "FAIL",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SUBMITTED", "PENDING", "SUCCESS", "FAIL"]
    }
}
impl std::str::FromStr for OperationStatus {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(OperationStatus::Submitted),
            "PENDING" => Ok(OperationStatus::Pending),
            "SUCCESS" => Ok(OperationStatus::Success),
            "FAIL" => Ok(OperationStatus::Fail),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for OperationStatus {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for OperationStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for OperationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for OperationStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>A complex type that contains information about an operation that matches the criteria that you specified in a <code>ListOperations</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OperationSummary {
    /// <p>The ID for an operation.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>The status of the operation.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: std::option::Option<crate::model::OperationStatus>,
}
impl OperationSummary {
    /// <p>The ID for an operation.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The status of the operation.</p>
    pub fn status(&self) -> std::option::Option<&crate::model::OperationStatus> {
        self.status.as_ref()
    }
}
impl std::fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Status", &self.status)
            .finish()
    }
}
/// See [`OperationSummary`](crate::model::OperationSummary).
pub mod operation_summary {

    /// A builder for [`OperationSummary`](crate::model::OperationSummary).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::OperationStatus>,
    }
    impl Builder {
        /// <p>The ID for an operation.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID for an operation.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID for an operation.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The status of the operation.</p>
        pub fn status(mut self, input: crate::model::OperationStatus) -> Self {
            self.status = Some(input);
            self
        }
        /// <p>The status of the operation.</p>
        pub fn set_status(mut self, input: std::option::Option<crate::model::OperationStatus>) -> Self {
            self.status = input;
            self
        }
        /// <p>The status of the operation.</p>
        pub fn get_status(&self) -> &std::option::Option<crate::model::OperationStatus> {
            &self.status
        }
        /// Consumes the builder and constructs a [`OperationSummary`](crate::model::OperationSummary).
        pub fn build(self) -> crate::model::OperationSummary {
            crate::model::OperationSummary {
                id: self.id,
                status: self.status,
            }
        }
    }
}
impl OperationSummary {
    /// Creates a new builder-style object to manufacture [`OperationSummary`](crate::model::OperationSummary).
    pub fn builder() -> crate::model::operation_summary::Builder {
        crate::model::operation_summary::Builder::default()
    }
}

/// The kind of resource that an operation acts on.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationTargetType {
    #[allow(missing_docs)] // documentation missing in model
    Namespace,
    #[allow(missing_docs)] // documentation missing in model
    Service,
    #[allow(missing_docs)] // documentation missing in model
    Instance,
}
impl OperationTargetType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationTargetType::Namespace => "NAMESPACE",
            OperationTargetType::Service => "SERVICE",
            OperationTargetType::Instance => "INSTANCE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NAMESPACE", "SERVICE", "INSTANCE"]
    }
}
impl std::str::FromStr for OperationTargetType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NAMESPACE" => Ok(OperationTargetType::Namespace),
            "SERVICE" => Ok(OperationTargetType::Service),
            "INSTANCE" => Ok(OperationTargetType::Instance),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for OperationTargetType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for OperationTargetType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for OperationTargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for OperationTargetType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for OperationTargetType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The name of the action that an operation performs.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationType {
    #[allow(missing_docs)] // documentation missing in model
    CreateNamespace,
    #[allow(missing_docs)] // documentation missing in model
    DeleteNamespace,
    #[allow(missing_docs)] // documentation missing in model
    UpdateService,
    #[allow(missing_docs)] // documentation missing in model
    RegisterInstance,
    #[allow(missing_docs)] // documentation missing in model
    DeregisterInstance,
}
impl OperationType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::CreateNamespace => "CREATE_NAMESPACE",
            OperationType::DeleteNamespace => "DELETE_NAMESPACE",
            OperationType::UpdateService => "UPDATE_SERVICE",
            OperationType::RegisterInstance => "REGISTER_INSTANCE",
            OperationType::DeregisterInstance => "DEREGISTER_INSTANCE",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["CREATE_NAMESPACE", "DELETE_NAMESPACE", "UPDATE_SERVICE", "REGISTER_INSTANCE", "DEREGISTER_INSTANCE"]
    }
}
impl std::str::FromStr for OperationType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "CREATE_NAMESPACE" => Ok(OperationType::CreateNamespace),
            "DELETE_NAMESPACE" => Ok(OperationType::DeleteNamespace),
            "UPDATE_SERVICE" => Ok(OperationType::UpdateService),
            "REGISTER_INSTANCE" => Ok(OperationType::RegisterInstance),
            "DEREGISTER_INSTANCE" => Ok(OperationType::DeregisterInstance),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for OperationType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for OperationType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for OperationType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for OperationType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The type of DNS record that Route 53 returns in response to DNS queries.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    #[allow(missing_docs)] // documentation missing in model
    Srv,
    #[allow(missing_docs)] // documentation missing in model
    A,
    #[allow(missing_docs)] // documentation missing in model
    Aaaa,
    #[allow(missing_docs)] // documentation missing in model
    Cname,
}
impl RecordType {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Srv => "SRV",
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SRV", "A", "AAAA", "CNAME"]
    }
}
impl std::str::FromStr for RecordType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SRV" => Ok(RecordType::Srv),
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CNAME" => Ok(RecordType::Cname),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for RecordType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for RecordType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for RecordType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for RecordType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The routing policy that Route 53 applies to the records created for a service.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoutingPolicy {
    #[allow(missing_docs)] // documentation missing in model
    Multivalue,
    #[allow(missing_docs)] // documentation missing in model
    Weighted,
}
impl RoutingPolicy {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingPolicy::Multivalue => "MULTIVALUE",
            RoutingPolicy::Weighted => "WEIGHTED",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["MULTIVALUE", "WEIGHTED"]
    }
}
impl std::str::FromStr for RoutingPolicy {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "MULTIVALUE" => Ok(RoutingPolicy::Multivalue),
            "WEIGHTED" => Ok(RoutingPolicy::Weighted),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for RoutingPolicy {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for RoutingPolicy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for RoutingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for RoutingPolicy {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for RoutingPolicy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>A complex type that contains changes to an existing service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ServiceChange {
    /// <p>A description for the service.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    #[serde(rename = "DnsConfig", default, skip_serializing_if = "Option::is_none")]
    pub dns_config: std::option::Option<crate::model::DnsConfigChange>,
    /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
    #[serde(rename = "HealthCheckConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
}
impl ServiceChange {
    /// <p>A description for the service.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    pub fn dns_config(&self) -> std::option::Option<&crate::model::DnsConfigChange> {
        self.dns_config.as_ref()
    }
    /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
    pub fn health_check_config(&self) -> std::option::Option<&crate::model::HealthCheckConfig> {
        self.health_check_config.as_ref()
    }
}
impl std::fmt::Display for ServiceChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Description", &self.description)
            .field("DnsConfig", &self.dns_config)
            .field("HealthCheckConfig", &self.health_check_config)
            .finish()
    }
}
/// See [`ServiceChange`](crate::model::ServiceChange).
pub mod service_change {

    /// A builder for [`ServiceChange`](crate::model::ServiceChange).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) dns_config: std::option::Option<crate::model::DnsConfigChange>,
        pub(crate) health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
    }
    impl Builder {
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
        pub fn dns_config(mut self, input: crate::model::DnsConfigChange) -> Self {
            self.dns_config = Some(input);
            self
        }
        /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn set_dns_config(mut self, input: std::option::Option<crate::model::DnsConfigChange>) -> Self {
            self.dns_config = input;
            self
        }
        /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn get_dns_config(&self) -> &std::option::Option<crate::model::DnsConfigChange> {
            &self.dns_config
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
        pub fn health_check_config(mut self, input: crate::model::HealthCheckConfig) -> Self {
            self.health_check_config = Some(input);
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
        pub fn set_health_check_config(mut self, input: std::option::Option<crate::model::HealthCheckConfig>) -> Self {
            self.health_check_config = input;
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
        pub fn get_health_check_config(&self) -> &std::option::Option<crate::model::HealthCheckConfig> {
            &self.health_check_config
        }
        /// Consumes the builder and constructs a [`ServiceChange`](crate::model::ServiceChange).
        pub fn build(self) -> crate::model::ServiceChange {
            crate::model::ServiceChange {
                description: self.description,
                dns_config: self.dns_config,
                health_check_config: self.health_check_config,
            }
        }
    }
}
impl ServiceChange {
    /// Creates a new builder-style object to manufacture [`ServiceChange`](crate::model::ServiceChange).
    pub fn builder() -> crate::model::service_change::Builder {
        crate::model::service_change::Builder::default()
    }
}

/// <p>A complex type that lets you specify the namespaces that you want to list services for.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ServiceFilter {
    /// <p>Specify <code>NAMESPACE_ID</code>.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<crate::model::ServiceFilterName>,
    /// <p>The values that are applicable to the value that you specify for <code>Condition</code> to filter the list of services.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
    /// <p>The operator that you want to use to determine whether a service is returned by <code>ListServices</code>.</p>
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: std::option::Option<crate::model::FilterCondition>,
}
impl ServiceFilter {
    /// <p>Specify <code>NAMESPACE_ID</code>.</p>
    pub fn name(&self) -> std::option::Option<&crate::model::ServiceFilterName> {
        self.name.as_ref()
    }
    /// <p>The values that are applicable to the value that you specify for <code>Condition</code> to filter the list of services.</p>
    pub fn values(&self) -> std::option::Option<&[std::string::String]> {
        self.values.as_deref()
    }
    /// <p>The operator that you want to use to determine whether a service is returned by <code>ListServices</code>.</p>
    pub fn condition(&self) -> std::option::Option<&crate::model::FilterCondition> {
        self.condition.as_ref()
    }
}
impl std::fmt::Display for ServiceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Name", &self.name)
            .field("Values", &self.values)
            .field("Condition", &self.condition)
            .finish()
    }
}
/// See [`ServiceFilter`](crate::model::ServiceFilter).
pub mod service_filter {

    /// A builder for [`ServiceFilter`](crate::model::ServiceFilter).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: std::option::Option<crate::model::ServiceFilterName>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) condition: std::option::Option<crate::model::FilterCondition>,
    }
    impl Builder {
        /// <p>Specify <code>NAMESPACE_ID</code>.</p>
        pub fn name(mut self, input: crate::model::ServiceFilterName) -> Self {
            self.name = Some(input);
            self
        }
        /// <p>Specify <code>NAMESPACE_ID</code>.</p>
        pub fn set_name(mut self, input: std::option::Option<crate::model::ServiceFilterName>) -> Self {
            self.name = input;
            self
        }
        /// <p>Specify <code>NAMESPACE_ID</code>.</p>
        pub fn get_name(&self) -> &std::option::Option<crate::model::ServiceFilterName> {
            &self.name
        }
        /// Appends an item to `values`.
        ///
        /// To override the contents of this collection use [`set_values`](Self::set_values).
        ///
        /// <p>The values that are applicable to the value that you specify for <code>Condition</code> to filter the list of services.</p>
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        /// <p>The values that are applicable to the value that you specify for <code>Condition</code> to filter the list of services.</p>
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// <p>The values that are applicable to the value that you specify for <code>Condition</code> to filter the list of services.</p>
        pub fn get_values(&self) -> &std::option::Option<std::vec::Vec<std::string::String>> {
            &self.values
        }
        /// <p>The operator that you want to use to determine whether a service is returned by <code>ListServices</code>.</p>
        pub fn condition(mut self, input: crate::model::FilterCondition) -> Self {
            self.condition = Some(input);
            self
        }
        /// <p>The operator that you want to use to determine whether a service is returned by <code>ListServices</code>.</p>
        pub fn set_condition(mut self, input: std::option::Option<crate::model::FilterCondition>) -> Self {
            self.condition = input;
            self
        }
        /// <p>The operator that you want to use to determine whether a service is returned by <code>ListServices</code>.</p>
        pub fn get_condition(&self) -> &std::option::Option<crate::model::FilterCondition> {
            &self.condition
        }
        /// Consumes the builder and constructs a [`ServiceFilter`](crate::model::ServiceFilter).
        pub fn build(self) -> crate::model::ServiceFilter {
            crate::model::ServiceFilter {
                name: self.name,
                values: self.values,
                condition: self.condition,
            }
        }
    }
}
impl ServiceFilter {
    /// Creates a new builder-style object to manufacture [`ServiceFilter`](crate::model::ServiceFilter).
    pub fn builder() -> crate::model::service_filter::Builder {
        crate::model::service_filter::Builder::default()
    }
}

/// The attribute of a service that a service filter compares.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceFilterName {
    #[allow(missing_docs)] // documentation missing in model
    NamespaceId,
}
impl ServiceFilterName {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceFilterName::NamespaceId => "NAMESPACE_ID",
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NAMESPACE_ID"]
    }
}
impl std::str::FromStr for ServiceFilterName {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NAMESPACE_ID" => Ok(ServiceFilterName::NamespaceId),
            other => Err(crate::error::UnknownVariantError::new(other)),
        }
    }
}
impl std::convert::TryFrom<&str> for ServiceFilterName {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
impl AsRef<str> for ServiceFilterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for ServiceFilterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for ServiceFilterName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ServiceFilterName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// <p>A complex type that contains information about the specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ServiceInfo {
    /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
    #[serde(rename = "Arn", default, skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the service.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>The ID of the namespace that was used to create the service.</p>
    #[serde(rename = "NamespaceId", default, skip_serializing_if = "Option::is_none")]
    pub namespace_id: std::option::Option<std::string::String>,
    /// <p>The description of the service.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The number of instances that are currently associated with the service.</p>
    #[serde(rename = "InstanceCount", default, skip_serializing_if = "Option::is_none")]
    pub instance_count: std::option::Option<i32>,
    /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    #[serde(rename = "DnsConfig", default, skip_serializing_if = "Option::is_none")]
    pub dns_config: std::option::Option<crate::model::DnsConfig>,
    /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains settings for an optional health check.</p>
    #[serde(rename = "HealthCheckConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
    /// <p>A complex type that contains information about an optional custom health check.</p>
    #[serde(rename = "HealthCheckCustomConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_custom_config: std::option::Option<crate::model::HealthCheckCustomConfig>,
    /// <p>The date and time that the service was created.</p>
    #[serde(rename = "CreateDate", default, skip_serializing_if = "Option::is_none", with = "crate::instant_epoch")]
    pub create_date: std::option::Option<aws_smithy_types::DateTime>,
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice.</p>
    #[serde(rename = "CreatorRequestId", default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: std::option::Option<std::string::String>,
}
impl ServiceInfo {
    /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The name of the service.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The ID of the namespace that was used to create the service.</p>
    pub fn namespace_id(&self) -> std::option::Option<&str> {
        self.namespace_id.as_deref()
    }
    /// <p>The description of the service.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The number of instances that are currently associated with the service.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }
    /// <p>A complex type that contains information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    pub fn dns_config(&self) -> std::option::Option<&crate::model::DnsConfig> {
        self.dns_config.as_ref()
    }
    /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains settings for an optional health check.</p>
    pub fn health_check_config(&self) -> std::option::Option<&crate::model::HealthCheckConfig> {
        self.health_check_config.as_ref()
    }
    /// <p>A complex type that contains information about an optional custom health check.</p>
    pub fn health_check_custom_config(&self) -> std::option::Option<&crate::model::HealthCheckCustomConfig> {
        self.health_check_custom_config.as_ref()
    }
    /// <p>The date and time that the service was created.</p>
    pub fn create_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.create_date.as_ref()
    }
    /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice.</p>
    pub fn creator_request_id(&self) -> std::option::Option<&str> {
        self.creator_request_id.as_deref()
    }
}
impl Eq for ServiceInfo {}
impl std::hash::Hash for ServiceInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.id, state);
        std::hash::Hash::hash(&self.arn, state);
        std::hash::Hash::hash(&self.name, state);
        std::hash::Hash::hash(&self.namespace_id, state);
        std::hash::Hash::hash(&self.description, state);
        std::hash::Hash::hash(&self.instance_count, state);
        std::hash::Hash::hash(&self.dns_config, state);
        std::hash::Hash::hash(&self.health_check_config, state);
        std::hash::Hash::hash(&self.health_check_custom_config, state);
        std::hash::Hash::hash(&self.create_date.map(|date| (date.secs(), date.subsec_nanos())), state);
        std::hash::Hash::hash(&self.creator_request_id, state);
    }
}
impl std::fmt::Display for ServiceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Arn", &self.arn)
            .field("Name", &self.name)
            .field("NamespaceId", &self.namespace_id)
            .field("Description", &self.description)
            .field("InstanceCount", &self.instance_count)
            .field("DnsConfig", &self.dns_config)
            .field("HealthCheckConfig", &self.health_check_config)
            .field("HealthCheckCustomConfig", &self.health_check_custom_config)
            .field("CreateDate", &self.create_date)
            .field("CreatorRequestId", &self.creator_request_id)
            .finish()
    }
}
/// See [`ServiceInfo`](crate::model::ServiceInfo).
pub mod service_info {

    /// A builder for [`ServiceInfo`](crate::model::ServiceInfo).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) namespace_id: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) dns_config: std::option::Option<crate::model::DnsConfig>,
        pub(crate) health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
        pub(crate) health_check_custom_config: std::option::Option<crate::model::HealthCheckCustomConfig>,
        pub(crate) create_date: std::option::Option<aws_smithy_types::DateTime>,
        pub(crate) creator_request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
        pub fn get_arn(&self) -> &std::option::Option<std::string::String> {
            &self.arn
        }
        /// <p>The name of the service.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the service.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name of the service.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The ID of the namespace that was used to create the service.</p>
        pub fn namespace_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.namespace_id = Some(input.into());
            self
        }
        /// <p>The ID of the namespace that was used to create the service.</p>
        pub fn set_namespace_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.namespace_id = input;
            self
        }
        /// <p>The ID of the namespace that was used to create the service.</p>
        pub fn get_namespace_id(&self) -> &std::option::Option<std::string::String> {
            &self.namespace_id
        }
        /// <p>The description of the service.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>The description of the service.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>The description of the service.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// <p>The number of instances that are currently associated with the service.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        /// <p>The number of instances that are currently associated with the service.</p>
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        /// <p>The number of instances that are currently associated with the service.</p>
        pub fn get_instance_count(&self) -> &std::option::Option<i32> {
            &self.instance_count
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
        /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains settings for an optional health check.</p>
        pub fn health_check_config(mut self, input: crate::model::HealthCheckConfig) -> Self {
            self.health_check_config = Some(input);
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains settings for an optional health check.</p>
        pub fn set_health_check_config(mut self, input: std::option::Option<crate::model::HealthCheckConfig>) -> Self {
            self.health_check_config = input;
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> A complex type that contains settings for an optional health check.</p>
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
        /// <p>The date and time that the service was created.</p>
        pub fn create_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.create_date = Some(input);
            self
        }
        /// <p>The date and time that the service was created.</p>
        pub fn set_create_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.create_date = input;
            self
        }
        /// <p>The date and time that the service was created.</p>
        pub fn get_create_date(&self) -> &std::option::Option<aws_smithy_types::DateTime> {
            &self.create_date
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice.</p>
        pub fn creator_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.creator_request_id = Some(input.into());
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice.</p>
        pub fn set_creator_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creator_request_id = input;
            self
        }
        /// <p>A unique string that identifies the request and that allows failed requests to be retried without the risk of running the operation twice.</p>
        pub fn get_creator_request_id(&self) -> &std::option::Option<std::string::String> {
            &self.creator_request_id
        }
        /// Consumes the builder and constructs a [`ServiceInfo`](crate::model::ServiceInfo).
        pub fn build(self) -> crate::model::ServiceInfo {
            crate::model::ServiceInfo {
                id: self.id,
                arn: self.arn,
                name: self.name,
                namespace_id: self.namespace_id,
                description: self.description,
                instance_count: self.instance_count,
                dns_config: self.dns_config,
                health_check_config: self.health_check_config,
                health_check_custom_config: self.health_check_custom_config,
                create_date: self.create_date,
                creator_request_id: self.creator_request_id,
            }
        }
    }
}
impl ServiceInfo {
    /// Creates a new builder-style object to manufacture [`ServiceInfo`](crate::model::ServiceInfo).
    pub fn builder() -> crate::model::service_info::Builder {
        crate::model::service_info::Builder::default()
    }
}

/// <p>A complex type that contains information about a specified service.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ServiceSummary {
    /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
    #[serde(rename = "Arn", default, skip_serializing_if = "Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    /// <p>The name of the service.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// <p>The description that you specify when you create the service.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: std::option::Option<std::string::String>,
    /// <p>The number of instances that are currently associated with the service.</p>
    #[serde(rename = "InstanceCount", default, skip_serializing_if = "Option::is_none")]
    pub instance_count: std::option::Option<i32>,
    /// <p>Information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    #[serde(rename = "DnsConfig", default, skip_serializing_if = "Option::is_none")]
    pub dns_config: std::option::Option<crate::model::DnsConfig>,
    /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
    #[serde(rename = "HealthCheckConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
    /// <p>Information about an optional custom health check.</p>
    #[serde(rename = "HealthCheckCustomConfig", default, skip_serializing_if = "Option::is_none")]
    pub health_check_custom_config: std::option::Option<crate::model::HealthCheckCustomConfig>,
    /// <p>The date and time that the service was created.</p>
    #[serde(rename = "CreateDate", default, skip_serializing_if = "Option::is_none", with = "crate::instant_epoch")]
    pub create_date: std::option::Option<aws_smithy_types::DateTime>,
}
impl ServiceSummary {
    /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
    pub fn id(&self) -> std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
    pub fn arn(&self) -> std::option::Option<&str> {
        self.arn.as_deref()
    }
    /// <p>The name of the service.</p>
    pub fn name(&self) -> std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The description that you specify when you create the service.</p>
    pub fn description(&self) -> std::option::Option<&str> {
        self.description.as_deref()
    }
    /// <p>The number of instances that are currently associated with the service.</p>
    pub fn instance_count(&self) -> std::option::Option<i32> {
        self.instance_count
    }
    /// <p>Information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
    pub fn dns_config(&self) -> std::option::Option<&crate::model::DnsConfig> {
        self.dns_config.as_ref()
    }
    /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
    pub fn health_check_config(&self) -> std::option::Option<&crate::model::HealthCheckConfig> {
        self.health_check_config.as_ref()
    }
    /// <p>Information about an optional custom health check.</p>
    pub fn health_check_custom_config(&self) -> std::option::Option<&crate::model::HealthCheckCustomConfig> {
        self.health_check_custom_config.as_ref()
    }
    /// <p>The date and time that the service was created.</p>
    pub fn create_date(&self) -> std::option::Option<&aws_smithy_types::DateTime> {
        self.create_date.as_ref()
    }
}
impl Eq for ServiceSummary {}
impl std::hash::Hash for ServiceSummary {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.id, state);
        std::hash::Hash::hash(&self.arn, state);
        std::hash::Hash::hash(&self.name, state);
        std::hash::Hash::hash(&self.description, state);
        std::hash::Hash::hash(&self.instance_count, state);
        std::hash::Hash::hash(&self.dns_config, state);
        std::hash::Hash::hash(&self.health_check_config, state);
        std::hash::Hash::hash(&self.health_check_custom_config, state);
        std::hash::Hash::hash(&self.create_date.map(|date| (date.secs(), date.subsec_nanos())), state);
    }
}
impl std::fmt::Display for ServiceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Id", &self.id)
            .field("Arn", &self.arn)
            .field("Name", &self.name)
            .field("Description", &self.description)
            .field("InstanceCount", &self.instance_count)
            .field("DnsConfig", &self.dns_config)
            .field("HealthCheckConfig", &self.health_check_config)
            .field("HealthCheckCustomConfig", &self.health_check_custom_config)
            .field("CreateDate", &self.create_date)
            .finish()
    }
}
/// See [`ServiceSummary`](crate::model::ServiceSummary).
pub mod service_summary {

    /// A builder for [`ServiceSummary`](crate::model::ServiceSummary).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) instance_count: std::option::Option<i32>,
        pub(crate) dns_config: std::option::Option<crate::model::DnsConfig>,
        pub(crate) health_check_config: std::option::Option<crate::model::HealthCheckConfig>,
        pub(crate) health_check_custom_config: std::option::Option<crate::model::HealthCheckCustomConfig>,
        pub(crate) create_date: std::option::Option<aws_smithy_types::DateTime>,
    }
    impl Builder {
        /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// <p>The ID that Cloud Map assigned to the service when you created it.</p>
        pub fn get_id(&self) -> &std::option::Option<std::string::String> {
            &self.id
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// <p>The Amazon Resource Name (ARN) that Cloud Map assigns to the service when you create it.</p>
        pub fn get_arn(&self) -> &std::option::Option<std::string::String> {
            &self.arn
        }
        /// <p>The name of the service.</p>
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        /// <p>The name of the service.</p>
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// <p>The name of the service.</p>
        pub fn get_name(&self) -> &std::option::Option<std::string::String> {
            &self.name
        }
        /// <p>The description that you specify when you create the service.</p>
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        /// <p>The description that you specify when you create the service.</p>
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// <p>The description that you specify when you create the service.</p>
        pub fn get_description(&self) -> &std::option::Option<std::string::String> {
            &self.description
        }
        /// <p>The number of instances that are currently associated with the service.</p>
        pub fn instance_count(mut self, input: i32) -> Self {
            self.instance_count = Some(input);
            self
        }
        /// <p>The number of instances that are currently associated with the service.</p>
        pub fn set_instance_count(mut self, input: std::option::Option<i32>) -> Self {
            self.instance_count = input;
            self
        }
        /// <p>The number of instances that are currently associated with the service.</p>
        pub fn get_instance_count(&self) -> &std::option::Option<i32> {
            &self.instance_count
        }
        /// <p>Information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn dns_config(mut self, input: crate::model::DnsConfig) -> Self {
            self.dns_config = Some(input);
            self
        }
        /// <p>Information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn set_dns_config(mut self, input: std::option::Option<crate::model::DnsConfig>) -> Self {
            self.dns_config = input;
            self
        }
        /// <p>Information about the Route 53 DNS records that you want Cloud Map to create when you register an instance.</p>
        pub fn get_dns_config(&self) -> &std::option::Option<crate::model::DnsConfig> {
            &self.dns_config
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
        pub fn health_check_config(mut self, input: crate::model::HealthCheckConfig) -> Self {
            self.health_check_config = Some(input);
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
        pub fn set_health_check_config(mut self, input: std::option::Option<crate::model::HealthCheckConfig>) -> Self {
            self.health_check_config = input;
            self
        }
        /// <p><i>Public DNS and HTTP namespaces only.</i> Settings for an optional health check.</p>
        pub fn get_health_check_config(&self) -> &std::option::Option<crate::model::HealthCheckConfig> {
            &self.health_check_config
        }
        /// <p>Information about an optional custom health check.</p>
        pub fn health_check_custom_config(mut self, input: crate::model::HealthCheckCustomConfig) -> Self {
            self.health_check_custom_config = Some(input);
            self
        }
        /// <p>Information about an optional custom health check.</p>
        pub fn set_health_check_custom_config(mut self, input: std::option::Option<crate::model::HealthCheckCustomConfig>) -> Self {
            self.health_check_custom_config = input;
            self
        }
        /// <p>Information about an optional custom health check.</p>
        pub fn get_health_check_custom_config(&self) -> &std::option::Option<crate::model::HealthCheckCustomConfig> {
            &self.health_check_custom_config
        }
        /// <p>The date and time that the service was created.</p>
        pub fn create_date(mut self, input: aws_smithy_types::DateTime) -> Self {
            self.create_date = Some(input);
            self
        }
        /// <p>The date and time that the service was created.</p>
        pub fn set_create_date(mut self, input: std::option::Option<aws_smithy_types::DateTime>) -> Self {
            self.create_date = input;
            self
        }
        /// <p>The date and time that the service was created.</p>
        pub fn get_create_date(&self) -> &std::option::Option<aws_smithy_types::DateTime> {
            &self.create_date
        }
        /// Consumes the builder and constructs a [`ServiceSummary`](crate::model::ServiceSummary).
        pub fn build(self) -> crate::model::ServiceSummary {
            crate::model::ServiceSummary {
                id: self.id,
                arn: self.arn,
                name: self.name,
                description: self.description,
                instance_count: self.instance_count,
                dns_config: self.dns_config,
                health_check_config: self.health_check_config,
                health_check_custom_config: self.health_check_custom_config,
                create_date: self.create_date,
            }
        }
    }
}
impl ServiceSummary {
    /// Creates a new builder-style object to manufacture [`ServiceSummary`](crate::model::ServiceSummary).
    pub fn builder() -> crate::model::service_summary::Builder {
        crate::model::service_summary::Builder::default()
    }
}

/// <p>A custom key-value pair that's associated with a resource.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tag {
    /// <p>The key identifier, or name, of the tag.</p>
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    /// <p>The string value that's associated with the key of the tag. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: std::option::Option<std::string::String>,
}
impl Tag {
    /// <p>The key identifier, or name, of the tag.</p>
    pub fn key(&self) -> std::option::Option<&str> {
        self.key.as_deref()
    }
    /// <p>The string value that's associated with the key of the tag. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
    pub fn value(&self) -> std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Key", &self.key)
            .field("Value", &self.value)
            .finish()
    }
}
/// See [`Tag`](crate::model::Tag).
pub mod tag {

    /// A builder for [`Tag`](crate::model::Tag).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>The key identifier, or name, of the tag.</p>
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        /// <p>The key identifier, or name, of the tag.</p>
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        /// <p>The key identifier, or name, of the tag.</p>
        pub fn get_key(&self) -> &std::option::Option<std::string::String> {
            &self.key
        }
        /// <p>The string value that's associated with the key of the tag. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        /// <p>The string value that's associated with the key of the tag. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// <p>The string value that's associated with the key of the tag. You can set the value of a tag to an empty string, but you can't set the value of a tag to null.</p>
        pub fn get_value(&self) -> &std::option::Option<std::string::String> {
            &self.value
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag).
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag).
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

crate::render::display_render!(
    CustomHealthStatus,
    DnsConfig,
    DnsConfigChange,
    DnsProperties,
    DnsRecord,
    FilterCondition,
    HealthCheckConfig,
    HealthCheckCustomConfig,
    HealthCheckType,
    HealthStatus,
    HealthStatusFilter,
    HttpInstanceSummary,
    HttpProperties,
    Instance,
    InstanceSummary,
    Namespace,
    NamespaceFilter,
    NamespaceFilterName,
    NamespaceProperties,
    NamespaceSummary,
    NamespaceType,
    Operation,
    OperationFilter,
    OperationFilterName,
    OperationStatus,
    OperationSummary,
    OperationTargetType,
    OperationType,
    RecordType,
    RoutingPolicy,
    ServiceChange,
    ServiceFilter,
    ServiceFilterName,
    ServiceInfo,
    ServiceSummary,
    Tag,
);
