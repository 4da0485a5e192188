/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

/// <p>The result of a <code>CreateHttpNamespace</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct CreateHttpNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl CreateHttpNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for CreateHttpNamespaceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`CreateHttpNamespaceOutput`](crate::output::CreateHttpNamespaceOutput).
pub mod create_http_namespace_output {

    /// A builder for [`CreateHttpNamespaceOutput`](crate::output::CreateHttpNamespaceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`CreateHttpNamespaceOutput`](crate::output::CreateHttpNamespaceOutput).
        pub fn build(self) -> crate::output::CreateHttpNamespaceOutput {
            crate::output::CreateHttpNamespaceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl CreateHttpNamespaceOutput {
    /// Creates a new builder-style object to manufacture [`CreateHttpNamespaceOutput`](crate::output::CreateHttpNamespaceOutput).
    pub fn builder() -> crate::output::create_http_namespace_output::Builder {
        crate::output::create_http_namespace_output::Builder::default()
    }
}

/// <p>The result of a <code>CreatePrivateDnsNamespace</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct CreatePrivateDnsNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl CreatePrivateDnsNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for CreatePrivateDnsNamespaceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`CreatePrivateDnsNamespaceOutput`](crate::output::CreatePrivateDnsNamespaceOutput).
pub mod create_private_dns_namespace_output {

    /// A builder for [`CreatePrivateDnsNamespaceOutput`](crate::output::CreatePrivateDnsNamespaceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`CreatePrivateDnsNamespaceOutput`](crate::output::CreatePrivateDnsNamespaceOutput).
        pub fn build(self) -> crate::output::CreatePrivateDnsNamespaceOutput {
            crate::output::CreatePrivateDnsNamespaceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl CreatePrivateDnsNamespaceOutput {
    /// Creates a new builder-style object to manufacture [`CreatePrivateDnsNamespaceOutput`](crate::output::CreatePrivateDnsNamespaceOutput).
    pub fn builder() -> crate::output::create_private_dns_namespace_output::Builder {
        crate::output::create_private_dns_namespace_output::Builder::default()
    }
}

/// <p>The result of a <code>CreatePublicDnsNamespace</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct CreatePublicDnsNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl CreatePublicDnsNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for CreatePublicDnsNamespaceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`CreatePublicDnsNamespaceOutput`](crate::output::CreatePublicDnsNamespaceOutput).
pub mod create_public_dns_namespace_output {

    /// A builder for [`CreatePublicDnsNamespaceOutput`](crate::output::CreatePublicDnsNamespaceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`CreatePublicDnsNamespaceOutput`](crate::output::CreatePublicDnsNamespaceOutput).
        pub fn build(self) -> crate::output::CreatePublicDnsNamespaceOutput {
            crate::output::CreatePublicDnsNamespaceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl CreatePublicDnsNamespaceOutput {
    /// Creates a new builder-style object to manufacture [`CreatePublicDnsNamespaceOutput`](crate::output::CreatePublicDnsNamespaceOutput).
    pub fn builder() -> crate::output::create_public_dns_namespace_output::Builder {
        crate::output::create_public_dns_namespace_output::Builder::default()
    }
}

/// <p>The result of a <code>CreateService</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct CreateServiceOutput {
    /// <p>A complex type that contains information about the new service.</p>
    #[serde(rename = "Service", default)]
    pub service: std::option::Option<crate::model::ServiceInfo>,
}
impl CreateServiceOutput {
    /// <p>A complex type that contains information about the new service.</p>
    pub fn service(&self) -> std::option::Option<&crate::model::ServiceInfo> {
        self.service.as_ref()
    }
}
impl std::fmt::Display for CreateServiceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Service", &self.service)
            .finish()
    }
}
/// See [`CreateServiceOutput`](crate::output::CreateServiceOutput).
pub mod create_service_output {

    /// A builder for [`CreateServiceOutput`](crate::output::CreateServiceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service: std::option::Option<crate::model::ServiceInfo>,
    }
    impl Builder {
        /// <p>A complex type that contains information about the new service.</p>
        pub fn service(mut self, input: crate::model::ServiceInfo) -> Self {
            self.service = Some(input);
            self
        }
        /// <p>A complex type that contains information about the new service.</p>
        pub fn set_service(mut self, input: std::option::Option<crate::model::ServiceInfo>) -> Self {
            self.service = input;
            self
        }
        /// <p>A complex type that contains information about the new service.</p>
        pub fn get_service(&self) -> &std::option::Option<crate::model::ServiceInfo> {
            &self.service
        }
        /// Consumes the builder and constructs a [`CreateServiceOutput`](crate::output::CreateServiceOutput).
        pub fn build(self) -> crate::output::CreateServiceOutput {
            crate::output::CreateServiceOutput {
                service: self.service,
            }
        }
    }
}
impl CreateServiceOutput {
    /// Creates a new builder-style object to manufacture [`CreateServiceOutput`](crate::output::CreateServiceOutput).
    pub fn builder() -> crate::output::create_service_output::Builder {
        crate::output::create_service_output::Builder::default()
    }
}

/// <p>The result of a <code>DeleteNamespace</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct DeleteNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl DeleteNamespaceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for DeleteNamespaceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`DeleteNamespaceOutput`](crate::output::DeleteNamespaceOutput).
pub mod delete_namespace_output {

    /// A builder for [`DeleteNamespaceOutput`](crate::output::DeleteNamespaceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`DeleteNamespaceOutput`](crate::output::DeleteNamespaceOutput).
        pub fn build(self) -> crate::output::DeleteNamespaceOutput {
            crate::output::DeleteNamespaceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl DeleteNamespaceOutput {
    /// Creates a new builder-style object to manufacture [`DeleteNamespaceOutput`](crate::output::DeleteNamespaceOutput).
    pub fn builder() -> crate::output::delete_namespace_output::Builder {
        crate::output::delete_namespace_output::Builder::default()
    }
}

/// <p>The result of a <code>DeleteService</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct DeleteServiceOutput {}
impl std::fmt::Display for DeleteServiceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f).finish()
    }
}
/// See [`DeleteServiceOutput`](crate::output::DeleteServiceOutput).
pub mod delete_service_output {

    /// A builder for [`DeleteServiceOutput`](crate::output::DeleteServiceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteServiceOutput`](crate::output::DeleteServiceOutput).
        pub fn build(self) -> crate::output::DeleteServiceOutput {
            crate::output::DeleteServiceOutput {}
        }
    }
}
impl DeleteServiceOutput {
    /// Creates a new builder-style object to manufacture [`DeleteServiceOutput`](crate::output::DeleteServiceOutput).
    pub fn builder() -> crate::output::delete_service_output::Builder {
        crate::output::delete_service_output::Builder::default()
    }
}

/// <p>The result of a <code>DeregisterInstance</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct DeregisterInstanceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl DeregisterInstanceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for DeregisterInstanceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`DeregisterInstanceOutput`](crate::output::DeregisterInstanceOutput).
pub mod deregister_instance_output {

    /// A builder for [`DeregisterInstanceOutput`](crate::output::DeregisterInstanceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`DeregisterInstanceOutput`](crate::output::DeregisterInstanceOutput).
        pub fn build(self) -> crate::output::DeregisterInstanceOutput {
            crate::output::DeregisterInstanceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl DeregisterInstanceOutput {
    /// Creates a new builder-style object to manufacture [`DeregisterInstanceOutput`](crate::output::DeregisterInstanceOutput).
    pub fn builder() -> crate::output::deregister_instance_output::Builder {
        crate::output::deregister_instance_output::Builder::default()
    }
}

/// <p>The result of a <code>DiscoverInstances</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct DiscoverInstancesOutput {
    /// <p>A complex type that contains one <code>HttpInstanceSummary</code> for each registered instance.</p>
    #[serde(rename = "Instances", default)]
    pub instances: std::option::Option<std::vec::Vec<crate::model::HttpInstanceSummary>>,
}
impl DiscoverInstancesOutput {
    /// <p>A complex type that contains one <code>HttpInstanceSummary</code> for each registered instance.</p>
    pub fn instances(&self) -> std::option::Option<&[crate::model::HttpInstanceSummary]> {
        self.instances.as_deref()
    }
}
impl std::fmt::Display for DiscoverInstancesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Instances", &self.instances)
            .finish()
    }
}
/// See [`DiscoverInstancesOutput`](crate::output::DiscoverInstancesOutput).
pub mod discover_instances_output {

    /// A builder for [`DiscoverInstancesOutput`](crate::output::DiscoverInstancesOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) instances: std::option::Option<std::vec::Vec<crate::model::HttpInstanceSummary>>,
    }
    impl Builder {
        /// Appends an item to `instances`.
        ///
        /// To override the contents of this collection use [`set_instances`](Self::set_instances).
        ///
        /// <p>A complex type that contains one <code>HttpInstanceSummary</code> for each registered instance.</p>
        pub fn instances(mut self, input: crate::model::HttpInstanceSummary) -> Self {
            let mut v = self.instances.unwrap_or_default();
            v.push(input);
            self.instances = Some(v);
            self
        }
        /// <p>A complex type that contains one <code>HttpInstanceSummary</code> for each registered instance.</p>
        pub fn set_instances(mut self, input: std::option::Option<std::vec::Vec<crate::model::HttpInstanceSummary>>) -> Self {
            self.instances = input;
            self
        }
        /// <p>A complex type that contains one <code>HttpInstanceSummary</code> for each registered instance.</p>
        pub fn get_instances(&self) -> &std::option::Option<std::vec::Vec<crate::model::HttpInstanceSummary>> {
            &self.instances
        }
        /// Consumes the builder and constructs a [`DiscoverInstancesOutput`](crate::output::DiscoverInstancesOutput).
        pub fn build(self) -> crate::output::DiscoverInstancesOutput {
            crate::output::DiscoverInstancesOutput {
                instances: self.instances,
            }
        }
    }
}
impl DiscoverInstancesOutput {
    /// Creates a new builder-style object to manufacture [`DiscoverInstancesOutput`](crate::output::DiscoverInstancesOutput).
    pub fn builder() -> crate::output::discover_instances_output::Builder {
        crate::output::discover_instances_output::Builder::default()
    }
}

/// <p>The result of a <code>GetInstance</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct GetInstanceOutput {
    /// <p>A complex type that contains information about a specified instance.</p>
    #[serde(rename = "Instance", default)]
    pub instance: std::option::Option<crate::model::Instance>,
}
impl GetInstanceOutput {
    /// <p>A complex type that contains information about a specified instance.</p>
    pub fn instance(&self) -> std::option::Option<&crate::model::Instance> {
        self.instance.as_ref()
    }
}
impl std::fmt::Display for GetInstanceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Instance", &self.instance)
            .finish()
    }
}
/// See [`GetInstanceOutput`](crate::output::GetInstanceOutput).
pub mod get_instance_output {

    /// A builder for [`GetInstanceOutput`](crate::output::GetInstanceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) instance: std::option::Option<crate::model::Instance>,
    }
    impl Builder {
        /// <p>A complex type that contains information about a specified instance.</p>
        pub fn instance(mut self, input: crate::model::Instance) -> Self {
            self.instance = Some(input);
            self
        }
        /// <p>A complex type that contains information about a specified instance.</p>
        pub fn set_instance(mut self, input: std::option::Option<crate::model::Instance>) -> Self {
            self.instance = input;
            self
        }
        /// <p>A complex type that contains information about a specified instance.</p>
        pub fn get_instance(&self) -> &std::option::Option<crate::model::Instance> {
            &self.instance
        }
        /// Consumes the builder and constructs a [`GetInstanceOutput`](crate::output::GetInstanceOutput).
        pub fn build(self) -> crate::output::GetInstanceOutput {
            crate::output::GetInstanceOutput {
                instance: self.instance,
            }
        }
    }
}
impl GetInstanceOutput {
    /// Creates a new builder-style object to manufacture [`GetInstanceOutput`](crate::output::GetInstanceOutput).
    pub fn builder() -> crate::output::get_instance_output::Builder {
        crate::output::get_instance_output::Builder::default()
    }
}

/// <p>The result of a <code>GetInstancesHealthStatus</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct GetInstancesHealthStatusOutput {
    /// <p>A complex type that contains the IDs and the health status of the instances that you specified in the <code>GetInstancesHealthStatus</code> request.</p>
    #[serde(rename = "Status", default)]
    pub status: std::option::Option<std::collections::BTreeMap<std::string::String, crate::model::HealthStatus>>,
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    #[serde(rename = "NextToken", default)]
    pub next_token: std::option::Option<std::string::String>,
}
impl GetInstancesHealthStatusOutput {
    /// <p>A complex type that contains the IDs and the health status of the instances that you specified in the <code>GetInstancesHealthStatus</code> request.</p>
    pub fn status(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, crate::model::HealthStatus>> {
        self.status.as_ref()
    }
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Display for GetInstancesHealthStatusOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Status", &self.status)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
/// See [`GetInstancesHealthStatusOutput`](crate::output::GetInstancesHealthStatusOutput).
pub mod get_instances_health_status_output {

    /// A builder for [`GetInstancesHealthStatusOutput`](crate::output::GetInstancesHealthStatusOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) status: std::option::Option<std::collections::BTreeMap<std::string::String, crate::model::HealthStatus>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Adds a key-value pair to `status`.
        ///
        /// To override the contents of this collection use [`set_status`](Self::set_status).
        ///
        /// <p>A complex type that contains the IDs and the health status of the instances that you specified in the <code>GetInstancesHealthStatus</code> request.</p>
        pub fn status(mut self, k: impl Into<std::string::String>, v: crate::model::HealthStatus) -> Self {
            let mut hash_map = self.status.unwrap_or_default();
            hash_map.insert(k.into(), v);
            self.status = Some(hash_map);
            self
        }
        /// <p>A complex type that contains the IDs and the health status of the instances that you specified in the <code>GetInstancesHealthStatus</code> request.</p>
        pub fn set_status(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, crate::model::HealthStatus>>) -> Self {
            self.status = input;
            self
        }
        /// <p>A complex type that contains the IDs and the health status of the instances that you specified in the <code>GetInstancesHealthStatus</code> request.</p>
        pub fn get_status(&self) -> &std::option::Option<std::collections::BTreeMap<std::string::String, crate::model::HealthStatus>> {
            &self.status
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`GetInstancesHealthStatusOutput`](crate::output::GetInstancesHealthStatusOutput).
        pub fn build(self) -> crate::output::GetInstancesHealthStatusOutput {
            crate::output::GetInstancesHealthStatusOutput {
                status: self.status,
                next_token: self.next_token,
            }
        }
    }
}
impl GetInstancesHealthStatusOutput {
    /// Creates a new builder-style object to manufacture [`GetInstancesHealthStatusOutput`](crate::output::GetInstancesHealthStatusOutput).
    pub fn builder() -> crate::output::get_instances_health_status_output::Builder {
        crate::output::get_instances_health_status_output::Builder::default()
    }
}

/// <p>The result of a <code>GetNamespace</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct GetNamespaceOutput {
    /// <p>A complex type that contains information about the specified namespace.</p>
    #[serde(rename = "Namespace", default)]
    pub namespace: std::option::Option<crate::model::Namespace>,
}
impl GetNamespaceOutput {
    /// <p>A complex type that contains information about the specified namespace.</p>
    pub fn namespace(&self) -> std::option::Option<&crate::model::Namespace> {
        self.namespace.as_ref()
    }
}
impl std::fmt::Display for GetNamespaceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Namespace", &self.namespace)
            .finish()
    }
}
/// See [`GetNamespaceOutput`](crate::output::GetNamespaceOutput).
pub mod get_namespace_output {

    /// A builder for [`GetNamespaceOutput`](crate::output::GetNamespaceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) namespace: std::option::Option<crate::model::Namespace>,
    }
    impl Builder {
        /// <p>A complex type that contains information about the specified namespace.</p>
        pub fn namespace(mut self, input: crate::model::Namespace) -> Self {
            self.namespace = Some(input);
            self
        }
        /// <p>A complex type that contains information about the specified namespace.</p>
        pub fn set_namespace(mut self, input: std::option::Option<crate::model::Namespace>) -> Self {
            self.namespace = input;
            self
        }
        /// <p>A complex type that contains information about the specified namespace.</p>
        pub fn get_namespace(&self) -> &std::option::Option<crate::model::Namespace> {
            &self.namespace
        }
        /// Consumes the builder and constructs a [`GetNamespaceOutput`](crate::output::GetNamespaceOutput).
        pub fn build(self) -> crate::output::GetNamespaceOutput {
            crate::output::GetNamespaceOutput {
                namespace: self.namespace,
            }
        }
    }
}
impl GetNamespaceOutput {
    /// Creates a new builder-style object to manufacture [`GetNamespaceOutput`](crate::output::GetNamespaceOutput).
    pub fn builder() -> crate::output::get_namespace_output::Builder {
        crate::output::get_namespace_output::Builder::default()
    }
}

/// <p>The result of a <code>GetOperation</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct GetOperationOutput {
    /// <p>A complex type that contains information about the operation.</p>
    #[serde(rename = "Operation", default)]
    pub operation: std::option::Option<crate::model::Operation>,
}
impl GetOperationOutput {
    /// <p>A complex type that contains information about the operation.</p>
    pub fn operation(&self) -> std::option::Option<&crate::model::Operation> {
        self.operation.as_ref()
    }
}
impl std::fmt::Display for GetOperationOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Operation", &self.operation)
            .finish()
    }
}
/// See [`GetOperationOutput`](crate::output::GetOperationOutput).
pub mod get_operation_output {

    /// A builder for [`GetOperationOutput`](crate::output::GetOperationOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation: std::option::Option<crate::model::Operation>,
    }
    impl Builder {
        /// <p>A complex type that contains information about the operation.</p>
        pub fn operation(mut self, input: crate::model::Operation) -> Self {
            self.operation = Some(input);
            self
        }
        /// <p>A complex type that contains information about the operation.</p>
        pub fn set_operation(mut self, input: std::option::Option<crate::model::Operation>) -> Self {
            self.operation = input;
            self
        }
        /// <p>A complex type that contains information about the operation.</p>
        pub fn get_operation(&self) -> &std::option::Option<crate::model::Operation> {
            &self.operation
        }
        /// Consumes the builder and constructs a [`GetOperationOutput`](crate::output::GetOperationOutput).
        pub fn build(self) -> crate::output::GetOperationOutput {
            crate::output::GetOperationOutput {
                operation: self.operation,
            }
        }
    }
}
impl GetOperationOutput {
    /// Creates a new builder-style object to manufacture [`GetOperationOutput`](crate::output::GetOperationOutput).
    pub fn builder() -> crate::output::get_operation_output::Builder {
        crate::output::get_operation_output::Builder::default()
    }
}

/// <p>The result of a <code>GetService</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct GetServiceOutput {
    /// <p>A complex type that contains information about the service.</p>
    #[serde(rename = "Service", default)]
    pub service: std::option::Option<crate::model::ServiceInfo>,
}
impl GetServiceOutput {
    /// <p>A complex type that contains information about the service.</p>
    pub fn service(&self) -> std::option::Option<&crate::model::ServiceInfo> {
        self.service.as_ref()
    }
}
impl std::fmt::Display for GetServiceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Service", &self.service)
            .finish()
    }
}
/// See [`GetServiceOutput`](crate::output::GetServiceOutput).
pub mod get_service_output {

    /// A builder for [`GetServiceOutput`](crate::output::GetServiceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) service: std::option::Option<crate::model::ServiceInfo>,
    }
    impl Builder {
        /// <p>A complex type that contains information about the service.</p>
        pub fn service(mut self, input: crate::model::ServiceInfo) -> Self {
            self.service = Some(input);
            self
        }
        /// <p>A complex type that contains information about the service.</p>
        pub fn set_service(mut self, input: std::option::Option<crate::model::ServiceInfo>) -> Self {
            self.service = input;
            self
        }
        /// <p>A complex type that contains information about the service.</p>
        pub fn get_service(&self) -> &std::option::Option<crate::model::ServiceInfo> {
            &self.service
        }
        /// Consumes the builder and constructs a [`GetServiceOutput`](crate::output::GetServiceOutput).
        pub fn build(self) -> crate::output::GetServiceOutput {
            crate::output::GetServiceOutput {
                service: self.service,
            }
        }
    }
}
impl GetServiceOutput {
    /// Creates a new builder-style object to manufacture [`GetServiceOutput`](crate::output::GetServiceOutput).
    pub fn builder() -> crate::output::get_service_output::Builder {
        crate::output::get_service_output::Builder::default()
    }
}

/// <p>The result of a <code>ListInstances</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct ListInstancesOutput {
    /// <p>Summary information about the instances that are associated with the specified service.</p>
    #[serde(rename = "Instances", default)]
    pub instances: std::option::Option<std::vec::Vec<crate::model::InstanceSummary>>,
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    #[serde(rename = "NextToken", default)]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListInstancesOutput {
    /// <p>Summary information about the instances that are associated with the specified service.</p>
    pub fn instances(&self) -> std::option::Option<&[crate::model::InstanceSummary]> {
        self.instances.as_deref()
    }
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Display for ListInstancesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Instances", &self.instances)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
/// See [`ListInstancesOutput`](crate::output::ListInstancesOutput).
pub mod list_instances_output {

    /// A builder for [`ListInstancesOutput`](crate::output::ListInstancesOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) instances: std::option::Option<std::vec::Vec<crate::model::InstanceSummary>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `instances`.
        ///
        /// To override the contents of this collection use [`set_instances`](Self::set_instances).
        ///
        /// <p>Summary information about the instances that are associated with the specified service.</p>
        pub fn instances(mut self, input: crate::model::InstanceSummary) -> Self {
            let mut v = self.instances.unwrap_or_default();
            v.push(input);
            self.instances = Some(v);
            self
        }
        /// <p>Summary information about the instances that are associated with the specified service.</p>
        pub fn set_instances(mut self, input: std::option::Option<std::vec::Vec<crate::model::InstanceSummary>>) -> Self {
            self.instances = input;
            self
        }
        /// <p>Summary information about the instances that are associated with the specified service.</p>
        pub fn get_instances(&self) -> &std::option::Option<std::vec::Vec<crate::model::InstanceSummary>> {
            &self.instances
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`ListInstancesOutput`](crate::output::ListInstancesOutput).
        pub fn build(self) -> crate::output::ListInstancesOutput {
            crate::output::ListInstancesOutput {
                instances: self.instances,
                next_token: self.next_token,
            }
        }
    }
}
impl ListInstancesOutput {
    /// Creates a new builder-style object to manufacture [`ListInstancesOutput`](crate::output::ListInstancesOutput).
    pub fn builder() -> crate::output::list_instances_output::Builder {
        crate::output::list_instances_output::Builder::default()
    }
}

/// <p>The result of a <code>ListNamespaces</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct ListNamespacesOutput {
    /// <p>An array that contains one <code>NamespaceSummary</code> object for each namespace that matches the specified filter criteria.</p>
    #[serde(rename = "Namespaces", default)]
    pub namespaces: std::option::Option<std::vec::Vec<crate::model::NamespaceSummary>>,
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    #[serde(rename = "NextToken", default)]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListNamespacesOutput {
    /// <p>An array that contains one <code>NamespaceSummary</code> object for each namespace that matches the specified filter criteria.</p>
    pub fn namespaces(&self) -> std::option::Option<&[crate::model::NamespaceSummary]> {
        self.namespaces.as_deref()
    }
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Display for ListNamespacesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Namespaces", &self.namespaces)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
/// See [`ListNamespacesOutput`](crate::output::ListNamespacesOutput).
pub mod list_namespaces_output {

    /// A builder for [`ListNamespacesOutput`](crate::output::ListNamespacesOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) namespaces: std::option::Option<std::vec::Vec<crate::model::NamespaceSummary>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `namespaces`.
        ///
        /// To override the contents of this collection use [`set_namespaces`](Self::set_namespaces).
        ///
        /// <p>An array that contains one <code>NamespaceSummary</code> object for each namespace that matches the specified filter criteria.</p>
        pub fn namespaces(mut self, input: crate::model::NamespaceSummary) -> Self {
            let mut v = self.namespaces.unwrap_or_default();
            v.push(input);
            self.namespaces = Some(v);
            self
        }
        /// <p>An array that contains one <code>NamespaceSummary</code> object for each namespace that matches the specified filter criteria.</p>
        pub fn set_namespaces(mut self, input: std::option::Option<std::vec::Vec<crate::model::NamespaceSummary>>) -> Self {
            self.namespaces = input;
            self
        }
        /// <p>An array that contains one <code>NamespaceSummary</code> object for each namespace that matches the specified filter criteria.</p>
        pub fn get_namespaces(&self) -> &std::option::Option<std::vec::Vec<crate::model::NamespaceSummary>> {
            &self.namespaces
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`ListNamespacesOutput`](crate::output::ListNamespacesOutput).
        pub fn build(self) -> crate::output::ListNamespacesOutput {
            crate::output::ListNamespacesOutput {
                namespaces: self.namespaces,
                next_token: self.next_token,
            }
        }
    }
}
impl ListNamespacesOutput {
    /// Creates a new builder-style object to manufacture [`ListNamespacesOutput`](crate::output::ListNamespacesOutput).
    pub fn builder() -> crate::output::list_namespaces_output::Builder {
        crate::output::list_namespaces_output::Builder::default()
    }
}

/// <p>The result of a <code>ListOperations</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct ListOperationsOutput {
    /// <p>Summary information about the operations that match the specified criteria.</p>
    #[serde(rename = "Operations", default)]
    pub operations: std::option::Option<std::vec::Vec<crate::model::OperationSummary>>,
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    #[serde(rename = "NextToken", default)]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListOperationsOutput {
    /// <p>Summary information about the operations that match the specified criteria.</p>
    pub fn operations(&self) -> std::option::Option<&[crate::model::OperationSummary]> {
        self.operations.as_deref()
    }
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Display for ListOperationsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Operations", &self.operations)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
/// See [`ListOperationsOutput`](crate::output::ListOperationsOutput).
pub mod list_operations_output {

    /// A builder for [`ListOperationsOutput`](crate::output::ListOperationsOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operations: std::option::Option<std::vec::Vec<crate::model::OperationSummary>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `operations`.
        ///
        /// To override the contents of this collection use [`set_operations`](Self::set_operations).
        ///
        /// <p>Summary information about the operations that match the specified criteria.</p>
        pub fn operations(mut self, input: crate::model::OperationSummary) -> Self {
            let mut v = self.operations.unwrap_or_default();
            v.push(input);
            self.operations = Some(v);
            self
        }
        /// <p>Summary information about the operations that match the specified criteria.</p>
        pub fn set_operations(mut self, input: std::option::Option<std::vec::Vec<crate::model::OperationSummary>>) -> Self {
            self.operations = input;
            self
        }
        /// <p>Summary information about the operations that match the specified criteria.</p>
        pub fn get_operations(&self) -> &std::option::Option<std::vec::Vec<crate::model::OperationSummary>> {
            &self.operations
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`ListOperationsOutput`](crate::output::ListOperationsOutput).
        pub fn build(self) -> crate::output::ListOperationsOutput {
            crate::output::ListOperationsOutput {
                operations: self.operations,
                next_token: self.next_token,
            }
        }
    }
}
impl ListOperationsOutput {
    /// Creates a new builder-style object to manufacture [`ListOperationsOutput`](crate::output::ListOperationsOutput).
    pub fn builder() -> crate::output::list_operations_output::Builder {
        crate::output::list_operations_output::Builder::default()
    }
}

/// <p>The result of a <code>ListServices</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct ListServicesOutput {
    /// <p>An array that contains one <code>ServiceSummary</code> object for each service that matches the specified filter criteria.</p>
    #[serde(rename = "Services", default)]
    pub services: std::option::Option<std::vec::Vec<crate::model::ServiceSummary>>,
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    #[serde(rename = "NextToken", default)]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListServicesOutput {
    /// <p>An array that contains one <code>ServiceSummary</code> object for each service that matches the specified filter criteria.</p>
    pub fn services(&self) -> std::option::Option<&[crate::model::ServiceSummary]> {
        self.services.as_deref()
    }
    /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl std::fmt::Display for ListServicesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Services", &self.services)
            .field("NextToken", &self.next_token)
            .finish()
    }
}
/// See [`ListServicesOutput`](crate::output::ListServicesOutput).
pub mod list_services_output {

    /// A builder for [`ListServicesOutput`](crate::output::ListServicesOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) services: std::option::Option<std::vec::Vec<crate::model::ServiceSummary>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `services`.
        ///
        /// To override the contents of this collection use [`set_services`](Self::set_services).
        ///
        /// <p>An array that contains one <code>ServiceSummary</code> object for each service that matches the specified filter criteria.</p>
        pub fn services(mut self, input: crate::model::ServiceSummary) -> Self {
            let mut v = self.services.unwrap_or_default();
            v.push(input);
            self.services = Some(v);
            self
        }
        /// <p>An array that contains one <code>ServiceSummary</code> object for each service that matches the specified filter criteria.</p>
        pub fn set_services(mut self, input: std::option::Option<std::vec::Vec<crate::model::ServiceSummary>>) -> Self {
            self.services = input;
            self
        }
        /// <p>An array that contains one <code>ServiceSummary</code> object for each service that matches the specified filter criteria.</p>
        pub fn get_services(&self) -> &std::option::Option<std::vec::Vec<crate::model::ServiceSummary>> {
            &self.services
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// <p>If the response contains <code>NextToken</code>, submit another request and include the value of <code>NextToken</code> in the new request to get the next group of results.</p>
        pub fn get_next_token(&self) -> &std::option::Option<std::string::String> {
            &self.next_token
        }
        /// Consumes the builder and constructs a [`ListServicesOutput`](crate::output::ListServicesOutput).
        pub fn build(self) -> crate::output::ListServicesOutput {
            crate::output::ListServicesOutput {
                services: self.services,
                next_token: self.next_token,
            }
        }
    }
}
impl ListServicesOutput {
    /// Creates a new builder-style object to manufacture [`ListServicesOutput`](crate::output::ListServicesOutput).
    pub fn builder() -> crate::output::list_services_output::Builder {
        crate::output::list_services_output::Builder::default()
    }
}

/// <p>The result of a <code>ListTagsForResource</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct ListTagsForResourceOutput {
    /// <p>The tags that are assigned to the resource.</p>
    #[serde(rename = "Tags", default)]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl ListTagsForResourceOutput {
    /// <p>The tags that are assigned to the resource.</p>
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
impl std::fmt::Display for ListTagsForResourceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("Tags", &self.tags)
            .finish()
    }
}
/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
pub mod list_tags_for_resource_output {

    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// Appends an item to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>The tags that are assigned to the resource.</p>
        pub fn tags(mut self, input: crate::model::Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        /// <p>The tags that are assigned to the resource.</p>
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>The tags that are assigned to the resource.</p>
        pub fn get_tags(&self) -> &std::option::Option<std::vec::Vec<crate::model::Tag>> {
            &self.tags
        }
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                tags: self.tags,
            }
        }
    }
}
impl ListTagsForResourceOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput).
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
}

/// <p>The result of a <code>RegisterInstance</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct RegisterInstanceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl RegisterInstanceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for RegisterInstanceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`RegisterInstanceOutput`](crate::output::RegisterInstanceOutput).
pub mod register_instance_output {

    /// A builder for [`RegisterInstanceOutput`](crate::output::RegisterInstanceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`RegisterInstanceOutput`](crate::output::RegisterInstanceOutput).
        pub fn build(self) -> crate::output::RegisterInstanceOutput {
            crate::output::RegisterInstanceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl RegisterInstanceOutput {
    /// Creates a new builder-style object to manufacture [`RegisterInstanceOutput`](crate::output::RegisterInstanceOutput).
    pub fn builder() -> crate::output::register_instance_output::Builder {
        crate::output::register_instance_output::Builder::default()
    }
}

/// <p>The result of a <code>TagResource</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct TagResourceOutput {}
impl std::fmt::Display for TagResourceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f).finish()
    }
}
/// See [`TagResourceOutput`](crate::output::TagResourceOutput).
pub mod tag_resource_output {

    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput).
        pub fn build(self) -> crate::output::TagResourceOutput {
            crate::output::TagResourceOutput {}
        }
    }
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput).
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
}

/// <p>The result of a <code>UntagResource</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct UntagResourceOutput {}
impl std::fmt::Display for UntagResourceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f).finish()
    }
}
/// See [`UntagResourceOutput`](crate::output::UntagResourceOutput).
pub mod untag_resource_output {

    /// A builder for [`UntagResourceOutput`](crate::output::UntagResourceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UntagResourceOutput`](crate::output::UntagResourceOutput).
        pub fn build(self) -> crate::output::UntagResourceOutput {
            crate::output::UntagResourceOutput {}
        }
    }
}
impl UntagResourceOutput {
    /// Creates a new builder-style object to manufacture [`UntagResourceOutput`](crate::output::UntagResourceOutput).
    pub fn builder() -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder::default()
    }
}

/// <p>The result of a <code>UpdateInstanceCustomHealthStatus</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct UpdateInstanceCustomHealthStatusOutput {}
impl std::fmt::Display for UpdateInstanceCustomHealthStatusOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f).finish()
    }
}
/// See [`UpdateInstanceCustomHealthStatusOutput`](crate::output::UpdateInstanceCustomHealthStatusOutput).
pub mod update_instance_custom_health_status_output {

    /// A builder for [`UpdateInstanceCustomHealthStatusOutput`](crate::output::UpdateInstanceCustomHealthStatusOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateInstanceCustomHealthStatusOutput`](crate::output::UpdateInstanceCustomHealthStatusOutput).
        pub fn build(self) -> crate::output::UpdateInstanceCustomHealthStatusOutput {
            crate::output::UpdateInstanceCustomHealthStatusOutput {}
        }
    }
}
impl UpdateInstanceCustomHealthStatusOutput {
    /// Creates a new builder-style object to manufacture [`UpdateInstanceCustomHealthStatusOutput`](crate::output::UpdateInstanceCustomHealthStatusOutput).
    pub fn builder() -> crate::output::update_instance_custom_health_status_output::Builder {
        crate::output::update_instance_custom_health_status_output::Builder::default()
    }
}

/// <p>The result of a <code>UpdateService</code> request.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct UpdateServiceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    #[serde(rename = "OperationId", default)]
    pub operation_id: std::option::Option<std::string::String>,
}
impl UpdateServiceOutput {
    /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
    pub fn operation_id(&self) -> std::option::Option<&str> {
        self.operation_id.as_deref()
    }
}
impl std::fmt::Display for UpdateServiceOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::render::fields(f)
            .field("OperationId", &self.operation_id)
            .finish()
    }
}
/// See [`UpdateServiceOutput`](crate::output::UpdateServiceOutput).
pub mod update_service_output {

    /// A builder for [`UpdateServiceOutput`](crate::output::UpdateServiceOutput).
    #[non_exhaustive]
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        pub(crate) operation_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn operation_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.operation_id = Some(input.into());
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn set_operation_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.operation_id = input;
            self
        }
        /// <p>A value that you can use to determine whether the request completed successfully. To get the status of the operation, see <code>GetOperation</code>.</p>
        pub fn get_operation_id(&self) -> &std::option::Option<std::string::String> {
            &self.operation_id
        }
        /// Consumes the builder and constructs a [`UpdateServiceOutput`](crate::output::UpdateServiceOutput).
        pub fn build(self) -> crate::output::UpdateServiceOutput {
            crate::output::UpdateServiceOutput {
                operation_id: self.operation_id,
            }
        }
    }
}
impl UpdateServiceOutput {
    /// Creates a new builder-style object to manufacture [`UpdateServiceOutput`](crate::output::UpdateServiceOutput).
    pub fn builder() -> crate::output::update_service_output::Builder {
        crate::output::update_service_output::Builder::default()
    }
}
