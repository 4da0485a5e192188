/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use servicediscovery::error::BuildRequestError;
use servicediscovery::idempotency::IdempotencyTokenProvider;
use servicediscovery::input::{
    CreateHttpNamespaceInput, CreatePrivateDnsNamespaceInput, CreatePublicDnsNamespaceInput,
    CreateServiceInput, DeleteNamespaceInput, DeleteServiceInput, DeregisterInstanceInput,
    DiscoverInstancesInput, GetInstanceInput, GetInstancesHealthStatusInput, GetNamespaceInput,
    GetOperationInput, GetServiceInput, ListInstancesInput, ListNamespacesInput,
    ListOperationsInput, ListServicesInput, ListTagsForResourceInput, RegisterInstanceInput,
    TagResourceInput, UntagResourceInput, UpdateInstanceCustomHealthStatusInput,
    UpdateServiceInput,
};
use servicediscovery::model::{
    CustomHealthStatus, DnsConfig, DnsConfigChange, DnsRecord, FilterCondition,
    HealthCheckCustomConfig, HealthStatusFilter, NamespaceFilter, NamespaceFilterName,
    OperationFilter, OperationFilterName, RecordType, RoutingPolicy, ServiceChange,
    ServiceFilter, ServiceFilterName, Tag,
};
use servicediscovery::operation::{
    CreateHttpNamespace, CreatePrivateDnsNamespace, CreatePublicDnsNamespace, CreateService,
    DeleteNamespace, DeleteService, DeregisterInstance, DiscoverInstances, GetInstance,
    GetInstancesHealthStatus, GetNamespace, GetOperation, GetService, ListInstances,
    ListNamespaces, ListOperations, ListServices, ListTagsForResource, RegisterInstance,
    TagResource, UntagResource, UpdateInstanceCustomHealthStatus, UpdateService,
};
use servicediscovery::{Config, Region};

const FIXED_TOKEN: &str = "00000000-0000-4000-8000-000000000000";

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .idempotency_token_provider(IdempotencyTokenProvider::fixed(FIXED_TOKEN))
        .build()
}

fn body_json(request: &http::Request<Bytes>) -> Value {
    serde_json::from_slice(request.body()).expect("request body is JSON")
}

fn assert_protocol_headers(request: &http::Request<Bytes>, target: &str) {
    assert_eq!(request.method(), &http::Method::POST);
    assert_eq!(
        request.uri().to_string(),
        "https://servicediscovery.us-east-1.amazonaws.com/"
    );
    assert_eq!(
        request.headers()["content-type"],
        "application/x-amz-json-1.1"
    );
    assert_eq!(request.headers()["x-amz-target"], target);
    assert_eq!(
        request.headers()["content-length"],
        request.body().len().to_string().as_str()
    );
}

#[test]
fn register_instance_fills_missing_token() {
    let input = RegisterInstanceInput::builder()
        .service_id("srv-e4anhexample0004")
        .instance_id("i-abcd1234")
        .attributes("AWS_INSTANCE_IPV4", "192.0.2.44")
        .attributes("AWS_INSTANCE_PORT", "80")
        .build();
    let request = RegisterInstance::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.RegisterInstance");
    assert_eq!(
        body_json(&request),
        json!({
            "ServiceId": "srv-e4anhexample0004",
            "InstanceId": "i-abcd1234",
            "CreatorRequestId": FIXED_TOKEN,
            "Attributes": {
                "AWS_INSTANCE_IPV4": "192.0.2.44",
                "AWS_INSTANCE_PORT": "80"
            }
        })
    );
    // the caller's input is left untouched
    assert_eq!(input.creator_request_id(), None);
}

#[test]
fn caller_token_is_sent_unchanged() {
    let input = CreatePrivateDnsNamespaceInput::builder()
        .name("example.local")
        .vpc("vpc-1a2b3c4d")
        .creator_request_id("my-token")
        .tags(Tag::builder().key("team").value("platform").build())
        .build();
    let request = CreatePrivateDnsNamespace::build_request(&input, &config()).unwrap();
    assert_protocol_headers(
        &request,
        "Route53AutoNaming_v20170314.CreatePrivateDnsNamespace",
    );
    assert_eq!(
        body_json(&request),
        json!({
            "Name": "example.local",
            "CreatorRequestId": "my-token",
            "Vpc": "vpc-1a2b3c4d",
            "Tags": [{"Key": "team", "Value": "platform"}]
        })
    );
}

#[test]
fn seeded_tokens_are_uuids() {
    let config = Config::builder()
        .region(Region::new("us-east-1"))
        .idempotency_token_provider(IdempotencyTokenProvider::with_seed(42))
        .build();
    let input = CreateServiceInput::builder().name("web").build();
    let first = body_json(&CreateService::build_request(&input, &config).unwrap());
    let second = body_json(&CreateService::build_request(&input, &config).unwrap());
    let first = first["CreatorRequestId"].as_str().unwrap().to_string();
    let second = second["CreatorRequestId"].as_str().unwrap().to_string();
    assert_eq!(first.len(), 36);
    assert_eq!(&first[14..15], "4");
    assert_ne!(first, second);
}

#[test]
fn create_service_nests_structures() {
    let input = CreateServiceInput::builder()
        .name("web")
        .namespace_id("ns-e4anhexample0004")
        .dns_config(
            DnsConfig::builder()
                .routing_policy(RoutingPolicy::Multivalue)
                .dns_records(DnsRecord::builder().r#type(RecordType::A).ttl(60).build())
                .build(),
        )
        .health_check_custom_config(HealthCheckCustomConfig::builder().failure_threshold(1).build())
        .build();
    let request = CreateService::build_request(&input, &config()).unwrap();
    assert_eq!(
        body_json(&request),
        json!({
            "Name": "web",
            "NamespaceId": "ns-e4anhexample0004",
            "CreatorRequestId": FIXED_TOKEN,
            "DnsConfig": {
                "RoutingPolicy": "MULTIVALUE",
                "DnsRecords": [{"Type": "A", "TTL": 60}]
            },
            "HealthCheckCustomConfig": {"FailureThreshold": 1}
        })
    );
}

#[test]
fn update_service() {
    let input = UpdateServiceInput::builder()
        .id("srv-e4anhexample0004")
        .service(
            ServiceChange::builder()
                .description("updated")
                .dns_config(
                    DnsConfigChange::builder()
                        .dns_records(DnsRecord::builder().r#type(RecordType::Srv).ttl(300).build())
                        .build(),
                )
                .build(),
        )
        .build();
    let request = UpdateService::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.UpdateService");
    assert_eq!(
        body_json(&request),
        json!({
            "Id": "srv-e4anhexample0004",
            "Service": {
                "Description": "updated",
                "DnsConfig": {"DnsRecords": [{"Type": "SRV", "TTL": 300}]}
            }
        })
    );
}

#[test]
fn discover_instances() {
    let input = DiscoverInstancesInput::builder()
        .namespace_name("example.com")
        .service_name("web")
        .max_results(5)
        .query_parameters("stage", "prod")
        .health_status(HealthStatusFilter::Healthy)
        .build();
    let request = DiscoverInstances::build_request(&input, &config()).unwrap();
    assert_eq!(
        body_json(&request),
        json!({
            "NamespaceName": "example.com",
            "ServiceName": "web",
            "MaxResults": 5,
            "QueryParameters": {"stage": "prod"},
            "HealthStatus": "HEALTHY"
        })
    );
}

#[test]
fn filters() {
    let input = ListServicesInput::builder()
        .filters(
            ServiceFilter::builder()
                .name(ServiceFilterName::NamespaceId)
                .values("ns-1")
                .condition(FilterCondition::Eq)
                .build(),
        )
        .build();
    let request = ListServices::build_request(&input, &config()).unwrap();
    assert_eq!(
        body_json(&request),
        json!({"Filters": [{"Name": "NAMESPACE_ID", "Values": ["ns-1"], "Condition": "EQ"}]})
    );

    let input = ListOperationsInput::builder()
        .next_token("page-2")
        .filters(
            OperationFilter::builder()
                .name(OperationFilterName::UpdateDate)
                .values("1576540098")
                .values("1576626498")
                .condition(FilterCondition::Between)
                .build(),
        )
        .build();
    let request = ListOperations::build_request(&input, &config()).unwrap();
    assert_eq!(
        body_json(&request),
        json!({
            "NextToken": "page-2",
            "Filters": [{
                "Name": "UPDATE_DATE",
                "Values": ["1576540098", "1576626498"],
                "Condition": "BETWEEN"
            }]
        })
    );
}

#[test]
fn resource_arn_member_name() {
    let arn = "arn:aws:servicediscovery:us-east-1:123456789012:namespace/ns-1";
    let request = ListTagsForResource::build_request(
        &ListTagsForResourceInput::builder().resource_arn(arn).build(),
        &config(),
    )
    .unwrap();
    assert_eq!(body_json(&request), json!({ "ResourceARN": arn }));

    let request = UntagResource::build_request(
        &UntagResourceInput::builder()
            .resource_arn(arn)
            .tag_keys("team")
            .build(),
        &config(),
    )
    .unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.UntagResource");
    assert_eq!(
        body_json(&request),
        json!({ "ResourceARN": arn, "TagKeys": ["team"] })
    );
}

#[test]
fn custom_health_status() {
    let input = UpdateInstanceCustomHealthStatusInput::builder()
        .service_id("srv-1")
        .instance_id("i-1")
        .status(CustomHealthStatus::Unhealthy)
        .build();
    let request = UpdateInstanceCustomHealthStatus::build_request(&input, &config()).unwrap();
    assert_eq!(
        body_json(&request),
        json!({"ServiceId": "srv-1", "InstanceId": "i-1", "Status": "UNHEALTHY"})
    );
}

#[test]
fn empty_input_is_an_empty_object() {
    let request = DeleteService::build_request(&DeleteServiceInput::default(), &config()).unwrap();
    assert_eq!(request.body().as_ref(), b"{}");
    assert_eq!(DeleteService::NAME, "DeleteService");
    assert_eq!(DeleteService::TARGET, "Route53AutoNaming_v20170314.DeleteService");
}

#[test]
fn endpoint_override() {
    let config = Config::builder().endpoint_url("http://localhost:4566").build();
    let request = DeleteService::build_request(&DeleteServiceInput::default(), &config).unwrap();
    assert_eq!(request.uri().to_string(), "http://localhost:4566/");
}

#[test]
fn missing_region() {
    let err = DeleteService::build_request(&DeleteServiceInput::default(), &Config::builder().build())
        .unwrap_err();
    assert!(matches!(err, BuildRequestError::MissingRegion));
    assert_eq!(err.to_string(), "no region or endpoint URL configured");
}

#[test]
fn create_http_namespace() {
    let input = CreateHttpNamespaceInput::builder()
        .name("example-http.com")
        .description("Example.com AWS Cloud Map HTTP Namespace")
        .build();
    let request = CreateHttpNamespace::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.CreateHttpNamespace");
    assert_eq!(
        body_json(&request),
        json!({
            "Name": "example-http.com",
            "CreatorRequestId": FIXED_TOKEN,
            "Description": "Example.com AWS Cloud Map HTTP Namespace"
        })
    );
}

#[test]
fn create_public_dns_namespace() {
    let input = CreatePublicDnsNamespaceInput::builder()
        .name("example.com")
        .creator_request_id("example-creator-request-id-0003")
        .tags(Tag::builder().key("env").value("prod").build())
        .tags(Tag::builder().key("team").value("edge").build())
        .build();
    let request = CreatePublicDnsNamespace::build_request(&input, &config()).unwrap();
    assert_protocol_headers(
        &request,
        "Route53AutoNaming_v20170314.CreatePublicDnsNamespace",
    );
    assert_eq!(
        body_json(&request),
        json!({
            "Name": "example.com",
            "CreatorRequestId": "example-creator-request-id-0003",
            "Tags": [
                {"Key": "env", "Value": "prod"},
                {"Key": "team", "Value": "edge"}
            ]
        })
    );
}

#[test]
fn id_only_inputs() {
    let request = DeleteNamespace::build_request(
        &DeleteNamespaceInput::builder().id("ns-ylexjili4cdxy3xm").build(),
        &config(),
    )
    .unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.DeleteNamespace");
    assert_eq!(body_json(&request), json!({"Id": "ns-ylexjili4cdxy3xm"}));

    let request = GetNamespace::build_request(
        &GetNamespaceInput::builder().id("ns-e4anhexample0004").build(),
        &config(),
    )
    .unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.GetNamespace");
    assert_eq!(body_json(&request), json!({"Id": "ns-e4anhexample0004"}));

    let request = GetService::build_request(
        &GetServiceInput::builder().id("srv-e4anhexample0004").build(),
        &config(),
    )
    .unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.GetService");
    assert_eq!(body_json(&request), json!({"Id": "srv-e4anhexample0004"}));
}

#[test]
fn get_operation() {
    let input = GetOperationInput::builder()
        .operation_id("gv4g5meo7ndmeh4fqskygvk23d2fijwa-k9302yzd")
        .build();
    let request = GetOperation::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.GetOperation");
    assert_eq!(
        body_json(&request),
        json!({"OperationId": "gv4g5meo7ndmeh4fqskygvk23d2fijwa-k9302yzd"})
    );
}

#[test]
fn instance_addressed_inputs() {
    let request = GetInstance::build_request(
        &GetInstanceInput::builder()
            .service_id("srv-e4anhexample0001")
            .instance_id("i-abcd1234")
            .build(),
        &config(),
    )
    .unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.GetInstance");
    assert_eq!(
        body_json(&request),
        json!({"ServiceId": "srv-e4anhexample0001", "InstanceId": "i-abcd1234"})
    );

    let request = DeregisterInstance::build_request(
        &DeregisterInstanceInput::builder()
            .service_id("srv-p5zdwlg5uvvzjita")
            .instance_id("myservice-53")
            .build(),
        &config(),
    )
    .unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.DeregisterInstance");
    assert_eq!(
        body_json(&request),
        json!({"ServiceId": "srv-p5zdwlg5uvvzjita", "InstanceId": "myservice-53"})
    );
}

#[test]
fn get_instances_health_status() {
    let input = GetInstancesHealthStatusInput::builder()
        .service_id("srv-e4anhexample0004")
        .instances("i-1")
        .instances("i-2")
        .max_results(10)
        .next_token("page-3")
        .build();
    let request = GetInstancesHealthStatus::build_request(&input, &config()).unwrap();
    assert_protocol_headers(
        &request,
        "Route53AutoNaming_v20170314.GetInstancesHealthStatus",
    );
    assert_eq!(
        body_json(&request),
        json!({
            "ServiceId": "srv-e4anhexample0004",
            "Instances": ["i-1", "i-2"],
            "MaxResults": 10,
            "NextToken": "page-3"
        })
    );
}

#[test]
fn list_instances() {
    let input = ListInstancesInput::builder()
        .service_id("srv-qzpwvt2tfqcegapy")
        .max_results(100)
        .build();
    let request = ListInstances::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.ListInstances");
    assert_eq!(
        body_json(&request),
        json!({"ServiceId": "srv-qzpwvt2tfqcegapy", "MaxResults": 100})
    );
}

#[test]
fn list_namespaces() {
    let input = ListNamespacesInput::builder()
        .max_results(2)
        .filters(
            NamespaceFilter::builder()
                .name(NamespaceFilterName::Type)
                .values("DNS_PUBLIC")
                .values("DNS_PRIVATE")
                .condition(FilterCondition::In)
                .build(),
        )
        .build();
    let request = ListNamespaces::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.ListNamespaces");
    assert_eq!(
        body_json(&request),
        json!({
            "MaxResults": 2,
            "Filters": [{
                "Name": "TYPE",
                "Values": ["DNS_PUBLIC", "DNS_PRIVATE"],
                "Condition": "IN"
            }]
        })
    );
}

#[test]
fn tag_resource() {
    let arn = "arn:aws:servicediscovery:us-east-1:123456789012:namespace/ns-ylexjili4cdxy3xm";
    let input = TagResourceInput::builder()
        .resource_arn(arn)
        .tags(Tag::builder().key("Department").value("Engineering").build())
        .build();
    let request = TagResource::build_request(&input, &config()).unwrap();
    assert_protocol_headers(&request, "Route53AutoNaming_v20170314.TagResource");
    assert_eq!(
        body_json(&request),
        json!({
            "ResourceARN": arn,
            "Tags": [{"Key": "Department", "Value": "Engineering"}]
        })
    );
}
