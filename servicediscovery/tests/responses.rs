/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::DateTime;
use bytes::Bytes;
use pretty_assertions::assert_eq;
use servicediscovery::error::{GetNamespaceError, ListNamespacesError};
use servicediscovery::model::{
    HealthStatus, NamespaceType, OperationStatus, OperationTargetType, OperationType, RecordType,
    RoutingPolicy,
};
use servicediscovery::operation::{
    DeleteService, DiscoverInstances, GetInstancesHealthStatus, GetNamespace, GetOperation,
    GetService, ListNamespaces, ListTagsForResource, RegisterInstance, TagResource,
};
use servicediscovery::output::{DeleteServiceOutput, TagResourceOutput};
use servicediscovery::response::ParseStrictResponse;

fn ok(body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(200)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn get_namespace() {
    let output = GetNamespace::new()
        .parse(&ok(r#"{
            "Namespace": {
                "Arn": "arn:aws:servicediscovery:us-west-2:123456789012:namespace/ns-e4anhexample0004",
                "CreateDate": 1587055896.798,
                "CreatorRequestId": "example-creator-request-id-0001",
                "Description": "Example.com AWS Cloud Map HTTP Namespace",
                "Id": "ns-e4anhexample0004",
                "Name": "example-http.com",
                "Properties": {
                    "DnsProperties": {},
                    "HttpProperties": {"HttpName": "example-http.com"}
                },
                "Type": "HTTP"
            }
        }"#))
        .unwrap();
    let namespace = output.namespace().unwrap();
    assert_eq!(namespace.id(), Some("ns-e4anhexample0004"));
    assert_eq!(namespace.r#type(), Some(&NamespaceType::Http));
    assert_eq!(
        namespace.create_date(),
        Some(&DateTime::from_secs_f64(1587055896.798))
    );
    assert_eq!(namespace.service_count(), None);
    let properties = namespace.properties().unwrap();
    assert_eq!(
        properties.http_properties().and_then(|p| p.http_name()),
        Some("example-http.com")
    );
    assert_eq!(properties.dns_properties().unwrap().hosted_zone_id(), None);
}

#[test]
fn get_service() {
    let output = GetService::new()
        .parse(&ok(r#"{
            "Service": {
                "Arn": "arn:aws:servicediscovery:us-west-2:123456789012:service/srv-e4anhexample0004",
                "CreateDate": 1587081768.334,
                "DnsConfig": {
                    "DnsRecords": [{"TTL": 60, "Type": "A"}],
                    "NamespaceId": "ns-e4anhexample0004",
                    "RoutingPolicy": "MULTIVALUE"
                },
                "Id": "srv-e4anhexample0004",
                "Name": "example-service-01",
                "InstanceCount": 3
            }
        }"#))
        .unwrap();
    let service = output.service().unwrap();
    assert_eq!(service.instance_count(), Some(3));
    let dns = service.dns_config().unwrap();
    assert_eq!(dns.routing_policy(), Some(&RoutingPolicy::Multivalue));
    let records = dns.dns_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].r#type(), Some(&RecordType::A));
    assert_eq!(records[0].ttl(), Some(60));
    assert_eq!(service.health_check_config(), None);
}

#[test]
fn get_operation_with_enum_keyed_targets() {
    let output = GetOperation::new()
        .parse(&ok(r#"{
            "Operation": {
                "CreateDate": 1587055860.121,
                "Id": "gv4g5meo7ndmeh4fqskygvk23d2fijwa-k9302yzd",
                "Status": "SUCCESS",
                "Targets": {"NAMESPACE": "ns-ylexjili4cdxy3xm"},
                "Type": "CREATE_NAMESPACE",
                "UpdateDate": 1587055900.469
            }
        }"#))
        .unwrap();
    let operation = output.operation().unwrap();
    assert_eq!(operation.status(), Some(&OperationStatus::Success));
    assert_eq!(operation.r#type(), Some(&OperationType::CreateNamespace));
    assert_eq!(
        operation
            .targets()
            .and_then(|targets| targets.get(&OperationTargetType::Namespace))
            .map(String::as_str),
        Some("ns-ylexjili4cdxy3xm")
    );
    assert_eq!(operation.error_code(), None);
}

#[test]
fn discover_instances() {
    let output = DiscoverInstances::new()
        .parse(&ok(r#"{
            "Instances": [{
                "Attributes": {"AWS_INSTANCE_IPV4": "172.2.1.3", "AWS_INSTANCE_PORT": "808"},
                "HealthStatus": "UNKNOWN",
                "InstanceId": "myservice-53",
                "NamespaceName": "example.com",
                "ServiceName": "myservice"
            }]
        }"#))
        .unwrap();
    let instances = output.instances().unwrap();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].health_status(), Some(&HealthStatus::Unknown));
    assert_eq!(
        instances[0].attributes().unwrap()["AWS_INSTANCE_PORT"],
        "808"
    );
}

#[test]
fn health_status_map() {
    let output = GetInstancesHealthStatus::new()
        .parse(&ok(r#"{"Status": {"i-1": "HEALTHY", "i-2": "UNHEALTHY"}, "NextToken": null}"#))
        .unwrap();
    let status = output.status().unwrap();
    assert_eq!(status.get("i-2"), Some(&HealthStatus::Unhealthy));
    assert_eq!(output.next_token(), None);
}

#[test]
fn operation_id_outputs() {
    let output = RegisterInstance::new()
        .parse(&ok(r#"{"OperationId": "4yejorelbukcjzpnr6tlmrghsjwpngf4-k95yg2u7"}"#))
        .unwrap();
    assert_eq!(
        output.operation_id(),
        Some("4yejorelbukcjzpnr6tlmrghsjwpngf4-k95yg2u7")
    );
}

#[test]
fn empty_bodies_are_empty_outputs() {
    assert_eq!(DeleteService::new().parse(&ok("")).unwrap(), DeleteServiceOutput::default());
    assert_eq!(TagResource::new().parse(&ok("{}")).unwrap(), TagResourceOutput::builder().build());
    let tags = ListTagsForResource::new().parse(&ok("")).unwrap();
    assert_eq!(tags.tags(), None);
}

#[test]
fn unknown_members_are_ignored() {
    let output = ListTagsForResource::new()
        .parse(&ok(r#"{"Tags": [{"Key": "k", "Value": "v", "Extra": 1}], "Future": true}"#))
        .unwrap();
    let tags = output.tags().unwrap();
    assert_eq!(tags[0].key(), Some("k"));
    assert_eq!(tags[0].value(), Some("v"));
}

#[test]
fn unknown_enum_value_is_a_parse_failure() {
    let err = GetNamespace::new()
        .parse(&ok(r#"{"Namespace": {"Type": "DNS_SOMETHING_NEW"}}"#))
        .unwrap_err();
    assert!(matches!(err, GetNamespaceError::Unhandled(_)));
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = ListNamespaces::new().parse(&ok("{not json")).unwrap_err();
    assert!(matches!(err, ListNamespacesError::Unhandled(_)));
}
