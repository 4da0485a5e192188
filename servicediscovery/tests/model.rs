/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::DateTime;
use servicediscovery::input::{GetInstanceInput, ListNamespacesInput, RegisterInstanceInput};
use servicediscovery::model::{
    DnsConfig, DnsRecord, FilterCondition, HealthStatus, HttpInstanceSummary, Namespace,
    NamespaceFilter, NamespaceFilterName, NamespaceProperties, NamespaceType, Operation,
    OperationStatus, OperationTargetType, RecordType, RoutingPolicy, ServiceInfo, Tag,
};
use servicediscovery::output::{GetInstancesHealthStatusOutput, GetOperationOutput};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_requests_share_a_hash() {
    let a = GetInstanceInput::builder()
        .service_id("svc1")
        .instance_id("i1")
        .build();
    let mut b = GetInstanceInput::builder()
        .service_id("svc1")
        .instance_id("i1")
        .build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    b.instance_id = Some("i2".to_string());
    assert_ne!(a, b);
}

#[test]
fn unset_fields_are_absent() {
    let input = GetInstanceInput::builder().service_id("svc1").build();
    assert_eq!(input.service_id(), Some("svc1"));
    assert_eq!(input.instance_id(), None);
    assert_eq!(GetInstanceInput::default(), GetInstanceInput::builder().build());

    let both_unset = ServiceInfo::default();
    assert_eq!(both_unset, ServiceInfo::builder().build());
    assert_eq!(hash_of(&both_unset), hash_of(&ServiceInfo::builder().build()));
}

#[test]
fn field_round_trips() {
    let created = DateTime::from_secs(1_576_540_098);
    let namespace = Namespace::builder()
        .id("ns-e4anhexample0004")
        .arn("arn:aws:servicediscovery:us-west-2:123456789012:namespace/ns-e4anhexample0004")
        .name("example.com")
        .r#type(NamespaceType::DnsPublic)
        .description("public namespace")
        .service_count(2)
        .properties(NamespaceProperties::builder().build())
        .create_date(created)
        .creator_request_id("req-1")
        .build();
    assert_eq!(namespace.id(), Some("ns-e4anhexample0004"));
    assert_eq!(namespace.name(), Some("example.com"));
    assert_eq!(namespace.r#type(), Some(&NamespaceType::DnsPublic));
    assert_eq!(namespace.description(), Some("public namespace"));
    assert_eq!(namespace.service_count(), Some(2));
    assert_eq!(namespace.create_date(), Some(&created));
    assert_eq!(namespace.creator_request_id(), Some("req-1"));

    let record = DnsRecord::builder().r#type(RecordType::Srv).ttl(60).build();
    assert_eq!(record.r#type(), Some(&RecordType::Srv));
    assert_eq!(record.ttl(), Some(60));
}

#[test]
fn field_assignment_is_the_plain_mutator() {
    let mut tag = Tag::default();
    tag.key = Some("team".to_string());
    tag.value = Some(String::new());
    assert_eq!(tag.key(), Some("team"));
    assert_eq!(tag.value(), Some(""));
    tag.value = None;
    assert_eq!(tag.value(), None);
}

#[test]
fn list_setters_append_and_set_replaces() {
    let config = DnsConfig::builder()
        .routing_policy(RoutingPolicy::Multivalue)
        .dns_records(DnsRecord::builder().r#type(RecordType::A).ttl(60).build())
        .dns_records(DnsRecord::builder().r#type(RecordType::Aaaa).ttl(60).build());
    assert_eq!(config.get_dns_records().as_ref().map(Vec::len), Some(2));

    let config = config.set_dns_records(Some(vec![DnsRecord::builder()
        .r#type(RecordType::Cname)
        .build()]));
    let config = config.build();
    assert_eq!(config.dns_records().map(<[DnsRecord]>::len), Some(1));
    assert_eq!(
        config.dns_records().unwrap()[0].r#type(),
        Some(&RecordType::Cname)
    );
}

#[test]
fn map_setters_insert() {
    let input = RegisterInstanceInput::builder()
        .service_id("srv-1")
        .instance_id("i-1")
        .attributes("AWS_INSTANCE_IPV4", "192.0.2.44")
        .attributes("AWS_INSTANCE_PORT", "80")
        .attributes("AWS_INSTANCE_PORT", "8080")
        .build();
    let attributes = input.attributes().unwrap();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes["AWS_INSTANCE_PORT"], "8080");
}

#[test]
fn timestamps_participate_in_equality_and_hash() {
    let a = Operation::builder()
        .id("op-1")
        .status(OperationStatus::Success)
        .create_date(DateTime::from_secs(100))
        .targets(OperationTargetType::Namespace, "ns-1")
        .build();
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut c = a.clone();
    c.create_date = Some(DateTime::from_secs(101));
    assert_ne!(a, c);
}

#[test]
fn display_uses_wire_names_and_skips_unset_members() {
    let tag = Tag::builder().key("team").value("discovery").build();
    assert_eq!(tag.to_string(), "{Key: team,Value: discovery}");

    let tag = Tag::builder().key("team").build();
    assert_eq!(tag.to_string(), "{Key: team}");

    assert_eq!(Tag::default().to_string(), "{}");
}

#[test]
fn display_nests_lists_maps_and_enums() {
    let filter = NamespaceFilter::builder()
        .name(NamespaceFilterName::Type)
        .values("DNS_PUBLIC")
        .values("HTTP")
        .condition(FilterCondition::In)
        .build();
    assert_eq!(
        filter.to_string(),
        "{Name: TYPE,Values: [DNS_PUBLIC, HTTP],Condition: IN}"
    );

    let input = ListNamespacesInput::builder().max_results(10).filters(filter).build();
    assert_eq!(
        input.to_string(),
        "{MaxResults: 10,Filters: [{Name: TYPE,Values: [DNS_PUBLIC, HTTP],Condition: IN}]}"
    );

    let summary = HttpInstanceSummary::builder()
        .instance_id("i-1")
        .health_status(HealthStatus::Healthy)
        .attributes("b", "2")
        .attributes("a", "1")
        .build();
    assert_eq!(
        summary.to_string(),
        "{InstanceId: i-1,HealthStatus: HEALTHY,Attributes: {a=1, b=2}}"
    );
}

#[test]
fn display_renders_timestamps_and_enum_keyed_maps() {
    let output = GetOperationOutput::builder()
        .operation(
            Operation::builder()
                .id("op-1")
                .create_date(DateTime::from_secs(1_576_540_098))
                .targets(OperationTargetType::Service, "srv-1")
                .build(),
        )
        .build();
    assert_eq!(
        output.to_string(),
        "{Operation: {Id: op-1,CreateDate: 2019-12-16T23:48:18Z,Targets: {SERVICE=srv-1}}}"
    );

    let mut status = BTreeMap::new();
    status.insert("i-1".to_string(), HealthStatus::Unknown);
    let output = GetInstancesHealthStatusOutput::builder()
        .set_status(Some(status))
        .build();
    assert_eq!(output.to_string(), "{Status: {i-1=UNKNOWN}}");
}
