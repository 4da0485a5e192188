/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proptest::prelude::*;
use servicediscovery::error::UnknownVariantError;
use servicediscovery::model::{
    CustomHealthStatus, FilterCondition, HealthCheckType, HealthStatus, HealthStatusFilter,
    NamespaceFilterName, NamespaceType, OperationFilterName, OperationStatus,
    OperationTargetType, OperationType, RecordType, RoutingPolicy, ServiceFilterName,
};
use std::str::FromStr;

#[test]
fn dns_public_round_trips() {
    let parsed = NamespaceType::from_str("DNS_PUBLIC").unwrap();
    assert_eq!(parsed, NamespaceType::DnsPublic);
    assert_eq!(parsed.to_string(), "DNS_PUBLIC");
    assert_eq!(parsed.as_str(), "DNS_PUBLIC");
}

#[test]
fn empty_and_unknown_values_are_rejected() {
    let err = NamespaceType::from_str("").unwrap_err();
    assert_eq!(err.value(), "");

    let err = NamespaceType::try_from("UNKNOWN_X").unwrap_err();
    assert_eq!(err.value(), "UNKNOWN_X");
    assert_eq!(err.to_string(), "unknown enum variant: 'UNKNOWN_X'");
}

#[test]
fn matching_is_case_sensitive() {
    assert!(RecordType::from_str("cname").is_err());
    assert!(HealthStatus::from_str("Healthy").is_err());
    assert!(FilterCondition::from_str(" EQ").is_err());
    assert_eq!(FilterCondition::from_str("EQ").unwrap(), FilterCondition::Eq);
}

#[test]
fn values_are_listed_in_declaration_order() {
    assert_eq!(RecordType::values(), &["SRV", "A", "AAAA", "CNAME"]);
    assert_eq!(
        OperationType::values(),
        &[
            "CREATE_NAMESPACE",
            "DELETE_NAMESPACE",
            "UPDATE_SERVICE",
            "REGISTER_INSTANCE",
            "DEREGISTER_INSTANCE"
        ]
    );
    assert_eq!(HealthStatusFilter::values(), &["HEALTHY", "UNHEALTHY", "ALL"]);
}

#[test]
fn serde_uses_wire_strings() {
    assert_eq!(
        serde_json::to_string(&OperationStatus::Submitted).unwrap(),
        "\"SUBMITTED\""
    );
    let parsed: RoutingPolicy = serde_json::from_str("\"WEIGHTED\"").unwrap();
    assert_eq!(parsed, RoutingPolicy::Weighted);
    assert!(serde_json::from_str::<RoutingPolicy>("\"ROUND_ROBIN\"").is_err());
}

fn assert_all_round_trip<T>(values: &[&str])
where
    T: FromStr<Err = UnknownVariantError> + std::fmt::Display + std::fmt::Debug,
{
    for value in values {
        let parsed: T = value.parse().unwrap();
        assert_eq!(&parsed.to_string(), value);
    }
}

#[test]
fn every_variant_round_trips() {
    assert_all_round_trip::<CustomHealthStatus>(CustomHealthStatus::values());
    assert_all_round_trip::<FilterCondition>(FilterCondition::values());
    assert_all_round_trip::<HealthCheckType>(HealthCheckType::values());
    assert_all_round_trip::<HealthStatus>(HealthStatus::values());
    assert_all_round_trip::<HealthStatusFilter>(HealthStatusFilter::values());
    assert_all_round_trip::<NamespaceFilterName>(NamespaceFilterName::values());
    assert_all_round_trip::<NamespaceType>(NamespaceType::values());
    assert_all_round_trip::<OperationFilterName>(OperationFilterName::values());
    assert_all_round_trip::<OperationStatus>(OperationStatus::values());
    assert_all_round_trip::<OperationTargetType>(OperationTargetType::values());
    assert_all_round_trip::<OperationType>(OperationType::values());
    assert_all_round_trip::<RecordType>(RecordType::values());
    assert_all_round_trip::<RoutingPolicy>(RoutingPolicy::values());
    assert_all_round_trip::<ServiceFilterName>(ServiceFilterName::values());
}

proptest! {
    #[test]
    fn arbitrary_strings_parse_only_to_known_values(value in ".*") {
        match OperationFilterName::from_str(&value) {
            Ok(parsed) => prop_assert_eq!(parsed.as_str(), value.as_str()),
            Err(err) => {
                prop_assert!(!OperationFilterName::values().contains(&value.as_str()));
                prop_assert_eq!(err.value(), value.as_str());
            }
        }
    }
}
