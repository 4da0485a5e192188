/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Timestamps travel as fractional epoch seconds in awsJson1.1 bodies.

use aws_smithy_types::DateTime;
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_f64(date.as_secs_f64()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(DateTime::from_secs_f64))
}

#[cfg(test)]
mod test {
    use aws_smithy_types::DateTime;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Stamped {
        #[serde(default, with = "super")]
        at: Option<DateTime>,
    }

    #[test]
    fn reads_integer_and_fractional_seconds() {
        let whole: Stamped = serde_json::from_str(r#"{"at": 1576540098}"#).unwrap();
        assert_eq!(whole.at, Some(DateTime::from_secs(1576540098)));

        let fractional: Stamped = serde_json::from_str(r#"{"at": 1576540098.5}"#).unwrap();
        assert_eq!(fractional.at, Some(DateTime::from_secs_f64(1576540098.5)));
    }

    #[test]
    fn missing_and_null_are_unset() {
        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.at, None);
        let null: Stamped = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(null.at, None);
    }

    #[test]
    fn writes_epoch_seconds() {
        let stamped = Stamped {
            at: Some(DateTime::from_secs(1576540098)),
        };
        let json = serde_json::to_value(&stamped).unwrap();
        assert_eq!(json["at"].as_f64(), Some(1576540098.0));
    }
}
