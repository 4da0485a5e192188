/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Human readable rendering used by the `Display` impls of model, input and output types:
//! `{Name: value,Other: value}`, unset members omitted.

use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use std::collections::BTreeMap;
use std::fmt;

pub(crate) trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Render for i32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for i64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for DateTime {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fmt(Format::DateTime) {
            Ok(formatted) => f.write_str(&formatted),
            // out of the RFC 3339 range
            Err(_) => write!(f, "{}", self.secs()),
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.render(f)?;
            f.write_str("=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Implements [`Render`] through `Display` for generated enums and structures.
macro_rules! display_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl crate::render::Render for $ty {
                fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}
pub(crate) use display_render;

pub(crate) struct Fields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    empty: bool,
}

pub(crate) fn fields<'a, 'b>(f: &'a mut fmt::Formatter<'b>) -> Fields<'a, 'b> {
    let result = f.write_str("{");
    Fields {
        f,
        result,
        empty: true,
    }
}

impl<'a, 'b> Fields<'a, 'b> {
    pub(crate) fn field<T: Render>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let (Ok(()), Some(value)) = (self.result, value) {
            self.result = self.write(name, value);
        }
        self
    }

    fn write(&mut self, name: &str, value: &dyn Render) -> fmt::Result {
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{}: ", name)?;
        value.render(self.f)
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Probe {
        name: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        attributes: Option<BTreeMap<String, String>>,
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fields(f)
                .field("Name", &self.name)
                .field("Count", &self.count)
                .field("Tags", &self.tags)
                .field("Attributes", &self.attributes)
                .finish()
        }
    }

    #[test]
    fn unset_members_are_omitted() {
        let probe = Probe {
            name: None,
            count: Some(3),
            tags: None,
            attributes: None,
        };
        assert_eq!(probe.to_string(), "{Count: 3}");
    }

    #[test]
    fn empty_renders_braces() {
        let probe = Probe {
            name: None,
            count: None,
            tags: None,
            attributes: None,
        };
        assert_eq!(probe.to_string(), "{}");
    }

    #[test]
    fn collections() {
        let mut attributes = BTreeMap::new();
        attributes.insert("b".to_string(), "2".to_string());
        attributes.insert("a".to_string(), "1".to_string());
        let probe = Probe {
            name: Some("svc".into()),
            count: None,
            tags: Some(vec!["x".into(), "y".into()]),
            attributes: Some(attributes),
        };
        assert_eq!(
            probe.to_string(),
            "{Name: svc,Tags: [x, y],Attributes: {a=1, b=2}}"
        );
    }

    #[test]
    fn timestamps_render_as_date_times() {
        struct Stamp(Option<DateTime>);
        impl fmt::Display for Stamp {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fields(f).field("CreateDate", &self.0).finish()
            }
        }
        assert_eq!(
            Stamp(Some(DateTime::from_secs(1576540098))).to_string(),
            "{CreateDate: 2019-12-16T23:48:18Z}"
        );
    }
}
