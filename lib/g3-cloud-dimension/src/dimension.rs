/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::slice;

use serde_json::{Map, Value};
use smol_str::SmolStr;

/// A named value attached to a metric submission. The value is always set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub name: SmolStr,
    pub value: SmolStr,
}

impl Dimension {
    fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(2);
        map.insert("Name".to_string(), Value::String(self.name.to_string()));
        map.insert("Value".to_string(), Value::String(self.value.to_string()));
        Value::Object(map)
    }
}

/// Dimensions of one metric submission, in tag order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionSet {
    inner: Vec<Dimension>,
}

impl DimensionSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        DimensionSet {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, dimension: Dimension) {
        self.inner.push(dimension);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Dimension> {
        self.inner.iter()
    }

    /// Render as the `Dimensions` member of a metric datum:
    /// `[{"Name": "...", "Value": "..."}, ...]`.
    pub fn to_json(&self) -> Value {
        Value::Array(self.inner.iter().map(Dimension::to_json).collect())
    }
}

impl<'a> IntoIterator for &'a DimensionSet {
    type Item = &'a Dimension;
    type IntoIter = slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() {
        let mut set = DimensionSet::with_capacity(2);
        assert_eq!(set.to_json().to_string(), "[]");

        set.push(Dimension {
            name: "host".into(),
            value: "web-1".into(),
        });
        set.push(Dimension {
            name: "flag".into(),
            value: "".into(),
        });
        assert_eq!(
            set.to_json().to_string(),
            r#"[{"Name":"host","Value":"web-1"},{"Name":"flag","Value":""}]"#
        );
    }
}
