/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::slice;

use super::{MetricTagName, MetricTagValue};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MetricTag {
    pub name: MetricTagName,
    pub value: MetricTagValue,
}

impl MetricTag {
    #[inline]
    pub fn new(name: MetricTagName, value: MetricTagValue) -> Self {
        MetricTag { name, value }
    }

    /// A tag without value.
    #[inline]
    pub fn bare(name: MetricTagName) -> Self {
        MetricTag::new(name, MetricTagValue::Absent)
    }

    /// A tag with an explicit empty value.
    #[inline]
    pub fn with_empty(name: MetricTagName) -> Self {
        MetricTag::new(name, MetricTagValue::Empty)
    }
}

/// All tags of one metric, in the order they were received.
///
/// The same name may appear more than once. There is no mutating method,
/// build a new set from an iterator instead.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MetricTagSet {
    inner: Vec<MetricTag>,
}

impl MetricTagSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, MetricTag> {
        self.inner.iter()
    }

    /// Get the value of the first tag with this name.
    pub fn get(&self, name: &str) -> Option<&MetricTagValue> {
        self.inner
            .iter()
            .find(|t| t.name.as_str() == name)
            .map(|t| &t.value)
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MetricTagValue> {
        self.inner
            .iter()
            .filter(move |t| t.name.as_str() == name)
            .map(|t| &t.value)
    }
}

impl From<Vec<MetricTag>> for MetricTagSet {
    fn from(inner: Vec<MetricTag>) -> Self {
        MetricTagSet { inner }
    }
}

impl FromIterator<MetricTag> for MetricTagSet {
    fn from_iter<T: IntoIterator<Item = MetricTag>>(iter: T) -> Self {
        MetricTagSet {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MetricTagSet {
    type Item = &'a MetricTag;
    type IntoIter = slice::Iter<'a, MetricTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for MetricTagSet {
    type Item = MetricTag;
    type IntoIter = std::vec::IntoIter<MetricTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
