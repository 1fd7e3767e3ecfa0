/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use smol_str::SmolStr;

use crate::metrics::{ParseError, chars_allowed_in_tag_value};

/// Value of a metric tag.
///
/// A bare tag, a tag with an explicit empty value and a tag with text are
/// three different states. None of them is ever converted into another one,
/// and no text (including `"true"`) has any special meaning.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum MetricTagValue {
    /// No value at all, `name` on the wire.
    Absent,
    /// Explicit empty value, `name:` on the wire.
    Empty,
    /// Non-empty value, `name:text` on the wire.
    Text(MetricTagText),
}

/// Non-empty text of a [`MetricTagValue::Text`].
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct MetricTagText(SmolStr);

impl MetricTagText {
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for MetricTagText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl MetricTagValue {
    /// Parse a value that follows a key/value delimiter.
    ///
    /// The empty string gives [`MetricTagValue::Empty`], anything else gives
    /// [`MetricTagValue::Text`].
    pub fn new(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Ok(MetricTagValue::Empty);
        }
        chars_allowed_in_tag_value(s)?;
        Ok(MetricTagValue::Text(MetricTagText(s.into())))
    }

    pub fn parse_buf(buf: &[u8]) -> Result<Self, ParseError> {
        let value = std::str::from_utf8(buf)?;
        MetricTagValue::new(value)
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, MetricTagValue::Absent)
    }

    /// Get the value string, or `None` for a bare tag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetricTagValue::Absent => None,
            MetricTagValue::Empty => Some(""),
            MetricTagValue::Text(t) => Some(t.as_str()),
        }
    }
}

impl FromStr for MetricTagValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricTagValue::new(s)
    }
}
