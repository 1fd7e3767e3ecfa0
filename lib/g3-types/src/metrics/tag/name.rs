/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::metrics::{ParseError, chars_allowed_in_tag_name};

/// Name of a metric tag, never empty.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct MetricTagName(SmolStr);

impl MetricTagName {
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn parse_buf(buf: &[u8]) -> Result<Self, ParseError> {
        let name = std::str::from_utf8(buf)?;
        MetricTagName::from_str(name)
    }
}

impl AsRef<str> for MetricTagName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for MetricTagName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyName);
        }
        chars_allowed_in_tag_name(s)?;
        Ok(MetricTagName(s.into()))
    }
}

impl fmt::Display for MetricTagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
