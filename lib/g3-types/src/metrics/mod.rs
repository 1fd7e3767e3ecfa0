/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::str::Utf8Error;

use thiserror::Error;

mod tag;
pub use tag::{MetricTag, MetricTagName, MetricTagSet, MetricTagText, MetricTagValue};

/// Separator between two tag specifications in a StatsD tag fragment.
pub const STATSD_TAG_SEPARATOR: u8 = b',';
/// Delimiter between name and value inside one tag specification.
pub const STATSD_TAG_DELIMITER: u8 = b':';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty tag name")]
    EmptyName,
    #[error("reserved char {0:?}")]
    ReservedChar(char),
    #[error("invalid utf-8 encoding: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

fn chars_allowed_in_tag_name(s: &str) -> Result<(), ParseError> {
    let buf = s.as_bytes();
    match memchr::memchr2(STATSD_TAG_SEPARATOR, STATSD_TAG_DELIMITER, buf) {
        Some(p) => Err(ParseError::ReservedChar(char::from(buf[p]))),
        None => Ok(()),
    }
}

fn chars_allowed_in_tag_value(s: &str) -> Result<(), ParseError> {
    if memchr::memchr(STATSD_TAG_SEPARATOR, s.as_bytes()).is_some() {
        Err(ParseError::ReservedChar(char::from(STATSD_TAG_SEPARATOR)))
    } else {
        Ok(())
    }
}
