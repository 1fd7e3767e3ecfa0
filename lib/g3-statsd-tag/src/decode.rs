/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use log::debug;

use g3_types::metrics::{
    MetricTag, MetricTagName, MetricTagSet, MetricTagValue, ParseError, STATSD_TAG_DELIMITER,
    STATSD_TAG_SEPARATOR,
};

use crate::{MalformedTag, MalformedTagPolicy, StatsdTagConfig};

/// Decode the tag fragment of a StatsD line, the part after `|#`.
#[derive(Clone, Debug, Default)]
pub struct StatsdTagDecoder {
    policy: MalformedTagPolicy,
}

impl StatsdTagDecoder {
    pub fn new(config: &StatsdTagConfig) -> Self {
        StatsdTagDecoder {
            policy: config.malformed_tag,
        }
    }

    #[inline]
    pub fn policy(&self) -> MalformedTagPolicy {
        self.policy
    }

    /// Decode the fragment according to the configured malformed tag policy.
    ///
    /// With [`MalformedTagPolicy::Reject`] the first malformed tag is returned as error.
    pub fn decode(&self, data: &[u8]) -> Result<MetricTagSet, MalformedTag> {
        let mut tags = Vec::new();
        for r in TagSpecIter::new(data) {
            match r {
                Ok(tag) => tags.push(tag),
                Err(e) => match self.policy {
                    MalformedTagPolicy::Skip => debug!("skipped {e}"),
                    MalformedTagPolicy::Reject => return Err(e),
                },
            }
        }
        Ok(MetricTagSet::from(tags))
    }

    /// Decode the fragment, skipping and returning all malformed tags.
    pub fn decode_report(&self, data: &[u8]) -> (MetricTagSet, Vec<MalformedTag>) {
        let mut tags = Vec::new();
        let mut errors = Vec::new();
        for r in TagSpecIter::new(data) {
            match r {
                Ok(tag) => tags.push(tag),
                Err(e) => errors.push(e),
            }
        }
        (MetricTagSet::from(tags), errors)
    }
}

struct TagSpecIter<'a> {
    data: &'a [u8],
    offset: usize,
    index: usize,
}

impl<'a> TagSpecIter<'a> {
    fn new(data: &'a [u8]) -> Self {
        TagSpecIter {
            data,
            offset: 0,
            index: 0,
        }
    }

    fn next_field(&mut self) -> Option<(usize, &'a [u8])> {
        if self.offset >= self.data.len() {
            return None;
        }

        let index = self.index;
        self.index += 1;
        let left = &self.data[self.offset..];
        match memchr::memchr(STATSD_TAG_SEPARATOR, left) {
            Some(p) => {
                self.offset += p + 1;
                Some((index, &left[..p]))
            }
            None => {
                self.offset = self.data.len();
                Some((index, left))
            }
        }
    }
}

impl Iterator for TagSpecIter<'_> {
    type Item = Result<MetricTag, MalformedTag>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, part) = self.next_field()?;
            if part.is_empty() {
                continue;
            }

            return Some(parse_spec(part).map_err(|reason| MalformedTag {
                index,
                spec: String::from_utf8_lossy(part).into_owned(),
                reason,
            }));
        }
    }
}

fn parse_spec(part: &[u8]) -> Result<MetricTag, ParseError> {
    match memchr::memchr(STATSD_TAG_DELIMITER, part) {
        Some(p) => {
            let name = MetricTagName::parse_buf(&part[..p])?;
            let value = MetricTagValue::parse_buf(&part[p + 1..])?;
            Ok(MetricTag::new(name, value))
        }
        None => {
            let name = MetricTagName::parse_buf(part)?;
            Ok(MetricTag::bare(name))
        }
    }
}
