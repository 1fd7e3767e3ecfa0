/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::fmt::{self, Write};

use g3_types::metrics::{MetricTag, MetricTagSet, STATSD_TAG_DELIMITER, STATSD_TAG_SEPARATOR};

/// Encode a tag set back into a StatsD tag fragment.
///
/// A bare tag is written as `name`, every other tag as `name:value`,
/// even if the value is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatsdTagEncoder;

impl StatsdTagEncoder {
    pub fn encode(&self, tags: &MetricTagSet) -> String {
        self.display(tags).to_string()
    }

    /// Append the fragment to `buf`, no separator is added before the first tag.
    pub fn encode_to_buf(&self, tags: &MetricTagSet, buf: &mut Vec<u8>) {
        let mut iter = tags.iter();
        let Some(tag) = iter.next() else {
            return;
        };
        add_tag(buf, tag);

        for tag in iter {
            buf.push(STATSD_TAG_SEPARATOR);
            add_tag(buf, tag);
        }
    }

    #[inline]
    pub fn display<'a>(&self, tags: &'a MetricTagSet) -> StatsdTagDisplay<'a> {
        StatsdTagDisplay { inner: tags }
    }
}

fn add_tag(buf: &mut Vec<u8>, tag: &MetricTag) {
    buf.extend_from_slice(tag.name.as_str().as_bytes());
    if let Some(value) = tag.value.as_str() {
        buf.push(STATSD_TAG_DELIMITER);
        buf.extend_from_slice(value.as_bytes());
    }
}

pub struct StatsdTagDisplay<'a> {
    inner: &'a MetricTagSet,
}

impl StatsdTagDisplay<'_> {
    fn write_tag(f: &mut fmt::Formatter<'_>, tag: &MetricTag) -> fmt::Result {
        f.write_str(tag.name.as_str())?;
        if let Some(value) = tag.value.as_str() {
            f.write_char(char::from(STATSD_TAG_DELIMITER))?;
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl fmt::Display for StatsdTagDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.iter();
        let Some(tag) = iter.next() else {
            return Ok(());
        };
        Self::write_tag(f, tag)?;

        for tag in iter {
            f.write_char(char::from(STATSD_TAG_SEPARATOR))?;
            Self::write_tag(f, tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StatsdTagConfig, StatsdTagDecoder};
    use g3_types::metrics::{MetricTagName, MetricTagValue};
    use std::str::FromStr;

    fn tag(name: &str, value: Option<&str>) -> MetricTag {
        let name = MetricTagName::from_str(name).unwrap();
        match value {
            Some(v) => MetricTag::new(name, MetricTagValue::new(v).unwrap()),
            None => MetricTag::bare(name),
        }
    }

    #[test]
    fn encode_values() {
        let encoder = StatsdTagEncoder;

        let tags = MetricTagSet::from(vec![tag("key", Some("true"))]);
        assert_eq!(encoder.encode(&tags), "key:true");

        let tags = MetricTagSet::from(vec![tag("key", Some(""))]);
        assert_eq!(encoder.encode(&tags), "key:");

        let tags = MetricTagSet::from(vec![tag("key", None)]);
        assert_eq!(encoder.encode(&tags), "key");

        assert_eq!(encoder.encode(&MetricTagSet::default()), "");
    }

    #[test]
    fn encode_in_order() {
        let tags = MetricTagSet::from(vec![
            tag("atag", None),
            tag("btag", Some("bvalue")),
            tag("atag", Some("")),
            tag("url", Some("http://host:80")),
        ]);
        let encoder = StatsdTagEncoder;
        assert_eq!(encoder.encode(&tags), "atag,btag:bvalue,atag:,url:http://host:80");

        let mut buf = b"gorets:1|c|#".to_vec();
        encoder.encode_to_buf(&tags, &mut buf);
        assert_eq!(
            buf.as_slice(),
            b"gorets:1|c|#atag,btag:bvalue,atag:,url:http://host:80"
        );
    }

    #[test]
    fn round_trip() {
        let decoder = StatsdTagDecoder::new(&StatsdTagConfig::strict());
        let encoder = StatsdTagEncoder;

        let sets = [
            MetricTagSet::default(),
            MetricTagSet::from(vec![tag("flag", None)]),
            MetricTagSet::from(vec![
                tag("flag", None),
                tag("flag", Some("")),
                tag("flag", Some("true")),
                tag("env", Some("prod")),
                tag("ratio", Some("1:2")),
            ]),
        ];
        for tags in sets {
            let mut buf = Vec::new();
            encoder.encode_to_buf(&tags, &mut buf);
            assert_eq!(decoder.decode(&buf).unwrap(), tags);
            assert_eq!(buf, encoder.encode(&tags).into_bytes());
        }

        let wire = b"atag,btag:bvalue,key:,key:true";
        let tags = decoder.decode(wire).unwrap();
        assert_eq!(encoder.encode(&tags).as_bytes(), wire);
    }

    #[test]
    fn round_trip_pairs() {
        const NAMES: &[&str] = &["env", "host.name", "ключ"];
        const VALUES: &[Option<&str>] = &[
            None,
            Some(""),
            Some("true"),
            Some("1:2"),
            Some("http://h:80/"),
            Some("värde"),
            Some("a b"),
        ];

        let pool: Vec<(&str, Option<&str>)> = NAMES
            .iter()
            .flat_map(|n| VALUES.iter().map(move |v| (*n, *v)))
            .collect();
        let decoder = StatsdTagDecoder::new(&StatsdTagConfig::strict());
        let encoder = StatsdTagEncoder;

        let spec = |(n, v): (&str, Option<&str>)| match v {
            Some(v) => format!("{n}{}{v}", char::from(crate::TAG_DELIMITER)),
            None => n.to_string(),
        };

        for a in &pool {
            for b in &pool {
                let tags = MetricTagSet::from(vec![tag(a.0, a.1), tag(b.0, b.1)]);
                let wire = encoder.encode(&tags);
                assert_eq!(
                    wire,
                    format!("{}{}{}", spec(*a), char::from(crate::TAG_SEPARATOR), spec(*b))
                );
                assert_eq!(decoder.decode(wire.as_bytes()).unwrap(), tags, "{wire}");
            }
        }
    }
}
