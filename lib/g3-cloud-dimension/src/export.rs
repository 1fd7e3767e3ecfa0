/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

use smol_str::SmolStr;

use g3_types::metrics::{MetricTag, MetricTagSet};

use crate::{Dimension, DimensionConfig, DimensionSet};

#[derive(Clone, Copy, Debug, Default)]
pub struct DimensionExporter {
    config: DimensionConfig,
}

impl DimensionExporter {
    pub fn new(config: DimensionConfig) -> Self {
        DimensionExporter { config }
    }

    #[inline]
    pub fn max_dimensions(&self) -> NonZeroUsize {
        self.config.max_dimensions
    }

    /// Take the first `max_dimensions` tags, the others are dropped.
    pub fn export(&self, tags: &MetricTagSet) -> DimensionSet {
        self.export_counted(tags).0
    }

    /// Same as [`export`](Self::export), also returns the number of dropped tags.
    pub fn export_counted(&self, tags: &MetricTagSet) -> (DimensionSet, usize) {
        let max = self.config.max_dimensions.get();
        let taken = tags.len().min(max);

        let mut set = DimensionSet::with_capacity(taken);
        for tag in tags.iter().take(taken) {
            set.push(tag_to_dimension(tag));
        }
        (set, tags.len() - taken)
    }
}

fn tag_to_dimension(tag: &MetricTag) -> Dimension {
    // bare tags still need a value field
    let value = tag.value.as_str().unwrap_or_default();
    Dimension {
        name: SmolStr::new(tag.name.as_str()),
        value: SmolStr::new(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g3_types::metrics::{MetricTagName, MetricTagValue};
    use std::str::FromStr;

    fn numbered_tags(count: usize) -> MetricTagSet {
        (0..count)
            .map(|i| {
                let name = MetricTagName::from_str(&format!("tag{i}")).unwrap();
                let value = MetricTagValue::new(&format!("v{i}")).unwrap();
                MetricTag::new(name, value)
            })
            .collect()
    }

    fn exporter(max: usize) -> DimensionExporter {
        let config = DimensionConfig::with_max_dimensions(NonZeroUsize::new(max).unwrap());
        DimensionExporter::new(config)
    }

    #[test]
    fn truncate_in_order() {
        let exporter = exporter(30);

        let tags = numbered_tags(35);
        let (set, dropped) = exporter.export_counted(&tags);
        assert_eq!(set.len(), 30);
        assert_eq!(dropped, 5);
        for (i, d) in set.iter().enumerate() {
            assert_eq!(d.name, format!("tag{i}"));
            assert_eq!(d.value, format!("v{i}"));
        }

        let tags = numbered_tags(25);
        let (set, dropped) = exporter.export_counted(&tags);
        assert_eq!(set.len(), 25);
        assert_eq!(dropped, 0);
        for (d, t) in set.iter().zip(tags.iter()) {
            assert_eq!(d.name, t.name.as_str());
            assert_eq!(Some(d.value.as_str()), t.value.as_str());
        }

        let tags = numbered_tags(30);
        assert_eq!(exporter.export(&tags).len(), 30);
    }

    #[test]
    fn default_limit() {
        let exporter = DimensionExporter::default();
        assert_eq!(exporter.max_dimensions().get(), 30);
        assert_eq!(exporter.export(&numbered_tags(31)).len(), 30);
        assert_eq!(exporter.export(&numbered_tags(11)).len(), 11);
    }

    #[test]
    fn absent_value() {
        let tags = MetricTagSet::from(vec![
            MetricTag::bare(MetricTagName::from_str("flag").unwrap()),
            MetricTag::with_empty(MetricTagName::from_str("empty").unwrap()),
            MetricTag::new(
                MetricTagName::from_str("bool").unwrap(),
                MetricTagValue::new("true").unwrap(),
            ),
        ]);
        let set = DimensionExporter::default().export(&tags);
        let pairs: Vec<(&str, &str)> = set
            .iter()
            .map(|d| (d.name.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(pairs, [("flag", ""), ("empty", ""), ("bool", "true")]);
    }

    #[test]
    fn idempotent() {
        let exporter = exporter(3);
        let tags = numbered_tags(7);
        assert_eq!(exporter.export(&tags), exporter.export(&tags));
        assert_eq!(exporter.export(&MetricTagSet::default()).len(), 0);
    }

    #[test]
    fn duplicate_names_count() {
        let name = MetricTagName::from_str("env").unwrap();
        let tags: MetricTagSet = ["a", "b", "c"]
            .into_iter()
            .map(|v| MetricTag::new(name.clone(), MetricTagValue::new(v).unwrap()))
            .collect();
        let (set, dropped) = exporter(2).export_counted(&tags);
        assert_eq!(dropped, 1);
        let values: Vec<&str> = set.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, ["a", "b"]);
    }
}
