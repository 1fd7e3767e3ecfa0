/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;
use log::{error, info, warn};

use g3_cloud_dimension::{DimensionExporter, DimensionSet};
use g3_statsd_tag::{MalformedTag, MalformedTagPolicy, StatsdTagDecoder, StatsdTagEncoder};
use g3_types::metrics::MetricTagSet;

use crate::config::AppConfig;

pub(crate) struct TagPipeline {
    decoder: StatsdTagDecoder,
    encoder: StatsdTagEncoder,
    exporter: DimensionExporter,
}

impl TagPipeline {
    pub(crate) fn new(config: &AppConfig) -> Self {
        TagPipeline {
            decoder: StatsdTagDecoder::new(&config.statsd),
            encoder: StatsdTagEncoder,
            exporter: DimensionExporter::new(config.dimension),
        }
    }

    pub(crate) fn decode(&self, fragment: &[u8]) -> Result<MetricTagSet, MalformedTag> {
        match self.decoder.policy() {
            MalformedTagPolicy::Skip => {
                let (tags, errors) = self.decoder.decode_report(fragment);
                for e in errors {
                    warn!("skipped {e}");
                }
                Ok(tags)
            }
            MalformedTagPolicy::Reject => self.decoder.decode(fragment),
        }
    }

    pub(crate) fn encode(&self, tags: &MetricTagSet) -> String {
        self.encoder.encode(tags)
    }

    pub(crate) fn export(&self, tags: &MetricTagSet) -> DimensionSet {
        let (dimensions, dropped) = self.exporter.export_counted(tags);
        if dropped > 0 {
            info!(
                "dropped {dropped} of {} tags over the dimension limit {}",
                tags.len(),
                self.exporter.max_dimensions()
            );
        }
        dimensions
    }

    /// Decode all fragments and call `f` on the good ones.
    ///
    /// Rejected fragments are logged and counted, the others are still processed.
    pub(crate) fn run<F>(&self, fragments: &[Vec<u8>], mut f: F) -> anyhow::Result<()>
    where
        F: FnMut(&MetricTagSet) -> anyhow::Result<()>,
    {
        let mut rejected = 0usize;
        for (i, fragment) in fragments.iter().enumerate() {
            match self.decode(fragment) {
                Ok(tags) => f(&tags)?,
                Err(e) => {
                    error!("rejected tag fragment #{i}: {e}");
                    rejected += 1;
                }
            }
        }
        if rejected > 0 {
            Err(anyhow!(
                "{rejected} of {} tag fragments rejected",
                fragments.len()
            ))
        } else {
            Ok(())
        }
    }
}
