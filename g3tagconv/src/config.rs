/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::path::Path;

use anyhow::{Context, anyhow};
use log::warn;
use yaml_rust::{Yaml, yaml};

use g3_cloud_dimension::{DEFAULT_MAX_DIMENSIONS, DimensionConfig};
use g3_statsd_tag::StatsdTagConfig;

use crate::opts::ProcArgs;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub(crate) statsd: StatsdTagConfig,
    pub(crate) dimension: DimensionConfig,
}

impl AppConfig {
    pub(crate) fn load(proc_args: &ProcArgs) -> anyhow::Result<Self> {
        let mut config = AppConfig::default();
        if let Some(config_file) = &proc_args.config_file {
            config.load_file(config_file)?;
        }
        config.apply_args(proc_args);
        if let Some(msg) = config.dimension_limit_warning() {
            warn!("{msg}");
        }
        Ok(config)
    }

    /// Checked on the final value, command line overrides included.
    fn dimension_limit_warning(&self) -> Option<String> {
        self.dimension.exceeds_api_limit().then(|| {
            format!(
                "max dimensions {} is larger than the documented API limit {DEFAULT_MAX_DIMENSIONS}",
                self.dimension.max_dimensions
            )
        })
    }

    fn load_file(&mut self, path: &Path) -> anyhow::Result<()> {
        // allow multiple docs, the later ones override
        g3_yaml::foreach_doc(path, |_, doc| match doc {
            Yaml::Hash(map) => self.load_doc(map),
            _ => Err(anyhow!("yaml doc root should be hash")),
        })
    }

    fn load_doc(&mut self, map: &yaml::Hash) -> anyhow::Result<()> {
        g3_yaml::foreach_kv(map, |k, v| match g3_yaml::key::normalize(k).as_str() {
            "statsd" | "statsd_tag" => {
                self.statsd = StatsdTagConfig::parse_yaml(v)
                    .context(format!("invalid statsd tag config value for key {k}"))?;
                Ok(())
            }
            "dimension" | "dimensions" => {
                self.dimension = DimensionConfig::parse_yaml(v)
                    .context(format!("invalid dimension config value for key {k}"))?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k} in main conf")),
        })
    }

    fn apply_args(&mut self, proc_args: &ProcArgs) {
        if proc_args.strict {
            self.statsd.set_strict(true);
        }
        if let Some(max) = proc_args.max_dimensions {
            self.dimension.set_max_dimensions(max);
        }
    }
}
