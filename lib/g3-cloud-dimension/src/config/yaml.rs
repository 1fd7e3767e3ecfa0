/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::DimensionConfig;

impl DimensionConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = DimensionConfig::default();
            g3_yaml::foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'dimension config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match g3_yaml::key::normalize(k).as_str() {
            "max_dimensions" | "max_count" => {
                let max = g3_yaml::value::as_nonzero_usize(v)
                    .context(format!("invalid nonzero usize value for key {k}"))?;
                self.set_max_dimensions(max);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MAX_DIMENSIONS;
    use g3_yaml::yaml_doc;
    use yaml_rust::YamlLoader;

    #[test]
    fn parse_yaml_ok() {
        let yaml = yaml_doc!(
            r#"
                max_dimensions: 10
            "#
        );
        let config = DimensionConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.max_dimensions.get(), 10);

        let yaml = yaml_doc!(
            r#"
                Max-Dimensions: "40"
            "#
        );
        let config = DimensionConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.max_dimensions.get(), 40);
        assert!(config.exceeds_api_limit());

        let yaml = Yaml::Hash(Default::default());
        let config = DimensionConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.max_dimensions, DEFAULT_MAX_DIMENSIONS);
    }

    #[test]
    fn parse_yaml_err() {
        let yaml = yaml_doc!(
            r#"
                max_dimensions: 0
            "#
        );
        assert!(DimensionConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                max_dimensions: -3
            "#
        );
        assert!(DimensionConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                dimensions: 30
            "#
        );
        assert!(DimensionConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Integer(30);
        assert!(DimensionConfig::parse_yaml(&yaml).is_err());
    }
}
