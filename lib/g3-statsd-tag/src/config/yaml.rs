/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::{MalformedTagPolicy, StatsdTagConfig};

impl MalformedTagPolicy {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let s = g3_yaml::value::as_string(v)?;
        match g3_yaml::key::normalize(&s).as_str() {
            "skip" | "ignore" => Ok(MalformedTagPolicy::Skip),
            "reject" | "strict" => Ok(MalformedTagPolicy::Reject),
            _ => Err(anyhow!("unsupported malformed tag policy {s}")),
        }
    }
}

impl StatsdTagConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = StatsdTagConfig::default();
            g3_yaml::foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'statsd tag config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match g3_yaml::key::normalize(k).as_str() {
            "malformed_tag" | "malformed_tag_policy" => {
                self.malformed_tag = MalformedTagPolicy::parse_yaml(v)
                    .context(format!("invalid malformed tag policy value for key {k}"))?;
            }
            "strict" => {
                let strict = g3_yaml::value::as_bool(v)
                    .context(format!("invalid bool value for key {k}"))?;
                self.set_strict(strict);
            }
            _ => return Err(anyhow!("invalid key {k}")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use g3_yaml::yaml_doc;
    use yaml_rust::YamlLoader;

    #[test]
    fn parse_yaml_ok() {
        let yaml = yaml_doc!(
            r#"
                malformed_tag: reject
            "#
        );
        let config = StatsdTagConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.malformed_tag, MalformedTagPolicy::Reject);

        let yaml = yaml_doc!(
            r#"
                Malformed-Tag: Skip
            "#
        );
        let config = StatsdTagConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.malformed_tag, MalformedTagPolicy::Skip);

        let yaml = yaml_doc!(
            r#"
                strict: true
            "#
        );
        let config = StatsdTagConfig::parse_yaml(&yaml).unwrap();
        assert!(config.is_strict());

        let yaml = yaml_doc!(
            r#"
                malformed_tag: reject
                strict: off
            "#
        );
        let config = StatsdTagConfig::parse_yaml(&yaml).unwrap();
        assert!(!config.is_strict());

        let yaml = Yaml::Hash(Default::default());
        let config = StatsdTagConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config, StatsdTagConfig::default());
    }

    #[test]
    fn parse_yaml_err() {
        let yaml = yaml_doc!(
            r#"
                invalid_key: "value"
            "#
        );
        assert!(StatsdTagConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                malformed_tag: crash
            "#
        );
        assert!(StatsdTagConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!(
            r#"
                strict: sometimes
            "#
        );
        assert!(StatsdTagConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Array(vec![]);
        assert!(StatsdTagConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Null;
        assert!(StatsdTagConfig::parse_yaml(&yaml).is_err());
    }
}
