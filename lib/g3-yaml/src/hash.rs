/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2026 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

pub fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    #[test]
    fn foreach_kv_in_order() {
        let yaml = yaml_doc!("statsd: 1\ndimension: 2");
        let hash = yaml.as_hash().unwrap();
        let mut keys = Vec::new();
        foreach_kv(hash, |k, v| {
            keys.push((k.to_owned(), v.as_i64().unwrap()));
            Ok(())
        })
        .unwrap();
        assert_eq!(
            keys,
            vec![("statsd".to_string(), 1), ("dimension".to_string(), 2)]
        );
    }

    #[test]
    fn foreach_kv_err() {
        let yaml = yaml_doc!("30: max");
        let hash = yaml.as_hash().unwrap();
        assert!(foreach_kv(hash, |_, _| Ok(())).is_err());

        let yaml = yaml_doc!("statsd: 1");
        let hash = yaml.as_hash().unwrap();
        assert!(foreach_kv(hash, |k, _| Err(anyhow!("invalid key {k}"))).is_err());
    }
}
