/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

#[cfg(feature = "yaml")]
mod yaml;

/// What to do with a tag specification that has an empty name or is not valid UTF-8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedTagPolicy {
    /// Drop the bad tag and keep the others.
    #[default]
    Skip,
    /// Fail the whole fragment, and so the whole metric event.
    Reject,
}

impl MalformedTagPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedTagPolicy::Skip => "skip",
            MalformedTagPolicy::Reject => "reject",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsdTagConfig {
    pub malformed_tag: MalformedTagPolicy,
}

impl StatsdTagConfig {
    pub fn strict() -> Self {
        StatsdTagConfig {
            malformed_tag: MalformedTagPolicy::Reject,
        }
    }

    #[inline]
    pub fn set_strict(&mut self, strict: bool) {
        self.malformed_tag = if strict {
            MalformedTagPolicy::Reject
        } else {
            MalformedTagPolicy::Skip
        };
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.malformed_tag == MalformedTagPolicy::Reject
    }
}
