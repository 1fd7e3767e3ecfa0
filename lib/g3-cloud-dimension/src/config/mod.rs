/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

#[cfg(feature = "yaml")]
mod yaml;

/// Max number of dimensions per metric accepted by the cloud metrics API.
///
/// Older releases of the API only accepted 10.
pub const DEFAULT_MAX_DIMENSIONS: NonZeroUsize = NonZeroUsize::new(30).unwrap();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionConfig {
    pub max_dimensions: NonZeroUsize,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        DimensionConfig {
            max_dimensions: DEFAULT_MAX_DIMENSIONS,
        }
    }
}

impl DimensionConfig {
    pub fn with_max_dimensions(max_dimensions: NonZeroUsize) -> Self {
        DimensionConfig { max_dimensions }
    }

    #[inline]
    pub fn set_max_dimensions(&mut self, max_dimensions: NonZeroUsize) {
        self.max_dimensions = max_dimensions;
    }

    /// Whether the ceiling is above the documented API limit.
    #[inline]
    pub fn exceeds_api_limit(&self) -> bool {
        self.max_dimensions > DEFAULT_MAX_DIMENSIONS
    }
}
