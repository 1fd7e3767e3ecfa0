/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

mod config;
pub use config::{DEFAULT_MAX_DIMENSIONS, DimensionConfig};

mod dimension;
pub use dimension::{Dimension, DimensionSet};

mod export;
pub use export::DimensionExporter;
