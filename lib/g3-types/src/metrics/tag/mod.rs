/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

mod name;
pub use name::MetricTagName;

mod value;
pub use value::{MetricTagText, MetricTagValue};

mod set;
pub use set::{MetricTag, MetricTagSet};
