/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

pub use g3_types::metrics::{
    STATSD_TAG_DELIMITER as TAG_DELIMITER, STATSD_TAG_SEPARATOR as TAG_SEPARATOR,
};

mod error;
pub use error::MalformedTag;

mod config;
pub use config::{MalformedTagPolicy, StatsdTagConfig};

mod decode;
pub use decode::StatsdTagDecoder;

mod encode;
pub use encode::{StatsdTagDisplay, StatsdTagEncoder};
