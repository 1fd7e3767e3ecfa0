/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2026 ByteDance and/or its affiliates.
 */

#[macro_use]
mod macros;

mod hash;
mod util;

pub mod key;
pub mod value;

pub use hash::foreach_kv;
pub use util::foreach_doc;
