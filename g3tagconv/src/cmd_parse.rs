/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use clap::{ArgMatches, Command};

use g3_types::metrics::MetricTagSet;

use crate::pipeline::TagPipeline;

pub(crate) const COMMAND: &str = "parse";

pub(crate) fn command() -> Command {
    crate::input::append_fragment_arg(
        Command::new(COMMAND).about("Decode tag fragments and show one tag per line"),
    )
}

pub(crate) fn run(pipeline: &TagPipeline, args: &ArgMatches) -> anyhow::Result<()> {
    let fragments = crate::input::load_fragments(args)?;
    let mut stdout = io::stdout().lock();
    pipeline.run(&fragments, |tags| {
        write_tags(&mut stdout, tags)?;
        Ok(())
    })
}

/// A bare tag is shown as `name`, other tags as `name="value"`.
/// An empty line ends each fragment.
fn write_tags<W: Write>(w: &mut W, tags: &MetricTagSet) -> io::Result<()> {
    for tag in tags {
        match tag.value.as_str() {
            Some(value) => writeln!(w, "{}={value:?}", tag.name)?,
            None => writeln!(w, "{}", tag.name)?,
        }
    }
    writeln!(w)
}
