/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use clap::{ArgMatches, Command};

use crate::pipeline::TagPipeline;

pub(crate) const COMMAND: &str = "encode";

pub(crate) fn command() -> Command {
    crate::input::append_fragment_arg(
        Command::new(COMMAND).about("Decode tag fragments and encode them again"),
    )
}

pub(crate) fn run(pipeline: &TagPipeline, args: &ArgMatches) -> anyhow::Result<()> {
    let fragments = crate::input::load_fragments(args)?;
    let mut stdout = io::stdout().lock();
    pipeline.run(&fragments, |tags| {
        writeln!(stdout, "{}", pipeline.encode(tags))?;
        Ok(())
    })
}
