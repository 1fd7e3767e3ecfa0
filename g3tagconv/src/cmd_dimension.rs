/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::pipeline::TagPipeline;

pub(crate) const COMMAND: &str = "dimension";

const COMMAND_ARG_PRETTY: &str = "pretty";

pub(crate) fn command() -> Command {
    crate::input::append_fragment_arg(
        Command::new(COMMAND)
            .about("Decode tag fragments and show the exported dimensions as json")
            .arg(
                Arg::new(COMMAND_ARG_PRETTY)
                    .help("Pretty print the json output")
                    .action(ArgAction::SetTrue)
                    .long(COMMAND_ARG_PRETTY),
            ),
    )
}

pub(crate) fn run(pipeline: &TagPipeline, args: &ArgMatches) -> anyhow::Result<()> {
    let pretty = args.get_flag(COMMAND_ARG_PRETTY);
    let fragments = crate::input::load_fragments(args)?;
    let mut stdout = io::stdout().lock();
    pipeline.run(&fragments, |tags| {
        let v = pipeline.export(tags).to_json();
        if pretty {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&v)?)?;
        } else {
            writeln!(stdout, "{v}")?;
        }
        Ok(())
    })
}
