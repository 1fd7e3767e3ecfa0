/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::io::{self, BufRead};

use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command};

const COMMAND_ARG_FRAGMENT: &str = "fragment";

pub(crate) fn append_fragment_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(COMMAND_ARG_FRAGMENT)
            .help("Tag fragments, use @FILE to read one from file. Read lines from stdin if no one is given")
            .value_name("FRAGMENT")
            .num_args(0..),
    )
}

/// Get all the fragments to convert, in command line order.
pub(crate) fn load_fragments(args: &ArgMatches) -> anyhow::Result<Vec<Vec<u8>>> {
    match args.get_many::<String>(COMMAND_ARG_FRAGMENT) {
        Some(values) => values.map(|s| load_arg(s)).collect(),
        None => read_lines(io::stdin().lock()),
    }
}

fn load_arg(s: &str) -> anyhow::Result<Vec<u8>> {
    if let Some(p) = s.strip_prefix('@') {
        let mut raw =
            std::fs::read(p).map_err(|e| anyhow!("failed to read fragment from file {p}: {e}"))?;
        trim_line_end(&mut raw);
        Ok(raw)
    } else {
        Ok(s.as_bytes().to_vec())
    }
}

fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut fragments = Vec::new();
    for r in reader.split(b'\n') {
        let mut line = r.map_err(|e| anyhow!("failed to read fragment line: {e}"))?;
        trim_line_end(&mut line);
        fragments.push(line);
    }
    Ok(fragments)
}

fn trim_line_end(buf: &mut Vec<u8>) {
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
}
