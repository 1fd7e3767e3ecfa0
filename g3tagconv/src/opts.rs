/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint, value_parser};
use clap_complete::Shell;

use super::{cmd_dimension, cmd_encode, cmd_parse};

const ARGS_COMPLETION: &str = "completion";
const ARGS_VERBOSE: &str = "verbose";
const ARGS_CONFIG_FILE: &str = "config-file";
const ARGS_TEST_CONFIG: &str = "test-config";
const ARGS_STRICT: &str = "strict";
const ARGS_MAX_DIMENSIONS: &str = "max-dimensions";

#[derive(Debug, Default)]
pub(crate) struct ProcArgs {
    pub(crate) verbose_level: u8,
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) test_config: bool,
    pub(crate) strict: bool,
    pub(crate) max_dimensions: Option<NonZeroUsize>,
}

fn build_cli_args() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .arg(
            Arg::new(ARGS_COMPLETION)
                .num_args(1)
                .value_name("SHELL")
                .long("completion")
                .value_parser(value_parser!(Shell))
                .exclusive(true),
        )
        .arg(
            Arg::new(ARGS_VERBOSE)
                .help("Show verbose output")
                .num_args(0)
                .action(ArgAction::Count)
                .global(true)
                .short('v')
                .long(ARGS_VERBOSE),
        )
        .arg(
            Arg::new(ARGS_CONFIG_FILE)
                .help("Config file path")
                .num_args(1)
                .value_name("CONFIG FILE")
                .value_hint(ValueHint::FilePath)
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .short('c')
                .long(ARGS_CONFIG_FILE),
        )
        .arg(
            Arg::new(ARGS_TEST_CONFIG)
                .help("Test the format of config file and exit")
                .action(ArgAction::SetTrue)
                .short('t')
                .long(ARGS_TEST_CONFIG),
        )
        .arg(
            Arg::new(ARGS_STRICT)
                .help("Reject the whole fragment if any tag in it is malformed")
                .action(ArgAction::SetTrue)
                .global(true)
                .long(ARGS_STRICT),
        )
        .arg(
            Arg::new(ARGS_MAX_DIMENSIONS)
                .help("Max number of dimensions to export for each fragment")
                .num_args(1)
                .value_name("COUNT")
                .value_parser(value_parser!(NonZeroUsize))
                .global(true)
                .long(ARGS_MAX_DIMENSIONS),
        )
        .subcommand(cmd_parse::command())
        .subcommand(cmd_encode::command())
        .subcommand(cmd_dimension::command())
}

/// Returns `None` if there is nothing more to do.
pub(crate) fn parse_clap() -> anyhow::Result<Option<(ProcArgs, ArgMatches)>> {
    let args = build_cli_args().get_matches();

    if let Some(target) = args.get_one::<Shell>(ARGS_COMPLETION) {
        let mut app = build_cli_args();
        let bin_name = app.get_name().to_string();
        clap_complete::generate(*target, &mut app, bin_name, &mut io::stdout());
        return Ok(None);
    }

    let proc_args = ProcArgs::parse_matches(&args);
    if !proc_args.test_config && args.subcommand().is_none() {
        return Err(anyhow!("no subcommand given, see --help"));
    }
    Ok(Some((proc_args, args)))
}

impl ProcArgs {
    fn parse_matches(args: &ArgMatches) -> Self {
        // global args are propagated to the subcommand matches
        let sub_args = args.subcommand().map(|(_, a)| a).unwrap_or(args);
        ProcArgs {
            verbose_level: sub_args
                .get_one::<u8>(ARGS_VERBOSE)
                .copied()
                .unwrap_or_default(),
            config_file: sub_args.get_one::<PathBuf>(ARGS_CONFIG_FILE).cloned(),
            test_config: args.get_flag(ARGS_TEST_CONFIG),
            strict: sub_args.get_flag(ARGS_STRICT),
            max_dimensions: sub_args.get_one::<NonZeroUsize>(ARGS_MAX_DIMENSIONS).copied(),
        }
    }
}
