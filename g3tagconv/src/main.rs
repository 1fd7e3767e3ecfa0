/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use log::{debug, info};

mod cmd_dimension;
mod cmd_encode;
mod cmd_parse;
mod config;
mod input;
mod logger;
mod opts;
mod pipeline;

use config::AppConfig;
use pipeline::TagPipeline;

fn main() -> anyhow::Result<()> {
    let Some((proc_args, args)) =
        opts::parse_clap().context("failed to parse command line options")?
    else {
        return Ok(());
    };

    let _logger_guard = logger::setup(proc_args.verbose_level)
        .map_err(|e| anyhow!("failed to setup logger: {e}"))?;

    let config = AppConfig::load(&proc_args)
        .context(format!("failed to load config, opts: {:?}", &proc_args))?;
    debug!("loaded config: {config:?}");

    if proc_args.test_config {
        info!("the format of the config file is ok");
        return Ok(());
    }

    let pipeline = TagPipeline::new(&config);
    match args.subcommand() {
        Some((cmd_parse::COMMAND, sub_args)) => cmd_parse::run(&pipeline, sub_args),
        Some((cmd_encode::COMMAND, sub_args)) => cmd_encode::run(&pipeline, sub_args),
        Some((cmd_dimension::COMMAND, sub_args)) => cmd_dimension::run(&pipeline, sub_args),
        Some((cmd, _)) => Err(anyhow!("invalid subcommand {cmd}")),
        None => Ok(()),
    }
}
