#![doc = "Decodes a compressed OP Stack channel into its span batch bytes."]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use clap::Parser;

pub(crate) mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().init_telemetry()?.run()
}
