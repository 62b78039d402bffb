//! Module for the CLI.

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use kona_channel::prelude::*;
use std::{io::Read, path::PathBuf};
use tracing::{info, Level};

/// Main CLI
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// The hex-encoded channel to decode.
    #[arg(long, short = 'c', help = "Hex-encoded channel", conflicts_with = "file")]
    pub channel: Option<String>,
    /// A file holding the hex-encoded channel.
    #[arg(long, short = 'f', help = "File holding the hex-encoded channel")]
    pub file: Option<PathBuf>,
    /// The maximum number of bytes the channel may decompress to.
    #[arg(long, env = "CHANNEL_DECODE_MAX_BYTES", help = "Maximum decompressed channel size")]
    pub max_bytes: Option<usize>,
}

impl Cli {
    /// Initializes telemetry for the application.
    pub(crate) fn init_telemetry(self) -> Result<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(match self.v {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;
        Ok(self)
    }

    /// Returns the decoder configuration selected by the CLI arguments.
    pub(crate) fn decoder_config(&self) -> DecoderConfig {
        self.max_bytes.map_or_else(DecoderConfig::default, |max| {
            DecoderConfig::default().with_max_decompressed_bytes(max)
        })
    }

    /// Reads the hex-encoded channel from the argument, the file, or stdin.
    fn read_channel_hex(&self) -> Result<String> {
        if let Some(channel) = &self.channel {
            return Ok(channel.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read channel file {}", path.display()));
        }
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input).context("Failed to read channel from stdin")?;
        Ok(input)
    }

    /// Decodes the channel selected by the CLI arguments, returning the batch as hex.
    fn decode(&self) -> Result<String> {
        let channel = bytes_from_hex(self.read_channel_hex()?.trim())
            .context("Channel is not valid hex")?;
        info!(target: "channel-decode", "Decoding channel of {} bytes", channel.len());

        let batch = ChannelDecoder::new(self.decoder_config())
            .decode_batch(&channel)
            .context("Failed to decode channel")?;
        info!(target: "channel-decode", "Decoded batch of {} bytes", batch.len());

        Ok(hex_from_bytes(&batch))
    }

    /// Parse the CLI arguments and run the command
    pub(crate) fn run(&self) -> Result<()> {
        println!("{}", self.decode()?);
        Ok(())
    }
}
