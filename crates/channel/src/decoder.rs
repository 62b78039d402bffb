//! This module contains the [ChannelDecoder], which turns a compressed channel into the raw bytes
//! of the single span batch it carries.

use crate::{
    decompress::decompress,
    errors::{ChannelDecodeError, ChannelDecodeResult, HexError},
    hex::bytes_from_hex,
    params::FJORD_MAX_RLP_BYTES_PER_CHANNEL,
    rlp::{decode_exact, RlpValue},
};
use alloy_primitives::Bytes;
use tracing::{trace, warn};

/// Configuration for the [ChannelDecoder].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DecoderConfig {
    /// The maximum number of bytes a channel may decompress to.
    pub max_decompressed_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { max_decompressed_bytes: FJORD_MAX_RLP_BYTES_PER_CHANNEL as usize }
    }
}

impl DecoderConfig {
    /// Sets the maximum number of bytes a channel may decompress to.
    pub const fn with_max_decompressed_bytes(mut self, max: usize) -> Self {
        self.max_decompressed_bytes = max;
        self
    }
}

/// Decodes channels into batches.
///
/// Decoding runs in four steps:
/// 1. Decompress the channel.
/// 2. Decode the decompressed payload as exactly one RLP item.
/// 3. Require that item to be a string. A list would mean several batches in one channel, which
///    is not supported.
/// 4. Read the string's content as `0x`-prefixed hex text and decode it into the batch bytes.
///
/// Step 4 is a second encoding layered inside the RLP string; the RLP string is never the batch
/// itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelDecoder {
    cfg: DecoderConfig,
}

impl ChannelDecoder {
    /// Creates a new [ChannelDecoder] with the given configuration.
    pub const fn new(cfg: DecoderConfig) -> Self {
        Self { cfg }
    }

    /// Returns the decoder configuration.
    pub const fn config(&self) -> &DecoderConfig {
        &self.cfg
    }

    /// Decodes `channel` into the raw bytes of its batch.
    pub fn decode_batch(&self, channel: &[u8]) -> ChannelDecodeResult<Bytes> {
        let payload = decompress(channel, self.cfg.max_decompressed_bytes)?;
        trace!(
            target: "channel-decoder",
            "Decompressed {} channel bytes into {}",
            channel.len(),
            payload.len()
        );

        let content = match decode_exact(&payload)? {
            RlpValue::Bytes(content) => content,
            RlpValue::List(items) => {
                warn!(
                    target: "channel-decoder",
                    "Channel decoded to a list of {} items",
                    items.len()
                );
                return Err(ChannelDecodeError::UnexpectedShape { items: items.len() });
            }
        };

        let text = core::str::from_utf8(&content).map_err(|_| HexError::NotText)?;
        let batch = bytes_from_hex(text)?;
        trace!(target: "channel-decoder", "Decoded batch of {} bytes", batch.len());
        Ok(batch.into())
    }
}

/// Decodes `channel` into the raw bytes of its batch with the default [DecoderConfig].
pub fn decode_batch(channel: &[u8]) -> ChannelDecodeResult<Bytes> {
    ChannelDecoder::default().decode_batch(channel)
}
