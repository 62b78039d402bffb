//! Channel decompression.
//!
//! The first byte of a channel selects the algorithm: a zlib CMF byte whose low nibble is the
//! deflate (or reserved) method, or [CHANNEL_VERSION_BROTLI] followed by a brotli stream.
//!
//! Both decompressors accept a stream that stops without its end marker. Batchers in the wild
//! submit channel frames whose compressed stream was never closed, so running out of input at a
//! block boundary (or mid-block) is the end of the data, not a decompression error. Every other
//! failure is fatal.

use crate::{
    errors::DecompressionError,
    params::{
        CHANNEL_VERSION_BROTLI, ZLIB_DEFLATE_COMPRESSION_METHOD, ZLIB_RESERVED_COMPRESSION_METHOD,
    },
};
use alloc::vec::Vec;

mod zlib;
pub use zlib::decompress_zlib;

mod brotli;
pub use self::brotli::decompress_brotli;

/// The compression algorithm of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// Zlib-wrapped deflate.
    Zlib,
    /// Brotli, introduced with the Fjord hardfork.
    Brotli,
}

impl CompressionType {
    /// Identifies the compression algorithm from the first byte of the channel.
    pub fn from_channel(channel: &[u8]) -> Result<Self, DecompressionError> {
        let first = *channel.first().ok_or(DecompressionError::EmptyChannel)?;
        let method = first & 0x0F;
        if method == ZLIB_DEFLATE_COMPRESSION_METHOD || method == ZLIB_RESERVED_COMPRESSION_METHOD {
            Ok(Self::Zlib)
        } else if first == CHANNEL_VERSION_BROTLI {
            Ok(Self::Brotli)
        } else {
            Err(DecompressionError::UnsupportedCompression(first))
        }
    }
}

/// Decompresses a channel into its RLP payload, producing at most `max_bytes` bytes.
pub fn decompress(channel: &[u8], max_bytes: usize) -> Result<Vec<u8>, DecompressionError> {
    match CompressionType::from_channel(channel)? {
        CompressionType::Zlib => decompress_zlib(channel, max_bytes),
        CompressionType::Brotli => decompress_brotli(&channel[1..], max_bytes),
    }
}

/// Appends a decompressed chunk to `output`, enforcing the size bound.
fn append_chunk(
    output: &mut Vec<u8>,
    chunk: &[u8],
    max_bytes: usize,
) -> Result<(), DecompressionError> {
    if output.len() + chunk.len() > max_bytes {
        return Err(DecompressionError::TooLarge { max: max_bytes });
    }
    output.extend_from_slice(chunk);
    Ok(())
}
