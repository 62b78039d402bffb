//! Builders for compressed channel fixtures.

use crate::{
    decompress::CompressionType, hex::hex_from_bytes, params::CHANNEL_VERSION_BROTLI,
    rlp::RlpValue,
};
use alloc::{vec, vec::Vec};
use alloy_primitives::Bytes;
use miniz_oxide::deflate::compress_to_vec_zlib;

/// The largest payload a single stored deflate block or uncompressed brotli meta-block holds.
const MAX_STORED_BLOCK: usize = u16::MAX as usize;

/// Compresses `data` into a complete zlib stream.
pub fn zlib_channel(data: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(data, 6)
}

/// Wraps `data` in a zlib stream made of non-final stored blocks, with no final block and no
/// Adler-32 trailer. This is the shape of a channel whose compressor was never closed.
pub fn unterminated_stored_zlib(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0x78, 0x01];
    let blocks: Vec<&[u8]> =
        if data.is_empty() { vec![data] } else { data.chunks(MAX_STORED_BLOCK).collect() };
    for block in blocks {
        let len = block.len() as u16;
        // BFINAL = 0, BTYPE = 00 (stored).
        out.push(0x00);
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(block);
    }
    out
}

/// Prefixes a raw brotli stream with the brotli channel version byte.
pub fn brotli_channel(stream: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(stream.len() + 1);
    out.push(CHANNEL_VERSION_BROTLI);
    out.extend_from_slice(stream);
    out
}

/// Writes `data` as a brotli stream of uncompressed meta-blocks, optionally closed by an empty
/// final meta-block.
fn uncompressed_brotli(data: &[u8], terminated: bool) -> Vec<u8> {
    let mut bits = BitWriter::default();
    // WBITS = 16
    bits.write(0, 1);
    for block in data.chunks(MAX_STORED_BLOCK + 1) {
        // ISLAST = 0, MNIBBLES = 4, MLEN - 1, ISUNCOMPRESSED = 1
        bits.write(0, 1);
        bits.write(0, 2);
        bits.write(block.len() as u32 - 1, 16);
        bits.write(1, 1);
        bits.extend_aligned(block);
    }
    if terminated {
        // ISLAST = 1, ISLASTEMPTY = 1
        bits.write(1, 1);
        bits.write(1, 1);
    }
    bits.bytes
}

/// A little-endian bit writer, as used by the brotli format.
#[derive(Debug, Default)]
struct BitWriter {
    bytes: Vec<u8>,
    bit: usize,
}

impl BitWriter {
    fn write(&mut self, value: u32, count: usize) {
        for i in 0..count {
            if self.bit % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 1 << (self.bit % 8);
            }
            self.bit += 1;
        }
    }

    fn extend_aligned(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
        self.bit = self.bytes.len() * 8;
    }
}

/// Builds a compressed channel around a decompressed RLP payload.
#[derive(Debug, Clone)]
pub struct ChannelBuilder {
    payload: Vec<u8>,
    compression: CompressionType,
    terminated: bool,
}

impl ChannelBuilder {
    /// Creates a builder for a channel whose decompressed payload is `value` RLP-encoded.
    pub fn new(value: RlpValue) -> Self {
        Self::raw(alloy_rlp::encode(value))
    }

    /// Creates a builder for a channel carrying `batch` the way batchers submit it: an RLP
    /// string whose content is the batch as `0x`-prefixed hex text.
    pub fn batch(batch: &[u8]) -> Self {
        Self::new(RlpValue::Bytes(Bytes::from(hex_from_bytes(batch).into_bytes())))
    }

    /// Creates a builder for a channel whose decompressed payload is exactly `payload`.
    pub const fn raw(payload: Vec<u8>) -> Self {
        Self { payload, compression: CompressionType::Zlib, terminated: true }
    }

    /// Sets the compression algorithm.
    pub const fn with_compression(mut self, compression: CompressionType) -> Self {
        self.compression = compression;
        self
    }

    /// Leaves the compressed stream without its end marker.
    pub const fn unterminated(mut self) -> Self {
        self.terminated = false;
        self
    }

    /// Builds the compressed channel.
    pub fn build(self) -> Vec<u8> {
        match (self.compression, self.terminated) {
            (CompressionType::Zlib, true) => zlib_channel(&self.payload),
            (CompressionType::Zlib, false) => unterminated_stored_zlib(&self.payload),
            (CompressionType::Brotli, terminated) => {
                brotli_channel(&uncompressed_brotli(&self.payload, terminated))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_uncompressed_brotli_layout() {
        let stream = uncompressed_brotli(&hex!("75ed184249e9bc19675e"), true);
        assert_eq!(stream, hex!("90001075ed184249e9bc19675e03"));
    }

    #[test]
    fn test_uncompressed_brotli_empty() {
        assert_eq!(uncompressed_brotli(&[], true), vec![0x06]);
    }

    #[test]
    fn test_unterminated_stored_zlib_layout() {
        assert_eq!(unterminated_stored_zlib(b"ab"), hex!("7801000200fdff6162"));
    }
}
