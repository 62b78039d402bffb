//! Protocol parameters that bound channel decoding.

/// [FJORD_MAX_RLP_BYTES_PER_CHANNEL] is the maximum amount of bytes that will be read from
/// a channel after the Fjord hardfork. This is the default decompression bound.
pub const FJORD_MAX_RLP_BYTES_PER_CHANNEL: u64 = 100_000_000;

/// The low nibble of a zlib CMF byte that identifies the deflate compression method.
pub const ZLIB_DEFLATE_COMPRESSION_METHOD: u8 = 8;

/// The low nibble of a zlib CMF byte that is reserved by RFC 1950.
pub const ZLIB_RESERVED_COMPRESSION_METHOD: u8 = 15;

/// The FLG bit of a zlib header that announces a preset dictionary.
pub const ZLIB_FDICT_FLAG: u8 = 0x20;

/// The channel version byte that prefixes brotli-compressed channels.
pub const CHANNEL_VERSION_BROTLI: u8 = 1;

/// The size of the scratch buffer that decompressed chunks are written into.
pub const OUTPUT_CHUNK_SIZE: usize = 32 * 1024;

/// The maximum nesting depth of RLP lists accepted by the decoder.
pub const MAX_RLP_DEPTH: usize = 1024;
