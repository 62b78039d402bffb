#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]

extern crate alloc;

/// Re-export commonly used types and functions.
pub mod prelude {
    pub use crate::{
        decoder::{decode_batch, ChannelDecoder, DecoderConfig},
        errors::{ChannelDecodeError, ChannelDecodeResult, DecompressionError, HexError, RlpError},
        hex::{bytes_from_hex, hex_from_bytes},
        rlp::RlpValue,
    };
}

pub mod decoder;
pub mod decompress;
pub mod errors;
pub mod hex;
pub mod params;
pub mod rlp;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
