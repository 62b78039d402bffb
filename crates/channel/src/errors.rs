//! Error types for channel decoding.

use alloy_primitives::hex::FromHexError;
use miniz_oxide::MZError;
use thiserror::Error;

/// A [Result] type alias where the error is [ChannelDecodeError].
pub type ChannelDecodeResult<T> = Result<T, ChannelDecodeError>;

/// An error encountered while decoding a channel into a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelDecodeError {
    /// The channel could not be decompressed.
    #[error("Decompression error: {0}")]
    Decompression(#[from] DecompressionError),
    /// The decompressed payload is not a valid RLP item.
    #[error("RLP error: {0}")]
    Rlp(#[from] RlpError),
    /// The decoded RLP item is a list, but a single string was expected. A list means the
    /// channel holds several (or nested) batches.
    #[error("Expected a single RLP string, found a list of {items} items")]
    UnexpectedShape {
        /// The number of items in the decoded list.
        items: usize,
    },
    /// The RLP string content is not a well-formed hex string.
    #[error("Malformed hex: {0}")]
    MalformedHex(#[from] HexError),
}

/// A channel decompression error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    /// The channel holds no bytes.
    #[error("Channel is empty")]
    EmptyChannel,
    /// The first byte of the channel does not identify a supported compression algorithm.
    #[error("Unsupported compression type: {0:#04x}")]
    UnsupportedCompression(u8),
    /// The zlib stream is corrupt.
    #[error("Zlib inflate failed: {0:?}")]
    Zlib(MZError),
    /// The zlib stream asks for a preset dictionary, which channels never carry.
    #[error("Zlib stream requires a preset dictionary")]
    ZlibDictionary,
    /// The brotli stream is corrupt.
    #[error("Brotli decompression failed")]
    Brotli,
    /// The decompressed payload exceeds the configured bound.
    #[error("Decompressed payload exceeds the maximum of {max} bytes")]
    TooLarge {
        /// The configured maximum number of decompressed bytes.
        max: usize,
    },
}

/// An RLP decoding error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RlpError {
    /// A length prefix claims more bytes than are available.
    #[error("RLP input is truncated")]
    Truncated,
    /// Bytes remain after the top-level item was fully decoded.
    #[error("RLP input has {remaining} trailing bytes")]
    TrailingData {
        /// The number of undecoded bytes.
        remaining: usize,
    },
    /// The encoding is not canonical, or a length prefix is otherwise invalid.
    #[error("Malformed RLP: {0}")]
    Malformed(alloy_rlp::Error),
    /// Lists are nested deeper than [MAX_RLP_DEPTH].
    ///
    /// [MAX_RLP_DEPTH]: crate::params::MAX_RLP_DEPTH
    #[error("RLP lists are nested too deeply")]
    DepthExceeded,
}

impl From<alloy_rlp::Error> for RlpError {
    fn from(err: alloy_rlp::Error) -> Self {
        match err {
            alloy_rlp::Error::InputTooShort => Self::Truncated,
            e => Self::Malformed(e),
        }
    }
}

impl From<RlpError> for alloy_rlp::Error {
    fn from(err: RlpError) -> Self {
        match err {
            RlpError::Truncated => Self::InputTooShort,
            RlpError::TrailingData { .. } => Self::UnexpectedLength,
            RlpError::Malformed(e) => e,
            RlpError::DepthExceeded => Self::Custom("RLP lists are nested too deeply"),
        }
    }
}

/// A hex decoding error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The content is not valid UTF-8 text.
    #[error("Content is not valid UTF-8 text")]
    NotText,
    /// The text has an odd number of digits or a non-hex character.
    #[error("{0}")]
    Malformed(FromHexError),
}

impl From<FromHexError> for HexError {
    fn from(err: FromHexError) -> Self {
        Self::Malformed(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rlp_error_from_alloy() {
        assert_eq!(RlpError::from(alloy_rlp::Error::InputTooShort), RlpError::Truncated);
        assert_eq!(
            RlpError::from(alloy_rlp::Error::LeadingZero),
            RlpError::Malformed(alloy_rlp::Error::LeadingZero)
        );
    }

    #[test]
    fn test_alloy_error_from_rlp() {
        assert_eq!(alloy_rlp::Error::from(RlpError::Truncated), alloy_rlp::Error::InputTooShort);
        assert_eq!(
            alloy_rlp::Error::from(RlpError::TrailingData { remaining: 2 }),
            alloy_rlp::Error::UnexpectedLength
        );
    }

    #[test]
    fn test_channel_decode_error_display() {
        let err = ChannelDecodeError::from(DecompressionError::UnsupportedCompression(0x02));
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "Decompression error: Unsupported compression type: 0x02"
        );
        let err = ChannelDecodeError::UnexpectedShape { items: 2 };
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "Expected a single RLP string, found a list of 2 items"
        );
    }
}
