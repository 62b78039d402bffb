//! Test utilities for `kona-channel`.

mod channels;
pub use channels::{brotli_channel, unterminated_stored_zlib, zlib_channel, ChannelBuilder};

mod tracing;
pub use self::tracing::{CollectingLayer, TraceStorage};
