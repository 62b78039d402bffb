//! Streaming zlib decompression built on [miniz_oxide].

use super::append_chunk;
use crate::{
    errors::DecompressionError,
    params::{OUTPUT_CHUNK_SIZE, ZLIB_FDICT_FLAG},
};
use alloc::{vec, vec::Vec};
use miniz_oxide::{
    inflate::stream::{inflate, InflateState},
    DataFormat, MZError, MZFlush, MZStatus, StreamResult,
};
use tracing::{debug, trace, warn};

/// Decompresses a zlib stream, producing at most `max_bytes` bytes.
///
/// Output is pulled from the inflater in fixed-size chunks. When every input byte has been
/// consumed and the inflater reports that it cannot make progress ([MZError::Buf]), the stream
/// simply ended without its final block or Adler-32 trailer. That is accepted: everything
/// inflated so far is returned. A present trailer is still verified.
///
/// Streams that set the FDICT header flag fail with [DecompressionError::ZlibDictionary].
pub fn decompress_zlib(data: &[u8], max_bytes: usize) -> Result<Vec<u8>, DecompressionError> {
    if requires_dictionary(data) {
        warn!(target: "zlib", "Zlib stream requires a preset dictionary");
        return Err(DecompressionError::ZlibDictionary);
    }

    let mut state = InflateState::new_boxed(DataFormat::Zlib);
    let mut chunk = vec![0u8; OUTPUT_CHUNK_SIZE];
    let mut output = Vec::with_capacity(data.len());
    let mut input = data;

    loop {
        let StreamResult { bytes_consumed, bytes_written, status } =
            inflate(&mut state, input, &mut chunk, MZFlush::None);
        input = &input[bytes_consumed..];
        append_chunk(&mut output, &chunk[..bytes_written], max_bytes)?;
        trace!(
            target: "zlib",
            "Inflated {} bytes, {} input bytes left",
            bytes_written,
            input.len()
        );

        match status {
            Ok(MZStatus::StreamEnd) => break,
            Ok(MZStatus::Ok) => continue,
            Ok(MZStatus::NeedDict) => return Err(DecompressionError::ZlibDictionary),
            // Do not turn this into an error: unterminated channel streams are valid.
            Err(MZError::Buf) if input.is_empty() => {
                debug!(
                    target: "zlib",
                    "Zlib stream ended without a terminator after {} bytes",
                    output.len()
                );
                break;
            }
            Err(err) => {
                warn!(target: "zlib", "Zlib inflate failed: {:?}", err);
                return Err(DecompressionError::Zlib(err));
            }
        }
    }

    Ok(output)
}

/// Returns `true` if `data` starts with a valid zlib header that has the FDICT flag set.
///
/// The inflater rejects such headers as corrupt data, so the flag is checked up front.
fn requires_dictionary(data: &[u8]) -> bool {
    match data {
        [cmf, flg, ..] => {
            let header = u16::from_be_bytes([*cmf, *flg]);
            flg & ZLIB_FDICT_FLAG != 0 && header % 31 == 0
        }
        _ => false,
    }
}
