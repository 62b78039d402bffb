//! Brotli decompression for Fjord channels.

use super::append_chunk;
use crate::{errors::DecompressionError, params::OUTPUT_CHUNK_SIZE};
use ::brotli::{BrotliDecompressStream, BrotliResult, BrotliState, HuffmanCode};
use alloc::{vec, vec::Vec};
use alloc_stdlib::HeapAlloc;
use tracing::{debug, trace, warn};

/// Decompresses a brotli stream, producing at most `max_bytes` bytes.
///
/// `data` must not include the channel version byte. Like the zlib path, a stream that runs out
/// of input before its final meta-block is accepted and yields the bytes decoded so far.
pub fn decompress_brotli(data: &[u8], max_bytes: usize) -> Result<Vec<u8>, DecompressionError> {
    let mut state = BrotliState::new(
        HeapAlloc::<u8>::new(0),
        HeapAlloc::<u32>::new(0),
        HeapAlloc::<HuffmanCode>::new(HuffmanCode::default()),
    );

    let mut chunk = vec![0u8; OUTPUT_CHUNK_SIZE];
    let mut output = Vec::with_capacity(data.len());
    let mut available_in = data.len();
    let mut input_offset = 0;
    let mut total_out = 0;

    loop {
        let mut available_out = chunk.len();
        let mut output_offset = 0;
        let result = BrotliDecompressStream(
            &mut available_in,
            &mut input_offset,
            data,
            &mut available_out,
            &mut output_offset,
            &mut chunk,
            &mut total_out,
            &mut state,
        );
        append_chunk(&mut output, &chunk[..output_offset], max_bytes)?;
        trace!(
            target: "brotli",
            "Decompressed {} bytes, {} input bytes left",
            output_offset,
            available_in
        );

        match result {
            BrotliResult::ResultSuccess => break,
            BrotliResult::NeedsMoreOutput => continue,
            // Do not turn this into an error: unterminated channel streams are valid.
            BrotliResult::NeedsMoreInput => {
                debug!(
                    target: "brotli",
                    "Brotli stream ended without a final meta-block after {} bytes",
                    output.len()
                );
                break;
            }
            BrotliResult::ResultFailure => {
                warn!(target: "brotli", "Brotli decompression failed after {} bytes", total_out);
                return Err(DecompressionError::Brotli);
            }
        }
    }

    Ok(output)
}
