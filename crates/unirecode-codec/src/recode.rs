use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};

use tracing::debug;

use crate::error::CodecError;
use crate::traits::{ByteSource, Decoder, Encoder};

/// Default capacity of the read and write buffers: 8 KiB.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Configuration for [`recode_stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecodeConfig {
    /// Capacity of the buffer wrapped around the input reader.
    pub read_buffer_size: usize,
    /// Capacity of the buffer wrapped around the output writer.
    pub write_buffer_size: usize,
}

impl Default for RecodeConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_BUFFER_SIZE,
            write_buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Summary of a completed recode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecodeStats {
    /// Number of characters decoded and re-encoded.
    pub characters: u64,
}

/// Errors that stop a recode pass. `position` is the zero-based index of the
/// character that failed; every character before it has been written.
#[derive(Debug, thiserror::Error)]
pub enum RecodeError {
    #[error("error decoding character {position}: {source}")]
    Decode { position: u64, source: CodecError },

    #[error("error encoding character {position}: {source}")]
    Encode { position: u64, source: CodecError },

    #[error("failed to flush output: {0}")]
    Flush(#[source] std::io::Error),
}

impl RecodeError {
    /// The underlying codec error, if the failure came from a codec.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            RecodeError::Decode { source, .. } | RecodeError::Encode { source, .. } => Some(source),
            RecodeError::Flush(_) => None,
        }
    }
}

/// Decode characters from `src` and re-encode each one to `dst` until the
/// input is exhausted.
///
/// The first error ends the pass. Output already written stays in `dst`,
/// which is flushed on both success and failure.
pub fn recode(
    decoder: &mut dyn Decoder,
    encoder: &mut dyn Encoder,
    src: &mut dyn ByteSource,
    dst: &mut dyn Write,
) -> Result<RecodeStats, RecodeError> {
    let mut stats = RecodeStats::default();

    let outcome = loop {
        let cp = match decoder.decode(src) {
            Ok(Some(cp)) => cp,
            Ok(None) => break Ok(()),
            Err(source) => {
                break Err(RecodeError::Decode {
                    position: stats.characters,
                    source,
                })
            }
        };

        if let Err(source) = encoder.encode(dst, cp) {
            break Err(RecodeError::Encode {
                position: stats.characters,
                source,
            });
        }
        stats.characters += 1;
    };

    let flushed = flush(dst);
    match outcome {
        Ok(()) => {
            flushed.map_err(RecodeError::Flush)?;
            debug!(characters = stats.characters, "recode complete");
            Ok(stats)
        }
        Err(err) => {
            debug!(characters = stats.characters, error = %err, "recode stopped");
            Err(err)
        }
    }
}

/// Buffer `reader` and `writer` per `config`, then [`recode`] between them.
pub fn recode_stream<R: Read, W: Write>(
    decoder: &mut dyn Decoder,
    encoder: &mut dyn Encoder,
    reader: R,
    writer: W,
    config: &RecodeConfig,
) -> Result<RecodeStats, RecodeError> {
    let mut src = BufReader::with_capacity(config.read_buffer_size.max(1), reader);
    let mut dst = BufWriter::with_capacity(config.write_buffer_size.max(1), writer);
    recode(decoder, encoder, &mut src, &mut dst)
}

fn flush(dst: &mut dyn Write) -> std::io::Result<()> {
    loop {
        match dst.flush() {
            Ok(()) => return Ok(()),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}
