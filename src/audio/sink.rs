//! Creating `rodio` sinks for catalog assets.
//!
//! Opening and decoding happen here so the audio thread only deals with
//! ready sinks or an `AudioError`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::error::AudioError;

/// Create a paused `Sink` for `asset` positioned at the start.
///
/// With `looped` the decoded source repeats forever.
pub(super) fn create_sink(
    stream: &OutputStream,
    asset: &Path,
    looped: bool,
) -> Result<Sink, AudioError> {
    let file = File::open(asset).map_err(|source| AudioError::Open {
        path: asset.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: asset.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    // Pause before appending so nothing is heard until `Play`.
    sink.pause();
    if looped {
        sink.append(source.repeat_infinite());
    } else {
        sink.append(source);
    }
    Ok(sink)
}
