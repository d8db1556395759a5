//! Concurrent decoding of a selection with order-preserving, fail-fast join
//!
//! Every source gets its own decode future. The futures are polled together
//! and each result is written into the slot matching its input position, so
//! the output order never depends on which decode finishes first. The first
//! error ends the join; futures still in flight are dropped with it.

use futures::FutureExt;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, info};

use crate::io::error::{Result, computation_error};
use crate::loading::decoder::{Decoder, ImageDecoder};
use crate::loading::source::{DecodedImage, ImageSource};

/// Decode all sources with the default [`ImageDecoder`]
///
/// # Errors
///
/// Returns the first decode error encountered; no partial result is produced
pub async fn load(sources: &[ImageSource]) -> Result<Vec<DecodedImage>> {
    load_with(&ImageDecoder, sources).await
}

/// Decode all sources with a custom decoder
///
/// The i-th output always corresponds to the i-th source.
///
/// # Errors
///
/// Returns the first decode error in completion order; no partial result is produced
pub async fn load_with<D>(decoder: &D, sources: &[ImageSource]) -> Result<Vec<DecodedImage>>
where
    D: Decoder + ?Sized,
{
    let mut slots: Vec<Option<DecodedImage>> = Vec::with_capacity(sources.len());
    slots.resize_with(sources.len(), || None);

    let mut pending: FuturesUnordered<_> = sources
        .iter()
        .enumerate()
        .map(|(index, source)| decoder.decode(source).map(move |result| (index, result)))
        .collect();

    while let Some((index, result)) = pending.next().await {
        let image = result?;
        debug!(index, remaining = pending.len(), "decode finished");
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(image);
        }
    }

    let images = slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| computation_error("image loading", &"a decode slot was never filled"))?;

    info!(count = images.len(), "loaded images");
    Ok(images)
}
