use rand::seq::SliceRandom;

/// Suffix appended to the name of every playlist this bot creates.
pub const SHUFFLED_SUFFIX: &str = "_shuffled";

/// Maximum number of track URIs a single playlist add may carry. The
/// Spotify endpoint rejects larger requests.
pub const TRACK_BATCH_SIZE: usize = 100;

/// Returns the name of the shuffled counterpart of a playlist.
pub fn shuffled_name(name: &str) -> String {
    format!("{name}{SHUFFLED_SUFFIX}")
}

/// Checks whether a playlist name marks one of the bot's own creations.
///
/// Such playlists are hidden from the shuffle menu so a shuffled copy is
/// never offered for shuffling again.
pub fn is_shuffled_name(name: &str) -> bool {
    name.ends_with(SHUFFLED_SUFFIX)
}

/// Returns the given tracks in uniformly random order.
pub fn shuffle_tracks<T>(mut tracks: Vec<T>) -> Vec<T> {
    tracks.shuffle(&mut rand::rng());
    tracks
}

/// Splits items into batches of at most `size` elements, preserving their
/// order across batch boundaries.
pub fn into_batches<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let mut batches: Vec<Vec<T>> = Vec::new();
    let mut batch: Vec<T> = Vec::new();

    for item in items {
        batch.push(item);
        if batch.len() == size {
            batches.push(std::mem::take(&mut batch));
        }
    }

    if !batch.is_empty() {
        batches.push(batch);
    }

    batches
}
