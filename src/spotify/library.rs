use futures::Stream;

use crate::{Res, paging, spotify::SpotifyClient, types::{SavedTrack, SavedTracksPage}};

/// Saved tracks requested per page.
pub const SAVED_TRACKS_PAGE_SIZE: u32 = 50;

/// Fetches one offset/limit page of the user's saved tracks.
pub async fn saved_tracks_page(
    client: &SpotifyClient,
    offset: u32,
    limit: u32,
) -> Res<Vec<SavedTrack>> {
    let page: SavedTracksPage = client
        .get(&format!(
            "{}/me/tracks?limit={}&offset={}",
            client.api_url(),
            limit,
            offset
        ))
        .await?;

    Ok(page.items)
}

/// Streams the user's saved tracks page by page, lazily.
///
/// Nothing is fetched until the stream is polled. Consume it with
/// [`paging::collect_until_empty`] to stop at the first empty page.
pub fn saved_track_pages(client: SpotifyClient) -> impl Stream<Item = Res<Vec<SavedTrack>>> {
    paging::offset_pages(SAVED_TRACKS_PAGE_SIZE, move |offset| {
        let client = client.clone();
        async move { saved_tracks_page(&client, offset, SAVED_TRACKS_PAGE_SIZE).await }
    })
}
