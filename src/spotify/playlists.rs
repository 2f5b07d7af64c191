use crate::{
    Res,
    spotify::SpotifyClient,
    types::{AddTracksRequest, CreatePlaylistRequest, Playlist, PlaylistTracksPage, PlaylistsPage},
};

/// Playlists requested per page when walking the user's listing.
const PLAYLISTS_PAGE_SIZE: u32 = 50;

/// Track entries requested per page when walking a playlist.
const TRACKS_PAGE_SIZE: u32 = 100;

/// Fetches every playlist of the logged-in user, following `next` links
/// until the listing is exhausted.
pub async fn all_playlists(client: &SpotifyClient) -> Res<Vec<Playlist>> {
    let mut playlists = Vec::new();
    let mut url = Some(format!(
        "{}/me/playlists?limit={}",
        client.api_url(),
        PLAYLISTS_PAGE_SIZE
    ));

    while let Some(page_url) = url {
        let page: PlaylistsPage = client.get(&page_url).await?;
        playlists.extend(page.items);
        url = page.next;
    }

    Ok(playlists)
}

/// Finds a playlist by exact name. The first match wins when the listing
/// carries duplicates.
pub async fn find_by_name(client: &SpotifyClient, name: &str) -> Res<Option<Playlist>> {
    let playlists = all_playlists(client).await?;
    Ok(playlists.into_iter().find(|playlist| playlist.name == name))
}

/// Looks up a playlist by id; `None` when it no longer exists.
pub async fn get_playlist(client: &SpotifyClient, id: &str) -> Res<Option<Playlist>> {
    client
        .get_optional(&format!("{}/playlists/{}", client.api_url(), id))
        .await
}

/// Collects the URIs of every playable track in a playlist, following
/// `next` links. Entries without a track (removed or local-only) are
/// skipped.
pub async fn playlist_track_uris(client: &SpotifyClient, id: &str) -> Res<Vec<String>> {
    let mut uris = Vec::new();
    let mut url = Some(format!(
        "{}/playlists/{}/tracks?limit={}",
        client.api_url(),
        id,
        TRACKS_PAGE_SIZE
    ));

    while let Some(page_url) = url {
        let page: PlaylistTracksPage = client.get(&page_url).await?;
        uris.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track)
                .map(|track| track.uri),
        );
        url = page.next;
    }

    Ok(uris)
}

/// Creates a fresh private playlist for the logged-in user.
pub async fn create_playlist(client: &SpotifyClient, name: &str) -> Res<Playlist> {
    let request = CreatePlaylistRequest {
        name: name.to_string(),
        public: false,
    };

    client
        .post(
            &format!("{}/users/{}/playlists", client.api_url(), client.user_id()),
            &request,
        )
        .await
}

/// Removes a playlist from the user's library.
pub async fn unfollow_playlist(client: &SpotifyClient, id: &str) -> Res<()> {
    client
        .delete(&format!("{}/playlists/{}/followers", client.api_url(), id))
        .await
}

/// Appends a batch of track URIs to a playlist. Callers keep batches at
/// or below [`crate::utils::TRACK_BATCH_SIZE`].
pub async fn add_tracks(client: &SpotifyClient, id: &str, uris: Vec<String>) -> Res<()> {
    let request = AddTracksRequest { uris };

    client
        .post_discard(
            &format!("{}/playlists/{}/tracks", client.api_url(), id),
            &request,
        )
        .await
}
