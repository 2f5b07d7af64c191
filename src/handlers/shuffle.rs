use crate::{
    Res,
    context::Context,
    paging,
    spotify::{self, SpotifyClient},
    types::InlineKeyboardButton,
    utils,
};

/// Callback target for the virtual liked-songs collection; pressing its
/// button delivers `shuffleLiked`.
const LIKED_TARGET: &str = "Liked";

/// Sends the shuffle menu: one message per playlist, each with a single
/// inline button, followed by the liked-songs entry.
///
/// Playlists the bot created itself (names ending in the shuffled
/// suffix) are left out so a shuffled copy is never offered again.
pub async fn menu(ctx: &Context, chat_id: i64) -> Res<()> {
    let Some(client) = require_login(ctx, chat_id).await? else {
        return Ok(());
    };

    let playlists = spotify::all_playlists(&client).await?;
    for playlist in playlists
        .into_iter()
        .filter(|playlist| !utils::is_shuffled_name(&playlist.name))
    {
        ctx.bot
            .send_message_with_button(
                chat_id,
                &playlist.name,
                InlineKeyboardButton {
                    text: "shuffle".to_string(),
                    callback_data: format!("shuffle{}", playlist.id),
                },
            )
            .await?;
    }

    ctx.bot
        .send_message_with_button(
            chat_id,
            "Liked songs",
            InlineKeyboardButton {
                text: "shuffle".to_string(),
                callback_data: format!("shuffle{LIKED_TARGET}"),
            },
        )
        .await?;

    Ok(())
}

/// Runs the shuffle for a pressed button. `target` is the callback data
/// with the `shuffle` prefix already stripped: either the liked-songs
/// marker or a playlist id.
pub async fn run(ctx: &Context, chat_id: i64, target: &str) -> Res<()> {
    let Some(client) = require_login(ctx, chat_id).await? else {
        return Ok(());
    };

    if target == LIKED_TARGET {
        shuffle_liked(ctx, &client, chat_id).await
    } else {
        shuffle_playlist(ctx, &client, chat_id, target).await
    }
}

/// Shuffles a regular playlist into its `_shuffled` counterpart.
async fn shuffle_playlist(
    ctx: &Context,
    client: &SpotifyClient,
    chat_id: i64,
    playlist_id: &str,
) -> Res<()> {
    let Some(playlist) = spotify::get_playlist(client, playlist_id).await? else {
        ctx.bot
            .send_message(chat_id, "Playlist does not exist anymore")
            .await?;
        return Ok(());
    };

    ctx.bot
        .send_message(chat_id, &format!("Start shuffling {}", playlist.name))
        .await?;

    let fresh = replace_shuffled(ctx, client, chat_id, &playlist.name).await?;
    let uris = spotify::playlist_track_uris(client, &playlist.id).await?;
    fill_shuffled(ctx, client, chat_id, &fresh, uris).await
}

/// Shuffles the saved-tracks library into the `Liked_shuffled` playlist.
///
/// The library itself is read-only here; the shuffled order always lands
/// in a real playlist, never back in the library.
async fn shuffle_liked(ctx: &Context, client: &SpotifyClient, chat_id: i64) -> Res<()> {
    let fresh = replace_shuffled(ctx, client, chat_id, LIKED_TARGET).await?;

    let pages = spotify::saved_track_pages(client.clone());
    let saved = paging::collect_until_empty(pages).await?;
    let uris = saved.into_iter().map(|saved| saved.track.uri).collect();

    fill_shuffled(ctx, client, chat_id, &fresh, uris).await
}

/// Replaces the shuffled counterpart of `base_name`: removes the old one
/// when it exists, then creates a fresh private playlist with the
/// conventional name. Returns the new playlist's id.
async fn replace_shuffled(
    ctx: &Context,
    client: &SpotifyClient,
    chat_id: i64,
    base_name: &str,
) -> Res<String> {
    let name = utils::shuffled_name(base_name);

    if let Some(old) = spotify::find_by_name(client, &name).await? {
        ctx.bot
            .send_message(chat_id, "Removing old shuffled playlist")
            .await?;
        spotify::unfollow_playlist(client, &old.id).await?;
    }

    let created = spotify::create_playlist(client, &name).await?;
    ctx.bot
        .send_message(chat_id, "Playlist created, starting shuffle")
        .await?;

    Ok(created.id)
}

/// Shuffles the gathered URIs and appends them to the target playlist in
/// batches, then announces completion.
async fn fill_shuffled(
    ctx: &Context,
    client: &SpotifyClient,
    chat_id: i64,
    playlist_id: &str,
    uris: Vec<String>,
) -> Res<()> {
    let shuffled = utils::shuffle_tracks(uris);
    for batch in utils::into_batches(shuffled, utils::TRACK_BATCH_SIZE) {
        spotify::add_tracks(client, playlist_id, batch).await?;
    }

    ctx.bot.send_message(chat_id, "Shuffled").await?;
    Ok(())
}

/// Fetches the current session or tells the chat there is none.
async fn require_login(ctx: &Context, chat_id: i64) -> Res<Option<SpotifyClient>> {
    match ctx.session.get().await {
        Some(client) => Ok(Some(client)),
        None => {
            ctx.bot
                .send_message(chat_id, "You are not logged in to Spotify")
                .await?;
            Ok(None)
        }
    }
}
