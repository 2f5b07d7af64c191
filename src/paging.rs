//! Lazy offset/limit paging.
//!
//! Spotify's library endpoints page with `offset` and `limit` query
//! parameters and no reliable total, so the natural shape is an unbounded
//! stream of pages that the consumer cuts off at the first empty one.
//! Pages are only fetched on demand; a stream nobody polls costs nothing.

use std::future::Future;

use futures::{Stream, StreamExt, stream};

/// Builds an unbounded stream of pages starting at offset zero.
///
/// `fetch` is invoked with the offset of the page to load; each yielded
/// page advances the offset by `page_size`. The stream itself never
/// ends, so consumers decide when to stop (usually on the first empty
/// page).
pub fn offset_pages<T, E, F, Fut>(
    page_size: u32,
    mut fetch: F,
) -> impl Stream<Item = Result<Vec<T>, E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    stream::unfold(0u32, move |offset| {
        let page = fetch(offset);
        async move { Some((page.await, offset + page_size)) }
    })
}

/// Drains pages until the first empty one, concatenating their items in
/// fetch order.
///
/// The first failed page aborts collection and surfaces its error; pages
/// after it are never requested.
pub async fn collect_until_empty<T, E>(
    pages: impl Stream<Item = Result<Vec<T>, E>>,
) -> Result<Vec<T>, E> {
    let mut pages = std::pin::pin!(pages);
    let mut items = Vec::new();

    while let Some(page) = pages.next().await {
        let page = page?;
        if page.is_empty() {
            break;
        }
        items.extend(page);
    }

    Ok(items)
}
