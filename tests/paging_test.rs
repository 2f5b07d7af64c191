use std::sync::{Arc, Mutex};

use futures::StreamExt;
use shufbot::paging::{collect_until_empty, offset_pages};

// Helper building a fetcher that serves fixed page sizes (then empties)
// and records every requested offset
fn scripted_fetcher(
    sizes: Vec<usize>,
    offsets: Arc<Mutex<Vec<u32>>>,
) -> impl FnMut(u32) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Vec<u32>, String>> + Send>>
{
    move |offset| {
        let sizes = sizes.clone();
        let offsets = offsets.clone();
        Box::pin(async move {
            offsets.lock().unwrap().push(offset);
            let index = (offset / 50) as usize;
            let size = sizes.get(index).copied().unwrap_or(0);
            Ok((0..size as u32).map(|i| offset + i).collect())
        })
    }
}

#[tokio::test]
async fn test_collect_stops_at_first_empty_page() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let pages = offset_pages(50, scripted_fetcher(vec![50, 50, 30], offsets.clone()));

    let items = collect_until_empty(pages).await.unwrap();

    // 50 + 50 + 30 items, gathered in fetch order
    assert_eq!(items.len(), 130);
    assert_eq!(items[0], 0);
    assert_eq!(items[129], 129);

    // The empty page at offset 150 is the fourth and final fetch
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50, 100, 150]);
}

#[tokio::test]
async fn test_offset_advances_by_page_size_even_for_short_pages() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    // The first page is already short; the offset still advances by 50
    let pages = offset_pages(50, scripted_fetcher(vec![30], offsets.clone()));

    let items = collect_until_empty(pages).await.unwrap();

    assert_eq!(items.len(), 30);
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50]);
}

#[tokio::test]
async fn test_empty_collection_yields_nothing() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let pages = offset_pages(50, scripted_fetcher(Vec::new(), offsets.clone()));

    let items = collect_until_empty(pages).await.unwrap();

    assert!(items.is_empty());
    assert_eq!(*offsets.lock().unwrap(), vec![0]);
}

#[tokio::test]
async fn test_unpolled_stream_fetches_nothing() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let pages = offset_pages(50, scripted_fetcher(vec![50, 50], offsets.clone()));

    // Building (and dropping) the stream must not trigger any fetch
    drop(pages);

    assert!(offsets.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_pages_are_fetched_on_demand() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let pages = offset_pages(50, scripted_fetcher(vec![50, 50, 50], offsets.clone()));
    let mut pages = std::pin::pin!(pages);

    // Each poll triggers exactly one fetch, never more
    let first = pages.next().await.unwrap().unwrap();
    assert_eq!(first.len(), 50);
    assert_eq!(*offsets.lock().unwrap(), vec![0]);

    let second = pages.next().await.unwrap().unwrap();
    assert_eq!(second[0], 50);
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50]);
}

#[tokio::test]
async fn test_page_error_stops_collection() {
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let offsets_inner = offsets.clone();

    let pages = offset_pages(50, move |offset| {
        let offsets = offsets_inner.clone();
        async move {
            offsets.lock().unwrap().push(offset);
            if offset == 0 {
                Ok((0..50u32).collect::<Vec<u32>>())
            } else {
                Err("backend unavailable".to_string())
            }
        }
    });

    let result = collect_until_empty(pages).await;

    // The failure surfaces and nothing is fetched past it
    assert_eq!(result.unwrap_err(), "backend unavailable");
    assert_eq!(*offsets.lock().unwrap(), vec![0, 50]);
}
