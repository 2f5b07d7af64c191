use std::collections::HashMap;

use shufbot::utils::*;

// Helper function to create a batch of numbered track URIs
fn create_test_uris(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("spotify:track:{i}")).collect()
}

// Helper function to count occurrences of each element
fn count_occurrences(uris: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for uri in uris {
        *counts.entry(uri.as_str()).or_default() += 1;
    }
    counts
}

#[test]
fn test_shuffled_name() {
    assert_eq!(shuffled_name("Road Trip"), "Road Trip_shuffled");
    assert_eq!(shuffled_name("Liked"), "Liked_shuffled");

    // Shuffling a shuffled playlist just stacks the suffix
    assert_eq!(shuffled_name("Focus_shuffled"), "Focus_shuffled_shuffled");
}

#[test]
fn test_is_shuffled_name() {
    assert!(is_shuffled_name("Road Trip_shuffled"));
    assert!(is_shuffled_name("_shuffled"));

    // Ordinary names and near misses are not flagged
    assert!(!is_shuffled_name("Road Trip"));
    assert!(!is_shuffled_name("shuffled"));
    assert!(!is_shuffled_name("Road Trip_shuffled2"));
}

#[test]
fn test_shuffle_tracks_is_a_permutation() {
    let original = create_test_uris(500);
    let shuffled = shuffle_tracks(original.clone());

    // Same length and the same multiset of elements
    assert_eq!(shuffled.len(), original.len());
    assert_eq!(count_occurrences(&shuffled), count_occurrences(&original));
}

#[test]
fn test_shuffle_tracks_preserves_duplicates() {
    let mut original = create_test_uris(10);
    original.extend(create_test_uris(10)); // every URI twice

    let shuffled = shuffle_tracks(original.clone());

    assert_eq!(shuffled.len(), 20);
    assert_eq!(count_occurrences(&shuffled), count_occurrences(&original));
}

#[test]
fn test_shuffle_tracks_empty_and_single() {
    let empty: Vec<String> = Vec::new();
    assert!(shuffle_tracks(empty).is_empty());

    let single = shuffle_tracks(vec!["spotify:track:only".to_string()]);
    assert_eq!(single, vec!["spotify:track:only".to_string()]);
}

#[test]
fn test_into_batches_partition_sizes() {
    let uris = create_test_uris(250);
    let batches = into_batches(uris, TRACK_BATCH_SIZE);

    // 250 tracks split into ceil(250 / 100) = 3 batches
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 100);
    assert_eq!(batches[1].len(), 100);
    assert_eq!(batches[2].len(), 50);
}

#[test]
fn test_into_batches_exact_multiple() {
    let uris = create_test_uris(200);
    let batches = into_batches(uris, TRACK_BATCH_SIZE);

    // No trailing empty batch when the count divides evenly
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|batch| batch.len() == 100));
}

#[test]
fn test_into_batches_concatenation_preserves_order() {
    let uris = create_test_uris(137);
    let batches = into_batches(uris.clone(), TRACK_BATCH_SIZE);

    let rejoined: Vec<String> = batches.into_iter().flatten().collect();
    assert_eq!(rejoined, uris);
}

#[test]
fn test_into_batches_small_input() {
    let uris = create_test_uris(7);
    let batches = into_batches(uris.clone(), TRACK_BATCH_SIZE);

    // Fewer items than one batch still yields exactly one batch
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], uris);

    // And no batches at all for no items
    let none = into_batches(Vec::<String>::new(), TRACK_BATCH_SIZE);
    assert!(none.is_empty());
}
