//! Tests for the Paginator
//!
//! These tests verify:
//! - Page windows, totals and clipping
//! - Substring search semantics
//! - Pages concatenate to the full key sequence
//! - Both snapshot consistency modes

use pagekv::config::{Config, SnapshotConsistency};
use pagekv::scan::{Entry, KeyFilter, PageRequest, Paginator};
use pagekv::store::Store;

// =============================================================================
// Helper Functions
// =============================================================================

fn store_with(entries: &[(&str, &str)]) -> Store {
    let store = Store::open(&Config::builder().in_memory().build()).unwrap();
    for (key, value) in entries {
        store.set(key.as_bytes(), value.as_bytes()).unwrap();
    }
    store
}

fn fruit_store() -> Store {
    store_with(&[("apple", "1"), ("banana", "2"), ("grape", "3")])
}

fn numbered_store(n: usize) -> Store {
    let store = Store::open(&Config::builder().in_memory().build()).unwrap();
    for i in 0..n {
        store
            .set(format!("key{:04}", i).as_bytes(), format!("value{}", i).as_bytes())
            .unwrap();
    }
    store
}

fn keys(items: &[Entry]) -> Vec<String> {
    items
        .iter()
        .map(|e| String::from_utf8(e.key.to_vec()).unwrap())
        .collect()
}

fn paginator(store: &Store) -> Paginator<'_> {
    Paginator::new(store, SnapshotConsistency::SingleSnapshot, 100)
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_list_first_page() {
    let store = fruit_store();

    let page = paginator(&store).paginate(PageRequest::new(1, 2), None).unwrap();

    assert_eq!(page.items, vec![Entry::new("apple", "1"), Entry::new("banana", "2")]);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.total, 3);
}

#[test]
fn test_list_last_partial_page() {
    let store = fruit_store();

    let page = paginator(&store).paginate(PageRequest::new(2, 2), None).unwrap();

    assert_eq!(page.items, vec![Entry::new("grape", "3")]);
    assert_eq!(page.total, 3);
}

#[test]
fn test_list_past_last_page() {
    let store = fruit_store();

    let page = paginator(&store).paginate(PageRequest::new(3, 2), None).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 3);
    assert!(page.is_past_end());
}

#[test]
fn test_list_empty_store() {
    let store = store_with(&[]);

    let page = paginator(&store).paginate(PageRequest::default(), None).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total, 0);
    assert!(!page.is_past_end());
}

#[test]
fn test_list_page_size_exceeding_entries() {
    let store = fruit_store();

    let page = paginator(&store).paginate(PageRequest::new(1, 1000), None).unwrap();

    assert_eq!(keys(&page.items), vec!["apple", "banana", "grape"]);
    assert_eq!(page.page_size, 1000);
}

#[test]
fn test_list_huge_page_number() {
    let store = fruit_store();

    let page = paginator(&store)
        .paginate(PageRequest::new(usize::MAX, 10), None)
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 3);
}

#[test]
fn test_list_item_counts_match_formula() {
    let n = 23;
    let store = numbered_store(n);

    for page_size in [1, 4, 10, 23, 30] {
        for page_no in 1..=8 {
            let request = PageRequest::new(page_no, page_size);
            let page = paginator(&store).paginate(request, None).unwrap();

            let expected = page_size.min(n.saturating_sub(request.offset()));
            assert_eq!(page.items.len(), expected, "page {} size {}", page_no, page_size);
            assert_eq!(page.total, n);
        }
    }
}

#[test]
fn test_pages_concatenate_to_full_sequence() {
    let n = 57;
    let store = numbered_store(n);

    for page_size in [1, 5, 10, 56, 57, 100] {
        let mut seen = Vec::new();
        let mut page_no = 1;
        loop {
            let page = paginator(&store)
                .paginate(PageRequest::new(page_no, page_size), None)
                .unwrap();
            if page.items.is_empty() {
                break;
            }
            seen.extend(keys(&page.items));
            page_no += 1;
        }

        let expected: Vec<String> = (0..n).map(|i| format!("key{:04}", i)).collect();
        assert_eq!(seen, expected, "page size {}", page_size);
    }
}

#[test]
fn test_small_prefetch_gives_same_pages() {
    let store = numbered_store(40);

    let baseline = paginator(&store).paginate(PageRequest::new(3, 7), None).unwrap();
    let tiny = Paginator::new(&store, SnapshotConsistency::SingleSnapshot, 1)
        .paginate(PageRequest::new(3, 7), None)
        .unwrap();

    assert_eq!(baseline, tiny);
    assert_eq!(keys(&tiny.items).first().unwrap(), "key0014");
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_single_match() {
    let store = fruit_store();
    let filter = KeyFilter::new("an").unwrap();

    let page = paginator(&store)
        .paginate(PageRequest::default(), Some(&filter))
        .unwrap();

    assert_eq!(page.items, vec![Entry::new("banana", "2")]);
    assert_eq!(page.total, 1);
}

#[test]
fn test_search_no_match() {
    let store = fruit_store();
    let filter = KeyFilter::new("kiwi").unwrap();

    let page = paginator(&store)
        .paginate(PageRequest::default(), Some(&filter))
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_search_paginates_over_matches_only() {
    let store = store_with(&[
        ("user:1", "a"),
        ("order:1", "x"),
        ("user:2", "b"),
        ("order:2", "y"),
        ("user:3", "c"),
        ("superuser", "d"),
    ]);
    let filter = KeyFilter::new("user").unwrap();

    let first = paginator(&store)
        .paginate(PageRequest::new(1, 2), Some(&filter))
        .unwrap();
    let second = paginator(&store)
        .paginate(PageRequest::new(2, 2), Some(&filter))
        .unwrap();

    assert_eq!(first.total, 4);
    assert_eq!(second.total, 4);
    assert_eq!(keys(&first.items), vec!["superuser", "user:1"]);
    assert_eq!(keys(&second.items), vec!["user:2", "user:3"]);
}

#[test]
fn test_search_is_case_sensitive() {
    let store = store_with(&[("Apple", "1"), ("apple", "2"), ("pineapple", "3")]);
    let filter = KeyFilter::new("apple").unwrap();

    let page = paginator(&store)
        .paginate(PageRequest::default(), Some(&filter))
        .unwrap();

    assert_eq!(keys(&page.items), vec!["apple", "pineapple"]);
    assert_eq!(page.total, 2);
}

#[test]
fn test_search_results_all_contain_keyword() {
    let store = numbered_store(300);
    let filter = KeyFilter::new("7").unwrap();

    let expected_total = (0..300)
        .filter(|i| format!("key{:04}", i).contains('7'))
        .count();

    let mut collected = Vec::new();
    for page_no in 1.. {
        let page = paginator(&store)
            .paginate(PageRequest::new(page_no, 16), Some(&filter))
            .unwrap();
        assert_eq!(page.total, expected_total);
        if page.items.is_empty() {
            break;
        }
        collected.extend(keys(&page.items));
    }

    assert_eq!(collected.len(), expected_total);
    assert!(collected.iter().all(|k| k.contains('7')));
}

// =============================================================================
// Consistency Mode Tests
// =============================================================================

#[test]
fn test_independent_snapshots_match_when_quiescent() {
    let store = numbered_store(25);
    let filter = KeyFilter::new("1").unwrap();

    let single = Paginator::new(&store, SnapshotConsistency::SingleSnapshot, 100);
    let independent = Paginator::new(&store, SnapshotConsistency::IndependentSnapshots, 100);

    for request in [PageRequest::new(1, 10), PageRequest::new(2, 10), PageRequest::new(9, 3)] {
        assert_eq!(
            single.paginate(request, None).unwrap(),
            independent.paginate(request, None).unwrap()
        );
        assert_eq!(
            single.paginate(request, Some(&filter)).unwrap(),
            independent.paginate(request, Some(&filter)).unwrap()
        );
    }
}

#[test]
fn test_single_snapshot_total_agrees_with_items_under_writes() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(numbered_store(50));
    let stop = Arc::new(AtomicBool::new(false));

    let writer = {
        let store = Arc::clone(&store);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut i = 0;
            while !stop.load(Ordering::Relaxed) && i < 2_000 {
                store.set(format!("extra{:06}", i).as_bytes(), b"x").unwrap();
                i += 1;
            }
        })
    };

    for _ in 0..50 {
        // Page large enough to hold everything: items must equal total
        let page = Paginator::new(&store, SnapshotConsistency::SingleSnapshot, 100)
            .paginate(PageRequest::new(1, usize::MAX), None)
            .unwrap();
        assert_eq!(page.items.len(), page.total);
    }

    stop.store(true, Ordering::Relaxed);
    writer.join().unwrap();
}
