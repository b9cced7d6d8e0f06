// ChainMap public-API test suite.
//
// The core contracts exercised:
// - Construction: default capacity 16; explicit capacity must be a power
//   of two, rejected with a typed error before allocation.
// - Replace-or-create insert, borrowed lookups, recoverable misses.
// - Growth at the 0.75 load factor with rehashing that loses nothing.
// - Display: brace-delimited `key: value` listing, bucket-then-chain order.
use seqmap::{CapacityError, ChainMap, Render};

// Test: capacity validity at construction.
// Verifies: 0, 3, and other non-powers-of-two are rejected; 16 (default)
// and 1024 succeed.
#[test]
fn capacity_validation() {
    for bad in [0usize, 3, 1000] {
        assert_eq!(
            ChainMap::<String, i32>::with_capacity(bad).unwrap_err(),
            CapacityError::NotPowerOfTwo(bad)
        );
    }

    assert_eq!(ChainMap::<String, i32>::new().capacity(), 16);
    assert_eq!(
        ChainMap::<String, i32>::with_capacity(1024).unwrap().capacity(),
        1024
    );
}

// Test: 13 inserts into a default-capacity map cross the 0.75 * 16
// threshold.
// Verifies: capacity doubles to 32 and every key stays retrievable.
#[test]
fn thirteenth_insert_doubles_capacity() {
    let mut m = ChainMap::new();
    for i in 0..13u32 {
        m.insert(format!("entry-{}", i), i);
    }
    assert_eq!(m.capacity(), 32);
    assert_eq!(m.len(), 13);
    for i in 0..13u32 {
        assert_eq!(m.get(format!("entry-{}", i).as_str()), Some(&i));
    }
}

// Test: replace-or-create law with size deltas.
#[test]
fn insert_replaces_or_creates() {
    let mut m = ChainMap::new();
    assert_eq!(m.insert("x".to_string(), 1), None);
    assert_eq!(m.len(), 1);
    assert_eq!(m.insert("x".to_string(), 2), Some(1));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("x"), Some(&2));
}

// Test: misses are recoverable and leave the map unchanged.
#[test]
fn misses_are_recoverable() {
    let mut m = ChainMap::new();
    m.insert("present".to_string(), 1);

    assert_eq!(m.get("absent"), None);
    assert!(!m.contains_key("absent"));
    assert_eq!(m.remove("absent"), None);
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("present"), Some(&1));
}

// Test: iteration completeness on populated and empty maps.
#[test]
fn iteration_visits_everything_once() {
    let empty: ChainMap<String, i32> = ChainMap::new();
    assert_eq!(empty.iter().count(), 0);

    let mut m = ChainMap::new();
    for i in 0..50i64 {
        m.insert(i, i * i);
    }
    let mut seen: Vec<i64> = m.iter().map(|(k, _)| *k).collect();
    assert_eq!(seen.len(), 50, "each live entry exactly once");
    seen.sort_unstable();
    assert_eq!(seen, (0..50).collect::<Vec<i64>>());
    for (k, v) in &m {
        assert_eq!(*v, k * k);
    }
}

// Test: many inserts and removals across several rehashes.
// Verifies: rehashing neither loses nor duplicates entries, removed keys
// stay gone, survivors keep their values.
#[test]
fn churn_across_rehashes() {
    let mut m = ChainMap::with_capacity(4).unwrap();
    for i in 0..500u64 {
        m.insert(i, i + 1000);
    }
    for i in (0..500u64).step_by(2) {
        assert_eq!(m.remove(&i), Some(i + 1000));
    }
    assert_eq!(m.len(), 250);
    assert_eq!(m.iter().count(), 250);
    for i in 0..500u64 {
        if i % 2 == 0 {
            assert_eq!(m.get(&i), None);
        } else {
            assert_eq!(m.get(&i), Some(&(i + 1000)));
        }
    }
}

// Test: the display listing follows bucket order, not insertion order.
// Integer keys hash to their own bit pattern, so with a capacity bigger
// than the keys the bucket order is numeric order.
#[test]
fn display_uses_bucket_order() {
    let mut m: ChainMap<u32, bool> = ChainMap::with_capacity(16).unwrap();
    m.insert(9, true);
    m.insert(4, false);
    m.insert(6, true);

    assert_eq!(
        format!("{}", m.rendered()),
        "{4: false, 6: true, 9: true}"
    );
}
