#![cfg(test)]

// Property tests for ChainMap kept inside the crate so they can assert
// structural invariants (capacity, load factor) alongside the model checks.

use crate::chain_map::ChainMap;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            2 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert is replace-or-create and returns the previous value like the model.
// - `get`/`contains_key`/`remove` parity for present and absent keys,
//   through borrowed `&str` lookups.
// - `iter` yields each live entry exactly once; key set equals the model's.
// - `len` parity after every op; capacity stays a power of two and never
//   drops below the live count.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainMap<String, i32> = ChainMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k, v));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k.as_str()), model.remove(k));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k.as_str()), model.get(k));
                }
                OpI::Contains(k) => {
                    prop_assert_eq!(sut.contains_key(k.as_str()), model.contains_key(&k));
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                }
                OpI::Iterate => {
                    let seen: BTreeSet<String> = sut.iter().map(|(k, _)| k.clone()).collect();
                    let expected: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(seen, expected);
                    prop_assert_eq!(sut.iter().count(), model.len());
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.capacity().is_power_of_two());
            prop_assert!(sut.len() <= sut.capacity(), "load factor keeps len under capacity");
        }
    }

    // Property: after any sequence of inserts that triggers rehashes, every
    // key ever inserted and not removed resolves to its latest value.
    #[test]
    fn prop_rehash_loses_nothing(keys in proptest::collection::btree_set("[a-z0-9]{1,8}", 1..200)) {
        let mut m = ChainMap::with_capacity(2).unwrap();
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(m.insert(k.clone(), i), None);
        }
        prop_assert_eq!(m.len(), keys.len());
        prop_assert_eq!(m.iter().count(), keys.len());
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(m.get(k.as_str()), Some(&i));
        }
    }
}
