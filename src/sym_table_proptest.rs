#![cfg(test)]

// Property tests for SymTable kept inside the crate so they can observe
// internals such as the bucket count alongside the public surface.

use crate::capacity::BUCKET_COUNTS;
use crate::sym_table::{InsertError, SymTable};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Replace(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Replace(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` rejects duplicates, returning the value; otherwise model parity.
// - `replace` swaps on present keys and hands the value back on absent ones.
// - `remove` returns the model's value by ownership; absent keys are no-ops.
// - `get`/`contains_key` parity; `get_mut` edits are observed by lookups.
// - `iter` yields each live binding exactly once and matches the model's map.
// - `len` parity and bucket-count stage membership after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: SymTable<i32> = SymTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = &pool[i];
                    let already = model.contains_key(k);
                    match sut.put(k, v) {
                        Ok(()) => {
                            prop_assert!(!already, "put must fail on duplicate");
                            model.insert(k.clone(), v);
                        }
                        Err(InsertError::DuplicateKey(back)) => {
                            prop_assert!(already, "duplicate error only when key exists");
                            prop_assert_eq!(back, v, "rejected value must come back intact");
                        }
                    }
                }
                OpI::Replace(i, v) => {
                    let k = &pool[i];
                    match sut.replace(k, v) {
                        Ok(prev) => {
                            let expected = model.insert(k.clone(), v);
                            prop_assert_eq!(Some(prev), expected);
                        }
                        Err(back) => {
                            prop_assert!(!model.contains_key(k));
                            prop_assert_eq!(back, v, "unconsumed value must come back intact");
                        }
                    }
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let got = sut.remove(k);
                    let expected = model.remove(k);
                    prop_assert_eq!(got, expected);
                    prop_assert!(!sut.contains_key(k), "removed key must be absent");
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Contains(k) => {
                    prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    match sut.get_mut(k) {
                        Some(v) => {
                            *v = v.wrapping_add(d);
                            let m = model.get_mut(k).expect("model has key");
                            *m = m.wrapping_add(d);
                        }
                        None => prop_assert!(!model.contains_key(k)),
                    }
                }
                OpI::Iterate => {
                    let mut seen: HashMap<String, i32> = HashMap::new();
                    for (k, v) in sut.iter() {
                        let prev = seen.insert(k.to_string(), *v);
                        prop_assert!(prev.is_none(), "binding visited more than once");
                    }
                    prop_assert_eq!(&seen, &model);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(BUCKET_COUNTS.contains(&sut.bucket_count()));
        }
    }
}
