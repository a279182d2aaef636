use chained_symtable::{InsertError, SymTable};
use std::collections::HashSet;

#[test]
fn put_replace_remove_scenario() {
    let mut t: SymTable<i32> = SymTable::new();

    assert!(t.put("a", 1).is_ok());
    match t.put("a", 2) {
        Err(InsertError::DuplicateKey(2)) => {}
        other => panic!("expected duplicate rejection, got {:?}", other),
    }
    assert_eq!(t.get("a"), Some(&1));

    assert_eq!(t.replace("a", 2), Ok(1));
    assert_eq!(t.get("a"), Some(&2));

    assert_eq!(t.remove("a"), Some(2));
    assert_eq!(t.get("a"), None);
    assert_eq!(t.len(), 0);
}

#[test]
fn size_tracks_distinct_keys() {
    let mut t: SymTable<usize> = SymTable::new();
    for i in 0..300 {
        t.put(&format!("key{i}"), i).unwrap();
    }
    assert_eq!(t.len(), 300);

    // Re-putting every key changes nothing.
    for i in 0..300 {
        assert!(t.put(&format!("key{i}"), i + 1).is_err());
    }
    assert_eq!(t.len(), 300);
}

#[test]
fn grows_to_second_stage_at_510_keys() {
    let mut t: SymTable<usize> = SymTable::new();
    assert_eq!(t.bucket_count(), 509);

    for i in 0..510 {
        t.put(&format!("key{i}"), i).unwrap();
    }

    assert_eq!(t.bucket_count(), 1021);
    assert_eq!(t.len(), 510);
    for i in 0..510 {
        assert_eq!(t.get(&format!("key{i}")), Some(&i));
    }
}

#[test]
fn growth_crosses_every_stage_and_caps() {
    let mut t: SymTable<usize> = SymTable::new();

    // Enough bindings to pass the final threshold (65521 - 1) and keep
    // going; the bucket count must cap while the table stays correct.
    let total = 70_000;
    for i in 0..total {
        t.put(&format!("key{i}"), i).unwrap();
    }

    assert_eq!(t.bucket_count(), 65521);
    assert_eq!(t.len(), total);
    for i in 0..total {
        assert_eq!(t.get(&format!("key{i}")), Some(&i));
    }

    // Past the cap the table keeps accepting bindings without growing.
    t.put("past-the-cap", usize::MAX).unwrap();
    assert_eq!(t.bucket_count(), 65521);
    assert_eq!(t.get("past-the-cap"), Some(&usize::MAX));
}

#[test]
fn bindings_survive_growth_with_original_values() {
    let mut t: SymTable<String> = SymTable::new();
    for i in 0..2000 {
        t.put(&format!("key{i}"), format!("value{i}")).unwrap();
    }
    // Two growth events have happened (509 -> 1021 -> 2039).
    assert_eq!(t.bucket_count(), 2039);
    for i in 0..2000 {
        assert_eq!(
            t.get(&format!("key{i}")).map(String::as_str),
            Some(format!("value{i}").as_str())
        );
    }
}

#[test]
fn enumeration_visits_each_binding_exactly_once() {
    let mut t: SymTable<usize> = SymTable::new();
    let n = 1000;
    for i in 0..n {
        t.put(&format!("key{i}"), i).unwrap();
    }

    let mut calls = 0usize;
    let mut seen: HashSet<String> = HashSet::new();
    t.for_each(&mut (&mut calls, &mut seen), |k, &v, ctx| {
        *ctx.0 += 1;
        assert!(ctx.1.insert(k.to_string()), "binding visited twice: {k}");
        assert_eq!(k, format!("key{v}"));
    });
    assert_eq!(calls, n);
    assert_eq!(seen.len(), n);
}

#[test]
fn removals_interleaved_with_growth() {
    let mut t: SymTable<usize> = SymTable::new();
    for i in 0..1500 {
        t.put(&format!("key{i}"), i).unwrap();
    }
    for i in (0..1500).step_by(2) {
        assert_eq!(t.remove(&format!("key{i}")), Some(i));
    }
    assert_eq!(t.len(), 750);
    for i in 0..1500 {
        let got = t.get(&format!("key{i}"));
        if i % 2 == 0 {
            assert_eq!(got, None);
        } else {
            assert_eq!(got, Some(&i));
        }
    }
}
