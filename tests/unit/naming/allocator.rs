use super::*;

fn is_base36(s: &str) -> bool {
    s.bytes().all(|b| SUFFIX_ALPHABET.contains(&b))
}

#[test]
fn allocated_name_has_prefix_and_fixed_suffix() {
    let mut reg = NameRegistry::new();
    let name = allocate_name(&mut reg, "Gradient_Fill_");
    let suffix = name.strip_prefix("Gradient_Fill_").unwrap();
    assert_eq!(suffix.len(), DEFAULT_SUFFIX_LEN);
    assert!(is_base36(suffix));
    assert!(reg.contains(&name));
    assert_eq!(reg.len(), 1);
}

#[test]
fn custom_suffix_len_is_honored() {
    let alloc = NameAllocator { suffix_len: 4 };
    let mut reg = NameRegistry::new();
    let name = alloc.allocate(&mut reg, "x");
    assert_eq!(name.len(), 5);
}

#[test]
fn many_allocations_never_repeat() {
    let mut reg = NameRegistry::new();
    let mut seen = HashSet::new();
    for _ in 0..2000 {
        assert!(seen.insert(allocate_name(&mut reg, "p_")));
    }
    assert_eq!(reg.len(), 2000);
}

#[test]
fn tiny_space_still_yields_unique_names() {
    // One-character suffixes: 36 possible names, so collisions are frequent.
    let alloc = NameAllocator { suffix_len: 1 };
    let mut reg = NameRegistry::new();
    let mut seen = HashSet::new();
    for _ in 0..36 {
        assert!(seen.insert(alloc.allocate(&mut reg, "n")));
    }
    assert_eq!(reg.len(), 36);
}

#[test]
fn claim_retries_past_taken_candidates() {
    let mut reg = NameRegistry::new();
    assert_eq!(claim(&mut reg, "a_", || "same".to_string()), "a_same");

    let mut script = vec!["other", "same", "same"];
    let name = claim(&mut reg, "a_", || script.pop().unwrap().to_string());
    assert_eq!(name, "a_other");
    assert!(script.is_empty());
    assert_eq!(reg.len(), 2);
}

#[test]
fn same_suffix_under_different_prefix_is_distinct() {
    let mut reg = NameRegistry::new();
    let a = claim(&mut reg, "Gradient_Fill_", || "abc".to_string());
    let b = claim(&mut reg, "Gradient_Stroke_", || "abc".to_string());
    assert_ne!(a, b);
}

#[test]
fn seeded_rng_is_usable() {
    use rand::SeedableRng as _;
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut reg = NameRegistry::new();
    let a = NameAllocator::default().allocate_with(&mut rng, &mut reg, "s_");
    let b = NameAllocator::default().allocate_with(&mut rng, &mut reg, "s_");
    assert_ne!(a, b);
    assert!(is_base36(a.strip_prefix("s_").unwrap()));
}
