use radix_strset::{InsertOutcome, RadixTrieSet, SetError, StringSet};

#[test]
fn test_mixed_insertion_order() {
    let mut set = RadixTrieSet::new();
    for key in ["team", "tea", "boat", "bo"] {
        assert_eq!(set.insert(key), Ok(InsertOutcome::Inserted));
    }

    assert_eq!(set.len(), 4);
    assert!(!set.contains("te"));
    assert!(set.contains("tea"));
    assert!(set.contains("team"));
    assert!(set.contains("boat"));
    assert!(set.contains("bo"));
    set.verify().unwrap();
}

#[test]
fn test_split_on_longer_key() {
    let mut set = RadixTrieSet::new();
    set.insert("tea").unwrap();
    set.insert("team").unwrap();

    assert!(set.contains("tea"));
    assert!(set.contains("team"));
    assert!(!set.contains("te"));
    set.verify().unwrap();
}

#[test]
fn test_prefixes_of_in_length_order() {
    let mut set = RadixTrieSet::new();
    set.insert("app").unwrap();
    set.insert("apple").unwrap();

    assert_eq!(set.prefixes_of("apple").unwrap(), vec!["app", "apple"]);
}

#[test]
fn test_prefixes_of_excludes_longer_keys() {
    let mut set = RadixTrieSet::new();
    set.insert("apple").unwrap();

    assert!(set.prefixes_of("app").unwrap().is_empty());
}

#[test]
fn test_empty_set() {
    let set = RadixTrieSet::new();

    assert!(!set.contains("x"));
    assert!(set.prefixes_of("x").unwrap().is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.iter().count(), 0);
    assert_eq!(set.longest_prefix_of("x"), None);
    set.verify().unwrap();
}

#[test]
fn test_reinsert_is_noop() {
    let mut set = RadixTrieSet::new();
    assert_eq!(set.insert("tea"), Ok(InsertOutcome::Inserted));
    let before = set.stats();

    assert_eq!(set.insert("tea"), Ok(InsertOutcome::AlreadyPresent));
    assert_eq!(set.len(), 1);
    assert_eq!(set.stats(), before);
}

#[test]
fn test_empty_arguments_rejected() {
    let mut set = RadixTrieSet::try_from_keys(["a"]).unwrap();

    assert_eq!(set.insert(""), Err(SetError::InvalidArgument("key")));
    assert_eq!(set.prefixes_of(""), Err(SetError::InvalidArgument("query")));
    assert_eq!(set.keys_with_prefix(""), Err(SetError::InvalidArgument("prefix")));
    assert!(!set.contains(""));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_prefixes_stop_at_exact_match() {
    let set = RadixTrieSet::try_from_keys(["a", "ab", "abc", "abcd"]).unwrap();

    assert_eq!(set.prefixes_of("abc").unwrap(), vec!["a", "ab", "abc"]);
    assert_eq!(set.prefixes_of("abx").unwrap(), vec!["a", "ab"]);
    assert_eq!(set.prefixes_of("abcde").unwrap(), vec!["a", "ab", "abc", "abcd"]);
    assert_eq!(set.prefixes_of("b").unwrap(), Vec::<&str>::new());
}

#[test]
fn test_prefixes_through_branching_nodes() {
    // "ro" and "rom" end up as keyless branching nodes.
    let set = RadixTrieSet::try_from_keys(["romane", "romanus", "romulus", "rubens", "r"]).unwrap();

    assert_eq!(set.prefixes_of("romanesque").unwrap(), vec!["r", "romane"]);
    assert_eq!(set.prefixes_of("roman").unwrap(), vec!["r"]);
    assert_eq!(set.longest_prefix_of("romanusx"), Some("romanus"));
    assert_eq!(set.longest_prefix_of("xyz"), None);
}

#[test]
fn test_prefix_count_bounded_by_query_length() {
    let keys: Vec<String> = (1..=20).map(|n| "z".repeat(n)).collect();
    let set = RadixTrieSet::try_from_keys(&keys).unwrap();

    let query = "z".repeat(30);
    let found = set.prefixes_of(&query).unwrap();
    assert_eq!(found.len(), 20);
    assert!(found.len() <= query.chars().count());
    assert!(found.windows(2).all(|w| w[0].len() < w[1].len()));
}

#[test]
fn test_keys_with_prefix() {
    let set = RadixTrieSet::try_from_keys(["tea", "team", "ten", "to", "boat"]).unwrap();

    let mut keys = set.keys_with_prefix("te").unwrap();
    keys.sort_unstable();
    assert_eq!(keys, vec!["tea", "team", "ten"]);

    // The prefix may end inside an edge label.
    let mut keys = set.keys_with_prefix("b").unwrap();
    keys.sort_unstable();
    assert_eq!(keys, vec!["boat"]);

    let mut keys = set.keys_with_prefix("tea").unwrap();
    keys.sort_unstable();
    assert_eq!(keys, vec!["tea", "team"]);

    assert!(set.keys_with_prefix("tex").unwrap().is_empty());
    assert!(set.keys_with_prefix("teams").unwrap().is_empty());
}

#[test]
fn test_try_extend_counts_new_keys() {
    let mut set = RadixTrieSet::new();
    assert_eq!(set.try_extend(["a", "b", "a", "c"]), Ok(3));
    assert_eq!(set.try_extend(["c", "d"]), Ok(1));
    assert_eq!(set.len(), 4);

    assert_eq!(set.try_extend(["e", "", "f"]), Err(SetError::InvalidArgument("key")));
    assert!(set.contains("e"));
    assert!(!set.contains("f"));
}

#[test]
fn test_equality_ignores_insertion_order() {
    let a = RadixTrieSet::try_from_keys(["team", "tea", "boat", "bo"]).unwrap();
    let b = RadixTrieSet::try_from_keys(["bo", "boat", "tea", "team"]).unwrap();
    let c = RadixTrieSet::try_from_keys(["bo", "boat", "tea"]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_unicode_keys() {
    let set = RadixTrieSet::try_from_keys(["été", "étage", "é", "zürich", "zü"]).unwrap();
    set.verify().unwrap();

    assert!(set.contains("été"));
    assert!(!set.contains("ét"));
    assert_eq!(set.prefixes_of("étés").unwrap(), vec!["é", "été"]);
    assert_eq!(set.prefixes_of("zürichsee").unwrap(), vec!["zü", "zürich"]);
}

#[test]
fn test_drop_very_long_key() {
    let mut set = RadixTrieSet::new();
    let key = "k".repeat(100_000);
    set.insert(&key).unwrap();
    assert!(set.contains(&key));
    drop(set);
}

#[test]
fn test_drop_deep_nested_prefixes() {
    let mut set = RadixTrieSet::new();
    let mut key = String::new();
    for _ in 0..2_000 {
        key.push('n');
        set.insert(&key).unwrap();
    }
    assert_eq!(set.len(), 2_000);
    assert_eq!(set.stats().max_depth, 2_000);
    drop(set);
}

#[test]
fn test_usable_through_trait_object() {
    let mut backends: Vec<Box<dyn StringSet>> = vec![
        Box::new(RadixTrieSet::new()),
        Box::new(std::collections::BTreeSet::<String>::new()),
    ];

    for set in &mut backends {
        set.insert("tea").unwrap();
        set.insert("team").unwrap();
    }
    for set in &backends {
        assert_eq!(set.len(), 2);
        assert_eq!(set.prefixes_of("teams").unwrap(), vec!["tea", "team"]);
    }
}
