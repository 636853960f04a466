use super::*;
use crate::test_support::{capture_logs, cast_label, LabelCast};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn index(types: &[&str]) -> GlobalCastIndex {
    let mut index = GlobalCastIndex::new();
    for &ty in types {
        index.insert(TypeName::new(ty), Arc::new(LabelCast(TypeName::new(ty).to_string())));
    }
    index
}

fn found(index: &GlobalCastIndex, acceptance: &TypeAcceptance) -> Option<String> {
    index.find(acceptance).and_then(|cast| cast_label(cast.as_ref()))
}

fn positive_int() -> TypeAcceptance {
    TypeAcceptance::new()
        .with("App\\PositiveInt", ["App\\Integer", "Number"])
        .with("App\\Integer", ["Number"])
}

#[test]
fn nearer_ancestor_beats_farther_ancestor() {
    let index = index(&["App\\Integer", "Number"]);
    assert_eq!(found(&index, &positive_int()).as_deref(), Some("App\\Integer"));
}

#[test]
fn declared_type_beats_its_ancestors() {
    let index = index(&["Number", "App\\Integer", "App\\PositiveInt"]);
    assert_eq!(found(&index, &positive_int()).as_deref(), Some("App\\PositiveInt"));
}

#[test]
fn earlier_accepted_type_wins_over_later_one() {
    // Money's own chain is exhausted before Date is considered.
    let acceptance = TypeAcceptance::new()
        .with("App\\Money", ["JsonSerializable"])
        .with("App\\Date", Vec::<&str>::new());
    let index = index(&["App\\Date", "JsonSerializable"]);
    assert_eq!(found(&index, &acceptance).as_deref(), Some("JsonSerializable"));
}

#[test]
fn registration_with_leading_separator_matches() {
    let mut index = GlobalCastIndex::new();
    index.insert(TypeName::new("\\App\\Money"), Arc::new(LabelCast("money".into())));

    let acceptance = TypeAcceptance::single("App\\Money");
    assert_eq!(found(&index, &acceptance).as_deref(), Some("money"));
}

#[test]
fn no_candidate_registered_is_none() {
    let index = index(&["App\\Money"]);
    assert!(index.find(&positive_int()).is_none());
    assert!(index.find(&TypeAcceptance::new()).is_none());
}

#[test]
fn hits_and_misses_are_both_logged() {
    let index = index(&["App\\Integer"]);

    let logs = capture_logs(|| {
        assert!(index.find(&positive_int()).is_some());
        assert!(index.find(&TypeAcceptance::single("string")).is_none());
    });
    assert!(logs.contains("global cast found"), "{logs}");
    assert!(logs.contains("no global cast"), "{logs}");
}

#[test]
fn reinsert_replaces() {
    let mut index = index(&["App\\Money"]);
    index.insert(TypeName::new("App\\Money"), Arc::new(LabelCast("override".into())));
    assert_eq!(index.len(), 1);
    assert_eq!(
        found(&index, &TypeAcceptance::single("App\\Money")).as_deref(),
        Some("override")
    );
}

#[test]
fn debug_lists_sorted_types() {
    let index = index(&["b", "a"]);
    assert_eq!(format!("{index:?}"), "GlobalCastIndex { types: [\"a\", \"b\"] }");
}

proptest! {
    #[test]
    fn result_is_first_registered_candidate(
        chain in proptest::collection::vec("[a-e]", 1..8),
        registered in proptest::collection::hash_set("[a-e]", 0..5),
    ) {
        let acceptance = TypeAcceptance::new()
            .with(chain[0].as_str(), chain[1..].iter().map(String::as_str));
        let registered: Vec<&str> = registered.iter().map(String::as_str).collect();
        let index = index(&registered);

        let expected = acceptance
            .candidates()
            .find(|ty| registered.contains(&ty.as_str()))
            .map(ToString::to_string);
        prop_assert_eq!(found(&index, &acceptance), expected);
    }
}
