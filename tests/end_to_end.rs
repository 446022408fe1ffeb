//! Whole-stack flow through the facade crate
//!
//! Loads a small documentation corpus the way a host would (serialized
//! entry records), configures categories and lexicon tables, and drives
//! searches through both the engine and a session.

use docfind::{
    Catalog, CategoryInfo, CategoryRegistry, Entry, Lexicon, Notice, SearchConfig, SearchEngine,
    SearchSession, Submission,
};
use std::sync::Arc;

const CORPUS: &str = r#"[
    {
        "title": "Finder",
        "text": "Searches a haystack for occurrences of a needle pattern.",
        "location": "class_Finder.html",
        "akas": ["Searcher"],
        "subentries": [
            {"title": "find", "id": "fn-find", "kind": "memfn"},
            {"title": "findBegin", "id": "fn-find-begin", "kind": "memfn"}
        ],
        "category": "class"
    },
    {
        "title": "find",
        "text": "Advances a finder to the next occurrence.",
        "location": "fn_find.html",
        "category": "interface_function"
    },
    {
        "title": "Index",
        "text": "Substring index over a text collection.",
        "location": "class_Index.html",
        "category": "class"
    },
    {
        "title": "needle",
        "text": "Returns the needle of a pattern object.",
        "location": "fn_needle.html",
        "category": "interface_function"
    },
    {
        "title": "scoreValue",
        "text": "The score of an alignment cell.",
        "location": "var_scoreValue.html",
        "category": "global_variable"
    }
]"#;

fn corpus() -> Catalog {
    let entries: Vec<Entry> = serde_json::from_str(CORPUS).expect("corpus must parse");
    Catalog::new(entries).expect("corpus must validate")
}

fn config() -> SearchConfig {
    SearchConfig::new()
        .with_categories(
            CategoryRegistry::new()
                .register("class", CategoryInfo::new("Class"))
                .register("function", CategoryInfo::new("Function"))
                .register(
                    "interface_function",
                    CategoryInfo::new("Interface Function").belongs_to("function"),
                )
                .register("variable", CategoryInfo::new("Variable"))
                .with_group("global_variable", "variable"),
        )
        .with_lexicon(Lexicon::default().with_stems(vec![("searching".into(), "search".into())]))
}

fn engine() -> SearchEngine {
    SearchEngine::new(Arc::new(corpus()), config()).unwrap()
}

const ALL: &[&str] = &["class", "function", "variable"];

#[test]
fn test_loads_serialized_corpus() {
    let catalog = corpus();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.get(0).unwrap().subentries.len(), 2);
}

#[test]
fn test_search_groups_and_ranks() {
    let response = engine().search("find", ALL);

    // The exact "find" title is the best match overall, so the interface
    // function group leads; the Finder class follows.
    assert_eq!(response.groups[0].category, "interface_function");
    assert_eq!(response.groups[0].matches[0].title, "find");
    assert_eq!(response.groups[1].category, "class");
    assert_eq!(response.groups[1].matches[0].title, "Finder");

    // The Finder match carries its matched sub-entries.
    let finder = &response.groups[1].matches[0];
    assert_eq!(finder.sub_matches.len(), 2);
}

#[test]
fn test_stem_expansion_reaches_aliases() {
    // "searching" alone matches nothing; its stem "search" hits the
    // Searcher alias and the Finder body text.
    let response = engine().search("searching", ALL);
    let titles: Vec<_> = response.iter_matches().map(|m| m.title.as_str()).collect();
    assert!(titles.contains(&"Finder"));
}

#[test]
fn test_grouping_remap_folds_categories() {
    let response = engine().search("score", ALL);
    assert_eq!(response.groups[0].category, "variable");
}

#[test]
fn test_parent_category_enables_members() {
    let response = engine().search("needle", &["function"]);
    let titles: Vec<_> = response.iter_matches().map(|m| m.title.as_str()).collect();
    assert!(titles.contains(&"needle"));
    assert!(!titles.contains(&"Finder"));
}

#[test]
fn test_session_drives_display_updates() {
    let mut session = SearchSession::new(engine());

    let first = match session.submit("find", ALL) {
        Submission::Fresh(r) => r,
        Submission::Unchanged => panic!("first submission must be fresh"),
    };
    assert!(session.is_current(first.invocation));

    // Typing on: the longer query supersedes the first result.
    let second = match session.submit("findbegin", ALL) {
        Submission::Fresh(r) => r,
        Submission::Unchanged => panic!("changed query must be fresh"),
    };
    assert!(!session.is_current(first.invocation));
    assert!(session.is_current(second.invocation));

    // Re-submitting the same query leaves the display untouched.
    assert_eq!(session.submit("findbegin", ALL), Submission::Unchanged);

    // Too-short input re-reports its notice instead of stale results.
    let third = match session.submit("f", ALL) {
        Submission::Fresh(r) => r,
        Submission::Unchanged => panic!("short query must be fresh"),
    };
    assert_eq!(
        third.response.notice,
        Some(Notice::QueryTooShort { minimum: 3 })
    );
}
