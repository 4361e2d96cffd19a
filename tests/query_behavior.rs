//! Integration tests for filtering, sorting, and search over a live store.

use chrono::{Duration, Utc};
use doable::todo::{Category, Filter, Memory, Priority, Query, SortKey, TodoStore};

fn store() -> TodoStore {
    TodoStore::open(Box::new(Memory::default())).unwrap()
}

fn texts(todos: &[&doable::todo::Todo]) -> Vec<String> {
    todos.iter().map(|t| t.text.clone()).collect()
}

#[test]
fn test_completed_filter_returns_exactly_the_completed_one() {
    let mut s = store();
    let id = s
        .add("done already", None, Priority::default(), Category::default())
        .unwrap()
        .id;
    s.add("still pending", None, Priority::default(), Category::default())
        .unwrap();
    s.add("also pending", None, Priority::default(), Category::default())
        .unwrap();
    s.toggle(id).unwrap();

    let got = s.query(&Query {
        filter: Filter::Completed,
        sort: SortKey::Created,
        search: String::new(),
    });
    assert_eq!(texts(&got), vec!["done already"]);
}

#[test]
fn test_priority_sort_orders_high_medium_low() {
    let mut s = store();
    s.add("take out trash", None, Priority::Low, Category::default())
        .unwrap();
    s.add("file taxes", None, Priority::High, Category::default())
        .unwrap();
    s.add("water plants", None, Priority::Medium, Category::default())
        .unwrap();

    let got = s.query(&Query {
        sort: SortKey::Priority,
        ..Default::default()
    });
    assert_eq!(texts(&got), vec!["file taxes", "water plants", "take out trash"]);
}

#[test]
fn test_category_filter_with_search() {
    let mut s = store();
    s.add("buy milk", None, Priority::default(), Category::Shopping)
        .unwrap();
    s.add("buy standing desk", None, Priority::default(), Category::Work)
        .unwrap();
    s.add("clean desk", None, Priority::default(), Category::Work)
        .unwrap();

    let got = s.query(&Query {
        filter: Filter::Category(Category::Work),
        sort: SortKey::Unsorted,
        search: "DESK".to_string(),
    });
    assert_eq!(texts(&got), vec!["buy standing desk", "clean desk"]);
}

#[test]
fn test_due_sort_keeps_undated_in_place() {
    let today = Utc::now().date_naive();
    let mut s = store();
    s.add("no date", None, Priority::default(), Category::default())
        .unwrap();
    s.add("due long ago", Some(today - Duration::days(30)), Priority::default(), Category::default())
        .unwrap();
    s.add("due tomorrow", Some(today + Duration::days(1)), Priority::default(), Category::default())
        .unwrap();

    let got = s.query(&Query {
        sort: SortKey::Due,
        ..Default::default()
    });
    let got = texts(&got);

    // Dated records are newest-first relative to each other.
    let long_ago = got.iter().position(|t| t == "due long ago").unwrap();
    let tomorrow = got.iter().position(|t| t == "due tomorrow").unwrap();
    assert!(tomorrow < long_ago);
    // The undated record never compares against anything, so the stable
    // sort leaves it where insertion put it: first.
    assert_eq!(got[0], "no date");
}

#[test]
fn test_query_does_not_mutate_or_consume_history() {
    let mut s = store();
    s.add("only", None, Priority::default(), Category::default())
        .unwrap();
    let before = s.todos().to_vec();

    let _ = s.query(&Query {
        filter: Filter::Pending,
        sort: SortKey::Priority,
        search: "only".to_string(),
    });
    let _ = s.stats();

    assert_eq!(s.todos(), before.as_slice());
    assert!(s.can_undo());
    // Exactly the one snapshot from add, none from querying.
    assert!(s.undo());
    assert!(!s.can_undo());
}
