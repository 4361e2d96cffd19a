//! Pure query helpers for the todo collection.
//!
//! Filtering, sorting, and statistics never mutate the collection or its
//! history; they produce a derived view over borrowed records.

use serde::Serialize;

use super::model::{Category, Todo};

/// Which records a query keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
    Category(Category),
}

impl Filter {
    /// Parse a filter from text: `all`, `pending`, `completed`, or a
    /// category name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" | "done" => Some(Self::Completed),
            other => Category::parse(other).map(Self::Category),
        }
    }

    fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !todo.completed,
            Self::Completed => todo.completed,
            Self::Category(c) => todo.category == *c,
        }
    }
}

/// How the filtered records are ordered. Every sort is stable: ties keep
/// their insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Insertion order (identity sort)
    #[default]
    Unsorted,
    /// High, then medium, then low
    Priority,
    /// Most recent due date first; records without a due date keep their
    /// relative position
    Due,
    /// Most recently created first
    Created,
}

impl SortKey {
    /// Parse a sort key from text. Unrecognized keys mean "no reordering",
    /// so callers typically `unwrap_or_default()`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "unsorted" => Some(Self::Unsorted),
            "priority" => Some(Self::Priority),
            "due" | "date" => Some(Self::Due),
            "created" => Some(Self::Created),
            _ => None,
        }
    }
}

/// A filter + sort + search triple. This is caller-held view state, not
/// part of the store's persisted model.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: Filter,
    pub sort: SortKey,
    pub search: String,
}

impl Query {
    /// Run the query over a collection, borrowing the matching records in
    /// their final order. Search is case-insensitive containment of the
    /// search text as given; whitespace in it is significant.
    pub fn run<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        let search = self.search.to_lowercase();

        let mut out: Vec<&Todo> = todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .filter(|t| search.is_empty() || t.text.to_lowercase().contains(&search))
            .collect();

        match self.sort {
            SortKey::Unsorted => {}
            SortKey::Priority => out.sort_by(|a, b| b.priority.cmp(&a.priority)),
            SortKey::Due => sort_dated_subsequence(&mut out),
            SortKey::Created => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        out
    }
}

/// Order dated records newest-due-first while every undated record keeps
/// its exact position. A record without a due date compares equal to
/// everything, which is not a total order, so this sorts the dated
/// subsequence in place rather than handing `sort_by` an inconsistent
/// comparator.
fn sort_dated_subsequence(out: &mut [&Todo]) {
    let positions: Vec<usize> = out
        .iter()
        .enumerate()
        .filter(|(_, t)| t.due.is_some())
        .map(|(i, _)| i)
        .collect();

    let mut dated: Vec<&Todo> = positions.iter().map(|&i| out[i]).collect();
    dated.sort_by(|a, b| b.due.cmp(&a.due));

    for (&i, t) in positions.iter().zip(dated) {
        out[i] = t;
    }
}

/// Derived collection statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    /// Completed share of the collection, rounded to whole percent.
    /// Zero for an empty collection.
    pub percent: u32,
    pub overdue: usize,
}

impl Stats {
    pub fn compute(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        let overdue = todos.iter().filter(|t| t.is_overdue()).count();

        Self {
            total,
            completed,
            percent,
            overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::model::{Priority, TodoId};
    use chrono::{Duration, Utc};

    fn todo(id: u64, text: &str) -> Todo {
        Todo::new(
            TodoId(id),
            text,
            None,
            Priority::default(),
            Category::default(),
        )
    }

    fn texts(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("all"), Some(Filter::All));
        assert_eq!(Filter::parse("Pending"), Some(Filter::Pending));
        assert_eq!(Filter::parse("done"), Some(Filter::Completed));
        assert_eq!(Filter::parse("work"), Some(Filter::Category(Category::Work)));
        assert_eq!(Filter::parse("bogus"), None);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("priority"), Some(SortKey::Priority));
        assert_eq!(SortKey::parse("date"), Some(SortKey::Due));
        assert_eq!(SortKey::parse("created"), Some(SortKey::Created));
        assert_eq!(SortKey::parse("alphabetical"), None);
    }

    #[test]
    fn test_empty_search_passes_everything() {
        let todos = vec![todo(1, "alpha"), todo(2, "beta")];
        let q = Query::default();
        assert_eq!(q.run(&todos).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let todos = vec![todo(1, "Buy Milk"), todo(2, "call mom")];
        let q = Query {
            search: "MILK".to_string(),
            ..Default::default()
        };
        assert_eq!(texts(&q.run(&todos)), vec!["Buy Milk"]);
    }

    #[test]
    fn test_search_whitespace_is_significant() {
        let todos = vec![todo(1, "buy milk"), todo(2, "milk")];
        let q = Query {
            search: " milk".to_string(),
            ..Default::default()
        };
        // " milk" only occurs in "buy milk"; the search text is matched
        // verbatim, not trimmed first.
        assert_eq!(texts(&q.run(&todos)), vec!["buy milk"]);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let mut todos = vec![todo(1, "buy milk"), todo(2, "buy stamps")];
        todos[0].completed = true;

        let q = Query {
            filter: Filter::Completed,
            search: "buy".to_string(),
            ..Default::default()
        };
        assert_eq!(texts(&q.run(&todos)), vec!["buy milk"]);
    }

    #[test]
    fn test_category_filter() {
        let mut todos = vec![todo(1, "standup"), todo(2, "groceries")];
        todos[0].category = Category::Work;
        todos[1].category = Category::Shopping;

        let q = Query {
            filter: Filter::Category(Category::Work),
            ..Default::default()
        };
        assert_eq!(texts(&q.run(&todos)), vec!["standup"]);
    }

    #[test]
    fn test_priority_sort_high_first() {
        let mut todos = vec![todo(1, "low"), todo(2, "high"), todo(3, "medium")];
        todos[0].priority = Priority::Low;
        todos[1].priority = Priority::High;
        todos[2].priority = Priority::Medium;

        let q = Query {
            sort: SortKey::Priority,
            ..Default::default()
        };
        assert_eq!(texts(&q.run(&todos)), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let mut todos = vec![todo(1, "first"), todo(2, "second"), todo(3, "third")];
        for t in &mut todos {
            t.priority = Priority::Medium;
        }

        let q = Query {
            sort: SortKey::Priority,
            ..Default::default()
        };
        assert_eq!(texts(&q.run(&todos)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_due_sort_descending_with_gaps() {
        let today = Utc::now().date_naive();
        let mut todos = vec![
            todo(1, "old"),
            todo(2, "undated"),
            todo(3, "new"),
            todo(4, "also undated"),
        ];
        todos[0].due = Some(today - Duration::days(5));
        todos[2].due = Some(today);

        let q = Query {
            sort: SortKey::Due,
            ..Default::default()
        };
        // Dated records sort newest-first; undated records never move
        // relative to their neighbors.
        let got = texts(&q.run(&todos));
        let old = got.iter().position(|t| t == "old").unwrap();
        let new = got.iter().position(|t| t == "new").unwrap();
        assert!(new < old);
        let undated = got.iter().position(|t| t == "undated").unwrap();
        let also = got.iter().position(|t| t == "also undated").unwrap();
        assert!(undated < also);
    }

    #[test]
    fn test_created_sort_newest_first() {
        let mut todos = vec![todo(1, "first"), todo(2, "second")];
        todos[1].created_at = todos[0].created_at + Duration::seconds(5);

        let q = Query {
            sort: SortKey::Created,
            ..Default::default()
        };
        assert_eq!(texts(&q.run(&todos)), vec!["second", "first"]);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(Stats::compute(&[]), Stats::default());
    }

    #[test]
    fn test_stats_counts_and_percent() {
        let mut todos = vec![todo(1, "a"), todo(2, "b"), todo(3, "c")];
        todos[0].completed = true;
        todos[1].due = Some(Utc::now().date_naive() - Duration::days(1));

        let stats = Stats::compute(&todos);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.percent, 33);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_stats_percent_rounds() {
        let mut todos = vec![todo(1, "a"), todo(2, "b"), todo(3, "c")];
        todos[0].completed = true;
        todos[1].completed = true;

        // 2/3 rounds to 67, not 66.
        assert_eq!(Stats::compute(&todos).percent, 67);
    }
}
