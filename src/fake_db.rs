use crate::models::FakeItem;

/// Read-only item names served by `GET /items/`.
pub static FAKE_ITEMS_DB: [&str; 3] = ["Foo", "Bar", "Baz"];

/// Returns the items in `[skip, skip + limit)` with sequence-slice semantics:
/// negative bounds count from the end and out-of-range bounds clamp.
pub fn page(skip: i64, limit: i64) -> Vec<FakeItem> {
    let (start, end) = window(FAKE_ITEMS_DB.len(), skip, skip.saturating_add(limit));
    FAKE_ITEMS_DB[start..end]
        .iter()
        .map(|name| FakeItem {
            item_name: name.to_string(),
        })
        .collect()
}

fn window(len: usize, start: i64, end: i64) -> (usize, usize) {
    let start = resolve(len, start);
    let end = resolve(len, end);
    (start, end.max(start))
}

fn resolve(len: usize, bound: i64) -> usize {
    let len = len as i64;
    let bound = if bound < 0 { bound.saturating_add(len) } else { bound };
    bound.clamp(0, len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: Vec<FakeItem>) -> Vec<String> {
        items.into_iter().map(|item| item.item_name).collect()
    }

    #[test]
    fn test_default_page_returns_everything() {
        assert_eq!(names(page(0, 10)), vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn test_skip_and_limit() {
        assert_eq!(names(page(1, 1)), vec!["Bar"]);
        assert_eq!(names(page(2, 5)), vec!["Baz"]);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert!(page(5, 10).is_empty());
        assert!(page(0, 0).is_empty());
    }

    #[test]
    fn test_negative_bounds_count_from_end() {
        assert_eq!(names(page(-1, 10)), vec!["Baz"]);
        assert_eq!(names(page(0, -1)), vec!["Foo", "Bar"]);
        assert_eq!(names(page(-10, 11)), vec!["Foo"]);
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        assert_eq!(names(page(i64::MIN, i64::MAX)), vec!["Foo", "Bar"]);
        assert!(page(i64::MAX, i64::MAX).is_empty());
    }
}
