//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_employee--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: the id copied from the DOM
//! inspector leads to `domain/a001_employee/`.

/// Table of records with a filter.
pub const PAGE_CAT_LIST: &str = "list";

/// Details card or create/edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_employee--list"));
        assert!(is_valid_page_id("a001_employee--detail"));
        assert!(!is_valid_page_id("a001_employee"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_employee--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(is_known_category(PAGE_CAT_DETAIL));
        assert!(!is_known_category("dashboard"));
    }
}
