//! PageFrame is the root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root element:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_employee--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Maps a page category to its BEM class list.
pub fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");
    if !is_known_category(category) {
        log::warn!("PageFrame {}: unknown category {}", page_id, category);
    }

    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
