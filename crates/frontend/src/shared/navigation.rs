//! Logical routes of the dashboard and the navigation seam used by view models.

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    List,
    Create,
    Details(String),
    Edit(String),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::List => "/".to_string(),
            AppRoute::Create => "/create".to_string(),
            AppRoute::Details(id) => format!("/details/{}", urlencoding::encode(id)),
            AppRoute::Edit(id) => format!("/edit/{}", urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Requests a transition to another page. Rendering belongs to the router.
pub trait Navigator {
    fn navigate(&self, route: &AppRoute);
}

/// `Navigator` backed by `leptos_router`.
///
/// Must be created inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: &AppRoute) {
        log::info!("navigate to {}", route);
        (self.navigate)(&route.path(), NavigateOptions::default());
    }
}
