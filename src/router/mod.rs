//! Route table
//!
//! Maps URL paths to view components. Views other than the layout shell
//! are lazy: the table only names the module to load on first navigation.
//! Rendering and history handling live in the host page.

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// Redirect hops allowed before a resolution is declared a loop
pub const MAX_REDIRECTS: usize = 8;

/// Routes of the toolbox application
pub static APP_ROUTES: Lazy<RouteTable> = Lazy::new(RouteTable::default);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    NotFound(String),

    #[error("Too many redirects while resolving '{0}'")]
    RedirectLoop(String),
}

/// How a route's view is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "module", rename_all = "camelCase")]
pub enum ViewComponent {
    /// Bundled with the application shell
    Eager(&'static str),
    /// Loaded on first navigation
    Lazy(&'static str),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    /// Human-readable title (menu and tab label)
    pub title: &'static str,
    pub component: ViewComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: &'static str, name: &'static str, component: ViewComponent) -> Self {
        Self {
            path,
            name,
            title: name,
            component,
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub fn redirect(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }

    pub fn children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}

/// One level of a resolved route chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRoute {
    pub path: String,
    pub name: &'static str,
    pub title: &'static str,
    pub component: ViewComponent,
}

/// Result of resolving a path: the chain from outer layout to leaf view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMatch {
    pub path: String,
    pub matched: Vec<MatchedRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

impl RouteMatch {
    /// The innermost view to render
    pub fn leaf(&self) -> Option<&MatchedRoute> {
        self.matched.last()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        RouteTable::new(vec![Route::new("/", "Layout", ViewComponent::Eager("layout/Layout"))
            .redirect("/build_info")
            .children(vec![
                Route::new("/build_info", "buildInfo", ViewComponent::Lazy("views/info/BuildInfo"))
                    .title("Build Info"),
                Route::new("/json", "json", ViewComponent::Lazy("views/json/JsonTool"))
                    .title("JSON Tool"),
            ])])
    }
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve `path` to its route chain, following redirects.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
        let requested = normalize_path(path);
        let mut current = requested.clone();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let chain = self
                .match_chain(&current)
                .ok_or_else(|| RouteError::NotFound(current.clone()))?;

            let redirect = chain.last().and_then(|(route, _)| route.redirect);
            match redirect {
                Some(target) => {
                    log::debug!("route '{}' redirects to '{}'", current, target);
                    redirected_from.get_or_insert_with(|| requested.clone());
                    current = normalize_path(target);
                }
                None => {
                    let matched = chain
                        .into_iter()
                        .map(|(route, full_path)| MatchedRoute {
                            path: full_path,
                            name: route.name,
                            title: route.title,
                            component: route.component,
                        })
                        .collect();
                    return Ok(RouteMatch {
                        path: current,
                        matched,
                        redirected_from,
                    });
                }
            }
        }

        Err(RouteError::RedirectLoop(requested))
    }

    /// Depth-first search by route name
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        fn find<'a>(routes: &'a [Route], name: &str) -> Option<&'a Route> {
            routes.iter().find_map(|route| {
                if route.name == name {
                    Some(route)
                } else {
                    find(&route.children, name)
                }
            })
        }
        find(&self.routes, name)
    }

    fn match_chain(&self, path: &str) -> Option<Vec<(&Route, String)>> {
        self.routes
            .iter()
            .find_map(|route| match_route(route, "/", path))
    }
}

/// Children are tried before the parent so nested views win over the shell.
fn match_route<'a>(route: &'a Route, base: &str, path: &str) -> Option<Vec<(&'a Route, String)>> {
    let full_path = join_path(base, route.path);

    for child in &route.children {
        if let Some(mut chain) = match_route(child, &full_path, path) {
            chain.insert(0, (route, full_path));
            return Some(chain);
        }
    }

    (full_path == path).then(|| vec![(route, full_path)])
}

/// Absolute child paths stand alone; relative ones nest under the parent.
fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize_path(path)
    } else {
        normalize_path(&format!("{}/{}", base.trim_end_matches('/'), path))
    }
}

/// Strip query and fragment, ensure a leading slash, drop trailing slashes.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
