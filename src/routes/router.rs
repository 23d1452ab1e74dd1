//! The route table and navigation.
//!
//! # Matching
//! - Static paths only, compared ASCII case-insensitively
//! - One trailing slash is ignored (`/about/` matches `/about`)
//! - Table order is precedence: the first matching route wins
//!
//! # Navigation
//! Each navigation takes a generation number when it starts. Only the newest
//! navigation may update the current route; an older one that finishes later
//! fails with `RouterError::Cancelled`.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::error::{Result, RouterError};
use crate::routes::component::Component;
use crate::routes::history::{Location, WebHistory};

#[derive(Debug, Clone)]
pub struct RouteDescriptor<V> {
    pub path: String,
    pub name: String,
    pub component: Component<V>,
}

impl<V> RouteDescriptor<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: Component<V>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }
}

pub struct RouterOptions<V> {
    pub history: WebHistory,
    pub routes: Vec<RouteDescriptor<V>>,
}

/// Where to navigate: a router-relative path or a route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Path(String),
    Named(String),
}

impl From<&str> for RouteTarget {
    fn from(path: &str) -> Self {
        RouteTarget::Path(path.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub location: Location,
    /// Name of the matched route, `None` when nothing matched.
    pub name: Option<String>,
    /// Position of the matched route in the table.
    pub index: Option<usize>,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct Navigation<V> {
    pub route: ResolvedRoute,
    pub view: V,
}

pub struct Router<V> {
    history: WebHistory,
    routes: Vec<RouteDescriptor<V>>,
    current: RwLock<Option<ResolvedRoute>>,
    generation: AtomicU64,
}

fn match_key(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_ascii_lowercase()
    }
}

impl<V> Router<V> {
    pub fn new(options: RouterOptions<V>) -> Result<Self> {
        let RouterOptions { history, routes } = options;

        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            if !paths.insert(match_key(&route.path)) {
                return Err(RouterError::DuplicatePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(RouterError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self {
            history,
            routes,
            current: RwLock::new(None),
            generation: AtomicU64::new(0),
        })
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }

    pub fn routes(&self) -> &[RouteDescriptor<V>] {
        &self.routes
    }

    pub fn current(&self) -> Option<ResolvedRoute> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn resolve(&self, target: impl Into<RouteTarget>) -> Result<ResolvedRoute> {
        match target.into() {
            RouteTarget::Path(path) => Ok(self.resolve_location(Location::parse(&path))),
            RouteTarget::Named(name) => {
                let index = self
                    .routes
                    .iter()
                    .position(|route| route.name == name)
                    .ok_or(RouterError::UnknownName(name))?;
                let route = &self.routes[index];
                let location = Location::parse(&route.path);
                Ok(ResolvedRoute {
                    href: self.history.href(&location.full_path),
                    location,
                    name: Some(route.name.clone()),
                    index: Some(index),
                })
            }
        }
    }

    /// Resolves a full browser URL, base path included.
    pub fn resolve_url(&self, url: &str) -> Result<ResolvedRoute> {
        let location = self
            .history
            .location(url)
            .ok_or_else(|| RouterError::OutsideBase {
                url: url.to_string(),
                base: self.history.base().to_string(),
            })?;
        Ok(self.resolve_location(location))
    }

    pub fn href_for(&self, name: &str) -> Result<String> {
        self.resolve(RouteTarget::Named(name.to_string()))
            .map(|route| route.href)
    }

    fn resolve_location(&self, location: Location) -> ResolvedRoute {
        let key = match_key(&location.path);
        let index = self
            .routes
            .iter()
            .position(|route| match_key(&route.path) == key);

        ResolvedRoute {
            href: self.history.href(&location.full_path),
            name: index.map(|i| self.routes[i].name.clone()),
            index,
            location,
        }
    }
}

impl<V> Router<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub async fn navigate(&self, target: impl Into<RouteTarget>) -> Result<Navigation<V>> {
        let generation = self.start_navigation();
        let route = self.resolve(target)?;
        self.complete(route, generation).await
    }

    pub async fn navigate_url(&self, url: &str) -> Result<Navigation<V>> {
        let generation = self.start_navigation();
        let route = self.resolve_url(url)?;
        self.complete(route, generation).await
    }

    fn start_navigation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn complete(&self, route: ResolvedRoute, generation: u64) -> Result<Navigation<V>> {
        let Some(index) = route.index else {
            tracing::debug!(path = %route.location.path, "No route matched");
            return Err(RouterError::NoMatch(route.location.path));
        };
        let descriptor = &self.routes[index];

        let view = match &descriptor.component {
            Component::Direct(view) => view.clone(),
            Component::Deferred(loader) => {
                if !loader.is_loaded() {
                    tracing::debug!(route = %descriptor.name, "Loading deferred component");
                }
                loader.load().await.map_err(|source| {
                    tracing::warn!(route = %descriptor.name, "Component load failed: {}", source);
                    RouterError::ComponentLoad {
                        name: descriptor.name.clone(),
                        source,
                    }
                })?
            }
        };

        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            // Checked under the lock so a newer navigation cannot slip in between.
            if self.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!(route = %descriptor.name, "Navigation superseded");
                return Err(RouterError::Cancelled(descriptor.name.clone()));
            }
            *current = Some(route.clone());
        }

        tracing::debug!(route = %descriptor.name, href = %route.href, "Navigated");

        Ok(Navigation { route, view })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::routes::component::DeferredLoader;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    fn table(base: &str, calls: Arc<AtomicUsize>) -> Router<&'static str> {
        Router::new(RouterOptions {
            history: WebHistory::new(base),
            routes: vec![
                RouteDescriptor::new("/", "Game", Component::Direct("game")),
                RouteDescriptor::new(
                    "/about",
                    "About",
                    Component::Deferred(DeferredLoader::new(move || {
                        let calls = calls.clone();
                        async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            Ok("about")
                        }
                    })),
                ),
            ],
        })
        .unwrap()
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let result = Router::new(RouterOptions {
            history: WebHistory::new(""),
            routes: vec![
                RouteDescriptor::new("/about", "About", Component::Direct(1)),
                RouteDescriptor::new("/About/", "Info", Component::Direct(2)),
            ],
        });
        assert_eq!(
            result.err(),
            Some(RouterError::DuplicatePath("/About/".to_string()))
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = Router::new(RouterOptions {
            history: WebHistory::new(""),
            routes: vec![
                RouteDescriptor::new("/", "Game", Component::Direct(1)),
                RouteDescriptor::new("/play", "Game", Component::Direct(2)),
            ],
        });
        assert_eq!(
            result.err(),
            Some(RouterError::DuplicateName("Game".to_string()))
        );
    }

    #[test]
    fn resolves_paths_in_table_order() {
        let router = table("", Arc::default());

        let root = router.resolve("/").unwrap();
        assert_eq!(root.name.as_deref(), Some("Game"));
        assert_eq!(root.index, Some(0));

        let about = router.resolve("/About/?tab=rules#top").unwrap();
        assert_eq!(about.name.as_deref(), Some("About"));
        assert_eq!(
            about.location.query,
            vec![("tab".to_string(), "rules".to_string())]
        );
        assert_eq!(about.location.hash, "#top");

        let missing = router.resolve("/leaderboard").unwrap();
        assert_eq!(missing.index, None);
        assert_eq!(missing.name, None);
    }

    #[test]
    fn resolves_names_to_hrefs() {
        let router = table("/app/", Arc::default());

        assert_eq!(router.href_for("Game").unwrap(), "/app/");
        assert_eq!(router.href_for("About").unwrap(), "/app/about");
        assert_eq!(
            router.href_for("Stats"),
            Err(RouterError::UnknownName("Stats".to_string()))
        );
    }

    #[test]
    fn urls_outside_the_base_are_rejected() {
        let router = table("/app", Arc::default());

        assert_eq!(
            router.resolve_url("/about"),
            Err(RouterError::OutsideBase {
                url: "/about".to_string(),
                base: "/app".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn direct_route_navigates_without_loading() {
        let calls = Arc::new(AtomicUsize::new(0));
        let router = table("/app", calls.clone());

        let navigation = router.navigate_url("/app/").await.unwrap();
        assert_eq!(navigation.view, "game");
        assert_eq!(navigation.route.href, "/app/");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(router.current().and_then(|r| r.name), Some("Game".to_string()));
    }

    #[tokio::test]
    async fn deferred_route_loads_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let router = table("/app", calls.clone());

        let first = router.navigate_url("/app/about").await.unwrap();
        let second = router
            .navigate(RouteTarget::Named("About".to_string()))
            .await
            .unwrap();

        assert_eq!(first.view, "about");
        assert_eq!(second.view, first.view);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unmatched_navigation_keeps_current_route() {
        let router = table("", Arc::default());

        router.navigate("/").await.unwrap();
        assert_eq!(
            router.navigate("/nowhere").await.err(),
            Some(RouterError::NoMatch("/nowhere".to_string()))
        );
        assert_eq!(router.current().and_then(|r| r.name), Some("Game".to_string()));
    }

    #[tokio::test]
    async fn load_failures_are_reported_with_the_route_name() {
        let router = Router::new(RouterOptions {
            history: WebHistory::new(""),
            routes: vec![RouteDescriptor::new(
                "/about",
                "About",
                Component::Deferred(DeferredLoader::new(|| async {
                    Err::<&str, _>(LoadError::new("chunk missing"))
                })),
            )],
        })
        .unwrap();

        assert_eq!(
            router.navigate("/about").await.err(),
            Some(RouterError::ComponentLoad {
                name: "About".to_string(),
                source: LoadError::new("chunk missing"),
            })
        );
        assert_eq!(router.current(), None);
    }

    #[tokio::test]
    async fn superseded_navigation_keeps_the_newer_route() {
        let (release, gate) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate)));
        let started = Arc::new(AtomicBool::new(false));
        let loader_started = started.clone();

        let router = Arc::new(
            Router::new(RouterOptions {
                history: WebHistory::new(""),
                routes: vec![
                    RouteDescriptor::new("/", "Game", Component::Direct("game")),
                    RouteDescriptor::new(
                        "/about",
                        "About",
                        Component::Deferred(DeferredLoader::new(move || {
                            let gate = gate.lock().unwrap().take();
                            loader_started.store(true, Ordering::SeqCst);
                            async move {
                                if let Some(gate) = gate {
                                    let _ = gate.await;
                                }
                                Ok("about")
                            }
                        })),
                    ),
                ],
            })
            .unwrap(),
        );

        let slow = tokio::spawn({
            let router = router.clone();
            async move { router.navigate("/about").await }
        });
        while !started.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }

        let game = router.navigate("/").await.unwrap();
        assert_eq!(game.view, "game");
        assert_eq!(router.current().and_then(|r| r.name), Some("Game".to_string()));

        release.send(()).unwrap();
        assert_eq!(
            slow.await.unwrap().err(),
            Some(RouterError::Cancelled("About".to_string()))
        );
        assert_eq!(router.current().and_then(|r| r.name), Some("Game".to_string()));

        // The load itself succeeded, so a fresh navigation is immediate.
        let about = router.navigate("/about").await.unwrap();
        assert_eq!(about.view, "about");
        assert_eq!(router.current().and_then(|r| r.name), Some("About".to_string()));
    }
}
