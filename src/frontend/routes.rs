//! The application's route table.

use std::fmt;

use leptos::prelude::{AnyView, IntoAny};
use leptos::view;

use crate::error::{LoadError, RouterError};
use crate::frontend::pages::{about::AboutPage, game::GamePage};
use crate::routes::{Component, DeferredLoader, RouteDescriptor, Router, RouterOptions, WebHistory};

/// A renderable page, identified by name.
#[derive(Clone, Copy)]
pub struct Page {
    pub name: &'static str,
    render: fn() -> AnyView,
}

impl Page {
    pub fn render(&self) -> AnyView {
        (self.render)()
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Page {}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page").field("name", &self.name).finish()
    }
}

pub type AppRouter = Router<Page>;

pub const GAME: Page = Page {
    name: "Game",
    render: || view! { <GamePage/> }.into_any(),
};

pub const ABOUT: Page = Page {
    name: "About",
    render: || view! { <AboutPage/> }.into_any(),
};

async fn load_about() -> Result<Page, LoadError> {
    tracing::debug!("Resolving About page");
    Ok(ABOUT)
}

/// Builds the router for an application served under `base_path`.
pub fn build(base_path: &str) -> Result<AppRouter, RouterError> {
    let routes = vec![
        RouteDescriptor::new("/", GAME.name, Component::Direct(GAME)),
        RouteDescriptor::new(
            "/about",
            ABOUT.name,
            Component::Deferred(DeferredLoader::new(load_about)),
        ),
    ];

    let router = Router::new(RouterOptions {
        history: WebHistory::new(base_path),
        routes,
    })?;

    tracing::debug!(
        base = %router.history().base(),
        routes = router.routes().len(),
        "Router built"
    );

    Ok(router)
}
