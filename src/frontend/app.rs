use std::sync::Arc;

use crate::frontend::pages::error::ErrorPage;
use crate::frontend::routes::AppRouter;
use leptos::{
    IntoView, component,
    prelude::{ClassAttribute, ElementChild, Get, IntoAny, LocalResource, Memo, Suspense},
    view,
};
use leptos_router::{
    components::{A, Router},
    hooks::use_location,
};

#[component]
pub fn App(router: Arc<AppRouter>) -> impl IntoView {
    view! {
        <Router>
            <CurrentPage router=router/>
        </Router>
    }
}

/// Renders the nav bar and the page the router resolves for the browser's
/// current path.
#[component]
fn CurrentPage(router: Arc<AppRouter>) -> impl IntoView {
    let location = use_location();
    let game_href = router.href_for("Game").unwrap_or_default();
    let about_href = router.href_for("About").unwrap_or_default();

    let navigator = router.clone();
    let navigation = LocalResource::new(move || {
        let router = navigator.clone();
        let pathname = location.pathname.get();
        async move { router.navigate_url(&pathname).await }
    });

    // Re-read whenever a navigation settles; a superseded one leaves the
    // current route alone.
    let active = Memo::new(move |_| {
        navigation.get()?;
        router.current()?.name
    });
    let is_active = move |name: &str| active.get().as_deref() == Some(name);

    view! {
        <nav>
            <ul>
                <li class:active=move || is_active("Game")>
                    <A href=game_href>"Game"</A>
                </li>
                <li class:active=move || is_active("About")>
                    <A href=about_href>"About"</A>
                </li>
            </ul>
        </nav>
        <main>
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || {
                    navigation
                        .get()
                        .map(|navigation| match navigation {
                            Ok(navigation) => navigation.view.render(),
                            Err(error) => view! { <ErrorPage error=error/> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
