use leptos::{IntoView, component, prelude::ElementChild, view};

use crate::error::RouterError;

#[component]
pub fn ErrorPage(error: RouterError) -> impl IntoView {
    let (title, message) = match &error {
        RouterError::NoMatch(path) => (
            "Page Not Found",
            format!("There is no page at {path}."),
        ),
        RouterError::ComponentLoad { name, .. } => (
            "Page Failed To Load",
            format!("The {name} page could not be loaded. Please check your connection and try again."),
        ),
        RouterError::OutsideBase { .. } => (
            "Page Not Found",
            "This address is not part of the game.".to_string(),
        ),
        other => ("Navigation Error", other.to_string()),
    };

    tracing::debug!("Rendering error page: {}", error);

    view! {
        <article>
            <h1>{title}</h1>
            <p>{message}</p>
        </article>
    }
}
