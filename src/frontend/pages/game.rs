use leptos::{IntoView, component, prelude::ElementChild, view};

#[component]
pub fn GamePage() -> impl IntoView {
    view! {
        <article>
            <h1>"Game"</h1>
            <p>"Pick a square to start a new round."</p>
        </article>
    }
}
