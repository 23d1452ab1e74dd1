use leptos::{IntoView, component, prelude::ElementChild, view};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <article>
            <h1>"About"</h1>
            <p>"A small browser game. Every round starts from the Game page."</p>
            <p><small>"This page is loaded the first time you open it."</small></p>
        </article>
    }
}
