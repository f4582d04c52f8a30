use leptos::prelude::*;

/// Landing route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <p>"Hello home page"</p>
        </section>
    }
}
