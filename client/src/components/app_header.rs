//! Title bar with navigation between the home and sketcher routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-header__title">"SnowApp"</h1>
            <nav class="app-header__nav">
                <A href="/">
                    <button>"Home"</button>
                </A>
                <A href="/version0">
                    <button>"Version 0"</button>
                </A>
            </nav>
        </header>
    }
}
