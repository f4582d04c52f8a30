//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_header::AppHeader;
use crate::pages::{home::HomePage, version0::Version0Page};
use crate::state::{banner::BannerState, drawing::DrawingState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the drawing and banner state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(DrawingState::default()));
    provide_context(RwSignal::new(BannerState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/snowapp.css"/>
        <Title text="SnowApp"/>

        <Router>
            <AppHeader/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("version0") view=Version0Page/>
                </Routes>
            </main>
        </Router>
    }
}
