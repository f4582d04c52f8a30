//! Error line plus greeting line above the sketcher.

use leptos::prelude::*;

use crate::state::banner::BannerState;

#[component]
pub fn GreetingBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();

    view! {
        <div class="greeting-banner">
            {move || {
                banner
                    .with(BannerState::error_line)
                    .map(|line| view! { <p class="greeting-banner__error">{line}</p> })
            }}
            <p class="greeting-banner__greeting">{move || banner.with(BannerState::greeting_line)}</p>
        </div>
    }
}
