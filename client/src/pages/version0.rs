//! Sketcher page: greeting banner, geometry actions, and the drawing surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action button sends the current rectangle list to the geometry
//! service and stores the result as an overlay tagged with the revision it was
//! computed from. Requests are independent and may resolve in any order;
//! late responses are stored anyway and flagged by the stale hint.

use std::future::Future;

use leptos::prelude::*;

use crate::components::greeting_banner::GreetingBanner;
use crate::components::rectangle_drawer::RectangleDrawer;
use crate::net::api::{self, ApiError};
use crate::state::banner::BannerState;
use crate::state::drawing::{DrawingState, OverlayKind};

/// Run one geometry request in the background and apply its result.
fn spawn_request<T, Fut>(
    banner: RwSignal<BannerState>,
    what: &'static str,
    request: Fut,
    apply: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    leptos::task::spawn_local(async move {
        match request.await {
            Ok(value) => {
                apply(value);
                banner.update(BannerState::clear_error);
            }
            Err(err) => {
                leptos::logging::error!("{what} request failed: {err}");
                banner.update(|b| b.set_error(&err));
            }
        }
    });
}

fn request_overlay(kind: OverlayKind, drawing: RwSignal<DrawingState>, banner: RwSignal<BannerState>) {
    let (rectangles, revision) = drawing.with_untracked(DrawingState::request_snapshot);
    let what = kind.label();
    match kind {
        OverlayKind::Corners => spawn_request(
            banner,
            what,
            async move { api::calculate_corners(&rectangles).await },
            move |edges| drawing.update(|d| d.replace_edges(edges, revision)),
        ),
        OverlayKind::Sectors => spawn_request(
            banner,
            what,
            async move { api::calculate_sectors(&rectangles).await },
            move |sectors| drawing.update(|d| d.replace_sectors(sectors, revision)),
        ),
        OverlayKind::Path => spawn_request(
            banner,
            what,
            async move { api::calculate_path(&rectangles).await },
            move |path| drawing.update(|d| d.replace_path(path, revision)),
        ),
    }
}

#[component]
pub fn Version0Page() -> impl IntoView {
    let drawing = expect_context::<RwSignal<DrawingState>>();
    let banner = expect_context::<RwSignal<BannerState>>();

    #[cfg(feature = "hydrate")]
    spawn_request(banner, "greeting", api::fetch_greeting(), move |greeting| {
        banner.update(|b| b.set_greeting(greeting.text));
    });

    let stale_hint = move || drawing.with(DrawingState::stale_hint);

    view! {
        <section class="version0-page">
            <GreetingBanner/>
            <div class="version0-page__actions">
                <button on:click=move |_| request_overlay(OverlayKind::Corners, drawing, banner)>"Corners"</button>
                <button on:click=move |_| request_overlay(OverlayKind::Sectors, drawing, banner)>"Sectors"</button>
                <button on:click=move |_| request_overlay(OverlayKind::Path, drawing, banner)>"Show path"</button>
                <button on:click=move |_| drawing.update(DrawingState::reset)>"reset"</button>
            </div>
            {move || stale_hint().map(|hint| view! { <p class="version0-page__stale">{hint}</p> })}
            <RectangleDrawer/>
        </section>
    }
}
