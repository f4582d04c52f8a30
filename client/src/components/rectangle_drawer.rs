//! Bridge component between the page's drawing state and `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the gesture and the zoom scale; this host owns nothing but
//! the wiring. Whenever `DrawingState` changes the host pushes a fresh
//! snapshot into the engine and repaints. When the engine reports a committed
//! rectangle the host appends it to `DrawingState`, which in turn triggers the
//! snapshot effect.

use leptos::prelude::*;

use crate::state::drawing::DrawingState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use canvas::options::DrawerOptions;

#[cfg(feature = "hydrate")]
use crate::util::canvas_bridge::{from_canvas_rect, load_snapshot};
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{capture_pointer, pointer_point};

#[cfg(feature = "hydrate")]
fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        leptos::logging::error!("canvas render failed: {err:?}");
    }
}

/// Apply engine actions: repaint, publish the scale, and hand committed
/// rectangles back to the caller. The engine borrow must be released before
/// the caller touches `DrawingState`.
#[cfg(feature = "hydrate")]
fn process_actions(actions: Vec<Action>, engine: &Engine, scale: RwSignal<Option<f64>>) -> Vec<canvas::doc::Rectangle> {
    let mut committed = Vec::new();
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::RectangleCommitted(rect) => committed.push(rect),
            Action::ScaleChanged(value) => scale.set(Some(value)),
            Action::RenderNeeded => needs_render = true,
        }
    }
    if needs_render {
        render(engine);
    }
    committed
}

#[cfg(feature = "hydrate")]
fn dispatch(
    engine: &Rc<RefCell<Option<Engine>>>,
    drawing: RwSignal<DrawingState>,
    scale: RwSignal<Option<f64>>,
    event: impl FnOnce(&mut Engine) -> Vec<Action>,
) {
    let committed = {
        let mut engine_ref = engine.borrow_mut();
        let Some(engine) = engine_ref.as_mut() else {
            return;
        };
        let actions = event(engine);
        process_actions(actions, engine, scale)
    };
    if committed.is_empty() {
        return;
    }
    drawing.update(|d| {
        for rect in committed {
            d.append_rectangle(from_canvas_rect(rect));
        }
    });
}

/// Drag-to-create rectangle surface with optional zoom buttons.
///
/// `zoomable = false` gives the compact fixed-scale surface.
#[component]
pub fn RectangleDrawer(#[prop(default = true)] zoomable: bool) -> impl IntoView {
    let drawing = expect_context::<RwSignal<DrawingState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    // Unknown until the engine mounts with its options.
    let scale = RwSignal::new(None::<f64>);

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "hydrate")]
    let last_reset_seq = RwSignal::new(drawing.get_untracked().reset_seq);

    // Mount the engine once the canvas node exists.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let options = if zoomable { DrawerOptions::default() } else { DrawerOptions::fixed_scale() };
            let mut instance = Engine::with_options(canvas, options);
            drawing.with_untracked(|d| load_snapshot(&mut instance, d));
            scale.set(Some(instance.scale()));
            render(&instance);
            *engine.borrow_mut() = Some(instance);
        });
    }

    // Push owner snapshots into the engine whenever they change.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            drawing.with(|d| {
                let mut engine_ref = engine.borrow_mut();
                let Some(engine) = engine_ref.as_mut() else {
                    return;
                };
                if d.reset_seq != last_reset_seq.get_untracked() {
                    engine.reset();
                    last_reset_seq.set(d.reset_seq);
                }
                load_snapshot(engine, d);
                render(engine);
            });
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                capture_pointer(&ev);
                let point = pointer_point(&ev);
                dispatch(&engine, drawing, scale, |e| e.on_pointer_down(point));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                dispatch(&engine, drawing, scale, |e| e.on_pointer_move(point));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                dispatch(&engine, drawing, scale, Engine::on_pointer_up);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_zoom_in = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                dispatch(&engine, drawing, scale, Engine::zoom_in);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_zoom_out = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                dispatch(&engine, drawing, scale, Engine::zoom_out);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_pointer_cancel = on_pointer_up.clone();
    let surface_class = if zoomable { "rectangle-drawer__surface" } else { "rectangle-drawer__surface compact" };

    view! {
        <div class="rectangle-drawer">
            <canvas
                class=surface_class
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                "Your browser does not support canvas."
            </canvas>
            {zoomable.then(|| view! {
                <div class="rectangle-drawer__zoom">
                    <button on:click=on_zoom_in>"+"</button>
                    <button on:click=on_zoom_out>"-"</button>
                    <span class="rectangle-drawer__scale">{move || scale.get().map(|s| format!("{s:.1}x")).unwrap_or_default()}</span>
                </div>
            })}
        </div>
    }
}
