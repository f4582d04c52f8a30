#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::MIN_SCALE;
use crate::options::ZoomMode;
use crate::render::DrawOp;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn core_at_scale(scale: f64) -> EngineCore {
    let mut core = EngineCore::new();
    core.camera.scale = scale;
    core
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn committed(actions: &[Action]) -> Vec<Rectangle> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::RectangleCommitted(rect) => Some(*rect),
            _ => None,
        })
        .collect()
}

/// Run a full down -> move -> up gesture and return the emitted actions.
fn drag(core: &mut EngineCore, from: Point, to: Point) -> Vec<Action> {
    core.on_pointer_down(from);
    core.on_pointer_move(to);
    core.on_pointer_up()
}

/// Host-side owner of the rectangle list: applies commits and pushes the
/// new snapshot back in.
fn apply(core: &mut EngineCore, owner: &mut Vec<Rectangle>, actions: &[Action]) {
    owner.extend(committed(actions));
    core.load_rectangles(owner.clone());
}

fn doc_is_empty(core: &EngineCore) -> bool {
    core.doc.rectangles().is_empty()
        && core.doc.edges().is_empty()
        && core.doc.sectors().is_empty()
        && core.doc.path().is_empty()
}

fn preview_ops(core: &EngineCore) -> usize {
    core.display_list()
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeRect { stroke, .. } if stroke == "red"))
        .count()
}

// =============================================================
// Construction and defaults
// =============================================================

#[test]
fn core_default_is_idle_zoomable_at_scale_two() {
    let core = EngineCore::new();
    assert_eq!(core.input, DragState::Idle);
    assert_eq!(core.scale(), 2.0);
    assert!(core.options.zoomable());
    assert!(doc_is_empty(&core));
}

#[test]
fn scale_starts_at_the_options_initial_scale() {
    for options in [DrawerOptions::default(), DrawerOptions::fixed_scale()] {
        let initial = options.initial_scale;
        assert_eq!(EngineCore::with_options(options).scale(), initial);
    }
}

#[test]
fn core_with_fixed_options_starts_at_scale_one() {
    let core = EngineCore::with_options(DrawerOptions::fixed_scale());
    assert_eq!(core.scale(), 1.0);
    assert_eq!(core.options.zoom, ZoomMode::Fixed);
}

// =============================================================
// Gesture state machine
// =============================================================

#[test]
fn pointer_down_starts_dragging() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(pt(10.0, 20.0));
    assert!(has_render_needed(&actions));
    assert_eq!(core.input, DragState::Dragging { start: pt(10.0, 20.0), current: None });
}

#[test]
fn pointer_down_clears_stale_current() {
    let mut core = EngineCore::new();
    core.input = DragState::Dragging { start: pt(1.0, 1.0), current: Some(pt(5.0, 5.0)) };
    core.on_pointer_down(pt(30.0, 30.0));
    assert_eq!(core.input, DragState::Dragging { start: pt(30.0, 30.0), current: None });
}

#[test]
fn pointer_move_while_idle_is_noop() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_move(pt(10.0, 10.0));
    assert!(actions.is_empty());
    assert_eq!(core.input, DragState::Idle);
}

#[test]
fn pointer_move_updates_current_without_committing() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0));
    let actions = core.on_pointer_move(pt(12.0, 8.0));
    assert!(has_render_needed(&actions));
    assert!(committed(&actions).is_empty());
    assert_eq!(core.input, DragState::Dragging { start: pt(0.0, 0.0), current: Some(pt(12.0, 8.0)) });

    core.on_pointer_move(pt(20.0, 9.0));
    assert_eq!(core.input.preview(), Some((pt(0.0, 0.0), pt(20.0, 9.0))));
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_up().is_empty());
    assert_eq!(core.input, DragState::Idle);
}

#[test]
fn click_without_move_commits_nothing_and_returns_to_idle() {
    let mut core = EngineCore::new();
    let mut owner = Vec::new();
    core.on_pointer_down(pt(50.0, 50.0));
    let actions = core.on_pointer_up();
    apply(&mut core, &mut owner, &actions);
    assert!(committed(&actions).is_empty());
    assert!(owner.is_empty());
    assert_eq!(core.input, DragState::Idle);

    // A later stray move must not revive the discarded gesture.
    assert!(core.on_pointer_move(pt(80.0, 80.0)).is_empty());
}

#[test]
fn drag_at_scale_one_commits_pixel_rectangle() {
    let mut core = core_at_scale(1.0);
    let actions = drag(&mut core, pt(100.0, 50.0), pt(140.0, 90.0));
    assert_eq!(committed(&actions), vec![Rectangle::new(100.0, 50.0, 40.0, 40.0)]);
    assert!(has_render_needed(&actions));
    assert_eq!(core.input, DragState::Idle);
}

#[test]
fn drag_at_scale_two_commits_model_rectangle() {
    let mut core = core_at_scale(2.0);
    let actions = drag(&mut core, pt(100.0, 50.0), pt(140.0, 90.0));
    assert_eq!(committed(&actions), vec![Rectangle::new(50.0, 25.0, 20.0, 20.0)]);
}

#[test]
fn fixed_scale_surface_commits_in_pixels() {
    let mut core = EngineCore::with_options(DrawerOptions::fixed_scale());
    let actions = drag(&mut core, pt(100.0, 50.0), pt(140.0, 90.0));
    assert_eq!(committed(&actions), vec![Rectangle::new(100.0, 50.0, 40.0, 40.0)]);
}

#[test]
fn commit_formula_holds_for_every_direction_and_scale() {
    let gestures = [
        (pt(100.0, 50.0), pt(140.0, 90.0)),
        (pt(140.0, 90.0), pt(100.0, 50.0)),
        (pt(7.0, 300.0), pt(251.0, 3.0)),
        (pt(33.3, 12.7), pt(33.3, 12.7)),
        (pt(0.0, 0.0), pt(799.0, 599.0)),
    ];
    for scale in [0.1, 0.5, 1.0, 1.7, 2.0, 3.0] {
        for (down, up) in gestures {
            let mut core = core_at_scale(scale);
            let rects = committed(&drag(&mut core, down, up));
            assert_eq!(rects.len(), 1);
            let rect = rects[0];
            assert_eq!(rect.x, (down.x.min(up.x) / scale).floor());
            assert_eq!(rect.y, (down.y.min(up.y) / scale).floor());
            assert_eq!(rect.width, ((up.x - down.x).abs() / scale).floor());
            assert_eq!(rect.height, ((up.y - down.y).abs() / scale).floor());
            assert!(rect.width >= 0.0 && rect.height >= 0.0);
        }
    }
}

#[test]
fn zero_area_drag_still_commits() {
    let mut core = core_at_scale(1.0);
    let actions = drag(&mut core, pt(20.0, 20.0), pt(20.0, 20.0));
    assert_eq!(committed(&actions), vec![Rectangle::new(20.0, 20.0, 0.0, 0.0)]);
}

#[test]
fn commit_uses_only_down_and_last_move() {
    let mut core = core_at_scale(1.0);
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(500.0, 500.0));
    core.on_pointer_move(pt(10.0, 30.0));
    let actions = core.on_pointer_up();
    assert_eq!(committed(&actions), vec![Rectangle::new(0.0, 0.0, 10.0, 30.0)]);
}

#[test]
fn commit_does_not_touch_the_snapshot() {
    let mut core = EngineCore::new();
    drag(&mut core, pt(0.0, 0.0), pt(10.0, 10.0));
    assert!(core.doc.rectangles().is_empty());
}

// =============================================================
// Preview in the frame
// =============================================================

#[test]
fn preview_appears_only_while_dragging_after_a_move() {
    let mut core = EngineCore::new();
    assert_eq!(preview_ops(&core), 0);
    core.on_pointer_down(pt(10.0, 10.0));
    assert_eq!(preview_ops(&core), 0);
    core.on_pointer_move(pt(30.0, 40.0));
    assert_eq!(preview_ops(&core), 1);
    core.on_pointer_up();
    assert_eq!(preview_ops(&core), 0);
}

#[test]
fn preview_is_drawn_in_raw_pixels() {
    let mut core = core_at_scale(2.0);
    core.on_pointer_down(pt(10.0, 10.0));
    core.on_pointer_move(pt(30.0, 40.0));
    let list = core.display_list();
    assert_eq!(
        list.ops().last(),
        Some(&DrawOp::StrokeRect {
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 30.0,
            stroke: "red".to_owned(),
            line_width: 1.0,
        })
    );
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn zoom_in_reports_new_scale() {
    let mut core = EngineCore::new();
    let actions = core.zoom_in();
    assert!((core.scale() - 2.1).abs() < 1e-9);
    assert!(matches!(actions[0], Action::ScaleChanged(s) if (s - 2.1).abs() < 1e-9));
    assert!(has_render_needed(&actions));
}

#[test]
fn zoom_out_is_clamped() {
    let mut core = EngineCore::new();
    for _ in 0..50 {
        core.zoom_out();
        assert!(core.scale() >= MIN_SCALE);
    }
    assert!((core.scale() - MIN_SCALE).abs() < 1e-9);
}

#[test]
fn fixed_scale_ignores_zoom() {
    let mut core = EngineCore::with_options(DrawerOptions::fixed_scale());
    assert!(core.zoom_in().is_empty());
    assert!(core.zoom_out().is_empty());
    assert_eq!(core.scale(), 1.0);
}

#[test]
fn zoom_rescales_committed_rectangles_without_mutating_them() {
    let mut core = core_at_scale(1.0);
    core.load_rectangles(vec![Rectangle::new(10.0, 10.0, 5.0, 5.0)]);
    core.zoom_in();
    assert_eq!(core.doc.rectangles(), &[Rectangle::new(10.0, 10.0, 5.0, 5.0)]);
    let fill = core
        .display_list()
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::FillRect { x, width, .. } => Some((*x, *width)),
            _ => None,
        })
        .unwrap();
    assert!((fill.0 - 11.0).abs() < 1e-9);
    assert!((fill.1 - 5.5).abs() < 1e-9);
}

#[test]
fn zoom_changes_future_commits_only() {
    let mut core = core_at_scale(1.0);
    let mut owner = Vec::new();
    let first = drag(&mut core, pt(0.0, 0.0), pt(40.0, 40.0));
    apply(&mut core, &mut owner, &first);
    for _ in 0..10 {
        core.zoom_in();
    }
    let second = drag(&mut core, pt(0.0, 0.0), pt(40.0, 40.0));
    apply(&mut core, &mut owner, &second);
    assert_eq!(owner[0], Rectangle::new(0.0, 0.0, 40.0, 40.0));
    assert_eq!(owner[1], Rectangle::new(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn zoom_during_gesture_applies_at_commit() {
    let mut core = core_at_scale(1.0);
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(40.0, 40.0));
    for _ in 0..10 {
        core.zoom_in();
    }
    let actions = core.on_pointer_up();
    assert_eq!(committed(&actions), vec![Rectangle::new(0.0, 0.0, 20.0, 20.0)]);
}

// =============================================================
// Snapshots and reset
// =============================================================

#[test]
fn render_tolerates_all_empty_collections() {
    let mut core = EngineCore::new();
    core.load_rectangles(Vec::new());
    core.load_edges(Vec::new());
    core.load_sectors(Vec::new());
    core.load_path(Vec::new());
    let list = core.display_list();
    assert!(matches!(list.ops()[0], DrawOp::Clear { width, height } if width == 800.0 && height == 600.0));
}

#[test]
fn render_is_idempotent() {
    let mut core = EngineCore::new();
    core.load_rectangles(vec![Rectangle::new(1.0, 2.0, 3.0, 4.0)]);
    core.load_path(vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)]);
    core.on_pointer_down(pt(5.0, 5.0));
    core.on_pointer_move(pt(50.0, 60.0));
    assert_eq!(core.display_list(), core.display_list());
}

#[test]
fn misaligned_corner_sets_are_kept_and_rendered() {
    let mut core = EngineCore::new();
    core.load_rectangles(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0)]);
    let edge = RectEdge { topleft: pt(0.0, 0.0), topright: pt(1.0, 0.0), bottomleft: pt(0.0, 1.0), bottomright: pt(1.0, 1.0) };
    core.load_edges(vec![edge, edge]);
    assert_eq!(core.doc.edges().len(), 2);
    let corners = core
        .display_list()
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::FillCircle { fill, .. } if fill == "green"))
        .count();
    assert_eq!(corners, 8);
}

#[test]
fn reset_clears_snapshots_and_gesture_but_keeps_scale() {
    let mut core = EngineCore::new();
    core.zoom_in();
    core.load_rectangles(vec![Rectangle::new(1.0, 2.0, 3.0, 4.0)]);
    core.load_sectors(vec![SnowSector {
        coords: pt(1.0, 1.0),
        snow_load: 2.0,
        color: "red".to_owned(),
        dump_site: true,
    }]);
    core.on_pointer_down(pt(5.0, 5.0));
    core.reset();
    assert!(doc_is_empty(&core));
    assert_eq!(core.input, DragState::Idle);
    assert!((core.scale() - 2.1).abs() < 1e-9);
}

#[test]
fn reset_then_drag_yields_single_rectangle() {
    let mut core = core_at_scale(1.0);
    let mut owner = Vec::new();
    for i in 0..3 {
        let offset = f64::from(i) * 10.0;
        let actions = drag(&mut core, pt(offset, offset), pt(offset + 5.0, offset + 5.0));
        apply(&mut core, &mut owner, &actions);
    }
    assert_eq!(owner.len(), 3);

    owner.clear();
    core.reset();
    let actions = drag(&mut core, pt(100.0, 50.0), pt(140.0, 90.0));
    apply(&mut core, &mut owner, &actions);
    assert_eq!(owner, vec![Rectangle::new(100.0, 50.0, 40.0, 40.0)]);
    assert_eq!(core.doc.rectangles(), owner.as_slice());
}

// =============================================================
// Corner alignment warnings
// =============================================================

mod captured {
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Records warnings on the logging thread, so parallel tests stay apart.
    struct WarnCapture;

    impl log::Log for WarnCapture {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: WarnCapture = WarnCapture;
    static INSTALL: Once = Once::new();

    /// Install the capturing logger and drop anything this thread logged so far.
    pub fn start() {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger in canvas tests");
            log::set_max_level(log::LevelFilter::Warn);
        });
        take();
    }

    pub fn take() -> Vec<String> {
        WARNINGS.with(|w| std::mem::take(&mut *w.borrow_mut()))
    }
}

fn edge_at(x: f64) -> RectEdge {
    RectEdge { topleft: pt(x, 0.0), topright: pt(x + 1.0, 0.0), bottomleft: pt(x, 1.0), bottomright: pt(x + 1.0, 1.0) }
}

#[test]
fn empty_corner_snapshots_after_each_drag_do_not_warn() {
    captured::start();
    let mut core = core_at_scale(1.0);
    let mut owner = Vec::new();
    for i in 0..3 {
        let offset = f64::from(i) * 10.0;
        let actions = drag(&mut core, pt(offset, offset), pt(offset + 5.0, offset + 5.0));
        owner.extend(committed(&actions));
        core.load_rectangles(owner.clone());
        core.load_edges(Vec::new());
    }
    assert_eq!(core.doc.rectangles().len(), 3);
    assert!(captured::take().is_empty());
}

#[test]
fn short_corner_snapshot_warns_once() {
    captured::start();
    let mut core = EngineCore::new();
    core.load_rectangles(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0); 3]);
    core.load_edges(vec![edge_at(0.0), edge_at(5.0)]);

    let warnings = captured::take();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("1 unmatched rectangles"));
}

#[test]
fn reloading_the_same_short_corner_snapshot_stays_quiet() {
    captured::start();
    let mut core = EngineCore::new();
    let edges = vec![edge_at(0.0), edge_at(5.0)];
    core.load_rectangles(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0); 2]);
    core.load_edges(edges.clone());
    for n in 3..6 {
        core.load_rectangles(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0); n]);
        core.load_edges(edges.clone());
    }
    assert!(captured::take().is_empty());
}

#[test]
fn matching_corner_snapshot_does_not_warn() {
    captured::start();
    let mut core = EngineCore::new();
    core.load_rectangles(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0); 2]);
    core.load_edges(vec![edge_at(0.0), edge_at(5.0)]);
    assert!(captured::take().is_empty());
}
