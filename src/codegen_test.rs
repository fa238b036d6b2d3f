use super::*;

use crate::consts::FULL_ROUND_RADIUS;
use crate::doc::{ShapeSeed, ShapeStore};
use crate::frame;

// =============================================================
// Helpers
// =============================================================

fn store_with_shapes() -> ShapeStore {
    let mut store = ShapeStore::new();
    store.add(ShapeSeed {
        kind: ShapeKind::Rect,
        x: 10,
        y: 20,
        w: 100,
        h: 80,
        fill: "#60a5fa".to_owned(),
        stroke: "#1f2937".to_owned(),
        stroke_width: 2,
        corner_radius: 4,
    });
    store.add(ShapeSeed {
        kind: ShapeKind::Ellipse,
        x: 150,
        y: 40,
        w: 60,
        h: 60,
        fill: "#f87171".to_owned(),
        stroke: "#111".to_owned(),
        stroke_width: 0,
        corner_radius: FULL_ROUND_RADIUS,
    });
    store
}

fn iphone() -> &'static Frame {
    &frame::CATALOG[0]
}

// =============================================================
// CodeTab
// =============================================================

#[test]
fn tab_default_is_single() {
    assert_eq!(CodeTab::default(), CodeTab::Single);
}

#[test]
fn tab_names_round_trip() {
    for tab in [CodeTab::Single, CodeTab::Html, CodeTab::Css, CodeTab::Js] {
        assert_eq!(CodeTab::parse(tab.as_str()), Some(tab));
    }
}

#[test]
fn tab_parse_unknown_returns_none() {
    assert!(CodeTab::parse("markdown").is_none());
    assert!(CodeTab::parse("").is_none());
}

// =============================================================
// CSS artifact
// =============================================================

#[test]
fn css_artboard_rule_uses_frame_dimensions() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert!(parts.css.contains("#artboard{position:relative;width:393px;height:852px;"));
}

#[test]
fn css_artboard_rule_tracks_other_frames() {
    let store = store_with_shapes();
    let mba = frame::frame("mba").unwrap();
    let parts = artifacts(store.shapes(), mba);
    assert!(parts.css.contains("width:1280px;height:832px;"));
}

#[test]
fn css_has_one_rule_per_shape() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert!(parts.css.contains(".shape-1{left:10px;top:20px;width:100px;height:80px;"));
    assert!(parts.css.contains(".shape-2{left:150px;top:40px;width:60px;height:60px;"));
}

#[test]
fn css_rect_rule_carries_style() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert!(
        parts
            .css
            .contains("background:#60a5fa;border:2px solid #1f2937;border-radius:4px;")
    );
}

#[test]
fn css_ellipse_rule_is_fully_rounded() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert!(parts.css.contains(".shape-2{"));
    assert!(parts.css.contains("border-radius:9999px;"));
}

// =============================================================
// HTML artifact
// =============================================================

#[test]
fn html_has_one_element_per_shape_in_store_order() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    let first = parts.html.find("shape-1").unwrap();
    let second = parts.html.find("shape-2").unwrap();
    assert!(first < second);
    assert_eq!(parts.html.matches("<div class=\"shape shape-").count(), 2);
}

#[test]
fn html_wraps_elements_in_artboard_div() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert!(parts.html.contains("<div id=\"artboard\">"));
    assert!(parts.html.trim_end().ends_with("</div>"));
}

#[test]
fn html_for_empty_store_has_no_shape_elements() {
    let store = ShapeStore::new();
    let parts = artifacts(store.shapes(), iphone());
    assert_eq!(parts.html.matches("class=\"shape").count(), 0);
}

// =============================================================
// JS artifact
// =============================================================

#[test]
fn js_embeds_shape_list_as_json() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert!(parts.js.contains("const data ="));
    assert!(parts.js.contains("\"fill\": \"#60a5fa\""));
    assert!(parts.js.contains("\"kind\": \"ellipse\""));
}

#[test]
fn js_embedded_json_round_trips() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    let start = parts.js.find("const data = ").unwrap() + "const data = ".len();
    let end = parts.js.rfind(";\nconst mount").unwrap();
    let embedded: Vec<Shape> = serde_json::from_str(&parts.js[start..end]).unwrap();
    assert_eq!(embedded, store.shapes());
}

// =============================================================
// Combined document
// =============================================================

#[test]
fn single_document_wraps_all_three_artifacts() {
    let store = store_with_shapes();
    let document = single_document(store.shapes(), iphone());
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("/* --- Generated CSS --- */"));
    assert!(document.contains("<!-- --- Generated HTML --- -->"));
    assert!(document.contains("// --- Generated JS ---"));
}

#[test]
fn single_document_regeneration_is_stable() {
    let store = store_with_shapes();
    let a = single_document(store.shapes(), iphone());
    let b = single_document(store.shapes(), iphone());
    assert_eq!(a, b);
}

// =============================================================
// Tab rendering
// =============================================================

#[test]
fn render_tab_selects_matching_artifact() {
    let store = store_with_shapes();
    let parts = artifacts(store.shapes(), iphone());
    assert_eq!(render_tab(CodeTab::Html, store.shapes(), iphone()), parts.html);
    assert_eq!(render_tab(CodeTab::Css, store.shapes(), iphone()), parts.css);
    assert_eq!(render_tab(CodeTab::Js, store.shapes(), iphone()), parts.js);
    assert_eq!(
        render_tab(CodeTab::Single, store.shapes(), iphone()),
        single_document(store.shapes(), iphone())
    );
}

// =============================================================
// border_radius_css
// =============================================================

#[test]
fn radius_css_for_rect_uses_own_radius() {
    let store = store_with_shapes();
    assert_eq!(border_radius_css(&store.shapes()[0]), "4px");
}

#[test]
fn radius_css_for_ellipse_is_sentinel_px() {
    let store = store_with_shapes();
    assert_eq!(border_radius_css(&store.shapes()[1]), "9999px");
}
