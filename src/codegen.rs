//! Static code generation from the shape list and active frame.
//!
//! Pure functions: (shapes, frame) in, text artifacts out. Three split
//! artifacts — a markup fragment, a stylesheet, and a dynamic-reconstruction
//! script sample — plus a combined standalone document for download. The
//! engine never feeds these anything but current state, so regenerating is
//! idempotent.

#[cfg(test)]
#[path = "codegen_test.rs"]
mod codegen_test;

use crate::doc::{Shape, ShapeKind};
use crate::frame::Frame;

/// The three split artifacts of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeArtifacts {
    /// Markup fragment: one element per shape inside the artboard div.
    pub html: String,
    /// Stylesheet: one artboard rule plus one rule per shape, keyed by id.
    pub css: String,
    /// Commented script sample embedding the shape list as literal JSON.
    pub js: String,
}

/// Which artifact the code pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTab {
    /// The combined standalone document (default).
    #[default]
    Single,
    Html,
    Css,
    Js,
}

impl CodeTab {
    /// Lowercase tab name, as used by hosts and the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Parse a tab name. Unknown names return `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "js" => Some(Self::Js),
            _ => None,
        }
    }
}

/// CSS border-radius value for a shape: the full-round value for ellipses,
/// the shape's own radius for rectangles.
#[must_use]
pub fn border_radius_css(shape: &Shape) -> String {
    match shape.kind {
        ShapeKind::Ellipse => "9999px".to_owned(),
        ShapeKind::Rect => format!("{}px", shape.corner_radius),
    }
}

/// Generate the three split artifacts for the current state.
#[must_use]
pub fn artifacts(shapes: &[Shape], frame: &Frame) -> CodeArtifacts {
    CodeArtifacts {
        html: generate_html(shapes),
        css: generate_css(shapes, frame),
        js: generate_js(shapes),
    }
}

/// Render the artifact behind one code-pane tab.
#[must_use]
pub fn render_tab(tab: CodeTab, shapes: &[Shape], frame: &Frame) -> String {
    match tab {
        CodeTab::Single => single_document(shapes, frame),
        CodeTab::Html => generate_html(shapes),
        CodeTab::Css => generate_css(shapes, frame),
        CodeTab::Js => generate_js(shapes),
    }
}

fn generate_css(shapes: &[Shape], frame: &Frame) -> String {
    let mut css = format!(
        "/* --- Generated CSS --- */\n#artboard{{position:relative;width:{}px;height:{}px;background:#fff;overflow:hidden;}}\n.shape{{position:absolute;box-sizing:border-box;}}\n",
        frame.width, frame.height
    );
    let rules: Vec<String> = shapes
        .iter()
        .map(|s| {
            format!(
                ".shape-{}{{left:{}px;top:{}px;width:{}px;height:{}px;background:{};border:{}px solid {};border-radius:{};}}",
                s.id,
                s.x,
                s.y,
                s.w,
                s.h,
                s.fill,
                s.stroke_width,
                s.stroke,
                border_radius_css(s)
            )
        })
        .collect();
    css.push_str(&rules.join("\n"));
    css
}

fn generate_html(shapes: &[Shape]) -> String {
    let elements: Vec<String> = shapes
        .iter()
        .map(|s| format!("  <div class=\"shape shape-{}\"></div>", s.id))
        .collect();
    format!(
        "<!-- --- Generated HTML --- -->\n<div id=\"artboard\">\n{}\n</div>",
        elements.join("\n")
    )
}

fn generate_js(shapes: &[Shape]) -> String {
    // Serializing plain structs to JSON is infallible; fall back to an
    // empty embed rather than propagating an impossible error.
    let data = serde_json::to_string_pretty(shapes).unwrap_or_default();
    format!(
        r"// --- Generated JS ---
// The static HTML/CSS is sufficient on its own. For dynamic
// reconstruction, use the sample below.
/*
const data = {data};
const mount = document.getElementById('artboard');
for(const s of data){{
  const el=document.createElement('div'); el.className='shape';
  Object.assign(el.style,{{
    position:'absolute', left:s.x+'px', top:s.y+'px', width:s.w+'px', height:s.h+'px',
    background:s.fill, border:s.stroke_width+'px solid '+s.stroke,
    borderRadius:(s.kind==='ellipse'?'9999px':s.corner_radius+'px'), boxSizing:'border-box'
  }});
  mount.appendChild(el);
}}
*/"
    )
}

/// Generate the combined standalone document wrapping all three artifacts.
#[must_use]
pub fn single_document(shapes: &[Shape], frame: &Frame) -> String {
    let parts = artifacts(shapes, frame);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Exported Shapes</title>
  <style>
    body{{margin:0;display:grid;place-content:center;min-height:100vh;background:#0f172a;color:#e2e8f0;font-family:system-ui,sans-serif;}}
    #frame{{background:#111827;border:1px solid #1f2937;border-radius:12px;padding:16px;max-width:980px;}}
    h1{{font-size:16px;margin:0 0 10px 0;}}
    .hint{{font-size:12px;color:#94a3b8;margin-bottom:12px;}}
{css}
  </style>
</head>
<body>
  <div id="frame">
    <h1>Exported Shapes</h1>
    <div class="hint">This file renders the shapes with static HTML/CSS only.</div>
{html}
  </div>
  <script>
{js}
  </script>
</body>
</html>"#,
        css = indent(&parts.css, 4),
        html = indent(&parts.html, 4),
        js = indent(&parts.js, 4),
    )
}

fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
