//! FILENAME: core/group-cell/src/view.rs
//! Group Cell View - Renderable output for the frontend.
//!
//! This is the content root of one group cell. It mirrors the cell's
//! template: expanded icon, contracted icon, checkbox, value and child
//! count, plus the indentation applied to the root. The frontend either
//! consumes the struct directly or asks for markup via `to_markup`.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONTENT
// ============================================================================

/// What the value slot holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    #[default]
    Empty,
    /// Plain text. Escaped when turned into markup.
    Text(String),
    /// Trusted markup, inserted as is.
    Markup(String),
    /// Output of a delegated renderer.
    Component { renderer: String, markup: String },
}

impl CellContent {
    fn to_markup(&self) -> String {
        match self {
            CellContent::Empty => String::new(),
            CellContent::Text(text) => escape_text(text),
            CellContent::Markup(markup) => markup.clone(),
            CellContent::Component { markup, .. } => markup.clone(),
        }
    }
}

// ============================================================================
// INDENTATION
// ============================================================================

/// The edge indentation is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indent {
    pub edge: Edge,
    pub px: u32,
}

impl Indent {
    fn to_style(self) -> String {
        match self.edge {
            Edge::Left => format!("padding-left: {}px;", self.px),
            Edge::Right => format!("padding-right: {}px;", self.px),
        }
    }
}

// ============================================================================
// VIEW
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCellView {
    pub expanded_icon: String,
    pub contracted_icon: String,
    pub expanded_icon_visible: bool,
    pub contracted_icon_visible: bool,

    /// Root markup of the selection control, when one was created.
    pub checkbox: Option<String>,

    pub value: CellContent,

    /// "(n)" or empty.
    pub child_count: String,

    /// `None` when padding is suppressed or the cell did not render.
    pub indent: Option<Indent>,
}

impl GroupCellView {
    /// The view of a cell that renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Serializes the view to the cell's markup template.
    pub fn to_markup(&self) -> String {
        let style = self
            .indent
            .map(|i| format!(r#" style="{}""#, i.to_style()))
            .unwrap_or_default();

        let mut out = format!("<span{}>", style);
        out.push_str(&slot("group-expanded", &self.expanded_icon, self.expanded_icon_visible));
        out.push_str(&slot(
            "group-contracted",
            &self.contracted_icon,
            self.contracted_icon_visible,
        ));
        out.push_str(&slot(
            "group-checkbox",
            self.checkbox.as_deref().unwrap_or(""),
            true,
        ));
        out.push_str(&slot("group-value", &self.value.to_markup(), true));
        out.push_str(&slot("group-child-count", &escape_text(&self.child_count), true));
        out.push_str("</span>");
        out
    }
}

fn slot(class: &str, inner: &str, visible: bool) -> String {
    if visible {
        format!(r#"<span class="{}">{}</span>"#, class, inner)
    } else {
        format!(r#"<span class="{} hidden">{}</span>"#, class, inner)
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
