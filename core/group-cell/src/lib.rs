//! FILENAME: core/group-cell/src/lib.rs
//! Group cell presentation for grouped grid rows.
//!
//! Decides, for one row of a grouped grid, what the group column shows and
//! how the hierarchy is presented: expand/contract icons, indentation,
//! optional selection checkbox, the cell content and a live child count.
//! It depends on `row-tree` for node data and notifications only.
//!
//! Layers:
//! - `params` / `config`: What a cell is asked to render
//! - `promotion` / `placement`: WHICH node drives the cell, and WHETHER it renders
//! - `indent` / `content` / `child_count` / `expand`: HOW each part is presented
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `renderer`: The cell component tying the parts together

pub mod child_count;
pub mod config;
pub mod content;
pub mod error;
pub mod expand;
pub mod group_value;
pub mod indent;
pub mod params;
pub mod placement;
pub mod promotion;
pub mod renderer;
pub mod services;
pub mod view;

pub use config::PresentationConfig;
pub use content::ContentMode;
pub use error::GroupCellError;
pub use expand::{CellInput, ExpandContractController, IconState, InputOutcome, KeyCode};
pub use params::{CheckboxSpec, FooterValueGetter, RenderParams};
pub use placement::Section;
pub use promotion::resolve_promoted_node;
pub use renderer::GroupCellRenderer;
pub use services::{
    CellComponent, CellRendererRegistry, CellServices, DefaultIcons, ExpressionEvaluator,
    IconFactory, RowRefresher, SelectionControlFactory,
};
pub use view::{CellContent, Edge, GroupCellView, Indent};
