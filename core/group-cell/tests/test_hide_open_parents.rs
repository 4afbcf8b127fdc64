//! FILENAME: core/group-cell/tests/test_hide_open_parents.rs
//! PURPOSE: Promotion of the driving node when open parents are hidden, and
//! the placement gates that decide whether a cell renders at all.

mod common;

use common::*;
use group_cell::{
    CellContent, CellInput, GroupCellView, IconState, InputOutcome, PresentationConfig,
    RenderParams,
};
use row_tree::{Column, ListenerId, Pinned, RowTreeAccess};

fn hide_open_parents() -> PresentationConfig {
    PresentationConfig { group_hide_open_parents: true, ..PresentationConfig::default() }
}

/// One column per grouping level, as used with hidden open parents.
fn level_params(node: row_tree::NodeId, column: row_tree::ColumnId) -> RenderParams {
    let mut params = RenderParams::new(node, column);
    params.restrict_to_one_group = true;
    params
}

// ============================================================================
// PROMOTION
// ============================================================================

#[test]
fn test_first_child_shows_hidden_parent_in_its_column() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);

    let cell = h.render(level_params(o.ireland_2008, country()));

    let cell = h.cell(cell);
    assert!(cell.node_was_swapped());
    assert_eq!(cell.driving_node(), Some(o.ireland));
    assert_eq!(cell.original_params().map(|p| p.node), Some(o.ireland_2008));
    assert_eq!(cell.view().value, CellContent::Text("Ireland".to_string()));
    assert_eq!(cell.view().child_count, "(3)");
    h.destroy_all();
}

#[test]
fn test_promotion_climbs_through_first_children() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);

    let sport_cell = h.render(level_params(o.ireland_2008_first, sport()));
    let country_cell = h.render(level_params(o.ireland_2008_first, country()));

    assert_eq!(h.cell(sport_cell).driving_node(), Some(o.swimming));
    assert_eq!(h.cell(country_cell).driving_node(), Some(o.ireland));
    assert!(h.cell(sport_cell).is_rendered());
    assert!(h.cell(country_cell).is_rendered());
    h.destroy_all();
}

#[test]
fn test_later_sibling_is_not_promoted_and_stays_gated() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);

    let second_year = h.render(level_params(o.ireland_2012, country()));
    let norway_leaf = h.render(level_params(o.norway_2008_first, sport()));

    for cell in [second_year, norway_leaf] {
        assert!(!h.cell(cell).node_was_swapped());
        assert!(!h.cell(cell).is_rendered());
        assert_eq!(h.tree.subscriptions_of(ListenerId(cell as u64)), 0);
    }
    h.destroy_all();
}

#[test]
fn test_promotion_overwrites_caller_values() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);

    let params = level_params(o.ireland_2008_first, country())
        .with_value("Phelps")
        .with_actual_value("Michael Phelps");
    let cell = h.render(params);

    let effective = h.cell(cell).params().cloned().unwrap();
    assert_eq!(effective.value.as_deref(), Some("Ireland"));
    assert_eq!(effective.actual_value.as_deref(), Some("Ireland"));

    let original = h.cell(cell).original_params().cloned().unwrap();
    assert_eq!(original.value.as_deref(), Some("Phelps"));
    assert_eq!(original.actual_value.as_deref(), Some("Michael Phelps"));
    h.destroy_all();
}

#[test]
fn test_without_hide_open_parents_nothing_is_promoted() {
    let mut h = TestHarness::new(PresentationConfig::default());
    let o = build_olympics(&mut h.tree);

    let cell = h.render(RenderParams::new(o.ireland_2008, country()));

    assert!(!h.cell(cell).node_was_swapped());
    assert_eq!(h.cell(cell).driving_node(), Some(o.ireland_2008));
    assert_eq!(h.cell(cell).view().value, CellContent::Text("2008".to_string()));
    h.destroy_all();
}

#[test]
fn test_original_row_group_column_selects_promotion_target() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);

    let params = level_params(o.ireland_2008, auto_group()).with_original_row_group_column(sport());
    let cell = h.render(params);

    assert_eq!(h.cell(cell).driving_node(), Some(o.swimming));
    assert_eq!(h.cell(cell).view().value, CellContent::Text("Swimming".to_string()));
    h.destroy_all();
}

#[test]
fn test_promoted_cell_toggles_and_tracks_the_parent() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);
    h.tree.set_expanded(o.ireland, true).unwrap();
    h.tree.take_dispatch();

    let cell = h.render(level_params(o.ireland_2008, country()));
    assert_eq!(h.cell(cell).icon_state(), IconState::Expanded);

    let outcome = h.input(cell, CellInput::ExpandedIconClick);
    h.dispatch();

    assert_eq!(
        outcome,
        InputOutcome::Toggled { node: o.ireland, expanded: false, refresh_requested: false }
    );
    assert!(!h.tree.node(o.ireland).unwrap().expanded);
    assert!(!h.tree.node(o.ireland_2008).unwrap().expanded);
    assert_eq!(h.cell(cell).icon_state(), IconState::Contracted);
    h.destroy_all();
}

#[test]
fn test_reinit_after_sibling_removal_picks_up_new_first_child() {
    let mut h = TestHarness::new(hide_open_parents());
    let o = build_olympics(&mut h.tree);

    let cell = h.render(level_params(o.ireland_2012, country()));
    assert!(!h.cell(cell).is_rendered());

    h.tree.remove(o.ireland_2008).unwrap();
    let params = h.cell(cell).original_params().cloned().unwrap();
    h.cells[cell].init(&mut h.tree, &h.columns, params).unwrap();

    assert!(h.cell(cell).node_was_swapped());
    assert_eq!(h.cell(cell).driving_node(), Some(o.ireland));
    assert!(h.cell(cell).is_rendered());
    h.destroy_all();
    assert_eq!(h.tree.subscription_count(), 0);
}

// ============================================================================
// EMBEDDED FULL-WIDTH ROWS
// ============================================================================

fn embedded(enable_rtl: bool) -> PresentationConfig {
    PresentationConfig { embed_full_width_rows: true, enable_rtl, ..PresentationConfig::default() }
}

/// Renders the same group row into all three sections and reports which
/// of them produced a cell.
fn rendered_sections(h: &mut TestHarness, node: row_tree::NodeId) -> [bool; 3] {
    let left = h.render(RenderParams::new(node, auto_group()).with_pinned(Pinned::Left));
    let body = h.render(RenderParams::new(node, auto_group()));
    let right = h.render(RenderParams::new(node, auto_group()).with_pinned(Pinned::Right));
    [h.cell(left).is_rendered(), h.cell(body).is_rendered(), h.cell(right).is_rendered()]
}

#[test]
fn test_embedded_row_without_pinning_renders_in_body() {
    let mut h = TestHarness::new(embedded(false));
    let o = build_olympics(&mut h.tree);

    assert_eq!(rendered_sections(&mut h, o.ireland), [false, true, false]);
    h.destroy_all();
}

#[test]
fn test_embedded_row_with_left_pinning_renders_in_leading_section() {
    let mut ltr = TestHarness::new(embedded(false));
    let o = build_olympics(&mut ltr.tree);
    ltr.columns.add_column(Column::new("athlete").with_pinned(Pinned::Left));
    assert_eq!(rendered_sections(&mut ltr, o.ireland), [true, false, false]);
    ltr.destroy_all();

    let mut rtl = TestHarness::new(embedded(true));
    let o = build_olympics(&mut rtl.tree);
    rtl.columns.add_column(Column::new("athlete").with_pinned(Pinned::Left));
    assert_eq!(rendered_sections(&mut rtl, o.ireland), [false, false, true]);
    rtl.destroy_all();
}

#[test]
fn test_without_embedding_every_section_renders() {
    let mut h = TestHarness::new(PresentationConfig::default());
    let o = build_olympics(&mut h.tree);
    h.columns.add_column(Column::new("athlete").with_pinned(Pinned::Left));

    assert_eq!(rendered_sections(&mut h, o.ireland), [true, true, true]);
    h.destroy_all();
}

#[test]
fn test_gated_cell_ignores_input_and_events() {
    let mut h = TestHarness::new(embedded(false));
    let o = build_olympics(&mut h.tree);

    let gated = h.render(RenderParams::new(o.ireland, auto_group()).with_pinned(Pinned::Left));

    assert_eq!(h.input(gated, CellInput::ContractedIconClick), InputOutcome::Ignored);
    assert!(!h.tree.node(o.ireland).unwrap().expanded);

    h.tree.set_expanded(o.ireland, true).unwrap();
    h.dispatch();
    assert_eq!(h.cell(gated).view(), &GroupCellView::empty());
    h.destroy_all();
}
