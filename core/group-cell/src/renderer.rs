//! FILENAME: core/group-cell/src/renderer.rs
//! Group Cell Renderer - one cell of the group column.
//!
//! Lifecycle:
//! 1. `set_params`: keep the caller's params, derive the effective params
//!    (promoted node, group values).
//! 2. `init`: run the placement gates; if they pass, set up icons,
//!    checkbox, content and indentation, subscribing to the driving node.
//! 3. `on_node_event` / `handle_input`: incremental updates.
//! 4. `destroy`: release subscriptions and owned components, newest first.

use std::rc::Rc;

use row_tree::{
    ColumnModel, ListenerId, NodeEvent, NodeEventKind, NodeId, RowNode, RowTreeAccess,
    SubscriptionId, TreeError,
};
use smallvec::SmallVec;

use crate::child_count;
use crate::content::produce_content;
use crate::error::GroupCellError;
use crate::expand::{CellInput, ExpandContractController, IconState, InputOutcome};
use crate::group_value::assign_group_values;
use crate::indent::indent_for;
use crate::params::RenderParams;
use crate::placement::{is_embedded_row_mismatch, is_group_key_mismatch, Section};
use crate::promotion::resolve_promoted_node;
use crate::services::{CellComponent, CellServices};
use crate::view::GroupCellView;

/// Something acquired during setup and released on teardown.
enum Teardown {
    Subscription(SubscriptionId),
    Component(Box<dyn CellComponent>),
}

pub struct GroupCellRenderer {
    services: Rc<CellServices>,
    listener: ListenerId,

    /// The params exactly as the caller supplied them.
    original_params: Option<RenderParams>,

    /// Derived params the cell renders from.
    params: Option<RenderParams>,

    node_was_swapped: bool,

    /// The params the current render was built from. Present once the
    /// gates passed and the parts are set up; the view, the icon state and
    /// every subscription belong to this node until the next `init`.
    rendered: Option<RenderParams>,

    tracks_child_count: bool,
    tracks_padding: bool,

    expand: ExpandContractController,
    view: GroupCellView,

    /// Acquisition order; released back to front.
    teardown: SmallVec<[Teardown; 6]>,
}

impl GroupCellRenderer {
    /// `listener` identifies this cell to the tree's notification registry.
    pub fn new(services: Rc<CellServices>, listener: ListenerId) -> Self {
        GroupCellRenderer {
            services,
            listener,
            original_params: None,
            params: None,
            node_was_swapped: false,
            rendered: None,
            tracks_child_count: false,
            tracks_padding: false,
            expand: ExpandContractController::new(),
            view: GroupCellView::empty(),
            teardown: SmallVec::new(),
        }
    }

    // ========================================================================
    // PARAMETERS
    // ========================================================================

    /// Takes new params without rendering. The caller's value is stored
    /// untouched; the effective params are a derived copy.
    ///
    /// A rendered cell keeps showing, and reacting for, the node it was
    /// rendered for until `init` is called again.
    pub fn set_params(&mut self, tree: &dyn RowTreeAccess, params: RenderParams) {
        let mut effective = params.clone();
        self.node_was_swapped = false;

        if self.services.config.group_hide_open_parents {
            let target = params.target_group_column();
            if let Some(promoted) = resolve_promoted_node(tree, params.node, target) {
                log::debug!("GROUPCELL|promoted node {} -> {}", params.node, promoted);
                effective.node = promoted;
                self.node_was_swapped = true;
            }
        }
        assign_group_values(tree, &mut effective, self.node_was_swapped);

        self.original_params = Some(params);
        self.params = Some(effective);
    }

    /// The params as the caller supplied them, before any node swap.
    pub fn original_params(&self) -> Option<&RenderParams> {
        self.original_params.as_ref()
    }

    /// The params the cell renders from.
    pub fn params(&self) -> Option<&RenderParams> {
        self.params.as_ref()
    }

    pub fn node_was_swapped(&self) -> bool {
        self.node_was_swapped
    }

    /// The node whose state drives the cell.
    pub fn driving_node(&self) -> Option<NodeId> {
        self.params.as_ref().map(|p| p.node)
    }

    // ========================================================================
    // SETUP
    // ========================================================================

    /// Renders the cell for `params`. Calling it again re-renders from
    /// scratch, releasing whatever the previous render held.
    pub fn init(
        &mut self,
        tree: &mut dyn RowTreeAccess,
        columns: &ColumnModel,
        params: RenderParams,
    ) -> Result<(), GroupCellError> {
        self.destroy(tree);
        self.set_params(&*tree, params);

        let Some(params) = self.params.clone() else {
            return Ok(());
        };
        let node = tree
            .node(params.node)
            .ok_or(TreeError::NodeNotFound(params.node))?;

        if !self.passes_gates(node, columns, &params) {
            log::debug!("GROUPCELL|cell for node {} gated out", params.node);
            return Ok(());
        }

        self.add_expand_and_contract(tree, columns, &params)?;
        self.add_checkbox_if_needed(tree, &params)?;
        self.add_value(tree, columns, &params)?;
        self.add_padding(tree, columns, &params)?;
        self.rendered = Some(params);
        Ok(())
    }

    fn passes_gates(&self, node: &RowNode, columns: &ColumnModel, params: &RenderParams) -> bool {
        let config = &self.services.config;

        let group_key_mismatch = is_group_key_mismatch(
            params.restrict_to_one_group,
            self.node_was_swapped,
            node.row_group_column.as_ref(),
            params.target_group_column(),
        );
        let embedded_row_mismatch = is_embedded_row_mismatch(
            config.embed_full_width_rows,
            config.enable_rtl,
            columns.is_pinning_left(),
            Section::from(params.pinned),
        );

        !group_key_mismatch && !embedded_row_mismatch
    }

    fn subscribe(&mut self, tree: &mut dyn RowTreeAccess, node: NodeId, kind: NodeEventKind) {
        let id = tree.subscribe(node, kind, self.listener);
        self.teardown.push(Teardown::Subscription(id));
    }

    fn add_expand_and_contract(
        &mut self,
        tree: &mut dyn RowTreeAccess,
        columns: &ColumnModel,
        params: &RenderParams,
    ) -> Result<(), GroupCellError> {
        self.view.expanded_icon = self.services.icons.group_expanded();
        self.view.contracted_icon = self.services.icons.group_contracted();

        self.subscribe(tree, params.node, NodeEventKind::ExpandedChanged);
        self.show_expand_and_contract_icons(&*tree, columns, params.node)
    }

    fn show_expand_and_contract_icons(
        &mut self,
        tree: &dyn RowTreeAccess,
        columns: &ColumnModel,
        node_id: NodeId,
    ) -> Result<(), GroupCellError> {
        let node = tree.node(node_id).ok_or(TreeError::NodeNotFound(node_id))?;
        let expandable = tree.is_expandable(node_id);
        self.expand
            .refresh(node, expandable, columns.is_pivot_mode(), &mut self.view);
        Ok(())
    }

    fn add_checkbox_if_needed(
        &mut self,
        tree: &dyn RowTreeAccess,
        params: &RenderParams,
    ) -> Result<(), GroupCellError> {
        let node = tree.node(params.node).ok_or(TreeError::NodeNotFound(params.node))?;
        // Footers, floating rows and flowers cannot be selected.
        let needed = params.checkbox.wants_checkbox(params) && !node.is_unselectable();
        if needed {
            let control = self.services.selection.create(node.id);
            self.view.checkbox = Some(control.gui());
            self.teardown.push(Teardown::Component(control));
        }
        Ok(())
    }

    fn add_value(
        &mut self,
        tree: &mut dyn RowTreeAccess,
        columns: &ColumnModel,
        params: &RenderParams,
    ) -> Result<(), GroupCellError> {
        let node = tree.node(params.node).ok_or(TreeError::NodeNotFound(params.node))?;
        let outcome = produce_content(node, columns, &self.services, params);
        let count_label = child_count::label_for(node);

        self.view.value = outcome.content;
        if let Some(component) = outcome.component {
            self.teardown.push(Teardown::Component(component));
        }

        if outcome.mode.shows_child_count() && !params.suppress_count {
            self.tracks_child_count = true;
            self.view.child_count = count_label;
            self.subscribe(tree, params.node, NodeEventKind::AllChildrenCountChanged);
        }
        Ok(())
    }

    fn add_padding(
        &mut self,
        tree: &mut dyn RowTreeAccess,
        columns: &ColumnModel,
        params: &RenderParams,
    ) -> Result<(), GroupCellError> {
        // An explicit indent replaces the theme's own padding, so nothing is
        // written at all when padding is suppressed.
        if params.suppress_padding {
            return Ok(());
        }
        self.tracks_padding = true;
        self.subscribe(tree, params.node, NodeEventKind::UiLevelChanged);
        self.set_padding(&*tree, columns, params)
    }

    fn set_padding(
        &mut self,
        tree: &dyn RowTreeAccess,
        columns: &ColumnModel,
        params: &RenderParams,
    ) -> Result<(), GroupCellError> {
        let node = tree.node(params.node).ok_or(TreeError::NodeNotFound(params.node))?;
        let indent = indent_for(
            node,
            params.padding,
            tree.is_expandable(params.node),
            columns.is_pivot_mode(),
            self.services.config.enable_rtl,
        );
        self.view.indent = Some(indent);
        Ok(())
    }

    // ========================================================================
    // INCREMENTAL UPDATES
    // ========================================================================

    /// Handles a notification delivered by the tree. Events for other nodes,
    /// or for parts this cell does not track, are ignored.
    pub fn on_node_event(
        &mut self,
        tree: &dyn RowTreeAccess,
        columns: &ColumnModel,
        event: &NodeEvent,
    ) -> Result<(), GroupCellError> {
        let Some(params) = self.rendered.clone() else {
            return Ok(());
        };
        if event.node != params.node {
            return Ok(());
        }

        match event.kind {
            NodeEventKind::ExpandedChanged => {
                self.show_expand_and_contract_icons(tree, columns, params.node)?;
            }
            NodeEventKind::UiLevelChanged if self.tracks_padding => {
                self.set_padding(tree, columns, &params)?;
            }
            NodeEventKind::AllChildrenCountChanged if self.tracks_child_count => {
                let node = tree.node(params.node).ok_or(TreeError::NodeNotFound(params.node))?;
                self.view.child_count = child_count::label_for(node);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles user input on the cell. A toggle asks the tree to flip the
    /// rendered node's expansion; the icons follow once the tree's
    /// expansion notification is delivered back.
    pub fn handle_input(
        &mut self,
        tree: &mut dyn RowTreeAccess,
        input: CellInput,
    ) -> Result<InputOutcome, GroupCellError> {
        let Some(node_id) = self.rendered.as_ref().map(|p| p.node) else {
            return Ok(InputOutcome::Ignored);
        };
        if !ExpandContractController::is_activation(input, self.services.config.enable_group_edit) {
            return Ok(InputOutcome::Ignored);
        }
        if !self.expand.can_toggle() {
            return Ok(InputOutcome::Ignored);
        }
        // The icon state is only as fresh as the last expansion notification.
        if !tree.is_expandable(node_id) {
            log::debug!("GROUPCELL|node {} no longer expandable, toggle ignored", node_id);
            return Ok(InputOutcome::Ignored);
        }
        self.on_expand_or_contract(tree, node_id)
    }

    fn on_expand_or_contract(
        &mut self,
        tree: &mut dyn RowTreeAccess,
        node_id: NodeId,
    ) -> Result<InputOutcome, GroupCellError> {
        let expanded = !tree
            .node(node_id)
            .ok_or(TreeError::NodeNotFound(node_id))?
            .expanded;
        tree.set_expanded(node_id, expanded)?;

        let refresh_requested = self.services.config.group_include_footer;
        if refresh_requested {
            self.services.refresher.refresh_rows(&[node_id]);
        }

        Ok(InputOutcome::Toggled {
            node: node_id,
            expanded,
            refresh_requested,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The cell's content root.
    pub fn view(&self) -> &GroupCellView {
        &self.view
    }

    pub fn icon_state(&self) -> IconState {
        self.expand.state()
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.is_some()
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    // ========================================================================
    // TEARDOWN
    // ========================================================================

    /// Releases subscriptions and destroys owned components in reverse
    /// order of creation. Safe to call any number of times.
    pub fn destroy(&mut self, tree: &mut dyn RowTreeAccess) {
        while let Some(item) = self.teardown.pop() {
            match item {
                Teardown::Subscription(id) => {
                    // Removing a node drops its subscriptions with it.
                    if let Err(e) = tree.unsubscribe(id) {
                        log::debug!("GROUPCELL|cell {:?}: {}", self.listener, e);
                    }
                }
                Teardown::Component(mut component) => component.destroy(),
            }
        }
        self.rendered = None;
        self.tracks_child_count = false;
        self.tracks_padding = false;
        self.expand = ExpandContractController::new();
        self.view = GroupCellView::empty();
    }
}

impl Drop for GroupCellRenderer {
    fn drop(&mut self) {
        let leaked = self
            .teardown
            .iter()
            .filter(|t| matches!(t, Teardown::Subscription(_)))
            .count();
        if leaked > 0 {
            log::warn!(
                "GROUPCELL|cell {:?} dropped without destroy, {} subscriptions left on the tree",
                self.listener,
                leaked
            );
        }
        // Components can still be released without the tree.
        while let Some(item) = self.teardown.pop() {
            if let Teardown::Component(mut component) = item {
                component.destroy();
            }
        }
    }
}
