use std::collections::HashMap;

use menubar_types::{MenuKey, MenuNode};
use ratatui::{layout::Rect, widgets::ListState};

/// Position of a node as child indices from the category's root list.
pub type NodePath = Vec<usize>;

/// Per-node instance data for a mounted tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeInstance {
    pub expanded: bool,
}

/// One line of the flattened, currently visible tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub path: NodePath,
    pub depth: usize,
    pub name: String,
    pub has_children: bool,
    pub expanded: bool,
}

/// Expand state and cursor for the menu tree of one menu/category pair.
///
/// Instances live in an arena keyed by [`NodePath`], so siblings never share
/// state. Mounting a different menu/category clears the arena, which returns
/// every node to collapsed. Collapsing a node unmounts its descendants, so
/// re-expanding it shows them collapsed again.
#[derive(Debug, Default)]
pub struct MenuTreeState {
    mount_key: Option<(MenuKey, Option<String>)>,
    instances: HashMap<NodePath, NodeInstance>,
    cursor: usize,
    pub list_state: ListState,
    /// Inner area of the last render; rows start at its top edge.
    pub last_area: Rect,
}

impl MenuTreeState {
    /// Mounts the tree for `menu`/`category`, resetting it when either changed.
    ///
    /// Returns `true` when the tree was remounted.
    pub fn mount(&mut self, menu: MenuKey, category: Option<&str>) -> bool {
        let key = (menu, category.map(str::to_string));
        if self.mount_key.as_ref() == Some(&key) {
            return false;
        }
        self.mount_key = Some(key);
        self.instances.clear();
        self.cursor = 0;
        self.list_state = ListState::default();
        true
    }

    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.instances.get(path).is_some_and(|instance| instance.expanded)
    }

    /// Flips the expand flag of the node at `path`. Leaves are left alone.
    pub fn toggle(&mut self, nodes: &[MenuNode], path: &[usize]) {
        let expanded = self.is_expanded(path);
        self.set_expanded(nodes, path, !expanded);
    }

    pub fn set_expanded(&mut self, nodes: &[MenuNode], path: &[usize], expanded: bool) {
        let Some(node) = node_at(nodes, path) else {
            return;
        };
        if node.is_leaf() {
            return;
        }
        if expanded {
            self.instances.entry(path.to_vec()).or_default().expanded = true;
        } else {
            self.instances
                .retain(|candidate, _| !(candidate.len() >= path.len() && candidate.starts_with(path)));
        }
    }

    /// Depth-first list of the rows currently shown.
    pub fn visible_rows(&self, nodes: &[MenuNode]) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut prefix = Vec::new();
        self.push_rows(nodes, &mut prefix, &mut rows);
        rows
    }

    fn push_rows(&self, nodes: &[MenuNode], prefix: &mut NodePath, rows: &mut Vec<VisibleRow>) {
        for (index, node) in nodes.iter().enumerate() {
            prefix.push(index);
            let has_children = !node.is_leaf();
            let expanded = has_children && self.is_expanded(prefix);
            rows.push(VisibleRow {
                path: prefix.clone(),
                depth: prefix.len() - 1,
                name: node.name.clone(),
                has_children,
                expanded,
            });
            if expanded {
                self.push_rows(node.children(), prefix, rows);
            }
            prefix.pop();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor by `delta` rows, clamped to the visible rows.
    pub fn move_cursor(&mut self, nodes: &[MenuNode], delta: isize) {
        let row_count = self.visible_rows(nodes).len();
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, row_count as isize - 1) as usize;
    }

    pub fn select_row(&mut self, nodes: &[MenuNode], row: usize) {
        let row_count = self.visible_rows(nodes).len();
        self.cursor = row.min(row_count.saturating_sub(1));
    }

    pub fn toggle_at_cursor(&mut self, nodes: &[MenuNode]) {
        if let Some(row) = self.visible_rows(nodes).get(self.cursor) {
            let path = row.path.clone();
            self.toggle(nodes, &path);
        }
        self.clamp_cursor(nodes);
    }

    pub fn expand_at_cursor(&mut self, nodes: &[MenuNode]) {
        if let Some(row) = self.visible_rows(nodes).get(self.cursor) {
            let path = row.path.clone();
            self.set_expanded(nodes, &path, true);
        }
    }

    /// Collapses the node under the cursor, or moves to its parent when it is
    /// already collapsed or a leaf.
    pub fn collapse_at_cursor(&mut self, nodes: &[MenuNode]) {
        let rows = self.visible_rows(nodes);
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        if row.expanded {
            let path = row.path.clone();
            self.set_expanded(nodes, &path, false);
            return;
        }
        if row.path.len() > 1 {
            let parent = &row.path[..row.path.len() - 1];
            if let Some(parent_row) = rows.iter().position(|candidate| candidate.path == parent) {
                self.cursor = parent_row;
            }
        }
    }

    fn clamp_cursor(&mut self, nodes: &[MenuNode]) {
        let row_count = self.visible_rows(nodes).len();
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }
}

/// Resolves a path against a root node list.
pub fn node_at<'a>(nodes: &'a [MenuNode], path: &[usize]) -> Option<&'a MenuNode> {
    let (first, rest) = path.split_first()?;
    let mut node = nodes.get(*first)?;
    for index in rest {
        node = node.children().get(*index)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::branch(
                "Parent",
                vec![MenuNode::branch("Child", vec![MenuNode::leaf("Grandchild")]), MenuNode::leaf("Second")],
            ),
            MenuNode::branch("Sibling", vec![MenuNode::leaf("Nephew")]),
            MenuNode::leaf("Leaf"),
        ]
    }

    fn names(state: &MenuTreeState, nodes: &[MenuNode]) -> Vec<String> {
        state.visible_rows(nodes).into_iter().map(|row| row.name).collect()
    }

    fn mounted() -> MenuTreeState {
        let mut state = MenuTreeState::default();
        state.mount(MenuKey::Menu1, Some("private"));
        state
    }

    #[test]
    fn collapsed_tree_shows_only_roots() {
        let nodes = tree();
        let state = mounted();
        assert_eq!(names(&state, &nodes), vec!["Parent", "Sibling", "Leaf"]);
        let rows = state.visible_rows(&nodes);
        assert!(rows[0].has_children && !rows[0].expanded);
        assert!(!rows[2].has_children);
    }

    #[test]
    fn toggle_reveals_and_hides_children_without_touching_siblings() {
        let nodes = vec![
            MenuNode::branch("Parent", vec![MenuNode::leaf("Child")]),
            MenuNode::branch("Other", vec![MenuNode::leaf("OtherChild")]),
        ];
        let mut state = mounted();
        state.toggle(&nodes, &[1]);
        assert_eq!(names(&state, &nodes), vec!["Parent", "Other", "OtherChild"]);

        state.toggle(&nodes, &[0]);
        assert_eq!(names(&state, &nodes), vec!["Parent", "Child", "Other", "OtherChild"]);

        state.toggle(&nodes, &[0]);
        assert_eq!(names(&state, &nodes), vec!["Parent", "Other", "OtherChild"]);
        assert!(state.is_expanded(&[1]));
    }

    #[test]
    fn double_toggle_restores_collapsed_rendering() {
        let nodes = tree();
        let mut state = mounted();
        let before = state.visible_rows(&nodes);
        state.toggle(&nodes, &[0]);
        state.toggle(&nodes, &[0]);
        assert_eq!(state.visible_rows(&nodes), before);
    }

    #[test]
    fn nested_rows_carry_depth_and_path() {
        let nodes = tree();
        let mut state = mounted();
        state.toggle(&nodes, &[0]);
        state.toggle(&nodes, &[0, 0]);
        let rows = state.visible_rows(&nodes);
        let grandchild = rows.iter().find(|row| row.name == "Grandchild").expect("grandchild visible");
        assert_eq!(grandchild.depth, 2);
        assert_eq!(grandchild.path, vec![0, 0, 0]);
    }

    #[test]
    fn collapsing_parent_unmounts_descendants() {
        let nodes = tree();
        let mut state = mounted();
        state.toggle(&nodes, &[0]);
        state.toggle(&nodes, &[0, 0]);
        state.toggle(&nodes, &[0]);
        state.toggle(&nodes, &[0]);
        assert!(!state.is_expanded(&[0, 0]));
        assert_eq!(names(&state, &nodes), vec!["Parent", "Child", "Second", "Sibling", "Leaf"]);
    }

    #[test]
    fn leaves_cannot_be_expanded() {
        let nodes = tree();
        let mut state = mounted();
        state.toggle(&nodes, &[2]);
        assert!(!state.is_expanded(&[2]));
        state.toggle(&nodes, &[9, 9]);
        assert!(!state.is_expanded(&[9, 9]));
    }

    #[test]
    fn remounting_another_category_resets_expansion() {
        let nodes = tree();
        let mut state = mounted();
        state.toggle(&nodes, &[0]);
        assert!(!state.mount(MenuKey::Menu1, Some("private")));
        assert!(state.is_expanded(&[0]));

        assert!(state.mount(MenuKey::Menu1, Some("corporate")));
        assert!(!state.is_expanded(&[0]));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cursor_keys_walk_and_fold_the_tree() {
        let nodes = tree();
        let mut state = mounted();
        state.expand_at_cursor(&nodes);
        state.move_cursor(&nodes, 1);
        assert_eq!(state.visible_rows(&nodes)[state.cursor()].name, "Child");

        state.collapse_at_cursor(&nodes);
        assert_eq!(state.cursor(), 0, "collapsed child jumps to parent");

        state.collapse_at_cursor(&nodes);
        assert_eq!(names(&state, &nodes), vec!["Parent", "Sibling", "Leaf"]);

        state.move_cursor(&nodes, 10);
        assert_eq!(state.cursor(), 2);
        state.move_cursor(&nodes, -10);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn toggle_at_cursor_keeps_cursor_in_range() {
        let nodes = tree();
        let mut state = mounted();
        state.toggle_at_cursor(&nodes);
        state.move_cursor(&nodes, 3);
        assert_eq!(state.visible_rows(&nodes)[state.cursor()].name, "Sibling");
        state.select_row(&nodes, 0);
        state.toggle_at_cursor(&nodes);
        assert_eq!(state.cursor(), 0);
        state.select_row(&nodes, 42);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn deep_nesting_renders_fully() {
        let mut node = MenuNode::leaf("depth-200");
        for depth in (0..200).rev() {
            node = MenuNode::branch(format!("depth-{depth}"), vec![node]);
        }
        let nodes = vec![node];
        let mut state = mounted();
        let mut path = vec![0];
        for _ in 0..200 {
            state.toggle(&nodes, &path);
            path.push(0);
        }
        let rows = state.visible_rows(&nodes);
        assert_eq!(rows.len(), 201);
        assert_eq!(rows.last().map(|row| row.depth), Some(200));
    }
}
