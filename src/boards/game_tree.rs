use std::rc::Rc;

use ego_tree::{NodeId, NodeRef, Tree};

use crate::evaluation::Scored;
use crate::state::{AgentIndex, GameOutcome, GameState};

/// Labels given to the children of nodes built by [`GameTree::complete`].
const ACTION_LABELS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Label of the forced moves added by [`GameTree::pad_to_horizon`].
pub const STOP: &str = "Stop";

#[derive(Debug, Clone)]
struct TreeNode {
    action: Option<&'static str>,
    value: f64,
    outcome: GameOutcome,
}

/// A game spelled out as an explicit tree.
///
/// Every node carries a value (its score) and an outcome. Children are labelled with the action
/// leading to them. The mover at a node is implied by its depth: agents take turns in index
/// order starting with the protagonist at the root, so the tree does not check which agent asks
/// for the legal actions.
///
/// Terminal nodes may be given children, which lets a fixture check that the search never
/// expands them.
///
/// ```rust
/// use adversarial_search::boards::game_tree::GameTree;
/// use adversarial_search::state::GameState;
///
/// let mut tree = GameTree::new(2, 0.0);
/// let root = tree.root();
/// let left = tree.add_child(root, "Left", 1.0).unwrap();
/// tree.add_child(left, "Up", 4.0).unwrap();
///
/// let state = tree.into_state();
/// assert_eq!(state.legal_actions(0), vec!["Left"]);
/// ```
#[derive(Debug, Clone)]
pub struct GameTree {
    num_agents: usize,
    tree: Tree<TreeNode>,
}

impl GameTree {
    /// Creates a tree holding only a root with the given value.
    pub fn new(num_agents: usize, root_value: f64) -> Self {
        Self {
            num_agents,
            tree: Tree::new(TreeNode {
                action: None,
                value: root_value,
                outcome: GameOutcome::InProgress,
            }),
        }
    }

    /// Builds a tree in which every node at fewer than `generations` moves from the root has
    /// `branching` children. Leaves take their values from `leaf_values` in depth-first order,
    /// wrapping around when the slice is shorter than the number of leaves. Inner nodes are
    /// worth 0.
    pub fn complete(
        num_agents: usize,
        branching: usize,
        generations: usize,
        leaf_values: &[f64],
    ) -> Self {
        let branching = branching.min(ACTION_LABELS.len());
        let mut game_tree = GameTree::new(num_agents, 0.0);
        let mut next_leaf = 0;
        let root = game_tree.root();
        game_tree.grow(root, branching, generations, leaf_values, &mut next_leaf);
        game_tree
    }

    fn grow(
        &mut self,
        parent: NodeId,
        branching: usize,
        remaining: usize,
        leaf_values: &[f64],
        next_leaf: &mut usize,
    ) {
        if remaining == 0 {
            return;
        }
        for &label in ACTION_LABELS.iter().take(branching) {
            let value = if remaining == 1 && !leaf_values.is_empty() {
                let value = leaf_values[*next_leaf % leaf_values.len()];
                *next_leaf += 1;
                value
            } else {
                0.0
            };
            let Some(child) = self.add_child(parent, label, value) else {
                return;
            };
            self.grow(child, branching, remaining - 1, leaf_values, next_leaf);
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    /// Number of agents taking turns in this game.
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Number of nodes in the tree, the root included.
    pub fn len(&self) -> usize {
        self.tree.nodes().count()
    }

    /// Returns `true` if the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        !self.tree.root().has_children()
    }

    /// Adds a non-terminal child reached by playing `action` at `parent`.
    ///
    /// Returns `None` if this tree has no node `parent`. Ids are plain indices, so an id taken
    /// from another tree is only caught when it is out of range for this one.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        action: &'static str,
        value: f64,
    ) -> Option<NodeId> {
        self.append(parent, action, value, GameOutcome::InProgress)
    }

    /// Adds a child at which the game is over. Returns `None` under the same conditions as
    /// [`add_child`](GameTree::add_child).
    pub fn add_terminal(
        &mut self,
        parent: NodeId,
        action: &'static str,
        value: f64,
        outcome: GameOutcome,
    ) -> Option<NodeId> {
        self.append(parent, action, value, outcome)
    }

    fn append(
        &mut self,
        parent: NodeId,
        action: &'static str,
        value: f64,
        outcome: GameOutcome,
    ) -> Option<NodeId> {
        let mut parent = self.tree.get_mut(parent)?;
        let child = parent.append(TreeNode {
            action: Some(action),
            value,
            outcome,
        });
        Some(child.id())
    }

    /// Extends every childless, non-terminal node that is fewer than `generations` moves from
    /// the root with a chain of forced [`STOP`] moves ending at that depth. The added nodes keep
    /// the value of the node they extend.
    pub fn pad_to_horizon(&mut self, generations: usize) {
        let open: Vec<(NodeId, usize, f64)> = self
            .tree
            .nodes()
            .filter(|node| !node.has_children() && !node.value().outcome.is_over())
            .map(|node| (node.id(), node.ancestors().count(), node.value().value))
            .filter(|&(_, generation, _)| generation < generations)
            .collect();

        for (id, generation, value) in open {
            let mut tip = Some(id);
            for _ in generation..generations {
                tip = tip.and_then(|tip| self.add_child(tip, STOP, value));
            }
        }
    }

    /// Returns the state at the root of the tree.
    pub fn into_state(self) -> TreeState {
        let node = self.root();
        TreeState {
            tree: Rc::new(self),
            node,
        }
    }
}

/// A position in a [`GameTree`].
#[derive(Debug, Clone)]
pub struct TreeState {
    tree: Rc<GameTree>,
    node: NodeId,
}

// States are only created for nodes of their own tree, so the lookups below always succeed.
impl TreeState {
    fn node_ref(&self) -> Option<NodeRef<'_, TreeNode>> {
        self.tree.tree.get(self.node)
    }

    fn has_outcome(&self, outcome: GameOutcome) -> bool {
        self.node_ref()
            .is_some_and(|node| node.value().outcome == outcome)
    }

    /// The node this state stands at.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The value stored at this node.
    pub fn value(&self) -> f64 {
        self.node_ref().map_or(0.0, |node| node.value().value)
    }

    /// The actions leading from the root to this node.
    pub fn path(&self) -> Vec<&'static str> {
        let Some(node) = self.node_ref() else {
            return Vec::new();
        };
        let mut path: Vec<&'static str> = std::iter::once(node)
            .chain(node.ancestors())
            .filter_map(|n| n.value().action)
            .collect();
        path.reverse();
        path
    }

    /// Number of moves between the root and this node.
    pub fn generation(&self) -> usize {
        self.node_ref().map_or(0, |node| node.ancestors().count())
    }
}

impl GameState for TreeState {
    type Action = &'static str;

    fn num_agents(&self) -> usize {
        self.tree.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Self::Action> {
        self.node_ref()
            .into_iter()
            .flat_map(|node| node.children())
            .filter_map(|child| child.value().action)
            .collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &Self::Action) -> Option<Self> {
        let child = self
            .node_ref()?
            .children()
            .find(|child| child.value().action == Some(*action))?;
        Some(TreeState {
            tree: Rc::clone(&self.tree),
            node: child.id(),
        })
    }

    fn is_win(&self) -> bool {
        self.has_outcome(GameOutcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.has_outcome(GameOutcome::Lose)
    }

    fn is_terminal(&self) -> bool {
        self.node_ref()
            .is_some_and(|node| node.value().outcome.is_over())
    }
}

impl Scored for TreeState {
    fn score(&self) -> f64 {
        self.value()
    }
}
