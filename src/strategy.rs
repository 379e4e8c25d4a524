use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// The search discipline used to value adversary nodes.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exact minimax: adversaries pick the child with the lowest value.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning. Same decisions as [`Strategy::Minimax`], fewer nodes.
    AlphaBeta,
    /// Adversaries move uniformly at random and their nodes take the average child value.
    Expectimax,
}

impl Strategy {
    /// The kind of node an adversary move produces under this strategy.
    pub fn adversary_node(self) -> NodeKind {
        match self {
            Strategy::Minimax | Strategy::AlphaBeta => NodeKind::Min,
            Strategy::Expectimax => NodeKind::Chance,
        }
    }

    /// Returns `true` if Max and Min nodes narrow the alpha-beta window and cut off subtrees.
    pub fn prunes(self) -> bool {
        self == Strategy::AlphaBeta
    }

    /// Returns the name of the strategy as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Role of a search node.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum NodeKind {
    /// The protagonist moves and takes the best child.
    Max,
    /// An adversary moves and takes the worst child for the protagonist.
    Min,
    /// An adversary moves at random; the node is worth the mean of its children.
    Chance,
}

/// The values each side can already guarantee elsewhere in the tree.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Window {
    /// Best value the maximizer is assured of.
    pub alpha: f64,
    /// Best value the minimizer is assured of.
    pub beta: f64,
}

impl Window {
    /// The window at the root, where nothing is known yet.
    pub const fn unbounded() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Folds the values of a node's children, in the oracle's order, into the node's value.
///
/// This is where the three strategies differ; everything else in the search is shared. A
/// pruning fold breaks out as soon as the remaining children cannot affect the decision.
#[derive(Debug, Clone)]
pub struct Fold {
    kind: NodeKind,
    prune: bool,
    window: Window,
    value: f64,
    children: usize,
}

impl Fold {
    /// Starts a fold for a node of `kind` with `children` legal actions.
    pub fn new(kind: NodeKind, prune: bool, window: Window, children: usize) -> Self {
        let value = match kind {
            NodeKind::Max => f64::NEG_INFINITY,
            NodeKind::Min => f64::INFINITY,
            NodeKind::Chance => 0.0,
        };
        Self {
            kind,
            prune: prune && kind != NodeKind::Chance,
            window,
            value,
            children,
        }
    }

    /// The window to search the next child with.
    pub fn window(&self) -> Window {
        if self.prune {
            self.window
        } else {
            Window::unbounded()
        }
    }

    /// Adds the value of the next child. Breaks with the node's value on a cutoff.
    pub fn push(&mut self, child: f64) -> ControlFlow<f64> {
        match self.kind {
            NodeKind::Max => {
                self.value = self.value.max(child);
                if self.prune {
                    if self.value > self.window.beta {
                        return ControlFlow::Break(self.value);
                    }
                    self.window.alpha = self.window.alpha.max(self.value);
                }
            }
            NodeKind::Min => {
                self.value = self.value.min(child);
                if self.prune {
                    if self.value < self.window.alpha {
                        return ControlFlow::Break(self.value);
                    }
                    self.window.beta = self.window.beta.min(self.value);
                }
            }
            NodeKind::Chance => {
                self.value += child;
            }
        }
        ControlFlow::Continue(())
    }

    /// Returns the node's value once every child has been pushed. A chance node weighs each
    /// child by `1 / children`.
    pub fn finish(self) -> f64 {
        match self.kind {
            NodeKind::Chance if self.children == 0 => 0.0,
            NodeKind::Chance => self.value / self.children as f64,
            NodeKind::Max | NodeKind::Min => self.value,
        }
    }
}
