// Scripted game trees for search unit tests
//
// A `ScriptedGame` walks a pre-programmed tree instead of a real board, so
// the search tests control every move list and leaf value exactly. Nodes
// are declared level by level; each node's moves connect to the next
// declared nodes in order. A `leaf` carries a heuristic value and a
// self-looping dummy move (so it is not mistaken for a terminal position);
// a `leaf_terminal` has no moves at all.

use std::cell::Cell;
use std::rc::Rc;

use crate::game::{GameState, Move, MoveList, Player, Score};

struct Node {
    moves: Vec<(Move, usize)>,
    active: Player,
    value: Score,
}

pub struct Tree {
    nodes: Vec<Node>,
    empties: usize,
}

#[derive(Clone)]
pub struct ScriptedGame {
    node: usize,
    tree: Rc<Tree>,
}

impl ScriptedGame {
    /// Scripted heuristic value of the current node.
    pub fn value(&self) -> Score {
        self.tree.nodes[self.node].value
    }
}

impl GameState for ScriptedGame {
    fn active_player(&self) -> Player {
        self.tree.nodes[self.node].active
    }

    fn legal_moves_for(&self, player: Player) -> MoveList {
        if player == self.active_player() {
            self.tree.nodes[self.node]
                .moves
                .iter()
                .map(|&(mv, _)| mv)
                .collect()
        } else {
            MoveList::new()
        }
    }

    fn apply(&self, mv: Move) -> Self {
        let (_, child) = *self.tree.nodes[self.node]
            .moves
            .iter()
            .find(|&&(m, _)| m == mv)
            .expect("scripted move not in node's move list");
        ScriptedGame {
            node: child,
            tree: Rc::clone(&self.tree),
        }
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active_player() && self.tree.nodes[self.node].moves.is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active_player() && self.tree.nodes[self.node].moves.is_empty()
    }

    fn dimensions(&self) -> (usize, usize) {
        (3, 3)
    }

    fn empty_cell_count(&self) -> usize {
        self.tree.empties
    }
}

enum Decl {
    Interior(Vec<Move>, Score),
    Leaf(Score),
    Terminal,
}

pub struct TreeBuilder {
    decls: Vec<Decl>,
    empties: usize,
}

impl TreeBuilder {
    pub fn new() -> TreeBuilder {
        TreeBuilder {
            decls: Vec::new(),
            empties: 3,
        }
    }

    /// Interior node with the given moves, wired to the next declared
    /// nodes in order.
    pub fn node(self, moves: &[(i8, i8)]) -> TreeBuilder {
        self.node_valued(moves, 0.0)
    }

    /// Interior node that also carries a heuristic value, for trees where
    /// a shallow horizon read must disagree with the deeper truth.
    pub fn node_valued(mut self, moves: &[(i8, i8)], value: Score) -> TreeBuilder {
        self.decls.push(Decl::Interior(
            moves.iter().map(|&(r, c)| Move::new(r, c)).collect(),
            value,
        ));
        self
    }

    /// Non-terminal horizon node with a scripted heuristic value.
    pub fn leaf(mut self, value: Score) -> TreeBuilder {
        self.decls.push(Decl::Leaf(value));
        self
    }

    /// Node where the player to act has no legal moves.
    pub fn leaf_terminal(mut self) -> TreeBuilder {
        self.decls.push(Decl::Terminal);
        self
    }

    /// Empty-cell count reported by every state (the iterative deepening
    /// depth bound).
    pub fn empties(mut self, empties: usize) -> TreeBuilder {
        self.empties = empties;
        self
    }

    pub fn build(self, root: usize) -> ScriptedGame {
        let mut nodes: Vec<Node> = Vec::with_capacity(self.decls.len());
        let mut depth = vec![0usize; self.decls.len()];
        let mut next_child = 1usize;

        for (i, decl) in self.decls.iter().enumerate() {
            let moves = match decl {
                Decl::Interior(mvs, _) => {
                    let mut wired = Vec::with_capacity(mvs.len());
                    for &mv in mvs {
                        assert!(next_child < self.decls.len(), "tree is missing child nodes");
                        depth[next_child] = depth[i] + 1;
                        wired.push((mv, next_child));
                        next_child += 1;
                    }
                    wired
                }
                // Self-loop keeps the node non-terminal; the search never
                // expands it because tests stop at the depth horizon here.
                Decl::Leaf(_) => vec![(Move::new(0, 0), i)],
                Decl::Terminal => Vec::new(),
            };
            let value = match decl {
                Decl::Leaf(v) | Decl::Interior(_, v) => *v,
                Decl::Terminal => 0.0,
            };
            let active = if depth[i] % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            nodes.push(Node {
                moves,
                active,
                value,
            });
        }

        ScriptedGame {
            node: root,
            tree: Rc::new(Tree {
                nodes,
                empties: self.empties,
            }),
        }
    }
}

/// Heuristic reading the scripted leaf value.
pub fn leaf_value(game: &ScriptedGame, _player: Player) -> Score {
    game.value()
}

/// Accessor with effectively unlimited time remaining.
pub fn plenty_of_time() -> impl Fn() -> f64 {
    || 1_000_000.0
}

/// Accessor that is already out of time.
pub fn no_time() -> impl Fn() -> f64 {
    || 0.0
}

/// Accessor that survives exactly `checks` deadline checks, then expires.
pub fn countdown(checks: u32) -> impl Fn() -> f64 {
    let calls = Cell::new(0u32);
    move || {
        let n = calls.get();
        calls.set(n + 1);
        if n < checks {
            100.0
        } else {
            0.0
        }
    }
}
