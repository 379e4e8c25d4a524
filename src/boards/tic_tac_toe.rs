use std::fmt;

use crate::evaluation::Scored;
use crate::state::{AgentIndex, GameState, PROTAGONIST};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A mark on the board. X moves first.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A two-agent `GameState` for the game of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array, where each element corresponds to a cell.
/// An action is the index of a cell, from 0 to 8. Agent 0 plays the protagonist's mark and
/// agent 1 the other one.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TicTacToeBoard {
    protagonist: Mark,
    to_move: Mark,
    field: [Option<Mark>; 9],
}

impl TicTacToeBoard {
    /// Creates an empty board searched on behalf of `protagonist`.
    pub fn new(protagonist: Mark) -> Self {
        Self {
            protagonist,
            to_move: Mark::X,
            field: [None; 9],
        }
    }

    /// Plays `cells` in order from the empty board, X first. Returns `None` if a move is not
    /// legal.
    pub fn with_moves(protagonist: Mark, cells: &[u8]) -> Option<Self> {
        cells
            .iter()
            .try_fold(TicTacToeBoard::new(protagonist), |board, &cell| board.play(cell))
    }

    /// Returns the same position searched on behalf of `protagonist`.
    pub fn for_protagonist(mut self, protagonist: Mark) -> Self {
        self.protagonist = protagonist;
        self
    }

    /// The mark about to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The mark in `cell`, if any.
    pub fn cell(&self, cell: usize) -> Option<Mark> {
        self.field.get(cell).copied().flatten()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.field[a]?;
            (self.field[b] == Some(mark) && self.field[c] == Some(mark)).then_some(mark)
        })
    }

    /// Returns `true` if every cell is taken.
    pub fn is_full(&self) -> bool {
        self.field.iter().all(Option::is_some)
    }

    /// Places the mark to move in `cell`.
    pub fn play(&self, cell: u8) -> Option<Self> {
        let index = cell as usize;
        if self.winner().is_some() || self.cell(index).is_some() || index >= self.field.len() {
            return None;
        }
        let mut next = *self;
        next.field[index] = Some(self.to_move);
        next.to_move = self.to_move.opponent();
        Some(next)
    }

    fn agent_of(&self, mark: Mark) -> AgentIndex {
        if mark == self.protagonist {
            PROTAGONIST
        } else {
            1
        }
    }
}

impl Default for TicTacToeBoard {
    /// Creates a new Tic-Tac-Toe board searched on behalf of 'X'.
    fn default() -> Self {
        TicTacToeBoard::new(Mark::X)
    }
}

impl GameState for TicTacToeBoard {
    type Action = u8;

    fn num_agents(&self) -> usize {
        2
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action> {
        if self.is_terminal() || self.agent_of(self.to_move) != agent {
            return Vec::new();
        }

        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Option<Self> {
        if self.agent_of(self.to_move) != agent {
            return None;
        }
        self.play(*action)
    }

    fn is_win(&self) -> bool {
        self.winner() == Some(self.protagonist)
    }

    fn is_lose(&self) -> bool {
        self.winner() == Some(self.protagonist.opponent())
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Scored for TicTacToeBoard {
    fn score(&self) -> f64 {
        if self.is_win() {
            1.0
        } else if self.is_lose() {
            -1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.field.chunks(3) {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
