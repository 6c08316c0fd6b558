use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::chains::capture_if_dead;
use crate::error::IllegalMove;
use crate::stone::Stone;
use crate::territory;

/// Captures indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Serialized game snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub size: usize,
    pub captures: Captures,
    pub ko: Option<usize>,
}

/// A game in progress: the live board, the ko point, and capture tallies.
///
/// The ko point bans the single one-move recapture; it holds the flat index
/// cleared by the previous move and blocks plays there by either color until
/// the next move or pass lifts it.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    ko: Option<usize>,
    captures: Captures,
}

impl Game {
    /// Create a game on an empty square board.
    pub fn new(size: usize) -> Self {
        Game {
            board: Board::new(size),
            ko: None,
            captures: Captures::new(),
        }
    }

    /// Restore a game from serialized state.
    pub fn from_state(state: GameState) -> Self {
        Game {
            board: Board::from_signs(state.size, state.board),
            ko: state.ko,
            captures: state.captures,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn ko(&self) -> Option<usize> {
        self.ko
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_at(&self, row: usize, col: usize) -> Option<Stone> {
        self.board.stone_at(self.board.grid().flatten(row, col))
    }

    // -- Game actions --

    /// Validate and apply a move at (row, col). On success the board advances
    /// and the flat indices of captured stones are returned; on rejection the
    /// game is left exactly as it was.
    pub fn play(
        &mut self,
        row: usize,
        col: usize,
        stone: Stone,
    ) -> Result<Vec<usize>, IllegalMove> {
        let target = self.board.grid().flatten(row, col);

        if !self.board.is_vacant(target) {
            return Err(IllegalMove::PositionOccupied);
        }
        if self.ko == Some(target) {
            return Err(IllegalMove::KoViolation);
        }

        // Ko candidacy is judged against the neighborhood before the stone
        // goes down.
        let possible_ko_color = self.board.surrounding_color(target);
        let neighbors = self.board.grid().neighbors(target).to_vec();

        let mut next = self.board.clone();
        next.set(target, stone.to_int());

        // Remove dead enemy chains before judging suicide. A chain already
        // cleared through an earlier neighbor reads as vacant and is skipped.
        let mut captured = Vec::new();
        for &n in &neighbors {
            if next.stone_at(n) == Some(stone.opp()) {
                captured.extend(capture_if_dead(&mut next, n));
            }
        }

        if !capture_if_dead(&mut next, target).is_empty() {
            return Err(IllegalMove::Suicide);
        }

        self.ko = match captured.as_slice() {
            &[single] if possible_ko_color == Some(stone.opp()) => Some(single),
            _ => None,
        };
        self.captures.add(stone, captured.len() as u32);
        self.board = next;
        Ok(captured)
    }

    /// Pass: clears the ko point.
    pub fn pass(&mut self) {
        self.ko = None;
    }

    /// Dry-run a move against a copy of the game.
    pub fn is_legal(&self, row: usize, col: usize, stone: Stone) -> bool {
        self.clone().play(row, col, stone).is_ok()
    }

    /// Area score of the current position: Black points minus White points.
    pub fn score(&self) -> i32 {
        territory::area_score(&self.board)
    }

    // -- Serialization --

    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.points().to_vec(),
            size: self.board.size(),
            captures: self.captures.clone(),
            ko: self.ko,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(19)
    }
}
