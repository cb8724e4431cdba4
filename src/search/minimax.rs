//! Exhaustive minimax over the tic-tac-toe game tree.
//!
//! `O` is the maximizing player and `X` the minimizing player, whichever
//! side the search is run for. Terminal positions score:
//!
//! - `O` win: `10 - depth`
//! - `X` win: `depth - 10`
//! - draw: `0`
//!
//! where `depth` counts moves after the root move (a move that wins on the
//! spot scores a full 10). Faster wins and slower losses are preferred.
//!
//! Two equivalent search modes are available. The exhaustive mode visits
//! every line, memoizing positions in a per-search transposition cache.
//! The alpha-beta mode prunes branches that cannot change the result. Both
//! return the same move and score for every position; ties at the root go
//! to the lowest cell index.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{Board, Mark};
use crate::rules::{evaluate, GameStatus};

use super::stats::SearchStats;

/// Base score for a win before the depth penalty.
pub const WIN_SCORE: i32 = 10;

/// Score of a terminal status at `depth`, or `None` while in progress.
#[must_use]
pub fn terminal_score(status: GameStatus, depth: i32) -> Option<i32> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some(0),
        GameStatus::Won { mark: Mark::O, .. } => Some(WIN_SCORE - depth),
        GameStatus::Won { mark: Mark::X, .. } => Some(depth - WIN_SCORE),
    }
}

/// Chosen move and its minimax value from `O`'s point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
}

/// Reusable minimax searcher.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    alpha_beta: bool,
    cache: FxHashMap<Board, i32>,
    stats: SearchStats,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxSearch {
    /// Searcher using alpha-beta pruning.
    #[must_use]
    pub fn new() -> Self {
        Self::with_alpha_beta(true)
    }

    /// Searcher that expands every line (with a transposition cache).
    #[must_use]
    pub fn exhaustive() -> Self {
        Self::with_alpha_beta(false)
    }

    #[must_use]
    pub fn with_alpha_beta(alpha_beta: bool) -> Self {
        Self {
            alpha_beta,
            cache: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Whether this searcher prunes.
    #[must_use]
    pub fn uses_alpha_beta(&self) -> bool {
        self.alpha_beta
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best move for `mark` on `board`.
    ///
    /// Returns `None` when the board has no empty cell.
    pub fn search(&mut self, board: &Board, mark: Mark) -> Option<SearchResult> {
        let start = Instant::now();
        self.stats.reset();
        self.cache.clear();

        let mut scratch = *board;
        let mut best: Option<SearchResult> = None;

        for index in board.empty_cells() {
            scratch.place(index, mark);
            let score = match (self.alpha_beta, mark, best) {
                (false, _, _) => self.minimax(&mut scratch, 0, mark.opponent()),
                // Narrowing the window to the best score so far keeps
                // better moves exact; worse ones return a bound that loses
                // the comparison below.
                (true, Mark::O, b) => self.alpha_beta(
                    &mut scratch,
                    0,
                    Mark::X,
                    b.map_or(i32::MIN, |r| r.score),
                    i32::MAX,
                ),
                (true, Mark::X, b) => self.alpha_beta(
                    &mut scratch,
                    0,
                    Mark::O,
                    i32::MIN,
                    b.map_or(i32::MAX, |r| r.score),
                ),
            };
            scratch.clear(index);

            let improves = match (mark, best) {
                (_, None) => true,
                (Mark::O, Some(b)) => score > b.score,
                (Mark::X, Some(b)) => score < b.score,
            };
            if improves {
                best = Some(SearchResult { index, score });
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some(result) = best {
            self.stats.best_score = result.score;
            trace!(
                %mark,
                index = result.index,
                score = result.score,
                nodes = self.stats.nodes_visited,
                alpha_beta = self.alpha_beta,
                "minimax search complete"
            );
        }
        best
    }

    fn minimax(&mut self, board: &mut Board, depth: i32, to_move: Mark) -> i32 {
        // Depth and side to move are both fixed by the position within a
        // single search, so the board alone is a sound cache key.
        if let Some(&score) = self.cache.get(&*board) {
            self.stats.cache_hits += 1;
            return score;
        }
        self.stats.nodes_visited += 1;

        if let Some(score) = terminal_score(evaluate(board), depth) {
            self.stats.terminal_leaves += 1;
            self.cache.insert(*board, score);
            return score;
        }

        let mut best = match to_move {
            Mark::O => i32::MIN,
            Mark::X => i32::MAX,
        };
        for index in board.empty_cells() {
            board.place(index, to_move);
            let score = self.minimax(board, depth + 1, to_move.opponent());
            board.clear(index);

            best = match to_move {
                Mark::O => best.max(score),
                Mark::X => best.min(score),
            };
        }

        self.cache.insert(*board, best);
        best
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        to_move: Mark,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes_visited += 1;

        if let Some(score) = terminal_score(evaluate(board), depth) {
            self.stats.terminal_leaves += 1;
            return score;
        }

        let mut best = match to_move {
            Mark::O => i32::MIN,
            Mark::X => i32::MAX,
        };
        for index in board.empty_cells() {
            board.place(index, to_move);
            let score = self.alpha_beta(board, depth + 1, to_move.opponent(), alpha, beta);
            board.clear(index);

            match to_move {
                Mark::O => {
                    best = best.max(score);
                    alpha = alpha.max(best);
                }
                Mark::X => {
                    best = best.min(score);
                    beta = beta.min(best);
                }
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Best move for the engine (`O`), using alpha-beta.
#[must_use]
pub fn best_move(board: &Board) -> Option<usize> {
    best_move_for(board, Mark::O)
}

/// Best move for either mark, using alpha-beta.
#[must_use]
pub fn best_move_for(board: &Board, mark: Mark) -> Option<usize> {
    MinimaxSearch::new().search(board, mark).map(|r| r.index)
}
