//! Distance estimates for A*.
//!
//! All of them are non-negative and return 0 on goal states.
//! The maze ones only look at food, the corners are ignored.

use crate::config::MazeHeuristic;
use crate::maze::MazeProblem;
use crate::problem::Problem;
use crate::puzzle::{PuzzleProblem, PuzzleState, GOALS, SIDE};
use crate::state::MazeState;

/// Turns A* into uniform cost search.
pub fn zero<P: Problem>(_problem: &P, _state: &P::State) -> f64 {
    0.0
}

/// Straight line distance to the nearest food that's left.
pub fn euclidean_to_nearest_food(problem: &MazeProblem, state: &MazeState) -> f64 {
    problem
        .remaining_food(state)
        .map(|food| state.pacman().euclidean(food))
        .fold(None, |min: Option<f64>, dist| match min {
            Some(m) if m <= dist => Some(m),
            _ => Some(dist),
        })
        .unwrap_or(0.0)
}

pub fn manhattan_to_nearest_food(problem: &MazeProblem, state: &MazeState) -> f64 {
    problem
        .remaining_food(state)
        .map(|food| state.pacman().manhattan(food))
        .min()
        .map_or(0.0, f64::from)
}

pub fn for_maze(heuristic: MazeHeuristic) -> fn(&MazeProblem, &MazeState) -> f64 {
    match heuristic {
        MazeHeuristic::Euclidean => euclidean_to_nearest_food,
        MazeHeuristic::Manhattan => manhattan_to_nearest_food,
    }
}

fn tile_distance(from: usize, to: usize) -> usize {
    let (fr, fc) = (from / SIDE, from % SIDE);
    let (tr, tc) = (to / SIDE, to % SIDE);
    (fr as isize - tr as isize).abs() as usize + (fc as isize - tc as isize).abs() as usize
}

fn manhattan_to(state: &PuzzleState, goal: &PuzzleState) -> usize {
    (1..=8u8)
        .map(|tile| tile_distance(state.position(tile), goal.position(tile)))
        .sum()
}

/// Sum of tile distances to whichever goal layout is closer overall.
///
/// Each sum is a lower bound for reaching its own layout so the minimum
/// is a lower bound for reaching either.
pub fn manhattan(_problem: &PuzzleProblem, state: &PuzzleState) -> f64 {
    let dist = GOALS
        .iter()
        .map(|goal| manhattan_to(state, goal))
        .min()
        .unwrap_or(0);
    dist as f64
}

/// Per tile minimum over both goal layouts.
///
/// Never larger than `manhattan` since every tile may pick a different layout.
pub fn blended_manhattan(_problem: &PuzzleProblem, state: &PuzzleState) -> f64 {
    let dist: usize = (1..=8u8)
        .map(|tile| {
            let from = state.position(tile);
            GOALS
                .iter()
                .map(|goal| tile_distance(from, goal.position(tile)))
                .min()
                .unwrap_or(0)
        })
        .sum();
    dist as f64
}
