// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod agent;
pub mod benchmark;
pub mod config;
pub mod data;
pub mod heuristic;
pub mod map;
pub mod maze;
pub mod problem;
pub mod puzzle;
pub mod solver;
pub mod state;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::config::Method;
use crate::maze::MazeProblem;
use crate::problem::Problem;
use crate::puzzle::PuzzleProblem;
use crate::solver::SolverOk;

pub trait LoadLayout {
    fn load_layout(&self) -> Result<MazeProblem, Box<dyn Error>>;
}

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<PuzzleProblem, Box<dyn Error>>;
}

/// Runs a search with the problem's default heuristic.
pub trait Solve: Problem {
    fn solve(&self, method: Method, print_status: bool) -> SolverOk<Self::Action>;
}

impl Solve for MazeProblem {
    fn solve(&self, method: Method, print_status: bool) -> SolverOk<Self::Action> {
        solver::search(self, method, heuristic::euclidean_to_nearest_food, print_status)
    }
}

impl Solve for PuzzleProblem {
    fn solve(&self, method: Method, print_status: bool) -> SolverOk<Self::Action> {
        solver::search(self, method, heuristic::manhattan, print_status)
    }
}
