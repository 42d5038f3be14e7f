//! Average path cost of BFS and A* over random 8-puzzles.
//!
//! Instances are drawn with `PuzzleState::random_solvable` which uses the
//! blank row parity rule. On a board of odd width that rule also admits
//! instances that can't reach either goal, those are reported as unsolved
//! instead of skewing the averages.

use std::fmt::{self, Display, Formatter};

use prettytable::{Cell, Row, Table};
use rand::Rng;
use separator::Separatable;

use crate::config::Method;
use crate::heuristic;
use crate::puzzle::{PuzzleProblem, PuzzleState};
use crate::solver::{self, SolverOk};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub solved: usize,
    pub unsolved: usize,
    pub total_cost: usize,
    pub states_visited: u64,
}

impl Summary {
    fn add<A>(&mut self, res: &SolverOk<A>) {
        match res.path {
            Some(ref path) => {
                self.solved += 1;
                self.total_cost += path.len();
            }
            None => self.unsolved += 1,
        }
        self.states_visited += res.stats.total_unique_visited();
    }

    /// Over solved instances only.
    pub fn average_cost(&self) -> Option<f64> {
        if self.solved == 0 {
            None
        } else {
            Some(self.total_cost as f64 / self.solved as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub trials: usize,
    pub bfs: Summary,
    pub a_star: Summary,
}

/// Generates `trials` instances from `rng` and solves each with both methods.
pub fn run<R: Rng + ?Sized>(trials: usize, rng: &mut R) -> Report {
    let instances: Vec<_> = (0..trials).map(|_| PuzzleState::random_solvable(rng)).collect();
    run_instances(&instances)
}

pub fn run_instances(instances: &[PuzzleState]) -> Report {
    let mut report = Report {
        trials: instances.len(),
        bfs: Summary::default(),
        a_star: Summary::default(),
    };

    for (i, &start) in instances.iter().enumerate() {
        let problem = PuzzleProblem::new(start);
        let bfs = solver::bfs(&problem, false);
        let a_star = solver::a_star(&problem, heuristic::manhattan, false);
        debug!(
            "Trial {}: {:?} BFS {:?} A* {:?}",
            i,
            start,
            bfs.path.as_ref().map(Vec::len),
            a_star.path.as_ref().map(Vec::len)
        );
        report.bfs.add(&bfs);
        report.a_star.add(&a_star);
    }

    info!("Finished {} trials", report.trials);
    report
}

impl Report {
    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(vec![
            Cell::new("Method"),
            Cell::new("Solved"),
            Cell::new("Unsolved"),
            Cell::new("Average cost"),
            Cell::new("States visited"),
        ]));
        for &(method, summary) in &[(Method::Bfs, &self.bfs), (Method::AStar, &self.a_star)] {
            let average = summary
                .average_cost()
                .map_or_else(|| "-".to_string(), |avg| format!("{:.2}", avg));
            table.add_row(Row::new(vec![
                Cell::new(&method.to_string()),
                Cell::new(&summary.solved.to_string()),
                Cell::new(&summary.unsolved.to_string()),
                Cell::new(&average),
                Cell::new(&summary.states_visited.separated_string()),
            ]));
        }
        table
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trials: {}", self.trials)?;
        write!(f, "{}", self.table())
    }
}
