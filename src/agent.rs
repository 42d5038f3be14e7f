use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use crate::config::Method;
use crate::heuristic;
use crate::problem::Problem;
use crate::solver;

pub type Heuristic<P> = fn(&P, &<P as Problem>::State) -> f64;

/// Hands out one action per query to a driver which owns the environment.
///
/// The driver passes in a problem starting from the current situation.
/// The agent searches once and then serves the buffered actions, it only
/// searches again when the buffer runs out before reaching a goal.
pub struct SearchAgent<P: Problem> {
    method: Method,
    heuristic: Heuristic<P>,
    searched: bool,
    actions: VecDeque<P::Action>,
    performed: Vec<P::Action>,
}

impl<P: Problem> SearchAgent<P> {
    pub fn new(method: Method) -> Self {
        Self::with_heuristic(method, heuristic::zero::<P>)
    }

    pub fn with_heuristic(method: Method, heuristic: Heuristic<P>) -> Self {
        SearchAgent {
            method,
            heuristic,
            searched: false,
            actions: VecDeque::new(),
            performed: Vec::new(),
        }
    }

    /// `None` when the problem's start is a goal or no path exists.
    pub fn next_action(&mut self, problem: &P) -> Option<P::Action> {
        if problem.is_goal(&problem.initial_state()) {
            return None;
        }

        if !self.searched || self.actions.is_empty() {
            self.search(problem);
        }

        let action = self.actions.pop_front()?;
        self.performed.push(action);
        Some(action)
    }

    /// Everything served so far, in order.
    pub fn performed(&self) -> &[P::Action] {
        &self.performed
    }

    pub fn total_cost(&self) -> usize {
        self.performed.len()
    }

    fn search(&mut self, problem: &P) {
        let res = solver::search(problem, self.method, self.heuristic, false);
        if self.searched {
            debug!("Buffer ran out before the goal, searched again");
        }
        info!(
            "{} found {} actions, {} states visited",
            self.method,
            res.actions().len(),
            res.stats.total_unique_visited()
        );
        self.actions = res.actions().iter().cloned().collect();
        self.searched = true;
    }
}

impl<P: Problem> Debug for SearchAgent<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchAgent")
            .field("method", &self.method)
            .field("searched", &self.searched)
            .field("actions", &self.actions)
            .field("performed", &self.performed)
            .finish()
    }
}
