pub mod frontier;
pub mod node;
pub mod simplify;

use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashSet;
use ordered_float::OrderedFloat;
use typed_arena::Arena;

use crate::config::Method;
use crate::problem::{Action, Cost, Problem};

use self::frontier::{FifoFrontier, Frontier, PriorityFrontier};
use self::node::{SearchNode, Stats};
use self::simplify::simplify;

pub struct SolverOk<A> {
    /// Actions in the order the search found them.
    pub path: Option<Vec<A>>,
    /// `path` with back-and-forth pairs removed.
    pub actions: Option<Vec<A>>,
    /// Cost of `path`.
    pub cost: Option<Cost>,
    pub stats: Stats,
    pub(crate) method: Method,
}

impl<A: Action> SolverOk<A> {
    fn new(found: Option<(Vec<A>, Cost)>, stats: Stats, method: Method) -> Self {
        let (path, cost) = match found {
            Some((path, cost)) => (Some(path), Some(cost)),
            None => (None, None),
        };
        Self {
            actions: path.as_ref().map(|path| simplify(path)),
            path,
            cost,
            stats,
            method,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Post-processed actions, empty if the frontier was exhausted.
    pub fn actions(&self) -> &[A] {
        self.actions.as_ref().map_or(&[], |actions| &actions[..])
    }

    pub fn path(&self) -> &[A] {
        self.path.as_ref().map_or(&[], |path| &path[..])
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

impl<A: Display> Debug for SolverOk<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.path, &self.actions, self.cost) {
            (Some(path), Some(actions), Some(cost)) => {
                // steps and cost both describe the path as found
                writeln!(f, "{}: {} steps, cost {}", self.method, path.len(), cost)?;
                writeln!(f, "[{}]", names(path))?;
                if actions.len() != path.len() {
                    writeln!(f, "Simplified: [{}]", names(actions))?;
                }
            }
            _ => writeln!(f, "No solution")?,
        }
        write!(f, "{}", self.stats)
    }
}

fn names<A: Display>(actions: &[A]) -> String {
    let names: Vec<_> = actions.iter().map(|a| a.to_string()).collect();
    names.join(", ")
}

/// Runs `method` on `problem`, `heuristic` is only used by A*.
pub fn search<P, H>(problem: &P, method: Method, heuristic: H, print_status: bool) -> SolverOk<P::Action>
where
    P: Problem,
    H: Fn(&P, &P::State) -> f64,
{
    match method {
        Method::Bfs => bfs(problem, print_status),
        Method::Ucs => ucs(problem, print_status),
        Method::AStar => a_star(problem, heuristic, print_status),
    }
}

pub fn bfs<P: Problem>(problem: &P, print_status: bool) -> SolverOk<P::Action> {
    debug!("Search called with {}", Method::Bfs);
    let arena = Arena::new();
    let (found, stats) = expand_all(problem, &arena, Breadth::new(), print_status);
    SolverOk::new(found, stats, Method::Bfs)
}

pub fn ucs<P: Problem>(problem: &P, print_status: bool) -> SolverOk<P::Action> {
    debug!("Search called with {}", Method::Ucs);
    let arena = Arena::new();
    let (found, stats) = expand_all(problem, &arena, Uniform::new(), print_status);
    SolverOk::new(found, stats, Method::Ucs)
}

pub fn a_star<P, H>(problem: &P, heuristic: H, print_status: bool) -> SolverOk<P::Action>
where
    P: Problem,
    H: Fn(&P, &P::State) -> f64,
{
    debug!("Search called with {}", Method::AStar);
    let arena = Arena::new();
    let (found, stats) = expand_all(problem, &arena, Informed::new(heuristic), print_status);
    SolverOk::new(found, stats, Method::AStar)
}

/// Order in which pending nodes are expanded, the rest of the search is shared.
trait Strategy<'a, P: Problem> {
    fn push(&mut self, problem: &P, node: &'a SearchNode<'a, P>);

    fn pop(&mut self) -> Option<&'a SearchNode<'a, P>>;

    /// Drop successors which were already expanded instead of queueing them.
    fn skips_explored(&self) -> bool {
        false
    }
}

struct Breadth<'a, P: Problem> {
    frontier: FifoFrontier<&'a SearchNode<'a, P>>,
}

impl<'a, P: Problem> Breadth<'a, P> {
    fn new() -> Self {
        Breadth {
            frontier: FifoFrontier::new(),
        }
    }
}

impl<'a, P: Problem> Strategy<'a, P> for Breadth<'a, P> {
    fn push(&mut self, _problem: &P, node: &'a SearchNode<'a, P>) {
        self.frontier.push(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a, P>> {
        self.frontier.pop()
    }
}

struct Uniform<'a, P: Problem> {
    frontier: PriorityFrontier<&'a SearchNode<'a, P>, Cost, P::State>,
}

impl<'a, P: Problem> Uniform<'a, P> {
    fn new() -> Self {
        Uniform {
            frontier: PriorityFrontier::new(),
        }
    }
}

impl<'a, P: Problem> Strategy<'a, P> for Uniform<'a, P> {
    fn push(&mut self, _problem: &P, node: &'a SearchNode<'a, P>) {
        // at most one pending node per state, the cheapest one
        self.frontier.update(node.state.clone(), node, node.cost);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a, P>> {
        self.frontier.pop()
    }

    fn skips_explored(&self) -> bool {
        true
    }
}

struct Informed<'a, P: Problem, H> {
    frontier: PriorityFrontier<&'a SearchNode<'a, P>, OrderedFloat<f64>, ()>,
    heuristic: H,
}

impl<'a, P: Problem, H> Informed<'a, P, H> {
    fn new(heuristic: H) -> Self {
        Informed {
            frontier: PriorityFrontier::new(),
            heuristic,
        }
    }
}

impl<'a, P, H> Strategy<'a, P> for Informed<'a, P, H>
where
    P: Problem,
    H: Fn(&P, &P::State) -> f64,
{
    fn push(&mut self, problem: &P, node: &'a SearchNode<'a, P>) {
        let h = (self.heuristic)(problem, &node.state);
        debug_assert!(h >= 0.0, "Negative heuristic {} for {:?}", h, node.state);
        self.frontier.push(node, OrderedFloat(f64::from(node.cost) + h));
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a, P>> {
        self.frontier.pop()
    }
}

fn expand_all<'a, P, S>(
    problem: &P,
    arena: &'a Arena<SearchNode<'a, P>>,
    mut strategy: S,
    print_status: bool,
) -> (Option<(Vec<P::Action>, Cost)>, Stats)
where
    P: Problem,
    S: Strategy<'a, P>,
{
    let mut stats = Stats::new();
    let mut explored = FnvHashSet::default();

    let start: &SearchNode<'a, P> = arena.alloc(SearchNode::root(problem.initial_state()));
    stats.add_created(start.depth);
    strategy.push(problem, start);

    while let Some(cur_node) = strategy.pop() {
        if problem.is_goal(&cur_node.state) {
            stats.add_unique_visited(cur_node.depth);
            debug!("Solved at depth {}, backtracking path", cur_node.depth);
            return (Some((cur_node.actions(), cur_node.cost)), stats);
        }

        if explored.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node.depth);
            continue;
        }
        if stats.add_unique_visited(cur_node.depth) && print_status {
            println!("Visited new depth: {}", cur_node.depth);
            println!("{}", stats.status_line());
        }
        explored.insert(cur_node.state.clone());

        for action in problem.actions(&cur_node.state) {
            let state = problem.transition(&cur_node.state, action);
            if strategy.skips_explored() && explored.contains(&state) {
                continue;
            }
            let step_cost = problem.step_cost(&cur_node.state, action);
            let next_node: &SearchNode<'a, P> =
                arena.alloc(SearchNode::child(cur_node, action, state, step_cost));
            stats.add_created(next_node.depth);
            strategy.push(problem, next_node);
        }
    }

    debug!("Frontier exhausted, {} states explored", explored.len());
    (None, stats)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::data::Dir;
    use crate::heuristic;
    use crate::maze::MazeProblem;
    use crate::puzzle::{PuzzleProblem, PuzzleState, Slide, GOALS};

    const METHODS: [Method; 3] = [Method::Bfs, Method::Ucs, Method::AStar];

    fn maze(layout: &str) -> MazeProblem {
        layout.trim_start_matches('\n').parse().unwrap()
    }

    #[test]
    fn corridor() {
        let problem = maze(
            r"
%%%%%%%
%.P  .%
%%% %%%
%%%%%%%
",
        );
        for &method in &METHODS {
            let res = search(&problem, method, heuristic::manhattan_to_nearest_food, false);
            assert_eq!(res.path(), &[Dir::West, Dir::East, Dir::East, Dir::East, Dir::East]);
            assert_eq!(res.cost, Some(5));
            assert!(problem.is_goal(&problem.final_state(res.path())));
            // the detour to the first food is a back-and-forth pair
            assert_eq!(res.actions(), &[Dir::East, Dir::East, Dir::East]);
        }
    }

    #[test]
    fn methods_agree_on_maze() {
        let problem = maze(
            r"
%%%%%%
%P  .%
% %% %
%.   %
%%%%%%
",
        );
        let bfs = bfs(&problem, false);
        let ucs = ucs(&problem, false);
        let euclid = a_star(&problem, heuristic::euclidean_to_nearest_food, false);
        let manhattan = a_star(&problem, heuristic::manhattan_to_nearest_food, false);
        assert!(bfs.is_solved());
        for res in &[&ucs, &euclid, &manhattan] {
            assert_eq!(res.path().len(), bfs.path().len());
            assert_eq!(res.cost, bfs.cost);
            assert!(problem.is_goal(&problem.final_state(res.path())));
        }
    }

    #[test]
    fn puzzle_one_move() {
        let problem = PuzzleProblem::new(PuzzleState([1, 2, 3, 4, 5, 0, 7, 8, 6]));
        for &method in &METHODS {
            let res = search(&problem, method, heuristic::manhattan, false);
            assert_eq!(res.actions(), &[Slide::Down]);
            assert_eq!(res.cost, Some(1));
        }
    }

    #[test]
    fn methods_agree_on_puzzle() {
        let goal = PuzzleProblem::new(GOALS[0]);
        let scrambled = goal.final_state(&[Slide::Up, Slide::Left, Slide::Up, Slide::Left, Slide::Down]);
        let problem = PuzzleProblem::new(scrambled);

        let bfs = bfs(&problem, false);
        assert!(bfs.is_solved());
        assert!(bfs.path().len() <= 5);
        for &method in &METHODS {
            let res = search(&problem, method, heuristic::manhattan, false);
            assert_eq!(res.path().len(), bfs.path().len());
            assert!(problem.is_goal(&problem.final_state(res.path())));
        }
        let blended = a_star(&problem, heuristic::blended_manhattan, false);
        assert_eq!(blended.path().len(), bfs.path().len());
    }

    #[test]
    fn start_is_goal() {
        let problem = PuzzleProblem::new(GOALS[1]);
        for &method in &METHODS {
            let res = search(&problem, method, heuristic::manhattan, false);
            assert!(res.is_solved());
            assert!(res.actions().is_empty());
            assert_eq!(res.cost, Some(0));
            assert_eq!(res.stats.total_created(), 1);
        }
    }

    #[test]
    fn exhausted_frontier() {
        // the food is walled off
        let problem = maze(
            r"
%%%%%%
%P %.%
%%%%%%
",
        );
        for &method in &METHODS {
            let res = search(&problem, method, heuristic::euclidean_to_nearest_food, false);
            assert!(!res.is_solved());
            assert!(res.actions().is_empty());
            assert!(res.path().is_empty());
            assert_eq!(res.cost, None);
            assert_eq!(res.stats.total_unique_visited(), 2);
        }
    }

    /// Directed graph with weighted edges, node 0 is the start, node 3 the goal.
    struct Graph {
        edges: Vec<(u8, u8, Cost)>,
        expanded: RefCell<Vec<u8>>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Hop(u8, u8);

    impl Action for Hop {
        fn inverse(self) -> Self {
            Hop(self.1, self.0)
        }
    }

    impl Display for Hop {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "{}->{}", self.0, self.1)
        }
    }

    impl Problem for Graph {
        type State = u8;
        type Action = Hop;

        fn initial_state(&self) -> u8 {
            0
        }

        fn actions(&self, state: &u8) -> Vec<Hop> {
            self.expanded.borrow_mut().push(*state);
            self.edges
                .iter()
                .filter(|&&(from, _, _)| from == *state)
                .map(|&(from, to, _)| Hop(from, to))
                .collect()
        }

        fn transition(&self, _state: &u8, action: Hop) -> u8 {
            action.1
        }

        fn is_goal(&self, state: &u8) -> bool {
            *state == 3
        }

        fn step_cost(&self, _state: &u8, action: Hop) -> Cost {
            self.edges
                .iter()
                .find(|&&(from, to, _)| Hop(from, to) == action)
                .map(|&(_, _, cost)| cost)
                .unwrap()
        }
    }

    fn graph() -> Graph {
        Graph {
            edges: vec![(0, 1, 1), (0, 2, 4), (1, 2, 1), (1, 3, 6), (2, 3, 1), (2, 1, 1)],
            expanded: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn bfs_counts_steps() {
        let problem = graph();
        let res = bfs(&problem, false);
        assert_eq!(res.path(), &[Hop(0, 1), Hop(1, 3)]);
        assert_eq!(res.cost, Some(7));
    }

    #[test]
    fn ucs_finds_cheapest() {
        let problem = graph();
        let res = ucs(&problem, false);
        assert_eq!(res.path(), &[Hop(0, 1), Hop(1, 2), Hop(2, 3)]);
        assert_eq!(res.cost, Some(3));
        assert_eq!(problem.cost_of_actions(res.path()), 3);

        let mut expanded = problem.expanded.borrow().clone();
        let cnt = expanded.len();
        expanded.sort();
        expanded.dedup();
        assert_eq!(expanded.len(), cnt);
    }

    #[test]
    fn a_star_finds_cheapest() {
        let problem = graph();
        let res = a_star(&problem, heuristic::zero, false);
        assert_eq!(res.cost, Some(3));
        assert_eq!(res.path().len(), 3);

        let mut expanded = problem.expanded.borrow().clone();
        let cnt = expanded.len();
        expanded.sort();
        expanded.dedup();
        assert_eq!(expanded.len(), cnt);
    }

    #[test]
    fn formatting() {
        let problem = PuzzleProblem::new(PuzzleState([1, 2, 3, 4, 5, 0, 7, 8, 6]));
        let res = bfs(&problem, false);
        let out = format!("{:?}", res);
        assert!(out.starts_with("BFS: 1 steps, cost 1\n[Down]\n"));

        let problem = graph();
        let res = ucs(&problem, false);
        assert!(format!("{:?}", res).contains("[0->1, 1->2, 2->3]"));
    }

    #[test]
    fn formatting_simplified_path() {
        let problem = maze(
            r"
%%%%%%%
%.P  .%
%%% %%%
%%%%%%%
",
        );
        let res = bfs(&problem, false);
        let out = format!("{:?}", res);
        assert!(
            out.starts_with(
                "BFS: 5 steps, cost 5\n\
                 [West, East, East, East, East]\n\
                 Simplified: [East, East, East]\n"
            ),
            "{}",
            out
        );
        assert!(!out.contains("3 steps"));
        assert!(!out.contains("No solution"));
    }
}
