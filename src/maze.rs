use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::map::{MapFormatter, MazeMap};
use crate::problem::Problem;
use crate::state::MazeState;

/// Collect all the food and touch all four corners of the grid.
///
/// Corners which are walls can never be entered so they start out visited.
#[derive(Clone)]
pub struct MazeProblem {
    pub map: MazeMap,
    start: MazeState,
}

impl MazeProblem {
    pub fn new(map: MazeMap, pacman: Pos) -> Self {
        let mut corners_visited: Vec<Pos> = map
            .corners
            .iter()
            .cloned()
            .filter(|&corner| !map.is_free(corner))
            .collect();
        if map.is_corner(pacman) {
            corners_visited.push(pacman);
        }
        let start = MazeState::new(pacman, Vec::new(), corners_visited);
        MazeProblem { map, start }
    }

    pub fn food_cnt(&self) -> usize {
        self.map.food.len()
    }

    pub fn remaining_food<'a>(&'a self, state: &'a MazeState) -> impl Iterator<Item = Pos> + 'a {
        self.map
            .food
            .iter()
            .cloned()
            .filter(move |&food| !state.has_eaten(food))
    }

    pub fn format_state<'a>(&'a self, state: &'a MazeState) -> MapFormatter<'a> {
        self.map.format_with_state(state)
    }

    /// Same layout, starting from `state` instead.
    pub fn resume_from(&self, state: MazeState) -> MazeProblem {
        MazeProblem {
            map: self.map.clone(),
            start: state,
        }
    }
}

impl Problem for MazeProblem {
    type State = MazeState;
    type Action = Dir;

    fn initial_state(&self) -> MazeState {
        self.start.clone()
    }

    fn actions(&self, state: &MazeState) -> Vec<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| self.map.is_free(state.pacman + dir))
            .collect()
    }

    fn transition(&self, state: &MazeState, action: Dir) -> MazeState {
        let new_pos = state.pacman + action;
        assert!(
            self.map.is_free(new_pos),
            "Moving {} from {} runs into a wall",
            action,
            state.pacman
        );

        let mut new_state = state.clone();
        new_state.pacman = new_pos;
        if self.map.is_food(new_pos) {
            new_state.eat(new_pos);
        }
        if self.map.is_corner(new_pos) {
            new_state.visit_corner(new_pos);
        }
        new_state
    }

    fn is_goal(&self, state: &MazeState) -> bool {
        state.food_eaten.len() == self.map.food.len() && state.corners_visited.len() == 4
    }
}

impl Display for MazeProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_state(&self.start))
    }
}

impl Debug for MazeProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
