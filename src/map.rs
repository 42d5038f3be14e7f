use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::state::MazeState;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contents {
    Empty,
    Food,
    Pacman,
}

pub struct MapFormatter<'a> {
    map: &'a MazeMap,
    state: &'a MazeState,
}

impl<'a> MapFormatter<'a> {
    pub fn new(map: &'a MazeMap, state: &'a MazeState) -> Self {
        Self { map, state }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.map.write_with_state(self.state, f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The static part of a maze: walls, where the food was at the start
/// and the four grid extremes.
#[derive(Clone)]
pub struct MazeMap {
    pub grid: Vec2d<MapCell>,
    pub food: Vec<Pos>,
    pub corners: [Pos; 4],
}

impl MazeMap {
    pub fn new(grid: Vec2d<MapCell>, mut food: Vec<Pos>) -> Self {
        food.sort();
        let last_r = grid.rows() - 1;
        let last_c = grid.cols() - 1;
        let corners = [
            Pos::new(0, 0),
            Pos::new(0, last_c),
            Pos::new(last_r, 0),
            Pos::new(last_r, last_c),
        ];
        MazeMap { grid, food, corners }
    }

    /// Outside of the grid counts as wall.
    pub fn is_free(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Empty)
    }

    pub fn is_food(&self, pos: Pos) -> bool {
        self.food.binary_search(&pos).is_ok()
    }

    pub fn is_corner(&self, pos: Pos) -> bool {
        self.corners.contains(&pos)
    }

    pub fn format_with_state<'a>(&'a self, state: &'a MazeState) -> MapFormatter<'a> {
        MapFormatter::new(self, state)
    }

    fn write_with_state(&self, state: &MazeState, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid = self.grid.scratchpad(Contents::Empty);
        for &food in &self.food {
            if !state.has_eaten(food) {
                state_grid[food] = Contents::Food;
            }
        }
        state_grid[state.pacman] = Contents::Pacman;
        self.write(&state_grid, f)
    }

    fn write(&self, state_grid: &Vec2d<Contents>, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let pos = Pos::new(r, c);
                match (self.grid[pos], state_grid[pos]) {
                    (MapCell::Wall, Contents::Empty) => write!(f, "%")?,
                    (MapCell::Wall, _) => unreachable!(),
                    (MapCell::Empty, Contents::Empty) => write!(f, " ")?,
                    (MapCell::Empty, Contents::Food) => write!(f, ".")?,
                    (MapCell::Empty, Contents::Pacman) => write!(f, "P")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for MazeMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid = self.grid.scratchpad(Contents::Empty);
        for &food in &self.food {
            state_grid[food] = Contents::Food;
        }
        self.write(&state_grid, f)
    }
}

impl Debug for MazeMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
