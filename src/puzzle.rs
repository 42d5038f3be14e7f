use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::problem::{Action, Problem};

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;
pub const BLANK: u8 = 0;

/// Both layouts count as solved.
pub const GOALS: [PuzzleState; 2] = [
    PuzzleState([1, 2, 3, 4, 5, 6, 7, 8, 0]),
    PuzzleState([0, 1, 2, 3, 4, 5, 6, 7, 8]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleErr {
    RowCount(usize),
    RowLength(usize, usize),
    InvalidTile(usize, usize),
    DuplicateTile(u8),
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::RowCount(n) => write!(f, "Expected {} rows, got {}", SIDE, n),
            PuzzleErr::RowLength(r, n) => {
                write!(f, "Expected {} tiles on row {}, got {}", SIDE, r, n)
            }
            PuzzleErr::InvalidTile(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            PuzzleErr::DuplicateTile(tile) => write!(f, "Tile {} appears more than once", tile),
        }
    }
}

impl Error for PuzzleErr {}

/// Moves of the blank, not of the tile it swaps with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

pub const SLIDES: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];

impl Action for Slide {
    fn inverse(self) -> Self {
        match self {
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
        }
    }
}

impl Display for Slide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Slide::Up => write!(f, "Up"),
            Slide::Down => write!(f, "Down"),
            Slide::Left => write!(f, "Left"),
            Slide::Right => write!(f, "Right"),
        }
    }
}

/// Row-major tiles, 0 is the blank.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleState(pub(crate) [u8; CELLS]);

impl PuzzleState {
    /// Every tile from 0 to 8 exactly once.
    pub fn new(tiles: [u8; CELLS]) -> Result<PuzzleState, PuzzleErr> {
        let mut seen = [false; CELLS];
        for (i, &tile) in tiles.iter().enumerate() {
            let t = usize::from(tile);
            if t >= CELLS {
                return Err(PuzzleErr::InvalidTile(i / SIDE, i % SIDE));
            }
            if seen[t] {
                return Err(PuzzleErr::DuplicateTile(tile));
            }
            seen[t] = true;
        }
        Ok(PuzzleState(tiles))
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    pub fn blank(&self) -> usize {
        self.position(BLANK)
    }

    /// Index of `tile` in row-major order.
    pub fn position(&self, tile: u8) -> usize {
        self.0
            .iter()
            .position(|&t| t == tile)
            .expect("every tile is on the board")
    }

    pub fn is_goal(&self) -> bool {
        GOALS.contains(self)
    }

    fn slide_target(&self, slide: Slide) -> Option<usize> {
        let blank = self.blank();
        let (r, c) = (blank / SIDE, blank % SIDE);
        match slide {
            Slide::Up if r > 0 => Some(blank - SIDE),
            Slide::Down if r < SIDE - 1 => Some(blank + SIDE),
            Slide::Left if c > 0 => Some(blank - 1),
            Slide::Right if c < SIDE - 1 => Some(blank + 1),
            _ => None,
        }
    }

    pub fn can_slide(&self, slide: Slide) -> bool {
        self.slide_target(slide).is_some()
    }

    pub fn slide(&self, slide: Slide) -> PuzzleState {
        let target = self
            .slide_target(slide)
            .unwrap_or_else(|| panic!("Can't slide the blank {} in\n{}", slide, self));
        let mut tiles = self.0;
        tiles.swap(self.blank(), target);
        PuzzleState(tiles)
    }

    pub fn count_inversions(&self) -> usize {
        let mut inversions = 0;
        for i in 0..CELLS {
            for j in i + 1..CELLS {
                if self.0[i] > self.0[j] && self.0[j] != BLANK {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    /// 1 is the bottom row.
    pub fn blank_row_from_bottom(&self) -> usize {
        SIDE - self.blank() / SIDE
    }

    /// Parity test used to filter random instances.
    ///
    /// A blank on an even row (counting from the bottom) needs an odd number
    /// of inversions, a blank on an odd row an even number.
    pub fn is_solvable(&self) -> bool {
        let even_inversions = self.count_inversions() % 2 == 0;
        if self.blank_row_from_bottom() % 2 == 0 {
            !even_inversions
        } else {
            even_inversions
        }
    }

    /// Shuffles until the parity test passes.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> PuzzleState {
        let mut tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        loop {
            tiles.shuffle(rng);
            let state = PuzzleState(tiles);
            if state.is_solvable() {
                return state;
            }
        }
    }
}

impl FromStr for PuzzleState {
    type Err = PuzzleErr;

    /// Three lines of three whitespace separated numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != SIDE {
            return Err(PuzzleErr::RowCount(rows.len()));
        }

        let mut tiles = [BLANK; CELLS];
        for (r, row) in rows.iter().enumerate() {
            let numbers: Vec<&str> = row.split_whitespace().collect();
            if numbers.len() != SIDE {
                return Err(PuzzleErr::RowLength(r, numbers.len()));
            }
            for (c, number) in numbers.iter().enumerate() {
                tiles[r * SIDE + c] = number.parse().map_err(|_| PuzzleErr::InvalidTile(r, c))?;
            }
        }
        PuzzleState::new(tiles)
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SIDE) {
            let row: Vec<String> = row.iter().map(|t| t.to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for PuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// The 8-puzzle starting from a fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleProblem {
    start: PuzzleState,
}

impl PuzzleProblem {
    pub fn new(start: PuzzleState) -> Self {
        PuzzleProblem { start }
    }
}

impl FromStr for PuzzleProblem {
    type Err = PuzzleErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PuzzleProblem::new(s.parse()?))
    }
}

impl Display for PuzzleProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

impl Problem for PuzzleProblem {
    type State = PuzzleState;
    type Action = Slide;

    fn initial_state(&self) -> PuzzleState {
        self.start
    }

    fn actions(&self, state: &PuzzleState) -> Vec<Slide> {
        SLIDES
            .iter()
            .cloned()
            .filter(|&slide| state.can_slide(slide))
            .collect()
    }

    fn transition(&self, state: &PuzzleState, action: Slide) -> PuzzleState {
        state.slide(action)
    }

    fn is_goal(&self, state: &PuzzleState) -> bool {
        state.is_goal()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parsing() {
        let state: PuzzleState = "1 2 3\n4 0 6\n7 5 8\n".parse().unwrap();
        assert_eq!(state.0, [1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert_eq!(state.to_string(), "1 2 3\n4 0 6\n7 5 8\n");
        assert_eq!(state.blank(), 4);

        let padded: PuzzleState = "\n 1  2 3\n4 0 6\n\n7 5 8".parse().unwrap();
        assert_eq!(padded, state);
    }

    #[test]
    fn parsing_failures() {
        assert_eq!("1 2 3\n4 0 6".parse::<PuzzleState>(), Err(PuzzleErr::RowCount(2)));
        assert_eq!(
            "1 2 3\n4 0\n7 5 8 6".parse::<PuzzleState>(),
            Err(PuzzleErr::RowLength(1, 2))
        );
        assert_eq!(
            "1 2 3\n4 0 x\n7 5 8".parse::<PuzzleState>(),
            Err(PuzzleErr::InvalidTile(1, 2))
        );
        assert_eq!(
            "1 2 3\n4 0 9\n7 5 8".parse::<PuzzleState>(),
            Err(PuzzleErr::InvalidTile(1, 2))
        );
        assert_eq!(
            "1 2 3\n4 0 6\n7 5 5".parse::<PuzzleState>(),
            Err(PuzzleErr::DuplicateTile(5))
        );
        assert_eq!("".parse::<PuzzleState>(), Err(PuzzleErr::RowCount(0)));
    }

    #[test]
    fn checked_construction() {
        assert_eq!(PuzzleState::new([1; CELLS]), Err(PuzzleErr::DuplicateTile(1)));
        assert_eq!(
            PuzzleState::new([1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(PuzzleErr::InvalidTile(2, 2))
        );

        let state = PuzzleState::new([1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();
        assert_eq!(state, "1 2 3\n4 5 0\n7 8 6".parse().unwrap());
        let problem = PuzzleProblem::new(state);
        assert_eq!(problem.actions(&state), vec![Slide::Up, Slide::Down, Slide::Left]);
    }

    #[test]
    fn sliding() {
        let problem = PuzzleProblem::new("1 2 3\n4 0 6\n7 5 8".parse().unwrap());
        let start = problem.initial_state();
        assert_eq!(problem.actions(&start), SLIDES.to_vec());

        let down = problem.transition(&start, Slide::Down);
        assert_eq!(down.0, [1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(problem.actions(&down), vec![Slide::Up, Slide::Left, Slide::Right]);

        let solved = problem.transition(&down, Slide::Right);
        assert!(problem.is_goal(&solved));
        assert_eq!(problem.transition(&solved, Slide::Left), down);

        let corner = PuzzleState([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(corner.is_goal());
        assert_eq!(problem.actions(&corner), vec![Slide::Down, Slide::Right]);
    }

    #[test]
    #[should_panic]
    fn sliding_off_the_board() {
        GOALS[0].slide(Slide::Down);
    }

    #[test]
    fn solvability() {
        let goal = GOALS[0];
        assert_eq!(goal.count_inversions(), 0);
        assert_eq!(goal.blank_row_from_bottom(), 1);
        assert!(goal.is_solvable());

        let other_goal = GOALS[1];
        assert_eq!(other_goal.blank_row_from_bottom(), 3);
        assert!(other_goal.is_solvable());

        // swapping two tiles flips the inversion parity
        let swapped = PuzzleState([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(swapped.count_inversions(), 1);
        assert!(!swapped.is_solvable());

        // the blank doesn't count towards inversions
        let middle = PuzzleState([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(middle.count_inversions(), 0);
        assert_eq!(middle.blank_row_from_bottom(), 2);
        assert!(!middle.is_solvable());
    }

    #[test]
    fn random_instances_pass_parity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let state = PuzzleState::random_solvable(&mut rng);
            assert!(state.is_solvable());
            let mut tiles = state.0;
            tiles.sort();
            assert_eq!(tiles, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }
}
