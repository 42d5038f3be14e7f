use crate::data::Pos;

/// Pacman's position plus what it has collected so far.
///
/// Both collections are kept sorted and deduplicated so that the order in
/// which food was eaten or corners were touched doesn't affect equality.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct MazeState {
    pub(crate) pacman: Pos,
    pub(crate) food_eaten: Vec<Pos>,
    pub(crate) corners_visited: Vec<Pos>,
}

impl MazeState {
    pub(crate) fn new(pacman: Pos, mut food_eaten: Vec<Pos>, mut corners_visited: Vec<Pos>) -> MazeState {
        food_eaten.sort();
        food_eaten.dedup();
        corners_visited.sort();
        corners_visited.dedup();
        MazeState {
            pacman,
            food_eaten,
            corners_visited,
        }
    }

    pub fn pacman(&self) -> Pos {
        self.pacman
    }

    pub fn food_eaten(&self) -> &[Pos] {
        &self.food_eaten
    }

    pub fn corners_visited(&self) -> &[Pos] {
        &self.corners_visited
    }

    pub fn has_eaten(&self, food: Pos) -> bool {
        self.food_eaten.binary_search(&food).is_ok()
    }

    pub(crate) fn eat(&mut self, food: Pos) {
        insert_sorted(&mut self.food_eaten, food);
    }

    pub(crate) fn visit_corner(&mut self, corner: Pos) {
        insert_sorted(&mut self.corners_visited, corner);
    }
}

fn insert_sorted(positions: &mut Vec<Pos>, pos: Pos) {
    if let Err(index) = positions.binary_search(&pos) {
        positions.insert(index, pos);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash(state: &MazeState) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = Pos::new(1, 1);
        let b = Pos::new(2, 5);
        let c = Pos::new(3, 2);

        let mut first = MazeState::new(Pos::new(1, 2), vec![], vec![]);
        first.eat(c);
        first.eat(a);
        first.eat(b);

        let mut second = MazeState::new(Pos::new(1, 2), vec![b], vec![]);
        second.eat(a);
        second.eat(c);
        second.eat(a);

        assert_eq!(first, second);
        assert_eq!(hash(&first), hash(&second));
        assert_eq!(first.food_eaten(), &[a, b, c]);
        assert_eq!(MazeState::new(Pos::new(1, 2), vec![b, c, a, b], vec![]), first);
    }

    #[test]
    fn position_matters() {
        let first = MazeState::new(Pos::new(1, 2), vec![], vec![Pos::new(0, 0)]);
        let second = MazeState::new(Pos::new(1, 3), vec![], vec![Pos::new(0, 0)]);
        assert_ne!(first, second);
        assert!(!first.has_eaten(Pos::new(1, 2)));
    }
}
