use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::problem::{Cost, Problem};

/// One step of a search path.
///
/// Nodes live in an arena for the duration of one search and only point
/// to their parent so the whole path shares its prefix with its siblings.
pub struct SearchNode<'a, P: Problem> {
    pub state: P::State,
    pub parent: Option<(&'a SearchNode<'a, P>, P::Action)>,
    pub cost: Cost,
    pub depth: u32,
}

impl<'a, P: Problem> SearchNode<'a, P> {
    pub fn root(state: P::State) -> Self {
        SearchNode {
            state,
            parent: None,
            cost: 0,
            depth: 0,
        }
    }

    pub fn child(parent: &'a SearchNode<'a, P>, action: P::Action, state: P::State, step_cost: Cost) -> Self {
        SearchNode {
            state,
            parent: Some((parent, action)),
            cost: parent.cost + step_cost,
            depth: parent.depth + 1,
        }
    }

    /// Walks the parent chain back to the root.
    pub fn actions(&self) -> Vec<P::Action> {
        let mut ret = Vec::with_capacity(self.depth as usize);
        let mut node = self;
        while let Some((parent, action)) = node.parent {
            ret.push(action);
            node = parent;
        }
        ret.reverse();
        ret
    }
}

impl<'a, P: Problem> Debug for SearchNode<'a, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SearchNode {{ state: {:?}, cost: {}, depth: {} }}", self.state, self.cost, self.depth)
    }
}

/// Counters for one depth of the search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthCounts {
    pub created: u64,
    pub unique: u64,
    pub duplicates: u64,
}

impl DepthCounts {
    /// Pushed to the frontier but never popped.
    pub fn not_reached(&self) -> u64 {
        self.created - self.unique - self.duplicates
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    depths: Vec<DepthCounts>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depths(&self) -> &[DepthCounts] {
        &self.depths
    }

    pub fn total_created(&self) -> u64 {
        self.depths.iter().map(|d| d.created).sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.depths.iter().map(|d| d.unique).sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.depths.iter().map(|d| d.duplicates).sum()
    }

    /// Returns true if nothing was counted at `depth` before.
    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        self.bump(depth, |d| &mut d.created)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: u32) -> bool {
        self.bump(depth, |d| &mut d.unique)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        self.bump(depth, |d| &mut d.duplicates)
    }

    fn bump<F>(&mut self, depth: u32, counter: F) -> bool
    where
        F: FnOnce(&mut DepthCounts) -> &mut u64,
    {
        let depth = depth as usize;
        let new_depth = depth >= self.depths.len();
        if new_depth {
            self.depths.resize(depth + 1, DepthCounts::default());
        }
        *counter(&mut self.depths[depth]) += 1;
        new_depth
    }

    /// Progress line printed while searching.
    pub fn status_line(&self) -> String {
        format!(
            "depth {}: {} created, {} unique, {} duplicates",
            self.depths.len().saturating_sub(1),
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let visited = self.total_unique_visited();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not reached total: {}",
            (created - visited - duplicates).separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"
        )?;
        for (depth, counts) in self.depths.iter().enumerate() {
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                counts.created.separated_string(),
                counts.unique.separated_string(),
                counts.duplicates.separated_string(),
                counts.not_reached().separated_string()
            )?;
        }
        Ok(())
    }
}
