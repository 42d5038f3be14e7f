use std::fmt::{Debug, Display};
use std::hash::Hash;

pub type Cost = u32;

pub trait Action: Copy + Eq + Debug + Display {
    /// The action undoing this one.
    fn inverse(self) -> Self;

    fn is_inverse_of(self, other: Self) -> bool {
        self.inverse() == other
    }
}

/// A deterministic state space with a goal test.
///
/// This is all the search driver knows about a domain.
/// States are compared structurally, two states reached by different paths
/// must be equal (and hash equally) whenever they describe the same situation.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Action;

    fn initial_state(&self) -> Self::State;

    /// Legal actions in a fixed order, search results depend on it.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Never called with an action `actions` didn't offer for `state`.
    fn transition(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn step_cost(&self, _state: &Self::State, _action: Self::Action) -> Cost {
        1
    }

    /// Replays `actions` from the initial state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost {
        let mut state = self.initial_state();
        let mut cost = 0;
        for &action in actions {
            cost += self.step_cost(&state, action);
            state = self.transition(&state, action);
        }
        cost
    }

    fn final_state(&self, actions: &[Self::Action]) -> Self::State {
        actions
            .iter()
            .fold(self.initial_state(), |state, &action| self.transition(&state, action))
    }
}
