use crate::problem::Action;

/// Drops adjacent pairs of an action immediately followed by its inverse.
///
/// This is a single left to right pass: after a pair is dropped, scanning
/// continues behind it so a pair which only becomes adjacent because of
/// the removal is kept (`N E W S` stays as is, it is not reduced to nothing).
///
/// The result is not guaranteed to reach the same state. In the maze,
/// stepping into a dead end to eat food and back out is such a pair.
pub fn simplify<A: Action>(actions: &[A]) -> Vec<A> {
    let mut ret = Vec::with_capacity(actions.len());
    let mut i = 0;
    while i < actions.len() {
        if i + 1 < actions.len() && actions[i].is_inverse_of(actions[i + 1]) {
            i += 2;
            continue;
        }
        ret.push(actions[i]);
        i += 1;
    }
    ret
}
