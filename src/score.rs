//! UCB1 (Upper Confidence Bound) score calculation.
//!
//! Formula: `Q(n) + c * sqrt(ln(N) / n)` where `Q` is the node's mean
//! reward, `N` the parent's visit count, and `n` the node's own visit
//! count.

/// Calculate the UCB1 score of a node under its parent.
///
/// Returns `f64::INFINITY` when the node is unvisited, so an unexplored
/// child always outranks every explored sibling and is guaranteed a first
/// visit.
///
/// `ln` is taken on `max(parent_visits, 1)`; with a single parent visit
/// the exploration term is 0 and only the mean reward remains.
///
/// # Arguments
/// * `total_reward` - Reward accumulated by the node
/// * `visits` - Number of visits to the node
/// * `parent_visits` - Number of visits to the node's parent
/// * `exploration` - Exploration constant (see [`UcbConfig`](crate::UcbConfig))
#[inline]
#[must_use]
pub fn ucb1(total_reward: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }

    let exploitation = total_reward / f64::from(visits);
    let ln_parent = f64::from(parent_visits.max(1)).ln();
    exploitation + exploration * (ln_parent / f64::from(visits)).sqrt()
}
