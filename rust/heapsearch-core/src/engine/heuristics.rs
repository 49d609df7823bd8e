/// Estimated remaining cost from a node to the goal. Should be
/// non-negative, and admissible when A* is expected to be optimal.
pub trait Heuristic<N, P> {
    fn estimate(&self, node: &N) -> P;
}

impl<N, P, F> Heuristic<N, P> for F
where
    F: Fn(&N) -> P,
{
    fn estimate(&self, node: &N) -> P {
        self(node)
    }
}

/// Cost of stepping from `current` to `neighbor`. Assumed non-negative.
pub trait EdgeCost<N, P> {
    fn cost(&self, current: &N, neighbor: &N) -> P;
}

impl<N, P, F> EdgeCost<N, P> for F
where
    F: Fn(&N, &N) -> P,
{
    fn cost(&self, current: &N, neighbor: &N) -> P {
        self(current, neighbor)
    }
}

/// Decides whether a dequeued node ends the search.
pub trait GoalTest<N> {
    fn is_goal(&self, node: &N) -> bool;
}

impl<N, F> GoalTest<N> for F
where
    F: Fn(&N) -> bool,
{
    fn is_goal(&self, node: &N) -> bool {
        self(node)
    }
}

/// Goal given as a concrete value plus an equality test.
#[derive(Clone, Debug)]
pub struct GoalValue<N, E = fn(&N, &N) -> bool> {
    goal: N,
    equate: E,
}

impl<N: PartialEq> GoalValue<N> {
    /// Match with `PartialEq`.
    pub fn new(goal: N) -> Self {
        Self { goal, equate: |a: &N, b: &N| a == b }
    }
}

impl<N, E> GoalValue<N, E>
where
    E: Fn(&N, &N) -> bool,
{
    pub fn with_equality(goal: N, equate: E) -> Self {
        Self { goal, equate }
    }

    pub fn goal(&self) -> &N {
        &self.goal
    }
}

impl<N, E> GoalTest<N> for GoalValue<N, E>
where
    E: Fn(&N, &N) -> bool,
{
    fn is_goal(&self, node: &N) -> bool {
        (self.equate)(node, &self.goal)
    }
}
