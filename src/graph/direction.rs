//! Direction markers selecting symmetric or one-way adjacency updates.

/// How a graph stores a connection `a -> b`.
pub trait Direction {
    /// True if every connection is also stored as `b -> a`.
    const SYMMETRIC: bool;

    /// Human-readable name.
    fn name() -> &'static str;
}

/// Connections are stored from both endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Connections are stored only in the declared direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

impl Direction for Undirected {
    const SYMMETRIC: bool = true;

    fn name() -> &'static str {
        "undirected"
    }
}

impl Direction for Directed {
    const SYMMETRIC: bool = false;

    fn name() -> &'static str {
        "directed"
    }
}
