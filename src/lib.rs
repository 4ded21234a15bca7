#![warn(missing_docs)]

//! # `velodrome`
//!
//! Two small, independent, deterministic selection algorithms with non-trivial invariants:
//!
//! - [`shortest_route`]: minimum-length path search over a directed, non-negatively-weighted
//!   graph, reconstructing the full ordered edge sequence and distinguishing a zero-length
//!   path (`Some(vec![])`, when start and end coincide) from no path at all ([`None`]).
//! - [`race_podium`]: the classic bounded-comparison ranking puzzle. Given only an injected
//!   [`RaceOracle`] which seats exactly `G` participants per race and reports their finishing
//!   order, determine the top three of `G * G` participants while spending at most
//!   [`race_budget`](podium::race_budget)`(G)` races. For both canonical configurations
//!   (16 participants raced 4 at a time, 25 raced 5 at a time) the budget is 7 races.
//!
//! Both are pure, single-threaded computations: no I/O, no shared state between calls, and
//! working state local to one invocation. The route search assumes non-negative edge weights
//! (structurally guaranteed by the unsigned [`Edge::length`]); the podium search assumes the
//! oracle honors a strict total order over speed, ties broken by ascending identifier.

pub use podium::{race_podium, Participant, RaceOracle, RaceResult};
pub use route::{shortest_route, Edge};

pub mod podium;
pub mod route;
