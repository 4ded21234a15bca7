//! Minimum-length path search over a directed, non-negatively-weighted graph, with the full
//! ordered edge sequence reconstructed and "unreachable" reported as a distinct outcome.

use std::collections::HashMap;
use std::hash::Hash;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Constraint on node identifier types accepted by [`shortest_route`].
///
/// Any opaque, comparable, copyable identifier qualifies; there is a blanket implementation.
pub trait NodeId: Copy + Eq + Hash + Ord {}

impl<N> NodeId for N where N: Copy + Eq + Hash + Ord {}

/// A directed connection between two nodes of a graph, weighted by a non-negative `length`.
///
/// Edges carry no identity beyond their fields; parallel edges between the same pair of nodes
/// and self-loops are both legal inputs to [`shortest_route`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<N: NodeId> {
    /// The node this edge leaves from.
    pub from: N,
    /// The node this edge arrives at.
    pub to: N,
    /// The cost of taking this edge. An edge from A to B implies nothing about B to A.
    pub length: u64,
}

/// Find a minimum-length path from `start` to `end`, returning the ordered sequence of edges
/// to take, or [`None`] if no route connects them.
///
/// `Some(vec![])` and [`None`] are distinct outcomes: the former means `start == end` and the
/// trip is free, the latter means `end` cannot be reached at all.
///
/// Only nodes listed in `nodes` are eligible to be explored; an edge touching an unlisted node
/// never relaxes any distance, so destinations outside the node set are simply unreachable.
/// The one exception is `start` itself, which is seeded with distance zero whether listed or
/// not and then behaves as a member of the node set.
///
/// The search is the classic label-setting relaxation over non-negative weights, selecting the
/// pending node with minimal tentative distance by linear scan. Ties between equally short
/// paths are resolved by exploration order.
pub fn shortest_route<N: NodeId>(
    start: N,
    end: N,
    nodes: &[N],
    edges: &[Edge<N>],
) -> Option<Vec<Edge<N>>> {
    let mut graph: DiGraph<N, Edge<N>> = DiGraph::with_capacity(nodes.len() + 1, edges.len());
    let mut indices: HashMap<N, NodeIndex> = HashMap::with_capacity(nodes.len() + 1);

    for node in nodes {
        indices.entry(*node).or_insert_with(|| graph.add_node(*node));
    }
    let start_ix = *indices.entry(start).or_insert_with(|| graph.add_node(start));

    for edge in edges {
        if let (Some(&from), Some(&to)) = (indices.get(&edge.from), indices.get(&edge.to)) {
            graph.add_edge(from, to, *edge);
        }
    }

    // tentative distance per node; None encodes infinity
    let mut distance: Vec<Option<u64>> = vec![None; graph.node_count()];
    // the relaxing edge by which each node is currently best reached
    let mut arrived_by: Vec<Option<EdgeIndex>> = vec![None; graph.node_count()];
    let mut pending: Vec<bool> = vec![true; graph.node_count()];
    distance[start_ix.index()] = Some(0);

    loop {
        let next = (0..graph.node_count())
            .filter(|ix| pending[*ix])
            .filter_map(|ix| distance[ix].map(|d| (ix, d)))
            .min_by_key(|(_, d)| *d);

        let (next, next_distance) = match next {
            // every node still pending is unreachable
            None => return None,
            Some(found) => found,
        };

        let next_ix = NodeIndex::new(next);
        if graph[next_ix] == end {
            let mut path = Vec::new();
            let mut cursor = next_ix;
            while let Some(edge_ix) = arrived_by[cursor.index()] {
                path.push(graph[edge_ix]);
                cursor = graph.edge_endpoints(edge_ix).unwrap().0;
            }
            path.reverse();
            return Some(path);
        }

        pending[next] = false;
        for out_edge in graph.edges(next_ix) {
            let target = out_edge.target();
            if !pending[target.index()] {
                // finalized nodes (and thus self-loops) never improve
                continue;
            }

            let candidate = next_distance.saturating_add(out_edge.weight().length);
            if distance[target.index()].map_or(true, |best| candidate < best) {
                distance[target.index()] = Some(candidate);
                arrived_by[target.index()] = Some(out_edge.id());
            }
        }
    }
}
