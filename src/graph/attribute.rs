use super::error::GraphError;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use rand::Rng;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Undirected contiguity graph whose nodes are spatial areas, each carrying a
/// numeric attribute vector.
///
/// # Invariants
///
/// - Every adjacency connects two distinct, previously added areas
/// - Node indices are stable across edge removal, so area handles stay valid
///   while a working copy is being cut
/// - The canonical graph owned by a solver is never mutated by the engine;
///   stochastic procedures operate on [`Clone`]d working copies
///
/// # Example
///
/// ```
/// use regio::graph::AttributeGraph;
///
/// let mut graph = AttributeGraph::new();
/// graph.add_area("a", vec![1.0]).unwrap();
/// graph.add_area("b", vec![4.0]).unwrap();
/// graph.add_adjacency(&"a", &"b").unwrap();
/// assert!(graph.are_adjacent(&"a", &"b"));
/// ```
#[derive(Debug, Clone)]
pub struct AttributeGraph<A>
where
    A: Clone + Eq + Hash + Debug,
{
    graph: StableUnGraph<Vec<f64>, ()>,
    /// Maps area → node index.
    node_by_area: HashMap<A, NodeIndex>,
    /// Maps node index → area for reverse lookup.
    area_by_node: HashMap<NodeIndex, A>,
}

impl<A> Default for AttributeGraph<A>
where
    A: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> AttributeGraph<A>
where
    A: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
            node_by_area: HashMap::new(),
            area_by_node: HashMap::new(),
        }
    }

    /// Adds an area with its attribute vector (a scalar attribute is the
    /// one-element case).
    ///
    /// # Errors
    ///
    /// `DuplicateArea` if the area was already added.
    pub fn add_area(&mut self, area: A, attribute: Vec<f64>) -> Result<(), GraphError> {
        if self.node_by_area.contains_key(&area) {
            return Err(GraphError::DuplicateArea(format!("{area:?}")));
        }
        let node = self.graph.add_node(attribute);
        self.node_by_area.insert(area.clone(), node);
        self.area_by_node.insert(node, area);
        Ok(())
    }

    /// Records spatial adjacency between two areas. Adding the same
    /// adjacency twice is a no-op.
    ///
    /// # Errors
    ///
    /// - `UnknownArea` if either endpoint was never added
    /// - `SelfAdjacency` if both endpoints are the same area
    pub fn add_adjacency(&mut self, a: &A, b: &A) -> Result<(), GraphError> {
        let na = self.node_of(a)?;
        let nb = self.node_of(b)?;
        if na == nb {
            return Err(GraphError::SelfAdjacency(format!("{a:?}")));
        }
        if self.graph.find_edge(na, nb).is_none() {
            self.graph.add_edge(na, nb, ());
        }
        Ok(())
    }

    /// Removes the adjacency between two areas.
    ///
    /// Intended for working copies; the canonical graph a solver holds
    /// should stay untouched during a search.
    ///
    /// # Errors
    ///
    /// - `UnknownArea` if either endpoint was never added
    /// - `NotAdjacent` if no adjacency is currently recorded
    pub fn remove_adjacency(&mut self, a: &A, b: &A) -> Result<(), GraphError> {
        let na = self.node_of(a)?;
        let nb = self.node_of(b)?;
        match self.graph.find_edge(na, nb) {
            Some(edge) => {
                self.graph.remove_edge(edge);
                Ok(())
            }
            None => Err(GraphError::NotAdjacent(
                format!("{a:?}"),
                format!("{b:?}"),
            )),
        }
    }

    /// Removes one uniformly random adjacency and returns its endpoints, or
    /// `None` if the graph has no adjacencies left.
    ///
    /// This is the edge-cutting primitive behind initial-solution
    /// generation; call it on a working copy.
    pub fn remove_random_adjacency<R: Rng>(&mut self, rng: &mut R) -> Option<(A, A)> {
        let edges: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        if edges.is_empty() {
            return None;
        }
        let edge = edges[rng.gen_range(0..edges.len())];
        let (na, nb) = self.graph.edge_endpoints(edge)?;
        let a = self.area_by_node[&na].clone();
        let b = self.area_by_node[&nb].clone();
        self.graph.remove_edge(edge);
        Some((a, b))
    }

    pub fn area_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn adjacency_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_area(&self, area: &A) -> bool {
        self.node_by_area.contains_key(area)
    }

    /// Returns the attribute vector of an area, if it exists.
    pub fn attribute(&self, area: &A) -> Option<&[f64]> {
        self.node_by_area
            .get(area)
            .and_then(|&n| self.graph.node_weight(n))
            .map(|v| v.as_slice())
    }

    /// Returns an iterator over all areas (arbitrary order).
    pub fn areas(&self) -> impl Iterator<Item = &A> {
        self.node_by_area.keys()
    }

    /// Returns an iterator over the areas adjacent to `area`.
    ///
    /// Yields nothing for an unknown area.
    pub fn neighbors<'a>(&'a self, area: &A) -> impl Iterator<Item = &'a A> + 'a {
        self.node_by_area
            .get(area)
            .into_iter()
            .flat_map(move |&n| self.graph.neighbors(n))
            .map(move |n| &self.area_by_node[&n])
    }

    pub fn are_adjacent(&self, a: &A, b: &A) -> bool {
        match (self.node_by_area.get(a), self.node_by_area.get(b)) {
            (Some(&na), Some(&nb)) => self.graph.find_edge(na, nb).is_some(),
            _ => false,
        }
    }

    /// Returns every adjacency as an endpoint pair (arbitrary order, each
    /// adjacency once).
    pub fn adjacencies(&self) -> Vec<(A, A)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(na, nb)| (self.area_by_node[&na].clone(), self.area_by_node[&nb].clone()))
            .collect()
    }

    /// Builds a new graph over `areas` keeping attributes and the
    /// adjacencies whose endpoints are both in `areas`.
    ///
    /// Unknown areas are skipped.
    pub fn induced_subgraph(&self, areas: &[A]) -> AttributeGraph<A> {
        let mut sub = AttributeGraph::new();
        for area in areas {
            if let Some(attribute) = self.attribute(area) {
                // add_area cannot fail here: `sub` starts empty and
                // duplicates in `areas` hit the contains_area guard.
                if !sub.contains_area(area) {
                    let _ = sub.add_area(area.clone(), attribute.to_vec());
                }
            }
        }
        for (a, b) in self.adjacencies() {
            if sub.contains_area(&a) && sub.contains_area(&b) {
                let _ = sub.add_adjacency(&a, &b);
            }
        }
        sub
    }

    pub(crate) fn node_of(&self, area: &A) -> Result<NodeIndex, GraphError> {
        self.node_by_area
            .get(area)
            .copied()
            .ok_or_else(|| GraphError::UnknownArea(format!("{area:?}")))
    }

    pub(crate) fn area_of(&self, node: NodeIndex) -> &A {
        &self.area_by_node[&node]
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn node_neighbors(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(node)
    }
}

impl AttributeGraph<usize> {
    /// Builds a `rows` × `cols` lattice with 4-neighbor adjacency, areas
    /// numbered row-major from 0, one scalar attribute per cell.
    ///
    /// # Errors
    ///
    /// `AttributeLengthMismatch` if `attributes.len() != rows * cols`.
    pub fn grid(rows: usize, cols: usize, attributes: &[f64]) -> Result<Self, GraphError> {
        if attributes.len() != rows * cols {
            return Err(GraphError::AttributeLengthMismatch {
                expected: rows * cols,
                got: attributes.len(),
            });
        }
        let mut graph = AttributeGraph::new();
        for (area, &value) in attributes.iter().enumerate() {
            graph.add_area(area, vec![value])?;
        }
        for row in 0..rows {
            for col in 0..cols {
                let area = row * cols + col;
                if col + 1 < cols {
                    graph.add_adjacency(&area, &(area + 1))?;
                }
                if row + 1 < rows {
                    graph.add_adjacency(&area, &(area + cols))?;
                }
            }
        }
        Ok(graph)
    }
}

impl<A> Display for AttributeGraph<A>
where
    A: Clone + Eq + Hash + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttributeGraph {{ areas: {}, adjacencies: {} }}",
            self.area_count(),
            self.adjacency_count()
        )
    }
}
