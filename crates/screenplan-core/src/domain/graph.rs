//! Monitor dependency graph, placement order, and connectivity.
//!
//! Every positioned monitor depends on the monitor its directive references:
//! it cannot be placed until its reference has a rectangle. Those
//! dependencies form a directed graph with one edge per positioned monitor,
//! oriented from the referenced monitor to the dependent one:
//!
//! ```text
//! [monitors.left]  position = "left-of main"      main ──▶ left
//! [monitors.upper] position = "above main"        main ──▶ upper
//! [monitors.far]   position = "left-of left"      left ──▶ far
//! ```
//!
//! A valid configuration yields a single rooted hierarchy: acyclic (a monitor
//! cannot transitively depend on itself) and connected (every monitor reaches
//! back to the one unpositioned root). Cycles are rejected the moment the
//! offending edge is inserted; connectivity is checked when the placement
//! order is computed.
//!
//! The graph is a plain adjacency list over a `BTreeMap` and the topological
//! sort breaks ties lexicographically by monitor name, so the placement
//! order is deterministic for a given configuration.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

use super::directive::{split_position, DirectiveError};
use super::monitor::Config;

/// Errors produced while building or ordering the dependency graph.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// A position directive references a monitor that is not configured.
    #[error("position references unknown monitor '{name}'")]
    UnknownMonitor { name: String },

    /// Adding the dependency edge would close a cycle.
    #[error("positioning '{dependent}' relative to '{reference}' would create a cycle")]
    DependencyCycle {
        reference: String,
        dependent: String,
    },

    /// The graph splits into more than one connected component.
    #[error("all monitors must be connected to one main monitor")]
    Disconnected,

    /// A position directive could not be split into its two tokens.
    #[error(transparent)]
    Directive(#[from] DirectiveError),
}

/// Directed dependency graph over monitor names.
///
/// Vertices are monitor names; an edge `reference → dependent` exists for
/// every monitor whose `position` names `reference`. Construction validates
/// directive shape, reference existence, and acyclicity, so a successfully
/// built graph always admits a topological order.
#[derive(Debug)]
pub struct MonitorGraph {
    /// Adjacency list: vertex → dependents. Every vertex has an entry, even
    /// when it has no dependents.
    edges: BTreeMap<String, Vec<String>>,
}

impl MonitorGraph {
    /// Builds the dependency graph for a configuration.
    ///
    /// Inserts one vertex per monitor, then one edge per non-empty `position`
    /// directive, oriented from the referenced monitor to the dependent one.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Directive`] for a malformed directive,
    /// [`GraphError::UnknownMonitor`] when a directive references a name that
    /// is not configured, and [`GraphError::DependencyCycle`] as soon as an
    /// edge would close a cycle (a monitor positioned relative to itself
    /// included).
    pub fn from_config(config: &Config) -> Result<Self, GraphError> {
        let mut graph = Self {
            edges: BTreeMap::new(),
        };

        // Vertices first, so every edge can be validated against the full
        // name set regardless of declaration order.
        for name in config.monitors.keys() {
            graph.edges.insert(name.clone(), Vec::new());
        }

        for (name, monitor) in &config.monitors {
            if let Some((_, reference)) = split_position(&monitor.position)? {
                graph.add_edge(reference, name)?;
            }
        }

        Ok(graph)
    }

    /// Number of monitors in the graph.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Computes the placement order: a topological ordering in which every
    /// monitor appears after the monitor it is positioned against, with
    /// lexicographic tie-breaks. The first element is the layout root.
    ///
    /// Also verifies the graph is a single connected component by counting
    /// the vertices reachable from the root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Disconnected`] when the dependency edges do not
    /// connect every monitor to one root.
    pub fn placement_order(&self) -> Result<Vec<String>, GraphError> {
        // Kahn's algorithm. The ready set is a BTreeSet, so among monitors
        // whose dependencies are all placed, the lexicographically smallest
        // name is emitted first.
        let mut indegree: BTreeMap<&str, usize> =
            self.edges.keys().map(|name| (name.as_str(), 0)).collect();
        for dependents in self.edges.values() {
            for dependent in dependents {
                *indegree.entry(dependent.as_str()).or_insert(0) += 1;
            }
        }

        let mut ready: BTreeSet<&str> = indegree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(name, _)| *name)
            .collect();

        let mut order = Vec::with_capacity(self.edges.len());
        while let Some(name) = ready.pop_first() {
            order.push(name.to_string());
            if let Some(dependents) = self.edges.get(name) {
                for dependent in dependents {
                    if let Some(degree) = indegree.get_mut(dependent.as_str()) {
                        *degree -= 1;
                        if *degree == 0 {
                            ready.insert(dependent.as_str());
                        }
                    }
                }
            }
        }

        // Construction rejects cycles, so the sort always consumes every
        // vertex; what can still go wrong is a forest of several roots.
        if self.disconnected(&order) {
            return Err(GraphError::Disconnected);
        }

        Ok(order)
    }

    /// Inserts the edge `reference → dependent`, rejecting unknown references
    /// and cycles. The dependent is always an existing vertex: edges are only
    /// added for monitors taken from the configuration map.
    fn add_edge(&mut self, reference: &str, dependent: &str) -> Result<(), GraphError> {
        if !self.edges.contains_key(reference) {
            return Err(GraphError::UnknownMonitor {
                name: reference.to_string(),
            });
        }

        // The edge closes a cycle exactly when the reference is already
        // reachable from the dependent (self-reference is the trivial case).
        if reference == dependent || self.reaches(dependent, reference) {
            return Err(GraphError::DependencyCycle {
                reference: reference.to_string(),
                dependent: dependent.to_string(),
            });
        }

        if let Some(dependents) = self.edges.get_mut(reference) {
            dependents.push(dependent.to_string());
        }
        Ok(())
    }

    /// Breadth-first reachability: is `target` reachable from `start` along
    /// dependency edges?
    fn reaches(&self, start: &str, target: &str) -> bool {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(start);
        visited.insert(start);

        while let Some(name) = queue.pop_front() {
            if name == target {
                return true;
            }
            if let Some(dependents) = self.edges.get(name) {
                for dependent in dependents {
                    if visited.insert(dependent.as_str()) {
                        queue.push_back(dependent.as_str());
                    }
                }
            }
        }
        false
    }

    /// Counts the vertices reachable from the first monitor in the order; the
    /// graph is disconnected when any vertex is missed.
    fn disconnected(&self, order: &[String]) -> bool {
        let Some(root) = order.first() else {
            // An empty graph is trivially connected.
            return false;
        };

        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(root.as_str());
        visited.insert(root.as_str());

        while let Some(name) = queue.pop_front() {
            if let Some(dependents) = self.edges.get(name) {
                for dependent in dependents {
                    if visited.insert(dependent.as_str()) {
                        queue.push_back(dependent.as_str());
                    }
                }
            }
        }

        visited.len() != self.edges.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::monitor::Monitor;

    /// Builds a config of `(name, position)` pairs with fixed dimensions.
    fn make_config(monitors: &[(&str, &str)]) -> Config {
        let mut config = Config::default();
        for (name, position) in monitors {
            config.monitors.insert(
                name.to_string(),
                Monitor {
                    width: 1920,
                    height: 1080,
                    scale: 1.0,
                    position: position.to_string(),
                    align: String::new(),
                },
            );
        }
        config
    }

    // ── from_config ───────────────────────────────────────────────────────────

    #[test]
    fn test_from_config_builds_graph_for_simple_chain() {
        let config = make_config(&[("A", ""), ("B", "right-of A"), ("C", "right-of B")]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_from_config_accepts_single_unpositioned_monitor() {
        let config = make_config(&[("solo", "")]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_from_config_rejects_unknown_reference() {
        let config = make_config(&[("A", ""), ("B", "right-of ghost")]);
        assert_eq!(
            MonitorGraph::from_config(&config).unwrap_err(),
            GraphError::UnknownMonitor {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_from_config_rejects_malformed_directive() {
        let config = make_config(&[("A", ""), ("B", "right-of")]);
        assert!(matches!(
            MonitorGraph::from_config(&config).unwrap_err(),
            GraphError::Directive(_)
        ));
    }

    #[test]
    fn test_from_config_rejects_two_monitor_cycle() {
        let config = make_config(&[("A", "right-of B"), ("B", "right-of A")]);
        assert!(matches!(
            MonitorGraph::from_config(&config).unwrap_err(),
            GraphError::DependencyCycle { .. }
        ));
    }

    #[test]
    fn test_from_config_rejects_self_reference() {
        let config = make_config(&[("A", "above A")]);
        assert_eq!(
            MonitorGraph::from_config(&config).unwrap_err(),
            GraphError::DependencyCycle {
                reference: "A".to_string(),
                dependent: "A".to_string()
            }
        );
    }

    #[test]
    fn test_from_config_rejects_long_cycle() {
        let config = make_config(&[
            ("A", "right-of C"),
            ("B", "right-of A"),
            ("C", "right-of B"),
        ]);
        assert!(matches!(
            MonitorGraph::from_config(&config).unwrap_err(),
            GraphError::DependencyCycle { .. }
        ));
    }

    // ── placement_order ───────────────────────────────────────────────────────

    #[test]
    fn test_placement_order_places_root_first_in_chain() {
        let config = make_config(&[("C", "right-of B"), ("B", "right-of A"), ("A", "")]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert_eq!(graph.placement_order().unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_placement_order_breaks_ties_lexicographically() {
        // Both siblings depend only on the root; the tie must resolve by name.
        let config = make_config(&[("main", ""), ("zeta", "right-of main"), ("alpha", "left-of main")]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert_eq!(
            graph.placement_order().unwrap(),
            vec!["main", "alpha", "zeta"]
        );
    }

    #[test]
    fn test_placement_order_parent_always_precedes_dependent() {
        let config = make_config(&[
            ("root", ""),
            ("a", "right-of root"),
            ("b", "below a"),
            ("c", "right-of b"),
            ("d", "above root"),
        ]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        let order = graph.placement_order().unwrap();

        let index = |name: &str| order.iter().position(|n| n == name).unwrap();
        assert_eq!(index("root"), 0);
        assert!(index("a") < index("b"));
        assert!(index("b") < index("c"));
    }

    #[test]
    fn test_placement_order_is_deterministic_across_runs() {
        let config = make_config(&[
            ("m", ""),
            ("q", "right-of m"),
            ("p", "left-of m"),
            ("z", "above m"),
            ("b", "below m"),
        ]);
        let first = MonitorGraph::from_config(&config)
            .unwrap()
            .placement_order()
            .unwrap();
        let second = MonitorGraph::from_config(&config)
            .unwrap()
            .placement_order()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_placement_order_rejects_two_disjoint_trees() {
        // {A,B} and {C,D} are each valid alone but not connected to each other.
        let config = make_config(&[
            ("A", ""),
            ("B", "right-of A"),
            ("C", ""),
            ("D", "right-of C"),
        ]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert_eq!(graph.placement_order().unwrap_err(), GraphError::Disconnected);
    }

    #[test]
    fn test_placement_order_rejects_two_isolated_roots() {
        let config = make_config(&[("A", ""), ("B", "")]);
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert_eq!(graph.placement_order().unwrap_err(), GraphError::Disconnected);
    }

    #[test]
    fn test_placement_order_of_empty_config_is_empty() {
        let config = Config::default();
        let graph = MonitorGraph::from_config(&config).unwrap();
        assert!(graph.placement_order().unwrap().is_empty());
        assert!(graph.is_empty());
    }

    // ── Error display wording ─────────────────────────────────────────────────

    #[test]
    fn test_disconnected_error_message() {
        let config = make_config(&[("A", ""), ("B", "")]);
        let err = MonitorGraph::from_config(&config)
            .unwrap()
            .placement_order()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "all monitors must be connected to one main monitor"
        );
    }

    #[test]
    fn test_unknown_monitor_error_names_the_reference() {
        let config = make_config(&[("A", "below nonexistent")]);
        let err = MonitorGraph::from_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "position references unknown monitor 'nonexistent'"
        );
    }
}
