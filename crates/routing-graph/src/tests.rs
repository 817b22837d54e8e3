//! Unit tests for `routing-graph`.
//!
//! All tests use a hand-crafted graph so they run without any fixture file.

#[cfg(test)]
mod helpers {
    use routing_core::Point;

    use crate::graph::{Graph, GraphBuilder};

    /// Build a small directed graph for testing.
    ///
    /// Nodes (x, y):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Directed edges (from, to, length, speed_limit):
    ///   0→1→2→4  each 100 units at 10 units/s → 10 s per hop, 30 s total
    ///   0→3→4    500 then 100 units at 10 units/s → 50 s + 10 s = 60 s total
    ///
    /// Shortest path 0→4 by travel time is always 0→1→2→4.
    pub fn line_graph() -> (Graph, [routing_core::NodeId; 5]) {
        let mut b = GraphBuilder::new(5, 5);
        let ids: Vec<routing_core::NodeId> = (0..5u32).map(routing_core::NodeId).collect();
        let [n0, n1, n2, n3, n4] = [ids[0], ids[1], ids[2], ids[3], ids[4]];

        b.set_node(n0, Point::new(0.0, 0.0)).unwrap();
        b.set_node(n1, Point::new(0.0, 1.0)).unwrap();
        b.set_node(n2, Point::new(0.0, 2.0)).unwrap();
        b.set_node(n3, Point::new(1.0, 0.0)).unwrap();
        b.set_node(n4, Point::new(1.0, 2.0)).unwrap();

        let eids: Vec<routing_core::EdgeId> = (0..5u32).map(routing_core::EdgeId).collect();
        b.add_edge(eids[0], n0, n1, 100.0, 10.0).unwrap();
        b.add_edge(eids[1], n1, n2, 100.0, 10.0).unwrap();
        b.add_edge(eids[2], n2, n4, 100.0, 10.0).unwrap();
        b.add_edge(eids[3], n0, n3, 500.0, 10.0).unwrap();
        b.add_edge(eids[4], n3, n4, 100.0, 10.0).unwrap();

        (b.build().unwrap(), [n0, n1, n2, n3, n4])
    }
}

// ── GraphBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use routing_core::{NodeId, Point};

    use crate::error::GraphError;
    use crate::graph::GraphBuilder;

    #[test]
    fn empty_build() {
        let graph = GraphBuilder::new(0, 0).build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn missing_node_rejected() {
        let mut b = GraphBuilder::new(2, 0);
        b.set_node(NodeId(0), Point::new(0.0, 0.0)).unwrap();
        // node 1 never set
        assert!(b.build().is_err());
    }

    #[test]
    fn out_of_range_node_rejected() {
        let mut b = GraphBuilder::new(1, 1);
        b.set_node(NodeId(0), Point::new(0.0, 0.0)).unwrap();
        let err = b
            .add_edge(routing_core::EdgeId(0), NodeId(0), NodeId(5), 1.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, GraphError::BadNode(_)));
    }

    #[test]
    fn non_positive_speed_limit_rejected() {
        let mut b = GraphBuilder::new(2, 1);
        b.set_node(NodeId(0), Point::new(0.0, 0.0)).unwrap();
        b.set_node(NodeId(1), Point::new(1.0, 0.0)).unwrap();
        let err = b
            .add_edge(routing_core::EdgeId(0), NodeId(0), NodeId(1), 1.0, 0.0)
            .unwrap_err();
        assert!(matches!(err, GraphError::BadSpeed(_)));
    }

    #[test]
    fn csr_out_edges_directed() {
        let (graph, [n0, n1, n2, n3, n4]) = super::helpers::line_graph();
        assert_eq!(graph.out_edges(n0).len(), 2); // n0→n1, n0→n3
        assert_eq!(graph.out_edges(n1).len(), 1); // n1→n2
        assert_eq!(graph.out_edges(n4).len(), 0); // no outgoing edges
        let _ = (n2, n3);
    }
}

// ── A* and Dijkstra routing ────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use routing_core::{NodeId, Point};

    use crate::astar::{AStarRouter, DijkstraRouter, Router};
    use crate::error::GraphError;
    use crate::graph::GraphBuilder;

    #[test]
    fn trivial_same_node() {
        let (graph, [n0, ..]) = super::helpers::line_graph();
        let route = AStarRouter.route(&graph, n0, n0).unwrap();
        assert_eq!(route.cost, 0.0);
        assert_eq!(route.nodes, vec![n0]);
        assert!(route.edges.is_empty());
    }

    #[test]
    fn shortest_path_correct() {
        let (graph, [n0, n1, n2, _, n4]) = super::helpers::line_graph();
        let route = AStarRouter.route(&graph, n0, n4).unwrap();

        assert!((route.cost - 30.0).abs() < 1e-9);
        assert_eq!(route.nodes, vec![n0, n1, n2, n4]);
        assert_eq!(route.edges.len(), 3);
    }

    #[test]
    fn astar_matches_dijkstra_optimal_cost() {
        let (graph, [n0, _, _, _, n4]) = super::helpers::line_graph();
        let astar_route = AStarRouter.route(&graph, n0, n4).unwrap();
        let dijkstra_route = DijkstraRouter.route(&graph, n0, n4).unwrap();
        assert!((astar_route.cost - dijkstra_route.cost).abs() < 1e-9);
    }

    #[test]
    fn no_route_disconnected() {
        let mut b = GraphBuilder::new(2, 0);
        b.set_node(NodeId(0), Point::new(0.0, 0.0)).unwrap();
        b.set_node(NodeId(1), Point::new(1.0, 0.0)).unwrap();
        let graph = b.build().unwrap();

        let result = AStarRouter.route(&graph, NodeId(0), NodeId(1));
        assert!(matches!(result, Err(GraphError::NoRoute { .. })));
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let mut b = GraphBuilder::new(2, 1);
        b.set_node(NodeId(0), Point::new(0.0, 0.0)).unwrap();
        b.set_node(NodeId(1), Point::new(0.0, 1.0)).unwrap();
        b.add_edge(routing_core::EdgeId(0), NodeId(0), NodeId(1), 100.0, 10.0)
            .unwrap();
        let graph = b.build().unwrap();

        assert!(AStarRouter.route(&graph, NodeId(0), NodeId(1)).is_ok());
        assert!(AStarRouter.route(&graph, NodeId(1), NodeId(0)).is_err());
    }

    #[test]
    fn updated_edge_weight_changes_route_cost() {
        let (mut graph, [n0, _, _, _, n4]) = super::helpers::line_graph();
        let before = AStarRouter.route(&graph, n0, n4).unwrap().cost;

        // Slow down the 0→1 edge drastically; the 0→3→4 path becomes cheaper.
        let e0 = routing_core::EdgeId(0);
        graph.edge_mut(e0).unwrap().observe(0.01).unwrap();

        let after = AStarRouter.route(&graph, n0, n4).unwrap();
        assert!(after.cost > before);
        assert_eq!(after.nodes[1].index(), 3);
    }
}

// ── Heuristic admissibility ─────────────────────────────────────────────────────

#[cfg(test)]
mod heuristic {
    #[test]
    fn heuristic_never_exceeds_true_cost() {
        let (graph, [n0, _, _, _, n4]) = super::helpers::line_graph();
        let h = graph.heuristic(n0, n4).unwrap();
        let true_cost = crate::astar::AStarRouter
            .route(&graph, n0, n4)
            .unwrap()
            .cost;
        assert!(h <= true_cost + 1e-9);
    }

    #[test]
    fn heuristic_zero_for_same_node() {
        let (graph, [n0, ..]) = super::helpers::line_graph();
        assert_eq!(graph.heuristic(n0, n0).unwrap(), 0.0);
    }
}

// ── EdgeModel EMA ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edge_model {
    use routing_core::{EdgeId, NodeId};

    use crate::edge::EdgeModel;
    use crate::error::GraphError;

    #[test]
    fn first_observation_replaces_estimate_exactly() {
        let mut e = EdgeModel::new(EdgeId(0), NodeId(0), NodeId(1), 100.0, 10.0);
        assert_eq!(e.current_travel_time, 10.0); // synthetic estimate: 100/10

        e.observe(20.0).unwrap(); // measured = 100/20 = 5.0
        assert!((e.current_travel_time - 5.0).abs() < 1e-9);
        assert_eq!(e.observation_count, 1);
    }

    #[test]
    fn steady_state_uses_point_two_alpha() {
        let mut e = EdgeModel::new(EdgeId(0), NodeId(0), NodeId(1), 100.0, 10.0);
        e.observe(10.0).unwrap(); // first: ema = 10.0 (measured = 100/10)
        e.observe(20.0).unwrap(); // second: measured = 5.0, ema = 0.2*5 + 0.8*10 = 9.0
        assert!((e.ema_travel_time - 9.0).abs() < 1e-9);
        assert_eq!(e.current_travel_time, e.ema_travel_time);
    }

    #[test]
    fn non_positive_speed_rejected_without_mutation() {
        let mut e = EdgeModel::new(EdgeId(0), NodeId(0), NodeId(1), 100.0, 10.0);
        let before = e.current_travel_time;
        let err = e.observe(0.0).unwrap_err();
        assert!(matches!(err, GraphError::BadSpeed(_)));
        assert_eq!(e.current_travel_time, before);
        assert_eq!(e.observation_count, 0);
    }

    #[test]
    fn predict_before_observation_equals_synthetic_estimate() {
        let e = EdgeModel::new(EdgeId(0), NodeId(0), NodeId(1), 50.0, 5.0);
        assert_eq!(e.predict(), 10.0);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::loader::load_graph_readers;

    #[test]
    fn loads_nodes_and_edges() {
        let nodes = "id,x,y\n0,0.0,0.0\n1,0.0,1.0\n";
        let edges = "id,from,to,base_length,base_speed_limit\n0,0,1,100.0,10.0\n";

        let graph = load_graph_readers(Cursor::new(nodes), Cursor::new(edges)).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn missing_node_id_fails() {
        // Two rows declared but only id 0 present; id 1 never gets a position.
        let nodes = "id,x,y\n0,0.0,0.0\n0,0.0,0.0\n";
        let edges = "id,from,to,base_length,base_speed_limit\n";
        assert!(load_graph_readers(Cursor::new(nodes), Cursor::new(edges)).is_err());
    }
}
