use searchforge_core::{
    path_cost, GraphProblem, GridProblem, SearchProblem, UniformCost, WeightedGraphProblem,
};
use searchforge_test::{
    bfs_distance, dijkstra_distance, random_graph, random_weighted_graph, scenario_a_graph,
    seeded_rng,
};

use super::limited;
use crate::{
    a_star_search, breadth_first_search, AStarSearch, BidirectionalSearch, BreadthFirstSearch,
    SearchEngine,
};

/// `0 -1- 1 -1- 2 -20- 3` plus a direct `0 -10- 2` edge.
///
/// Vertex 2 is first queued through the direct edge, then improved through
/// vertex 1, which leaves one outdated heap entry.
fn improved_vertex_graph() -> WeightedGraphProblem {
    WeightedGraphProblem::new(
        &[0, 1, 2, 3],
        &[(0, 1, 1), (0, 2, 10), (1, 2, 1), (2, 3, 20)],
        0,
        vec![3],
    )
    .unwrap()
}

#[test]
fn test_reopens_improved_state() {
    let problem = improved_vertex_graph();
    let result = a_star_search(&problem);

    assert_eq!(result.path, vec![0, 1, 2, 3]);
    assert_eq!(path_cost(&problem, &result.path), Some(22));
}

#[test]
fn test_stale_entries_are_not_expansions() {
    let result = a_star_search(&improved_vertex_graph());

    assert_eq!(result.stats.stale_skipped, 1);
    assert_eq!(result.nodes_expanded(), 3);
}

#[test]
fn test_trivial_path_is_single_state() {
    let problem = scenario_a_graph().with_endpoints(3, vec![3]).unwrap();
    let result = a_star_search(&UniformCost::new(&problem));

    assert_eq!(result.path, vec![3]);
    assert_eq!(result.nodes_expanded(), 0);
}

#[test]
fn test_uniform_cost_matches_bfs_hops() {
    let problem = scenario_a_graph();
    let result = a_star_search(&UniformCost::new(&problem));

    assert_eq!(result.hops(), 4);
    assert!(problem.check_solution(&result.path));
}

#[test]
fn test_optimal_on_random_weighted_graphs() {
    let mut rng = seeded_rng(11);
    for _ in 0..60 {
        let problem = random_weighted_graph(25, 0.12, 9, &mut rng);
        let result = a_star_search(&problem);

        match dijkstra_distance(&problem) {
            Some(distance) => {
                assert!(problem.check_solution(&result.path));
                assert_eq!(path_cost(&problem, &result.path), Some(distance));
            }
            None => assert!(result.path.is_empty()),
        }
    }
}

#[test]
fn test_uniform_cost_on_random_graphs() {
    let mut rng = seeded_rng(5);
    for _ in 0..40 {
        let problem: GraphProblem = random_graph(20, 0.12, &mut rng);
        let result = a_star_search(&UniformCost::new(&problem));

        assert_eq!(
            result.is_solved().then_some(result.hops()),
            bfs_distance(&problem)
        );
    }
}

#[test]
fn test_manhattan_matches_bfs_on_random_grids() {
    let mut rng = seeded_rng(19);
    for _ in 0..40 {
        let problem = GridProblem::random(0.3, 10, 10, &mut rng).unwrap();
        let result = a_star_search(&problem);
        let reference = breadth_first_search(&problem);

        assert_eq!(result.path.len(), reference.path.len());
        if result.is_solved() {
            assert!(problem.check_solution(&result.path));
        }
    }
}

#[test]
fn test_walled_grid_has_no_path() {
    // . # .
    // . # .
    // . # .
    let occupied = vec![false, true, false, false, true, false, false, true, false];
    let problem = GridProblem::new(3, 3, occupied, 0, vec![2]).unwrap();
    let result = a_star_search(&problem);

    assert!(result.path.is_empty());
    assert_eq!(result.nodes_expanded(), 3);
}

#[test]
fn test_expansion_limit() {
    let problem = GridProblem::new(1, 6, vec![false; 6], 0, vec![5]).unwrap();
    let result = AStarSearch::new(limited(3)).search(&problem);

    assert!(!result.is_solved());
    assert_eq!(result.nodes_expanded(), 3);
}

#[test]
fn test_engines_agree_through_trait_objects() {
    let problem = GridProblem::new(4, 4, vec![false; 16], 0, vec![15]).unwrap();
    let mut engines: Vec<Box<dyn SearchEngine<GridProblem>>> = vec![
        Box::new(BreadthFirstSearch::default()),
        Box::new(BidirectionalSearch::default()),
        Box::new(AStarSearch::default()),
    ];

    for engine in &mut engines {
        let result = engine.search(&problem);
        assert_eq!(result.hops(), 6, "{}", engine.engine_name());
    }
}
