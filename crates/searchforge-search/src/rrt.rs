//! Rapidly-exploring random trees.
//!
//! Each iteration samples a configuration, picks the tree node with the
//! cheapest steering path towards it, propagates from that node and keeps
//! the result if the segment is collision free. After every accepted node
//! the planner tries to propagate straight to the goal.

use std::fmt::Debug;
use std::time::Instant;

use rand::Rng;
use searchforge_config::{RrtConfig, SearchForgeConfig};
use tracing::{debug, info, warn};

/// Sampling-based planning problem (vehicle kinematics, map, obstacles).
pub trait RrtProblem {
    /// Vehicle configuration, e.g. `(x, y, yaw)`.
    type Config: Clone + Debug;

    /// Returns the start configuration.
    fn start(&self) -> Self::Config;

    /// Returns the goal configuration.
    fn goal(&self) -> Self::Config;

    /// Draws a random configuration inside the map bounds.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Config;

    /// Cost of the steering path from `from` towards `to`.
    fn steering_cost(&self, from: &Self::Config, to: &Self::Config) -> f64;

    /// Configuration reached when steering from `from` towards `to`.
    fn propagate(&self, from: &Self::Config, to: &Self::Config) -> Self::Config;

    /// Returns true if the steering segment from `from` to `to` stays inside
    /// the map and clear of obstacles.
    fn is_collision_free(&self, from: &Self::Config, to: &Self::Config) -> bool;

    /// Returns true if `config` is close enough to the goal.
    fn reaches_goal(&self, config: &Self::Config) -> bool;
}

#[derive(Debug, Clone)]
struct TreeNode<C> {
    config: C,
    parent: Option<usize>,
    cost: f64,
}

/// Planning outcome.
#[derive(Debug, Clone)]
pub struct RrtResult<C> {
    /// Configurations from start to goal; node `i`'s parent is node `i - 1`.
    /// Empty if the iteration budget ran out.
    pub path: Vec<C>,
    /// Samples drawn.
    pub iterations: u64,
    /// Nodes in the tree when planning stopped, start included.
    pub tree_size: usize,
    /// Accumulated steering cost of the path.
    pub path_cost: f64,
}

impl<C> RrtResult<C> {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// RRT planner with a bounded number of samples.
///
/// # Example
///
/// ```
/// use searchforge_search::RrtPlanner;
///
/// let planner = RrtPlanner::new(200);
/// assert_eq!(planner.max_iterations(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct RrtPlanner {
    max_iterations: u64,
}

impl Default for RrtPlanner {
    fn default() -> Self {
        Self::from_rrt_config(&RrtConfig::default())
    }
}

impl RrtPlanner {
    pub fn new(max_iterations: u64) -> Self {
        Self { max_iterations }
    }

    pub fn from_rrt_config(config: &RrtConfig) -> Self {
        Self::new(config.max_iterations)
    }

    /// Creates a planner from the `[rrt]` section of a full config.
    pub fn from_config(config: &SearchForgeConfig) -> Self {
        Self::from_rrt_config(&config.rrt)
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Grows a tree from the start until the goal is connected or the
    /// iteration budget is spent.
    pub fn plan<P, R>(&self, problem: &P, rng: &mut R) -> RrtResult<P::Config>
    where
        P: RrtProblem,
        R: Rng + ?Sized,
    {
        let start_time = Instant::now();
        let goal = problem.goal();
        let mut tree = vec![TreeNode {
            config: problem.start(),
            parent: None,
            cost: 0.0,
        }];

        info!(
            event = "planning_start",
            planner = "RRT",
            max_iterations = self.max_iterations,
        );

        let mut iterations = 0u64;
        while iterations < self.max_iterations {
            iterations += 1;
            let sample = problem.sample(rng);

            let Some(nearest) = nearest_node(problem, &tree, &sample) else {
                break;
            };
            let from = &tree[nearest];
            let config = problem.propagate(&from.config, &sample);
            if !problem.is_collision_free(&from.config, &config) {
                continue;
            }
            let cost = from.cost + problem.steering_cost(&from.config, &config);
            tree.push(TreeNode {
                config,
                parent: Some(nearest),
                cost,
            });
            let added = tree.len() - 1;

            let last = &tree[added];
            let to_goal = problem.propagate(&last.config, &goal);
            if problem.reaches_goal(&to_goal) && problem.is_collision_free(&last.config, &to_goal)
            {
                let cost = last.cost + problem.steering_cost(&last.config, &to_goal);
                tree.push(TreeNode {
                    config: to_goal,
                    parent: Some(added),
                    cost,
                });
                let goal_index = tree.len() - 1;
                let path_cost = tree[goal_index].cost;
                let path = trace_back(&tree, goal_index);
                info!(
                    event = "planning_end",
                    planner = "RRT",
                    solved = true,
                    iterations = iterations,
                    tree_size = tree.len() as u64,
                    path_len = path.len() as u64,
                    duration_ms = start_time.elapsed().as_millis() as u64,
                );
                return RrtResult {
                    path,
                    iterations,
                    tree_size: tree.len(),
                    path_cost,
                };
            }

            debug!(event = "tree_grown", iteration = iterations, tree_size = tree.len() as u64);
        }

        warn!(
            event = "planning_end",
            planner = "RRT",
            solved = false,
            iterations = iterations,
            tree_size = tree.len() as u64,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Reached max iterations without connecting the goal"
        );
        RrtResult {
            path: Vec::new(),
            iterations,
            tree_size: tree.len(),
            path_cost: 0.0,
        }
    }
}

/// Index of the node with the cheapest steering path to `target`.
fn nearest_node<P: RrtProblem>(
    problem: &P,
    tree: &[TreeNode<P::Config>],
    target: &P::Config,
) -> Option<usize> {
    tree.iter()
        .enumerate()
        .map(|(index, node)| (index, problem.steering_cost(&node.config, target)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
}

fn trace_back<C: Clone>(tree: &[TreeNode<C>], leaf: usize) -> Vec<C> {
    let mut path: Vec<C> = std::iter::successors(Some(leaf), |&index| tree[index].parent)
        .map(|index| tree[index].config.clone())
        .collect();
    path.reverse();
    path
}
