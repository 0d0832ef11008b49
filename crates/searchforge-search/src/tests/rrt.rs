use rand::Rng;
use searchforge_config::SearchForgeConfig;
use searchforge_test::seeded_rng;

use crate::{RrtPlanner, RrtProblem};

type Point = (f64, f64);

/// Point robot on a square map with axis-aligned rectangular obstacles.
struct PointRobot {
    size: f64,
    step: f64,
    start: Point,
    goal: Point,
    // (min_x, min_y, max_x, max_y)
    obstacles: Vec<(f64, f64, f64, f64)>,
}

impl PointRobot {
    fn open(size: f64) -> Self {
        Self {
            size,
            step: 1.0,
            start: (0.5, 0.5),
            goal: (size - 0.5, size - 0.5),
            obstacles: Vec::new(),
        }
    }

    fn with_obstacle(mut self, rect: (f64, f64, f64, f64)) -> Self {
        self.obstacles.push(rect);
        self
    }

    fn is_free(&self, (x, y): Point) -> bool {
        (0.0..=self.size).contains(&x)
            && (0.0..=self.size).contains(&y)
            && !self
                .obstacles
                .iter()
                .any(|&(x0, y0, x1, y1)| x >= x0 && x <= x1 && y >= y0 && y <= y1)
    }
}

fn distance(a: &Point, b: &Point) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

impl RrtProblem for PointRobot {
    type Config = Point;

    fn start(&self) -> Point {
        self.start
    }

    fn goal(&self) -> Point {
        self.goal
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        (
            rng.random_range(0.0..self.size),
            rng.random_range(0.0..self.size),
        )
    }

    fn steering_cost(&self, from: &Point, to: &Point) -> f64 {
        distance(from, to)
    }

    fn propagate(&self, from: &Point, to: &Point) -> Point {
        let d = distance(from, to);
        if d <= self.step {
            return *to;
        }
        let t = self.step / d;
        (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
    }

    fn is_collision_free(&self, from: &Point, to: &Point) -> bool {
        (0..=20).all(|i| {
            let t = f64::from(i) / 20.0;
            self.is_free((from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t))
        })
    }

    fn reaches_goal(&self, config: &Point) -> bool {
        distance(config, &self.goal) < 1e-9
    }
}

#[test]
fn test_open_map_is_solved() {
    let problem = PointRobot::open(10.0);
    let mut rng = seeded_rng(1);
    let result = RrtPlanner::new(5_000).plan(&problem, &mut rng);

    assert!(result.is_solved());
    assert_eq!(result.path.first(), Some(&problem.start));
    assert_eq!(result.path.last(), Some(&problem.goal));
    assert!(result.tree_size >= result.path.len());
}

#[test]
fn test_path_respects_step_and_obstacles() {
    let problem = PointRobot::open(10.0).with_obstacle((3.0, 0.0, 4.0, 7.0));
    let mut rng = seeded_rng(2);
    let result = RrtPlanner::new(20_000).plan(&problem, &mut rng);

    assert!(result.is_solved());
    for pair in result.path.windows(2) {
        assert!(distance(&pair[0], &pair[1]) <= problem.step + 1e-9);
        assert!(problem.is_collision_free(&pair[0], &pair[1]));
    }
    let total: f64 = result
        .path
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum();
    assert!((total - result.path_cost).abs() < 1e-6);
}

#[test]
fn test_walled_goal_exhausts_iterations() {
    let problem = PointRobot::open(10.0).with_obstacle((4.0, -1.0, 6.0, 11.0));
    let mut rng = seeded_rng(3);
    let result = RrtPlanner::new(300).plan(&problem, &mut rng);

    assert!(!result.is_solved());
    assert_eq!(result.iterations, 300);
    assert!(result.tree_size >= 1);
}

#[test]
fn test_same_seed_same_plan() {
    let problem = PointRobot::open(8.0);
    let first = RrtPlanner::new(5_000).plan(&problem, &mut seeded_rng(9));
    let second = RrtPlanner::new(5_000).plan(&problem, &mut seeded_rng(9));

    assert_eq!(first.path, second.path);
    assert_eq!(first.iterations, second.iterations);
}

#[test]
fn test_planner_from_config() {
    let config = SearchForgeConfig::default().with_rrt_max_iterations(42);

    assert_eq!(RrtPlanner::from_config(&config).max_iterations(), 42);
    assert_eq!(RrtPlanner::default().max_iterations(), 500);
}
