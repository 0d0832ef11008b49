//! Structured log events emitted by the engines.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use searchforge_core::{ActionList, Heuristic, SearchProblem};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use super::line_graph;
use crate::{AStarSearch, BidirectionalSearch, BreadthFirstSearch, SearchEngine};

/// Collects the `event` field of every event.
#[derive(Debug, Clone, Default)]
struct EventLog(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventName(None);
        event.record(&mut visitor);
        if let Some(name) = visitor.0 {
            self.0.lock().unwrap().push(name);
        }
    }
}

struct EventName(Option<String>);

impl Visit for EventName {
    fn record_debug(&mut self, _field: &Field, _value: &dyn Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.0 = Some(value.to_string());
        }
    }
}

fn capture_events(run: impl FnOnce()) -> Vec<String> {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    tracing::subscriber::with_default(subscriber, run);
    let events = log.0.lock().unwrap().clone();
    events
}

/// Single state with no goal states at all.
#[derive(Debug)]
struct NoGoal;

impl SearchProblem for NoGoal {
    type State = usize;
    type Action = usize;
    type Cost = u64;

    fn init_state(&self) -> &usize {
        &0
    }

    fn goal_states(&self) -> &[usize] {
        &[]
    }

    fn actions(&self, _state: &usize) -> ActionList<usize> {
        ActionList::new()
    }

    fn successor(&self, _state: &usize, action: &usize) -> (usize, u64) {
        (*action, 1)
    }
}

impl Heuristic for NoGoal {
    fn heuristic(&self, _state: &usize, _goal: &usize) -> u64 {
        0
    }
}

fn engines() -> Vec<Box<dyn SearchEngine<NoGoal>>> {
    vec![
        Box::new(BreadthFirstSearch::default()),
        Box::new(BidirectionalSearch::default()),
        Box::new(AStarSearch::default()),
    ]
}

#[test]
fn test_missing_goal_still_ends_search() {
    for mut engine in engines() {
        let mut result = None;
        let events = capture_events(|| result = Some(engine.search(&NoGoal)));

        let result = result.unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_expanded(), 0);
        assert_eq!(events, vec!["search_start", "search_end"], "{}", engine.engine_name());
    }
}

#[test]
fn test_solved_search_events() {
    let events = capture_events(|| {
        BreadthFirstSearch::default().search(&line_graph(4));
    });

    assert_eq!(events.first().map(String::as_str), Some("search_start"));
    assert_eq!(events.last().map(String::as_str), Some("search_end"));
}
