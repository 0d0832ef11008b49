//! Colorful console output for search and solver events.
//!
//! A `tracing` layer that renders the structured events emitted by the
//! SearchForge crates.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the console layer with an `EnvFilter` (defaults to `info` for
/// the SearchForge crates).
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already set.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        for crate_name in ["searchforge_search", "searchforge_solver", "searchforge_logic"] {
            if let Ok(directive) = format!("{crate_name}=info").parse() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats SearchForge events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("searchforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    engine: Option<String>,
    phase: Option<String>,
    planner: Option<String>,
    solved: Option<bool>,
    phase_index: Option<u64>,
    duration_ms: Option<u64>,
    steps: Option<u64>,
    conflicts: Option<u64>,
    path_len: Option<u64>,
    nodes_expanded: Option<u64>,
    max_frontier_size: Option<u64>,
    board_size: Option<u64>,
    limit: Option<u64>,
    iterations: Option<u64>,
    speed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "engine" => self.engine = value,
            "phase" => self.phase = value,
            "planner" => self.planner = value,
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "solved" {
            self.solved = Some(value);
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let value = Some(value);
        match field.name() {
            "phase_index" => self.phase_index = value,
            "duration_ms" => self.duration_ms = value,
            "steps" => self.steps = value,
            "conflicts" => self.conflicts = value,
            "path_len" => self.path_len = value,
            "nodes_expanded" => self.nodes_expanded = value,
            "max_frontier_size" => self.max_frontier_size = value,
            "board_size" => self.board_size = value,
            "limit" => self.limit = value,
            "iterations" => self.iterations = value,
            "speed" => self.speed = value,
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "expansion_limit" => format_expansion_limit(v),
        "solve_start" => format_solve_start(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "solve_end" | "planning_end" => format_finished(v),
        _ => String::new(),
    }
}

fn tag(label: &str) -> String {
    format!("[{label}]").bright_cyan().to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("Search");
    format!(
        "{} {} {} search started",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(engine),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("Search");
    let status = if v.solved.unwrap_or(false) {
        format!("path found ({} states)", count(v.path_len))
            .bright_green()
            .to_string()
    } else {
        "no path".bright_red().to_string()
    };
    format!(
        "{} {} {} {}: time spent ({}), nodes expanded ({}), max frontier ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(engine),
        status,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes_expanded).bright_magenta().bold(),
        count(v.max_frontier_size).white(),
        count(v.speed).bright_magenta(),
    )
}

fn format_expansion_limit(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("Search");
    format!(
        "{} {} {} expansion limit ({}) reached",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        tag(engine),
        count(v.limit).yellow(),
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} board size ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag("Solver"),
        count(v.board_size).bright_yellow(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} {} {} phase ({}) started",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(phase),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow(),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let conflicts = v.conflicts.unwrap_or(0);
    let conflicts = if conflicts == 0 {
        count(Some(conflicts)).bright_green().to_string()
    } else {
        count(Some(conflicts)).bright_red().to_string()
    };
    format!(
        "{} {} {} {} phase ({}) ended: time spent ({}), conflicts ({}), step total ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(phase),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        conflicts,
        count(v.steps).white(),
        count(v.speed).bright_magenta(),
    )
}

fn format_finished(v: &EventVisitor) -> String {
    let label = v.planner.as_deref().unwrap_or("Solver");
    let status = if v.solved.unwrap_or(false) {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "NOT SOLVED".bright_red().bold().to_string()
    };
    let work = match (v.steps, v.iterations) {
        (Some(steps), _) => format!("steps ({})", count(Some(steps))),
        (None, Some(_)) => format!("iterations ({})", count(v.iterations)),
        (None, None) => String::new(),
    };
    format!(
        "{} {} {} {} {}, time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(label),
        status,
        work,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}
