// src/reporting/console.rs
use colored::Colorize;

use super::shared::{format_distance, join_route, pluralize};
use crate::paths::DistanceTable;
use crate::ports::Panel;
use crate::present::{
    AuthorCard, DegreeReport, LongestPathSummary, PathSummary, QueueEntry, QueueTrace, TreeLayout,
    View,
};

/// Colored terminal rendering of views.
#[derive(Debug, Clone)]
pub struct TerminalPanel {
    tree_width: usize,
    frames_seen: usize,
}

impl TerminalPanel {
    #[must_use]
    pub fn new(tree_width: usize) -> Self {
        Self {
            tree_width,
            frames_seen: 0,
        }
    }
}

impl Panel for TerminalPanel {
    fn show(&mut self, view: &View) {
        if !matches!(view, View::TableFrame(_)) {
            self.frames_seen = 0;
        }
        match view {
            View::ShortestPath(s) => print_path(s),
            View::CooperationQueue(q) => print_queue(q),
            View::CollaboratorTree(t) => print_tree(t, self.tree_width),
            View::TableFrame(t) => {
                self.frames_seen += 1;
                print_frame(t, self.frames_seen);
            }
            View::DistanceTable(t) => print_table(t),
            View::ConnectionCount(r) => print_count(r),
            View::MostConnected(r) => print_most_connected(r),
            View::LongestPath(l) => print_longest(l),
            View::AuthorCard(c) => print_card(c),
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{} {message}", "!".yellow().bold());
    }
}

fn header(title: &str) {
    println!("{}", title.cyan().bold());
}

fn print_path(s: &PathSummary) {
    header("Shortest path");
    println!("  {} {}", "source:".dimmed(), s.source);
    println!("  {} {}", "target:".dimmed(), s.target);
    match &s.route {
        Some(route) => {
            println!("  {} {}", "path:".dimmed(), join_route(&route.path).green());
            println!("  {} {}", "total weight:".dimmed(), route.total_weight);
        }
        None => println!(
            "  {}",
            format!("No path found between {} and {}.", s.source, s.target).yellow()
        ),
    }
}

fn entry(e: &QueueEntry) -> String {
    format!("{} ({} {})", e.label, e.papers, pluralize("paper", e.papers))
}

fn print_queue(q: &QueueTrace) {
    header("Queue construction steps");
    println!("  {} {}", "selected author:".dimmed(), q.author);
    for step in &q.steps {
        let state: Vec<String> = step.state.iter().map(entry).collect();
        println!("  {} {}", format!("step {}:", step.index).bold(), state.join(" → "));
        println!("    {} {}", "added:".green(), entry(&step.inserted));
    }
    let order: Vec<String> = q.final_order.iter().map(entry).collect();
    println!("  {} {}", "final order:".bold(), order.join(" → "));
}

fn print_tree(t: &TreeLayout, width: usize) {
    header(&format!(
        "Collaborator tree of {} ({} {})",
        t.author,
        t.label_count(),
        pluralize("collaborator", t.label_count())
    ));
    println!("{}", t.render(width));
}

fn print_frame(t: &DistanceTable, n: usize) {
    let settled = t.settled.as_deref().unwrap_or("-");
    let distance = t
        .rows
        .iter()
        .find(|r| Some(r.node.as_str()) == t.settled.as_deref())
        .map_or_else(|| "∞".to_string(), |r| format_distance(r.distance));
    println!(
        "{}",
        format!("  [{n}/{}] settled {settled} at distance {distance}", t.rows.len()).dimmed()
    );
}

fn print_table(t: &DistanceTable) {
    header(&format!("Shortest distances from {}", t.source));
    let width = t.rows.iter().map(|r| r.node.chars().count()).max().unwrap_or(4).max(4);
    println!("  {:<width$}  {:>8}  {}", "Node".bold(), "Distance".bold(), "Previous".bold());
    for row in &t.rows {
        println!(
            "  {:<width$}  {:>8}  {}",
            row.node,
            format_distance(row.distance),
            row.previous.as_deref().unwrap_or("-")
        );
    }
}

fn print_count(r: &DegreeReport) {
    println!(
        "{} {} ({}) has {} {}",
        "Connections:".cyan().bold(),
        r.label,
        r.id.dimmed(),
        r.connections.to_string().bold(),
        pluralize("connection", r.connections)
    );
}

fn print_most_connected(r: &DegreeReport) {
    println!(
        "{} {} ({}) with {} {}",
        "Most connected author:".cyan().bold(),
        r.label,
        r.id.dimmed(),
        r.connections.to_string().bold(),
        pluralize("connection", r.connections)
    );
}

fn print_longest(l: &LongestPathSummary) {
    header(&format!("Longest path from {}", l.source));
    println!("  {}", join_route(&l.path).green());
    println!("  {} {}", "length:".dimmed(), l.length);
}

fn print_card(c: &AuthorCard) {
    header(&c.label);
    println!("  {} {}", "id:".dimmed(), c.id);
    println!("  {} {}", "connections:".dimmed(), c.connections);
    println!("  {} {}", "papers:".dimmed(), c.paper_count);
    if c.papers.is_empty() {
        println!("    {}", "no titles on record".dimmed());
    }
    for title in &c.papers {
        println!("    - {title}");
    }
}
