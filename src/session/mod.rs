// src/session/mod.rs
//! The interaction controller.
//!
//! Running an operation takes two calls: `request_inputs` says which author
//! ids are needed, `resolve` validates them, runs the analysis and hands the
//! result to the ports. A failed attempt leaves nothing behind: the session is
//! back to `Idle`, no canvas command was issued and the last highlighted
//! author is unchanged.

pub mod operation;

pub use operation::{InputRequest, Operation};

use crate::config::Config;
use crate::connectivity;
use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, Node};
use crate::paths;
use crate::ports::{Canvas, CanvasCommand, Panel};
use crate::present::{self, highlight, AuthorCard, View};
use crate::queue::CooperationQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    AwaitingInput(Operation),
    Executing(Operation),
}

/// A finished computation, not yet delivered.
struct Outcome {
    view: View,
    commands: Vec<CanvasCommand>,
    highlighted: Option<String>,
}

impl Outcome {
    fn view(view: View) -> Self {
        Self {
            view,
            commands: Vec::new(),
            highlighted: None,
        }
    }
}

pub struct Session {
    graph: GraphStore,
    config: Config,
    state: ControllerState,
    last_highlighted: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(graph: GraphStore, config: Config) -> Self {
        Self {
            graph,
            config,
            state: ControllerState::Idle,
            last_highlighted: None,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn last_highlighted(&self) -> Option<&str> {
        self.last_highlighted.as_deref()
    }

    /// Selects `op` and returns the prompts it needs. Selecting again
    /// discards any operation still waiting for input.
    pub fn request_inputs(&mut self, op: Operation) -> InputRequest {
        if let ControllerState::AwaitingInput(pending) = self.state {
            tracing::debug!(%pending, "discarding pending operation");
        }
        self.state = ControllerState::AwaitingInput(op);
        InputRequest {
            operation: op,
            prompts: op.prompts().to_vec(),
        }
    }

    /// Drops an operation still waiting for input, e.g. when the user gives
    /// up halfway through the prompts. No-op while `Idle`.
    pub fn cancel(&mut self) {
        if let ControllerState::AwaitingInput(pending) = self.state {
            tracing::debug!(%pending, "input abandoned");
            self.state = ControllerState::Idle;
        }
    }

    /// Runs the pending operation with `inputs`, one per prompt.
    ///
    /// On success the canvas receives the highlight commands and the panel
    /// the view (and, for the distance table, every intermediate frame). On
    /// failure the panel receives the error message and nothing else.
    ///
    /// # Errors
    /// `NoPendingOperation` without a prior `request_inputs`; otherwise the
    /// validation or analysis error of the operation.
    pub fn resolve(
        &mut self,
        inputs: &[&str],
        canvas: &mut dyn Canvas,
        panel: &mut dyn Panel,
    ) -> Result<View> {
        let ControllerState::AwaitingInput(op) = self.state else {
            return Err(GraphError::NoPendingOperation);
        };

        self.state = ControllerState::Executing(op);
        tracing::info!(operation = %op, "executing");
        let result = self.execute(op, inputs, panel);
        self.state = ControllerState::Idle;

        match result {
            Ok(outcome) => {
                for command in &outcome.commands {
                    canvas.apply(command);
                }
                if let Some(id) = outcome.highlighted {
                    self.last_highlighted = Some(id);
                }
                panel.show(&outcome.view);
                Ok(outcome.view)
            }
            Err(e) => {
                if e.is_user_error() {
                    tracing::info!(operation = %op, error = %e, "aborted");
                } else {
                    tracing::warn!(operation = %op, error = %e, "failed");
                }
                panel.notify(&e.to_string());
                Err(e)
            }
        }
    }

    /// `request_inputs` followed by `resolve`.
    ///
    /// # Errors
    /// See [`Session::resolve`].
    pub fn run(
        &mut self,
        op: Operation,
        inputs: &[&str],
        canvas: &mut dyn Canvas,
        panel: &mut dyn Panel,
    ) -> Result<View> {
        self.request_inputs(op);
        self.resolve(inputs, canvas, panel)
    }

    /// Author details: id, name, connection count and papers.
    ///
    /// # Errors
    /// `InputInvalid` for an empty id, `IdentifierNotFound` for an unknown one.
    pub fn describe(&self, id: &str) -> Result<View> {
        let node = self.author(Some(id), "Author id")?;
        let connections = connectivity::degree(&self.graph, &node.id);
        Ok(View::AuthorCard(AuthorCard::new(node, connections)))
    }

    fn execute(&self, op: Operation, inputs: &[&str], panel: &mut dyn Panel) -> Result<Outcome> {
        let prompts = op.prompts();
        if inputs.len() > prompts.len() {
            return Err(GraphError::InputInvalid(format!(
                "{} expects {} author id(s), got {}",
                op.name(),
                prompts.len(),
                inputs.len()
            )));
        }
        let ids: Vec<Option<&str>> = (0..prompts.len()).map(|i| inputs.get(i).copied()).collect();

        match op {
            Operation::ShortestPath => self.shortest_path(&ids),
            Operation::CooperationQueue => self.cooperation_queue(&ids),
            Operation::CollaboratorTree => self.collaborator_tree(&ids),
            Operation::DistanceTable => self.distance_table(&ids, panel),
            Operation::ConnectionCount => self.connection_count(&ids),
            Operation::MostConnected => self.most_connected(),
            Operation::LongestPath => self.longest_path(&ids),
        }
    }

    fn shortest_path(&self, ids: &[Option<&str>]) -> Result<Outcome> {
        let source = required(ids, 0, "Source author id")?;
        let target = required(ids, 1, "Target author id")?;
        let source = self.author(Some(source), "Source author id")?;
        let target = self.author(Some(target), "Target author id")?;

        let route = paths::shortest_path(&self.graph, &source.id, &target.id)?;
        let commands = route.as_ref().map_or_else(Vec::new, |r| {
            highlight::path_commands(&self.graph, &r.path, &self.config.palette, &self.config.camera)
        });

        Ok(Outcome {
            view: present::shortest_path_view(&source.id, &target.id, route),
            commands,
            highlighted: None,
        })
    }

    fn cooperation_queue(&self, ids: &[Option<&str>]) -> Result<Outcome> {
        let author = self.author(ids.first().copied().flatten(), "Author id")?;
        let collaborators = self.collaborators(author)?;

        let mut queue = CooperationQueue::new();
        queue.enqueue(author, author.paper_count());
        for node in collaborators {
            queue.enqueue(node, node.paper_count());
        }
        Ok(Outcome::view(present::queue_view(author, &queue)))
    }

    fn collaborator_tree(&self, ids: &[Option<&str>]) -> Result<Outcome> {
        let author = self.author(ids.first().copied().flatten(), "Author id")?;
        let labels: Vec<String> = self
            .collaborators(author)?
            .into_iter()
            .map(|n| n.label.clone())
            .collect();
        Ok(Outcome::view(present::tree_view(author, &labels)))
    }

    fn distance_table(&self, ids: &[Option<&str>], panel: &mut dyn Panel) -> Result<Outcome> {
        let author = self.author(ids.first().copied().flatten(), "Author id")?;
        let live = self.config.display.live_table;
        let table = paths::progressive_distances(&self.graph, &author.id, |frame| {
            if live {
                panel.show(&View::TableFrame(frame.clone()));
            }
        })?;
        Ok(Outcome::view(View::DistanceTable(table)))
    }

    fn connection_count(&self, ids: &[Option<&str>]) -> Result<Outcome> {
        let author = self.author(ids.first().copied().flatten(), "Author id")?;
        let count = connectivity::degree(&self.graph, &author.id);
        Ok(self.highlighted(
            View::ConnectionCount(present::degree_report(author, count)),
            &author.id,
        ))
    }

    fn most_connected(&self) -> Result<Outcome> {
        let (author, count) =
            connectivity::max_degree_node(&self.graph).ok_or(GraphError::EmptyGraph)?;
        Ok(self.highlighted(
            View::MostConnected(present::degree_report(author, count)),
            &author.id,
        ))
    }

    fn longest_path(&self, ids: &[Option<&str>]) -> Result<Outcome> {
        let author = self.author(ids.first().copied().flatten(), "Author id")?;
        if let Some(limit) = self.config.limits.longest_path_max_nodes {
            let size = paths::component_size(&self.graph, &author.id);
            if size > limit {
                return Err(GraphError::SearchTooLarge {
                    id: author.id.clone(),
                    size,
                    limit,
                });
            }
        }

        let path = paths::longest_simple_path(&self.graph, &author.id)
            .ok_or_else(|| GraphError::IdentifierNotFound(author.id.clone()))?;
        Ok(Outcome::view(present::longest_path_view(&author.id, path)))
    }

    fn highlighted(&self, view: View, id: &str) -> Outcome {
        let commands = highlight::node_commands(
            &self.graph,
            self.last_highlighted(),
            id,
            &self.config.palette,
            &self.config.camera,
        );
        Outcome {
            view,
            commands,
            highlighted: Some(id.to_string()),
        }
    }

    fn author(&self, input: Option<&str>, prompt: &str) -> Result<&Node> {
        let id = input.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
            GraphError::InputInvalid(format!("{prompt} is required"))
        })?;
        self.graph
            .find_node(id)
            .ok_or_else(|| GraphError::IdentifierNotFound(id.to_string()))
    }

    fn collaborators(&self, author: &Node) -> Result<Vec<&Node>> {
        let nodes: Vec<&Node> = self
            .graph
            .neighbors(&author.id)
            .into_iter()
            .filter_map(|id| self.graph.find_node(id))
            .collect();
        if nodes.is_empty() {
            return Err(GraphError::NoConnections(author.id.clone()));
        }
        Ok(nodes)
    }
}

/// Presence check only; lookups happen after every input is present.
fn required<'a>(ids: &[Option<&'a str>], index: usize, prompt: &str) -> Result<&'a str> {
    ids.get(index)
        .copied()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| GraphError::InputInvalid(format!("{prompt} is required")))
}
