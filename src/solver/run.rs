//! The solve state machine.

use std::fmt;

use log::{debug, warn};

use crate::circuit::{build_circuit, expand, route_cost, validate, Circuit};
use crate::error::{Error, Result};
use crate::matching::greedy_balancing;
use crate::models::{BalancingPath, Graph, Solution, VertexId};
use crate::shortest_path::ShortestPath;

/// Stage of a [`SolveRun`].
///
/// ```text
/// Initial ─┬─> Balancing ─┐
///          └──────────────┴─> Eulerian ─> CircuitBuilt ─> CostComputed ─> Solved
/// any stage ─> Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// Nothing checked yet.
    Initial,
    /// The graph has unbalanced vertices; the next step adds virtual edges.
    Balancing,
    /// Every vertex is balanced.
    Eulerian,
    /// The circuit is built, validated and expanded.
    CircuitBuilt,
    /// The route cost is known.
    CostComputed,
    /// The solution is available.
    Solved,
    /// A step failed; the error was returned by that step.
    Failed,
}

impl SolverState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SolverState::Solved | SolverState::Failed)
    }
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One `solve` call, advanced a stage at a time.
///
/// Holds the only mutable borrow of the graph for its whole lifetime, so
/// virtual edges are added by a single writer.
pub struct SolveRun<'a> {
    graph: &'a mut Graph,
    origin: VertexId,
    engine: &'a dyn ShortestPath,
    state: SolverState,
    balancing: Vec<BalancingPath>,
    circuit: Option<Circuit>,
    route: Vec<VertexId>,
    cost: f64,
    solution: Option<Solution>,
}

impl<'a> SolveRun<'a> {
    pub fn new(graph: &'a mut Graph, origin: VertexId, engine: &'a dyn ShortestPath) -> Self {
        Self {
            graph,
            origin,
            engine,
            state: SolverState::Initial,
            balancing: Vec::new(),
            circuit: None,
            route: Vec::new(),
            cost: 0.0,
            solution: None,
        }
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Balancing paths added so far.
    pub fn balancing(&self) -> &[BalancingPath] {
        &self.balancing
    }

    /// The circuit over real and virtual edges, once built.
    pub fn circuit(&self) -> Option<&Circuit> {
        self.circuit.as_ref()
    }

    /// Advances one stage and returns the new state.
    ///
    /// On error the run moves to [`SolverState::Failed`] and the error is
    /// returned unchanged. Stepping a solved run is a no-op; stepping a
    /// failed run is a [`Error::Configuration`].
    pub fn step(&mut self) -> Result<SolverState> {
        let from = self.state;
        match self.advance() {
            Ok(next) => {
                debug!("solve {}: {from} -> {next}", self.origin);
                self.state = next;
                Ok(next)
            }
            Err(err) => {
                warn!("solve {} failed in {from}: {err}", self.origin);
                self.state = SolverState::Failed;
                Err(err)
            }
        }
    }

    /// Runs the remaining stages and returns the solution.
    pub fn finish(mut self) -> Result<Solution> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        self.solution
            .take()
            .ok_or_else(|| Error::configuration("solve run failed earlier"))
    }

    fn advance(&mut self) -> Result<SolverState> {
        match self.state {
            SolverState::Initial => {
                if !self.graph.contains_vertex(&self.origin) {
                    return Err(Error::configuration(format!(
                        "origin {} is not a vertex of the graph",
                        self.origin
                    )));
                }
                if !self.graph.reaches_all_edges_from(&self.origin) {
                    return Err(Error::configuration(format!(
                        "some edges are not connected to origin {}",
                        self.origin
                    )));
                }
                if self.graph.is_eulerian() {
                    Ok(SolverState::Eulerian)
                } else {
                    Ok(SolverState::Balancing)
                }
            }
            SolverState::Balancing => {
                let paths = greedy_balancing(self.graph, self.engine)?;
                for balancing in &paths {
                    self.graph.add_virtual_edge(&balancing.path)?;
                }
                if !self.graph.is_eulerian() {
                    return Err(Error::invalid_circuit(format!(
                        "graph still unbalanced after {} virtual edges",
                        paths.len()
                    )));
                }
                self.balancing = paths;
                Ok(SolverState::Eulerian)
            }
            SolverState::Eulerian => {
                let circuit = build_circuit(self.graph, &self.origin)?;
                validate(&circuit, self.graph, &self.origin)?;
                self.route = expand(&circuit, self.graph)?;
                self.circuit = Some(circuit);
                Ok(SolverState::CircuitBuilt)
            }
            SolverState::CircuitBuilt => {
                let circuit = self
                    .circuit
                    .as_ref()
                    .ok_or_else(|| Error::invalid_circuit("no circuit to cost"))?;
                self.cost = route_cost(self.graph, circuit.vertices())?;
                Ok(SolverState::CostComputed)
            }
            SolverState::CostComputed => {
                self.solution = Some(Solution::new(
                    self.engine.algorithm(),
                    std::mem::take(&mut self.route),
                    self.cost,
                    self.balancing.clone(),
                ));
                Ok(SolverState::Solved)
            }
            SolverState::Solved => Ok(SolverState::Solved),
            SolverState::Failed => Err(Error::configuration("solve run has already failed")),
        }
    }
}
