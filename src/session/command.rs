//! Textual commands accepted by the TUI prompt
//!
//! ```text
//! vertex [n]            add one or `n` vertices
//! remove <id>           remove a vertex and its edges
//! edge <u> <v>          connect two vertices
//! unlink <u> <v>        remove an edge
//! bfs <start>           breadth-first traversal
//! dfs <start>           depth-first traversal
//! stop                  cancel the running traversal
//! clear                 remove every vertex
//! reset                 clear highlight and visited flags
//! random [n] [density]  generate a random graph
//! ```

use super::{Session, SessionError};
use crate::graph::VertexId;
use crate::traversal::TraversalMode;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on vertices created by a single command
pub const MAX_BATCH_VERTICES: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVertices(usize),
    RemoveVertex(VertexId),
    AddEdge(VertexId, VertexId),
    RemoveEdge(VertexId, VertexId),
    Traverse(TraversalMode, VertexId),
    Stop,
    Clear,
    Reset,
    Random {
        vertices: Option<usize>,
        density: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("At most {} vertices per command", MAX_BATCH_VERTICES)]
    TooMany,
}

fn number<T: FromStr>(token: &str) -> Result<T, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

fn exact<const N: usize>(
    args: &[&str],
    command: &'static str,
    expected: &'static str,
) -> Result<[VertexId; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Usage { command, expected });
    }
    let mut ids = [0; N];
    for (slot, token) in ids.iter_mut().zip(args) {
        *slot = number(token)?;
    }
    Ok(ids)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = input.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = tokens.collect();

        match head.as_str() {
            "vertex" | "v" => {
                let count = match args.as_slice() {
                    [] => 1,
                    [n] => number(n)?,
                    _ => {
                        return Err(CommandError::Usage {
                            command: "vertex",
                            expected: "an optional count",
                        })
                    }
                };
                if count > MAX_BATCH_VERTICES {
                    return Err(CommandError::TooMany);
                }
                Ok(Command::AddVertices(count))
            }
            "remove" | "rm" => {
                let [id] = exact::<1>(&args, "remove", "a vertex id")?;
                Ok(Command::RemoveVertex(id))
            }
            "edge" | "e" => {
                let [u, v] = exact::<2>(&args, "edge", "two vertex ids")?;
                Ok(Command::AddEdge(u, v))
            }
            "unlink" | "u" => {
                let [u, v] = exact::<2>(&args, "unlink", "two vertex ids")?;
                Ok(Command::RemoveEdge(u, v))
            }
            "bfs" => {
                let [start] = exact::<1>(&args, "bfs", "a start vertex")?;
                Ok(Command::Traverse(TraversalMode::Bfs, start))
            }
            "dfs" => {
                let [start] = exact::<1>(&args, "dfs", "a start vertex")?;
                Ok(Command::Traverse(TraversalMode::Dfs, start))
            }
            "stop" => Ok(Command::Stop),
            "clear" => Ok(Command::Clear),
            "reset" => Ok(Command::Reset),
            "random" | "r" => match args.as_slice() {
                [] => Ok(Command::Random {
                    vertices: None,
                    density: None,
                }),
                [n] => Ok(Command::Random {
                    vertices: Some(number(n)?),
                    density: None,
                }),
                [n, d] => Ok(Command::Random {
                    vertices: Some(number(n)?),
                    density: Some(number(d)?),
                }),
                _ => Err(CommandError::Usage {
                    command: "random",
                    expected: "an optional count and density",
                }),
            },
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl Session {
    /// Run a parsed command against the session
    pub fn execute(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::AddVertices(count) => {
                for _ in 0..count {
                    self.add_vertex()?;
                }
                Ok(())
            }
            Command::RemoveVertex(id) => self.remove_vertex(id),
            Command::AddEdge(u, v) => self.add_edge(u, v),
            Command::RemoveEdge(u, v) => self.remove_edge(u, v),
            Command::Traverse(mode, start) => self.start_traversal(mode, start).map(|_| ()),
            Command::Stop => {
                self.stop();
                Ok(())
            }
            Command::Clear => self.clear(),
            Command::Reset => self.reset_highlights(),
            Command::Random { vertices, density } => {
                let vertices = vertices.unwrap_or(self.config.random_vertices);
                let density = density.unwrap_or(self.config.random_density);
                self.randomize_with(vertices, density).map(|_| ())
            }
        }
    }
}
