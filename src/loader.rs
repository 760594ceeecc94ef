//! Plain-text graph descriptor parser
//!
//! The descriptor format:
//!
//! ```text
//! undirected weighted
//! a=b=10
//! a=c=20
//! lonely
//! ```
//!
//! The first line names the graph kind and must be exactly one of
//! `directed unweighted`, `directed weighted`, `undirected unweighted`, or
//! `undirected weighted`. Each following non-empty line is either a bare
//! label (an isolated vertex) or `origin=destination=weight`; edge endpoints
//! are registered as vertices automatically. Files are commonly CRLF
//! separated; LF works too.

use crate::graph::SimpleGraph;
use std::fmt;
use std::io;
use std::path::Path;

/// Error type for descriptor parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no header line
    MissingHeader,
    /// The header line was not one of the four recognized graph kinds
    UnknownHeader(String),
    /// An edge weight failed to parse as a number
    BadWeight(String),
    /// A line had more than the `origin=destination=weight` fields
    MalformedLine(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "input is missing the graph-kind header line"),
            ParseError::UnknownHeader(header) => {
                write!(f, "unrecognized graph-kind header: {header:?}")
            }
            ParseError::BadWeight(token) => write!(f, "could not parse edge weight: {token:?}"),
            ParseError::MalformedLine(line) => write!(f, "malformed descriptor line: {line:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error type for loading a descriptor from disk
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "could not read graph file: {err}"),
            LoadError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        LoadError::Parse(err)
    }
}

/// Parses a graph descriptor from text
///
/// # Errors
/// Fails with the matching [`ParseError`] on a missing or unrecognized
/// header, an unparseable weight, or a line with too many fields. Blank
/// lines are skipped.
pub fn parse_graph(input: &str) -> Result<SimpleGraph, ParseError> {
    let mut lines = input.lines();

    let header = lines.next().ok_or(ParseError::MissingHeader)?;
    let (directed, weighted) = match header.trim() {
        "directed unweighted" => (true, false),
        "directed weighted" => (true, true),
        "undirected unweighted" => (false, false),
        "undirected weighted" => (false, true),
        other => return Err(ParseError::UnknownHeader(other.to_string())),
    };

    let mut graph = SimpleGraph::new(directed, weighted);

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split('=').collect::<Vec<_>>().as_slice() {
            [label] => {
                graph.add_vertex(label);
            }
            [origin, destination] => {
                add_parsed_edge(&mut graph, origin, destination, 1.0);
            }
            [origin, destination, weight] => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::BadWeight(weight.to_string()))?;
                add_parsed_edge(&mut graph, origin, destination, weight);
            }
            _ => return Err(ParseError::MalformedLine(line.to_string())),
        }
    }

    Ok(graph)
}

fn add_parsed_edge(graph: &mut SimpleGraph, origin: &str, destination: &str, weight: f64) {
    graph.add_vertex(origin);
    graph.add_vertex(destination);
    let _ = graph.add_edge(origin, destination, weight);
}

/// Reads and parses a graph descriptor file
///
/// # Errors
/// Fails with [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if its content is not a valid descriptor.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<SimpleGraph, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_graph(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_header_kind() {
        for (header, directed, weighted) in [
            ("directed unweighted", true, false),
            ("directed weighted", true, true),
            ("undirected unweighted", false, false),
            ("undirected weighted", false, true),
        ] {
            let graph = parse_graph(header).unwrap();
            assert_eq!(graph.is_directed(), directed, "{header}");
            assert_eq!(graph.is_weighted(), weighted, "{header}");
            assert_eq!(graph.vertex_count(), 0);
        }
    }

    #[test]
    fn test_parse_crlf_input() {
        let graph = parse_graph("undirected weighted\r\na=b=10\r\na=c=0.5\r\n").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.to_string(), "a: (b, 10), (c, 0.5)\nb: (a, 10)\nc: (a, 0.5)");
    }

    #[test]
    fn test_parse_isolated_vertices_and_blank_lines() {
        let graph = parse_graph("directed unweighted\n\nsolo\n\na=b\n").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.contains_vertex("solo"));
        assert!(graph.neighbors("solo").unwrap().is_empty());
    }

    #[test]
    fn test_parse_edge_without_weight_defaults_to_one() {
        let graph = parse_graph("undirected unweighted\na=b\n").unwrap();

        let edge = graph.get_edge("a", "b").unwrap();
        assert_eq!(edge.weight(), 1.0);
    }

    #[test]
    fn test_parse_fractional_weight() {
        let graph = parse_graph("undirected weighted\na=b=2.75\n").unwrap();

        assert_eq!(graph.get_edge("a", "b").unwrap().weight(), 2.75);
    }

    #[test]
    fn test_parse_rejects_unknown_header() {
        assert_eq!(
            parse_graph("sideways weighted\na=b=1\n").unwrap_err(),
            ParseError::UnknownHeader("sideways weighted".to_string())
        );
        assert_eq!(parse_graph("").unwrap_err(), ParseError::MissingHeader);
    }

    #[test]
    fn test_parse_rejects_bad_weight() {
        assert_eq!(
            parse_graph("undirected weighted\na=b=heavy\n").unwrap_err(),
            ParseError::BadWeight("heavy".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        assert_eq!(
            parse_graph("undirected weighted\na=b=1=2\n").unwrap_err(),
            ParseError::MalformedLine("a=b=1=2".to_string())
        );
    }

    #[test]
    fn test_repeated_labels_reuse_vertices() {
        let graph = parse_graph("undirected weighted\na=b=1\nb=c=2\nc=a=3\n").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors("a").unwrap().len(), 2);
        assert_eq!(graph.neighbors("b").unwrap().len(), 2);
        assert_eq!(graph.neighbors("c").unwrap().len(), 2);
    }
}
