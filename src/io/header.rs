//! # Headers
//!
//! A header(-line) of a graph file is a series of whitespace separated tokens defining the size of the graph.
//!
//! The MatrixMarket coordinate format uses the dimension line
//!     "{rows} {cols} {entries}"
//! of which only the number of rows is authoritative for a (square) graph, while METIS uses
//!     "{n} {m} [fmt] [ncon]"

use smallvec::{SmallVec, smallvec};

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Parse number of nodes
    NumNodes,
    /// Must be an integer but is ignored when reading; written as the number of nodes
    Columns,
    /// Parse (declared) number of edges
    NumEdges,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

/// Defines the complete format of a header line.
///
/// The last token must be [`HeaderToken::End`] or [`HeaderToken::Rest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header(SmallVec<[HeaderToken; 6]>);

impl Header {
    /// `rows cols entries`, nothing else
    pub fn matrix_market() -> Self {
        Self(smallvec![
            HeaderToken::NumNodes,
            HeaderToken::Columns,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }

    /// `n m` optionally followed by format flags
    pub fn metis() -> Self {
        Self(smallvec![
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::Rest,
        ])
    }

    /// Tries to parse the header found at (1-based) line `line_no` and extract the number of
    /// nodes and the declared number of edges.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedHeader`] if the line does not match the format.
    ///
    /// # Example
    /// ```
    /// use mtxgraph::io::Header;
    ///
    /// assert_eq!(Header::matrix_market().parse_header(3, "4 4 3").unwrap(), (4, 3));
    /// assert!(Header::matrix_market().parse_header(3, "4 4").is_err());
    /// assert!(Header::matrix_market().parse_header(3, "4 x 3").is_err());
    /// ```
    pub fn parse_header(&self, line_no: usize, line: &str) -> Result<(NumNodes, NumEdges)> {
        let malformed = |reason: &str| GraphError::MalformedHeader {
            line: line_no,
            content: line.to_string(),
            reason: reason.to_string(),
        };

        let mut number_of_nodes = None;
        let mut number_of_edges = 0;
        let mut parts = line.split_ascii_whitespace();

        for token in self.0.iter() {
            match token {
                HeaderToken::NumNodes => {
                    let entry = parts.next().ok_or_else(|| malformed("missing number of nodes"))?;
                    number_of_nodes = Some(
                        entry
                            .parse::<NumNodes>()
                            .map_err(|_| malformed("invalid number of nodes"))?,
                    );
                }
                HeaderToken::Columns => {
                    let entry = parts.next().ok_or_else(|| malformed("missing column count"))?;
                    entry
                        .parse::<u64>()
                        .map_err(|_| malformed("invalid column count"))?;
                }
                HeaderToken::NumEdges => {
                    let entry = parts.next().ok_or_else(|| malformed("missing number of edges"))?;
                    number_of_edges = entry
                        .parse::<NumEdges>()
                        .map_err(|_| malformed("invalid number of edges"))?;
                }
                HeaderToken::End => {
                    if parts.next().is_some() {
                        return Err(malformed("header is longer than expected"));
                    }
                    break;
                }
                HeaderToken::Rest => break,
            }
        }

        let number_of_nodes = number_of_nodes.ok_or_else(|| malformed("missing number of nodes"))?;
        Ok((number_of_nodes, number_of_edges))
    }

    /// Writes the header line for a graph with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let header_str = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::NumNodes | HeaderToken::Columns => Some(n.to_string()),
                HeaderToken::NumEdges => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .join(" ");
        writeln!(writer, "{header_str}")?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matrix_market_header() {
        let header = Header::matrix_market();
        assert_eq!(header.parse_header(1, "1971281 1971281 2766607").unwrap(), (1971281, 2766607));
        assert_eq!(header.parse_header(1, "  5\t5   0 ").unwrap(), (5, 0));

        for bad in ["", "5", "5 5", "5 5 x", "-5 5 3", "5 5 3 1"] {
            assert!(
                matches!(
                    header.parse_header(7, bad),
                    Err(GraphError::MalformedHeader { line: 7, .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn metis_header_ignores_format_flags() {
        let header = Header::metis();
        assert_eq!(header.parse_header(1, "4 3").unwrap(), (4, 3));
        assert_eq!(header.parse_header(1, "4 3 011 2").unwrap(), (4, 3));
        assert!(header.parse_header(1, "4").is_err());
    }

    #[test]
    fn write_headers() {
        let mut buf = Vec::new();
        Header::matrix_market().write_header(&mut buf, 2, 1).unwrap();
        Header::metis().write_header(&mut buf, 4, 3).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2 2 1\n4 3\n");
    }
}
