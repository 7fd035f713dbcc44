//! # Csr
//!
//! Writes the compressed sparse row arrays expected by METIS partitioning drivers:
//! ```text
//! n m
//! xadj[0] xadj[1] ... xadj[n]
//! adjncy[0] ... adjncy[2m - 1]
//! ```
//! Unlike the other formats, `adjncy` holds **0-based** node ids as they are passed to METIS unchanged.

use super::*;

/// A writer for the CSR format
#[derive(Debug, Clone)]
pub struct CsrWriter {
    /// HeaderFormat
    header: Header,
}

impl Default for CsrWriter {
    fn default() -> Self {
        Self {
            header: Header::metis(),
        }
    }
}

impl CsrWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> GraphWriter<G> for CsrWriter
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header
            .write_header(&mut writer, graph.number_of_nodes(), graph.number_of_edges())?;

        let mut xadj = std::iter::once(0u64).chain(graph.vertices().scan(0u64, |offset, u| {
            *offset += graph.degree_of(u) as u64;
            Some(*offset)
        }));
        writeln!(writer, "{}", xadj.join(" "))?;

        let mut adjncy = graph.vertices().flat_map(|u| graph.neighbors_of(u));
        writeln!(writer, "{}", adjncy.join(" "))?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle_with_isolated_node() {
        let g = AdjGraph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
        let mut buffer = Vec::new();
        CsrWriter::new().try_write_graph(&g, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "4 3\n0 2 4 6 6\n1 2 0 2 0 1\n"
        );
    }

    #[test]
    fn empty_graph() {
        let mut buffer = Vec::new();
        CsrWriter::new()
            .try_write_graph(&AdjGraph::new(0), &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 0\n0\n\n");
    }
}
