use std::{fs, path::Path};

use mtxgraph::{
    algo::Extraction,
    error::GraphError,
    io::{FileFormat, GraphReader, MatrixMarketReader, MetisReader},
    pipeline::Pipeline,
    prelude::*,
};
use tempfile::TempDir;

const TRIANGLE: &str = "%%MatrixMarket matrix coordinate pattern symmetric
% triangle with an isolated vertex
% second comment
4 4 4
1 2
2 3
1 3
4 4
";

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("input.mtx");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn convert_to_metis_on_disk() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), TRIANGLE);
    let output = dir.path().join("out.metis");

    let summary = Pipeline::new(FileFormat::Metis)
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "4 3\n2 3\n1 3\n1 2\n\n");
    assert_eq!(summary.output_nodes, 4);
    assert_eq!(summary.output_edges, 3);
    assert_eq!(summary.report.accepted, 3);
    assert_eq!(summary.report.self_loops, 1);

    // the written file is a valid METIS graph of the same shape
    let parsed = MetisReader::new().try_read_graph_file(&output).unwrap();
    assert_eq!(parsed.graph.number_of_edges(), 3);
    assert_eq!(parsed.declared_edges, 3);
}

#[test]
fn bfs_preserves_comments_and_renumbers() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), TRIANGLE);
    let output = dir.path().join("ball.mtx");

    Pipeline::new(FileFormat::MatrixMarket)
        .extraction(Extraction::bfs(2, 3))
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "%%MatrixMarket matrix coordinate pattern symmetric\n\
         % triangle with an isolated vertex\n\
         % second comment\n\
         3 3 3\n1 2\n1 3\n2 3\n"
    );

    // output parses back without any defect
    let parsed = MatrixMarketReader::new().try_read_graph_file(&output).unwrap();
    assert_eq!(parsed.report.skipped(), 0);
    assert_eq!(parsed.graph.number_of_edges(), 3);
}

#[test]
fn window_beyond_the_graph_is_empty_but_well_formed() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), TRIANGLE);
    let output = dir.path().join("window.mtx");

    let summary = Pipeline::new(FileFormat::MatrixMarket)
        .extraction(Extraction::window(10, 3))
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(summary.output_nodes, 3);
    assert_eq!(summary.output_edges, 0);
    assert!(fs::read_to_string(&output).unwrap().ends_with("\n3 3 0\n"));
}

#[test]
fn noisy_input_is_converted_best_effort() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "%%MatrixMarket matrix coordinate real general\n3 3 6\n1 2 0.5\n2 1\nfoo bar\n0 1\n3 7\n2 3\n",
    );
    let output = dir.path().join("out.csr");

    let summary = Pipeline::new(FileFormat::Csr)
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(summary.report.accepted, 2);
    assert_eq!(summary.report.duplicates, 1);
    assert_eq!(summary.report.malformed, 1);
    assert_eq!(summary.report.out_of_range, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "3 2\n0 1 3 4\n1 0 2 1\n"
    );
}

#[test]
fn fatal_errors_create_no_output() {
    let dir = TempDir::new().unwrap();

    let input = write_input(
        dir.path(),
        "%%MatrixMarket matrix coordinate pattern symmetric\n4 x 4\n1 2\n",
    );
    let output = dir.path().join("malformed.metis");
    let res = Pipeline::new(FileFormat::Metis).run_files(&input, &output);
    assert!(matches!(res, Err(GraphError::MalformedHeader { line: 2, .. })));
    assert!(!output.exists());

    let input = write_input(dir.path(), TRIANGLE);
    let output = dir.path().join("bad_source.mtx");
    let res = Pipeline::new(FileFormat::MatrixMarket)
        .extraction(Extraction::bfs(5, 2))
        .run_files(&input, &output);
    assert!(matches!(res, Err(GraphError::InvalidSourceVertex { vertex: 5, n: 4 })));
    assert!(!output.exists());

    let input = write_input(dir.path(), "% only comments\n");
    let output = dir.path().join("empty.metis");
    let res = Pipeline::new(FileFormat::Metis).run_files(&input, &output);
    assert!(matches!(res, Err(GraphError::MissingHeader)));
    assert!(!output.exists());
}
