use std::fs;
use std::time::Duration;

use min_colsum_bench::results::{write_rows, MeasurementRow, ResultTable, PARALLEL_HEADER, SINGLE_HEADER};
use min_colsum_bench::BenchError;

fn to_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_write_exact_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let rows = to_rows(&[&["Tp ticks", "0,001"], &["T1 ticks", "0,002"]]);

    write_rows(&path, &rows).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Tp ticks;0,001\nT1 ticks;0,002\n");
}

#[test]
fn test_write_header_only_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let table = ResultTable::new(MeasurementRow::new(PARALLEL_HEADER), MeasurementRow::new(SINGLE_HEADER));

    table.write_to(&path).unwrap();

    // No trailing delimiter even when a row has a single field
    assert_eq!(fs::read_to_string(&path).unwrap(), "Tp ticks\nT1 ticks\n");
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "stale content that is longer than the new one\n").unwrap();

    write_rows(&path, &to_rows(&[&["a", "b"]])).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a;b\n");
}

#[test]
fn test_table_file_matches_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.csv");

    let mut parallel = MeasurementRow::new(PARALLEL_HEADER);
    let mut single = MeasurementRow::new(SINGLE_HEADER);
    parallel.push(Duration::from_millis(250));
    single.push(Duration::from_millis(1000));
    parallel.push(Duration::from_micros(1));
    single.push(Duration::from_micros(3));
    let table = ResultTable::new(parallel, single);

    table.write_to(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Tp ticks;0,2500000000;0,0000010000\nT1 ticks;1,0000000000;0,0000030000\n"
    );
    assert_eq!(table.nb_experiments(), 2);
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a file
    let result = write_rows(dir.path(), &to_rows(&[&["x"]]));

    match result {
        Err(BenchError::Io { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}
