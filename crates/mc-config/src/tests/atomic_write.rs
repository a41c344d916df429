use crate::write_atomic;

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use tempfile::TempDir;

#[test]
fn given_new_path_when_write_atomic_then_file_has_contents() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out").join("bundle.txt");

    // When
    let result = write_atomic(&path, b"hello");

    // Then
    assert_that!(result, ok(anything()));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_that!(written.as_str(), eq("hello"));
}

#[test]
fn given_existing_file_when_write_atomic_then_replaced_without_leftovers() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bundle.txt");
    std::fs::write(&path, "old").unwrap();

    // When
    write_atomic(&path, b"new").unwrap();

    // Then
    let written = std::fs::read_to_string(&path).unwrap();
    assert_that!(written.as_str(), eq("new"));
    let entries = std::fs::read_dir(temp.path()).unwrap().count();
    assert_that!(entries, eq(1));
}
