//! Happy-path behavior of the range-editing engine

use super::common::{read_file, write_file};
use crate::tools::file_ops::text_edit::editor::{apply, EditOperation};
use crate::tools::file_ops::text_edit::types::{FileSnapshot, LineRange};
use tempfile::TempDir;

#[tokio::test]
async fn test_get_returns_span_and_hashes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\nthree\n").await;

    let result = apply(
        &path,
        EditOperation::Get {
            start: Some(2),
            end: Some(3),
        },
    )
    .await
    .unwrap();

    assert_eq!(result.content.as_deref(), Some("two\nthree\n"));
    assert_eq!(result.range, LineRange::new(2, 3));
    assert_eq!(result.total_lines, 3);
    assert!(result.range_hash.is_some());
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\nthree\n").await;

    let op = || EditOperation::Get {
        start: Some(1),
        end: Some(3),
    };
    let first = apply(&path, op()).await.unwrap();
    let second = apply(&path, op()).await.unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(first.file_hash, second.file_hash);
    assert_eq!(first.range_hash, second.range_hash);
}

#[tokio::test]
async fn test_get_whole_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.txt");
    write_file(&path, "").await;

    let result = apply(
        &path,
        EditOperation::Get {
            start: None,
            end: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(result.content.as_deref(), Some(""));
    assert_eq!(result.total_lines, 0);
}

#[tokio::test]
async fn test_patch_replaces_range() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\nthree\n").await;

    let snapshot = FileSnapshot::load(&path).await.unwrap();
    let range = LineRange::new(2, 2);
    let result = apply(
        &path,
        EditOperation::Patch {
            range,
            contents: "TWO\n".to_string(),
            range_hash: snapshot.range_hash(range),
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\nTWO\nthree\n");
    assert_eq!(result.range, LineRange::new(2, 2));
    assert_ne!(result.file_hash, snapshot.file_hash);
}

#[tokio::test]
async fn test_patch_with_same_content_keeps_bytes_and_hash() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\nthree\n").await;

    let snapshot = FileSnapshot::load(&path).await.unwrap();
    let range = LineRange::new(2, 2);
    let result = apply(
        &path,
        EditOperation::Patch {
            range,
            contents: "two\n".to_string(),
            range_hash: snapshot.range_hash(range),
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\ntwo\nthree\n");
    assert_eq!(result.file_hash, snapshot.file_hash);
}

#[tokio::test]
async fn test_disjoint_patches_from_one_read_both_apply() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    let initial = "a\nb\nc\nd\ne\nf\n";

    for (first, second) in [((2, "B\n"), (5, "E\n")), ((5, "E\n"), (2, "B\n"))] {
        write_file(&path, initial).await;
        let snapshot = FileSnapshot::load(&path).await.unwrap();

        for (line, replacement) in [first, second] {
            let range = LineRange::new(line, line);
            apply(
                &path,
                EditOperation::Patch {
                    range,
                    contents: replacement.to_string(),
                    // Both expectations come from the same initial read.
                    range_hash: snapshot.range_hash(range),
                },
            )
            .await
            .unwrap();
        }

        assert_eq!(read_file(&path).await, "a\nB\nc\nd\nE\nf\n");
    }
}

#[tokio::test]
async fn test_append_adds_lines_at_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\n").await;

    let result = apply(
        &path,
        EditOperation::Append {
            contents: "three\nfour\n".to_string(),
            file_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\ntwo\nthree\nfour\n");
    assert_eq!(result.range, LineRange::new(3, 4));
    assert_eq!(result.total_lines, 4);
}

#[tokio::test]
async fn test_append_terminates_previous_last_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo").await;

    apply(
        &path,
        EditOperation::Append {
            contents: "three\n".to_string(),
            file_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\ntwo\nthree\n");
}

#[tokio::test]
async fn test_insert_at_line_count_plus_one_equals_append() {
    let temp_dir = TempDir::new().unwrap();
    let append_path = temp_dir.path().join("append.txt");
    let insert_path = temp_dir.path().join("insert.txt");
    write_file(&append_path, "one\ntwo").await;
    write_file(&insert_path, "one\ntwo").await;

    apply(
        &append_path,
        EditOperation::Append {
            contents: "three\n".to_string(),
            file_hash: None,
        },
    )
    .await
    .unwrap();
    apply(
        &insert_path,
        EditOperation::Insert {
            line: 3,
            contents: "three\n".to_string(),
            file_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&append_path).await, read_file(&insert_path).await);
}

#[tokio::test]
async fn test_insert_mid_file_terminates_payload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\r\ntwo\r\n").await;

    // Payload without a terminator gets the file's CRLF style so the
    // following line stays a line.
    apply(
        &path,
        EditOperation::Insert {
            line: 2,
            contents: "mid".to_string(),
            file_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\r\nmid\r\ntwo\r\n");
}

#[tokio::test]
async fn test_delete_removes_range() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\nthree\nfour\n").await;

    let result = apply(
        &path,
        EditOperation::Delete {
            range: LineRange::new(2, 3),
            range_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\nfour\n");
    assert_eq!(result.range, LineRange::new(2, 3));
    assert_eq!(result.total_lines, 2);
}

#[tokio::test]
async fn test_delete_everything_leaves_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\n").await;

    apply(
        &path,
        EditOperation::Delete {
            range: LineRange::new(1, 2),
            range_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "");
}

#[tokio::test]
async fn test_create_new_file_with_parents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sub/dir/new.txt");

    let result = apply(
        &path,
        EditOperation::Create {
            contents: "hello\n".to_string(),
            overwrite: false,
            file_hash: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "hello\n");
    assert_eq!(result.total_lines, 1);
}

#[tokio::test]
async fn test_patch_at_eof_preserves_missing_trailing_newline() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.txt");
    write_file(&path, "one\ntwo\n").await;

    let snapshot = FileSnapshot::load(&path).await.unwrap();
    let range = LineRange::new(2, 2);
    apply(
        &path,
        EditOperation::Patch {
            range,
            contents: "TWO".to_string(),
            range_hash: snapshot.range_hash(range),
        },
    )
    .await
    .unwrap();

    assert_eq!(read_file(&path).await, "one\nTWO");
}
