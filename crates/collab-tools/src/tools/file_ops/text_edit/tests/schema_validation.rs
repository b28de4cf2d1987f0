//! Schema shape and argument validation for the six editing tools

use super::common::tool_call;
use crate::tools::file_ops::text_edit::{
    AppendTextFileTool, CreateTextFileTool, DeleteTextFileTool, GetTextFileTool,
    InsertTextFileTool, PatchTextFileTool,
};
use collab_core::tools::base::Tool;
use collab_core::tools::ToolError;
use serde_json::json;

#[test]
fn test_tool_names_match_protocol_surface() {
    assert_eq!(GetTextFileTool::new().name(), "get_text_file_contents");
    assert_eq!(CreateTextFileTool::new().name(), "create_text_file");
    assert_eq!(
        AppendTextFileTool::new().name(),
        "append_text_file_contents"
    );
    assert_eq!(
        InsertTextFileTool::new().name(),
        "insert_text_file_contents"
    );
    assert_eq!(
        DeleteTextFileTool::new().name(),
        "delete_text_file_contents"
    );
    assert_eq!(PatchTextFileTool::new().name(), "patch_text_file_contents");
}

#[test]
fn test_patch_schema_requires_hash_and_bounds() {
    let schema = PatchTextFileTool::new().schema();
    let required: Vec<&str> = schema.parameters["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    for key in ["file_path", "start", "end", "contents", "range_hash"] {
        assert!(required.contains(&key), "missing required key {}", key);
    }
}

#[test]
fn test_get_schema_range_is_optional() {
    let schema = GetTextFileTool::new().schema();
    let required = schema.parameters["required"].as_array().unwrap();
    assert_eq!(required.len(), 1);
    assert_eq!(required[0], "file_path");
}

#[test]
fn test_validate_rejects_missing_file_path() {
    let tool = DeleteTextFileTool::new();
    let call = tool_call("t-1", tool.name(), json!({ "start": 1, "end": 2 }));

    let err = tool.validate(&call).unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

#[test]
fn test_validate_rejects_non_integer_bounds() {
    let tool = PatchTextFileTool::new();
    let call = tool_call(
        "t-2",
        tool.name(),
        json!({
            "file_path": "f.txt",
            "start": "two",
            "end": 3,
            "contents": "x\n",
            "range_hash": "abc"
        }),
    );

    let err = tool.validate(&call).unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

#[test]
fn test_validate_accepts_complete_patch_call() {
    let tool = PatchTextFileTool::new();
    let call = tool_call(
        "t-3",
        tool.name(),
        json!({
            "file_path": "f.txt",
            "start": 2,
            "end": 2,
            "contents": "x\n",
            "range_hash": "abc"
        }),
    );

    assert!(tool.validate(&call).is_ok());
}

#[test]
fn test_only_get_is_read_only() {
    assert!(GetTextFileTool::new().is_read_only());
    assert!(!PatchTextFileTool::new().is_read_only());
    assert!(!DeleteTextFileTool::new().is_read_only());
}
