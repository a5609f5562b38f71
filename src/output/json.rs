//! JSON output formatting

use serde_json::{json, Value};

use crate::engine::executor::{ExecutionResult, ResultData};

pub fn format_json(result: &ExecutionResult) -> String {
    let data: Value = match &result.data {
        ResultData::Catalog(entries) => serde_json::to_value(entries).unwrap_or(json!(null)),
        ResultData::Listing(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Description(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Traversal(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Path(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Components(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Report(summary) => serde_json::to_value(summary).unwrap_or(json!(null)),
        ResultData::Message(msg) => json!({ "message": msg }),
        ResultData::Empty => json!({ "empty": true }),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Registry;
    use crate::engine::{execute_command, ExecutionContext};
    use crate::parser::parse_command;

    fn as_json(input: &str) -> Value {
        let cmd = parse_command(input).unwrap();
        let result =
            execute_command(&cmd, &Registry::builtin(), &ExecutionContext::default()).unwrap();
        serde_json::from_str(&format_json(&result)).unwrap()
    }

    #[test]
    fn test_traversal_round_trips() {
        let value = as_json("RUN bfs FROM A ON {A: [B, C], B: [], C: []}");
        assert_eq!(value["order"][0], "A");
        assert_eq!(value["algorithm"], "bfs");
    }

    #[test]
    fn test_path_carries_cost() {
        let value = as_json("RUN ucs FROM A TO Z");
        assert_eq!(value["cost"], 10);
    }

    #[test]
    fn test_listing_source_is_raw() {
        let value = as_json("SHOW dfs");
        let source = value["source"].as_str().unwrap();
        assert!(source.contains("fn dfs"));
        assert!(!source.contains('\u{1b}'));
    }

    #[test]
    fn test_catalog_is_an_array() {
        let value = as_json("LIST");
        assert_eq!(value.as_array().unwrap().len(), 7);
    }
}
