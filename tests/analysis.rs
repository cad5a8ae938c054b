//! Integration tests for soluna-analysis crate.

use soluna_analysis::{Response, analyze, handle_request};
use soluna_diagnostic::Phase;

// ============================================================================
// The analyze() session
// ============================================================================

#[test]
fn test_clean_source_analysis() {
    let analysis = analyze("kai x = 1;\nnova(x);");
    assert!(analysis.diagnostics.is_empty());
    assert!(analysis.tree.is_some());
    assert!(!analysis.tokens.is_empty());
}

#[test]
fn test_empty_source_analysis() {
    let analysis = analyze("");
    assert!(analysis.tokens.is_empty());
    assert!(analysis.diagnostics.is_empty());
    assert!(analysis.tree.is_none());
}

#[test]
fn test_tokens_include_trivia() {
    let analysis = analyze("kai x; \\\\ note");
    let rebuilt: String = analysis
        .tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(rebuilt, "kai x; \\\\ note");
}

#[test]
fn test_analysis_is_pure() {
    let first = analyze("kai x = @;");
    let second = analyze("kai x = @;");
    assert_eq!(first.tokens.len(), second.tokens.len());
    assert_eq!(first.diagnostics.len(), second.diagnostics.len());
    // A prior bad input leaves no residue in a later clean one.
    let clean = analyze("kai x = 1;");
    assert!(clean.diagnostics.is_empty());
}

#[test]
fn test_lexical_errors_flagged() {
    let analysis = analyze("kai x = @;");
    assert!(analysis.has_lexical_errors());
    assert!(analysis.has_errors());
}

#[test]
fn test_syntactic_only_errors() {
    let analysis = analyze("kai = 1;");
    assert!(!analysis.has_lexical_errors());
    assert!(analysis.has_errors());
    assert!(
        analysis
            .diagnostics
            .iter()
            .all(|d| d.phase == Phase::Syntactic)
    );
}

// ============================================================================
// Diagnostic collection
// ============================================================================

#[test]
fn test_diagnostics_sorted_by_offset() {
    // One syntactic error early, one lexical error late.
    let analysis = analyze("kai = 1;\nkai y = @;");
    assert!(analysis.diagnostics.len() >= 2);
    let offsets: Vec<_> = analysis
        .diagnostics
        .iter()
        .map(|d| d.span.start.offset)
        .collect();
    let mut sorted = offsets.clone();
    sorted.sort();
    assert_eq!(offsets, sorted);
}

#[test]
fn test_lexical_precedes_syntactic_at_same_offset() {
    // The unknown token is both a lexical error and the point the
    // parser trips on.
    let analysis = analyze("kai x = @;");
    let shared: Vec<_> = analysis
        .diagnostics
        .iter()
        .filter(|d| d.span.start.offset == 8)
        .map(|d| d.phase)
        .collect();
    assert!(shared.len() >= 2);
    assert_eq!(shared[0], Phase::Lexical);
}

// ============================================================================
// Wire protocol
// ============================================================================

#[test]
fn test_response_shape_for_clean_source() {
    let output = handle_request(r#"{"code": "kai x = 1;"}"#).unwrap();
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(response["errors"].as_array().unwrap().is_empty());
    assert_eq!(response["parseTree"]["type"], "Program");
    assert!(!response["tokens"].as_array().unwrap().is_empty());
}

#[test]
fn test_parse_tree_withheld_on_lexical_error() {
    let output = handle_request(r#"{"code": "kai x = @;"}"#).unwrap();
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(response.get("parseTree").is_none());
    assert_eq!(response["errors"][0]["type"], "UNRECOGNIZED_CHAR");
}

#[test]
fn test_parse_tree_survives_syntax_errors() {
    // Panic-mode recovery still hands back the partial tree.
    let output = handle_request(r#"{"code": "kai = ;\nkai y = 2;"}"#).unwrap();
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(!response["errors"].as_array().unwrap().is_empty());
    assert_eq!(response["parseTree"]["type"], "Program");
}

#[test]
fn test_error_message_fields() {
    let response = Response::from_source("\"open;");
    let error = response
        .errors
        .iter()
        .find(|e| e.error_type == "UNCLOSED_STRING")
        .unwrap();
    assert_eq!(error.line, 1);
    assert_eq!(error.col, 1);
    assert!(!error.message.is_empty());
}

#[test]
fn test_tree_shape_for_if_statement() {
    let response = Response::from_source("sol x == 1 nova(1); mos");
    let tree = response.parse_tree.unwrap();
    assert_eq!(tree.node_type, "Program");

    let if_node = &tree.children[0];
    assert_eq!(if_node.node_type, "IfStatement");
    assert_eq!(if_node.children[0].node_type, "Condition");
    assert_eq!(if_node.children[1].node_type, "TrueBlock");
}

#[test]
fn test_tree_shape_for_function() {
    let response = Response::from_source("kai add(kai a, kai b) zara a + b; mos");
    let tree = response.parse_tree.unwrap();

    let func = &tree.children[0];
    assert_eq!(func.node_type, "FunctionDefinition");
    assert_eq!(func.children[0].node_type, "DataType");
    assert_eq!(func.children[1].node_type, "Identifier");
    assert_eq!(func.children[2].node_type, "Parameters");
    assert_eq!(func.children[2].children.len(), 2);
    assert_eq!(func.children[3].node_type, "Block");
}

#[test]
fn test_wire_tokens_round_trip() {
    let source = "sol x == 1 \\\\ note\n  nova(x);\nmos";
    let response = Response::from_source(source);
    let rebuilt: String = response.tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn test_malformed_json_treated_as_raw_source() {
    let output = handle_request("{not json at all").unwrap();
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    // The braces and words lex as tokens of the raw text.
    assert!(!response["tokens"].as_array().unwrap().is_empty());
}
