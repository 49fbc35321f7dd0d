//! Edge case tests for model parsing and rendering
//!
//! Tests for boundary conditions, unusual inputs, and error handling.

// =============================================================================
// Empty and Minimal Inputs
// =============================================================================

mod minimal_inputs {
    use ontodoc::generate;

    #[test]
    fn test_title_only() {
        assert_eq!(generate(r#"{"name": "Only"}"#).unwrap(), "# Only\n\n");
    }

    #[test]
    fn test_null_model_and_diagrams() {
        let input = r#"{"name": "M", "model": null, "diagrams": null}"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n");
    }

    #[test]
    fn test_model_without_contents() {
        let input = r#"{"name": "M", "model": {"id": "root"}, "diagrams": []}"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n");
    }

    #[test]
    fn test_package_with_empty_contents() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [{"type": "Package", "id": "p1", "name": "A", "contents": []}]}
        }"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n## A\n\n");
    }

    #[test]
    fn test_null_type_is_skipped() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [
                {"type": null, "id": "x"},
                {"type": "Package", "id": "p1", "name": "A"}
            ]}
        }"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n## A\n\n");
    }

    #[test]
    fn test_numeric_description_is_rendered() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [
                {"type": "Package", "id": "p1", "name": "A", "description": 42}
            ]}
        }"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n## A\n\n42\n\n");
    }

    #[test]
    fn test_only_non_package_contents() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [
                {"type": "Class", "id": "c1", "name": "Person"},
                {"type": "Relation", "id": "r1"}
            ]}
        }"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n");
    }
}

// =============================================================================
// Nesting
// =============================================================================

mod nesting {
    use ontodoc::generate;

    fn nested_model(depth: usize) -> String {
        let mut inner = String::from("[]");
        for level in (0..depth).rev() {
            inner = format!(
                r#"[{{"type": "Package", "id": "p{0}", "name": "L{0}", "contents": {1}}}]"#,
                level, inner
            );
        }
        format!(r#"{{"name": "Deep", "model": {{"contents": {}}}}}"#, inner)
    }

    #[test]
    fn test_heading_depth_is_not_capped() {
        let output = generate(&nested_model(9)).unwrap();
        assert!(output.contains("\n########## L8\n"));
    }

    #[test]
    fn test_deep_nesting_renders() {
        let depth = 300;
        let output = generate(&nested_model(depth)).unwrap();
        let headings = output.lines().filter(|l| l.starts_with('#')).count();
        assert_eq!(headings, depth + 1);

        let deepest = format!("{} L{}", "#".repeat(depth + 1), depth - 1);
        assert!(output.contains(&deepest));
    }

    #[test]
    fn test_siblings_share_depth_after_subtree() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [
                {"type": "Package", "id": "a", "name": "A", "contents": [
                    {"type": "Package", "id": "b", "name": "B", "contents": [
                        {"type": "Package", "id": "c", "name": "C"}
                    ]}
                ]},
                {"type": "Package", "id": "d", "name": "D"}
            ]}
        }"#;
        let output = generate(input).unwrap();
        let headings: Vec<_> = output.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(headings, vec!["# M", "## A", "### B", "#### C", "## D"]);
    }
}

// =============================================================================
// Text Content
// =============================================================================

mod text_content {
    use ontodoc::generate;

    #[test]
    fn test_unicode_names() {
        let input = r#"{
            "name": "Modèle ontologique",
            "model": {"contents": [
                {"type": "Package", "id": "p1", "name": "Pessoa 人", "description": "Descrição"}
            ]},
            "diagrams": [{"id": "d1", "name": "Visão ✓", "owner": {"id": "p1"}}]
        }"#;
        let output = generate(input).unwrap();
        assert!(output.starts_with("# Modèle ontologique\n"));
        assert!(output.contains("## Pessoa 人\n\nDescrição\n"));
        assert!(output.contains("### Visão ✓\n"));
    }

    #[test]
    fn test_multiline_description_copied_verbatim() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [
                {"type": "Package", "id": "p1", "name": "A", "description": "first\n\n- item *bold*"}
            ]}
        }"#;
        let output = generate(input).unwrap();
        assert_eq!(output, "# M\n\n## A\n\nfirst\n\n- item *bold*\n\n");
    }
}

// =============================================================================
// Diagram Ownership
// =============================================================================

mod ownership {
    use ontodoc::generate;

    #[test]
    fn test_diagrams_for_unknown_owners_are_dropped() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [{"type": "Package", "id": "p1", "name": "A"}]},
            "diagrams": [
                {"id": "d1", "name": "Elsewhere", "owner": {"id": "zzz"}},
                {"id": "d2", "name": "Root", "owner": {"id": "model-root"}}
            ]
        }"#;
        assert_eq!(generate(input).unwrap(), "# M\n\n## A\n\n");
    }

    #[test]
    fn test_diagrams_keep_input_order() {
        let input = r#"{
            "name": "M",
            "model": {"contents": [{"type": "Package", "id": "p1", "name": "A"}]},
            "diagrams": [
                {"id": "d2", "name": "Second", "owner": {"id": "p1"}},
                {"id": "d1", "name": "First", "owner": {"id": "p1"}}
            ]
        }"#;
        let output = generate(input).unwrap();
        let second = output.find("### Second").unwrap();
        let first = output.find("### First").unwrap();
        assert!(second < first);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

mod errors {
    use ontodoc::{generate, DocgenError};

    fn malformed_field(input: &str) -> String {
        match generate(input).unwrap_err() {
            DocgenError::MalformedData { field, .. } => field,
            other => panic!("expected MalformedData, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_package_name() {
        let input = r#"{"name": "M", "model": {"contents": [{"type": "Package", "id": "p1"}]}}"#;
        assert_eq!(malformed_field(input), "name");
    }

    #[test]
    fn test_missing_package_id() {
        let input = r#"{"name": "M", "model": {"contents": [{"type": "Package", "name": "A"}]}}"#;
        assert_eq!(malformed_field(input), "id");
    }

    #[test]
    fn test_missing_diagram_owner() {
        let input = r#"{"name": "M", "diagrams": [{"id": "d1", "name": "V"}]}"#;
        let err = generate(input).unwrap_err();
        assert!(matches!(err, DocgenError::MalformedData { .. }));
    }

    #[test]
    fn test_missing_content_type() {
        let input = r#"{"name": "M", "model": {"contents": [{"id": "x", "name": "X"}]}}"#;
        assert_eq!(malformed_field(input), "type");
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        assert!(matches!(
            generate("").unwrap_err(),
            DocgenError::ParseError { .. }
        ));
    }

    #[test]
    fn test_non_object_root_is_parse_error() {
        assert!(matches!(
            generate("42").unwrap_err(),
            DocgenError::ParseError { .. }
        ));
    }
}
