//! End-to-end tests for graphql-style-linter.
//!
//! Each test builds a symbol table from SDL and lints it with the default
//! configuration unless stated otherwise.

use graphql_style_hir::SymbolTable;
use graphql_style_linter::{Linter, Report, StyleConfig, Verdict};
use graphql_style_test_utils::assertions::{count_rule, format_diagnostic_messages, format_findings};
use graphql_style_test_utils::fixtures;

fn report(sdl: &str) -> Report {
    report_with(sdl, StyleConfig::default())
}

fn report_with(sdl: &str, config: StyleConfig) -> Report {
    let table = SymbolTable::from_source(sdl, "schema.graphql").unwrap();
    Linter::new(config).report(&table)
}

fn rule_count(report: &Report, rule: &str) -> usize {
    count_rule(report.diagnostics().iter().map(|d| d.rule.as_str()), rule)
}

#[test]
fn test_empty_schema_passes() {
    let report = report("");
    assert_eq!(report.total(), 0);
    assert_eq!(report.verdict(), Verdict::Pass);
}

#[test]
fn test_comment_only_schema_passes() {
    let report = report("# no definitions yet\n");
    assert_eq!(report.total(), 0);
    assert!(report.is_pass());
}

#[test]
fn test_directive_only_schema_extension_keeps_root_rules() {
    const SCHEMA: &str = r"
        type Query { user(id: ID!): User! }
        type Mutation { newUser: Int }
        type User { id: ID! name: String }
    ";
    let linked = format!(
        "directive @link(url: String) repeatable on SCHEMA\nextend schema @link(url: \"x\")\n{SCHEMA}"
    );

    let plain = report(SCHEMA);
    let with_extension = report(&linked);
    assert_eq!(rule_count(&plain, "mutation_naming"), 1);
    assert_eq!(rule_count(&plain, "by_id_query_shape"), 1);
    assert_eq!(with_extension.to_human(), plain.to_human());
    assert_eq!(rule_count(&with_extension, "id_field_presence"), 0);
}

#[test]
fn test_conventional_schema_is_clean() {
    let report = report(fixtures::CONVENTIONAL_SCHEMA);
    assert_eq!(
        format_findings(report.diagnostics().iter().map(|d| (&d.rule, &d.message))),
        "(no diagnostics)"
    );
    assert!(report.is_pass());
}

#[test]
fn test_countries_schema_has_no_collection_or_filter_findings() {
    let report = report(fixtures::COUNTRIES_SCHEMA);
    assert_eq!(rule_count(&report, "collection_query_shape"), 0);
    assert_eq!(rule_count(&report, "filter_suffix"), 0);
    assert_eq!(rule_count(&report, "input_suffix"), 0);
}

const CREATE_SCHEMA: &str = r"
type Mutation {
  createUser(ARGUMENT): CreateUserResult!
}
input UserDraft { name: String! }
type CreateUserResult {
  success: Boolean!
  errors: [UserError!]!
}
type UserError { message: String! }
";

#[test]
fn test_create_mutation_with_draft() {
    let report = report(&CREATE_SCHEMA.replace("ARGUMENT", "draft: UserDraft!"));
    assert_eq!(rule_count(&report, "create_mutation_shape"), 0);
    assert!(report.is_pass());
}

#[test]
fn test_create_mutation_with_renamed_or_nullable_draft() {
    for argument in ["input: UserDraft!", "draft: UserDraft"] {
        let report = report(&CREATE_SCHEMA.replace("ARGUMENT", argument));
        assert_eq!(rule_count(&report, "create_mutation_shape"), 1, "{argument}");
        assert_eq!(report.verdict(), Verdict::Fail);
    }
}

#[test]
fn test_collection_query_shapes() {
    let schema = |return_type: &str| {
        format!("type Query {{ countries: {return_type} }}\ntype Country {{ id: ID! name: String }}")
    };

    assert_eq!(rule_count(&report(&schema("[Country!]!")), "collection_query_shape"), 0);
    for return_type in ["[Country]", "[Country!]", "[Country]!"] {
        let report = report(&schema(return_type));
        assert_eq!(rule_count(&report, "collection_query_shape"), 1, "{return_type}");
    }
}

#[test]
fn test_by_id_query_shapes() {
    let schema = |return_type: &str| {
        format!("type Query {{ user(id: ID!): {return_type} }}\ntype User {{ id: ID! name: String }}")
    };

    assert_eq!(rule_count(&report(&schema("User!")), "by_id_query_shape"), 1);
    assert_eq!(rule_count(&report(&schema("User")), "by_id_query_shape"), 0);
}

#[test]
fn test_mutation_result_shape() {
    let schema = |result_fields: &str| {
        format!(
            r"
            type Mutation {{ deleteUser(id: ID!): DeleteUserResult! }}
            type DeleteUserResult {{ {result_fields} }}
            type UserError {{ message: String! }}
            "
        )
    };

    let complete = report(&schema("success: Boolean! errors: [UserError!]!"));
    assert_eq!(rule_count(&complete, "mutation_result_shape"), 0);

    for partial in ["success: Boolean!", "errors: [UserError!]!"] {
        let report = report(&schema(partial));
        assert_eq!(rule_count(&report, "mutation_result_shape"), 1, "{partial}");
    }
}

#[test]
fn test_mutation_naming_message() {
    let report = report(
        r"
        type Mutation { newUser(user: UserInput!): NewUserResult! }
        input UserInput { name: String }
        type NewUserResult { success: Boolean! errors: [UserError!]! }
        type UserError { message: String! }
        ",
    );
    let naming: Vec<_> = report
        .diagnostics()
        .iter()
        .filter(|d| d.rule == "mutation_naming")
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        format_diagnostic_messages(&naming),
        "[1] Mutation 'newUser' should start with one of the allowed verbs (create, update, delete, set, track) followed by the object name"
    );
}

#[test]
fn test_allowed_verbs_are_configurable() {
    let config = StyleConfig {
        allowed_mutation_verbs: vec!["new".to_string()],
        ..StyleConfig::default()
    };
    let report = report_with(
        "type Mutation { newUser(name: String): Boolean }",
        config,
    );
    assert_eq!(rule_count(&report, "mutation_naming"), 0);
}

#[test]
fn test_reports_are_idempotent() {
    let first = report(fixtures::VIOLATIONS_SCHEMA);
    let second = report(fixtures::VIOLATIONS_SCHEMA);
    assert_eq!(first.to_human(), second.to_human());
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_violations_human_output() {
    insta::assert_snapshot!(report(fixtures::VIOLATIONS_SCHEMA).to_human(), @r"
    error: Mutation 'newUser' should start with one of the allowed verbs (create, update, delete, set, track) followed by the object name (Mutation.newUser) [mutation_naming]
    error: Mutation 'newUser' should return a non-null result type with 'success: Boolean!' and 'errors: [<X>Error!]!' (missing 'errors: [<X>Error!]!') (Mutation.newUser) [mutation_result_shape]
    error: Query 'user' fetches a single item by id and should return a nullable type, found 'User!' (Query.user) [by_id_query_shape]
    error: Query 'users' should return a non-null list of non-null items, found '[User]' (Query.users) [collection_query_shape]
    error: Type 'StatusEnum' should not end with the kind suffix 'Enum' (StatusEnum) [type_kind_suffix]
    error: Enum value 'StatusEnum.active' should be SCREAMING_SNAKE_CASE (StatusEnum.active) [enum_value_casing]
    error: Field 'User.first_name' should be camelCase (User.first_name) [field_casing]
    ");
}

#[test]
fn test_severity_config_changes_verdict() {
    let config: StyleConfig = serde_saphyr::from_str(
        r"
severityOverrides:
  type_casing: warn
",
    )
    .unwrap();
    let report = report_with("type user { id: ID! name: String }", config);
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 1);
    assert!(report.is_pass());
}
