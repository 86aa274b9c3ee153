//! Diagnostics and recovery on malformed input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use stark_ir::Directive;
use stark_lexer_core::Utf8Source;

use super::{col, messages, parse_source};
use crate::ParseOutput;

// === Modifiers ===

#[test]
fn test_duplicate_modifier() {
    let output = parse_source("public public module Test");
    assert_eq!(messages(&output), vec!["Unexpected duplicated modifier [public]"]);
    assert_eq!(output.diagnostics.as_slice()[0].span.start, col(7));

    assert_eq!(output.directives.len(), 1);
    let Directive::Module(module) = &output.directives.nodes[0] else {
        panic!("expected a module");
    };
    assert_eq!(module.span.start, col(0));
    assert_eq!(module.modifiers.len(), 1);
}

#[test]
fn test_disallowed_modifiers_are_reported_in_order() {
    let output = parse_source("static internal public module A");
    assert_eq!(
        messages(&output),
        vec![
            "Unexpected modifier [static] for module. Only the [public] modifier is supported.",
            "Unexpected modifier [internal] for module. Only the [public] modifier is supported.",
        ]
    );
    let Directive::Module(module) = &output.directives.nodes[0] else {
        panic!("expected a module");
    };
    assert_eq!(module.span.start, col(16));
}

#[test]
fn test_disallowed_modifier_on_import() {
    let output = parse_source("unsafe import a");
    assert_eq!(
        messages(&output),
        vec!["Unexpected modifier [unsafe] for import. Only the [public] modifier is supported."]
    );
    assert_eq!(output.directives.len(), 1);
}

#[test]
fn test_modifier_before_end_of_file() {
    let output = parse_source("public\nreadonly");
    assert_eq!(
        messages(&output),
        vec![
            "Unexpected modifier before [end of file]",
            "Unexpected modifier before [end of file]",
        ]
    );
    assert!(output.directives.is_empty());
}

#[test]
fn test_modifier_before_extern() {
    let output = parse_source("public extern package a");
    assert_eq!(messages(&output), vec!["Unexpected modifier before [extern]"]);
    let Directive::ExternPackage(directive) = &output.directives.nodes[0] else {
        panic!("expected an extern package");
    };
    assert_eq!(directive.span.start, col(7));
}

#[test]
fn test_modifiers_do_not_leak_into_next_directive() {
    let output = parse_source("internal module A\nmodule B");
    assert_eq!(output.diagnostics.len(), 1);
    let Directive::Module(second) = &output.directives.nodes[1] else {
        panic!("expected a module");
    };
    assert!(second.modifiers.is_empty());
}

// === module ===

#[test]
fn test_module_without_name() {
    let output = parse_source("module");
    assert!(output.has_errors());
    assert!(output.directives.is_empty());
    assert_eq!(
        output.diagnostics.as_slice()[0].to_string(),
        "test.sk(eof)-(eof) : error : Expecting a module identifier"
    );
}

#[test]
fn test_module_with_keyword_name_recovers_at_next_line() {
    let output = parse_source("module import x\nmodule B");
    assert_eq!(messages(&output), vec!["Expecting a module identifier"]);
    assert_eq!(output.directives.len(), 1);
}

#[test]
fn test_missing_end_of_declaration() {
    let output = parse_source("module Test extra stuff\nmodule B");
    assert_eq!(
        messages(&output),
        vec!["Error while parsing module: Unexpected tokens [extra stuff]. Expecting EOF or EOL or ; after declaration"]
    );
    let span = &output.diagnostics.as_slice()[0].span;
    assert_eq!(span.start, col(12));
    assert_eq!(span.end, col(22));
    // The node is kept, and parsing resumes after the line break.
    assert_eq!(output.directives.len(), 2);
}

#[test]
fn test_skipped_text_is_printable() {
    let output = parse_source("module A b /* x\n */ c");
    assert_eq!(
        messages(&output),
        vec!["Error while parsing module: Unexpected tokens [b /* x\\n */ c]. Expecting EOF or EOL or ; after declaration"]
    );
}

// === import ===

#[test]
fn test_import_without_target() {
    let output = parse_source("import");
    assert_eq!(messages(&output), vec!["Expecting identifier, * or {...} for import name"]);
    assert!(output.directives.is_empty());
}

#[test]
fn test_import_path_ending_in_separator() {
    let output = parse_source("import a::\nmodule B");
    assert_eq!(messages(&output), vec!["Expecting identifier, * or {...} for import name"]);
}

#[test]
fn test_empty_import_list() {
    let output = parse_source("import a::{}");
    assert_eq!(
        messages(&output),
        vec!["Unexpected token [}]. Expecting at least an identifier inside an import path list {...}"]
    );
}

#[test]
fn test_import_list_missing_item() {
    let output = parse_source("import a::{b, *}");
    assert_eq!(
        messages(&output),
        vec!["Unexpected token [*]. Expecting at least an identifier inside an import path list {...}"]
    );
}

#[test]
fn test_unclosed_import_list() {
    let output = parse_source("import a::{b c}\nmodule M");
    assert_eq!(
        messages(&output),
        vec!["Unexpected token [c]. Expecting a closing } for an import path list {...}"]
    );
    assert_eq!(output.directives.len(), 1);
    assert_eq!(output.directives.nodes[0].syntax_name(), "module");
}

#[test]
fn test_alias_without_name() {
    let output = parse_source("import a as 1");
    assert_eq!(
        messages(&output),
        vec!["Unexpected token [1]. Expecting an identifier after an alias name"]
    );
    assert!(output.directives.is_empty());
}

#[test]
fn test_separated_colons() {
    let output = parse_source("import a: :b");
    assert_eq!(
        messages(&output),
        vec!["Expecting token [::] but found [ ] while parsing module path after identifier [a]"]
    );
    assert_eq!(output.diagnostics.as_slice()[0].span.start, col(9));
}

#[test]
fn test_this_without_separator() {
    let output = parse_source("import this.x");
    assert_eq!(
        messages(&output),
        vec!["Expecting token [::] but found [.] while parsing module path after 'this'"]
    );
}

#[test]
fn test_base_without_separator() {
    let output = parse_source("import base::base x");
    assert_eq!(
        messages(&output),
        vec!["Expecting token [::] but found [x] while parsing module path after 'base'"]
    );
}

#[test]
fn test_import_trailing_tokens() {
    let output = parse_source("import a::b c");
    assert_eq!(
        messages(&output),
        vec!["Error while parsing import: Unexpected tokens [c]. Expecting EOF or EOL or ; after declaration"]
    );
    assert_eq!(output.directives.len(), 1);
}

// === extern ===

#[test]
fn test_extern_at_end_of_file() {
    let output = parse_source("extern");
    assert_eq!(messages(&output), vec!["Unexpected EOF, or EOL or ; after extern"]);
}

#[test]
fn test_extern_without_package() {
    let output = parse_source("extern foo bar\nmodule A");
    assert_eq!(messages(&output), vec!["Unexpected extern [foo]"]);
    assert_eq!(output.directives.len(), 1);
}

#[test]
fn test_extern_package_rejects_this() {
    let output = parse_source("extern package this::a");
    assert_eq!(
        messages(&output),
        vec!["Unexpected token [this]. Expecting an identifier while parsing a full module name"]
    );
}

#[test]
fn test_extern_package_trailing_tokens() {
    let output = parse_source("extern package a b");
    assert_eq!(
        messages(&output),
        vec!["Error while parsing extern package: Unexpected tokens [b]. Expecting EOF or EOL or ; after declaration"]
    );
    assert_eq!(output.directives.len(), 1);
}

// === Driver ===

#[test]
fn test_unexpected_token() {
    let output = parse_source("+ module A");
    assert_eq!(messages(&output), vec!["Unexpected token [+] found"]);
    assert_eq!(output.directives.len(), 1);
}

#[test]
fn test_unexpected_token_position() {
    let output = parse_source("x\nmodule A");
    assert_eq!(
        output.diagnostics.as_slice()[0].to_string(),
        "test.sk(1,0)-(1,0) : error : Unexpected token [x] found"
    );
}

#[test]
fn test_unexpected_control_character_is_escaped() {
    let output = parse_source("\u{1}");
    assert_eq!(messages(&output), vec!["Unexpected token [\\u{1}] found"]);
}

#[test]
fn test_unsupported_declaration() {
    let output = parse_source("public func f() {}\nmodule A");
    assert_eq!(
        messages(&output),
        vec!["Unsupported construct [func]: only module, import and extern package directives are implemented"]
    );
    assert_eq!(output.directives.len(), 1);
    let Directive::Module(module) = &output.directives.nodes[0] else {
        panic!("expected a module");
    };
    assert!(module.modifiers.is_empty());
}

#[test]
fn test_every_unsupported_keyword() {
    for keyword in ["let", "func", "operator", "struct", "class", "trait", "enum", "extends"] {
        let output = parse_source(keyword);
        assert_eq!(output.diagnostics.len(), 1, "{keyword}");
        assert!(output.diagnostics.as_slice()[0]
            .message
            .starts_with(&format!("Unsupported construct [{keyword}]")));
    }
}

// === Lexer diagnostics ===

#[test]
fn test_lexer_diagnostics_follow_parser_diagnostics() {
    let output = parse_source("0x\nmodule");
    assert_eq!(
        messages(&output),
        vec![
            "Unexpected token [0x] found",
            "Expecting a module identifier",
            "Invalid hexadecimal integer. Expecting at least one [0-9a-zA-Z] after 0x",
        ]
    );
    assert_eq!(output.parser_diagnostic_count(), 2);
    assert_eq!(output.parser_diagnostics().len(), 2);
    assert_eq!(output.lexer_diagnostics().len(), 1);
    assert!(output.has_errors());
}

#[test]
fn test_lexer_errors_alone_set_has_errors() {
    // The malformed byte sits inside a comment, which the parser never sees.
    let output = crate::parse(Utf8Source::new(b"module A // \xFF", "test.sk"));
    assert_eq!(output.parser_diagnostic_count(), 0);
    assert_eq!(output.directives.len(), 1);
    assert_eq!(
        messages(&output),
        vec!["invalid UTF-8: byte 0xFF at offset 12 cannot start a sequence"]
    );
    assert!(output.has_errors());
}

#[test]
fn test_diagnostic_split_after_diagnostics_edited() {
    let mut output = parse_source("0x\nmodule");
    assert_eq!(output.parser_diagnostic_count(), 2);

    output.diagnostics.clear();
    assert_eq!(output.parser_diagnostic_count(), 0);
    assert!(output.parser_diagnostics().is_empty());
    assert!(output.lexer_diagnostics().is_empty());
}

#[test]
fn test_diagnostic_split_on_default_output() {
    let output = ParseOutput::default();
    assert!(output.parser_diagnostics().is_empty());
    assert!(output.lexer_diagnostics().is_empty());
    assert!(!output.has_errors());
}
