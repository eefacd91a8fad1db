//! Rendering of each body shape through the public classifier.

use crate::helpers::fold_helpers::*;
use crate::helpers::source_fixtures::*;
use lambdafold::lambda::{Shape, classify};
use lambdafold::{TextRange, TextSize};
use rstest::rstest;

// =============================================================================
// SINGLE STATEMENTS
// =============================================================================

#[test]
fn test_zero_params_return_hides_brace_through_return() {
    let (fold, declaration) = classify_anonymous(CALLABLE_RETURNING);
    assert_eq!(
        fold.shape,
        Shape {
            single_statement: true,
            has_return: true,
            params: 0,
        }
    );
    assert_eq!(fold.visible_text(CALLABLE_RETURNING, declaration), "=> 1 + 4 + 2");

    let brace_to_return = span(CALLABLE_RETURNING, "{\n\t\t\t\treturn ", "return ");
    assert!(fold.hidden.iter().any(|r| r.contains_range(brace_to_return)));
}

#[test]
fn test_two_params_keep_parentheses() {
    let (fold, declaration) = classify_anonymous(COMPARATOR);
    assert_eq!(fold.shape.params, 2);
    assert_eq!(
        fold.visible_text(COMPARATOR, declaration),
        "(o1, o2) => o1.hashCode() - o2.hashCode()"
    );
    let open = find(COMPARATOR, "(Object o1").start();
    assert!(fold.hidden.iter().all(|r| !r.contains(open)));
}

#[test]
fn test_empty_body_reveals_braces() {
    let (fold, declaration) = classify_anonymous(EMPTY_RUNNABLE);
    assert!(fold.shape.single_statement);
    assert!(!fold.shape.has_return);
    assert_eq!(fold.visible_text(EMPTY_RUNNABLE, declaration), "=> {}");
}

#[test]
fn test_statement_with_one_param() {
    assert_eq!(visible(CONSUMER_STATEMENT), "line => System.out.println(line)");
}

// =============================================================================
// BLOCKS
// =============================================================================

#[test]
fn test_block_with_loop_is_reindented() {
    let (fold, declaration) = classify_anonymous(CONSUMER_LOOP);
    assert!(!fold.shape.single_statement);
    assert!(!fold.clause_folded);
    assert_eq!(
        fold.visible_text(CONSUMER_LOOP, declaration),
        "(line) => {\n    for (String part : line.split(\",\")) {\n        emit(part);\n    }\n    flush();\n}"
    );
}

#[test]
fn test_line_marker_hides_brace_line_break() {
    assert_eq!(
        visible(LINE_MARKER_BLOCK),
        "(itIs, times) => {\n    String string = itIs.toString();\n    return string.toLowerCase();\n}"
    );
}

#[test]
fn test_clause_folding_brackets_the_call() {
    let (fold, declaration) = classify_anonymous(CLAUSE_ARGUMENT);
    assert!(fold.clause_folded);
    assert_eq!(fold.shape.params, 2);

    let one = TextSize::from(1);
    assert_eq!(fold.hidden.first(), Some(&TextRange::at(declaration.start() - one, one)));
    assert_eq!(
        fold.hidden.last(),
        Some(&TextRange::at(declaration.end(), TextSize::from(2)))
    );

    let whole = TextRange::up_to(TextSize::of(CLAUSE_ARGUMENT));
    assert_eq!(
        fold.visible_text(CLAUSE_ARGUMENT, whole),
        "execute(it, times) {\n\tif (times > 0) {\n\t\tit.toString();\n\t\tArrays.asList((Object) null);\n\t}\n}"
    );
}

#[test]
fn test_single_statement_argument_is_not_clause_folded() {
    let (fold, _) = classify_anonymous(CALLABLE_RETURNING);
    assert!(!fold.clause_folded);
}

// =============================================================================
// INVARIANTS
// =============================================================================

#[rstest]
#[case::callable(CALLABLE_RETURNING)]
#[case::comparator(COMPARATOR)]
#[case::empty(EMPTY_RUNNABLE)]
#[case::statement(CONSUMER_STATEMENT)]
#[case::block(CONSUMER_LOOP)]
#[case::clause(CLAUSE_ARGUMENT)]
#[case::line_marker(LINE_MARKER_BLOCK)]
fn test_hidden_ranges_are_well_formed(#[case] source: &str) {
    let (fold, declaration) = classify_anonymous(source);
    assert_well_formed(&fold, declaration);
    assert_eq!(fold.caption_offset, declaration.start());
}

#[rstest]
#[case::callable(CALLABLE_RETURNING)]
#[case::block(CONSUMER_LOOP)]
#[case::clause(CLAUSE_ARGUMENT)]
fn test_classification_is_idempotent(#[case] source: &str) {
    let declaration = anonymous_declaration(source);
    assert_eq!(classify(source, declaration), classify(source, declaration));
}

#[rstest]
#[case::callable(CALLABLE_RETURNING)]
#[case::comparator(COMPARATOR)]
#[case::empty(EMPTY_RUNNABLE)]
#[case::statement(CONSUMER_STATEMENT)]
#[case::block(CONSUMER_LOOP)]
fn test_visible_text_reads_as_lambda(#[case] source: &str) {
    let text = visible(source);
    let (params, body) = text.split_once("=>").expect("arrow is visible");
    assert!(!params.contains("public"), "{text:?}");
    assert!(!body.contains("return"), "{text:?}");
    assert!(!body.trim().is_empty(), "{text:?}");
}
