//! Helpers for locating declarations in Java fixtures and reading back folds.

#![allow(dead_code)]

use lambdafold::lambda::{LambdaFold, classify};
use lambdafold::{TextRange, TextSize};

/// Range of the first occurrence of `needle`.
pub fn find(source: &str, needle: &str) -> TextRange {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in fixture"));
    TextRange::at(TextSize::from(start as u32), TextSize::of(needle))
}

/// From the first `start` through the first `end` found after it.
pub fn span(source: &str, start: &str, end: &str) -> TextRange {
    let from = find(source, start).start();
    let rest = &source[usize::from(from)..];
    let to = rest
        .find(end)
        .unwrap_or_else(|| panic!("{end:?} not after {start:?}"));
    TextRange::new(from, from + TextSize::from((to + end.len()) as u32))
}

/// The anonymous declaration from its first `new` to the last `}`.
pub fn anonymous_declaration(source: &str) -> TextRange {
    let start = source.find("new ").expect("fixture has no `new`");
    let end = source.rfind('}').expect("fixture has no `}`") + 1;
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

pub fn classify_anonymous(source: &str) -> (LambdaFold, TextRange) {
    let declaration = anonymous_declaration(source);
    let fold = classify(source, declaration)
        .unwrap_or_else(|err| panic!("classification failed: {err}"));
    (fold, declaration)
}

/// Text left after removing every hidden range inside `declaration`.
pub fn visible(source: &str) -> String {
    let (fold, declaration) = classify_anonymous(source);
    fold.visible_text(source, declaration)
}

/// Sorted, non-empty, disjoint; inside `bounds` unless the call brackets
/// are hidden too.
pub fn assert_well_formed(fold: &LambdaFold, bounds: TextRange) {
    for range in &fold.hidden {
        assert!(!range.is_empty(), "empty hidden range in {:?}", fold.hidden);
    }
    // the call's brackets may touch the declaration
    for pair in fold.hidden.windows(2) {
        assert!(pair[0].end() <= pair[1].start(), "overlap: {pair:?}");
    }
    let inner = if fold.clause_folded {
        &fold.hidden[1..fold.hidden.len() - 1]
    } else {
        &fold.hidden[..]
    };
    for pair in inner.windows(2) {
        assert!(pair[0].end() < pair[1].start(), "unmerged: {pair:?}");
    }
    for range in inner {
        assert!(bounds.contains_range(*range), "{range:?} escapes {bounds:?}");
    }
}

pub mod demo {
    //! Element tree of [`DEMO_UNIT`](crate::helpers::source_fixtures::DEMO_UNIT).

    use super::{find, span};
    use lambdafold::ide::{Declaration, DeclarationKind, TypeFlags};
    use lambdafold::{TextRange, TextSize};

    pub const IMPORTS: u32 = 1;
    pub const DEMO: u32 = 2;
    pub const SUBMIT: u32 = 3;
    pub const CALLABLE: u32 = 4;
    pub const CALL: u32 = 5;
    pub const INNER: u32 = 6;
    pub const FIELD: u32 = 7;

    const ANONYMOUS: TypeFlags = TypeFlags {
        inner: true,
        anonymous: true,
        is_enum: false,
    };
    const NESTED: TypeFlags = TypeFlags {
        inner: true,
        anonymous: false,
        is_enum: false,
    };

    pub fn declarations(source: &str) -> Vec<Declaration> {
        declarations_with(source, "Inner", INNER)
    }

    /// The nested class is looked up by `inner_name` and given `inner_id`.
    pub fn declarations_with(source: &str, inner_name: &str, inner_id: u32) -> Vec<Declaration> {
        let call_range = span(source, "public Integer call()", "}");
        let call = Declaration::new(CALL, DeclarationKind::Method, "call", call_range)
            .with_name_range(find(source, "call()"));
        let callable = Declaration::new(
            CALLABLE,
            DeclarationKind::Type(ANONYMOUS),
            "",
            span(source, "new Callable<Integer>()", "}\n        }"),
        )
        .with_children([call]);
        let submit = Declaration::new(
            SUBMIT,
            DeclarationKind::Method,
            "submit",
            span(source, "/**\n     * Submits", "});\n    }"),
        )
        .with_name_range(find(source, "submit()"))
        .with_children([callable]);

        let mut members = vec![submit];
        if source.contains(inner_name) {
            let field_range = find(source, "int x;");
            let field = Declaration::new(FIELD, DeclarationKind::Field, "x", field_range);
            let class = format!("static class {inner_name}");
            let class_range = span(source, &class, "}");
            members.push(
                Declaration::new(inner_id, DeclarationKind::Type(NESTED), inner_name, class_range)
                    .with_name_range(find(source, inner_name))
                    .with_children([field]),
            );
        }

        let demo_start = find(source, "/**\n * Demo.").start();
        let demo = Declaration::new(
            DEMO,
            DeclarationKind::Type(TypeFlags::default()),
            "Demo",
            TextRange::new(demo_start, TextSize::of(source.trim_end())),
        )
        .with_name_range(TextRange::at(find(source, "Demo {").start(), TextSize::of("Demo")))
        .with_children(members);

        let imports = Declaration::new(
            IMPORTS,
            DeclarationKind::ImportContainer,
            "",
            span(source, "import java.util.concurrent.Callable;", "Executors;"),
        );
        vec![imports, demo]
    }
}
