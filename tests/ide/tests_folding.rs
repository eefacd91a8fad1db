//! Initial folding structure of a compilation unit.

use crate::helpers::fold_helpers::demo::{self, declarations};
use crate::helpers::fold_helpers::find;
use crate::helpers::source_fixtures::DEMO_UNIT;
use lambdafold::ide::{
    Declaration, DeclarationKind, ElementId, FoldAnnotation, FoldModel, FoldRegion,
    FoldingPreferences, FoldingProvider, ProjectionModel, RegionKind, Snapshot, TypeFlags,
    collapsed_projections,
};
use lambdafold::{LineIndex, TextRange, TextSize};
use std::ops::Range;

fn initialized(preferences: FoldingPreferences) -> FoldModel {
    let decls = declarations(DEMO_UNIT);
    let mut model = FoldModel::new();
    FoldingProvider::new(preferences).initialize(Snapshot::new(DEMO_UNIT, &decls), &mut model);
    model
}

fn annotation_of(
    model: &FoldModel,
    element: u32,
    is_comment: bool,
) -> Vec<(FoldAnnotation, FoldRegion)> {
    model
        .annotations()
        .into_iter()
        .filter(|(_, a, _)| a.element == ElementId(element) && a.is_comment == is_comment)
        .map(|(_, a, r)| (a, r))
        .collect()
}

fn text(range: TextRange) -> &'static str {
    &DEMO_UNIT[Range::<usize>::from(range)]
}

// =============================================================================
// STRUCTURE
// =============================================================================

#[test]
fn test_demo_unit_structure() {
    let model = initialized(FoldingPreferences::default());
    let summary: Vec<(u32, bool, bool)> = model
        .annotations()
        .iter()
        .map(|(_, a, _)| (a.element.0, a.is_comment, a.collapsed))
        .collect();
    assert_eq!(
        summary,
        vec![
            (demo::IMPORTS, true, true),
            (demo::DEMO, true, true),
            (demo::DEMO, true, false),
            (demo::SUBMIT, true, false),
            (demo::CALLABLE, false, true),
            (demo::INNER, false, true),
        ]
    );
}

#[test]
fn test_header_comment_is_line_aligned() {
    let model = initialized(FoldingPreferences::default());
    let comments = annotation_of(&model, demo::DEMO, true);
    let (_, header) = comments[0];
    assert_eq!(text(header.range), "/*\n * Copyright header.\n */\n");
    assert_eq!(header.kind, RegionKind::Comment);

    let (_, javadoc) = comments[1];
    assert_eq!(text(javadoc.range), "/**\n * Demo.\n */\n");
}

#[test]
fn test_lambda_type_is_marked() {
    let model = initialized(FoldingPreferences::default());
    let [(annotation, region)] = annotation_of(&model, demo::CALLABLE, false)[..] else {
        panic!("one code fold for the anonymous type");
    };
    assert!(annotation.lambda);
    assert!(matches!(region.kind, RegionKind::Element { lambda: true, .. }));
    assert!(text(region.range).starts_with("new Callable<Integer>()"));
}

#[test]
fn test_members_fold_comments_only() {
    let model = initialized(FoldingPreferences::default());
    assert!(annotation_of(&model, demo::SUBMIT, false).is_empty());
    assert!(annotation_of(&model, demo::FIELD, false).is_empty());
    assert!(annotation_of(&model, demo::CALL, true).is_empty());
    assert!(annotation_of(&model, demo::CALL, false).is_empty());
}

#[test]
fn test_preferences_decide_initial_state() {
    let model = initialized(FoldingPreferences {
        collapse_imports: false,
        collapse_inner_types: false,
        collapse_header_comments: false,
        collapse_javadoc: true,
        collapse_members: false,
    });
    let collapsed: Vec<(u32, bool)> = model
        .annotations()
        .iter()
        .filter(|(_, a, _)| a.collapsed)
        .map(|(_, a, _)| (a.element.0, a.is_comment))
        .collect();
    // lambda types collapse on open regardless of preferences
    assert_eq!(
        collapsed,
        vec![(demo::DEMO, true), (demo::SUBMIT, true), (demo::CALLABLE, false)]
    );
}

#[test]
fn test_non_lambda_anonymous_type_does_not_fold() {
    let source = DEMO_UNIT.replace("/* => */", "");
    let decls = declarations(&source);
    let mut model = FoldModel::new();
    FoldingProvider::default().initialize(Snapshot::new(&source, &decls), &mut model);
    assert!(
        model
            .annotations()
            .iter()
            .all(|(_, a, _)| a.element != ElementId(demo::CALLABLE))
    );
}

// =============================================================================
// PROJECTIONS
// =============================================================================

#[test]
fn test_collapsed_projections() {
    let model = initialized(FoldingPreferences::default());
    let projections = collapsed_projections(DEMO_UNIT, &model);
    assert_eq!(projections.len(), 4);

    let lines = LineIndex::new(DEMO_UNIT);
    let by_element = |element: u32| {
        let (id, _, region) = model
            .annotations()
            .into_iter()
            .find(|(_, a, _)| a.element == ElementId(element) && a.collapsed)
            .unwrap();
        let projection = projections.iter().find(|(p, _)| *p == id).unwrap().1.clone();
        (region, projection)
    };

    let (imports, projection) = by_element(demo::IMPORTS);
    assert_eq!(imports.kind, RegionKind::Import);
    assert_eq!(projection.caption_offset, imports.range.start() + TextSize::from(6));
    assert_eq!(
        text(projection.hidden[0]),
        " java.util.concurrent.Callable;\nimport java.util.concurrent.Executors;"
    );

    let (_, projection) = by_element(demo::CALLABLE);
    assert!(projection.lambda.is_some_and(|shape| shape.has_return));
    let declaration = find(DEMO_UNIT, "new Callable<Integer>()").start();
    assert_eq!(projection.caption_offset, declaration);

    let (inner, projection) = by_element(demo::INNER);
    assert_eq!(projection.lambda, None);
    assert_eq!(projection.caption_offset, find(DEMO_UNIT, "Inner").start());
    assert_eq!(projection.hidden, vec![TextRange::new(
        lines.line_start(lines.line_of(inner.range.start()) + 1).unwrap(),
        inner.range.end(),
    )]);
    assert_eq!(text(projection.hidden[0]), "        int x;\n    }");
}

#[test]
fn test_malformed_anonymous_type_is_ignored() {
    let source = "new Runnable() {\n    public void run()/* => */{\n        go();\n    }\n}";
    let run_range = find(source, "public void run()/* => */{\n        go();\n    }");
    let run = Declaration::new(2, DeclarationKind::Method, "run", run_range);
    let anonymous = Declaration::new(
        1,
        DeclarationKind::Type(TypeFlags {
            inner: true,
            anonymous: true,
            is_enum: false,
        }),
        "",
        TextRange::up_to(TextSize::of(source)),
    )
    .with_children([run]);

    let decls = [anonymous];
    let mut model = FoldModel::new();
    FoldingProvider::default().initialize(Snapshot::new(source, &decls), &mut model);
    assert!(model.is_empty());
}
