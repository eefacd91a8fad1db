//! Marker detection and the failures it reports.

use crate::helpers::fold_helpers::*;
use crate::helpers::source_fixtures::*;
use lambdafold::lambda::{ClassifyError, Marker, MarkerForm, classify, has_single_marker};
use rstest::rstest;

#[rstest]
#[case::block("void run()/* => */{}", Some(MarkerForm::Block))]
#[case::line("void run()// => \n{}", Some(MarkerForm::Line))]
#[case::none("void run() {}", None)]
#[case::both("void run()/* => */{ // => \n}", None)]
fn test_single_marker(#[case] text: &str, #[case] form: Option<MarkerForm>) {
    assert_eq!(has_single_marker(text), form.is_some());
    assert_eq!(Marker::find(text).ok().map(|marker| marker.form), form);
}

#[test]
fn test_both_markers_are_not_foldable() {
    let err = classify(BOTH_MARKERS, anonymous_declaration(BOTH_MARKERS)).unwrap_err();
    assert_eq!(err, ClassifyError::AmbiguousMarker);
    assert!(!err.is_fault());
}

#[test]
fn test_missing_marker_is_not_foldable() {
    let err = classify(NO_MARKER, anonymous_declaration(NO_MARKER)).unwrap_err();
    assert_eq!(err, ClassifyError::MissingMarker);
    assert!(!err.is_fault());
}

#[test]
fn test_text_between_parameters_and_marker() {
    let source = "Callable<Integer> c = new Callable<Integer>() {\n    public Integer call() throws Exception /* => */{ return 1; }\n};";
    let err = classify(source, anonymous_declaration(source)).unwrap_err();
    assert!(matches!(err, ClassifyError::MisplacedMarker { .. }));
    assert!(!err.is_fault());
}
