//! Scoring tests over synthetic result lists.

use deckcheck::score::composite;
use deckcheck::{rule_by_id, ValidationResult};

fn pass(id: &str) -> ValidationResult {
    ValidationResult::pass(rule_by_id(id).unwrap(), "ok")
}

fn fail(id: &str) -> ValidationResult {
    ValidationResult::fail(rule_by_id(id).unwrap(), "not ok")
}

// ---------------------------------------------------------------------------
// Baseline
// ---------------------------------------------------------------------------

#[test]
fn all_passing_results_score_exactly_one_hundred() {
    let results: Vec<ValidationResult> = deckcheck::RULES
        .iter()
        .map(|rule| ValidationResult::pass(rule, "ok"))
        .collect();
    assert_eq!(composite(&results), 100.0);
}

#[test]
fn empty_result_list_scores_one_hundred() {
    assert_eq!(composite(&[]), 100.0);
}

// ---------------------------------------------------------------------------
// Severity weighting
// ---------------------------------------------------------------------------

#[test]
fn errors_cost_more_than_warnings_cost_more_than_info() {
    let with_error = composite(&[fail("min-deck-size")]);
    let with_warning = composite(&[fail("max-deck-size")]);
    let with_info = composite(&[fail("unit-ratio")]);

    assert!(with_error < with_warning);
    assert!(with_warning < with_info);
    assert!(with_info < 100.0);
}

#[test]
fn passing_results_do_not_change_the_score() {
    let failing_only = composite(&[fail("min-deck-size")]);
    let with_passes = composite(&[
        fail("min-deck-size"),
        pass("max-deck-size"),
        pass("unit-ratio"),
    ]);
    assert_eq!(failing_only, with_passes);
}

#[test]
fn more_error_failures_never_score_higher() {
    let one_error = composite(&[fail("min-deck-size")]);
    let two_errors = composite(&[fail("min-deck-size"), fail("card-copy-limit")]);
    let three_errors = composite(&[
        fail("min-deck-size"),
        fail("card-copy-limit"),
        fail("legendary-copy-limit"),
    ]);

    assert!(two_errors <= one_error);
    assert!(three_errors <= two_errors);
}

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

#[test]
fn score_never_drops_below_zero() {
    let results: Vec<ValidationResult> = deckcheck::RULES
        .iter()
        .map(|rule| ValidationResult::fail(rule, "not ok"))
        .collect();
    assert_eq!(composite(&results), 0.0);
}
