//! Configuration and generation failures

use helixmaze::config::{Bias, Params};
use helixmaze::error::{ConfigError, GenerationError, MazeError};

use super::test_utils::params;

fn err(p: &Params) -> MazeError {
    match helixmaze::generate(p) {
        Ok(_) => panic!("expected failure for {p:?}"),
        Err(e) => e,
    }
}

#[test]
fn test_invalid_dimensions_are_config_errors() {
    assert_eq!(
        err(&params(0, 6, 0, 1, 0)),
        MazeError::Config(ConfigError::InvalidWidth(0))
    );
    assert_eq!(
        err(&params(8, 2, 0, 1, 0)),
        MazeError::Config(ConfigError::InvalidHeight(2))
    );
    assert_eq!(
        err(&params(8, 6, -2, 1, 0)),
        MazeError::Config(ConfigError::NegativeHelix(-2))
    );
}

#[test]
fn test_oversized_grid_rejected_before_allocation() {
    let e = err(&params(i32::MAX, i32::MAX, 0, 1, 0));
    assert!(matches!(e, MazeError::Config(ConfigError::TooLarge { .. })));
    assert!(e.to_string().contains("exceeds the limit"));
}

#[test]
fn test_zero_bias_rejected() {
    let p = Params {
        bias: Bias {
            down: 0,
            ..Bias::default()
        },
        ..Params::default()
    };
    assert!(matches!(err(&p), MazeError::Config(ConfigError::InvalidBias(_))));
}

#[test]
fn test_isolated_start_has_no_solution() {
    // One column, one maze row: the start has nowhere to go
    let p = params(1, 3, 0, 5, 0);
    assert_eq!(err(&p), MazeError::Generation(GenerationError::NoSolution));
}

#[test]
fn test_short_solution_is_degenerate() {
    let p = Params {
        min_solution_len: 1000,
        ..params(8, 6, 0, 42, 0)
    };
    assert!(matches!(
        err(&p),
        MazeError::Generation(GenerationError::Degenerate { min: 1000, .. })
    ));
}

#[test]
fn test_step_budget_reports_failure() {
    let p = Params {
        max_steps: Some(3),
        ..params(16, 12, 0, 1, 5)
    };
    assert_eq!(
        err(&p),
        MazeError::Generation(GenerationError::StepBudgetExceeded { limit: 3 })
    );
}

#[test]
fn test_error_messages_name_the_problem() {
    let msg = err(&params(8, 1, 0, 1, 0)).to_string();
    assert!(msg.contains("height"), "{msg}");
}
