use crate::domain::rules::MAX_POINTS_PER_TASK;
use crate::domain::scoring::{award, skip, validate_points};
use crate::domain::test_state_helpers::named_players;
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn award_adds_points_to_one_player() {
    let roster = named_players(&["Bo", "Cy"]);
    let next = award(&roster, 1, 15, MAX_POINTS_PER_TASK).unwrap();
    assert_eq!(next[0].score, 0);
    assert_eq!(next[1].score, 15);

    let next = award(&next, 1, 5, MAX_POINTS_PER_TASK).unwrap();
    assert_eq!(next[1].score, 20);
}

#[test]
fn boundaries_are_inclusive() {
    assert_eq!(validate_points(0, 20), Ok(0));
    assert_eq!(validate_points(20, 20), Ok(20));
}

#[test]
fn out_of_range_points_are_invalid_score() {
    let roster = named_players(&["Bo", "Cy"]);
    for bad in [21, 25, -1, i64::MAX, i64::MIN] {
        let err = award(&roster, 0, bad, MAX_POINTS_PER_TASK).unwrap_err();
        assert!(
            matches!(err, DomainError::Validation(ValidationKind::InvalidScore, _)),
            "{bad} should be rejected, got {err:?}"
        );
    }
    assert!(roster.iter().all(|p| p.score == 0));
}

#[test]
fn unknown_index_is_rejected() {
    let roster = named_players(&["Bo", "Cy"]);
    let err = award(&roster, 2, 5, MAX_POINTS_PER_TASK).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownPlayer, _)
    ));
}

#[test]
fn skip_is_a_zero_award() {
    let roster = award(&named_players(&["Bo", "Cy"]), 0, 7, MAX_POINTS_PER_TASK).unwrap();
    let next = skip(&roster, 0).unwrap();
    assert_eq!(next, roster);
}
