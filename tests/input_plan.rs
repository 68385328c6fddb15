// tests/input_plan.rs
//
// Id parsing from typed text and round-plan files.
use box_fixtures::input::{parse_id, parse_player_ids};
use box_fixtures::plan::{self, BoxEntry};
use box_fixtures::FixtureError;

#[test]
fn player_ids_accept_commas_and_spaces() {
    assert_eq!(parse_player_ids("1,2,3").unwrap(), vec![1, 2, 3]);
    assert_eq!(parse_player_ids(" 4, 5 ,6,").unwrap(), vec![4, 5, 6]);
    assert_eq!(parse_player_ids("7 8\t9\n10").unwrap(), vec![7, 8, 9, 10]);
    assert_eq!(parse_player_ids("3,3,1").unwrap(), vec![3, 3, 1]);
    assert_eq!(parse_player_ids("  ").unwrap(), Vec::<i64>::new());
}

#[test]
fn any_bad_player_token_fails_the_whole_list() {
    match parse_player_ids("1,2,x,4") {
        Err(FixtureError::InvalidId { field, token }) => {
            assert_eq!(field, "player");
            assert_eq!(token, "x");
        }
        other => panic!("expected InvalidId, got {other:?}"),
    }
    assert!(parse_player_ids("1.5").is_err());
}

#[test]
fn single_ids() {
    assert_eq!(parse_id("round", " 12 ").unwrap(), 12);
    assert_eq!(parse_id("box", "-3").unwrap(), -3);
    assert!(matches!(parse_id("round", ""), Err(FixtureError::MissingValue("round"))));
    assert!(matches!(parse_id("box", "ten"), Err(FixtureError::InvalidId { field: "box", .. })));
}

#[test]
fn plan_rows_in_file_order() {
    let text = "# box, players\n10, 1, 2, 3, 4\n\n11,5,6\r\n9, 7, 8\n";
    let boxes = plan::parse(text).unwrap();
    assert_eq!(
        boxes,
        vec![
            BoxEntry { box_id: 10, players: vec![1, 2, 3, 4] },
            BoxEntry { box_id: 11, players: vec![5, 6] },
            BoxEntry { box_id: 9, players: vec![7, 8] },
        ]
    );
}

#[test]
fn plan_errors_carry_line_numbers() {
    match plan::parse("10,1,2\n\n11,3,oops\n") {
        Err(FixtureError::Plan { line, source }) => {
            assert_eq!(line, 3);
            assert!(matches!(*source, FixtureError::InvalidId { field: "player", .. }));
        }
        other => panic!("expected Plan error, got {other:?}"),
    }

    match plan::parse("10,1,2\n10,3,4\n") {
        Err(FixtureError::Plan { line, source }) => {
            assert_eq!(line, 2);
            assert!(matches!(*source, FixtureError::DuplicateBox(10)));
        }
        other => panic!("expected duplicate box, got {other:?}"),
    }
}

#[test]
fn plan_without_boxes() {
    assert!(matches!(plan::parse("# nothing\n\n"), Err(FixtureError::EmptyPlan)));
}

#[test]
fn plan_box_with_one_player_parses() {
    // too few players is the generator's call, not the parser's
    let boxes = plan::parse("4, 99").unwrap();
    assert_eq!(boxes, vec![BoxEntry { box_id: 4, players: vec![99] }]);
}

#[test]
fn quote_inside_comment_does_not_hide_boxes() {
    let boxes = plan::parse("10, 1, 2\n# 5\" court\n11, 3, 4\n12, 5, 6\n").unwrap();
    let ids: Vec<i64> = boxes.iter().map(|b| b.box_id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(boxes[2].players, vec![5, 6]);
}

#[test]
fn comments_keep_line_numbers() {
    match plan::parse("# \"open\n10,1,2\n  # note\n11,x\n") {
        Err(FixtureError::Plan { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected Plan error, got {other:?}"),
    }
}

#[test]
fn each_plan_cell_is_one_player() {
    match plan::parse("10, \"1 2\", 3\n") {
        Err(FixtureError::Plan { line, source }) => {
            assert_eq!(line, 1);
            match *source {
                FixtureError::InvalidId { field, ref token } => {
                    assert_eq!(field, "player");
                    assert_eq!(token, "1 2");
                }
                ref other => panic!("expected InvalidId, got {other:?}"),
            }
        }
        other => panic!("expected Plan error, got {other:?}"),
    }

    // trailing separator is an empty cell, not a player
    let boxes = plan::parse("10, 1, 2,\n").unwrap();
    assert_eq!(boxes[0].players, vec![1, 2]);
}
