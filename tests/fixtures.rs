// tests/fixtures.rs
//
// Round-robin generation: counts, order, and the edge cases around tiny or
// repeated inputs.
use std::collections::HashSet;

use box_fixtures::fixture::{generate, pair_count, pairs, Fixture};
use box_fixtures::FixtureError;

fn f(round_id: i64, box_id: i64, player1_id: i64, player2_id: i64) -> Fixture {
    Fixture { round_id, box_id, player1_id, player2_id }
}

#[test]
fn four_players_in_lexicographic_order() {
    let set = generate(1, 10, &[1, 2, 3, 4]).unwrap();
    assert_eq!(
        set.fixtures,
        vec![
            f(1, 10, 1, 2),
            f(1, 10, 1, 3),
            f(1, 10, 1, 4),
            f(1, 10, 2, 3),
            f(1, 10, 2, 4),
            f(1, 10, 3, 4),
        ]
    );
    assert_eq!(set.players, vec![1, 2, 3, 4]);
}

#[test]
fn order_follows_input_position_not_value() {
    let set = generate(2, 3, &[9, 4, 7]).unwrap();
    let pairs: Vec<(i64, i64)> = set.fixtures.iter().map(|f| (f.player1_id, f.player2_id)).collect();
    assert_eq!(pairs, vec![(9, 4), (9, 7), (4, 7)]);
}

#[test]
fn counts_and_uniqueness_for_distinct_players() {
    for n in 2..=12usize {
        let ids: Vec<i64> = (0..n as i64).map(|i| 100 + i * 3).collect();
        let set = generate(5, 8, &ids).unwrap();

        assert_eq!(set.len(), n * (n - 1) / 2, "n={n}");
        assert_eq!(set.len(), pair_count(n));

        let mut seen = HashSet::new();
        for fx in &set.fixtures {
            assert_ne!(fx.player1_id, fx.player2_id, "self pairing for n={n}");
            assert_eq!((fx.round_id, fx.box_id), (5, 8));
            let key = (fx.player1_id.min(fx.player2_id), fx.player1_id.max(fx.player2_id));
            assert!(seen.insert(key), "pair {key:?} repeated for n={n}");
        }
    }
}

#[test]
fn same_input_same_output() {
    let ids = [31, 7, 12, 5, 40];
    assert_eq!(generate(3, 2, &ids).unwrap(), generate(3, 2, &ids).unwrap());
}

#[test]
fn fewer_than_two_players_is_rejected() {
    for ids in [&[][..], &[7][..]] {
        match generate(1, 1, ids) {
            Err(FixtureError::InsufficientPlayers { found }) => assert_eq!(found, ids.len()),
            other => panic!("expected InsufficientPlayers, got {other:?}"),
        }
    }
}

#[test]
fn repeated_ids_are_paired_positionally() {
    let set = generate(4, 6, &[5, 5]).unwrap();
    assert_eq!(set.fixtures, vec![f(4, 6, 5, 5)]);

    // three entries, two equal: still n(n-1)/2 positional pairs
    let set = generate(4, 6, &[1, 2, 1]).unwrap();
    let pairs: Vec<(i64, i64)> = set.fixtures.iter().map(|f| (f.player1_id, f.player2_id)).collect();
    assert_eq!(pairs, vec![(1, 2), (1, 1), (2, 1)]);
}

#[test]
fn negative_and_large_ids_are_opaque() {
    let set = generate(-1, i64::MAX, &[i64::MIN, 0]).unwrap();
    assert_eq!(set.fixtures, vec![f(-1, i64::MAX, i64::MIN, 0)]);
}

#[test]
fn pairs_iterator_reports_exact_length() {
    let items = ['a', 'b', 'c', 'd', 'e'];
    let mut it = pairs(&items);
    assert_eq!(it.len(), 10);
    it.next();
    it.next();
    assert_eq!(it.len(), 8);
    assert_eq!(it.count(), 8);

    assert_eq!(pairs::<u8>(&[]).count(), 0);
    assert_eq!(pairs(&[1]).len(), 0);
    assert_eq!(pairs(&[1]).next(), None);
}

#[test]
fn pairs_iterator_stays_exhausted() {
    let items = [1, 2];
    let mut it = pairs(&items);
    assert_eq!(it.next(), Some((&1, &2)));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(it.len(), 0);
}
