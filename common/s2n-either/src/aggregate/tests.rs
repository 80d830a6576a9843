// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::testing::CallCounter;
use bolero::check;
use std::collections::VecDeque;

fn double_positive(value: i32) -> Either<&'static str, i32> {
    if value > 0 {
        Either::Right(value * 2)
    } else {
        Either::Left("neg")
    }
}

fn fail_on_zero(value: u8) -> Either<u8, u16> {
    if value % 8 == 0 {
        Either::Left(value)
    } else {
        Either::Right(value as u16 * 3)
    }
}

#[test]
fn sequence_empty_test() {
    let values: Vec<Either<&str, u32>> = vec![];
    assert_eq!(sequence(values), Either::Right(vec![]));
}

#[test]
fn sequence_all_right_test() {
    let values: Vec<Either<&str, u32>> = vec![Either::Right(1), Either::Right(2), Either::Right(3)];
    assert_eq!(sequence(values), Either::Right(vec![1, 2, 3]));
}

#[test]
fn sequence_first_left_wins_test() {
    let values = vec![
        Either::Right(1),
        Either::Left("err1"),
        Either::Right(3),
        Either::Left("err2"),
    ];
    assert_eq!(sequence(values), Either::Left("err1"));
}

#[test]
fn sequence_short_circuit_test() {
    let counter = CallCounter::new();

    // every item is produced lazily so pulling past the first `Left` would be recorded
    let values = [Either::Right(1), Either::Left("err1"), Either::Right(3), Either::Left("err2")]
        .into_iter()
        .map(counter.wrap(|value| value));

    assert_eq!(sequence(values), Either::Left("err1"));
    assert_eq!(counter.count(), 2);
}

#[test]
fn sequence_stops_pulling_test() {
    let mut values = vec![Either::Right(1), Either::Left("err"), Either::Right(3)].into_iter();

    assert_eq!(sequence(values.by_ref()), Either::Left("err"));
    assert_eq!(values.next(), Some(Either::Right(3)));
}

#[test]
fn traverse_all_right_test() {
    assert_eq!(traverse([1, 2, 3], double_positive), Either::Right(vec![2, 4, 6]));
}

#[test]
fn traverse_first_left_wins_test() {
    let counter = CallCounter::new();

    assert_eq!(
        traverse([1, -2, 3], counter.wrap(double_positive)),
        Either::Left("neg")
    );
    assert_eq!(counter.count(), 2);
}

#[test]
fn traverse_empty_test() {
    let counter = CallCounter::new();
    let values: [i32; 0] = [];

    assert_eq!(
        traverse(values, counter.wrap(double_positive)),
        Either::Right(vec![])
    );
    assert_eq!(counter.count(), 0);
}

#[test]
fn traverse_fails_on_first_item_test() {
    let counter = CallCounter::new();

    assert_eq!(
        traverse([-1, -2, -3], counter.wrap(double_positive)),
        Either::Left("neg")
    );
    assert_eq!(counter.count(), 1);
}

#[test]
fn traverse_matches_sequence_test() {
    check!().with_type::<Vec<u8>>().for_each(|values| {
        let traverse_counter = CallCounter::new();
        let sequence_counter = CallCounter::new();

        let traversed = traverse(values.iter().copied(), traverse_counter.wrap(fail_on_zero));

        let mapped: Vec<_> = values
            .iter()
            .copied()
            .map(sequence_counter.wrap(fail_on_zero))
            .collect();
        let sequenced = sequence(mapped);

        assert_eq!(traversed, sequenced);
        assert!(traverse_counter.count() <= sequence_counter.count());
        assert_eq!(sequence_counter.count(), values.len());
    });
}

#[test]
fn traverse_invocation_count_test() {
    check!().with_type::<Vec<u8>>().for_each(|values| {
        let counter = CallCounter::new();
        let result = traverse(values.iter().copied(), counter.wrap(fail_on_zero));

        match values.iter().position(|value| value % 8 == 0) {
            Some(index) => {
                assert_eq!(result, Either::Left(values[index]));
                assert_eq!(counter.count(), index + 1);
            }
            None => {
                let expected: Vec<u16> = values.iter().map(|v| *v as u16 * 3).collect();
                assert_eq!(result, Either::Right(expected));
                assert_eq!(counter.count(), values.len());
            }
        }
    });
}

#[test]
fn sequence_preserves_order_test() {
    check!().with_type::<Vec<u16>>().for_each(|values| {
        let wrapped = values.iter().copied().map(Either::<u8, u16>::Right);
        assert_eq!(sequence(wrapped), Either::Right(values.clone()));
    });
}

#[test]
fn collect_test() {
    let values = [Either::<&str, u32>::Right(1), Either::Right(2)];

    let collected: Either<&str, VecDeque<u32>> = values.into_iter().collect();
    assert_eq!(collected, Either::Right(VecDeque::from([1, 2])));

    let total: Either<&str, u32> = values
        .into_iter()
        .chain([Either::Left("overflow"), Either::Right(3)])
        .collect::<Either<_, Vec<_>>>()
        .map(|values| values.into_iter().sum());
    assert_eq!(total, Either::Left("overflow"));

    let text: Either<u8, String> = [Either::Right('o'), Either::Right('k')].into_iter().collect();
    assert_eq!(text, Either::Right("ok".to_string()));
}

#[test]
fn shunt_size_hint_test() {
    let mut residual: Option<u8> = None;
    let mut shunt = Shunt {
        iter: [Either::<u8, u16>::Left(1), Either::Right(2)].into_iter(),
        residual: &mut residual,
        position: 0,
    };

    assert_eq!(shunt.size_hint(), (0, Some(2)));
    assert_eq!(shunt.next(), None);
    assert_eq!(shunt.size_hint(), (0, Some(0)));
    // the `Left` is sticky even though the inner iterator still has items
    assert_eq!(shunt.next(), None);
    assert_eq!(residual, Some(1));
}

#[test]
fn partition_test() {
    let values = [
        Either::Left("a"),
        Either::Right(1),
        Either::Left("b"),
        Either::Right(2),
        Either::Right(3),
    ];
    assert_eq!(partition(values), (vec!["a", "b"], vec![1, 2, 3]));

    let empty: [Either<u8, u8>; 0] = [];
    assert_eq!(partition(empty), (vec![], vec![]));
}

#[test]
fn partition_preserves_everything_test() {
    check!()
        .with_type::<Vec<Either<u8, u16>>>()
        .for_each(|values| {
            let (lefts, rights) = partition(values.iter().copied());
            assert_eq!(lefts.len() + rights.len(), values.len());

            let expected_lefts: Vec<u8> = values.iter().filter_map(|v| v.left()).collect();
            let expected_rights: Vec<u16> = values.iter().filter_map(|v| v.right()).collect();
            assert_eq!(lefts, expected_lefts);
            assert_eq!(rights, expected_rights);

            match sequence(values.iter().copied()) {
                Either::Left(first) => assert_eq!(lefts.first(), Some(&first)),
                Either::Right(all) => {
                    assert!(lefts.is_empty());
                    assert_eq!(all, rights);
                }
            }
        });
}
