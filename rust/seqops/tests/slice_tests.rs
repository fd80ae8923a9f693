use itertools::assert_equal;

use seqops::{Index, Range, SequenceExt};
use seqops_testkit::{
    TrackedSource,
    data_gen::{all_ranges, random_range, random_sequence},
    reference::{reference_skip_last, reference_slice, reference_take_last},
};

#[test]
fn test_take_range_matches_reference_for_all_shapes() {
    for len in 0..=9 {
        let items: Vec<i32> = (0..len).collect();
        for range in all_ranges(11) {
            let expected = reference_slice(&items, &range);

            let buffered = TrackedSource::new(items.clone()).take_range(range);
            assert_eq!(
                buffered.into_iter().collect::<Vec<_>>(),
                expected,
                "buffered: len {len}, range {range}"
            );

            let exact = TrackedSource::with_exact_size(items.clone()).take_range(range);
            assert_eq!(
                exact.into_iter().collect::<Vec<_>>(),
                expected,
                "exact size: len {len}, range {range}"
            );
        }
    }
}

#[test]
fn test_take_range_matches_reference_randomized() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..2000 {
        let len = rng.usize(0..64);
        let items = random_sequence(&mut rng, len);
        let range = random_range(&mut rng, 80);
        let taken = TrackedSource::new(items.clone()).take_range(range);
        assert_equal(taken, reference_slice(&items, &range));
    }
}

#[test]
fn test_concrete_scenario() {
    let source: Vec<i32> = (1..=10).collect();
    let source = TrackedSource::new(source);

    let range = Range::new(Index::from_start(2), Index::from_end(1));
    assert_equal(source.clone().take_range(range), 3..=9);
    assert_equal(source.clone().take_last(3), [8, 9, 10]);
    assert_equal(source.clone().skip_last(3), 1..=7);
}

#[test]
fn test_take_last_length() {
    let mut rng = fastrand::Rng::with_seed(42);
    for len in 0..20 {
        let items = random_sequence(&mut rng, len);
        for count in -3isize..25 {
            let taken: Vec<i32> = TrackedSource::new(items.clone())
                .take_last(count)
                .into_iter()
                .collect();
            let expected_len = if count <= 0 {
                0
            } else {
                (count as usize).min(len)
            };
            assert_eq!(taken.len(), expected_len, "len {len}, count {count}");
            assert_eq!(taken, reference_take_last(&items, count));
        }
    }
}

#[test]
fn test_skip_last_reconstructs_source() {
    let mut rng = fastrand::Rng::with_seed(43);
    for len in 0..20 {
        let items = random_sequence(&mut rng, len);
        for count in 0..=len as isize {
            let mut head: Vec<i32> = TrackedSource::new(items.clone())
                .skip_last(count)
                .into_iter()
                .collect();
            assert_eq!(head, reference_skip_last(&items, count));
            head.extend(TrackedSource::new(items.clone()).take_last(count));
            assert_eq!(head, items, "len {len}, count {count}");
        }
        // Non-positive counts leave the source unchanged.
        assert_equal(TrackedSource::new(items.clone()).skip_last(-2), items.clone());
    }
}

#[test]
fn test_reenumeration_is_idempotent() {
    let source = TrackedSource::new((1..=10).collect::<Vec<i32>>());
    let slices = [
        source.clone().take_range(Range::new(Index::from_end(6), Index::from_end(2))),
        source.clone().take_last(4),
        source.clone().skip_last(4),
        source.clone().take_range(Range::from(3..7)),
    ];
    for slice in &slices {
        let first: Vec<i32> = slice.iter().collect();
        let second: Vec<i32> = slice.iter().collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
    // One pass per enumeration.
    assert_eq!(source.stats().opened(), 8);
    assert_eq!(source.stats().live(), 0);
}

#[test]
fn test_reenumeration_sees_current_contents() {
    let source = TrackedSource::new(vec![1, 2, 3]);
    let last_two = source.clone().take_last(2);
    assert_equal(last_two.iter(), [2, 3]);

    source.push(4);
    source.push(5);
    assert_equal(last_two.iter(), [4, 5]);

    source.replace(vec![9]);
    assert_equal(last_two.iter(), [9]);
}

#[test]
fn test_no_iteration_before_consumption() {
    let source = TrackedSource::new((1..=10).collect::<Vec<i32>>());
    let slice = source.clone().skip_last(2);
    assert_eq!(source.stats().opened(), 0);

    let it = slice.iter();
    assert_eq!(source.stats().opened(), 1);
    assert_eq!(source.stats().pulled(), 0);
    drop(it);
    assert_eq!(source.stats().live(), 0);
}

#[test]
fn test_source_released_on_early_termination() {
    let source = TrackedSource::new((1..=100).collect::<Vec<i32>>());
    let slice = source.clone().skip_last(10);
    {
        let mut it = slice.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(source.stats().live(), 1);
        // Two yielded elements trail the ten-element gap.
        assert_eq!(source.stats().pulled(), 12);
    }
    assert_eq!(source.stats().live(), 0);

    let first_three: Vec<i32> = source
        .clone()
        .take_range(Range::from(5..50))
        .into_iter()
        .take(3)
        .collect();
    assert_eq!(first_three, vec![6, 7, 8]);
    assert_eq!(source.stats().live(), 0);
}

#[test]
fn test_source_released_at_exhaustion() {
    let source = TrackedSource::new((1..=10).collect::<Vec<i32>>());

    let mut it = source.clone().skip_last(3).into_iter();
    assert_eq!(it.by_ref().count(), 7);
    assert!(it.is_source_released());
    assert_eq!(source.stats().live(), 0);

    // The tail window releases the source before yielding its first element.
    let mut it = source.clone().take_last(3).into_iter();
    assert_eq!(it.next(), Some(8));
    assert!(it.is_source_released());
    assert_eq!(source.stats().live(), 0);
    assert_eq!(it.collect::<Vec<_>>(), vec![9, 10]);
}

#[test]
fn test_statically_empty_ranges_do_not_iterate() {
    let source = TrackedSource::new((1..=10).collect::<Vec<i32>>());
    let empty = [
        source.clone().take_last(0),
        source.clone().take_range(Range::new(Index::end(), Index::from_start(5))),
        source.clone().take_range(Range::new(Index::from_end(2), Index::from_end(4))),
        source.clone().take_range(Range::from(4..4)),
    ];
    for slice in &empty {
        assert_eq!(slice.iter().count(), 0);
    }
    assert_eq!(source.stats().pulled(), 0);
}
