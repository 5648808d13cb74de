use backpack::algo::{
    binary_search_by, bubble_sort_by, insertion_sort_by, selection_sort_by, timed,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_words(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..6);
            (0..len).map(|_| rng.random_range(b'a'..=b'e') as char).collect()
        })
        .collect()
}

#[test]
fn test_bubble_reverse_input_counts() {
    let mut data = vec!["c", "b", "a"];
    let comparisons = bubble_sort_by(&mut data, |s| *s);
    assert_eq!(data, vec!["a", "b", "c"]);
    // (n-1) + (n-2): the last swap happens in the second, final pass.
    assert_eq!(comparisons, 3);

    let mut data: Vec<u32> = (0..10).rev().collect();
    let comparisons = bubble_sort_by(&mut data, |v| v);
    assert_eq!(data, (0..10).collect::<Vec<_>>());
    assert_eq!(comparisons, 45);
}

#[test]
fn test_bubble_early_exit() {
    let mut data = vec![1, 2, 3, 4, 5];
    assert_eq!(bubble_sort_by(&mut data, |v| v), 4);

    // One pass to fix the swap, one full pass to notice nothing moves.
    let mut data = vec![2, 1, 3, 4, 5];
    assert_eq!(bubble_sort_by(&mut data, |v| v), 4 + 3);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_insertion_counts_stopping_comparison() {
    let mut data = vec![1, 2, 3, 4];
    assert_eq!(insertion_sort_by(&mut data, |v| v), 3);

    let mut data = vec![4, 3, 2, 1];
    assert_eq!(insertion_sort_by(&mut data, |v| v), 1 + 2 + 3);
    assert_eq!(data, vec![1, 2, 3, 4]);

    // 2 reaches the front after 1 comparison, 1 after 2, and 4 stops after 1.
    let mut data = vec![3, 2, 1, 4];
    assert_eq!(insertion_sort_by(&mut data, |v| v), 1 + 2 + 1);
}

#[test]
fn test_insertion_is_stable() {
    let mut data = vec![("b", 0), ("a", 1), ("b", 2), ("a", 3), ("c", 4), ("a", 5)];
    insertion_sort_by(&mut data, |pair| pair.0);
    assert_eq!(
        data,
        vec![("a", 1), ("a", 3), ("a", 5), ("b", 0), ("b", 2), ("c", 4)]
    );

    let once = data.clone();
    insertion_sort_by(&mut data, |pair| pair.0);
    assert_eq!(data, once);
}

#[test]
fn test_selection_counts() {
    let mut data = vec![5u8, 3, 5, 1];
    assert_eq!(selection_sort_by(&mut data, |p| p), 3 + 2 + 1);
    assert_eq!(data, vec![1, 3, 5, 5]);

    // Count does not depend on order.
    let mut data: Vec<u8> = (1..=10).collect();
    assert_eq!(selection_sort_by(&mut data, |p| p), 45);
}

#[test]
fn test_selection_only_swaps_strictly_smaller() {
    let mut data = vec![(1, 'a'), (1, 'b'), (0, 'c')];
    selection_sort_by(&mut data, |pair| &pair.0);
    // 'a' is swapped out to make room for the minimum, 'b' stays where it is.
    assert_eq!(data, vec![(0, 'c'), (1, 'b'), (1, 'a')]);
}

#[test]
fn test_trivial_inputs() {
    let mut empty: Vec<u8> = vec![];
    assert_eq!(bubble_sort_by(&mut empty, |v| v), 0);
    assert_eq!(insertion_sort_by(&mut empty, |v| v), 0);
    assert_eq!(selection_sort_by(&mut empty, |v| v), 0);
    assert_eq!(binary_search_by(&empty, &1, |v| v), (None, 0));

    let mut single = vec![9u8];
    assert_eq!(bubble_sort_by(&mut single, |v| v), 0);
    assert_eq!(insertion_sort_by(&mut single, |v| v), 0);
    assert_eq!(selection_sort_by(&mut single, |v| v), 0);
    assert_eq!(binary_search_by(&single, &9, |v| v), (Some(0), 1));
    assert_eq!(binary_search_by(&single, &1, |v| v), (None, 1));
}

#[test]
fn test_binary_search_probe_sequence() {
    let data = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];
    // Probes 4 (50), then 1 (20), then 0 (10).
    assert_eq!(binary_search_by(&data, &10, |v| v), (Some(0), 3));
    assert_eq!(binary_search_by(&data, &50, |v| v), (Some(4), 1));
    // Probes 4, 7, 8, 9.
    assert_eq!(binary_search_by(&data, &100, |v| v), (Some(9), 4));
    // Below the first element: probes 4, 1, 0, then the interval empties.
    assert_eq!(binary_search_by(&data, &5, |v| v), (None, 3));
    assert_eq!(binary_search_by(&data, &105, |v| v), (None, 4));
}

#[test]
fn test_fuzz_sorts_against_std() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..2_000 {
        let count = rng.random_range(0..=10);
        let input = random_words(&mut rng, count);

        let mut expected = input.clone();
        expected.sort();

        let mut bubble = input.clone();
        bubble_sort_by(&mut bubble, |s| s.as_str());
        assert_eq!(bubble, expected);

        let mut insertion = input.clone();
        insertion_sort_by(&mut insertion, |s| s.as_str());
        assert_eq!(insertion, expected);

        let mut selection = input.clone();
        let comparisons = selection_sort_by(&mut selection, |s| s.as_str());
        assert_eq!(selection, expected);
        assert_eq!(comparisons, (count * count.saturating_sub(1) / 2) as u64);
    }
}

#[test]
fn test_fuzz_insertion_matches_stable_sort() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..1_000 {
        let count = rng.random_range(0..=10);
        let input: Vec<(u8, usize)> = (0..count).map(|i| (rng.random_range(0..3), i)).collect();

        let mut expected = input.clone();
        expected.sort_by_key(|pair| pair.0);

        let mut actual = input;
        insertion_sort_by(&mut actual, |pair| &pair.0);
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_fuzz_binary_search() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..1_000 {
        let count = rng.random_range(0..=10);
        let mut data = random_words(&mut rng, count);
        data.sort();
        data.dedup();

        for (index, word) in data.iter().enumerate() {
            let (found, comparisons) = binary_search_by(&data, word.as_str(), |s| s.as_str());
            assert_eq!(found, Some(index));
            assert!(comparisons >= 1);
        }

        let probe = random_words(&mut rng, 1).remove(0);
        let (found, _) = binary_search_by(&data, probe.as_str(), |s| s.as_str());
        assert_eq!(found, data.iter().position(|w| *w == probe));
    }
}

#[test]
fn test_timed_returns_result() {
    let (value, elapsed) = timed(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed.as_secs() < 1);
}
