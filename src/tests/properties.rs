use crate::{Seq, Size, identity, tests::probe::naturals};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use test_case::test_matrix;

const N: usize = 125;

fn random_values(rng: &mut ChaCha8Rng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(0..100)).collect()
}

/// The same elements once with a known and once with an unknown size.
fn known_and_unknown<'a>(values: &[i32]) -> [Seq<'a, i32>; 2] {
    [Seq::of(values.to_vec()), Seq::lazy(values.to_vec())]
}

/// Splits `values` into randomly sized parts, each of which is randomly known or
/// unknown sized, and chains them back together.
fn randomly_chained<'a>(rng: &mut ChaCha8Rng, values: &[i32]) -> Seq<'a, i32> {
    let mut seq = Seq::empty();
    let mut begin = 0;
    while begin < values.len() {
        let end = rng.random_range(begin + 1..=values.len());
        let part = values[begin..end].to_vec();
        let part = match rng.random_bool(0.5) {
            true => Seq::of(part),
            false => Seq::lazy(part),
        };
        seq = seq.chain(part);
        begin = end;
    }
    seq
}

#[test_matrix([0, 1, 2], [0, 1, 17, N])]
fn filter_count_agrees_with_list(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = random_values(&mut rng, len);
    let expected = values.iter().filter(|x| **x % 3 == 0).count();

    for seq in known_and_unknown(&values) {
        assert_eq!(seq.filter(|x: &i32| x % 3 == 0).count(), expected);
    }
    for seq in known_and_unknown(&values) {
        let list = seq.filter(|x: &i32| x % 3 == 0).to_list();
        assert_eq!(list.len(), expected);
    }
}

#[test_matrix([0, 1, 2], [0, 1, 17, N])]
fn map_identity_preserves_elements(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = random_values(&mut rng, len);

    for seq in known_and_unknown(&values) {
        assert_eq!(seq.map(identity()).to_list(), values);
    }
}

#[test_matrix([0, 1, 2, 3], [0, 1, 17, N])]
fn count_agrees_through_chains(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = random_values(&mut rng, len);

    let seq = randomly_chained(&mut rng, &values);
    if let Size::Known(n) = seq.size() {
        assert_eq!(n, len);
    }
    assert_eq!(seq.count(), len);

    let seq = randomly_chained(&mut rng, &values);
    assert_eq!(seq.to_list(), values);
}

#[test_matrix([0, 1, 2], [0, 1, 17, N])]
fn limit_count_is_bounded(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = random_values(&mut rng, len);

    for _ in 0..8 {
        let n = rng.random_range(0..=2 * len);
        for seq in known_and_unknown(&values) {
            let limited = seq.limit(n as i64).unwrap();
            assert_eq!(limited.count(), n.min(len));
        }
    }
}

#[test_matrix([0, 1, 2], [0, 1, 17, N])]
fn limit_and_skip_split_the_sequence(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = random_values(&mut rng, len);

    for _ in 0..8 {
        let n = rng.random_range(0..=len + 2) as i64;
        let [known, unknown] = known_and_unknown(&values);
        let mut rebuilt = known.limit(n).unwrap().to_list();
        rebuilt.extend(unknown.skip(n).unwrap());
        assert_eq!(rebuilt, values);
    }
}

#[test_matrix([0, 1, 2], [0, 1, 17, N])]
fn sorted_by_is_stable(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pairs: Vec<(u8, usize)> = (0..len).map(|i| (rng.random_range(0..5), i)).collect();

    let sorted = Seq::lazy(pairs)
        .sorted_by(|a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0))
        .to_list();

    assert_eq!(sorted.len(), len);
    for w in sorted.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert!(a.0 < b.0 || (a.0 == b.0 && a.1 < b.1));
    }
}

#[test_matrix([0, 1, 2], [1, 17, N])]
fn any_match_pulls_at_most_one_beyond_match(seed: u64, max: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let k = rng.random_range(0..max) as u64;

    let (seq, pulled) = naturals();
    let seq = seq.map(|x: u64| x * 2);
    assert!(seq.any_match(|x: &u64| *x == 2 * k));
    assert!(pulled.get() <= k as usize + 1);
}

#[test_matrix([0, 1, 2], [0, 1, 17, N])]
fn flat_map_size_is_sum_of_parts(seed: u64, len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lengths: Vec<usize> = (0..len).map(|_| rng.random_range(0..4)).collect();
    let total: usize = lengths.iter().sum();

    let to_part = |n: usize| (n > 0).then(|| Seq::of(0..n));

    let seq = Seq::of(lengths.clone()).flat_map(to_part);
    assert_eq!(seq.size(), Size::Known(total));
    assert_eq!(seq.count(), total);

    let seq = Seq::lazy(lengths).flat_map(to_part);
    assert_eq!(seq.size(), Size::Unknown);
    assert_eq!(seq.count(), total);
}
