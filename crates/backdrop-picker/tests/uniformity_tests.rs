//! Statistical checks that selection is uniform across the set.

use backdrop_picker::{BackgroundPicker, DrawSequence, ImageSet, RngSource};

#[test]
fn test_seeded_draws_are_uniform() {
    let picker = BackgroundPicker::new(ImageSet::builtin());
    let mut rng = RngSource::seeded(2024);
    let trials = 40_000;
    let mut counts = [0usize; 4];
    for _ in 0..trials {
        counts[picker.choose_index(&mut rng)] += 1;
    }

    let expected = trials / counts.len();
    for (index, &count) in counts.iter().enumerate() {
        // Standard deviation is about 87; 500 is a very loose bound.
        assert!(
            count.abs_diff(expected) < 500,
            "image {index} chosen {count} times, expected about {expected}"
        );
    }
}

#[test]
fn test_evenly_spaced_draws_hit_every_index_equally() {
    let paths = ["a", "b", "c", "d", "e"];
    let picker = BackgroundPicker::new(ImageSet::new(paths).unwrap());
    let steps = 1000;
    let draws = (0..steps)
        .map(|i| (f64::from(i) + 0.5) / f64::from(steps))
        .collect();
    let mut rng = DrawSequence::new(draws);

    let mut counts = [0usize; 5];
    for _ in 0..steps {
        counts[picker.choose_index(&mut rng)] += 1;
    }
    assert_eq!(counts, [200; 5]);
}

#[test]
fn test_thread_rng_covers_every_image() {
    let picker = BackgroundPicker::new(ImageSet::builtin());
    let mut rng = RngSource::thread();
    let mut seen = [false; 4];
    for _ in 0..10_000 {
        seen[picker.choose_index(&mut rng)] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
