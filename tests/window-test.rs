#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use sliding_median::window::Window;

    // stable random
    fn random_values(max: i64, length: usize) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(1000);
        (0..length).map(|_| rng.gen_range(0..max)).collect()
    }

    fn naive_median(sorted: &[i64]) -> Option<i64> {
        let n = sorted.len();
        if n < 2 {
            return None;
        }
        if n % 2 == 0 {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2)
        } else {
            Some(sorted[(n - 1) / 2])
        }
    }

    #[test]
    fn median_matches_naive_recompute() {
        let size = 100;
        let window = Window::new(size).unwrap();
        let values = random_values(1000, 2000);

        for (i, chunk_end) in (1..=values.len()).enumerate() {
            window.add_val(values[chunk_end - 1]);

            // recompute from scratch over the values still in range
            let start = chunk_end.saturating_sub(size);
            let mut in_range: Vec<i64> = values[start..chunk_end].to_vec();
            in_range.sort_unstable();

            assert_eq!(
                window.median(),
                naive_median(&in_range),
                "after insertion {}",
                i
            );
        }
    }

    #[test]
    fn negative_values_are_ordinary_data() {
        let window = Window::new(4).unwrap();
        for v in [-1, -1, -1, -1] {
            window.add_val(v);
        }
        // a real median of -1 must be distinguishable from "undefined"
        assert_eq!(window.median(), Some(-1));
    }

    // run under `cargo test` with RUSTFLAGS="-Z sanitizer=thread" or miri to
    // chase races; the assertion here is on the invariant surviving the churn
    #[test]
    fn concurrent_readers_and_writer() {
        let window = Arc::new(Window::new(1000).unwrap());
        let values = random_values(1000, 10_000);
        let finished = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let window = Arc::clone(&window);
                let finished = Arc::clone(&finished);
                std::thread::spawn(move || {
                    let mut last = None;
                    while !finished.load(Ordering::Acquire) {
                        last = window.median();
                    }
                    last
                })
            })
            .collect();

        for v in values {
            window.add_val(v);
        }
        finished.store(true, Ordering::Release);

        for reader in readers {
            let last = reader.join().expect("reader panicked");
            // the writer pushed far more than two values, every reader must
            // have ended on a defined median
            assert!(last.is_some());
        }
    }
}
