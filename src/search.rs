use std::time::Instant;
use crossbeam::channel::{Receiver, bounded, unbounded};
use indicatif::ProgressBar;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rayon::{current_num_threads, scope};
use crate::query::Query;


/// Finds seeds matching the given Query in parallel and sends them to the returned
/// Receiver. Seeds are drawn at random, the same way the maze config endpoint
/// hands them out.
/// - [deadline]: when to stop searching. Passing 'None' will search until 'num' seeds
///   have been found. Passing 'None' for both searches forever.
/// - [num]: how many matching seeds to find. Workers may overshoot slightly.
/// - [progress]: an Indicatif ProgressBar that will be updated as the search progresses.
pub fn find_matching_seeds_parallel(
    query: &Query,
    deadline: Option<Instant>,
    num: Option<usize>,
    progress: Option<&ProgressBar>,
) -> Receiver<f64> {
    let (sender, results_r) = unbounded();
    let (num_s, num_r) = bounded::<()>(num.unwrap_or(0));  // Shared tally of matches across workers.

    scope(|s| {
        for _ in 0..current_num_threads() {
            let sender = sender.clone();
            let num_s = num_s.clone();
            let num_r = num_r.clone();
            let query = query.clone();
            let progress = progress.map(|p| p.downgrade());
            s.spawn(move |_| {
                let mut rng = SmallRng::from_entropy();
                loop {
                    if let Some(deadline_inner) = deadline {
                        if Instant::now() > deadline_inner {
                            return;
                        }
                    }

                    if let Some(n) = num {
                        if num_r.len() >= n {
                            return;
                        }
                    }

                    let seed: f64 = rng.gen();
                    if query.matches(seed) {
                        if sender.send(seed).is_err() {
                            return;
                        }
                        if num.is_some() {
                            let _ = num_s.try_send(());
                        }
                    }

                    if let Some(progress) = progress.as_ref().and_then(|p| p.upgrade()) {
                        progress.inc(1);
                    }
                }
            });
        }
    });

    results_r
}
