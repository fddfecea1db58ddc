//! Exercises the process-wide generator. Kept as the only test in this
//! binary so the first draw below is the first draw of the process.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use seedwell_core::{
    get, global_report, global_seed_events, global_state, observe_global_seeding,
    GeneratorState, SeedReport,
};

#[test]
fn sixty_four_threads_share_one_seeding() {
    let observed = Arc::new(AtomicUsize::new(0));
    let hook = Arc::clone(&observed);
    assert!(observe_global_seeding(Box::new(move |_report: &SeedReport| {
        hook.fetch_add(1, Ordering::SeqCst);
    }))
    .is_ok());
    assert_eq!(global_state(), GeneratorState::Uninitialized);
    assert!(global_report().is_none());

    let handles: Vec<_> = (0..64)
        .map(|_| {
            thread::spawn(|| {
                let mut counts = [0u32; 6];
                for _ in 0..10_000 {
                    let face: i32 = get(1, 6).expect("valid range");
                    counts[(face - 1) as usize] += 1;
                }
                counts
            })
        })
        .collect();

    let mut totals = [0u32; 6];
    for handle in handles {
        let counts = handle.join().expect("worker panicked");
        for (total, count) in totals.iter_mut().zip(counts) {
            *total += count;
        }
    }

    assert_eq!(global_seed_events(), 1);
    assert_eq!(observed.load(Ordering::SeqCst), 1);
    assert_eq!(global_state(), GeneratorState::Ready);
    assert_eq!(totals.iter().sum::<u32>(), 640_000);
    assert!(totals.iter().all(|&count| count > 0));

    let report = global_report().expect("seeded");
    assert_eq!(report.fingerprint.len(), 64);
    assert!(get(5, 1).is_err());
    assert_eq!(global_seed_events(), 1);
}
