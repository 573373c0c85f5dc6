use std::time::{Duration, Instant};

use roadflow::Project;

pub(crate) fn run_benchmark(project: &Project, iterations: usize) {
    let mut explore: Duration = Duration::ZERO;

    for _ in 0..iterations {
        let start_explore = Instant::now();
        crate::attempt!(project.explore());
        explore += start_explore.elapsed();
    }

    explore /= iterations as u32;

    println!(
        "Exploring {} candidate roads with budget {} took {}s and {}ms on average (n={}).",
        project.candidates.len(),
        project.budget,
        explore.as_secs(),
        explore.subsec_millis(),
        iterations,
    );
}
