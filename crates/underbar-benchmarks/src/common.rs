//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use underbar_core::{mapping_from, Mapping};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Mapping with `size` keys named `{prefix}{i}`
pub fn create_mapping(prefix: &str, size: usize) -> Mapping<u64> {
    mapping_from((0..size).map(|i| (format!("{prefix}{i}"), i as u64)))
}

/// Deliberately slow function used to show memoization gains
pub fn slow_fibonacci(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        slow_fibonacci(n - 1) + slow_fibonacci(n - 2)
    }
}
