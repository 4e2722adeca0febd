// Prime-counting benchmark: fill a large sample with small random integers,
// count the primes with a fixed-size rayon pool, time the counting phase.

pub mod count;
pub mod report;
pub mod sample;
pub mod stopwatch;
