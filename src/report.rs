// Machine-readable run report, one JSON object per run.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub input_size: usize,
    pub threads: usize,
    pub strategy: &'static str,
    pub grain: usize,
    pub seed: Option<u64>,
    pub primes: u64,
    pub elapsed_sec: f64,
}

impl RunReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
