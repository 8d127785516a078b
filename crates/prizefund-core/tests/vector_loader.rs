//! JSON allocation vector loader shared by core tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AllocationVector {
    pub description: String,
    pub pool: u64,
    pub scores: [u64; 3],
    pub expect: [u64; 3],
}

pub fn load(name: &str) -> AllocationVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
