// shamir_recover/src/case.rs
//
// One case file is a JSON object of the shape
//
//   {
//     "keys": { "n": 4, "k": 3 },
//     "1": { "base": "10", "value": "4" },
//     "2": { "base": "2",  "value": "111" },
//     ...
//   }
//
// "keys.k" is the reconstruction threshold; "keys.n" is an advisory share
// count and is ignored. Every other top-level key is a stringified
// x-coordinate whose object carries the value's numeric base and its digits
// in that base. Share entries are visited in lexicographic key order and only
// the first k are decoded; later entries are skipped unparsed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use num_bigint::BigInt;
use serde::Deserialize;

use crate::decode::decode_value;
use crate::error::CaseError;
use crate::shamir::{reconstruct_secret, Share};

#[derive(Debug, Deserialize)]
struct RawCase {
    keys: ThresholdMeta,
    // Entries stay raw JSON here; only the first k are ever given a shape.
    #[serde(flatten)]
    entries: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ThresholdMeta {
    k: usize,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: String,
    value: String,
}

/// One parsed case: the threshold and the first k decoded shares. The
/// reserved "keys" entry never reaches share iteration; serde routes it into
/// the threshold field.
#[derive(Debug)]
pub struct Case {
    pub k: usize,
    pub shares: Vec<Share>,
}

impl Case {
    pub fn from_json_str(text: &str) -> Result<Case, CaseError> {
        let raw: RawCase = serde_json::from_str(text)?;
        let k = raw.keys.k;
        let mut shares = Vec::with_capacity(k.min(raw.entries.len()));
        for (key, value) in &raw.entries {
            if shares.len() >= k {
                break;
            }
            let x: i64 = key
                .parse()
                .map_err(|_| CaseError::InvalidCoordinate { key: key.clone() })?;
            let entry: RawShare = serde_json::from_value(value.clone())?;
            let base: u32 = entry.base.parse().map_err(|_| CaseError::InvalidBase {
                x,
                base: entry.base.clone(),
            })?;
            let y = decode_value(&entry.value, base)?;
            shares.push(Share { x, y });
        }
        debug!(
            "case: k={}, decoded {} of {} share entries",
            k,
            shares.len(),
            raw.entries.len()
        );
        Ok(Case { k, shares })
    }
}

/// Read one case file and recover its secret.
pub fn solve_case_file(path: &Path) -> Result<BigInt, CaseError> {
    let text = fs::read_to_string(path)?;
    let case = Case::from_json_str(&text)?;
    Ok(reconstruct_secret(&case.shares, case.k)?)
}
