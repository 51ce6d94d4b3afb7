//! Opaque identifiers for lanes and steps.
//!
//! Ids only need to be unique within one session's model, so a prefix plus a
//! short random suffix is enough. They are used verbatim as node and subgraph
//! names in the generated markup and therefore stick to `[a-z0-9_]`.

use ahash::{AHashMap, AHashSet};
use rand::Rng;
use rand::rngs::ThreadRng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 6;

/// A source of opaque, session-unique identifiers.
pub trait IdGenerator {
    /// Returns a fresh id of the form `<prefix>_<suffix>`.
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Random base36 suffixes, with a retry on the (unlikely) collision.
#[derive(Debug, Default)]
pub struct RandomIds {
    rng: ThreadRng,
    issued: AHashSet<String>,
}

impl RandomIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{}_{}", prefix, self.suffix());
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Deterministic `<prefix>_<n>` ids. Counters are kept per prefix.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    counters: AHashMap<String, usize>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        format!("{}_{}", prefix, counter)
    }
}

/// One-shot random id, e.g. `uid("lane")` -> `"lane_k3j9x2"`.
pub fn uid(prefix: &str) -> String {
    RandomIds::new().next_id(prefix)
}
