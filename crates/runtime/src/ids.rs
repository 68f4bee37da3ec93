//! Item id generation.
//!
//! Ids have the host's 24-hex-character shape: 4 bytes of big-endian unix
//! seconds followed by 8 bytes of a SHA-256 digest over a random seed and a
//! per-generator counter.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use trader_core::IdGenerator;

/// [`IdGenerator`] producing host-style object ids.
///
/// Every id issued is remembered, so a generator never repeats itself.
pub struct ObjectIdGenerator {
    rng: StdRng,
    counter: u64,
    issued: HashSet<String>,
}

impl ObjectIdGenerator {
    /// Length of a generated id in hex characters.
    pub const ID_LEN: usize = 24;

    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator with a fixed seed. Ids still embed the current time.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            counter: 0,
            issued: HashSet::new(),
        }
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    fn candidate(&mut self) -> String {
        let seconds = chrono::Utc::now().timestamp() as u32;

        let mut seed = [0u8; 32];
        self.rng.fill(&mut seed);
        self.counter += 1;

        let digest = Sha256::new()
            .chain_update(seed)
            .chain_update(self.counter.to_be_bytes())
            .finalize();

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&digest[..8]);
        hex::encode(bytes)
    }
}

impl Default for ObjectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for ObjectIdGenerator {
    fn generate(&mut self) -> String {
        loop {
            let id = self.candidate();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}
