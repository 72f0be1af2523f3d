//! Payload generation
//!
//! A [`Generator`] produces an unbounded, non-restartable sequence of display
//! strings. [`SymbolSequenceGenerator`] is the emoji implementation used by the
//! send loop; its [`GrowthPolicy`] decides how long each payload is.

use std::fmt;
use std::str::FromStr;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::errors::GeneratorError;

pub mod symbols;

pub use symbols::SYMBOLS;

// ----------------------------------------------------------------------------
// Generator Capability
// ----------------------------------------------------------------------------

/// Source of message payloads
pub trait Generator {
    /// Produce the next payload, permanently advancing the sequence
    fn generate(&mut self) -> String;

    /// Whether another payload can be produced
    fn has_more(&self) -> bool;
}

// ----------------------------------------------------------------------------
// Growth Policy
// ----------------------------------------------------------------------------

/// Rule deciding how many symbols each payload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// One symbol per payload
    #[default]
    Single,
    /// Payload `k` (0-indexed) carries `k + 1` symbols
    Staircase,
}

impl GrowthPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthPolicy::Single => "single",
            GrowthPolicy::Staircase => "staircase",
        }
    }

    /// Number of symbols in the payload produced at `index`
    fn payload_len(&self, index: u64) -> usize {
        match self {
            GrowthPolicy::Single => 1,
            GrowthPolicy::Staircase => usize::try_from(index)
                .map_or(usize::MAX, |i| i.saturating_add(1)),
        }
    }
}

impl fmt::Display for GrowthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthPolicy {
    type Err = GeneratorError;

    /// Mode tokens are matched exactly; the empty token selects `single`
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "" | "single" => Ok(GrowthPolicy::Single),
            "staircase" => Ok(GrowthPolicy::Staircase),
            other => Err(GeneratorError::InvalidMode(other.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------
// Symbol Sequence Generator
// ----------------------------------------------------------------------------

/// Generator producing runs of emoji drawn uniformly from [`SYMBOLS`]
///
/// Each instance owns its RNG, seeded once at construction and advanced across
/// calls. Use [`SymbolSequenceGenerator::with_seed`] for reproducible sequences.
pub struct SymbolSequenceGenerator {
    policy: GrowthPolicy,
    index: u64,
    rng: StdRng,
}

impl SymbolSequenceGenerator {
    /// Create a generator from a mode token (`""`, `"single"` or `"staircase"`)
    pub fn new(mode: &str) -> Result<Self, GeneratorError> {
        Ok(Self::with_policy(mode.parse()?))
    }

    /// Create an entropy-seeded generator for `policy`
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            policy,
            index: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator for `policy`
    pub fn with_seed(policy: GrowthPolicy, seed: u64) -> Self {
        Self {
            policy,
            index: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of payloads generated so far
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Draw `n` symbols with replacement
    fn random_symbols(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| SYMBOLS[self.rng.gen_range(0..SYMBOLS.len())])
            .collect()
    }
}

impl Generator for SymbolSequenceGenerator {
    fn generate(&mut self) -> String {
        let payload = self.random_symbols(self.policy.payload_len(self.index));
        self.index += 1;
        payload
    }

    fn has_more(&self) -> bool {
        true
    }
}

impl Iterator for SymbolSequenceGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

impl fmt::Debug for SymbolSequenceGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolSequenceGenerator")
            .field("policy", &self.policy)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
