//! Block subsidy for a slow-start, halving-schedule coin (Koto rules).

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, UtilError};

/// Smallest units per coin.
pub const COIN: u64 = 100_000_000;

/// Steady-state subsidy before any halving: 100 coins.
pub const BASE_SUBSIDY: u64 = 100 * COIN;

/// Subsidy paid by block 1.
pub const FIRST_BLOCK_SUBSIDY: u64 = 3_920_000 * COIN;

pub const DEFAULT_SLOW_START_INTERVAL: u64 = 43_200;
pub const DEFAULT_HALVING_INTERVAL: u64 = 1_051_200;

/// Consensus parameters driving the subsidy schedule.
///
/// Deserializes from the pool's coin options, so either key may be left out
/// and keeps its default:
///
/// ```json
/// { "nSubsidySlowStartInterval": 43200, "nSubsidyHalvingInterval": 1051200 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    /// Blocks over which the subsidy ramps up linearly.
    #[serde(rename = "nSubsidySlowStartInterval")]
    pub slow_start_interval: u64,
    /// Blocks between halvings.
    #[serde(rename = "nSubsidyHalvingInterval")]
    pub halving_interval: u64,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        ConsensusParams {
            slow_start_interval: DEFAULT_SLOW_START_INTERVAL,
            halving_interval: DEFAULT_HALVING_INTERVAL,
        }
    }
}

impl ConsensusParams {
    /// Create validated parameters.
    pub fn new(slow_start_interval: u64, halving_interval: u64) -> Result<Self> {
        let params = ConsensusParams {
            slow_start_interval,
            halving_interval,
        };
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a coin options JSON object and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: ConsensusParams =
            serde_json::from_str(json).map_err(|e| UtilError::InvalidEncoding(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Both intervals are divisors in the schedule and must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.slow_start_interval == 0 {
            return Err(UtilError::InvalidParams("slow start interval must be positive"));
        }
        if self.halving_interval == 0 {
            return Err(UtilError::InvalidParams("halving interval must be positive"));
        }
        Ok(())
    }

    /// Height offset subtracted before counting halvings.
    pub fn slow_start_shift(&self) -> u64 {
        self.slow_start_interval / 2
    }

    /// Calculate the block subsidy in smallest units for a given height.
    ///
    /// Block 1 pays a fixed premine. Up to the slow-start interval the subsidy
    /// ramps linearly, with the step from the first to the second half of the
    /// ramp counting one extra block. After that it starts at 100 coins and
    /// halves every `halving_interval` blocks, offset by half the ramp.
    pub fn block_subsidy(&self, height: u64) -> Result<u64> {
        self.validate()?;

        if height == 1 {
            return Ok(FIRST_BLOCK_SUBSIDY);
        }

        let step = u128::from(BASE_SUBSIDY / self.slow_start_interval);
        let height_wide = u128::from(height);

        let subsidy = if height_wide * 2 < u128::from(self.slow_start_interval) {
            step * height_wide
        } else if height < self.slow_start_interval {
            step * (height_wide + 1)
        } else {
            let halvings = (height - self.slow_start_shift()) / self.halving_interval;
            if halvings >= 64 {
                debug!(height, halvings, "subsidy exhausted");
                return Ok(0);
            }
            u128::from(BASE_SUBSIDY) >> halvings
        };

        u64::try_from(subsidy).map_err(|_| UtilError::out_of_range(subsidy, "u64 subsidy"))
    }
}
