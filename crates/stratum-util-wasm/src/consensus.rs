//! Subsidy schedule bound to a coin's consensus options.

use stratum_util::ConsensusParams;
use wasm_bindgen::prelude::*;

use crate::codec::{checked_integer, to_js_error};
use crate::console_log;

/// Consensus parameters set once from the pool's coin options.
#[wasm_bindgen]
pub struct KotoConsensus {
    params: ConsensusParams,
}

#[wasm_bindgen]
impl KotoConsensus {
    /// Create from the `coin` options object.
    ///
    /// `nSubsidySlowStartInterval` and `nSubsidyHalvingInterval` are optional;
    /// `undefined` or `null` gives the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(coin: JsValue) -> Result<KotoConsensus, JsValue> {
        let params: ConsensusParams = if coin.is_undefined() || coin.is_null() {
            ConsensusParams::default()
        } else {
            serde_wasm_bindgen::from_value(coin)
                .map_err(|e| JsValue::from_str(&format!("Invalid coin options: {}", e)))?
        };
        params.validate().map_err(to_js_error)?;

        console_log(&format!(
            "Koto consensus: slow start {} blocks, halving every {} blocks",
            params.slow_start_interval, params.halving_interval
        ));

        Ok(KotoConsensus { params })
    }

    #[wasm_bindgen(getter, js_name = slowStartInterval)]
    pub fn slow_start_interval(&self) -> f64 {
        self.params.slow_start_interval as f64
    }

    #[wasm_bindgen(getter, js_name = halvingInterval)]
    pub fn halving_interval(&self) -> f64 {
        self.params.halving_interval as f64
    }

    /// Subsidy in smallest units for `height`.
    ///
    /// Every value in the schedule is below 2^53, so it is returned as a plain
    /// number like the pool expects.
    #[wasm_bindgen(js_name = blockSubsidy)]
    pub fn block_subsidy(&self, height: f64) -> Result<f64, JsValue> {
        let height = checked_integer(height, 0.0, u64::MAX as f64, "block height")
            .map_err(to_js_error)?;
        self.params
            .block_subsidy(height as u64)
            .map(|s| s as f64)
            .map_err(to_js_error)
    }
}
