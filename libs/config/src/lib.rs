//! # Tangle Protocol Parameters
//!
//! Network-wide values the validators check against: token supply, the
//! bech32 human-readable part, the PoW floor and the rent structure used to
//! price storage deposits.
//!
//! ## Loading Order
//!
//! 1. Built-in defaults
//! 2. Optional TOML file
//! 3. `TANGLE_`-prefixed environment variables, `__` between nested keys
//!    (`TANGLE_RENT_STRUCTURE__V_BYTE_COST=500`)
//!
//! ```rust
//! use tangle_config::ProtocolParameters;
//!
//! let params = ProtocolParameters::from_toml_str(r#"
//!     network_name = "fakenet"
//!     bech32_hrp = "rms"
//!     token_supply = 1450896407249092
//!     min_pow_score = 1500
//!
//!     [rent_structure]
//!     v_byte_cost = 100
//!     v_byte_factor_key = 10
//!     v_byte_factor_data = 1
//! "#).unwrap();
//! assert_eq!(params.rent_structure.v_byte_cost, 100);
//! ```

use anyhow::{bail, Context, Result};
use blake2b_simd::Params as Blake2bParams;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "TANGLE";

/// Byte-cost weights for storage deposits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentStructure {
    pub v_byte_cost: u32,
    pub v_byte_factor_key: u8,
    pub v_byte_factor_data: u8,
}

impl Default for RentStructure {
    fn default() -> Self {
        Self {
            v_byte_cost: 100,
            v_byte_factor_key: 10,
            v_byte_factor_data: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolParameters {
    pub network_name: String,
    pub bech32_hrp: String,
    /// Upper bound for any single output amount and for an essence total
    pub token_supply: u64,
    pub min_pow_score: u32,
    pub rent_structure: RentStructure,
}

impl Default for ProtocolParameters {
    fn default() -> Self {
        Self {
            network_name: "testnet".to_string(),
            bech32_hrp: "rms".to_string(),
            token_supply: 1_450_896_407_249_092,
            min_pow_score: 1500,
            rent_structure: RentStructure::default(),
        }
    }
}

impl ProtocolParameters {
    /// Defaults, then `path` if given, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to convert default protocol parameters")?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = path {
            info!("Loading protocol parameters: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let params: Self = builder
            .build()
            .context("Failed to build protocol parameters")?
            .try_deserialize()
            .context("Failed to deserialize protocol parameters")?;
        params.validate()?;

        debug!(
            network = %params.network_name,
            hrp = %params.bech32_hrp,
            token_supply = params.token_supply,
            "protocol parameters loaded"
        );
        Ok(params)
    }

    /// Parse an in-memory TOML document; no defaults or environment applied
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let params: Self = toml::from_str(source).context("Failed to parse protocol parameters")?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_supply == 0 {
            bail!("token_supply must be greater than zero");
        }
        if self.bech32_hrp.is_empty() {
            bail!("bech32_hrp must not be empty");
        }
        if self.rent_structure.v_byte_cost == 0 {
            bail!("rent_structure.v_byte_cost must be greater than zero");
        }
        Ok(())
    }

    /// First eight bytes of the Blake2b-256 hash of the network name, little-endian
    pub fn network_id(&self) -> u64 {
        let hash = Blake2bParams::new()
            .hash_length(32)
            .hash(self.network_name.as_bytes());
        let mut id = [0u8; 8];
        id.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let params = ProtocolParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.rent_structure.v_byte_factor_key, 10);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
network_name = "fakenet"
token_supply = 2779530283277761

[rent_structure]
v_byte_cost = 500
"#
        )
        .unwrap();

        let params = ProtocolParameters::load(Some(file.path())).unwrap();
        assert_eq!(params.network_name, "fakenet");
        assert_eq!(params.token_supply, 2_779_530_283_277_761);
        assert_eq!(params.rent_structure.v_byte_cost, 500);
        // untouched keys keep their defaults
        assert_eq!(params.bech32_hrp, "rms");
        assert_eq!(params.rent_structure.v_byte_factor_data, 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ProtocolParameters::load(Some(Path::new("/nonexistent/tangle.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_override() {
        std::env::set_var("TANGLE_MIN_POW_SCORE", "4000");
        let params = ProtocolParameters::load(None).unwrap();
        std::env::remove_var("TANGLE_MIN_POW_SCORE");
        assert_eq!(params.min_pow_score, 4000);
    }

    #[test]
    fn test_validate_rejects_zero_supply() {
        let params = ProtocolParameters {
            token_supply: 0,
            ..ProtocolParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("token_supply"));
    }

    #[test]
    fn test_from_toml_str_requires_every_field() {
        assert!(ProtocolParameters::from_toml_str("network_name = \"x\"").is_err());
    }

    #[test]
    fn test_network_id_depends_on_name() {
        let a = ProtocolParameters::default();
        let b = ProtocolParameters {
            network_name: "mainnet".to_string(),
            ..ProtocolParameters::default()
        };
        assert_ne!(a.network_id(), b.network_id());
        assert_eq!(a.network_id(), ProtocolParameters::default().network_id());
    }
}
