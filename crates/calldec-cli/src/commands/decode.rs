//! Decode command

use clap::Args;
use tracing::debug;

use crate::{config::Config, output::Output, CliError};

/// Decode an ABI payload against a function signature
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Function signature, e.g. "function baz(uint256,string)"
    pub signature: String,

    /// Hex payload of encoded words, with or without a 0x prefix
    pub data: String,

    /// Decode int<N> with its declared bit width instead of the
    /// compatibility default of 256 bits
    #[arg(long)]
    pub declared_width: bool,

    /// Maximum type nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl DecodeArgs {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let mut options = config.decode_options();
        if self.declared_width {
            options.declared_int_width = true;
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }

        let parsed = calldec_abi::Signature::parse(&self.signature)?;
        debug!(function = %parsed.name, params = parsed.params.len(), "decoding payload");

        let decoded = calldec_abi::decode_with_options(&self.signature, &self.data, &options)?;

        Output::new(json)
            .field("function", &parsed.name)
            .field("decoded", &decoded)
            .message(&decoded)
            .print();

        Ok(())
    }
}
