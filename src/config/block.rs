use std::fs;
use std::path::Path;

use derive_builder::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{MismatchError, NfsError, Result};

/// Properties and connectivity of the block type being replicated.
///
/// Header properties and values are paired by position, as are netlist pins
/// and nets. Use [`BlockConfig::check`] before iterating the pairs.
#[derive(Debug, Eq, PartialEq, Clone, Hash, Builder, Serialize, Deserialize)]
#[builder(derive(Debug))]
#[serde(default)]
pub struct BlockConfig {
    /// Property names written in the first column of the header.
    #[builder(default = "default_header_props()", setter(into))]
    pub header_props: Vec<String>,
    /// Value repeated once per block for the matching property.
    #[builder(default = "default_header_values()", setter(into))]
    pub header_values: Vec<String>,
    /// Pins on the block symbol.
    #[builder(default = "default_netlist_pins()", setter(into))]
    pub netlist_pins: Vec<String>,
    /// Net suffixes connected to the matching pins.
    ///
    /// Each net is written as `BLK_<index>_<suffix>`.
    #[builder(default = "default_netlist_nets()", setter(into))]
    pub netlist_nets: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_header_props() -> Vec<String> {
    strings(&[
        "%Partition%",
        "%RefDes Renumber@SYM@BLOCK%",
        "%RefDes Renumber@SYM@PATH%",
        "%Reuse Cell Name@SYM@BLOCK%",
        "%Symbol Name%",
    ])
}

fn default_header_values() -> Vec<String> {
    strings(&[
        "Logical_Physical",
        "True",
        "False",
        "LP_BLOCK_A",
        "LP_BLOCK_A.1",
    ])
}

fn default_netlist_pins() -> Vec<String> {
    strings(&["BLOCK_A_IN", "BLOCK_A_OUT"])
}

fn default_netlist_nets() -> Vec<String> {
    strings(&["IN", "OUT"])
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            header_props: default_header_props(),
            header_values: default_header_values(),
            netlist_pins: default_netlist_pins(),
            netlist_nets: default_netlist_nets(),
        }
    }
}

impl BlockConfig {
    #[inline]
    pub fn builder() -> BlockConfigBuilder {
        BlockConfigBuilder::default()
    }

    /// Verifies that the positionally paired arrays have equal lengths.
    pub fn check(&self) -> std::result::Result<(), MismatchError> {
        if self.header_props.len() != self.header_values.len() {
            return Err(MismatchError::Header {
                props: self.header_props.len(),
                values: self.header_values.len(),
            });
        }
        if self.netlist_pins.len() != self.netlist_nets.len() {
            return Err(MismatchError::Netlist {
                pins: self.netlist_pins.len(),
                nets: self.netlist_nets.len(),
            });
        }
        Ok(())
    }

    /// Iterates `(property, value)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if the header arrays differ in length.
    pub fn header(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header_props
            .iter()
            .zip_eq(self.header_values.iter())
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Iterates `(net suffix, pin)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if the netlist arrays differ in length.
    pub fn connections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.netlist_nets
            .iter()
            .zip_eq(self.netlist_pins.iter())
            .map(|(n, p)| (n.as_str(), p.as_str()))
    }
}

pub fn parse_block_config(path: impl AsRef<Path>) -> Result<BlockConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| NfsError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let data: BlockConfig = toml::from_str(&contents).map_err(|e| NfsError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::debug!("loaded block configuration from {:?}: {:?}", path, data);
    Ok(data)
}
