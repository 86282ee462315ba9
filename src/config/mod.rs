pub mod block;

pub use block::{parse_block_config, BlockConfig, BlockConfigBuilder};
