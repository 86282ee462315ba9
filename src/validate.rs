use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::error::{NfsError, PathError, RangeError, Result, MAX_BLOCKS};
use crate::paths::{has_nfs_extension, path_ending};

/// Validated inputs for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunParams {
    num_blocks_min: u32,
    num_blocks_max: u32,
    filepath: PathBuf,
}

impl RunParams {
    /// Checks the block range and output path.
    ///
    /// Range checks run in order: `min <= max`, then non-negative, then the
    /// [`MAX_BLOCKS`] ceiling. The path check follows the range checks.
    pub fn new(num_blocks_min: i32, num_blocks_max: i32, filepath: &str) -> Result<Self> {
        if num_blocks_min > num_blocks_max {
            return Err(RangeError::MinAboveMax {
                min: num_blocks_min,
                max: num_blocks_max,
            }
            .into());
        } else if num_blocks_min < 0 || num_blocks_max < 0 {
            return Err(RangeError::Negative.into());
        } else if num_blocks_min > MAX_BLOCKS || num_blocks_max > MAX_BLOCKS {
            return Err(RangeError::TooMany.into());
        }

        if filepath.trim().is_empty() {
            return Err(PathError::Empty.into());
        } else if !has_nfs_extension(filepath) {
            return Err(PathError::BadExtension {
                ending: path_ending(filepath).to_string(),
            }
            .into());
        }

        Ok(Self {
            num_blocks_min: num_blocks_min as u32,
            num_blocks_max: num_blocks_max as u32,
            filepath: PathBuf::from(filepath),
        })
    }

    #[inline]
    pub fn num_blocks_min(&self) -> u32 {
        self.num_blocks_min
    }

    #[inline]
    pub fn num_blocks_max(&self) -> u32 {
        self.num_blocks_max
    }

    #[inline]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// Block indices to generate, inclusive on both ends.
    #[inline]
    pub fn blocks(&self) -> RangeInclusive<u32> {
        self.num_blocks_min..=self.num_blocks_max
    }

    #[inline]
    pub fn num_blocks(&self) -> usize {
        (self.num_blocks_max - self.num_blocks_min) as usize + 1
    }

    /// Number of tabs between the net and pin columns for block `index`.
    #[inline]
    pub fn indent(&self, index: u32) -> usize {
        (index - self.num_blocks_min) as usize + 1
    }
}

fn parse_count(value: &str) -> Result<i32> {
    value.parse().map_err(|source| NfsError::NumberFormat {
        value: value.to_string(),
        source,
    })
}

/// Validates the raw `<numBlocksMin> <numBlocksMax> <filepath>` inputs.
pub fn validate_args<S: AsRef<str>>(args: &[S]) -> Result<RunParams> {
    let [min, max, filepath] = args else {
        return Err(NfsError::ArgumentCount(args.len()));
    };
    let min = parse_count(min.as_ref())?;
    let max = parse_count(max.as_ref())?;
    let params = RunParams::new(min, max, filepath.as_ref())?;
    log::debug!("validated run parameters: {:?}", params);
    Ok(params)
}
