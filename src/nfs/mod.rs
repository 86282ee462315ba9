use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::BlockConfig;
use crate::error::{NfsError, Result};
use crate::validate::RunParams;

pub const NET_PREFIX: &str = "BLK";

/// Name of net `suffix` inside block `index`.
pub fn block_net(index: u32, suffix: &str) -> String {
    format!("{NET_PREFIX}_{index}_{suffix}")
}

/// Writes the header and netlist sections of an NFS file.
pub struct NfsWriter<T>
where
    T: Write,
{
    sink: T,
    path: PathBuf,
    lines: usize,
}

impl<T> NfsWriter<T>
where
    T: Write,
{
    /// Wraps `sink`. `path` is only used for error reporting.
    pub fn new(sink: T, path: impl Into<PathBuf>) -> Self {
        Self {
            sink,
            path: path.into(),
            lines: 0,
        }
    }

    fn io(&self, e: std::io::Error) -> NfsError {
        NfsError::io(&self.path, e)
    }

    /// One line per header property, with the value repeated once per block.
    pub fn write_header(&mut self, params: &RunParams, config: &BlockConfig) -> Result<()> {
        for (prop, value) in config.header() {
            self.write_header_line(prop, value, params.num_blocks())
                .map_err(|e| self.io(e))?;
        }
        log::info!(
            "wrote {} header lines for blocks {}..={}",
            config.header_props.len(),
            params.num_blocks_min(),
            params.num_blocks_max()
        );
        Ok(())
    }

    fn write_header_line(&mut self, prop: &str, value: &str, columns: usize) -> std::io::Result<()> {
        write!(self.sink, "{prop}")?;
        for _ in 0..columns {
            write!(self.sink, "\t{value}")?;
        }
        writeln!(self.sink)?;
        self.lines += 1;
        Ok(())
    }

    /// One line per block and pin, with the pin column stepped one tab right
    /// for every block past the first.
    pub fn write_netlist(&mut self, params: &RunParams, config: &BlockConfig) -> Result<()> {
        for index in params.blocks() {
            let indent = params.indent(index);
            for (net, pin) in config.connections() {
                self.write_netlist_line(&block_net(index, net), indent, pin)
                    .map_err(|e| self.io(e))?;
            }
        }
        log::info!(
            "wrote {} netlist lines",
            params.num_blocks() * config.netlist_pins.len()
        );
        Ok(())
    }

    fn write_netlist_line(&mut self, net: &str, indent: usize, pin: &str) -> std::io::Result<()> {
        write!(self.sink, "{net}")?;
        for _ in 0..indent {
            write!(self.sink, "\t")?;
        }
        writeln!(self.sink, "{pin}")?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written so far.
    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> Result<T> {
        self.sink.flush().map_err(|e| self.io(e))?;
        Ok(self.sink)
    }
}

impl NfsWriter<BufWriter<File>> {
    /// Creates or truncates the file at `path`.
    pub fn to_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let f = File::create(path).map_err(|e| NfsError::io(path, e))?;
        log::debug!("opened {:?} for writing", path);
        Ok(Self::new(BufWriter::new(f), path))
    }
}

/// Renders a complete NFS file into a string.
pub fn generate_nfs(params: &RunParams, config: &BlockConfig) -> Result<String> {
    config.check()?;
    let mut writer = NfsWriter::new(Vec::new(), params.filepath());
    writer.write_header(params, config)?;
    writer.write_netlist(params, config)?;
    let bytes = writer.finish()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
