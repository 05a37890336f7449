//! Parsing of the environment arguments the emulator is started with.
//!
//! Hosts pass arguments of the form `ROM:<path>` and `SRAM:<path>`. Anything else is left for
//! other consumers and ignored here.
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

const ROM_PREFIX: &str = "ROM:";
const SRAM_PREFIX: &str = "SRAM:";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    pub rom: Option<PathBuf>,
    pub sram: Option<PathBuf>,
}

impl LaunchConfig {
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = LaunchConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(rom) = arg.strip_prefix(ROM_PREFIX) {
                config.rom = non_empty_path(rom);
                if let Some(rom) = &config.rom {
                    log::info!("Loading ROM from file {:?}.", rom);
                }
            } else if let Some(sram) = arg.strip_prefix(SRAM_PREFIX) {
                config.sram = non_empty_path(sram);
                if let Some(sram) = &config.sram {
                    log::info!("Loading SRAM from file {:?}.", sram);
                }
            }
        }
        config
    }

    pub fn rom_path(&self) -> Result<&Path> {
        self.rom
            .as_deref()
            .with_context(|| format!("No ROM given. Pass {}<path> to load one.", ROM_PREFIX))
    }

    /// Explicit SRAM file, or the `.srm` file next to the ROM.
    pub fn sram_path(&self) -> Option<PathBuf> {
        self.sram
            .clone()
            .or_else(|| self.rom.as_ref().map(|rom| rom.with_extension("srm")))
    }
}

fn non_empty_path(path: &str) -> Option<PathBuf> {
    (!path.is_empty()).then(|| PathBuf::from(path))
}
