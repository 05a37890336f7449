#![cfg(not(target_arch = "wasm32"))]
//! Command line host. Saves go to a directory, the viewport comes from the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use argh::FromArgs;
use snes_bridge::launch::LaunchConfig;
use snes_bridge::persistence::DirectoryPersistence;
use snes_bridge::HostBridge;
use snes_bridge::ViewportSize;
use snes_bridge::DEFAULT_VIEWPORT;

/// Super Nintendo host bridge
#[derive(FromArgs, Debug, Default)]
pub struct HostArgs {
    /// launch arguments passed to the emulator, e.g. ROM:game.sfc SRAM:game.srm
    #[argh(positional)]
    pub launch_args: Vec<String>,

    /// directory to store saved states in. Saves are discarded without it.
    #[argh(option)]
    pub save_dir: Option<PathBuf>,

    /// width of the rendering surface in pixels
    #[argh(option, default = "DEFAULT_VIEWPORT.width")]
    pub width: u32,

    /// height of the rendering surface in pixels
    #[argh(option, default = "DEFAULT_VIEWPORT.height")]
    pub height: u32,

    /// state file to hand to the host as a save
    #[argh(option)]
    pub state: Option<PathBuf>,

    /// name to save the state under, defaults to the file name of --state
    #[argh(option)]
    pub slot: Option<String>,
}

pub fn build_bridge(args: &HostArgs) -> Result<HostBridge> {
    let bridge = HostBridge::new(ViewportSize::new(args.width, args.height));
    Ok(match &args.save_dir {
        Some(dir) => bridge.with_persistence(DirectoryPersistence::new(dir)?),
        None => bridge,
    })
}

pub fn run(args: &HostArgs) -> Result<()> {
    let launch = LaunchConfig::from_args(&args.launch_args);
    let mut bridge = build_bridge(args)?;
    log::info!(
        "Viewport {}, state persistence {}",
        bridge.viewport_size(),
        if bridge.supports_persistence() {
            "enabled"
        } else {
            "disabled"
        }
    );
    if let Some(sram) = launch.sram_path() {
        log::info!("SRAM file {:?}", sram);
    }

    if let Some(state_file) = &args.state {
        let payload =
            fs::read(state_file).with_context(|| format!("Cannot read {:?}", state_file))?;
        let slot = match &args.slot {
            Some(slot) => slot.clone(),
            None => state_file
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
                .with_context(|| format!("Cannot derive a slot name from {:?}", state_file))?,
        };
        bridge.persist_state(slot, payload);
    }
    Ok(())
}
