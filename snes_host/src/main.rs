#![cfg(not(target_arch = "wasm32"))]

use snes_bridge::common::logging;
use snes_host::native::HostArgs;

fn main() -> anyhow::Result<()> {
    logging::init();
    let args: HostArgs = argh::from_env();
    snes_host::native::run(&args)
}
