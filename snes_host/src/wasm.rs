#![cfg(target_arch = "wasm32")]

use js_sys::Function;
use js_sys::Reflect;
use js_sys::Uint8Array;
use snes_bridge::persistence::StatePersistence;
use snes_bridge::viewport::ResizeTracker;
use snes_bridge::viewport::ViewportProvider;
use snes_bridge::HostBridge;
use snes_bridge::StateBlob;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Global function a page defines to receive saved states.
pub const EXTERNAL_SAVE_STATE: &str = "externalSaveState";

/// Forwards saves to the page's `externalSaveState(fileName, state)` function.
pub struct ExternalSaveState {
    callback: Function,
}

impl ExternalSaveState {
    /// Looks up the save function on the global object. Returns `None` if the page does not
    /// define one.
    pub fn detect() -> Option<Self> {
        let global = js_sys::global();
        let value = Reflect::get(&global, &JsValue::from_str(EXTERNAL_SAVE_STATE)).ok()?;
        let callback = value.dyn_into::<Function>().ok()?;
        Some(Self { callback })
    }
}

impl StatePersistence for ExternalSaveState {
    fn persist(&mut self, blob: StateBlob) {
        let (name, payload) = blob.into_parts();
        let state = Uint8Array::from(payload.as_slice());
        if let Err(err) = self
            .callback
            .call2(&JsValue::NULL, &JsValue::from_str(&name), &state)
        {
            log::error!("{}({:?}) failed: {:?}", EXTERNAL_SAVE_STATE, name, err);
        }
    }
}

/// Size of the browser window's layout viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

fn window_dimension(read: impl Fn(&web_sys::Window) -> Result<JsValue, JsValue>) -> u32 {
    web_sys::window()
        .and_then(|window| read(&window).ok())
        .and_then(|value| value.as_f64())
        .map(|pixels| pixels.max(0.0) as u32)
        .unwrap_or(0)
}

impl ViewportProvider for WindowViewport {
    fn width(&self) -> u32 {
        window_dimension(web_sys::Window::inner_width)
    }

    fn height(&self) -> u32 {
        window_dimension(web_sys::Window::inner_height)
    }
}

pub fn browser_bridge() -> HostBridge {
    let persistence = ExternalSaveState::detect();
    if persistence.is_none() {
        log::info!(
            "{}() is not defined, saved states will be discarded",
            EXTERNAL_SAVE_STATE
        );
    }
    HostBridge::new(WindowViewport).with_optional_persistence(
        persistence.map(|p| Box::new(p) as Box<dyn StatePersistence>),
    )
}

#[wasm_bindgen]
pub fn start_host() {
    // Make sure panics are logged using `console.error`.
    console_error_panic_hook::set_once();

    // Redirect log records to console.log and friends:
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Bridge handle for emulator cores that live on the JavaScript side.
#[wasm_bindgen]
pub struct WebHostBridge {
    bridge: HostBridge,
    resize: ResizeTracker,
}

#[wasm_bindgen]
impl WebHostBridge {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebHostBridge {
        WebHostBridge {
            bridge: browser_bridge(),
            resize: ResizeTracker::default(),
        }
    }

    #[wasm_bindgen(js_name = saveState)]
    pub fn save_state(&mut self, file_name: String, state: Vec<u8>) {
        self.bridge.persist_state(file_name, state);
    }

    #[wasm_bindgen(js_name = canvasWidth)]
    pub fn canvas_width(&self) -> u32 {
        self.bridge.viewport_width()
    }

    #[wasm_bindgen(js_name = canvasHeight)]
    pub fn canvas_height(&self) -> u32 {
        self.bridge.viewport_height()
    }

    /// Called once per presented frame. True if the canvas has to be resized to the current
    /// window size.
    #[wasm_bindgen(js_name = viewportChanged)]
    pub fn viewport_changed(&mut self) -> bool {
        self.resize.observe(self.bridge.viewport_size()).is_some()
    }

    #[wasm_bindgen(js_name = supportsPersistence)]
    pub fn supports_persistence(&self) -> bool {
        self.bridge.supports_persistence()
    }
}

impl Default for WebHostBridge {
    fn default() -> Self {
        Self::new()
    }
}
