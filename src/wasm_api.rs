//! WASM API exports for JavaScript interop
//!
//! Exposes the scatter plot to the host page. Besides the explicit methods,
//! any `message` event posted to the window is forwarded to the control
//! inbox: the string `"pause"` pauses, anything else resumes.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::MessageEvent;

use crate::animation::{Control, ControlInbox};
use crate::config::ScatterConfig;
use crate::runtime::run_scatter;

/// JavaScript-accessible scatter plot handle
#[wasm_bindgen]
pub struct JsScatter {
    config: ScatterConfig,
    /// Shared with the running app; survives `start`
    inbox: ControlInbox,
    /// Canvas ID for rendering
    canvas_id: String,
    started: bool,
}

#[wasm_bindgen]
impl JsScatter {
    /// Create a scatter plot from a JSON configuration
    ///
    /// # Arguments
    /// * `json` - JSON configuration; missing fields take their defaults
    /// * `canvas_id` - HTML canvas element ID (without #)
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, canvas_id: &str) -> Result<JsScatter, JsValue> {
        let config = ScatterConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid scatter config: {:?}", e)))?;

        Ok(JsScatter {
            config,
            inbox: ControlInbox::new(),
            canvas_id: canvas_id.to_string(),
            started: false,
        })
    }

    /// Start the Bevy render loop and listen for window messages
    ///
    /// This should only be called once.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.started {
            web_sys::console::warn_1(&"Scatter plot already started".into());
            return Ok(());
        }

        listen_for_messages(self.inbox.clone())?;
        self.started = true;

        run_scatter(self.config.clone(), self.inbox.clone(), &self.canvas_id)
            .map_err(|e| JsValue::from_str(&format!("Failed to start scatter plot: {:?}", e)))
    }

    /// Same as posting `message` to the window
    #[wasm_bindgen]
    pub fn post_message(&self, message: &str) {
        self.inbox.post_message(message);
    }

    #[wasm_bindgen]
    pub fn pause(&self) {
        self.inbox.send(Control::Pause);
    }

    #[wasm_bindgen]
    pub fn resume(&self) {
        self.inbox.send(Control::Resume);
    }

    /// Stop the loop and tear down the app
    #[wasm_bindgen]
    pub fn shutdown(&self) {
        self.inbox.shutdown();
    }

    /// Get the canvas ID
    #[wasm_bindgen(getter)]
    pub fn canvas_id(&self) -> String {
        self.canvas_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Effective configuration as JSON, defaults filled in
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.config
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {:?}", e)))
    }
}

fn listen_for_messages(inbox: ControlInbox) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        // non-string payloads are not "pause", so they resume
        match event.data().as_string() {
            Some(message) => inbox.post_message(&message),
            None => inbox.send(Control::Resume),
        }
    });
    window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())?;
    // lives as long as the page
    on_message.forget();
    Ok(())
}
