//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod reminder;
mod auth;
mod gateway;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejected promises (command returned `Err`) come back as `Err`
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use reminder::*;
pub use auth::*;
pub use gateway::TauriGateway;

fn to_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| format!("Serialization error: {}", e))
}

/// Backend errors are plain strings; anything else is debug-printed
fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| format!("Response error: {}", e))
}

/// For commands returning `()`; the resolved value is ignored
async fn call_unit(cmd: &str, args: JsValue) -> Result<(), String> {
    invoke(cmd, args).await.map(|_| ()).map_err(js_error)
}
