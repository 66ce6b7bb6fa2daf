//! Browser-native AI enrichment adapter.
//!
//! Drives the experimental `window.ai` capability set
//! (languageDetector / translator / summarizer). The API surface is still
//! behind origin trials, so everything goes through js-sys Reflect rather
//! than typed web-sys bindings; a missing namespace maps to
//! `CapabilityUnavailable`.

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use lingo_core::ports::EnrichmentPort;
use lingo_types::{AssistantError, Result};

const TRANSLATOR_REJECTION: &str = "Unable to create translator";

pub struct BrowserAiProvider;

impl BrowserAiProvider {
    pub fn new() -> Self {
        Self
    }

    /// Cheap startup probe: does this browser expose `window.ai` at all?
    pub fn available() -> bool {
        web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str("ai")).ok())
            .map(|ai| !ai.is_undefined() && !ai.is_null())
            .unwrap_or(false)
    }

    fn capability(&self, name: &str) -> Result<JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| AssistantError::JsInterop("No window object".to_string()))?;
        let ai = Reflect::get(&window, &JsValue::from_str("ai")).map_err(js_err)?;
        if ai.is_undefined() || ai.is_null() {
            return Err(AssistantError::CapabilityUnavailable(
                "window.ai is not exposed by this browser".to_string(),
            ));
        }
        let capability = Reflect::get(&ai, &JsValue::from_str(name)).map_err(js_err)?;
        if capability.is_undefined() || capability.is_null() {
            return Err(AssistantError::CapabilityUnavailable(format!(
                "window.ai.{} is not exposed by this browser",
                name
            )));
        }
        Ok(capability)
    }
}

impl Default for BrowserAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl EnrichmentPort for BrowserAiProvider {
    async fn detect(&self, text: &str) -> Result<String> {
        let factory = self.capability("languageDetector")?;
        let detector = call_async(&factory, "create", &[])
            .await
            .map_err(|e| AssistantError::Detection(error_message(&e)))?;

        let results = call_async(&detector, "detect", &[&JsValue::from_str(text)])
            .await
            .map_err(|e| AssistantError::Detection(error_message(&e)))?;

        // detect() resolves to a confidence-ordered array; take the top hit
        let first = Reflect::get_u32(&results, 0).map_err(js_err)?;
        Reflect::get(&first, &JsValue::from_str("detectedLanguage"))
            .map_err(js_err)?
            .as_string()
            .map(|code| code.trim().to_lowercase())
            .ok_or_else(|| {
                AssistantError::Detection("Detector returned no language code".to_string())
            })
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        if source == target {
            return Err(AssistantError::SameLanguage);
        }

        let factory = self.capability("translator")?;
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("sourceLanguage"),
            &JsValue::from_str(source),
        )
        .map_err(js_err)?;
        Reflect::set(
            &options,
            &JsValue::from_str("targetLanguage"),
            &JsValue::from_str(target),
        )
        .map_err(js_err)?;

        let translator = call_async(&factory, "create", &[&options]).await.map_err(|e| {
            let message = error_message(&e);
            if message.contains(TRANSLATOR_REJECTION) {
                AssistantError::UnsupportedLanguagePair {
                    from: source.to_string(),
                    to: target.to_string(),
                }
            } else {
                AssistantError::Translation(message)
            }
        })?;

        let translated = call_async(&translator, "translate", &[&JsValue::from_str(text)])
            .await
            .map_err(|e| AssistantError::Translation(error_message(&e)))?;
        translated
            .as_string()
            .ok_or_else(|| AssistantError::Translation("Translator returned no text".to_string()))
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let factory = self.capability("summarizer")?;
        let summarizer = call_async(&factory, "create", &[])
            .await
            .map_err(|e| AssistantError::Summarization(error_message(&e)))?;

        let summary = call_async(&summarizer, "summarize", &[&JsValue::from_str(text)])
            .await
            .map_err(|e| AssistantError::Summarization(error_message(&e)))?;
        summary
            .as_string()
            .ok_or_else(|| AssistantError::Summarization("Summarizer returned no text".to_string()))
    }

    fn provider_name(&self) -> &str {
        "browser-ai"
    }
}

/// Call an async JS method and await the promise it returns.
async fn call_async(
    target: &JsValue,
    method: &str,
    args: &[&JsValue],
) -> std::result::Result<JsValue, JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(method))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("{} is not a function", method)))?;

    let ret = match args {
        [] => f.call0(target)?,
        [a] => f.call1(target, a)?,
        _ => {
            let list = js_sys::Array::new();
            for a in args {
                list.push(a);
            }
            f.apply(target, &list)?
        }
    };

    let promise: Promise = ret
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("{} did not return a promise", method)))?;
    JsFuture::from(promise).await
}

fn error_message(e: &JsValue) -> String {
    e.dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{:?}", e))
}

fn js_err(e: JsValue) -> AssistantError {
    AssistantError::JsInterop(format!("{:?}", e))
}
