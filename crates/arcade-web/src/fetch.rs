//! Fragment fetching through the browser's fetch API

use arcade_desktop::FetchError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch an HTML fragment as text
///
/// Any non-2xx answer is an error; the caller decides what to show.
pub async fn fetch_fragment(url: &str) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Network(describe(&e)))?;
    request
        .headers()
        .set("Accept", "text/html")
        .map_err(|e| FetchError::Network(describe(&e)))?;

    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window object".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| FetchError::Network(describe(&e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().map_err(|e| FetchError::Body(describe(&e)))?;
    JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Body(describe(&e)))?
        .as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
