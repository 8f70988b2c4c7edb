//! Browser `fetch` transport for generative-service calls.

use artifact_engine::{OracleRequest, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// POST `request` and resolve to the response body text.
///
/// Failing to build the request is a `Bridge` fault; a rejected fetch is a
/// `Network` failure; a non-2xx answer is `Http`.
pub async fn post(request: &OracleRequest) -> Result<String, TransportError> {
    let promise = {
        let window = web_sys::window().ok_or_else(|| bridge("no window"))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&request.body));

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(bridge)?;
        let headers = req.headers();
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(bridge)?;
        }
        window.fetch_with_request(&req)
    };

    let resp = JsFuture::from(promise)
        .await
        .map_err(|e| TransportError::Network(describe(&e)))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| bridge("fetch returned unexpected type"))?;

    if !resp.ok() {
        return Err(TransportError::Http(resp.status()));
    }

    let text = resp.text().map_err(bridge)?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| TransportError::Network(describe(&e)))?;
    body.as_string()
        .ok_or_else(|| TransportError::Network("body was not text".to_string()))
}

fn bridge(e: impl Into<JsValue>) -> TransportError {
    TransportError::Bridge(describe(&e.into()))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
