use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{classify_response, ContactMessage, RelayOutcome, CONTACT_ENDPOINT};

/// Posts one message to the relay. No retry and no timeout beyond the
/// browser's own.
pub async fn send_contact(message: &ContactMessage) -> RelayOutcome {
    match post_json(message).await {
        Ok((status, body)) => classify_response(status, &body),
        Err(e) => {
            log::warn!("contact request failed: {e:?}");
            RelayOutcome::Unreachable
        }
    }
}

async fn post_json(message: &ContactMessage) -> Result<(u16, String), JsValue> {
    let body = serde_json::to_string(message).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CONTACT_ENDPOINT, &init)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    let status = response.status();
    // an unreadable body still carries a usable status
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Ok((status, text))
}
