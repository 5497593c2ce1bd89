//! Fetch Transport
//!
//! `window.fetch` with an abort deadline.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response};

use super::{BinTransport, HttpRequest, HttpResponse};
use crate::error::ApiError;

/// Browser transport backed by `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl BinTransport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no global window".into()))?;
        // Lives until the response is fully read; dropping it clears the timer.
        let deadline = Deadline::arm(req.timeout_ms)?;

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_signal(Some(&deadline.controller.signal()));
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)?;
        if let Some(content_type) = req.content_type {
            request.headers().set("Content-Type", content_type)?;
        }

        let result = async {
            let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
            let resp: Response = resp_value.dyn_into()?;
            let status = resp.status();
            let body = if req.wants_body && resp.ok() {
                JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default()
            } else {
                String::new()
            };
            Ok::<_, JsValue>(HttpResponse { status, body })
        }
        .await;

        result.map_err(|e| deadline.classify(e))
    }
}

/// Abort controller plus the timer that fires it
struct Deadline {
    controller: AbortController,
    fired: Rc<Cell<bool>>,
    timeout_ms: u32,
    _timer: Timeout,
}

impl Deadline {
    fn arm(timeout_ms: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new()?;
        let fired = Rc::new(Cell::new(false));

        let timer = {
            let controller = controller.clone();
            let fired = fired.clone();
            Timeout::new(timeout_ms, move || {
                fired.set(true);
                controller.abort();
            })
        };

        Ok(Self {
            controller,
            fired,
            timeout_ms,
            _timer: timer,
        })
    }

    /// An abort caused by our own timer is a timeout, anything else is transport
    fn classify(&self, err: JsValue) -> ApiError {
        if self.fired.get() {
            ApiError::Timeout(self.timeout_ms)
        } else {
            ApiError::from(err)
        }
    }
}
