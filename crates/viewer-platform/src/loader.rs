//! Stylesheet and script module loading.
//!
//! Modules are attached as `<script src>` elements, so the viewer host needs
//! no CORS headers and pages that forbid inline scripts still work. Each
//! module resolves on its `load`/`error` event or fails after the timeout.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlHeadElement, HtmlLinkElement, HtmlScriptElement};

use viewer_core::ports::ModuleLoaderPort;
use viewer_types::{Result, ViewerError};

use crate::viewer::js_err;

#[derive(Default)]
pub struct ScriptModuleLoader;

impl ScriptModuleLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ModuleLoaderPort for ScriptModuleLoader {
    async fn load_stylesheet(&self, url: &str) -> Result<()> {
        let document = document()?;
        let link: HtmlLinkElement = document
            .create_element("link")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| ViewerError::JsInterop("<link> is not an HtmlLinkElement".to_string()))?;
        link.set_rel("stylesheet");
        link.set_href(url);
        head(&document)?.append_child(&link).map_err(js_err)?;
        Ok(())
    }

    async fn load_module(&self, url: &str, timeout_ms: u64) -> Result<()> {
        let document = document()?;
        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| ViewerError::JsInterop("<script> is not an HtmlScriptElement".to_string()))?;

        let (sender, receiver) = oneshot::channel::<Result<()>>();
        let sender = Rc::new(RefCell::new(Some(sender)));

        let on_load = {
            let sender = sender.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(Ok(()));
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let on_error = {
            let sender = sender.clone();
            let failed = url.to_string();
            Closure::wrap(Box::new(move |_event: Event| {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(Err(ViewerError::DependencyLoad(format!(
                        "{}: script could not be loaded",
                        failed
                    ))));
                }
            }) as Box<dyn FnMut(Event)>)
        };

        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        script.set_src(&cache_busted(url, js_sys::Date::now() as u64));
        head(&document)?.append_child(&script).map_err(js_err)?;

        let outcome = wait_for_script(receiver, url, timeout_ms).await;

        // the closures are dropped on return
        script.set_onload(None);
        script.set_onerror(None);
        if outcome.is_ok() {
            log::debug!("Module {} loaded", url);
        }
        outcome
    }
}

/// Wait for a script's load outcome, giving up after `timeout_ms`.
pub async fn wait_for_script(
    outcome: oneshot::Receiver<Result<()>>,
    url: &str,
    timeout_ms: u64,
) -> Result<()> {
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms.min(u32::MAX as u64) as u32));
    match future::select(outcome, timeout).await {
        Either::Left((Ok(result), _)) => result,
        Either::Left((Err(_), _)) => Err(ViewerError::DependencyLoad(format!(
            "{}: script element went away before loading",
            url
        ))),
        Either::Right(_) => Err(ViewerError::Timeout(timeout_ms)),
    }
}

/// Append a timestamp parameter so proxies and the browser never serve a
/// stale module.
pub fn cache_busted(url: &str, stamp: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}_={}", url, separator, stamp)
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ViewerError::JsInterop("No document".to_string()))
}

/// The page's `<head>`, created if the page has none
fn head(document: &Document) -> Result<HtmlHeadElement> {
    if let Some(head) = document.head() {
        return Ok(head);
    }
    let head: HtmlHeadElement = document
        .create_element("head")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ViewerError::JsInterop("<head> is not an HtmlHeadElement".to_string()))?;
    let root = document
        .document_element()
        .ok_or_else(|| ViewerError::JsInterop("No document element".to_string()))?;
    root.insert_before(&head, root.first_child().as_ref())
        .map_err(js_err)?;
    Ok(head)
}
