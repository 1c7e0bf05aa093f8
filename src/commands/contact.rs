//! Contact Commands
//!
//! Submit the contact form to the configured form endpoint.

use web_sys::{FormData, Headers, HtmlFormElement, Request, RequestInit};

use super::{fetch, response_text};
use crate::config::is_placeholder_endpoint;
use crate::contact::{classify_response, FormStatus};
use crate::error::{js_message, SubmitError};

/// POST `form` to `endpoint` and classify the outcome.
///
/// A placeholder endpoint short-circuits without any request.
pub async fn submit_contact_form(form: &HtmlFormElement, endpoint: &str) -> FormStatus {
    if is_placeholder_endpoint(endpoint) {
        return FormStatus::Failed(SubmitError::NotConfigured);
    }
    match post_form(form, endpoint).await {
        Ok(status) => status,
        Err(e) => {
            log::warn!("Contact form network error: {}", e);
            FormStatus::Failed(SubmitError::Network(e))
        }
    }
}

async fn post_form(form: &HtmlFormElement, endpoint: &str) -> Result<FormStatus, String> {
    let data = FormData::new_with_form(form).map_err(|e| js_message(&e))?;
    let headers = Headers::new().map_err(|e| js_message(&e))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| js_message(&e))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(|e| js_message(&e))?;
    let response = fetch(&request).await?;
    let body = if response.ok() {
        None
    } else {
        response_text(&response).await.ok()
    };
    Ok(classify_response(response.ok(), response.status(), body.as_deref()))
}
