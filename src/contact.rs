use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
#[cfg(feature = "ssr")]
use http::StatusCode;
#[cfg(feature = "ssr")]
use std::time::Duration;

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

pub const SENT_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Body accepted by the send-email endpoint. Missing fields are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
}

impl SendEmailResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: FAILED_MESSAGE.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("couldn't parse contact payload: {0}")]
    Parse(String),
    #[error("contact request failed: {0}")]
    Transport(String),
}

#[cfg(feature = "ssr")]
impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SendEmailResponse::failed()),
        )
            .into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn mail_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_link(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.mail_body())
        )
    }

    pub fn to_request(&self, recipient: &str) -> SendEmailRequest {
        SendEmailRequest {
            to: recipient.to_string(),
            subject: self.subject.clone(),
            body: self.mail_body(),
        }
    }
}

/// Form contents plus the submission lifecycle: one submission at a time,
/// and every finished submission resets the fields and re-enables submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    submitting: bool,
    status: Option<String>,
}

impl ContactFormState {
    /// Start a submission, returning the values to send. `None` while one is
    /// already in flight.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.status = None;
        Some(self.form.clone())
    }

    /// End the in-flight submission whatever its outcome.
    pub fn finish(&mut self, status: Option<String>) {
        self.form = ContactForm::default();
        self.submitting = false;
        self.status = status;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

/// Status line shown under the form once the endpoint has answered.
pub fn outcome_message(outcome: &Result<SendEmailResponse, ContactError>) -> String {
    match outcome {
        Ok(resp) => resp.message.clone(),
        Err(_) => FAILED_MESSAGE.to_string(),
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct ContactState {
    pub delay: Duration,
}

/// Records the submission, waits `delay`, and acknowledges. Nothing is sent.
///
/// Any JSON document is accepted whatever its content type or field types;
/// only a body that fails to parse, or a bare `null`, is rejected.
#[cfg(feature = "ssr")]
pub async fn send_email(
    State(state): State<ContactState>,
    payload: Bytes,
) -> Result<Json<SendEmailResponse>, ContactError> {
    let value = parse_submission(&payload).inspect_err(|e| {
        tracing::error!(error = %e, "error processing contact form");
    })?;

    tracing::info!(
        to = %submission_field(&value, "to"),
        subject = %submission_field(&value, "subject"),
        body = %submission_field(&value, "body"),
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "contact form submission"
    );

    tokio::time::sleep(state.delay).await;
    Ok(Json(SendEmailResponse::sent()))
}

#[cfg(feature = "ssr")]
fn parse_submission(payload: &[u8]) -> Result<serde_json::Value, ContactError> {
    match serde_json::from_slice(payload) {
        Ok(serde_json::Value::Null) => Err(ContactError::Parse("payload is null".to_string())),
        Ok(value) => Ok(value),
        Err(e) => Err(ContactError::Parse(e.to_string())),
    }
}

/// Loggable rendering of `key`: strings as-is, other JSON verbatim, empty
/// when absent.
#[cfg(feature = "ssr")]
fn submission_field(value: &serde_json::Value, key: &str) -> String {
    match value.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(feature = "ssr")]
pub fn router(delay: Duration) -> Router {
    Router::new()
        .route(SEND_EMAIL_PATH, post(send_email))
        .with_state(ContactState { delay })
}

/// Post the submission to [`SEND_EMAIL_PATH`]. A 500 with a well-formed
/// body is still `Ok`; inspect `success`.
#[cfg(feature = "hydrate")]
pub async fn submit(request: &SendEmailRequest) -> Result<SendEmailResponse, ContactError> {
    use leptos::prelude::window;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    fn transport(err: JsValue) -> ContactError {
        ContactError::Transport(format!("{err:?}"))
    }

    let payload =
        serde_json::to_string(request).map_err(|e| ContactError::Parse(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload));
    let req = Request::new_with_str_and_init(SEND_EMAIL_PATH, &init).map_err(transport)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let resp = JsFuture::from(window().fetch_with_request(&req))
        .await
        .map_err(transport)?;
    let resp: Response = resp.dyn_into().map_err(transport)?;
    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();

    serde_json::from_str(&text).map_err(|e| ContactError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello & welcome".to_string(),
            message: "Line one\nLine two".to_string(),
        }
    }

    #[test]
    fn test_mail_body_layout() {
        assert_eq!(
            filled().mail_body(),
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nLine one\nLine two"
        );
    }

    #[test]
    fn test_mailto_link_is_encoded() {
        let link = filled().mailto_link("me@example.com");
        assert_eq!(
            link,
            "mailto:me@example.com?subject=Hello%20%26%20welcome&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0ALine%20one%0ALine%20two"
        );
    }

    #[test]
    fn test_request_carries_recipient_subject_and_body() {
        let form = filled();
        let req = form.to_request("me@example.com");
        assert_eq!(
            req,
            SendEmailRequest {
                to: "me@example.com".to_string(),
                subject: "Hello & welcome".to_string(),
                body: form.mail_body(),
            }
        );
    }

    #[test]
    fn test_set_and_reset() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set(field, field.label().to_lowercase());
        }
        assert_eq!(form.get(ContactField::Subject), "subject");
        assert_eq!(form.get(ContactField::Message), "message");
        form = ContactForm::default();
        assert!(ContactField::ALL.iter().all(|f| form.get(*f).is_empty()));
    }

    #[test]
    fn test_submission_disables_then_resets() {
        let mut state = ContactFormState {
            form: filled(),
            ..Default::default()
        };
        assert_eq!(state.submit_label(), "Send Message");

        let sent = state.begin();
        assert_eq!(sent, Some(filled()));
        assert!(state.is_submitting());
        assert_eq!(state.submit_label(), "Sending...");
        assert_eq!(state.begin(), None);

        state.finish(Some(SENT_MESSAGE.to_string()));
        assert!(!state.is_submitting());
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status(), Some(SENT_MESSAGE));
    }

    #[test]
    fn test_failed_submission_still_re_enables() {
        let mut state = ContactFormState {
            form: filled(),
            status: Some("stale".to_string()),
            ..Default::default()
        };
        assert!(state.begin().is_some());
        assert_eq!(state.status(), None);

        let outcome = Err(ContactError::Transport("offline".to_string()));
        state.finish(Some(outcome_message(&outcome)));
        assert!(!state.is_submitting());
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status(), Some(FAILED_MESSAGE));
        assert!(state.begin().is_some());
    }

    #[test]
    fn test_outcome_message_uses_endpoint_reply() {
        assert_eq!(outcome_message(&Ok(SendEmailResponse::sent())), SENT_MESSAGE);
        assert_eq!(outcome_message(&Ok(SendEmailResponse::failed())), FAILED_MESSAGE);
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let req: SendEmailRequest = serde_json::from_str(r#"{"subject":"hi"}"#).unwrap();
        assert_eq!(req.subject, "hi");
        assert!(req.to.is_empty());
    }

    #[cfg(feature = "ssr")]
    mod endpoint {
        use super::super::*;
        use axum::body::Body;
        use axum::http::{header, Request};
        use tower::ServiceExt;

        const DELAY: Duration = Duration::from_millis(1000);

        fn post_json(body: &'static str) -> Request<Body> {
            Request::post(SEND_EMAIL_PATH)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap()
        }

        async fn read(res: Response) -> SendEmailResponse {
            let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
                .await
                .unwrap();
            serde_json::from_slice(&bytes).unwrap()
        }

        #[tokio::test(start_paused = true)]
        async fn test_well_formed_payload_succeeds_after_delay() {
            let started = tokio::time::Instant::now();
            let res = router(DELAY)
                .oneshot(post_json(
                    r#"{"to":"me@example.com","subject":"Hi","body":"Hello"}"#,
                ))
                .await
                .unwrap();

            assert!(started.elapsed() >= DELAY);
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(read(res).await, SendEmailResponse::sent());
        }

        #[tokio::test(start_paused = true)]
        async fn test_unparseable_payload_fails_with_500() {
            let res = router(DELAY)
                .oneshot(post_json("{not json"))
                .await
                .unwrap();

            assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(read(res).await, SendEmailResponse::failed());
        }

        #[tokio::test(start_paused = true)]
        async fn test_missing_fields_still_succeed() {
            let res = router(DELAY).oneshot(post_json("{}")).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            assert!(read(res).await.success);
        }

        #[tokio::test(start_paused = true)]
        async fn test_content_type_is_not_checked() {
            for content_type in [Some("text/plain"), None] {
                let mut req = Request::post(SEND_EMAIL_PATH);
                if let Some(content_type) = content_type {
                    req = req.header(header::CONTENT_TYPE, content_type);
                }
                let req = req.body(Body::from(r#"{"to":"a"}"#)).unwrap();
                let res = router(DELAY).oneshot(req).await.unwrap();
                assert_eq!(res.status(), StatusCode::OK, "{content_type:?}");
                assert_eq!(read(res).await, SendEmailResponse::sent());
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_non_string_fields_succeed() {
            for body in [
                r#"{"to":5,"subject":"Hi","body":"Hello"}"#,
                r#"{"to":null,"subject":["a"],"body":{"x":1}}"#,
                "[1, 2]",
            ] {
                let res = router(DELAY).oneshot(post_json(body)).await.unwrap();
                assert_eq!(res.status(), StatusCode::OK, "{body}");
                assert!(read(res).await.success);
            }
        }

        #[test]
        fn test_submission_field_rendering() {
            let value = serde_json::json!({"to": "me@example.com", "subject": 5});
            assert_eq!(submission_field(&value, "to"), "me@example.com");
            assert_eq!(submission_field(&value, "subject"), "5");
            assert_eq!(submission_field(&value, "body"), "");
        }

        #[tokio::test(start_paused = true)]
        async fn test_null_payload_fails() {
            let res = router(DELAY).oneshot(post_json("null")).await.unwrap();
            assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(read(res).await, SendEmailResponse::failed());
        }
    }
}
