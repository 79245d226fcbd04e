//! Contact form state and the one outbound HTTP POST.
//!
//! Submission is fire-and-forget: one form-encoded POST to the configured
//! relay endpoint, no retries, and the response body is never inspected.
//! Only the transport result is reported back to the status line.

use tokio::sync::oneshot;
use tracing::{debug, warn};

use vitrine_types::ContactMessage;

/// The focusable rows of the contact form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormItem {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl FormItem {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormItem::Name => FormItem::Email,
            FormItem::Email => FormItem::Message,
            FormItem::Message => FormItem::Send,
            FormItem::Send => FormItem::Name,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormItem::Name => FormItem::Send,
            FormItem::Email => FormItem::Name,
            FormItem::Message => FormItem::Email,
            FormItem::Send => FormItem::Message,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormItem::Name => "Name",
            FormItem::Email => "Email",
            FormItem::Message => "Message",
            FormItem::Send => "Send Message",
        }
    }
}

/// Where the last submission attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    MissingField(&'static str),
    NoEndpoint,
    Sending,
    Sent,
    Failed,
}

/// Draft state for the three fields plus focus and submission status.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    focus: FormItem,
    status: SubmitStatus,
}

impl ContactForm {
    #[must_use]
    pub fn focus(&self) -> FormItem {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    #[must_use]
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn field(&self, item: FormItem) -> &str {
        match item {
            FormItem::Name => &self.name,
            FormItem::Email => &self.email,
            FormItem::Message => &self.message,
            FormItem::Send => "",
        }
    }

    /// Insert typed text into the focused field. The send row takes no
    /// input.
    pub fn insert(&mut self, text: &str) {
        let buffer = match self.focus {
            FormItem::Name => &mut self.name,
            FormItem::Email => &mut self.email,
            FormItem::Message => &mut self.message,
            FormItem::Send => return,
        };
        // Single-line fields flatten pasted newlines.
        if self.focus == FormItem::Message {
            buffer.push_str(text);
        } else {
            buffer.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
        if self.status != SubmitStatus::Sending {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn backspace(&mut self) {
        let buffer = match self.focus {
            FormItem::Name => &mut self.name,
            FormItem::Email => &mut self.email,
            FormItem::Message => &mut self.message,
            FormItem::Send => return,
        };
        buffer.pop();
    }

    /// Required-field check; on success the drafts become the message to
    /// send. Mirrors browser-native `required` and nothing more.
    pub fn validate(&mut self) -> Option<ContactMessage> {
        match ContactMessage::new(self.name.clone(), self.email.clone(), self.message.clone()) {
            Ok(message) => Some(message),
            Err(err) => {
                self.status = SubmitStatus::MissingField(err.0);
                None
            }
        }
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Handle to one in-flight submission. At most one exists at a time.
#[derive(Debug)]
pub struct Submission {
    rx: oneshot::Receiver<Result<(), String>>,
}

impl Submission {
    /// Spawn the POST on the runtime and hand back the handle to poll.
    pub fn spawn(client: &reqwest::Client, endpoint: &str, message: ContactMessage) -> Self {
        let (tx, rx) = oneshot::channel();
        let request = client.post(endpoint).form(&message);
        let endpoint = endpoint.to_string();
        tokio::spawn(async move {
            let result = match request.send().await {
                Ok(response) => {
                    // Response body deliberately uninspected.
                    debug!(status = %response.status(), "contact form delivered");
                    Ok(())
                }
                Err(err) => {
                    warn!(%endpoint, error = %err, "contact form POST failed");
                    Err(err.to_string())
                }
            };
            let _ = tx.send(result);
        });
        Self { rx }
    }

    /// Non-blocking check from the frame loop. `Some` exactly once, when
    /// the task finished.
    pub fn poll(&mut self) -> Option<Result<(), String>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some(Err("submission task dropped".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_rows() {
        let mut form = ContactForm::default();
        assert_eq!(form.focus(), FormItem::Name);
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), FormItem::Send);
        form.focus_next();
        assert_eq!(form.focus(), FormItem::Name);
        form.focus_prev();
        assert_eq!(form.focus(), FormItem::Send);
    }

    #[test]
    fn single_line_fields_reject_newlines() {
        let mut form = ContactForm::default();
        form.insert("Ada\nLovelace");
        assert_eq!(form.name, "AdaLovelace");
        form.focus_next();
        form.focus_next();
        form.insert("line one\nline two");
        assert_eq!(form.message, "line one\nline two");
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut form = ContactForm::default();
        assert!(form.validate().is_none());
        assert_eq!(form.status(), &SubmitStatus::MissingField("name"));

        form.insert("Ada");
        assert!(form.validate().is_none());
        assert_eq!(form.status(), &SubmitStatus::MissingField("email"));

        form.focus_next();
        form.insert("ada@example.com");
        form.focus_next();
        form.insert("hello there");
        let message = form.validate().expect("all fields present");
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "hello there");
    }

    #[tokio::test]
    async fn submission_posts_form_fields() {
        use wiremock::matchers::{body_string_contains, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/demo"))
            .and(body_string_contains("name=Ada"))
            .and(body_string_contains("email=ada%40example.com"))
            .and(body_string_contains("message=hello"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let message = ContactMessage::new("Ada", "ada@example.com", "hello").expect("valid");
        let mut submission =
            Submission::spawn(&client, &format!("{}/f/demo", server.uri()), message);

        let result = loop {
            if let Some(result) = submission.poll() {
                break result;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        };
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn submission_reports_transport_failure() {
        let client = reqwest::Client::new();
        let message = ContactMessage::new("Ada", "ada@example.com", "hello").expect("valid");
        // Nothing listens on this port.
        let mut submission = Submission::spawn(&client, "http://127.0.0.1:9/f/demo", message);

        let result = loop {
            if let Some(result) = submission.poll() {
                break result;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        };
        assert!(result.is_err());
    }
}
