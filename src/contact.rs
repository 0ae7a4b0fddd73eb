use thiserror::Error;
use url::Url;

pub const ACCEPT_JSON: &str = "application/json";
pub const SUCCESS_MESSAGE: &str = "✓ Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str =
    "✗ Oops! There was a problem sending your message. Please try again.";
pub const SUCCESS_COLOR: &str = "#22c55e";
pub const FAILURE_COLOR: &str = "#ef4444";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const STATUS_TIMER_KEY: &str = "form-status";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form action `{0}` is not an http(s) URL")]
    InvalidAction(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint rejected the submission with status {0}")]
    Rejected(u16),
}

impl SubmitError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::InvalidAction(_) => "invalid_action",
            Self::Network(_) => "network",
            Self::Rejected(_) => "rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .map(|field| (field.name(), self.value(field).to_string()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Sent => SUCCESS_MESSAGE,
            Self::Failed => FAILURE_MESSAGE,
        }
    }

    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sent => Some(SUCCESS_COLOR),
            Self::Failed => Some(FAILURE_COLOR),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(ContactField, String),
    Began,
    Finished(Result<(), SubmitError>),
    StatusExpired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: FormStatus,
    pub submitting: bool,
}

impl ContactForm {
    pub fn payload(&self) -> Option<Vec<(&'static str, String)>> {
        (!self.submitting).then(|| self.draft.fields())
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => *self.draft.value_mut(field) = value,
            ContactAction::Began => {
                self.submitting = true;
                self.status = FormStatus::Idle;
            }
            ContactAction::Finished(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => {
                        self.status = FormStatus::Sent;
                        self.draft = ContactDraft::default();
                    }
                    Err(_) => self.status = FormStatus::Failed,
                }
            }
            ContactAction::StatusExpired => self.status = FormStatus::Idle,
        }
    }
}

pub fn resolve_action(page_url: &str, action: &str) -> Result<Url, SubmitError> {
    let invalid = || SubmitError::InvalidAction(action.to_string());
    let base = Url::parse(page_url).map_err(|_| invalid())?;
    let resolved = base.join(action.trim()).map_err(|_| invalid())?;

    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Ok(resolved)
    } else {
        Err(invalid())
    }
}

#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(
        &self,
        action: &Url,
        fields: &[(&'static str, String)],
    ) -> Result<u16, SubmitError>;
}

pub async fn send_contact_form<T: FormTransport>(
    transport: &T,
    action: &Url,
    fields: &[(&'static str, String)],
) -> Result<(), SubmitError> {
    let status = transport.post_form(action, fields).await?;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}
