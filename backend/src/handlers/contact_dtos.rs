use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Fields are optional so an absent key and an
/// explicit `null` both reach the handler and are answered with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Returns the submission only when all four fields carry a non-empty value.
    pub fn into_submission(self) -> Option<ContactSubmission> {
        fn present(field: Option<String>) -> Option<String> {
            field.filter(|value| !value.is_empty())
        }

        Some(ContactSubmission {
            name: present(self.name)?,
            email: present(self.email)?,
            subject: present(self.subject)?,
            message: present(self.message)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ContactAckData {
    pub name: String,
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub message: &'static str,
    pub data: ContactAckData,
}

impl ContactAck {
    pub const RECEIVED: &'static str = "Message received successfully";

    // The message body is never echoed.
    pub fn received(submission: ContactSubmission) -> Self {
        Self {
            message: Self::RECEIVED,
            data: ContactAckData {
                name: submission.name,
                email: submission.email,
                subject: submission.subject,
            },
        }
    }
}
