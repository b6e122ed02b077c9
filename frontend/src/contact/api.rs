use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};

use crate::config;
use crate::contact::form::SubmitOutcome;
use crate::contact::models::{ContactAck, ContactSubmission, ErrorResponse};

/// Posts one submission to `/api/contact`, giving up after
/// [`config::SUBMIT_TIMEOUT_MS`].
pub async fn send_submission(submission: &ContactSubmission) -> SubmitOutcome {
    let request = Box::pin(post_contact(submission));
    let timeout = TimeoutFuture::new(config::SUBMIT_TIMEOUT_MS);

    match select(request, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => {
            warn!("Contact submission timed out after {}ms", config::SUBMIT_TIMEOUT_MS);
            SubmitOutcome::TimedOut
        }
    }
}

async fn post_contact(submission: &ContactSubmission) -> SubmitOutcome {
    let request = match Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(submission)
    {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to build contact request: {}", e);
            return SubmitOutcome::Unreachable(e.to_string());
        }
    };

    match request.send().await {
        Ok(response) => read_response(response).await,
        Err(e) => {
            error!("Network error: {}", e);
            SubmitOutcome::Unreachable(e.to_string())
        }
    }
}

async fn read_response(response: Response) -> SubmitOutcome {
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|e| {
        warn!("Could not read contact response body: {}", e);
        String::new()
    });
    outcome_for(status, &body)
}

/// Maps a finished HTTP exchange to an outcome. Any 2xx counts as accepted,
/// even when the acknowledgement cannot be parsed.
fn outcome_for(status: u16, body: &str) -> SubmitOutcome {
    if (200..300).contains(&status) {
        match serde_json::from_str::<ContactAck>(body) {
            Ok(ack) => info!(
                "{} (name: {}, subject: {})",
                ack.message, ack.data.name, ack.data.subject
            ),
            Err(e) => warn!("Contact accepted but acknowledgement unreadable: {}", e),
        }
        return SubmitOutcome::Accepted;
    }

    warn!("Contact submission failed with status: {}", status);
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|body| body.message);
    SubmitOutcome::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_with_ack_is_accepted() {
        let body = r#"{"message":"Message received successfully","data":{"name":"Jane","email":"jane@example.com","subject":"Hi"}}"#;
        assert_eq!(outcome_for(200, body), SubmitOutcome::Accepted);
    }

    #[test]
    fn ok_with_unreadable_body_is_still_accepted() {
        assert_eq!(outcome_for(200, ""), SubmitOutcome::Accepted);
        assert_eq!(outcome_for(204, "<html>"), SubmitOutcome::Accepted);
    }

    #[test]
    fn error_status_carries_server_message() {
        assert_eq!(
            outcome_for(400, r#"{"message":"All fields are required"}"#),
            SubmitOutcome::Rejected {
                status: 400,
                message: Some("All fields are required".to_string()),
            }
        );
    }

    #[test]
    fn error_status_without_message_body() {
        for body in ["", "Bad Gateway", r#"{"error":"nope"}"#] {
            assert_eq!(
                outcome_for(502, body),
                SubmitOutcome::Rejected { status: 502, message: None }
            );
        }
    }

    #[test]
    fn redirects_are_not_success() {
        assert!(matches!(outcome_for(302, ""), SubmitOutcome::Rejected { status: 302, .. }));
    }
}
