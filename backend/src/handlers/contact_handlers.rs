use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;
use crate::handlers::contact_dtos::{ContactAck, ContactRequest};

/// `POST /api/contact`
///
/// Stateless: nothing is stored or delivered. The acknowledgement is logged
/// and echoed back without the message body.
pub async fn submit_contact(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactAck>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected contact request body: {}", rejection.body_text());
        ApiError::InvalidBody
    })?;

    let Some(submission) = request.into_submission() else {
        tracing::warn!("Contact submission rejected: missing fields");
        return Err(ApiError::MissingFields);
    };

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        message_len = submission.message.chars().count(),
        "Contact submission received"
    );

    Ok(Json(ContactAck::received(submission)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            subject: Some(subject.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[tokio::test]
    async fn complete_submission_is_acknowledged() {
        let Json(ack) = submit_contact(Ok(Json(request(
            "Jane",
            "jane@example.com",
            "Hi",
            "This is a long enough message.",
        ))))
        .await
        .unwrap();

        assert_eq!(ack.message, "Message received successfully");
        assert_eq!(ack.data.name, "Jane");
        assert_eq!(ack.data.email, "jane@example.com");
        assert_eq!(ack.data.subject, "Hi");
    }

    #[tokio::test]
    async fn empty_field_is_missing() {
        let err = submit_contact(Ok(Json(request("Jane", "jane@example.com", "", "Hello there!"))))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingFields));
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[tokio::test]
    async fn absent_field_is_missing() {
        let mut req = request("Jane", "jane@example.com", "Hi", "Hello there!");
        req.email = None;

        let err = submit_contact(Ok(Json(req))).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));
    }

    #[tokio::test]
    async fn server_only_checks_presence() {
        // Shape and length rules belong to the client validator.
        let result = submit_contact(Ok(Json(request("J", "not-an-email", "x", "short")))).await;
        assert!(result.is_ok());
    }
}
