//! Confirmation email template

use crate::types::OutgoingEmail;

pub const CONFIRMATION_SUBJECT: &str = "You created a new Conference!";

const CONFIRMATION_GREETING: &str = "Hi, you have created a following conference:\r\n\r\n";

/// Sender address derived from the application identity
pub fn noreply_address(app_id: &str, mail_domain: &str) -> String {
    format!("noreply@{app_id}.{mail_domain}")
}

/// Email confirming that a conference was created
pub fn confirmation_email(
    app_id: &str,
    mail_domain: &str,
    to: &str,
    conference_info: &str,
) -> OutgoingEmail {
    OutgoingEmail {
        from: noreply_address(app_id, mail_domain),
        to: to.to_string(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        body: format!("{CONFIRMATION_GREETING}{conference_info}"),
    }
}
