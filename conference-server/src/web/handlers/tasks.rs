//! Task queue handlers
//!
//! Invoked by the task queue with form-encoded bodies. A failed invocation
//! returns an error status so the queue's retry policy can take over.

use axum::{Form, extract::State, extract::rejection::FormRejection, http::StatusCode};

use shared::{CheckSpeakersTask, ConfirmationEmailTask, task_debug, task_error, task_info, task_warn};
use crate::core::{confirmation_email, evaluate};
use crate::error::{ServerError, ServerResult};
use crate::server::ConferenceServer;
use crate::traits::{AnnouncementCache, AnnouncementSource, Datastore, Mailer};
use crate::types::task;

/// Recompute the featured speaker announcement of one conference
pub async fn check_speakers<D, C, M, A>(
    State(server): State<ConferenceServer<D, C, M, A>>,
    form: Result<Form<CheckSpeakersTask>, FormRejection>,
) -> ServerResult<StatusCode>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    let refreshed = match form {
        Ok(Form(request)) => refresh_featured_speakers(&server, &request).await,
        Err(rejection) => Err(ServerError::from(rejection)),
    };
    refreshed.inspect_err(|e| {
        task_error!(task::CHECK_SPEAKERS, error = %e, "❌ Featured speaker check failed");
    })?;

    Ok(StatusCode::OK)
}

async fn refresh_featured_speakers<D, C, M, A>(
    server: &ConferenceServer<D, C, M, A>,
    request: &CheckSpeakersTask,
) -> ServerResult<()>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    let websafe_key = request.conference_key.trim();
    if websafe_key.is_empty() {
        return Err(ServerError::invalid_request("missing conferenceKey"));
    }

    // Resolve first: an unresolvable key must not touch the cache
    let conference = server.datastore().resolve_conference(websafe_key).await?;
    let roster = server.datastore().conference_roster(&conference).await?;

    task_debug!(
        task::CHECK_SPEAKERS,
        "Scanning {} sessions against {} speakers for {}",
        roster.sessions.len(),
        roster.speakers.len(),
        conference
    );

    let announcement = evaluate(&conference, &roster.sessions, &roster.speakers);
    let featured = !announcement.is_empty();

    server
        .cache_writer()
        .set_featured_speakers(&conference, announcement)
        .await?;

    if featured {
        task_info!(task::CHECK_SPEAKERS, "✅ Featured speakers cached for {}", conference);
    } else {
        task_info!(task::CHECK_SPEAKERS, "No featured speakers for {}", conference);
    }
    Ok(())
}

/// Email the organizer a confirmation of the new conference
pub async fn send_confirmation_email<D, C, M, A>(
    State(server): State<ConferenceServer<D, C, M, A>>,
    form: Result<Form<ConfirmationEmailTask>, FormRejection>,
) -> ServerResult<StatusCode>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    let Form(request) = form.map_err(ServerError::from).inspect_err(|e| {
        task_error!(task::SEND_CONFIRMATION_EMAIL, error = %e, "❌ Rejected task body");
    })?;

    let recipient = request.email.trim();
    if recipient.is_empty() {
        task_error!(task::SEND_CONFIRMATION_EMAIL, "❌ Missing recipient address");
        return Err(ServerError::invalid_request("missing email"));
    }

    if request.conference_info.trim().is_empty() {
        task_warn!(task::SEND_CONFIRMATION_EMAIL, "Sending confirmation to {} without conference info", recipient);
    }

    let config = server.config();
    let email = confirmation_email(&config.app_id, &config.mail_domain, recipient, &request.conference_info);

    server
        .mailer()
        .send(email)
        .await
        .inspect_err(|e| {
            task_error!(task::SEND_CONFIRMATION_EMAIL, error = %e, "❌ Confirmation email failed");
        })?;

    task_info!(task::SEND_CONFIRMATION_EMAIL, "✅ Confirmation sent to {}", recipient);
    Ok(StatusCode::OK)
}
