//! Cron handlers

use axum::{extract::State, http::StatusCode};

use shared::{task_error, task_info};
use crate::error::ServerResult;
use crate::server::ConferenceServer;
use crate::traits::{AnnouncementCache, AnnouncementSource, Datastore, Mailer};
use crate::types::task;

/// Refresh the process-wide announcement
pub async fn set_announcement<D, C, M, A>(
    State(server): State<ConferenceServer<D, C, M, A>>,
) -> ServerResult<StatusCode>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    let announcement = server
        .announcement_source()
        .current_announcement()
        .await
        .inspect_err(|e| {
            task_error!(task::SET_ANNOUNCEMENT, error = %e, "❌ Announcement computation failed");
        })?;

    let written = match announcement {
        Some(text) => server.cache_writer().set_global_announcement(text).await,
        None => server.cache_writer().clear_global_announcement().await,
    };
    written.inspect_err(|e| {
        task_error!(task::SET_ANNOUNCEMENT, error = %e, "❌ Announcement cache write failed");
    })?;

    task_info!(task::SET_ANNOUNCEMENT, "✅ Announcement refreshed");
    Ok(StatusCode::NO_CONTENT)
}
