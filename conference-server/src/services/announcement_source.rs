//! Current announcement computed from the datastore

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::nearly_sold_out_announcement;
use crate::error::ServerResult;
use crate::traits::{AnnouncementSource, Datastore};

/// Announces conferences that are about to sell out
pub struct NearlySoldOutAnnouncementSource<D> {
    datastore: Arc<D>,
}

impl<D: Datastore> NearlySoldOutAnnouncementSource<D> {
    pub fn new(datastore: Arc<D>) -> Self {
        Self { datastore }
    }
}

#[async_trait]
impl<D: Datastore> AnnouncementSource for NearlySoldOutAnnouncementSource<D> {
    async fn current_announcement(&self) -> ServerResult<Option<String>> {
        let conferences = self.datastore.all_conferences().await?;
        Ok(nearly_sold_out_announcement(&conferences))
    }
}
