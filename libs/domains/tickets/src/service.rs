use std::sync::Arc;
use tracing::instrument;

use crate::error::{TicketError, TicketResult};
use crate::models::Ticket;
use crate::repository::TicketRepository;

pub struct TicketService<R: TicketRepository> {
    repository: Arc<R>,
}

impl<R: TicketRepository> TicketService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn total(&self) -> TicketResult<usize> {
        Ok(self.repository.get_all().await?.len())
    }

    #[instrument(skip(self))]
    pub async fn by_country(&self, country: &str) -> TicketResult<Vec<Ticket>> {
        self.repository.get_by_country(country).await
    }

    #[instrument(skip(self))]
    pub async fn count_by_country(&self, country: &str) -> TicketResult<usize> {
        Ok(self.repository.get_by_country(country).await?.len())
    }

    /// Percentage of all tickets going to `country`
    #[instrument(skip(self))]
    pub async fn share_by_country(&self, country: &str) -> TicketResult<f64> {
        let total = self.total().await?;
        if total == 0 {
            return Err(TicketError::NoRecords);
        }
        let count = self.count_by_country(country).await?;
        Ok(count as f64 / total as f64 * 100.0)
    }
}

impl<R: TicketRepository> Clone for TicketService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
