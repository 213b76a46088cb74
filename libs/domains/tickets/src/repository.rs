use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::error::TicketResult;
use crate::loader;
use crate::models::Ticket;

/// Read-only access to the ticket set
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Every ticket, ordered by id
    async fn get_all(&self) -> TicketResult<Vec<Ticket>>;

    /// Tickets whose country matches, ignoring case
    async fn get_by_country(&self, country: &str) -> TicketResult<Vec<Ticket>>;
}

/// Tickets loaded once and shared immutably
#[derive(Clone, Default)]
pub struct InMemoryTicketRepository {
    tickets: Arc<Vec<Ticket>>,
}

impl InMemoryTicketRepository {
    pub fn new(mut tickets: Vec<Ticket>) -> Self {
        tickets.sort_by_key(|ticket| ticket.id);
        Self {
            tickets: Arc::new(tickets),
        }
    }

    pub fn from_csv(path: impl AsRef<Path>) -> TicketResult<Self> {
        loader::load_path(path).map(Self::new)
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn get_all(&self) -> TicketResult<Vec<Ticket>> {
        Ok(self.tickets.as_ref().clone())
    }

    async fn get_by_country(&self, country: &str) -> TicketResult<Vec<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .filter(|ticket| ticket.country.eq_ignore_ascii_case(country.trim()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: u32, country: &str) -> Ticket {
        Ticket {
            id,
            name: "Name".into(),
            email: "mail@example.com".into(),
            country: country.into(),
            hour: "10:00".into(),
            price: 100.0,
        }
    }

    #[tokio::test]
    async fn test_country_match_ignores_case() {
        let repo = InMemoryTicketRepository::new(vec![
            ticket(3, "Brazil"),
            ticket(1, "brazil"),
            ticket(2, "Chile"),
        ]);

        let found = repo.get_by_country("BRAZIL").await.unwrap();

        let ids: Vec<u32> = found.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
