//! Headerless CSV ticket loader.
//!
//! Columns: `id,name,email,country,hour,price`. Extra trailing columns are
//! ignored; fewer than six is an error.

use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::{TicketError, TicketResult};
use crate::models::Ticket;

const MIN_FIELDS: usize = 6;

pub fn load_path(path: impl AsRef<Path>) -> TicketResult<Vec<Ticket>> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let tickets = read_records(reader)?;
    info!(path = %path.display(), count = tickets.len(), "Tickets loaded");
    Ok(tickets)
}

pub fn load_reader(source: impl Read) -> TicketResult<Vec<Ticket>> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> TicketResult<Vec<Ticket>> {
    let mut tickets = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        let ticket =
            parse_record(&record).map_err(|details| TicketError::InvalidRow { row, details })?;
        tickets.push(ticket);
    }
    tickets.sort_by_key(|ticket| ticket.id);
    Ok(tickets)
}

fn parse_record(record: &StringRecord) -> Result<Ticket, String> {
    if record.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {MIN_FIELDS} fields, found {}",
            record.len()
        ));
    }

    let field = |i: usize| record.get(i).unwrap_or_default().trim();

    let id = field(0)
        .parse::<u32>()
        .map_err(|_| format!("invalid id: {}", field(0)))?;
    let price = field(5)
        .parse::<f64>()
        .map_err(|_| format!("invalid price: {}", field(5)))?;

    Ok(Ticket {
        id,
        name: field(1).to_string(),
        email: field(2).to_string(),
        country: field(3).to_string(),
        hour: field(4).to_string(),
        price,
    })
}
