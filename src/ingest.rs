use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::customer::Customer;
use crate::error::{InviteError, Result};

/// Parses an uploaded customer file, one JSON object per line.
///
/// Every line must hold a valid record, including the last one, so an empty
/// file or a trailing newline is rejected. The first bad line aborts the
/// whole batch.
pub fn parse_customers(bytes: &[u8]) -> Result<BTreeMap<i64, Customer>> {
    let mut customers = BTreeMap::new();

    for line in bytes.split(|b| *b == b'\n') {
        let line = std::str::from_utf8(line).map_err(|e| InviteError::InvalidRecordSyntax {
            record: String::from_utf8_lossy(line).into_owned(),
            message: e.to_string(),
        })?;

        let customer = Customer::from_json(line)?;
        log::debug!("Parsed customer {} at {}", customer.user_id, customer.location);

        match customers.entry(customer.user_id) {
            Entry::Occupied(_) => {
                return Err(InviteError::DuplicateIdentifier {
                    user_id: customer.user_id,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(customer);
            }
        }
    }

    Ok(customers)
}
