//! Decides which customers are close enough to the office to be invited.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::approx::less_or_equal;
use crate::customer::Customer;
use crate::error::{InviteError, Result};
use crate::geo::{Coordinate, EARTH_RADIUS};
use crate::ingest;

/// Customers at or within this distance (km) of the office are invited.
pub const MAX_DISTANCE: f64 = 100.0;

/// What the response exposes of an invited customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invitee {
    #[serde(rename = "User_id")]
    pub user_id: i64,

    #[serde(rename = "Name")]
    pub name: String,
}

impl From<&Customer> for Invitee {
    fn from(customer: &Customer) -> Self {
        Self {
            user_id: customer.user_id,
            name: customer.name.clone(),
        }
    }
}

pub fn should_invite(distance: f64) -> Result<bool> {
    if distance < 0.0 {
        return Err(InviteError::NegativeDistance { distance });
    }

    Ok(less_or_equal(distance, MAX_DISTANCE))
}

/// Filters customers against a fixed reference location.
#[derive(Debug, Clone, Copy)]
pub struct Invitations {
    reference: Coordinate,
}

impl Invitations {
    pub fn new(reference: Coordinate) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> Coordinate {
        self.reference
    }

    /// Customers within [`MAX_DISTANCE`] of the reference, by ascending id.
    pub fn select<'a>(
        &self,
        customers: impl IntoIterator<Item = &'a Customer>,
    ) -> Result<Vec<&'a Customer>> {
        let mut invited = Vec::new();

        for customer in customers {
            let distance = self.reference.distance_to(&customer.location, EARTH_RADIUS);
            if should_invite(distance)? {
                invited.push(customer);
            }
        }

        invited.sort_by_key(|c| c.user_id);

        Ok(invited)
    }

    /// Runs a raw upload through ingestion and selection.
    ///
    /// `None` means nobody was invited and is sent as JSON `null`.
    pub fn respond(&self, bytes: &[u8]) -> Result<Option<Vec<Invitee>>> {
        let customers: BTreeMap<i64, Customer> = ingest::parse_customers(bytes)?;
        let invited = self.select(customers.values())?;

        log::info!(
            "Invited {} of {} customers",
            invited.len(),
            customers.len()
        );

        if invited.is_empty() {
            return Ok(None);
        }

        Ok(Some(invited.into_iter().map(Invitee::from).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Invitations {
        Invitations::new(Coordinate::new(0.0, 0.0).unwrap())
    }

    fn customer(user_id: i64, longitude: f64, latitude: f64) -> Customer {
        Customer {
            user_id,
            name: format!("user{user_id}"),
            raw_longitude: longitude.to_string(),
            raw_latitude: latitude.to_string(),
            location: Coordinate::from_degrees(longitude, latitude).unwrap(),
        }
    }

    #[test]
    fn test_should_invite() {
        let cases = [
            (0.0, true),
            (0.1, true),
            (10.0, true),
            (50.0, true),
            (99.9, true),
            (100.0, true),
            (100.000_000_001, true),
            (100.000_000_1, false),
            (100.1, false),
        ];

        for (distance, expected) in cases {
            assert_eq!(should_invite(distance).unwrap(), expected, "distance {distance}");
        }
    }

    #[test]
    fn test_negative_distance_is_an_error() {
        for distance in [-1.0, -49.999] {
            assert_eq!(
                should_invite(distance).unwrap_err(),
                InviteError::NegativeDistance { distance }
            );
        }
    }

    #[test]
    fn test_invitee_serializes_id_and_name_only() {
        let cases = [
            (0, "", r#"{"User_id":0,"Name":""}"#),
            (1, "John", r#"{"User_id":1,"Name":"John"}"#),
            (600, "!@#$%^*()", r#"{"User_id":600,"Name":"!@#$%^*()"}"#),
        ];

        for (user_id, name, expected) in cases {
            let mut c = customer(user_id, 0.0, 0.0);
            c.name = name.to_string();
            assert_eq!(serde_json::to_string(&Invitee::from(&c)).unwrap(), expected);
        }
    }

    #[test]
    fn test_select_sorts_by_id() {
        let customers = [
            customer(9, 0.0, 0.0),
            customer(3, 0.1, 0.1),
            customer(5, 50.0, 50.0),
            customer(1, -0.2, 0.0),
        ];

        let ids: Vec<i64> = origin()
            .select(&customers)
            .unwrap()
            .iter()
            .map(|c| c.user_id)
            .collect();
        assert_eq!(ids, vec![1, 3, 9]);
    }

    #[test]
    fn test_select_near_office() {
        let office = Invitations::new(Coordinate::from_degrees(-6.257664, 53.339428).unwrap());
        let customers = [
            // ~41.8 km
            customer(12, -6.043701, 52.986375),
            // ~313 km
            customer(1, -10.27699, 51.92893),
        ];

        let invited = office.select(&customers).unwrap();
        assert_eq!(invited.len(), 1);
        assert_eq!(invited[0].user_id, 12);
    }

    #[test]
    fn test_respond_returns_only_nearby() {
        let input = concat!(
            r#"{"latitude": "0", "user_id": 1, "name": "user1", "longitude": "0"}"#,
            "\n",
            r#"{"latitude": "51.92893", "user_id": 2, "name": "Alice Cahill", "longitude": "-10.27699"}"#,
        );

        let response = origin().respond(input.as_bytes()).unwrap();
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"[{"User_id":1,"Name":"user1"}]"#
        );
    }

    #[test]
    fn test_respond_with_nobody_nearby_is_null() {
        let input = concat!(
            r#"{"latitude": "80", "user_id": 1, "name": "user1", "longitude": "100"}"#,
            "\n",
            r#"{"latitude": "51.92893", "user_id": 2, "name": "Alice Cahill", "longitude": "-10.27699"}"#,
        );

        let response = origin().respond(input.as_bytes()).unwrap();
        assert_eq!(response, None);
        assert_eq!(serde_json::to_string(&response).unwrap(), "null");
    }

    #[test]
    fn test_respond_rejects_malformed_batch() {
        assert!(origin().respond(br#"{ "longitude": 56 }"#).is_err());
        assert!(origin().respond(b"").is_err());
    }
}
