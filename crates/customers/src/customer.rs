use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wingscafe_core::DomainError;

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("CustomerId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: NaiveDate,
}

fn customer(seq: u128, name: &str, email: &str, phone: &str, joined: NaiveDate) -> Customer {
    Customer {
        // Deterministic ids so lookups are stable across runs.
        id: CustomerId::from_uuid(Uuid::from_u128(seq)),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        joined,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The fixed mock customer directory.
pub fn directory() -> Vec<Customer> {
    vec![
        customer(
            1,
            "Thabo Mokoena",
            "thabo.mokoena@example.com",
            "+266 5885 1010",
            date(2023, 2, 14),
        ),
        customer(
            2,
            "Lineo Ramaili",
            "lineo.ramaili@example.com",
            "+266 5885 2020",
            date(2023, 6, 3),
        ),
        customer(
            3,
            "Kefuoe Letsie",
            "kefuoe.letsie@example.com",
            "+266 5885 3030",
            date(2024, 1, 21),
        ),
        customer(
            4,
            "Palesa Nkuebe",
            "palesa.nkuebe@example.com",
            "+266 5885 4040",
            date(2024, 9, 8),
        ),
    ]
}

/// Look up a directory record by id.
pub fn find(id: CustomerId) -> Option<Customer> {
    directory().into_iter().find(|c| c.id == id)
}
