//! Customer domain type.

use kontor_core::{CustomerId, Email};

/// A customer (domain type).
#[derive(Debug, Clone)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    /// Email address, unique across all customers.
    pub email: Email,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone_number: String,
}

impl Customer {
    /// Display name, "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer = Customer {
            id: CustomerId::new(1),
            first_name: "Anna".to_string(),
            last_name: "Schmidt".to_string(),
            email: Email::parse("anna@example.de").expect("valid email"),
            address: "Hauptstrasse 1".to_string(),
            city: "Berlin".to_string(),
            postal_code: "10115".to_string(),
            country: "Germany".to_string(),
            phone_number: "+49 30 1234567".to_string(),
        };

        assert_eq!(customer.full_name(), "Anna Schmidt");
    }
}
