use crate::error::{AddressBookError, Result};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A person's full name, stored as entered (words separated by spaces).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into().trim().to_string();
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_alphanumeric() || c.is_whitespace());
        if !valid {
            return Err(invalid("name", value));
        }
        Ok(Self(value))
    }

    /// Case-sensitive words of the name, split on whitespace.
    pub fn words(&self) -> HashSet<&str> {
        self.0.split_whitespace().collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("phone", value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into().trim().to_string();
        let is_part = |s: &str| {
            !s.is_empty()
                && s
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        };
        let valid = match value.split_once('@') {
            Some((local, domain)) => is_part(local) && is_part(domain),
            None => false,
        };
        if !valid {
            return Err(invalid("email", value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(invalid("address", value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(field: &'static str, value: String) -> AddressBookError {
    AddressBookError::InvalidField { field, value }
}

/// One contact. Compared and hashed by the value of every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn words_in_name(&self) -> HashSet<&str> {
        self.name.words()
    }

    /// True when any word of the name is one of `keywords` (case-sensitive).
    pub fn name_matches_any<S>(&self, keywords: &HashSet<S>) -> bool
    where
        S: Borrow<str> + Hash + Eq,
    {
        self.words_in_name()
            .iter()
            .any(|word| keywords.contains(*word))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str()
        )
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a valid person whose other fields are derived from the name.
    pub fn person(name: &str) -> Person {
        let slug: String = name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new(format!("{}@example.com", slug)).unwrap(),
            Address::new("311, Clementi Ave 2").unwrap(),
        )
    }
}
