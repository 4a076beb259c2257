use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Duplicate person: {0}")]
    DuplicatePerson(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("The person index provided is invalid: {0}")]
    InvalidIndex(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
