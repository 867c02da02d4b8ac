//! pd-client library
//!
//! GraphQL data layer for the person directory: list, get, create and
//! delete `Person` records, with every outcome reported as a typed result.

pub(crate) mod client;
pub(crate) mod graphql;


pub use client::{Client, ClientError, ClientResult, ErrorKind};
pub use pd_core::{DeleteOutcome, NewPerson, Person};
