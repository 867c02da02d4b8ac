use crate::graphql::operation::{CREATE_PERSON, DELETE_PERSON, GET_PERSON, LIST_PERSONS};
use crate::graphql::payload::{
    CreatePersonData, DeletePersonData, PersonData, PersonPayload, PersonsData,
};
use crate::graphql::{GraphQlRequest, GraphQlResponse, Operation};
use crate::{ClientError, ClientResult};

use pd_config::{ClientConfig, Config};
use pd_core::{DeleteOutcome, NewPerson, Person};

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client as ReqwestClient, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// GraphQL client for the person directory.
///
/// Holds no directory state between calls. Cloning is cheap and clones
/// share one connection pool, so operations may run concurrently from
/// any number of tasks.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    timeout: Duration,
    auth_token: Option<String>,
    http: ReqwestClient,
}

impl Client {
    /// Create a client for the configured endpoint
    ///
    /// Fails with a validation error if the endpoint is not an absolute
    /// http(s) URL.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint = config
            .endpoint_url()
            .map_err(|e| ClientError::validation(e.to_string()))?;

        Ok(Self {
            endpoint,
            timeout: config.timeout(),
            auth_token: config.auth_token.clone(),
            http: ReqwestClient::new(),
        })
    }

    /// Create a client from a full configuration
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        Self::new(&config.client)
    }

    /// Copy of this client with a different per-request timeout
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one operation and decode its data
    async fn execute<V, D>(&self, operation: &Operation, variables: &V) -> ClientResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        debug!("{} -> {}", operation.name, self.endpoint);

        let mut req = self
            .http
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .header(ACCEPT, "application/json")
            .json(&GraphQlRequest::new(operation, variables));

        if let Some(ref token) = self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let envelope: GraphQlResponse<D> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::server(
                    Some(status.as_u16()),
                    format!("HTTP status {}", status),
                ));
            }
            Err(e) => {
                return Err(ClientError::server(
                    Some(status.as_u16()),
                    format!("malformed GraphQL response: {}", e),
                ));
            }
        };

        envelope.into_result(status.as_u16())
    }

    // =========================================================================
    // Person Operations
    // =========================================================================

    /// List every person in the directory, in server order
    pub async fn list_persons(&self) -> ClientResult<Vec<Person>> {
        #[derive(Serialize)]
        struct ListVariables {}

        let data: PersonsData = self
            .execute(&LIST_PERSONS, &ListVariables {})
            .await
            .inspect_err(|e| warn!("listPersons failed: {}", e))?;

        let persons = data
            .persons
            .unwrap_or_default()
            .into_iter()
            .map(checked)
            .collect::<ClientResult<Vec<_>>>()
            .inspect_err(|e| warn!("listPersons failed: {}", e))?;
        debug!("listPersons returned {} record(s)", persons.len());
        Ok(persons)
    }

    /// Get a person by uuid
    pub async fn get_person(&self, id: i32) -> ClientResult<Person> {
        #[derive(Serialize)]
        struct GetVariables {
            id: i32,
        }

        let data: PersonData = self
            .execute(&GET_PERSON, &GetVariables { id })
            .await
            .inspect_err(|e| warn!("getPerson({}) failed: {}", id, e))?;

        let person = data
            .person
            .ok_or_else(|| ClientError::not_found(format!("person {} does not exist", id)))
            .and_then(checked)?;
        debug!("getPerson({}) returned {}", id, person);
        Ok(person)
    }

    /// Create a person; the server assigns the uuid
    ///
    /// Input is validated first and nothing is sent if it fails.
    pub async fn create_person(&self, name: &str, age: i32) -> ClientResult<Person> {
        let new_person = NewPerson::new(name, age)
            .map_err(ClientError::from)
            .inspect_err(|e| warn!("createPerson rejected: {}", e))?;

        self.create(&new_person).await
    }

    /// Create a person from already validated input
    pub async fn create(&self, new_person: &NewPerson) -> ClientResult<Person> {
        let data: CreatePersonData = self
            .execute(&CREATE_PERSON, new_person)
            .await
            .inspect_err(|e| warn!("createPerson failed: {}", e))?;

        let person = data
            .create_person
            .and_then(|payload| payload.person)
            .ok_or_else(|| ClientError::server(None, "createPerson returned no person"))
            .and_then(checked)?;
        debug!("createPerson created {}", person);
        Ok(person)
    }

    /// Delete a person by uuid
    pub async fn delete_person(&self, id: i32) -> ClientResult<DeleteOutcome> {
        #[derive(Serialize)]
        struct DeleteVariables {
            uuid: i32,
        }

        let data: DeletePersonData = self
            .execute(&DELETE_PERSON, &DeleteVariables { uuid: id })
            .await
            .inspect_err(|e| warn!("deletePerson({}) failed: {}", id, e))?;

        let outcome = match data.delete_person {
            None => {
                return Err(ClientError::not_found(format!(
                    "person {} does not exist",
                    id
                )));
            }
            Some(PersonPayload {
                person: Some(person),
            }) => DeleteOutcome::Deleted(checked(person)?),
            Some(PersonPayload { person: None }) => DeleteOutcome::Acknowledged,
        };
        debug!("deletePerson({}) succeeded", id);
        Ok(outcome)
    }
}

/// Reject a decoded record that breaks the Person invariants
fn checked(person: Person) -> ClientResult<Person> {
    match person.validate() {
        Ok(()) => Ok(person),
        Err(e) => Err(ClientError::server(None, format!("malformed record: {}", e))),
    }
}
