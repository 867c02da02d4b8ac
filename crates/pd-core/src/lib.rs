pub mod error;
pub mod models;


pub use error::{CoreError, Result as CoreResult};
pub use models::delete_outcome::DeleteOutcome;
pub use models::new_person::NewPerson;
pub use models::person::Person;
