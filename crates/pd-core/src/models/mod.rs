pub mod delete_outcome;
pub mod new_person;
pub mod person;
