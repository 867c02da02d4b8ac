//! GraphQL documents for the four directory operations.

/// A named GraphQL document sent as one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub(crate) const LIST_PERSONS: Operation = Operation {
    name: "ListPersons",
    document: "query ListPersons { persons { uuid name age } }",
};

pub(crate) const GET_PERSON: Operation = Operation {
    name: "GetPerson",
    document: "query GetPerson($id: Int) { person(uuid: $id) { uuid name age } }",
};

pub(crate) const CREATE_PERSON: Operation = Operation {
    name: "CreatePerson",
    document: "mutation CreatePerson($name: String, $age: Int) { \
               createPerson(name: $name, age: $age) { person { uuid name age } } }",
};

pub(crate) const DELETE_PERSON: Operation = Operation {
    name: "DeletePerson",
    document: "mutation DeletePerson($uuid: Int) { \
               deletePerson(uuid: $uuid) { person { uuid name age } } }",
};
