pub(crate) mod operation;
pub(crate) mod payload;
pub(crate) mod request;
pub(crate) mod response;

pub(crate) use operation::Operation;
pub(crate) use request::GraphQlRequest;
pub(crate) use response::GraphQlResponse;
