//! Status code classification
//!
//! Each admin API call belongs to an operation class, and the class alone decides what
//! a status code means. Call sites never inspect raw codes themselves.

use crate::errors::KongError;

/// Kind of call being made against the admin API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationClass {
    /// GET of a single resource where 404 means "absent"
    Existence,
    /// GET of a resource or collection whose body is decoded
    Read,
    /// POST creating a resource
    Create,
    /// PATCH of an existing resource
    Update,
    /// DELETE of a resource
    Delete,
    /// POST creating a route (answers 200 or 201)
    RouteCreate,
}

/// What a status code means for the calling operation
#[derive(Debug, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The call did what was asked
    Success,
    /// Existence check answered 404
    Missing,
    /// The call failed with the given error kind
    Failure(Rejection),
}

/// Failure categories a status code can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BadRequest,
    NotFound,
    Conflict,
    Unexpected,
}

impl OperationClass {
    /// Map a status code to its meaning for this class
    pub fn classify(self, status: u16) -> StatusOutcome {
        use OperationClass::*;
        use StatusOutcome::*;

        match (self, status) {
            (Existence, 200) => Success,
            (Existence, 404) => Missing,

            (Read, 200) => Success,
            (Read, 400) => Failure(Rejection::BadRequest),
            (Read, 404) => Failure(Rejection::NotFound),

            (Create, 201) => Success,
            (Create, 400) => Failure(Rejection::BadRequest),
            (Create, 409) => Failure(Rejection::Conflict),

            (RouteCreate, 200 | 201) => Success,
            (RouteCreate, 400) => Failure(Rejection::BadRequest),
            (RouteCreate, 409) => Failure(Rejection::Conflict),

            (Update, 200) => Success,
            (Update, 400) => Failure(Rejection::BadRequest),
            (Update, 404) => Failure(Rejection::NotFound),

            (Delete, 204) => Success,

            _ => Failure(Rejection::Unexpected),
        }
    }
}

impl Rejection {
    /// Turn the rejection into an error carrying the resource context
    pub fn into_error(
        self,
        resource: &str,
        name: &str,
        operation: &str,
        status: u16,
        body: &str,
    ) -> KongError {
        match self {
            Rejection::BadRequest => KongError::bad_request(resource, body),
            Rejection::NotFound => KongError::not_found(resource, name),
            Rejection::Conflict => KongError::exists(resource, name),
            Rejection::Unexpected => KongError::unexpected_status(operation, status),
        }
    }
}
