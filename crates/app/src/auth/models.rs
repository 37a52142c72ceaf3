//! Identity models.

use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Marker type for user identifiers.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Role claim carried by an authenticated user's token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// Claims resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Registration data passed through to the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login credentials passed through to the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signed token issued on a successful login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub user: AuthenticatedUser,
}
