//! Wire envelope shared by every endpoint.
//!
//! Each body is `{"code": <int>, "result": <payload>}`. Failures use the
//! literal string `"failure"` as payload; registration success uses `"success"`.

use serde::{Serialize, Serializer};

/// Numeric result codes understood by existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    EmptyName,
    EmptyEmail,
    EmptyPassword,
    Oops,
    BadIdentifier,
    EmailAlreadyExists,
    NoEmailFound,
    PasswordNotMatch,
}

impl ResultCode {
    pub fn as_i32(self) -> i32 {
        match self {
            ResultCode::Success => 0,
            ResultCode::EmptyName => 2,
            ResultCode::EmptyEmail => 3,
            ResultCode::EmptyPassword => 4,
            ResultCode::Oops => 14,
            ResultCode::BadIdentifier => 24,
            ResultCode::EmailAlreadyExists => 30,
            ResultCode::NoEmailFound => 31,
            ResultCode::PasswordNotMatch => 32,
        }
    }
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

#[derive(Debug, Serialize)]
pub struct Reply<T> {
    pub code: ResultCode,
    pub result: T,
}

impl<T: Serialize> Reply<T> {
    pub fn success(result: T) -> Self {
        Self {
            code: ResultCode::Success,
            result,
        }
    }
}

impl Reply<&'static str> {
    pub fn failure(code: ResultCode) -> Self {
        Self {
            code,
            result: "failure",
        }
    }
}
