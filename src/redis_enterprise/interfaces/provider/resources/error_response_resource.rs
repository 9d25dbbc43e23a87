use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
pub struct ErrorResponseResource {
    pub kind: String,
    pub message: String,
}
