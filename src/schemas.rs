use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GenericResponse<T> {
    pub status: bool,
    pub customer_message: String,
    pub code: String,
    pub data: Option<T>,
}

impl<T> GenericResponse<T> {
    // Associated function for creating a success response
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            status: true,
            customer_message: String::from(message),
            code: String::from("200"),
            data,
        }
    }

    // Associated function for creating an error response
    pub fn error(message: &str, code: &str, data: Option<T>) -> Self {
        Self {
            status: false,
            customer_message: String::from(message),
            code: String::from(code),
            data,
        }
    }
}
