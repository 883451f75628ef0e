mod contact;

pub use contact::{EmailObject, PhoneObject};
