pub mod checkout;
pub mod order;
pub mod payment;
mod routes;
pub mod util;

pub use checkout::checkout_route;
pub use order::order_route;
pub use payment::payment_route;
pub use routes::main_route;
pub use util::util_route;
