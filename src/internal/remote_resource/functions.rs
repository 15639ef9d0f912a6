pub mod default_client;
pub mod probe;

pub use default_client::default_client;
