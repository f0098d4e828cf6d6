mod environment;
mod error;

pub use environment::Config;
pub use error::AppError;
