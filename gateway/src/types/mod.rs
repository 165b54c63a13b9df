mod envelope;
mod environment;
mod error;
mod extractors;

pub use envelope::Envelope;
pub use environment::Environment;
pub use error::{AppError, ErrorEnvelope};
pub use extractors::ValidatedJson;
