//! System interface abstractions for testing and development

pub mod commands;
pub mod env;
pub mod error;
pub mod filesystem;
pub mod http;

// Re-export commonly used items
pub use commands::{CommandRunner, MockCommandRunner, RealCommandRunner};
pub use env::{EnvReader, MockEnvReader, RealEnvReader};
pub use error::{CommandError, HttpError, SIMULATED_FAILURE};
pub use filesystem::{DirReader, FileInfo, MockDirReader, RealDirReader};
pub use http::{DEFAULT_HTTP_TIMEOUT, HttpClient, HttpGetter, HttpResponse, MockHttpClient};
