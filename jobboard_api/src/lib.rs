mod client;
mod errors;
mod executor;
mod normalize;
mod query;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::executor::{Executor, RequestConfig, RequestState};
pub use self::normalize::{normalize_failure, GENERIC_FAILURE_MESSAGE};
pub use self::query::{JobQuery, JobSortBy, Query, QueryCommon, SortDirection};
pub use self::transport::{
    HttpTransport, Method, PreparedRequest, Transport, TransportError, TransportResponse,
};
