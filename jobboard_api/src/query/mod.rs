mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod job;
pub use self::job::{JobQuery, JobSortBy};
