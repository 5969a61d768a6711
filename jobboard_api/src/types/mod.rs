mod meta;
pub use self::meta::{Meta, PaginatedResponse, Paging, Response};

mod job;
pub use self::job::{Job, JobType, NewJob, SalaryRange};

mod user;
pub use self::user::{AuthResponse, Credentials, Profile, ProfileUpdate, Role, SignupRequest};

mod application;
pub use self::application::{Application, ApplicationStatus, NewApplication};
