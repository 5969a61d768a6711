pub mod applications;
pub mod apply;
pub mod auth;
pub mod jobs;
pub mod post_job;
pub mod profile;
