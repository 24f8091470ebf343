pub mod candidate;
pub mod job;
pub mod job_match;
pub mod upload;
