// Admin screens: job postings, candidates, and stored match records.
// Everything here is list filtering and form checks; all I/O goes through ApiClient.

pub mod candidates;
pub mod jobs;
pub mod matches;
