pub mod recruiter;
pub mod results;
pub mod submission;
