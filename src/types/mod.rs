pub mod report;
pub mod scoring;
