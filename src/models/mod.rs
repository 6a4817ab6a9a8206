pub mod assignment;
pub mod dataset;
pub mod milestone;
pub mod person;
pub mod project;

pub use assignment::Assignment;
pub use dataset::Dataset;
pub use milestone::Milestone;
pub use person::Person;
pub use project::Project;
