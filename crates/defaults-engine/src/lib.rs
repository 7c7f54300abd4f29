pub mod admission_response;
pub mod admission_review;
pub mod dispatch;
pub mod errors;
pub mod evaluation;
pub mod patch;
pub mod rules;
