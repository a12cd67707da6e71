pub mod category;
pub mod evaluate;
pub mod outcome;

pub use category::categorize;
pub use evaluate::{assess, evaluate};
pub use outcome::{NoMatchReason, TipAssessment, Verdict};
