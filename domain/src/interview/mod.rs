//! Interview session and loop state machine

pub mod machine;
pub mod session;

pub use machine::{FacilitatorDirective, InterviewMachine, InterviewState, LoopAction};
pub use session::{InterviewPlan, InterviewResult, InterviewSession};
