pub mod assessment;
pub mod enums;
pub mod plan;
pub mod report;

pub use assessment::AssessmentInput;
pub use enums::{Gender, Mobility, Support};
pub use plan::{RehabPlanOutput, PLAN_FIELDS};
pub use report::SavedReport;
