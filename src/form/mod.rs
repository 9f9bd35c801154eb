mod actions;
mod controller;
mod error;
mod field;
mod history;
mod state;
mod validation;

pub use actions::FormCommand;
pub use controller::{FormController, FormPhase};
pub use error::FormError;
pub use field::components::{ComponentKind, FieldComponent};
pub use field::{Control, render_control, render_controls};
pub use history::{SubmissionHistory, SubmissionRecord};
pub use state::{FormState, FormValues};
pub use validation::{FieldIssue, check_control, check_controls};
