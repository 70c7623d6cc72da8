pub mod navigation;
pub mod session_viewmodel;
pub mod account_viewmodel;
pub mod report_viewmodel;

pub use navigation::{Route, GateDecision, NavAction, NavItem};
pub use session_viewmodel::SessionPoller;
pub use account_viewmodel::{AccountViewModel, ProfileOutcome};
pub use report_viewmodel::{ReportField, ReportViewModel};
