// ============================================================================
// MODELS - Estructuras compartidas con el Realtime Database
// ============================================================================

pub mod de;
pub mod person;
pub mod location;
pub mod report;
pub mod user;
pub mod prayer;

pub use person::Person;
pub use location::LocationNode;
pub use report::{Report, ReportDraft};
pub use user::{UserRecord, UserProfile};
pub use prayer::{PrayerTime, sample_prayer_times};
