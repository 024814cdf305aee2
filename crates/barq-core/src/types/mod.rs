//! Domain records for the fleet registry.

mod party;
mod payment;
mod proptests;
mod status;
mod vessel;

pub use party::ResponsibleParty;
pub use payment::Payment;
pub use status::{PaymentStatus, VesselStatus};
pub use vessel::VesselRecord;
