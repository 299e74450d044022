//! Data model shared across the setup-synthesis pipeline.

pub mod car;
pub mod conditions;
pub mod profile;
pub mod setup;
pub mod track;

pub use car::{CarDescriptor, Drivetrain};
pub use conditions::{Conditions, Weather};
pub use profile::Profile;
pub use setup::{Setup, SetupSection, Value};
pub use track::TrackDescriptor;
