//! # physicalc-core
//!
//! Pure physique-planning domain: the target-physique formula chain, the
//! normalized-FFMI category bands, unit conversion, and the snap/clamp grid
//! helpers every input surface funnels through. No I/O and no terminal
//! dependencies live here.

pub mod category;
pub mod constants;
pub mod error;
pub mod physique;
pub mod slider;
pub mod units;

pub use category::FfmiCategory;
pub use error::PlanError;
pub use physique::{compute_target_physique, PhysiqueResult};
pub use slider::SliderConfig;
pub use units::UnitSystem;
