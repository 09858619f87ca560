//! `pk-population`: selected daily plans of the synthetic population.
//!
//! Only what the plan-based capacity initializer needs is modelled: the
//! ordered activities and legs of each person's selected plan.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`plan`]   | `DailyPlan`, `PlanElement`                      |
//! | [`loader`] | `load_plans_csv` / `load_plans_reader`          |
//! | [`error`]  | `PopulationError`, `PopulationResult<T>`        |

pub mod error;
pub mod loader;
pub mod plan;


pub use error::{PopulationError, PopulationResult};
pub use loader::{load_plans_csv, load_plans_reader};
pub use plan::{DailyPlan, PlanElement, STAGE_ACTIVITY_SUFFIX};
