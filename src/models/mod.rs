pub mod dashboard;
pub mod filter;
pub mod record;
pub mod student;

use serde::{Deserialize, Deserializer};

pub use dashboard::{
    ActivePlans, ConsumedToday, MealBreakdown, MonthlyConsumption, TodayBreakdown, TotalStudents,
};
pub use filter::{ALL_PLANS, PLANS, RegistryFilter, StudentFilter};
pub use record::{Listing, RegistryRecord, format_timestamp};
pub use student::Student;

/// Reads an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
