pub mod trapping_rain_water;

use crate::TaskGroup;

pub fn tasks() -> TaskGroup {
    TaskGroup::new("two_pointers").add("trapping_rain_water", trapping_rain_water::solve)
}
