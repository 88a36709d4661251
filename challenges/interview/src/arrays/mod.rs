pub mod kth_lexicographic;

use crate::TaskGroup;

pub fn tasks() -> TaskGroup {
    TaskGroup::new("arrays").add("kth_lexicographic", kth_lexicographic::solve)
}
