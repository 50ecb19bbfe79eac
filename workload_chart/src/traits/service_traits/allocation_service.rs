use crate::common::*;

use crate::model::{allocation::allocation_grid::*, category::category::*, task::task::*};

pub trait AllocationService: Send + Sync {
    #[doc = "
        Lays every task's effort onto a category x day grid
        # Arguments
        * `tasks`      - tasks to allocate
        * `categories` - resolved categories; row index = display order
        * `today`      - civil date of day 0 in the reference timezone
    "]
    fn allocate(&self, tasks: &[Task], categories: &CategorySet, today: NaiveDate)
        -> AllocationGrid;
}
