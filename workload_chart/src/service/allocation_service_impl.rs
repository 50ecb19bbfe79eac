use crate::common::*;

use crate::traits::service_traits::allocation_service::*;

use crate::model::{allocation::allocation_grid::*, category::category::*, task::task::*};

use crate::enums::effort_mode::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, Clone, new)]
pub struct AllocationServiceImpl {
    effort_mode: EffortMode,
    num_days: usize,
}

impl AllocationServiceImpl {
    #[doc = r#"
        Spread mode: even share of the effort on every day from start to end.

        1. Missing start → today; missing end → start
        2. Both ends clamp to today, so a task entirely in the past lands on day 0
        3. An end before the start collapses to a one-day task
        4. `per_day = round2(effort / span)` is added to each spanned day inside the window
    "#]
    fn spread_task(&self, grid: &mut AllocationGrid, bucket: usize, task: &Task, today: NaiveDate) {
        let start: NaiveDate = task.start_date().unwrap_or(today);
        let end: NaiveDate = task.end_date().unwrap_or(start);

        let eff_start: NaiveDate = start.max(today);
        let eff_end: NaiveDate = end.max(today).max(eff_start);

        let span_days: i64 = days_between(eff_start, eff_end) + 1;
        let per_day: f64 = round2(task.effort() / span_days as f64);
        let first_day: i64 = days_between(today, eff_start);

        for day in first_day..first_day + span_days {
            if day >= self.num_days as i64 {
                break;
            }
            grid.add(bucket, day, per_day);
        }
    }

    #[doc = r#"
        Single-day mode: the whole effort on one day.

        `day = max(0, date - today)`; dropped when it falls past the window. A task with no
        date counts as due today.
    "#]
    fn place_task(&self, grid: &mut AllocationGrid, bucket: usize, task: &Task, today: NaiveDate) {
        let date: NaiveDate = task.start_date().unwrap_or(today);
        let day: i64 = days_between(today, date).max(0);

        if day < self.num_days as i64 {
            grid.add(bucket, day, *task.effort());
        } else {
            debug!(
                "[AllocationServiceImpl->place_task] '{}' is {} days out; outside the {}-day window",
                task.name(),
                day,
                self.num_days
            );
        }
    }
}

impl AllocationService for AllocationServiceImpl {
    fn allocate(
        &self,
        tasks: &[Task],
        categories: &CategorySet,
        today: NaiveDate,
    ) -> AllocationGrid {
        let mut grid: AllocationGrid = AllocationGrid::new(categories.len(), self.num_days);

        for task in tasks {
            let bucket: usize = categories.bucket_index(task.category().as_deref());

            if *task.effort() <= 0.0 {
                debug!(
                    "[AllocationServiceImpl->allocate] '{}' has non-positive effort {}",
                    task.name(),
                    task.effort()
                );
            }

            match self.effort_mode {
                EffortMode::Spread => self.spread_task(&mut grid, bucket, task, today),
                EffortMode::SingleDay => self.place_task(&mut grid, bucket, task, today),
            }
        }

        grid
    }
}
