//! Scheduling heuristics over stored project data.
//!
//! Neither function models task dependencies: the completion estimate is a
//! straight-line extrapolation from percent complete, and the "critical" task
//! is simply the one planned to take longest.

use chrono::{Duration, NaiveDate};

use crate::models::{CompletionEstimate, LongestTask, Project, ScheduleVerdict, Task};

/// Extrapolate when `project` will finish given its progress as of `today`.
///
/// Zero progress, a `today` before the project start, or an extrapolated date
/// past the calendar's range yields [`CompletionEstimate::InsufficientData`].
pub fn estimate_completion(project: &Project, today: NaiveDate) -> CompletionEstimate {
    let elapsed_days = (today - project.start_date).num_days();
    if project.progress <= 0.0 || elapsed_days < 0 {
        return CompletionEstimate::InsufficientData;
    }

    let estimated_total_days = elapsed_days as f64 / (project.progress / 100.0);
    let whole_days = estimated_total_days.floor().min(f64::from(i32::MAX)) as i64;
    let Some(estimated_completion) = project.start_date.checked_add_signed(Duration::days(whole_days)) else {
        return CompletionEstimate::InsufficientData;
    };

    let verdict = if estimated_completion > project.end_date {
        ScheduleVerdict::Late {
            days: (estimated_completion - project.end_date).num_days(),
        }
    } else {
        ScheduleVerdict::OnTime
    };

    CompletionEstimate::Estimated {
        elapsed_days,
        estimated_total_days,
        estimated_completion,
        end_date: project.end_date,
        verdict,
    }
}

/// Pick the task with the largest `due_date - start_date`.
///
/// Ties go to the earliest task in `tasks`; an empty slice yields `None`.
pub fn longest_task(tasks: &[Task]) -> Option<LongestTask> {
    let mut best: Option<&Task> = None;
    for task in tasks {
        match best {
            Some(current) if task.duration_days() <= current.duration_days() => {}
            _ => best = Some(task),
        }
    }
    best.map(|task| LongestTask {
        task: task.clone(),
        duration_days: task.duration_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, ProjectStatus, TaskStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(progress: f64, start: NaiveDate, end: NaiveDate) -> Project {
        Project {
            id: 1,
            name: "Billing revamp".to_string(),
            description: None,
            start_date: start,
            end_date: end,
            status: ProjectStatus::InProgress,
            progress,
        }
    }

    fn task(id: i64, start: NaiveDate, due: NaiveDate) -> Task {
        Task {
            id,
            project_id: 1,
            name: format!("task-{id}"),
            description: None,
            status: TaskStatus::InProgress,
            priority: Priority::Medium,
            start_date: start,
            due_date: due,
            assigned_to: None,
            progress: 0.0,
        }
    }

    #[test]
    fn half_done_after_ten_days_finishes_six_days_late() {
        let p = project(50.0, date(2024, 1, 1), date(2024, 1, 15));
        let estimate = estimate_completion(&p, date(2024, 1, 11));
        assert_eq!(
            estimate,
            CompletionEstimate::Estimated {
                elapsed_days: 10,
                estimated_total_days: 20.0,
                estimated_completion: date(2024, 1, 21),
                end_date: date(2024, 1, 15),
                verdict: ScheduleVerdict::Late { days: 6 },
            }
        );
        assert_eq!(estimate.to_string(), "estimated completion 2024-01-21, late by 6 days");
    }

    #[test]
    fn ahead_of_schedule_is_on_time() {
        let p = project(50.0, date(2024, 1, 1), date(2024, 1, 31));
        match estimate_completion(&p, date(2024, 1, 5)) {
            CompletionEstimate::Estimated { verdict, estimated_completion, .. } => {
                assert_eq!(verdict, ScheduleVerdict::OnTime);
                assert_eq!(estimated_completion, date(2024, 1, 9));
            }
            other => panic!("expected an estimate, got {other:?}"),
        }
    }

    #[test]
    fn zero_progress_has_no_estimate() {
        let p = project(0.0, date(2024, 1, 1), date(2024, 1, 15));
        assert_eq!(estimate_completion(&p, date(2024, 3, 1)), CompletionEstimate::InsufficientData);
    }

    #[test]
    fn not_yet_started_has_no_estimate() {
        let p = project(10.0, date(2024, 6, 1), date(2024, 7, 1));
        assert_eq!(estimate_completion(&p, date(2024, 5, 1)), CompletionEstimate::InsufficientData);
    }

    #[test]
    fn vanishing_progress_does_not_overflow_the_calendar() {
        let p = project(1e-9, date(2024, 1, 1), date(2024, 2, 1));
        assert_eq!(estimate_completion(&p, date(2024, 1, 11)), CompletionEstimate::InsufficientData);
    }

    #[test]
    fn longest_task_prefers_first_on_ties() {
        let tasks = vec![
            task(1, date(2024, 1, 1), date(2024, 1, 4)),
            task(2, date(2024, 1, 2), date(2024, 1, 12)),
            task(3, date(2024, 2, 1), date(2024, 2, 11)),
        ];
        let longest = longest_task(&tasks).unwrap();
        assert_eq!(longest.task.id, 2);
        assert_eq!(longest.duration_days, 10);
    }

    #[test]
    fn no_tasks_no_longest() {
        assert!(longest_task(&[]).is_none());
    }
}
