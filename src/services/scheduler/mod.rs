use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;

/// Work run on every tick of a repeating schedule.
pub type Task = Box<dyn FnMut() + Send + 'static>;

/// Runs a task repeatedly at a fixed interval.
pub trait Scheduler {
    /// Schedule `task` every `interval`. The first run happens one full
    /// interval after this call.
    fn repeat(&self, interval: Duration, task: Task) -> ScheduleHandle;
}

/// Handle to a repeating schedule. Dropping it leaves the schedule running.
#[derive(Debug, Default)]
pub struct ScheduleHandle {
    abort: Option<AbortHandle>,
}

impl ScheduleHandle {
    /// A handle that owns nothing it could stop.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn cancel(self) {
        if let Some(abort) = self.abort {
            abort.abort();
        }
    }
}

/// Drives tasks from a tokio interval. Must be used inside a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn repeat(&self, interval: Duration, mut task: Task) -> ScheduleHandle {
        let period = interval.max(Duration::from_millis(1));
        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick resolves immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                task();
            }
        });

        ScheduleHandle {
            abort: Some(join.abort_handle()),
        }
    }
}

/// Collects tasks and runs them only when asked. For hosts that own their
/// own loop.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Mutex<Vec<(Duration, Task)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every scheduled task once, in scheduling order.
    pub fn run_pending(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, task) in tasks.iter_mut() {
            task();
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn intervals(&self) -> Vec<Duration> {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(interval, _)| *interval)
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn repeat(&self, interval: Duration, task: Task) -> ScheduleHandle {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((interval, task));
        ScheduleHandle::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(counter: &Arc<AtomicUsize>) -> Task {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn manual_scheduler_runs_on_demand() {
        let counter = Arc::new(AtomicUsize::new(0));
        let scheduler = ManualScheduler::new();
        let _handle = scheduler.repeat(Duration::from_secs(1), counting_task(&counter));

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        scheduler.run_pending();
        scheduler.run_pending();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.intervals(), vec![Duration::from_secs(1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_ticks_every_interval() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = TokioScheduler.repeat(Duration::from_millis(1_000), counting_task(&counter));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(3_000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
}
