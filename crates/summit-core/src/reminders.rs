//! Reminder scheduling for goals.
//!
//! A reminder is due when none was ever sent, or when at least its interval
//! has passed since the last one. Delivery is someone else's job; this
//! module only decides which reminders should go out now.

use jiff::{SignedDuration, Timestamp};

use crate::models::GoalRef;

/// Reminder cadence for a single goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub goal_id: u64,
    pub interval: SignedDuration,
    pub last_sent_at: Option<Timestamp>,
}

impl ReminderSchedule {
    pub fn new(goal_id: u64, interval: SignedDuration) -> Self {
        Self {
            goal_id,
            interval,
            last_sent_at: None,
        }
    }

    /// Whether a reminder should be sent at `now`.
    ///
    /// ```rust
    /// use jiff::{SignedDuration, Timestamp};
    /// use summit_core::reminders::ReminderSchedule;
    ///
    /// let sent = Timestamp::from_second(1_700_000_000).unwrap();
    /// let schedule = ReminderSchedule {
    ///     last_sent_at: Some(sent),
    ///     ..ReminderSchedule::new(1, SignedDuration::from_hours(24))
    /// };
    ///
    /// assert!(!schedule.is_due(sent + SignedDuration::from_hours(23)));
    /// assert!(schedule.is_due(sent + SignedDuration::from_hours(24)));
    /// ```
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self.last_sent_at {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        }
    }

    /// Records a reminder sent at `now`.
    pub fn mark_sent(&mut self, now: Timestamp) {
        self.last_sent_at = Some(now);
    }
}

/// Goal ids whose reminders are due at `now`.
///
/// Schedules for goals that no longer exist, super goals, and completed
/// goals are skipped.
pub fn due_reminders<G: GoalRef>(
    goals: &[G],
    schedules: &[ReminderSchedule],
    now: Timestamp,
) -> Vec<u64> {
    schedules
        .iter()
        .filter(|schedule| schedule.is_due(now))
        .filter(|schedule| {
            goals
                .iter()
                .find(|goal| goal.id() == schedule.goal_id)
                .is_some_and(|goal| !goal.is_super() && !goal.is_completed())
        })
        .map(|schedule| schedule.goal_id)
        .collect()
}
