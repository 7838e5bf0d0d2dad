mod reminder_plan;
pub(crate) mod run_reminder_sweep;
pub(crate) mod send_pull_request_reminders;

pub use reminder_plan::{is_reminder_due, Reminder, ReminderKind, ReminderPlan};
pub use run_reminder_sweep::{ReminderSweepReport, RunReminderSweepInterface};
pub use send_pull_request_reminders::{ReminderOutcome, SendPullRequestRemindersInterface};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    run_reminder_sweep::MockRunReminderSweepInterface,
    send_pull_request_reminders::MockSendPullRequestRemindersInterface,
};
