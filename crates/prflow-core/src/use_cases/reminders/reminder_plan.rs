use time::OffsetDateTime;

use crate::use_cases::reviews::ReviewSummary;

/// Whether a pull request stayed inactive for more than `remind_after_hours`.
pub fn is_reminder_due(
    now: OffsetDateTime,
    updated_at: OffsetDateTime,
    remind_after_hours: f64,
) -> bool {
    (now - updated_at).as_seconds_f64() > remind_after_hours * 3600.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    /// The pull request can be merged.
    Author,
    /// A second verdict is still expected.
    Reviewer,
    /// Approved twice, but changes are still requested.
    ChangeRequester,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub login: String,
}

/// Reminders to send for one pull request.
///
/// The three rules are evaluated independently.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderPlan {
    reminders: Vec<Reminder>,
}

impl ReminderPlan {
    pub fn from_summary(author: &str, summary: &ReviewSummary) -> Self {
        let approved = summary.users.approved.len();
        let changes_requested = &summary.users.changes_requested;
        let mut reminders = Vec::new();

        // Deleted accounts leave an empty author login.
        if approved == 2 && changes_requested.is_empty() && !author.is_empty() {
            reminders.push(Reminder {
                kind: ReminderKind::Author,
                login: author.to_string(),
            });
        }

        if approved <= 1 {
            reminders.extend(summary.second_approvers.iter().map(|login| Reminder {
                kind: ReminderKind::Reviewer,
                login: login.clone(),
            }));
        }

        if approved == 2 {
            reminders.extend(changes_requested.iter().map(|login| Reminder {
                kind: ReminderKind::ChangeRequester,
                login: login.clone(),
            }));
        }

        Self { reminders }
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}
