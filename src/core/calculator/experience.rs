use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of employment split into full years, full months and days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Experience {
    /// "3y 2m 14d"
    pub fn label(&self) -> String {
        format!("{}y {}m {}d", self.years, self.months, self.days)
    }
}

/// Experience between `employed` and `today`. Zero when `today` precedes `employed`.
pub fn work_experience(employed: NaiveDate, today: NaiveDate) -> Experience {
    if today <= employed {
        return Experience::default();
    }

    let mut total_months = 0u32;
    while employed
        .checked_add_months(Months::new(total_months + 1))
        .is_some_and(|d| d <= today)
    {
        total_months += 1;
    }

    let anchor = employed
        .checked_add_months(Months::new(total_months))
        .unwrap_or(employed);

    Experience {
        years: total_months / 12,
        months: total_months % 12,
        days: (today - anchor).num_days() as u32,
    }
}
