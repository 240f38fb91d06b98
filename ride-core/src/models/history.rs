use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideHistoryEntry {
    pub id: i64,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
}

impl RideHistoryEntry {
    /// Route line shown in the history list, e.g. `Home to Office`.
    pub fn route_label(&self) -> String {
        format!("{} to {}", self.from, self.to)
    }

    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Rides requested during this session, oldest first.
///
/// Entries are only ever appended. Ids are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideHistory {
    entries: Vec<RideHistoryEntry>,
}

const SEED: [(i64, &str, &str, (i32, u32, u32)); 3] = [
    (1, "Home", "Office", (2023, 5, 1)),
    (2, "Office", "Gym", (2023, 5, 3)),
    (3, "Gym", "Home", (2023, 5, 3)),
];

impl RideHistory {
    /// History as it looks when a session starts.
    pub fn seeded() -> Self {
        let entries = SEED
            .iter()
            .filter_map(|&(id, from, to, (y, m, d))| {
                Some(RideHistoryEntry {
                    id,
                    from: from.to_string(),
                    to: to.to_string(),
                    date: NaiveDate::from_ymd_opt(y, m, d)?,
                })
            })
            .collect();
        Self { entries }
    }

    /// Records a ride requested at `at`.
    ///
    /// The id is the request time in milliseconds, bumped past the last id
    /// when two requests land in the same millisecond or the clock goes back.
    pub fn append(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        at: DateTime<Utc>,
    ) -> &RideHistoryEntry {
        let id = match self.entries.last() {
            Some(last) => at.timestamp_millis().max(last.id + 1),
            None => at.timestamp_millis(),
        };
        self.entries.push(RideHistoryEntry {
            id,
            from: from.into(),
            to: to.into(),
            date: at.date_naive(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[RideHistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RideHistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&RideHistoryEntry> {
        self.entries.last()
    }
}
