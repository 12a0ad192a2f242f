use super::*;
use crate::Streak;
use crate::TIMESTAMP_FORMAT;

/// Finished runs ordered from longest streak to shortest.
/// Runs with equal streaks keep the order in which they ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Leaderboard(Vec<Record>);

impl From<&[Record]> for Leaderboard {
    fn from(history: &[Record]) -> Self {
        let mut records = history.to_vec();
        records.sort_by(|a, b| b.streak().cmp(&a.streak()));
        Self(records)
    }
}

impl Leaderboard {
    pub fn records(&self) -> &[Record] {
        &self.0
    }
    pub fn best(&self) -> Option<Streak> {
        self.0.first().map(Record::streak)
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌──────┬─────────────────────┬────────┐")?;
        writeln!(f, "│ Rank │ Time                │ Streak │")?;
        writeln!(f, "├──────┼─────────────────────┼────────┤")?;
        for (i, record) in self.0.iter().enumerate() {
            writeln!(
                f,
                "│ {:>4} │ {:<19} │ {:>6} │",
                i + 1,
                record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
                record.streak(),
            )?;
        }
        writeln!(f, "└──────┴─────────────────────┴────────┘")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timestamp;

    fn at(minute: u32) -> Timestamp {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, minute, 0))
            .unwrap()
    }

    #[test]
    fn sorted_descending_and_stable() {
        let history = [
            Record::new(at(0), 1),
            Record::new(at(1), 4),
            Record::new(at(2), 1),
            Record::new(at(3), 0),
            Record::new(at(4), 4),
        ];
        let board = Leaderboard::from(&history[..]);
        let order = board
            .records()
            .iter()
            .map(|r| (r.streak(), r.timestamp()))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![(4, at(1)), (4, at(4)), (1, at(0)), (1, at(2)), (0, at(3))]
        );
        assert_eq!(board.best(), Some(4));
    }

    #[test]
    fn empty() {
        let board = Leaderboard::from(&[] as &[Record]);
        assert!(board.is_empty());
        assert_eq!(board.best(), None);
    }

    #[test]
    fn table_rows() {
        let board = Leaderboard::from(&[Record::new(at(5), 3)][..]);
        let table = board.to_string();
        assert!(table.contains("2024-01-01 12:05:00"));
        assert_eq!(table.lines().count(), 5);
    }
}
