use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single player-season observation, deserialized from the raw column
/// names of the upstream CRAQUE table. The struct fields are the canonical
/// names; per-language display names live in [`crate::labels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Nation")]
    pub nationality: String,
    #[serde(rename = "Idade")]
    pub age: u8,
    #[serde(rename = "Born")]
    pub birth_year: u16,
    #[serde(rename = "Squad")]
    pub team: String,
    #[serde(rename = "Pos")]
    pub position: String,
    #[serde(rename = "Campeonato")]
    pub league: String,
    /// Season label. Upstream files store it as a bare year, so both
    /// `"2023"` and `2023` are accepted.
    #[serde(rename = "Ano", deserialize_with = "season_label")]
    pub season: String,
    #[serde(rename = "MP")]
    pub matches: u32,
    #[serde(rename = "Min")]
    pub minutes: u32,
    #[serde(rename = "Gls")]
    pub goals: u32,
    #[serde(rename = "Ast")]
    pub assists: u32,
    #[serde(rename = "GCA")]
    pub goal_creating_actions: u32,
    #[serde(rename = "Cmp%_total")]
    pub pass_completion_pct: f64,
    #[serde(rename = "TklW_tackles")]
    pub tackles_won: u32,
    #[serde(rename = "Int_blocks")]
    pub interceptions: u32,
    #[serde(rename = "CrdY_performance")]
    pub yellow_cards: u32,
    #[serde(rename = "Won%_aereal-duels")]
    pub aerial_duels_won_pct: f64,
    #[serde(rename = "RAPTOR_final_Off")]
    pub offensive: f64,
    #[serde(rename = "RAPTOR_final_Def")]
    pub defensive: f64,
    #[serde(rename = "RAPTOR_final_Total")]
    pub total: f64,
    #[serde(rename = "WAR")]
    pub war: f64,
}

impl PlayerRecord {
    /// The (player, team, season) identity tuple that filtering must
    /// carry through unchanged.
    pub fn identity(&self) -> (&str, &str, &str) {
        (&self.player, &self.team, &self.season)
    }
}

/// Accept the season either as a label string or as a bare integer year.
fn season_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct SeasonVisitor;

    impl serde::de::Visitor<'_> for SeasonVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a season label or year")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<String, E> {
            // Pandas writes nullable integer columns as floats.
            if v.fract() == 0.0 {
                Ok(format!("{}", v as i64))
            } else {
                Ok(v.to_string())
            }
        }
    }

    deserializer.deserialize_any(SeasonVisitor)
}

// ---------------------------------------------------------------------------
// Stat – the numeric metric columns
// ---------------------------------------------------------------------------

/// The numeric metric columns, in table order. Counting stats print as
/// integers, rate stats with one decimal, ratings and WAR with two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stat {
    Matches,
    Minutes,
    Goals,
    Assists,
    GoalCreatingActions,
    PassCompletionPct,
    TacklesWon,
    Interceptions,
    YellowCards,
    AerialDuelsWonPct,
    Offensive,
    Defensive,
    Total,
    War,
}

impl Stat {
    pub const ALL: [Stat; 14] = [
        Stat::Matches,
        Stat::Minutes,
        Stat::Goals,
        Stat::Assists,
        Stat::GoalCreatingActions,
        Stat::PassCompletionPct,
        Stat::TacklesWon,
        Stat::Interceptions,
        Stat::YellowCards,
        Stat::AerialDuelsWonPct,
        Stat::Offensive,
        Stat::Defensive,
        Stat::Total,
        Stat::War,
    ];

    /// Format this stat's value from a record for display.
    pub fn value_text(self, record: &PlayerRecord) -> String {
        match self {
            Stat::Matches => record.matches.to_string(),
            Stat::Minutes => record.minutes.to_string(),
            Stat::Goals => record.goals.to_string(),
            Stat::Assists => record.assists.to_string(),
            Stat::GoalCreatingActions => record.goal_creating_actions.to_string(),
            Stat::PassCompletionPct => format!("{:.1}", record.pass_completion_pct),
            Stat::TacklesWon => record.tackles_won.to_string(),
            Stat::Interceptions => record.interceptions.to_string(),
            Stat::YellowCards => record.yellow_cards.to_string(),
            Stat::AerialDuelsWonPct => format!("{:.1}", record.aerial_duels_won_pct),
            Stat::Offensive => format!("{:.2}", record.offensive),
            Stat::Defensive => format!("{:.2}", record.defensive),
            Stat::Total => format!("{:.2}", record.total),
            Stat::War => format!("{:.2}", record.war),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with distinct-value indices computed once at
/// load time. Records stay in file order; filtering selects indices and
/// never mutates the rows.
#[derive(Debug, Clone)]
pub struct PlayerDataset {
    /// All player-season rows, in source order.
    pub records: Vec<PlayerRecord>,
    /// Sorted distinct league names.
    pub leagues: Vec<String>,
    /// Sorted distinct season labels.
    pub seasons: Vec<String>,
    /// Sorted distinct team names, across all leagues.
    pub teams: Vec<String>,
    /// Sorted distinct player names, across all teams.
    pub players: Vec<String>,
    /// Observed (min, max) age, the slider defaults. `None` when empty.
    pub age_bounds: Option<(u8, u8)>,
}

impl PlayerDataset {
    /// Build the distinct-value indices from loaded records.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let mut leagues: BTreeSet<String> = BTreeSet::new();
        let mut seasons: BTreeSet<String> = BTreeSet::new();
        let mut teams: BTreeSet<String> = BTreeSet::new();
        let mut players: BTreeSet<String> = BTreeSet::new();
        let mut age_bounds: Option<(u8, u8)> = None;

        for record in &records {
            leagues.insert(record.league.clone());
            seasons.insert(record.season.clone());
            teams.insert(record.team.clone());
            players.insert(record.player.clone());
            age_bounds = Some(match age_bounds {
                None => (record.age, record.age),
                Some((lo, hi)) => (lo.min(record.age), hi.max(record.age)),
            });
        }

        PlayerDataset {
            records,
            leagues: leagues.into_iter().collect(),
            seasons: seasons.into_iter().collect(),
            teams: teams.into_iter().collect(),
            players: players.into_iter().collect(),
            age_bounds,
        }
    }

    /// Number of player-season rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
