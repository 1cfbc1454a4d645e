use craque_scout::data::model::PlayerRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 12] = [
    "Gabriel", "Lucas", "Rafael", "Thiago", "Bruno", "Diego", "Marcus", "Oliver", "Harry",
    "Declan", "Phil", "Jack",
];
const LAST_NAMES: [&str; 12] = [
    "Silva", "Santos", "Oliveira", "Souza", "Pereira", "Costa", "Walker", "Sterling", "Kane",
    "Rice", "Foden", "Grealish",
];
const NATIONS: [&str; 6] = ["br BRA", "ar ARG", "eng ENG", "es ESP", "fr FRA", "pt POR"];
const POSITIONS: [&str; 4] = ["GK", "DF", "MF", "FW"];
const SEASONS: [u16; 2] = [2022, 2023];

struct RosterPlayer {
    name: String,
    nationality: String,
    position: String,
    birth_year: u16,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let leagues: [(&str, [&str; 4]); 2] = [
        (
            "Premier League",
            ["Arsenal", "Liverpool", "Manchester City", "Chelsea"],
        ),
        (
            "Brasileirão",
            ["Flamengo", "Palmeiras", "Corinthians", "Grêmio"],
        ),
    ];

    let mut records: Vec<PlayerRecord> = Vec::new();
    let mut name_counter = 0usize;

    for (league, teams) in &leagues {
        for team in teams {
            // Build a stable roster so the same player appears in every
            // season with a consistent birth year.
            let roster: Vec<RosterPlayer> = (0..6)
                .map(|_| {
                    let first = FIRST_NAMES[name_counter % FIRST_NAMES.len()];
                    let last = LAST_NAMES[(name_counter / FIRST_NAMES.len()) % LAST_NAMES.len()];
                    name_counter += 1;
                    RosterPlayer {
                        name: format!("{first} {last}"),
                        nationality: NATIONS[rng.gen_range(0..NATIONS.len())].to_string(),
                        position: POSITIONS[rng.gen_range(0..POSITIONS.len())].to_string(),
                        birth_year: rng.gen_range(1988..=2005),
                    }
                })
                .collect();

            for season in SEASONS {
                for player in &roster {
                    let matches: u32 = rng.gen_range(5..=38);
                    let minutes = matches * rng.gen_range(45..=90);

                    let (goals, assists) = match player.position.as_str() {
                        "FW" => (rng.gen_range(4..=24), rng.gen_range(1..=10)),
                        "MF" => (rng.gen_range(1..=12), rng.gen_range(2..=12)),
                        "DF" => (rng.gen_range(0..=4), rng.gen_range(0..=4)),
                        _ => (0, 0),
                    };

                    let offensive = round2(rng.gen_range(-2.5..3.5));
                    let defensive = round2(rng.gen_range(-2.5..3.5));
                    let total = round2(offensive + defensive);
                    let war = round2(total * minutes as f64 / 2500.0);

                    records.push(PlayerRecord {
                        player: player.name.clone(),
                        nationality: player.nationality.clone(),
                        age: (season - player.birth_year) as u8,
                        birth_year: player.birth_year,
                        team: team.to_string(),
                        position: player.position.clone(),
                        league: league.to_string(),
                        season: season.to_string(),
                        matches,
                        minutes,
                        goals,
                        assists,
                        goal_creating_actions: goals + assists + rng.gen_range(0..=8),
                        pass_completion_pct: round2(rng.gen_range(58.0..94.0)),
                        tackles_won: rng.gen_range(0..=90),
                        interceptions: rng.gen_range(0..=70),
                        yellow_cards: rng.gen_range(0..=12),
                        aerial_duels_won_pct: round2(rng.gen_range(20.0..80.0)),
                        offensive,
                        defensive,
                        total,
                        war,
                    });
                }
            }
        }
    }

    let output_path = "craque_sample.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    for record in &records {
        writer.serialize(record).expect("Failed to write record");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {} player seasons to {output_path}", records.len());
}
