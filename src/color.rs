use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::filter::Focus;

/// Marker colour for rows outside the highlighted group (matplotlib's
/// "lightgray").
pub const OTHER: Color32 = Color32::from_rgb(211, 211, 211);

/// Marker colour for the highlighted group. The more specific the focus,
/// the hotter the colour.
pub fn focus_color(focus: &Focus) -> Color32 {
    match focus {
        Focus::Player(_) => Color32::from_rgb(255, 0, 0),
        Focus::Team(_) => Color32::from_rgb(0, 0, 255),
        Focus::League(_) => Color32::from_rgb(0, 128, 0),
        Focus::None => OTHER,
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` distinct colours: evenly spaced hues at fixed saturation and
/// lightness, so neighbouring teams stay tellable apart.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let rgb: Srgb = Hsl::new(step * i as f32, 0.75, 0.55).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: team → Color32
// ---------------------------------------------------------------------------

/// Maps each team to a distinct colour, used when no row is highlighted
/// so the scatter still separates visually by squad.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the distinct team names of a dataset.
    pub fn new(teams: &[String]) -> Self {
        let mut mapping = BTreeMap::new();
        for (team, color) in teams.iter().zip(generate_palette(teams.len())) {
            mapping.insert(team.clone(), color);
        }

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given team.
    pub fn color_for(&self, team: &str) -> Color32 {
        self.mapping
            .get(team)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct_for_small_n() {
        let colors = generate_palette(8);
        assert_eq!(colors.len(), 8);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_team_falls_back_to_default() {
        let map = ColorMap::new(&["Reds".to_string(), "Blues".to_string()]);
        assert_ne!(map.color_for("Reds"), map.color_for("Blues"));
        assert_eq!(map.color_for("Greens"), Color32::GRAY);
    }

    #[test]
    fn player_focus_is_red_team_focus_is_blue() {
        let player = sel(Some("Alice"), None, None).focus();
        let team = sel(None, Some("Reds"), None).focus();
        let league = sel(None, None, Some("Premier")).focus();
        assert_eq!(focus_color(&player), Color32::from_rgb(255, 0, 0));
        assert_eq!(focus_color(&team), Color32::from_rgb(0, 0, 255));
        assert_eq!(focus_color(&league), Color32::from_rgb(0, 128, 0));
    }

    fn sel(
        player: Option<&str>,
        team: Option<&str>,
        league: Option<&str>,
    ) -> crate::data::filter::FilterSelection {
        crate::data::filter::FilterSelection {
            league: league.map(str::to_string),
            season: None,
            team: team.map(str::to_string),
            player: player.map(str::to_string),
            age_min: None,
            age_max: None,
        }
    }
}
