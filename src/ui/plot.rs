use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::color;
use crate::data::filter::{Highlight, HighlightAssignment};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Rating scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the offensive-vs-defensive rating scatter.
///
/// With no focus selection every visible row is drawn in its team colour.
/// With one, the focused rows get the focus colour and everything else
/// drops to light gray, with a two-entry legend.
pub fn rating_plot(ui: &mut Ui, state: &AppState) {
    let labels = state.language.labels();

    let dataset = match &state.dataset {
        Some(dataset) => dataset,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(labels.no_data);
            });
            return;
        }
    };

    let focus = state.selection.focus();
    let focused = matches!(state.highlight, HighlightAssignment::PerRow(_));

    let mut plot = Plot::new("rating_plot")
        .x_axis_label(labels.axis_offensive)
        .y_axis_label(labels.axis_defensive)
        .height((ui.available_height() - 60.0).max(200.0))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if focused {
        plot = plot.legend(egui_plot::Legend::default());
    }

    plot.show(ui, |plot_ui| {
        plot_ui.hline(
            HLine::new(0.0)
                .color(Color32::DARK_GRAY)
                .style(LineStyle::Dashed { length: 8.0 })
                .width(1.0),
        );
        plot_ui.vline(
            VLine::new(0.0)
                .color(Color32::DARK_GRAY)
                .style(LineStyle::Dashed { length: 8.0 })
                .width(1.0),
        );

        match &state.highlight {
            HighlightAssignment::Uniform => {
                // Group rows by team so each squad shares a colour.
                let mut by_team: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
                for &idx in &state.visible {
                    let record = &dataset.records[idx];
                    by_team
                        .entry(record.team.as_str())
                        .or_default()
                        .push([record.offensive, record.defensive]);
                }
                for (team, points) in by_team {
                    let color = state
                        .color_map
                        .as_ref()
                        .map(|cm| cm.color_for(team))
                        .unwrap_or(Color32::LIGHT_BLUE);
                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .color(color)
                            .radius(3.0),
                    );
                }
            }
            HighlightAssignment::PerRow(marks) => {
                let mut selected: Vec<[f64; 2]> = Vec::new();
                let mut other: Vec<[f64; 2]> = Vec::new();
                for (&idx, mark) in state.visible.iter().zip(marks) {
                    let record = &dataset.records[idx];
                    let point = [record.offensive, record.defensive];
                    match mark {
                        Highlight::Selected => selected.push(point),
                        Highlight::Other => other.push(point),
                    }
                }
                if !other.is_empty() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(other))
                            .name(labels.legend_other)
                            .color(color::OTHER)
                            .radius(2.5),
                    );
                }
                if !selected.is_empty() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(selected))
                            .name(labels.legend_selected)
                            .color(color::focus_color(&focus))
                            .radius(4.0),
                    );
                }
            }
        }
    });

    ui.add_space(8.0);
    ui.label(labels.metrics_help);
}
