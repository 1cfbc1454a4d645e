use eframe::egui;

use crate::data::loader;
use crate::state::{AppState, Page};
use crate::ui::{compare, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CraqueScoutApp {
    pub state: AppState,
}

impl Default for CraqueScoutApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for CraqueScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation + filters ----
        egui::SidePanel::left("side_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the active page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::About => panels::about_page(ui, &self.state),
            Page::Analysis => plot::rating_plot(ui, &self.state),
            Page::Table => table::stats_table(ui, &self.state),
            Page::Compare => compare::compare_page(ui, &mut self.state),
        });

        self.url_window(ctx);
    }
}

impl CraqueScoutApp {
    /// Modal-ish window for loading a dataset from a URL (Google Drive
    /// share links are rewritten to direct downloads). The fetch blocks
    /// the UI thread; dashboard datasets are small enough for that.
    fn url_window(&mut self, ctx: &egui::Context) {
        let labels = self.state.language.labels();
        let mut open = self.state.show_url_window;
        let mut fetch = false;

        egui::Window::new(labels.url_window_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.source_url)
                        .hint_text("https://…")
                        .desired_width(420.0),
                );
                ui.add_space(6.0);
                if ui.button(labels.fetch_button).clicked() {
                    fetch = true;
                }
            });

        self.state.show_url_window = open;

        if fetch {
            self.state.loading = true;
            let url = self.state.source_url.clone();
            match loader::load_url(&url) {
                Ok(dataset) => {
                    log::info!("Loaded {} player seasons from {url}", dataset.len());
                    self.state.set_dataset(dataset);
                    self.state.show_url_window = false;
                }
                Err(e) => {
                    log::error!("Failed to load URL: {e:#}");
                    self.state.status_message = Some(format!("Error: {e:#}"));
                    self.state.loading = false;
                }
            }
        }
    }
}
