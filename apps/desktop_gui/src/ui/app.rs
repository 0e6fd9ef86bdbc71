use std::time::Duration;

use client_core::{available_moods, Action, RecommendationFetcher, Store};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::catalog::Catalog;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::request_recommendation;
use crate::controller::reducer::apply_ui_event;
use crate::ui::widgets::selection_field;

const MISSING_TEXT: &str = "(no recommendation text returned)";

pub struct BookRecommenderApp {
    store: Store,
    catalog: Catalog,
    fetcher: RecommendationFetcher,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl BookRecommenderApp {
    pub fn new(catalog: Catalog, cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            store: Store::new(),
            catalog,
            fetcher: RecommendationFetcher,
            cmd_tx,
            ui_rx,
            status: "Backend worker starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.store, &mut self.status, event);
        }
    }

    fn show_selection_fields(&mut self, ui: &mut egui::Ui) {
        let state = self.store.state();
        let genre_pick = selection_field(
            ui,
            "Please select a genre",
            "genre",
            &state.genre,
            &self.catalog.genres,
        );
        let mood_pick = selection_field(
            ui,
            "Please select a mood",
            "mood",
            &state.mood,
            available_moods(&self.catalog, &state.genre),
        );
        let level_pick = selection_field(
            ui,
            "Please select a level",
            "level",
            &state.level,
            self.catalog.levels(),
        );

        if let Some(genre) = genre_pick {
            self.store.dispatch(Action::SetGenre(genre));
        }
        if let Some(mood) = mood_pick {
            self.store.dispatch(Action::SetMood(mood));
        }
        if let Some(level) = level_pick {
            self.store.dispatch(Action::SetLevel(level));
        }
    }

    fn show_fetch_button(&mut self, ui: &mut egui::Ui) {
        let loading = self.store.state().loading;
        let label = if loading {
            "Loading..."
        } else {
            "Get Recommendation"
        };
        ui.add_space(10.0);
        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
            request_recommendation(
                &mut self.store,
                &self.fetcher,
                &self.cmd_tx,
                &mut self.status,
            );
        }
    }

    fn show_responses(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, response) in self.store.state().responses.iter().enumerate() {
                egui::CollapsingHeader::new(format!("Recommendation {}", index + 1))
                    .id_salt(("recommendation", index))
                    .show(ui, |ui| match response {
                        Some(text) => {
                            ui.label(text.as_str());
                        }
                        None => {
                            ui.weak(MISSING_TEXT);
                        }
                    });
            }
        });
    }
}

impl eframe::App for BookRecommenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(600.0);
                ui.heading("AI Book Recommendation");
                ui.add_space(12.0);
                self.show_selection_fields(ui);
                self.show_fetch_button(ui);
                ui.add_space(20.0);
                self.show_responses(ui);
            });
        });

        if self.store.state().loading {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
