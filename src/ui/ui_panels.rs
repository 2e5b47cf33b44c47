use eframe::egui::{
    Align, Button, CentralPanel, Context, Grid, Key, Layout, RichText, ScrollArea, TextEdit,
    TopBottomPanel, Ui,
};

use crate::app::App;
use crate::engine::{DashboardAction, RefreshIntent};
use crate::models::DisplayedQuote;
use crate::ui::styles::{change_text, format_price, format_thousands, heading_text, subdued_text};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::local_now_as_timestamp_ms;

impl App {
    /// Title row, refresh control, search bar.
    pub(crate) fn render_header_panel(&mut self, ctx: &Context) {
        let mut actions: Vec<DashboardAction> = Vec::new();
        let mut manual_refresh = false;

        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(heading_text(&UI_TEXT.app_title));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let refresh = ui.add_enabled(
                            !self.engine.state.loading,
                            Button::new(&UI_TEXT.btn_refresh),
                        );
                        if refresh.clicked() {
                            manual_refresh = true;
                        }
                        if self.engine.state.loading {
                            ui.spinner();
                        }
                        if let Some(stamp) = &self.engine.state.last_updated {
                            ui.label(subdued_text(format!(
                                "{}: {}",
                                UI_TEXT.label_last_updated, stamp
                            )));
                        }
                    });
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    let search_width = ui.available_width() - 80.0;
                    let field = ui.add(
                        TextEdit::singleline(&mut self.engine.state.search_query)
                            .hint_text(&UI_TEXT.search_hint)
                            .desired_width(search_width.max(120.0)),
                    );
                    let submitted =
                        field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    if ui.button(&UI_TEXT.btn_search).clicked() || submitted {
                        actions.push(DashboardAction::SubmitSearch);
                    }
                });
            });

        let now_ms = local_now_as_timestamp_ms();
        for action in actions {
            self.engine.dispatch(action, now_ms);
        }
        if manual_refresh {
            self.engine.request_refresh(RefreshIntent::Manual, now_ms);
        }
    }

    /// Dismissible banner, only present while an error is set.
    pub(crate) fn render_error_banner(&mut self, ctx: &Context) {
        let Some(error) = self.engine.state.error.clone() else {
            return;
        };

        let mut dismissed = false;
        TopBottomPanel::top("error_banner")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                UI_CONFIG.banner_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&error).color(UI_CONFIG.colors.banner_text));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button(&UI_TEXT.icon_close).clicked() {
                                dismissed = true;
                            }
                        });
                    });
                });
            });

        if dismissed {
            self.engine
                .dispatch(DashboardAction::DismissError, local_now_as_timestamp_ms());
        }
    }

    /// Detail card (when a search selected one) plus the watchlist grid.
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let mut actions: Vec<DashboardAction> = Vec::new();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    if let Some(selected) = self.engine.state.selected.clone() {
                        render_detail_card(ui, &selected, &mut actions);
                        ui.add_space(12.0);
                    }

                    ui.heading(heading_text(&UI_TEXT.heading_watchlist));
                    ui.add_space(8.0);

                    if self.engine.state.loading {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.label(subdued_text(&UI_TEXT.loading_caption));
                            ui.add_space(40.0);
                        });
                    } else if self.engine.state.quotes.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(subdued_text(&UI_TEXT.empty_watchlist));
                            ui.add_space(40.0);
                        });
                    } else {
                        render_watchlist_grid(ui, &self.engine.state.quotes, &mut actions);
                    }
                });
            });

        let now_ms = local_now_as_timestamp_ms();
        for action in actions {
            self.engine.dispatch(action, now_ms);
        }
    }

    /// Disclaimer plus the refresh cadence.
    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(subdued_text(&UI_TEXT.sp_disclaimer));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(subdued_text(format!(
                            "{} {}s",
                            UI_TEXT.sp_auto_refresh_prefix, self.period_secs
                        )));
                    });
                });
            });
    }
}

fn render_detail_card(ui: &mut Ui, selected: &DisplayedQuote, actions: &mut Vec<DashboardAction>) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(heading_text(&UI_TEXT.heading_detail));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(&UI_TEXT.icon_close).clicked() {
                    actions.push(DashboardAction::CloseDetail);
                }
            });
        });
        ui.separator();

        let quote = &selected.quote;
        ui.columns(2, |cols| {
            cols[0].label(RichText::new(&quote.name).strong());
            cols[0].label(
                RichText::new(&quote.symbol)
                    .color(UI_CONFIG.colors.symbol_accent)
                    .heading(),
            );
            cols[0].label(RichText::new(format_price(quote.price)).heading().strong());
            cols[0].label(change_text(quote));

            detail_row(
                &mut cols[1],
                &UI_TEXT.label_volume,
                &format_thousands(quote.volume),
            );
            detail_row(&mut cols[1], &UI_TEXT.label_market_cap, &quote.market_cap);
            detail_row(&mut cols[1], &UI_TEXT.label_updated, &selected.last_updated);
        });

        ui.add_space(6.0);
        if ui.button(&UI_TEXT.btn_add_watchlist).clicked() {
            actions.push(DashboardAction::AddToWatchlist(quote.symbol.clone()));
        }
    });
}

fn detail_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(subdued_text(format!("{label}:")));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(value).strong());
        });
    });
}

fn render_watchlist_grid(
    ui: &mut Ui,
    quotes: &[DisplayedQuote],
    actions: &mut Vec<DashboardAction>,
) {
    let columns = UI_CONFIG.watchlist_columns.max(1);
    let card_width =
        (ui.available_width() - 12.0 * (columns as f32 - 1.0)) / columns as f32;

    Grid::new("watchlist_grid")
        .num_columns(columns)
        .spacing([12.0, 12.0])
        .min_col_width(card_width)
        .show(ui, |ui| {
            for (i, displayed) in quotes.iter().enumerate() {
                render_quote_card(ui, displayed, card_width, actions);
                if (i + 1).is_multiple_of(columns) {
                    ui.end_row();
                }
            }
        });
}

fn render_quote_card(
    ui: &mut Ui,
    displayed: &DisplayedQuote,
    width: f32,
    actions: &mut Vec<DashboardAction>,
) {
    let quote = &displayed.quote;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(width - 22.0); // frame margins
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&quote.symbol)
                    .color(UI_CONFIG.colors.symbol_accent)
                    .strong(),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button(&UI_TEXT.btn_remove).clicked() {
                    actions.push(DashboardAction::RemoveFromWatchlist(quote.symbol.clone()));
                }
            });
        });
        ui.label(subdued_text(&quote.name));
        ui.add_space(4.0);
        ui.label(RichText::new(format_price(quote.price)).heading().strong());
        ui.label(change_text(quote));
        ui.add_space(4.0);
        ui.label(subdued_text(format!(
            "{}: {}",
            UI_TEXT.label_volume,
            format_thousands(quote.volume)
        )));
        ui.label(subdued_text(format!(
            "{}: {}",
            UI_TEXT.label_updated, displayed.last_updated
        )));
    });
}
