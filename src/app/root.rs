use std::time::Duration;

use eframe::Frame;
use eframe::egui::{Context, Visuals};

use crate::Cli;
use crate::config::MARKET;
use crate::engine::QuoteEngine;
use crate::models::Watchlist;
use crate::ui::UI_CONFIG;
use crate::utils::local_now_as_timestamp_ms;

pub struct App {
    pub(crate) engine: QuoteEngine,
    pub(crate) period_secs: u64,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let watchlist = match &args.watch {
            Some(raw) => Watchlist::new(raw.split(',')),
            None => Watchlist::new(MARKET.default_watchlist.iter().copied()),
        };
        log::info!(
            "starting with {} watched symbols, refresh every {}s",
            watchlist.len(),
            args.refresh_secs
        );

        let engine = QuoteEngine::new(
            watchlist,
            args.refresh_secs,
            args.latency_ms,
            local_now_as_timestamp_ms(),
        );

        Self {
            engine,
            period_secs: args.refresh_secs,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let now_ms = local_now_as_timestamp_ms();
        self.engine.update(now_ms);

        self.render_header_panel(ctx);
        self.render_error_banner(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // The deadline must fire with no input, and finished fetches must be
        // drained promptly. Clamped so a due deadline re-checks quickly.
        let wake_ms = self
            .engine
            .millis_until_due(now_ms)
            .unwrap_or(1000)
            .clamp(100, 1000);
        ctx.request_repaint_after(Duration::from_millis(wake_ms as u64));
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
