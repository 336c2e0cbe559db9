use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame};
use egui::{Align, Color32, Layout, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::routines::{render_text, workout_icon};
use crate::store::StateStore;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

const BACKGROUND: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
const PANEL: Color32 = Color32::from_rgb(0x1c, 0x1c, 0x1c);
const DATE_COLOR: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5);
const TITLE_COLOR: Color32 = Color32::from_rgb(0xa0, 0xa0, 0xa0);
const WORKOUT_COLOR: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);

/// Opens the schedule window and blocks until it is closed.
///
/// A state file that becomes unreadable while the window is up closes it,
/// and the load error is returned from here.
pub fn run_display(store: StateStore, fullscreen: bool) -> Result<()> {
    let fatal = Rc::new(RefCell::new(None));
    let app = WorkoutApp::new(store, Rc::clone(&fatal), Instant::now())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Workout Schedule")
            .with_inner_size([1280.0, 720.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    log::info!("Launching display (fullscreen: {fullscreen})");
    eframe::run_native(
        "Workout Schedule",
        options,
        Box::new(|cc| {
            apply_style(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("Display failed: {e}"))?;

    match fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn apply_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    ctx.set_visuals(visuals);
}

struct WorkoutApp {
    store: StateStore,
    date_text: String,
    workout_text: String,
    icon: &'static str,
    next_refresh: Instant,
    fatal: Rc<RefCell<Option<anyhow::Error>>>,
}

impl WorkoutApp {
    fn new(store: StateStore, fatal: Rc<RefCell<Option<anyhow::Error>>>, now: Instant) -> Result<Self> {
        let mut app = WorkoutApp {
            store,
            date_text: String::new(),
            workout_text: String::new(),
            icon: "",
            next_refresh: now,
            fatal,
        };
        app.tick(now)?;
        Ok(app)
    }

    fn tick(&mut self, now: Instant) -> Result<()> {
        if now < self.next_refresh {
            return Ok(());
        }
        let (day_text, workout_text) = render_text(&self.store)?;
        log::debug!("Refreshed display: {day_text} / {workout_text}");
        self.icon = workout_icon(&workout_text);
        self.date_text = day_text;
        self.workout_text = workout_text;
        self.next_refresh = now + REFRESH_INTERVAL;
        Ok(())
    }

    fn show_schedule(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.date_text).size(36.0).strong().color(DATE_COLOR));
            ui.add_space(20.0);
            ui.label(RichText::new("Today's Workout").size(24.0).color(TITLE_COLOR));
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{} {}", self.icon, self.workout_text))
                    .size(40.0)
                    .strong()
                    .color(WORKOUT_COLOR),
            );
        });
    }

    fn show_metrics_panel(&self, ui: &mut Ui) {
        egui::Frame::group(ui.style())
            .fill(PANEL)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.label(RichText::new("Fitness Metrics").size(24.0).strong().color(DATE_COLOR));
                    ui.add_space(8.0);
                    ui.label(RichText::new("No metrics connected").size(18.0).color(TITLE_COLOR));
                });
            });
    }
}

impl App for WorkoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now = Instant::now();
        if let Err(err) = self.tick(now) {
            log::error!("Failed to refresh workout display: {err:#}");
            *self.fatal.borrow_mut() = Some(err);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND).inner_margin(40.0))
            .show(ctx, |ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::relative(0.25))
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            ui.add_space(60.0);
                            self.show_schedule(ui);
                        });
                        strip.cell(|ui| self.show_metrics_panel(ui));
                    });
            });

        ctx.request_repaint_after(self.next_refresh.saturating_duration_since(now));
    }
}
