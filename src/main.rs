//! Pequod Route Viewer.
//!
//! Interaktive Karte: Start und Ziel per Klick wählen, Route beim
//! Pequod-Pathfinder anfragen und als gestylte Segmente anzeigen.

use eframe::egui;
use pequod_route_viewer::{
    render, ui, AppController, AppIntent, AppState, ClientOptions, RouteClient,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Pequod Route Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Pequod Route Viewer"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Pequod Route Viewer",
            options,
            Box::new(|cc| {
                let app = ViewerApp::new(&cc.egui_ctx)?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ViewerApp {
    fn new(ctx: &egui::Context) -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte), dann Umgebung
        let config_path = ClientOptions::config_path();
        let mut client_options = ClientOptions::load_from_file(&config_path);
        client_options.apply_env_overrides();

        let mut client = RouteClient::from_options(&client_options)?;
        let repaint_ctx = ctx.clone();
        client.set_waker(move || repaint_ctx.request_repaint());

        Ok(Self {
            state: AppState::with_options(client_options),
            controller: AppController::new(client),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let applied = self.controller.poll_route_responses(&mut self.state);
        if applied > 0 {
            log::debug!("{} Routen-Antwort(en) übernommen", applied);
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        // Spinner im Bedienpanel braucht laufende Frames
        if self.state.request.is_loading() {
            ctx.request_repaint();
        }
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state, self.input.hover_geo());
        events.extend(ui::render_control_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                render::paint_map(ui.painter(), rect, &scene);

                if let Some(pointer) = response.hover_pos() {
                    if let Some(text) = render::hover_text(&scene, rect, pointer) {
                        response.on_hover_ui_at_pointer(|ui| {
                            ui.label(text);
                        });
                    }
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
