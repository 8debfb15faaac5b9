use conway::{Buffer, Config, EpisodeController, Step};
use eframe::egui;
use eframe::egui::{ScrollArea, Ui};
use eframe::run_native;
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const GRID_WIDTH: usize = 200;
const GRID_HEIGHT: usize = GRID_WIDTH * 9 / 16;
const CELL_SIZE: f32 = 8.0;
const SLEEP_DURATION: Duration = Duration::from_millis(50);
const WINDOW: usize = 3;

/// Everything the painter needs, shared with the stepping thread.
struct Session {
    env: EpisodeController,
    t: usize,
    episode: usize,
    last: Option<Step>,
    p: f64,
}

impl Session {
    fn new(env: EpisodeController) -> Self {
        let p = env.config().p;
        Session { env, t: 0, episode: 1, last: None, p }
    }

    fn tick(&mut self) {
        let step = self.env.step(self.t);
        self.t += 1;
        self.last = Some(step);
        if step.done {
            let next_p = (rand::rng().random_range(0.2..=0.8_f64) * 10.0).round() / 10.0;
            log::info!("episode {} converged at step {}, reseeding with p={next_p}", self.episode, self.t);
            self.reseed(next_p);
        }
    }

    fn reseed(&mut self, p: f64) {
        match self.env.reset(Some(p)) {
            Ok(_) => {
                self.p = p;
                self.episode += 1;
                self.last = None;
            }
            Err(err) => log::error!("reset failed: {err}"),
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = Config::default()
        .with_shape(GRID_HEIGHT, GRID_WIDTH)
        .with_probability(0.4)
        .with_window(WINDOW);
    let env = match EpisodeController::new(config) {
        Ok(env) => env,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return Ok(());
        }
    };
    // Shared session wrapped in Arc<Mutex<T>> for synchronization between threads
    let shared = Arc::new(Mutex::new(Session::new(env)));

    run_native(
        "Game of Life GUI",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            let ctx = cc.egui_ctx.clone();
            let session = Arc::clone(&shared);

            // Spawn a background thread to step the episode
            thread::spawn(move || loop {
                thread::sleep(SLEEP_DURATION);
                let Ok(mut session) = session.lock() else {
                    break;
                };
                session.tick();
                ctx.request_repaint();
            });

            Ok(Box::new(GuiOfLife::new(cc, shared)))
        }),
    )
}

struct GuiOfLife {
    session: Arc<Mutex<Session>>,
    buffer: Buffer,
    next_p: f64,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, session: Arc<Mutex<Session>>) -> Self {
        Self { session, buffer: Buffer::Visible, next_p: 0.4 }
    }

    fn randomize(&mut self) {
        if let Ok(mut session) = self.session.lock() {
            session.reseed(self.next_p);
        }
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let Ok(session) = self.session.lock() else {
            return;
        };

        ui.label(format!("episode {}  step {}  p={:.1}", session.episode, session.t, session.p));
        match session.last {
            Some(step) => ui.label(format!(
                "born {}  killed {}  survived {}  loss {:.5}",
                step.stats.born, step.stats.killed, step.stats.survived, step.loss
            )),
            None => ui.label("fresh episode"),
        };

        let cells = session.env.automaton().grid().buffer(self.buffer);
        let shape = session.env.shape();

        // Calculate the grid starting point
        let (rect_min, _) = ui.allocate_exact_size(
            egui::vec2(CELL_SIZE * shape.cols as f32, CELL_SIZE * shape.rows as f32),
            egui::Sense::hover(),
        );

        let painter = ui.painter();
        for (row_index, row) in cells.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let pos = rect_min.min + egui::vec2(col_index as f32 * CELL_SIZE, row_index as f32 * CELL_SIZE);

                let color = if cell.is_alive() {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::DARK_GRAY
                };

                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(CELL_SIZE, CELL_SIZE)),
                    CELL_SIZE / 4f32,
                    color,
                );
            }
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                ui.horizontal(|ui| {
                    ui.add(egui::Slider::new(&mut self.next_p, 0.0..=1.0).text("p"));
                    if ui.button("Randomize").clicked() {
                        self.randomize();
                    }
                    ui.selectable_value(&mut self.buffer, Buffer::Visible, "visible");
                    ui.selectable_value(&mut self.buffer, Buffer::Hidden, "hidden");
                });

                self.create_grid(ui);
            });
        });
    }
}
