//! logic-canvas - interactive demo of circuit IO terminals
//!
//! Four terminals, one per direction, with a wire joining two of them.
//! Hover to highlight a region, click to select, drag to move the selection.

use eframe::egui;
use egui::{Pos2, Sense};
use log::{info, warn};
use logic_canvas::circuit::Direction;
use logic_canvas::config::LayoutConfig;
use logic_canvas::constants;
use logic_canvas::editor::CanvasEditor;
use logic_canvas::theme;

struct LogicCanvasApp {
    editor: CanvasEditor,
}

impl LogicCanvasApp {
    fn new(layout: LayoutConfig) -> Self {
        let mut editor = CanvasEditor::new(layout);

        let a = editor.add_terminal("A", Pos2::new(150.0, 300.0), Direction::Right);
        let y = editor.add_terminal("Y", Pos2::new(600.0, 300.0), Direction::Left);
        editor.add_terminal("CLK", Pos2::new(400.0, 120.0), Direction::Bottom);
        editor.add_terminal("RST", Pos2::new(400.0, 480.0), Direction::Top);

        if let Err(e) = editor.connect(a, y) {
            warn!("Failed to create demo wire: {}", e);
        }

        Self { editor }
    }
}

impl eframe::App for LogicCanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            painter.rect_filled(response.rect, 0.0, theme::colors().canvas_background);

            if let Some(pos) = response.hover_pos() {
                self.editor.pointer_moved(pos);
            }

            if response.drag_started() || response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.editor.click(pos);
                }
            }

            if response.dragged() {
                self.editor.drag_selected(response.drag_delta());
            }

            let (curr_time, delta_time) = ctx.input(|i| (i.time, i.stable_dt));
            self.editor.render(&painter, curr_time, delta_time);
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let layout = LayoutConfig::load_or_default();
    info!("Starting logic-canvas with layout {:?}", layout);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(constants::window::DEFAULT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "logic-canvas",
        options,
        Box::new(move |_cc| Ok(Box::new(LogicCanvasApp::new(layout)))),
    )
}
