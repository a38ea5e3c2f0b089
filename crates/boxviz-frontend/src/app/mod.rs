//! Main application

use boxviz_core::Scene;

use crate::config::AppConfig;
use crate::panels::ViewportPanel;
use crate::state::{UiState, ViewportState};
use crate::theme::apply_theme;

/// Prism visualizer application
pub struct BoxVizApp {
    viewport_state: Option<ViewportState>,
    viewport_panel: ViewportPanel,
    ui_state: UiState,
    scene: Scene,
    config: AppConfig,
}

impl BoxVizApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        apply_theme(&cc.egui_ctx);

        // Create viewport state if WGPU is available
        let viewport_state = cc.wgpu_render_state.as_ref().map(|render_state| {
            let device = render_state.device.clone();
            let queue = render_state.queue.clone();
            let format = render_state.target_format;

            let mut state = ViewportState::new(device, queue, format);
            state.renderer.apply_config(&config.renderer);
            state
        });

        if viewport_state.is_none() {
            tracing::warn!("No wgpu render state; the viewport will not be drawn");
        }

        Self {
            viewport_state,
            viewport_panel: ViewportPanel::new(),
            ui_state: UiState::new(),
            scene: config.scene,
            config,
        }
    }
}

impl eframe::App for BoxVizApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        let render_state = frame.wgpu_render_state();

        let Self {
            viewport_state,
            viewport_panel,
            ui_state,
            scene,
            ..
        } = self;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match (render_state, viewport_state.as_mut()) {
                (Some(render_state), Some(viewport_state)) => viewport_panel
                    .ui_with_render_context(
                        ui,
                        render_state,
                        viewport_state,
                        ui_state,
                        scene,
                        &events,
                    ),
                _ => viewport_panel.ui(ui),
            });

        ctx.request_repaint_after(self.config.frame_interval());
    }
}
