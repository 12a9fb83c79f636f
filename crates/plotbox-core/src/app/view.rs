impl<IN, LM, RG> PlotterApp<IN, LM, RG>
where
    IN: InputProvider,
    LM: LedMatrix,
    RG: RgbIndicator,
{
    pub fn new(input: IN, matrix: LM, rgb: RG, config: PlotterConfig) -> Self {
        let config = config.sanitized();

        let mut app = Self {
            input,
            matrix,
            rgb,
            config,
            plot: PlotState::new(FunctionKind::Affine, config.initial_zoom),
            ui: UiState::Menu,
            pending_redraw: true,
            last_press_ms: None,
            axis_ready_at_ms: 0,
            matrix_lit: true,
        };

        app.show_selection_colours();
        app.show_zoom_brightness();
        info!(
            "ui-menu: start function={} zoom={:.2}",
            app.plot.kind().name(),
            app.plot.zoom()
        );

        app
    }

    /// Runs one poll cycle: drains button presses, samples the axis, reports redraws.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.process_buttons(now_ms) {
            self.process_axis(now_ms);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Forces the next tick to request a frame, e.g. after the display was reset.
    pub fn request_redraw(&mut self) {
        self.pending_redraw = true;
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        match self.ui {
            UiState::Menu => f(Screen::Menu {
                title: MENU_TITLE,
                items: &MENU_ITEMS,
                cursor: self.plot.kind().index(),
            }),
            UiState::ParameterEntry { index } => f(Screen::ParameterEntry {
                kind: self.plot.kind(),
                active_index: usize::from(index),
                coefficients: self.plot.coefficients(),
            }),
            UiState::PlotView => f(Screen::Plot {
                function: self.plot.function(),
                zoom: self.plot.zoom(),
                pan_x: self.plot.pan_x(),
            }),
            UiState::QuadraticSummary => match self.plot.function().quadratic_summary() {
                Some(summary) => f(Screen::QuadraticSummary { summary }),
                None => f(Screen::Menu {
                    title: MENU_TITLE,
                    items: &MENU_ITEMS,
                    cursor: self.plot.kind().index(),
                }),
            },
        }
    }

    pub fn screen_kind(&self) -> ScreenKind {
        match self.ui {
            UiState::Menu => ScreenKind::Menu,
            UiState::ParameterEntry { .. } => ScreenKind::ParameterEntry,
            UiState::PlotView => ScreenKind::Plot,
            UiState::QuadraticSummary => ScreenKind::QuadraticSummary,
        }
    }

    pub fn selected_function(&self) -> FunctionKind {
        self.plot.kind()
    }

    pub fn plot_state(&self) -> &PlotState {
        &self.plot
    }

    /// Coefficient being edited, `None` outside parameter entry.
    pub fn active_parameter_index(&self) -> Option<usize> {
        match self.ui {
            UiState::ParameterEntry { index } => Some(usize::from(index)),
            _ => None,
        }
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    pub fn matrix(&self) -> &LM {
        &self.matrix
    }

    pub fn rgb(&self) -> &RG {
        &self.rgb
    }
}
