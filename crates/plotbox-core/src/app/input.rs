impl<IN, LM, RG> PlotterApp<IN, LM, RG>
where
    IN: InputProvider,
    LM: LedMatrix,
    RG: RgbIndicator,
{
    /// Returns `false` when the provider failed and the rest of the tick's input is skipped.
    fn process_buttons(&mut self, now_ms: u64) -> bool {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    if self.accept_press(event, now_ms) {
                        self.apply_button(event);
                    }
                }
                Ok(None) => return true,
                Err(_) => {
                    warn!("ui-input: poll failed screen={}", self.screen_kind().label());
                    return false;
                }
            }
        }
    }

    /// One debounce clock shared by every button.
    fn accept_press(&mut self, event: InputEvent, now_ms: u64) -> bool {
        if let Some(last) = self.last_press_ms {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < u64::from(self.config.debounce_ms) {
                trace!(
                    "ui-input: debounce drop button={} elapsed_ms={}",
                    event.label(),
                    elapsed
                );
                return false;
            }
        }

        self.last_press_ms = Some(now_ms);
        true
    }

    fn apply_button(&mut self, event: InputEvent) {
        match (self.ui, event) {
            (UiState::Menu, InputEvent::Confirm) => self.enter_parameter_entry(),
            (UiState::ParameterEntry { index }, InputEvent::Confirm) => {
                let next = usize::from(index) + 1;
                if next < self.plot.kind().arity() {
                    self.ui = UiState::ParameterEntry { index: next as u8 };
                    self.pending_redraw = true;
                    debug!(
                        "ui-entry: next coefficient={} index={}",
                        COEFFICIENT_NAMES[next], next
                    );
                } else {
                    self.enter_plot();
                }
            }
            (UiState::ParameterEntry { index }, InputEvent::Increment) => {
                self.step_coefficient(usize::from(index), self.config.coefficient_step);
            }
            (UiState::ParameterEntry { index }, InputEvent::Decrement) => {
                self.step_coefficient(usize::from(index), -self.config.coefficient_step);
            }
            (UiState::PlotView, InputEvent::Confirm) => {
                if self.plot.kind() == FunctionKind::Quadratic {
                    self.enter_quadratic_summary();
                } else {
                    self.enter_menu();
                }
            }
            (UiState::QuadraticSummary, InputEvent::Confirm) => self.enter_menu(),
            (ui, event) => {
                trace!("ui-input: ignored button={} state={:?}", event.label(), ui);
            }
        }
    }

    fn step_coefficient(&mut self, index: usize, delta: f32) {
        if self.plot.adjust_coefficient(index, delta) {
            self.pending_redraw = true;
            debug!(
                "ui-entry: adjust coefficient={} value={:.2}",
                COEFFICIENT_NAMES[index],
                self.plot.coefficient(index).unwrap_or_default()
            );
        }
    }

    /// Samples the stick in the two screens that react to it.
    fn process_axis(&mut self, now_ms: u64) {
        if !matches!(self.ui, UiState::Menu | UiState::PlotView) {
            return;
        }
        if now_ms < self.axis_ready_at_ms {
            return;
        }

        let sample = match self.input.sample_axis() {
            Ok(sample) => sample,
            Err(_) => {
                warn!("ui-input: axis read failed screen={}", self.screen_kind().label());
                return;
            }
        };

        let intent = axis_intent(
            sample,
            self.config.axis_center,
            self.config.dead_zone,
            self.config.axis_inverted,
        );

        let Some(intent) = intent else {
            if self.ui == UiState::Menu {
                self.clear_matrix();
            }
            return;
        };

        match self.ui {
            UiState::Menu => self.apply_menu_intent(intent),
            UiState::PlotView => self.apply_plot_intent(intent),
            UiState::ParameterEntry { .. } | UiState::QuadraticSummary => return,
        }

        self.axis_ready_at_ms = now_ms.saturating_add(u64::from(self.config.axis_cooldown_ms));
    }

    fn apply_menu_intent(&mut self, intent: AxisIntent) {
        let current = self.plot.kind();
        let (arrow, target) = match intent {
            AxisIntent::Up => (Arrow::Up, current.previous()),
            AxisIntent::Down => (Arrow::Down, current.next()),
        };

        self.show_arrow(arrow);
        if let Some(kind) = target {
            self.plot.set_kind(kind);
            debug!(
                "ui-menu: select function={} index={}",
                kind.name(),
                kind.index()
            );
        }

        self.pending_redraw = true;
        self.show_selection_colours();
    }

    fn apply_plot_intent(&mut self, intent: AxisIntent) {
        let factor = match intent {
            AxisIntent::Up => self.config.zoom_factor,
            AxisIntent::Down => 1.0 / self.config.zoom_factor,
        };

        let changed = self
            .plot
            .scale_zoom(factor, self.config.min_zoom, self.config.max_zoom);
        debug!(
            "ui-plot: zoom {} zoom={:.2} changed={}",
            if matches!(intent, AxisIntent::Up) { "in" } else { "out" },
            self.plot.zoom(),
            changed
        );

        self.pending_redraw = true;
        self.show_zoom_brightness();
    }
}
