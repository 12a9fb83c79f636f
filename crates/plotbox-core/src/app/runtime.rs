impl<IN, LM, RG> PlotterApp<IN, LM, RG>
where
    IN: InputProvider,
    LM: LedMatrix,
    RG: RgbIndicator,
{
    fn enter_menu(&mut self) {
        self.ui = UiState::Menu;
        self.pending_redraw = true;
        self.show_selection_colours();
        debug!("ui-menu: enter function={}", self.plot.kind().name());
    }

    /// Always starts from the first coefficient with every slot zeroed.
    fn enter_parameter_entry(&mut self) {
        self.plot.reset_coefficients();
        self.ui = UiState::ParameterEntry { index: 0 };
        self.pending_redraw = true;
        debug!(
            "ui-entry: enter function={} arity={}",
            self.plot.kind().name(),
            self.plot.kind().arity()
        );
    }

    fn enter_plot(&mut self) {
        self.ui = UiState::PlotView;
        self.pending_redraw = true;
        self.show_zoom_brightness();
        debug!(
            "ui-plot: enter function={} zoom={:.2}",
            self.plot.kind().name(),
            self.plot.zoom()
        );
    }

    fn enter_quadratic_summary(&mut self) {
        self.ui = UiState::QuadraticSummary;
        self.pending_redraw = true;
        debug!("ui-plot: quadratic summary");
    }

    fn show_selection_colours(&mut self) {
        let levels = selection_levels(self.plot.kind());
        if self.rgb.set_levels(levels).is_err() {
            warn!("ui-indicator: rgb update failed levels={:?}", levels);
        }
    }

    fn show_zoom_brightness(&mut self) {
        let levels = zoom_levels(self.plot.kind(), self.plot.zoom());
        if self.rgb.set_levels(levels).is_err() {
            warn!("ui-indicator: rgb update failed levels={:?}", levels);
        }
    }

    fn show_arrow(&mut self, arrow: Arrow) {
        match self.matrix.write_cells(&arrow_cells(arrow, ARROW_COLOR)) {
            Ok(()) => self.matrix_lit = true,
            Err(_) => warn!("ui-indicator: matrix update failed arrow={:?}", arrow),
        }
    }

    /// Switches the matrix off once per rest period.
    fn clear_matrix(&mut self) {
        if !self.matrix_lit {
            return;
        }

        match self.matrix.clear() {
            Ok(()) => {
                self.matrix_lit = false;
                trace!("ui-indicator: matrix off");
            }
            Err(_) => warn!("ui-indicator: matrix clear failed"),
        }
    }
}
