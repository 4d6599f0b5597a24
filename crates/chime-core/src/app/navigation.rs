impl<IN, PL> NavigatorApp<IN, PL>
where
    IN: InputProvider,
    PL: Speaker + EntropySource + Backlight + DelayNs,
{
    /// Menu selection maps to its target screen, independent of history.
    fn select_menu_entry(&mut self, id: MenuId, now_ms: u64) {
        match id {
            MenuId::Start => self.enter_start(now_ms),
            MenuId::About => self.enter_about(),
        }
    }

    fn enter_menu(&mut self) {
        self.leave_current();
        debug!("nav: enter menu cursor={}", self.menu_cursor);
        self.ui = UiState::Menu;
        self.pending_redraw = true;
    }

    fn enter_start(&mut self, now_ms: u64) {
        self.leave_current();
        debug!(
            "nav: enter start period_ms={}",
            self.config.redraw_period_ms
        );
        debug_assert!(self.timer.is_none());
        self.timer = Some(RedrawTimer::new(now_ms, self.config.redraw_period_ms));
        self.ui = UiState::Start;
        self.pending_redraw = true;
    }

    fn enter_about(&mut self) {
        self.leave_current();
        debug!("nav: enter about");
        self.ui = UiState::About { scroll: 0 };
        self.pending_redraw = true;
    }

    /// Exit hook for the screen being left; the start screen is the only
    /// one holding a resource.
    fn leave_current(&mut self) {
        if matches!(self.ui, UiState::Start) {
            debug_assert!(self.timer.is_some());
            self.timer = None;
        }
    }

    /// Reverts the backlight override; the host calls this once `tick`
    /// reports `Exit`.
    pub fn shutdown(&mut self) {
        debug_assert!(self.timer.is_none());
        self.platform.set_backlight_enforced(false);
        debug!("nav: shutdown, backlight override reverted");
    }
}
