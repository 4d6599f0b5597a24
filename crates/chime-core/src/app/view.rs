impl<IN, PL> NavigatorApp<IN, PL>
where
    IN: InputProvider,
    PL: Speaker + EntropySource + Backlight + DelayNs,
{
    pub fn new(
        input: IN,
        mut platform: PL,
        mut config: NavigatorConfig,
        app_title: &'static str,
    ) -> Self {
        config.redraw_period_ms = config.redraw_period_ms.max(1);
        config.tone_volume = config.tone_volume.clamp(0.0, 1.0);

        platform.set_backlight_enforced(true);

        Self {
            input,
            platform,
            config,
            app_title,
            ui: UiState::Menu,
            menu_cursor: 0,
            timer: None,
            events: Deque::new(),
            pending_redraw: true,
            exit_requested: false,
        }
    }

    pub fn active_screen(&self) -> ScreenId {
        match self.ui {
            UiState::Menu => ScreenId::Menu,
            UiState::Start => ScreenId::Start,
            UiState::About { .. } => ScreenId::About,
        }
    }

    pub fn with_screen<F>(&mut self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        match self.ui {
            UiState::Menu => {
                let mut items = [MenuItemView::default(); MENU_ENTRY_COUNT];
                for (slot, entry) in items.iter_mut().zip(MENU_ENTRIES.iter()) {
                    *slot = MenuItemView { label: entry.label };
                }
                f(Screen::Menu {
                    title: self.app_title,
                    items: &items,
                    cursor: self.menu_cursor as usize,
                });
            }
            UiState::Start => {
                // Sampled when the frame is built, not when the redraw tick fires.
                let random = self.platform.random_byte();
                f(Screen::Start {
                    prompt: START_PROMPT,
                    random,
                });
            }
            UiState::About { scroll } => {
                f(Screen::About {
                    text: ABOUT_TEXT,
                    scroll,
                    line_total: about_line_total(),
                });
            }
        }
    }
}
