impl<IN, PL> NavigatorApp<IN, PL>
where
    IN: InputProvider,
    PL: Speaker + EntropySource + Backlight + DelayNs,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("input: provider error, dropping poll");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match self.ui {
            UiState::Menu => self.apply_menu_input(event, now_ms),
            UiState::Start => self.apply_start_input(event),
            UiState::About { scroll } => self.apply_about_input(scroll, event),
        }
    }

    fn apply_menu_input(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Up => {
                self.menu_cursor = select_prev(self.menu_cursor);
                self.pending_redraw = true;
            }
            InputEvent::Down => {
                self.menu_cursor = select_next(self.menu_cursor, MENU_ENTRY_COUNT as u8);
                self.pending_redraw = true;
            }
            InputEvent::Ok => {
                let entry = MENU_ENTRIES[self.menu_cursor as usize];
                self.select_menu_entry(entry.id, now_ms);
            }
            InputEvent::Back => {
                debug!("nav: back on menu, exit requested");
                self.exit_requested = true;
            }
        }
    }

    fn apply_start_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Ok => self.send_custom_event(CustomEvent::ConfirmPressed),
            InputEvent::Back => self.enter_menu(),
            // The start screen only reacts to OK and back.
            InputEvent::Up | InputEvent::Down => {}
        }
    }

    fn apply_about_input(&mut self, scroll: u16, event: InputEvent) {
        match event {
            InputEvent::Up => {
                self.ui = UiState::About {
                    scroll: scroll.saturating_sub(1),
                };
                self.pending_redraw = true;
            }
            InputEvent::Down => {
                let max_scroll = about_line_total().saturating_sub(ABOUT_VISIBLE_LINES);
                self.ui = UiState::About {
                    scroll: scroll.saturating_add(1).min(max_scroll),
                };
                self.pending_redraw = true;
            }
            InputEvent::Back => self.enter_menu(),
            InputEvent::Ok => {}
        }
    }
}

#[inline]
fn select_prev(cursor: u8) -> u8 {
    cursor.saturating_sub(1)
}

#[inline]
fn select_next(cursor: u8, item_count: u8) -> u8 {
    if cursor + 1 < item_count { cursor + 1 } else { cursor }
}
