impl<IN, PL> NavigatorApp<IN, PL>
where
    IN: InputProvider,
    PL: Speaker + EntropySource + Backlight + DelayNs,
{
    /// One pass of the host dispatch loop: drain input, step the redraw
    /// schedule, dispatch queued events, and report whether a repaint or
    /// an exit is due.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        if self.exit_requested {
            return TickResult::Exit;
        }

        let timer_fired = match self.timer.as_mut() {
            Some(timer) => timer.poll(now_ms),
            None => false,
        };
        if timer_fired {
            self.send_custom_event(CustomEvent::RedrawRequested);
        }

        self.dispatch_custom_events();

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn send_custom_event(&mut self, event: CustomEvent) {
        if self.events.push_back(event).is_err() {
            debug_assert!(false, "custom event queue overflow");
        }
    }

    fn dispatch_custom_events(&mut self) {
        while let Some(event) = self.events.pop_front() {
            if !matches!(self.ui, UiState::Start) {
                // Only the start screen registers a custom-event handler.
                debug!("event: {:?} dropped outside start screen", event);
                continue;
            }
            match event {
                CustomEvent::RedrawRequested => self.pending_redraw = true,
                CustomEvent::ConfirmPressed => self.play_tone(),
            }
        }
    }

    /// acquire → start → hold → stop → release, all within this handler.
    /// A busy speaker skips playback; the press still counts as handled.
    fn play_tone(&mut self) {
        let window_ms = self.config.speaker_window_ms;
        let Some(mut grant) = SpeakerGrant::acquire(&mut self.platform, window_ms) else {
            debug!("tone: speaker busy, skipping burst");
            return;
        };
        grant.start(self.config.tone_frequency_hz, self.config.tone_volume);
        grant.sustain_ms(self.config.tone_duration_ms);
        grant.stop();
    }
}
