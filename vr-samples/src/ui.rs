//! User facing state of a sample: transient status messages, the
//! presentation toggle button and the "presenting" notice. The samples
//! render this by logging; tests assert on it directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// A status message, optionally auto dismissed at `expires_at_ms` on the
/// frame clock.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    pub expires_at_ms: Option<f64>,
}

pub struct SampleUi {
    messages: Vec<StatusMessage>,
    button_label: Option<String>,
    presenting_message_visible: bool,
    now_ms: f64,
}

impl SampleUi {
    pub fn new() -> SampleUi {
        SampleUi {
            messages: Vec::new(),
            button_label: None,
            presenting_message_visible: false,
            now_ms: 0.0,
        }
    }

    /// Shows an info message, auto dismissed after `timeout_ms` if given.
    pub fn add_info(&mut self, text: &str, timeout_ms: Option<f64>) {
        info!("{}", text);
        self.push_message(StatusLevel::Info, text, timeout_ms);
    }

    /// Shows an error message, auto dismissed after `timeout_ms` if given.
    pub fn add_error(&mut self, text: &str, timeout_ms: Option<f64>) {
        error!("{}", text);
        self.push_message(StatusLevel::Error, text, timeout_ms);
    }

    fn push_message(&mut self, level: StatusLevel, text: &str, timeout_ms: Option<f64>) {
        self.messages.push(StatusMessage {
            level,
            text: text.into(),
            expires_at_ms: timeout_ms.map(|timeout| self.now_ms + timeout),
        });
    }

    pub fn add_button(&mut self, label: &str) {
        info!("button available: {}", label);
        self.button_label = Some(label.into());
    }

    pub fn remove_button(&mut self) {
        self.button_label = None;
    }

    pub fn button_label(&self) -> Option<&str> {
        self.button_label.as_deref()
    }

    pub fn set_presenting_message(&mut self, visible: bool) {
        self.presenting_message_visible = visible;
    }

    pub fn presenting_message_visible(&self) -> bool {
        self.presenting_message_visible
    }

    /// Advances the frame clock and dismisses expired messages.
    pub fn update(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        self.messages.retain(|message| match message.expires_at_ms {
            Some(expires_at) => expires_at > now_ms,
            None => true,
        });
    }

    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    pub fn has_error(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.level == StatusLevel::Error)
    }
}

impl Default for SampleUi {
    fn default() -> SampleUi {
        SampleUi::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_messages_expire_on_the_frame_clock() {
        let mut ui = SampleUi::new();
        ui.add_info("stage missing", Some(3000.0));
        assert_eq!(ui.messages().len(), 1);

        ui.update(2999.0);
        assert_eq!(ui.messages().len(), 1);
        ui.update(3000.0);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn untimed_messages_persist() {
        let mut ui = SampleUi::new();
        ui.add_error("no display support", None);
        ui.update(1.0e9);
        assert_eq!(ui.messages().len(), 1);
        assert!(ui.has_error());
    }

    #[test]
    fn timeouts_are_relative_to_the_current_frame_clock() {
        let mut ui = SampleUi::new();
        ui.update(5000.0);
        ui.add_info("late message", Some(2000.0));
        ui.update(6999.0);
        assert_eq!(ui.messages().len(), 1);
        ui.update(7001.0);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn button_swaps_label() {
        let mut ui = SampleUi::new();
        assert_eq!(ui.button_label(), None);
        ui.add_button("Enter VR");
        assert_eq!(ui.button_label(), Some("Enter VR"));
        ui.remove_button();
        ui.add_button("Exit VR");
        assert_eq!(ui.button_label(), Some("Exit VR"));
    }
}
