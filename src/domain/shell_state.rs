use super::contact::ContactId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    open_contact: Option<ContactId>,
    notice: Option<Notice>,
    revision: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            open_contact: None,
            notice: None,
            revision: 0,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn open_contact(&self) -> Option<&ContactId> {
        self.open_contact.as_ref()
    }

    pub fn open(&mut self, contact_id: ContactId) {
        self.open_contact = Some(contact_id);
        self.touch();
    }

    pub fn close(&mut self) {
        self.open_contact = None;
        self.touch();
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_notice(NoticeLevel::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_notice(NoticeLevel::Error, text.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Bumped on every change the view should pick up.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn touch(&mut self) {
        self.revision += 1;
    }

    fn set_notice(&mut self, level: NoticeLevel, text: String) {
        self.notice = Some(Notice { level, text });
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_runs_with_no_open_contact() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.open_contact(), None);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn open_and_close_bump_revision() {
        let mut state = ShellState::default();

        state.open(ContactId::new("1"));
        assert_eq!(state.open_contact(), Some(&ContactId::new("1")));
        assert_eq!(state.revision(), 1);

        state.close();
        assert_eq!(state.open_contact(), None);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn notices_carry_level() {
        let mut state = ShellState::default();

        state.error("boom");
        assert_eq!(
            state.notice(),
            Some(&Notice {
                level: NoticeLevel::Error,
                text: "boom".to_owned()
            })
        );

        state.clear_notice();
        assert_eq!(state.notice(), None);
    }
}
