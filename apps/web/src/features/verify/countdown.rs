/// Cool-down of the send-code button, in whole seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn start(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Advances one second. Returns `true` while the cool-down is still running.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn label(&self, idle: &str) -> String {
        if self.is_running() {
            format!("{} s", self.remaining)
        } else {
            idle.to_string()
        }
    }
}
