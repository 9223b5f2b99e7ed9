pub mod default_handler;
pub mod routes;

use engine::MatchWindow;
use serde::Deserialize;

/// `?window=` query shared by the analytics endpoints; any value is accepted.
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    pub window: Option<String>,
}

impl WindowQuery {
    pub fn match_window(&self) -> MatchWindow {
        MatchWindow::parse(self.window.as_deref())
    }
}
