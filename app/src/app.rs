use std::{io::stdout, sync::Arc, time::Duration};

use anyhow::Result;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        ExecutableCommand, event,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

use crate::{
    api::catalog::{CatalogApi, DEFAULT_BASE_URL},
    screen::{OutgoingMessage, ScreenT, lookup::Model as LookupScreen, resources::Resources},
};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    catalog_api: Arc<CatalogApi>,
    resources: Resources,
}

impl App {
    pub fn new() -> Result<Self> {
        let catalog_api = CatalogApi::new(DEFAULT_BASE_URL)?;

        Ok(Self {
            catalog_api: Arc::new(catalog_api),
            resources: Resources::default(),
        })
    }

    pub async fn run(self) -> Result<()> {
        stdout().execute(EnterAlternateScreen)?;

        let result = match enable_raw_mode() {
            Ok(()) => self.main_loop_in_terminal().await,
            Err(error) => Err(error.into()),
        };

        let restored = disable_raw_mode()
            .and_then(|()| stdout().execute(LeaveAlternateScreen).map(|_| ()));

        result.and(restored.map_err(Into::into))
    }

    async fn main_loop_in_terminal(&self) -> Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.clear()?;

        self.main_loop(&mut terminal).await
    }

    async fn main_loop<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut screen = LookupScreen::new(Arc::clone(&self.catalog_api));

        loop {
            terminal.draw(|frame| screen.render(frame, &self.resources))?;

            let event = if event::poll(EVENT_POLL_INTERVAL)? {
                Some(event::read()?)
            } else {
                None
            };

            if let Some(OutgoingMessage::Exit) = screen.tick(event).await {
                log::info!("Exit requested");
                return Ok(());
            }
        }
    }
}
