//! Command handlers for the baccaroad CLI.
//!
//! Each command lives in its own file and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>` taking its output
//! streams as `&mut dyn Write`. Commands that talk to the backend go through
//! [`Session`], which owns a single-threaded runtime and the page controllers.

mod add;
mod cfg;
mod clear;
mod point;
mod predict;
mod road;
mod shoe;
mod train;

pub use add::handle_add_command;
pub use cfg::handle_cfg_command;
pub use clear::handle_clear_command;
pub use point::handle_point_command;
pub use predict::handle_predict_command;
pub use road::handle_road_command;
pub use shoe::handle_new_shoe_command;
pub use train::handle_train_command;

use std::future::Future;
use std::io::Write;

use baccaroad_engine::road_map::RoadMapGrid;
use baccaroad_web::{ClientSettings, Pages};

use crate::error::CliError;
use crate::ui;

pub(crate) struct Session {
    runtime: tokio::runtime::Runtime,
    pages: Pages,
    settings: ClientSettings,
}

impl Session {
    pub(crate) fn open(settings: ClientSettings) -> Result<Self, CliError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let pages = Pages::connect(&settings).map_err(|e| CliError::Config(e.to_string()))?;
        Ok(Self {
            runtime,
            pages,
            settings,
        })
    }

    pub(crate) fn pages(&self) -> &Pages {
        &self.pages
    }

    pub(crate) fn grid(&self) -> Result<RoadMapGrid, CliError> {
        Ok(RoadMapGrid::new(self.settings.rows, self.settings.cols)?)
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Print and dismiss everything the controllers raised.
    pub(crate) fn flush_notifications(
        &self,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), CliError> {
        let notifier = self.pages.notifier();
        for notification in notifier.active() {
            ui::write_notification(out, err, &notification)?;
            notifier.dismiss(notification.id);
        }
        Ok(())
    }
}
