// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Main menu loop. Dispatches to the module handlers and guards each run:
// whatever a handler returns as an error is reported and the user goes back
// to the menu. Only console failures end the loop early.

use std::io::{BufRead, Write};

use imageprep_core::error::{PrepError, Result};
use imageprep_core::human_errors::humanize_error;
use imageprep_core::{AppConfig, MenuChoice};
use tracing::{info, warn};

use crate::console::Console;
use crate::handlers;
use crate::services::toolkit::Toolkit;

pub struct MenuLoop<'a, R, W> {
    console: Console<R, W>,
    toolkit: &'a dyn Toolkit,
    config: AppConfig,
}

impl<'a, R: BufRead, W: Write> MenuLoop<'a, R, W> {
    pub fn new(console: Console<R, W>, toolkit: &'a dyn Toolkit, config: AppConfig) -> Self {
        Self {
            console,
            toolkit,
            config,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_main_menu()?;
            let choice = match self.console.prompt("\nEnter your choice (1-4): ") {
                Ok(choice) => choice,
                Err(PrepError::InputClosed) => return self.farewell(),
                Err(err) => return Err(err),
            };

            let module = match MenuChoice::from_key(&choice) {
                Some(MenuChoice::Exit) => return self.farewell(),
                Some(module) => module,
                None => {
                    self.console
                        .say("Invalid choice. Please select 1, 2, 3, or 4.")?;
                    continue;
                }
            };

            info!(?module, "Running module");
            match self.run_module(module) {
                Ok(()) => {}
                Err(PrepError::InputClosed) => return self.farewell(),
                Err(err @ PrepError::Io(_)) => return Err(err),
                Err(err) => self.report(&err)?,
            }

            self.console.say("")?;
            self.console.rule('-', self.config.rule_width)?;
            let answer = match self.console.prompt("Run another module? (y/n): ") {
                Ok(answer) => answer.to_lowercase(),
                Err(PrepError::InputClosed) => return self.farewell(),
                Err(err) => return Err(err),
            };
            if answer == "n" || answer == "no" {
                return self.farewell();
            }
        }
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    fn run_module(&mut self, module: MenuChoice) -> Result<()> {
        match module {
            MenuChoice::ColorConversion => handlers::color::run(&mut self.console, self.toolkit),
            MenuChoice::NoiseReduction => {
                handlers::noise::run(&mut self.console, self.toolkit, &self.config)
            }
            MenuChoice::Resize => handlers::resize::run(&mut self.console, self.toolkit),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn report(&mut self, err: &PrepError) -> Result<()> {
        let human = humanize_error(err);
        warn!(error = %err, severity = ?human.severity, "Module failed");
        self.console
            .say(&format!("\nUnexpected error: {}", human.message))?;
        self.console.say(&human.suggestion)?;
        self.console.say("Returning to main menu...")
    }

    fn display_main_menu(&mut self) -> Result<()> {
        let width = self.config.rule_width;
        self.console.say("")?;
        self.console.rule('=', width)?;
        self.console.say("IMAGE PREPROCESSING TOOLKIT")?;
        self.console.rule('=', width)?;
        self.console.say("\nSelect which preprocessing module to run:")?;
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console
                .say(&format!("{}. {}", idx + 1, choice.label()))?;
        }
        self.console.rule('=', width)
    }

    fn farewell(&mut self) -> Result<()> {
        let width = self.config.rule_width;
        self.console.say("")?;
        self.console.rule('=', width)?;
        self.console
            .say("Thank you for using Image Preprocessing Toolkit!")?;
        self.console.rule('=', width)?;
        info!("Exiting");
        Ok(())
    }
}
