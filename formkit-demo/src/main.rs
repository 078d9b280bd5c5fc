//! Registration form demo: validated fields above a sortable,
//! multi-select user table.

mod page;
mod users;

use std::fs::File;
use std::time::Duration;

use celldom::{TermEvent, Terminal};
use formkit::FormkitError;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use page::FormPage;

fn main() {
    let log_file = File::create("formkit-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> Result<(), FormkitError> {
    let mut terminal = Terminal::new()?;
    let mut page = FormPage::new()?;
    info!("form demo started");

    while page.running() {
        page.refresh_validity();

        let buf = terminal.frame()?;
        page.render(buf);
        terminal.flush()?;

        for event in terminal.poll(Some(Duration::from_millis(250)))? {
            match event {
                TermEvent::Key(key) => page.handle_key(&key),
                // The next frame() call picks up the new size.
                TermEvent::Resize(..) => {}
            }
        }
        page.drain_widget_events();
    }

    info!("form demo exiting");
    Ok(())
}
