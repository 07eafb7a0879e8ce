mod app;
mod logging;
mod notes;
mod util;

use std::path::PathBuf;

use clap::Parser;

use crate::notes::spelling::WordList;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Extra dictionary words for the spellcheck highlight, one per line,
    /// appended to the built-in list.
    #[arg(long)]
    wordlist: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    logging::init();

    let word_list = match &args.wordlist {
        Some(path) => match WordList::with_extra_file(path) {
            Ok(list) => list,
            Err(error) => {
                log::error!("event=wordlist_failed error={error:#}");
                eprintln!("notemap: {error:#}");
                std::process::exit(2);
            }
        },
        None => WordList::builtin(),
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "notemap",
        options,
        Box::new(move |cc| Ok(Box::new(app::NoteMapApp::new(cc, word_list)))),
    )
}
