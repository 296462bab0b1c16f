//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::{self, Write};
use std::process::exit;

use huffcode::tools::cli::{huffopts_init, read_word};
use huffcode::tools::report::write_report;
use huffcode::{Codebook, Error};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Error> {
    // Logs go to stderr so the tables on stdout stay clean.
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let opts = huffopts_init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let word = read_word(&opts, &mut stdin.lock(), &mut stdout.lock())?;
    let symbols = word.chars().collect::<Vec<char>>();

    let book = match Codebook::new(&symbols) {
        Ok(book) => book,
        Err(Error::EmptyInput) => {
            error!("Nothing to encode: the word is empty.");
            exit(1);
        }
        Err(e) => return Err(e),
    };

    let mut out = stdout.lock();
    if opts.word.is_none() {
        // finish the prompt line
        writeln!(out)?;
    }
    write_report(&mut out, &symbols, &book, opts.show_tree)?;

    info!("Done.");
    Ok(())
}
