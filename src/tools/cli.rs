use clap::Parser;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds the Huffman code of a word and prints it as tables",
    long_about = None)]
pub struct Args {
    /// Word to encode. Read from standard input when omitted
    #[clap()]
    word: Option<String>,

    /// Keep the case of the word instead of uppercasing it
    #[clap(short = 'k', long = "keep-case")]
    keep_case: bool,

    /// Don't print the tree
    #[clap(long = "no-tree")]
    no_tree: bool,

    /// Sets verbosity. -v 0 is silent, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

/// All user settable options
#[derive(Debug)]
pub struct HuffOpts {
    /// Word given on the command line, if any
    pub word: Option<String>,
    /// Leave the input's case alone
    pub keep_case: bool,
    /// Print the tree visualization
    pub show_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            word: None,
            keep_case: false,
            show_tree: true,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        HuffOpts {
            word: args.word,
            keep_case: args.keep_case,
            show_tree: !args.no_tree,
            verbose: Verbosity::from(args.v),
        }
    }
}

/// Parse the command line, set the log level and report the settings.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    match &opts.word {
        Some(w) => info!("Encoding the word {:?}", w),
        None => info!("Reading the word from stdin"),
    }
    if opts.keep_case {
        info!("Keeping the case of the input")
    };
    if !opts.show_tree {
        info!("Tree visualization disabled")
    };
    info!("---- Initialization End ----");
    opts
}

/// Get the word to encode: the command line word if there is one, otherwise one line of
/// `input` after writing a prompt to `prompt`. The line ending is dropped and the word is
/// uppercased unless the options say to keep its case.
pub fn read_word<R: BufRead, W: Write>(
    opts: &HuffOpts,
    input: &mut R,
    prompt: &mut W,
) -> io::Result<String> {
    let raw = match &opts.word {
        Some(w) => w.clone(),
        None => {
            write!(prompt, "Enter the word to encode: ")?;
            prompt.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                warn!("No input on stdin");
            }
            line.trim_end_matches(&['\r', '\n'][..]).to_string()
        }
    };
    Ok(normalize(&raw, opts.keep_case))
}

/// Uppercase `word` unless `keep_case` is set.
pub fn normalize(word: &str, keep_case: bool) -> String {
    if keep_case {
        word.to_string()
    } else {
        word.to_uppercase()
    }
}
