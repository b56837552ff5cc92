use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
#[macro_use]
extern crate text_io;

use wordfind::{Alphabet, AlphabetConfig, Lexicon, Rack, SwedishAlphabet};

/// Lists the dictionary words that can be spelled from a set of tiles.
/// Blank tiles are written as '?' or '*'. Letters filled by a blank are
/// printed in lower case.
#[derive(Parser, Debug)]
#[command(name = "wordfind", version)]
struct Args {
    /// Word list with one word per line
    #[arg(short, long)]
    dictionary: PathBuf,
    /// JSON alphabet file, eg. {"letters": "ABC...", "blanks": "?"}. Defaults to Swedish A-Ö
    #[arg(short, long)]
    alphabet: Option<PathBuf>,
    /// Only list words with at least this many letters
    #[arg(long, default_value_t = 1)]
    min_length: usize,
    /// Longest words first, then alphabetical
    #[arg(long)]
    sort: bool,
    /// Tiles to search with. Prompts for tiles when left out
    tiles: Option<String>,
}

fn print_words(
    lexicon: &Lexicon,
    alphabet: &dyn Alphabet,
    tiles: &str,
    args: &Args,
) -> wordfind::Result<()> {
    let mut rack = Rack::from_letters(alphabet, tiles)?;
    let mut matches = lexicon.find_matches(&mut rack)?;
    matches.retain(|m| m.word.chars().count() >= args.min_length);
    if args.sort {
        matches.sort_by(|a, b| {
            b.word
                .chars()
                .count()
                .cmp(&a.word.chars().count())
                .then_with(|| a.word.cmp(&b.word))
        });
    }
    for m in matches.iter() {
        println!("{}", m.marked());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let lexicon = Lexicon::from_file(&args.dictionary)
        .with_context(|| format!("failed to load dictionary {}", args.dictionary.display()))?;

    let alphabet: Box<dyn Alphabet> = match &args.alphabet {
        Some(path) => {
            let config = AlphabetConfig::from_file(path)
                .with_context(|| format!("failed to read alphabet {}", path.display()))?;
            Box::new(config.build()?)
        }
        None => Box::new(SwedishAlphabet),
    };

    if let Some(tiles) = &args.tiles {
        print_words(&lexicon, alphabet.as_ref(), tiles.trim(), &args)?;
        return Ok(());
    }

    loop {
        println!("Enter tiles:");
        let tiles: String = match try_read!("{}\n") {
            Ok(tiles) => tiles,
            Err(_) => break,
        };
        let tiles = tiles.trim();
        if tiles.is_empty() {
            break;
        }
        // A bad rack shouldn't end the session
        if let Err(e) = print_words(&lexicon, alphabet.as_ref(), tiles, &args) {
            eprintln!("{}", e);
        }
    }
    Ok(())
}
