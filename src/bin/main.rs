//! # Demonstration
//!
//! Shuffles a corpus of sample strings, sorts it with the case-sensitive and
//! then the case-insensitive wide comparator, and prints both results. The
//! built-in corpus can be replaced by a file with one entry per line.
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::process::exit;

use clap::{App, Arg};
use itertools::Itertools;
use rand::seq::SliceRandom;

use natural_order::compare_ignore_case_wide;
use natural_order::compare_wide;

/// Sample corpus: signed and zero-padded numbers, hex-looking prefixes, words
/// with embedded numbers, numbered duplicates, and a listing that a plain
/// lexicographic sort famously garbles.
const SAMPLE: [&str; 61] = [
    "0x01",
    "0x02",
    "0xaf",
    "10x01",
    "9x01",
    "-10",
    "-1",
    "1",
    "01",
    "001",
    "0001",
    "0000001",
    "0000000001",
    "0000000000001",
    "000000000000000000001",
    "01",
    "0000000000001",
    "10",
    "2",
    "hallow-1",
    "hallow1",
    "hallow10",
    "hallow-10",
    "hallow2",
    "hallow-1foo",
    "hallow1foo",
    "hallow109xfoo",
    "hallow109",
    "hallow109",
    "hallow109zfoo",
    "hallow10zfoo",
    "hallow10foobar",
    "hallow10foo",
    "hallow-10foo",
    "hallow2foo",
    "bar-1foo",
    "BAR0foo",
    "bar1foo",
    "bar10foo",
    "bar-10foo",
    "bar101foo",
    "bar100foo",
    "bar200foo",
    "bar20foo",
    "bar2foo",
    "44",
    "44 (1)",
    "44 (2)",
    "44 (3)",
    "44(4)",
    "44(5)",
    "z24",
    "z2",
    "z15",
    "z1",
    "z3",
    "z20",
    "z5",
    "z11",
    "z 21",
    "z22",
];

/// Failure to load a corpus from a file.
#[derive(Debug)]
enum Load {
    IO(io::Error),
}

/// Read a corpus with one entry per line.
fn read_corpus(path: &Path) -> Result<Vec<String>, Load> {
    let mut text = String::new();
    File::open(path)
        .map_err(Load::IO)?
        .read_to_string(&mut text)
        .map_err(Load::IO)?;

    Ok(text.lines().map(String::from).collect())
}

fn main() {
    let matches = App::new("natural-order")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sorts a sample corpus, or a file of lines, in natural order")
        .arg(Arg::new("input")
            .help("File with one entry per line; the built-in corpus is used when absent")
            .takes_value(true))
        .get_matches();

    let mut corpus = match matches.value_of("input") {
        Some(path) => match read_corpus(Path::new(path)) {
            Ok(corpus) => corpus,
            Err(Load::IO(error)) => {
                eprintln!("Could not read \"{}\": {}", path, error);
                exit(1);
            },
        },
        None => SAMPLE.iter().map(|&entry| String::from(entry)).collect(),
    };

    let mut rng = rand::thread_rng();

    println!("case-sensitive:");
    corpus.shuffle(&mut rng);
    for entry in corpus.iter().sorted_by(|s1, s2| compare_wide(s1, s2)) {
        println!("\t{}", entry);
    }

    println!();

    println!("case-insensitive:");
    corpus.shuffle(&mut rng);
    for entry in corpus.iter().sorted_by(|s1, s2| compare_ignore_case_wide(s1, s2)) {
        println!("\t{}", entry);
    }
}
