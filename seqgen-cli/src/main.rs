//! Command-line interface for seqgen
//! This binary turns sequence expressions into values, previews them, and writes them into files.
//!
//! Usage:
//!   seqgen parse `<expr>` [--format debug|json]                 - Show how an expression parses
//!   seqgen preview `<expr>` [--count `<n>`]                       - Print the live preview line
//!   seqgen generate `<expr>` --count `<n>` [--separator `<s>`]    - Print the first n values
//!   seqgen fill `<expr>` `<path>` [--marker `<m>` | --target `<l:c>`...] [--in-place]
//!
//! Global options: --config `<file>` layers a TOML file over the defaults, --alphabet `<letters>`
//! replaces the configured alphabet. Set `SEQGEN_LOG=debug` to see why an expression is rejected.

mod commands;
mod logging;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use commands::{CliError, Targets, PARSE_FORMATS};
use seqgen_config::{ConfigError, Loader};
use seqgen_core::seq::creator::SequenceCreator;

fn expression_arg() -> Arg {
    Arg::new("expression")
        .help("Sequence expression, e.g. 01+2, aa+2, 1+2:0>2, 2!")
        .required(true)
        .allow_hyphen_values(true)
        .index(1)
}

fn cli() -> Command {
    Command::new("seqgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate numeric and alphabetic sequences from short expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("alphabet")
                .long("alphabet")
                .global(true)
                .help("Letters used by alphabetic sequences, in order"),
        )
        .subcommand(
            Command::new("parse")
                .about("Show how an expression is understood")
                .arg(expression_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(PARSE_FORMATS.to_vec())
                        .default_value("debug"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the preview line shown while typing")
                .arg(expression_arg())
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .value_parser(value_parser!(usize))
                        .help("Values to show before the ellipsis (default from config)"),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Print the first values of the sequence")
                .arg(expression_arg())
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .short('s')
                        .default_value("\n"),
                ),
        )
        .subcommand(
            Command::new("fill")
                .about("Write the sequence into a file, one value per target")
                .arg(expression_arg())
                .arg(
                    Arg::new("path")
                        .help("File to fill, or - for stdin")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("marker")
                        .long("marker")
                        .short('m')
                        .help("Text marking each target (default from config)"),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .action(ArgAction::Append)
                        .conflicts_with("marker")
                        .help("Zero-based LINE:COLUMN or LINE:COLUMN..LINE:COLUMN, repeatable"),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .short('i')
                        .action(ArgAction::SetTrue)
                        .help("Rewrite the file instead of printing the result"),
                ),
        )
}

fn main() {
    logging::init();
    let matches = cli().get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        unreachable!("clap enforces a subcommand");
    };
    let (creator, marker) = load_creator(sub).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    match run(name, sub, &creator, &marker) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the creator and default fill marker from defaults, `--config` and `--alphabet`.
fn load_creator(matches: &ArgMatches) -> Result<(SequenceCreator, String), ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(letters) = matches.get_one::<String>("alphabet") {
        loader = loader.set_override("alphabet.letters", letters.as_str())?;
    }
    let config = loader.build()?;
    let creator = config.creator()?;
    Ok((creator, config.fill.marker))
}

fn run(
    name: &str,
    matches: &ArgMatches,
    creator: &SequenceCreator,
    default_marker: &str,
) -> Result<String, CliError> {
    let expression = matches
        .get_one::<String>("expression")
        .map(String::as_str)
        .unwrap_or_default();

    match name {
        "parse" => {
            let format = matches
                .get_one::<String>("format")
                .map_or("debug", String::as_str);
            commands::parse(creator, expression, format)
        }
        "preview" => {
            let count = matches.get_one::<usize>("count").copied();
            commands::preview(creator, expression, count)
        }
        "generate" => {
            let count = matches.get_one::<usize>("count").copied().unwrap_or_default();
            let separator = matches
                .get_one::<String>("separator")
                .map_or("\n", String::as_str);
            commands::generate(creator, expression, count, separator)
        }
        "fill" => {
            let path = matches
                .get_one::<String>("path")
                .map_or("-", String::as_str);
            let targets = match matches.get_many::<String>("target") {
                Some(specs) => Targets::Explicit(
                    specs
                        .map(|spec| commands::parse_target(spec))
                        .collect::<Result<_, _>>()?,
                ),
                None => Targets::Marker(
                    matches
                        .get_one::<String>("marker")
                        .map_or(default_marker, String::as_str),
                ),
            };
            let in_place = matches.get_flag("in-place");
            commands::fill(creator, expression, path, targets, in_place)
        }
        other => unreachable!("unknown subcommand {other}"),
    }
}
