use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use cnf::grammar::{
    ContextFreeGrammar, Conversion, ConversionOptions, Grammar, GrammarBuilder, GrammarError,
    StartErasure,
};
use log::info;

const SAMPLES: [&str; 5] = ["sample", "erasing", "units", "long", "parentheses"];

fn sample_grammar(name: &str) -> Result<ContextFreeGrammar, GrammarError> {
    let builder = match name {
        "erasing" => GrammarBuilder::new("S")
            .terminals(["a", "b"])
            .production("S", &["A", "B"])
            .production("A", &["a"])
            .erasing_production("A")
            .production("B", &["b"])
            .erasing_production("B"),
        "units" => GrammarBuilder::new("S")
            .terminals(["a", "b", "c", "d"])
            .production("S", &["A"])
            .production("S", &["a"])
            .production("A", &["B"])
            .production("A", &["b"])
            .production("B", &["C"])
            .production("B", &["c"])
            .production("C", &["D"])
            .production("D", &["d"]),
        "long" => GrammarBuilder::new("S")
            .terminals(["a", "b", "c", "d"])
            .production("S", &["A", "b", "C", "D"])
            .production("A", &["a"])
            .production("C", &["c"])
            .production("D", &["d"]),
        "parentheses" => GrammarBuilder::new("S")
            .terminals(["(", ")"])
            .production("S", &["(", "S", ")", "S"])
            .erasing_production("S"),
        _ => GrammarBuilder::new("S")
            .terminals(["a", "b"])
            .production("S", &["A", "B"])
            .production("S", &["B", "C"])
            .production("A", &["B", "A"])
            .production("A", &["a"])
            .production("B", &["C", "C"])
            .production("B", &["b"])
            .erasing_production("B")
            .production("C", &["A", "B"])
            .production("C", &["a"]),
    };

    builder.build()
}

fn command() -> Command {
    Command::new("cnf-demo")
        .about("converts sample context-free grammars to Chomsky normal form")
        .arg(
            Arg::new("grammar")
                .help("sample grammar to convert")
                .value_parser(SAMPLES)
                .default_value("sample")
                .index(1),
        )
        .arg(
            Arg::new("drop-start-epsilon")
                .help("drop S → ε even when the start symbol is nullable")
                .long("drop-start-epsilon")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stages")
                .help("print every intermediate grammar")
                .long("stages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .help("print the size of the grammar after each stage")
                .long("summary")
                .action(ArgAction::SetTrue),
        )
}

fn options(matches: &ArgMatches) -> ConversionOptions {
    let start_erasure = if matches.get_flag("drop-start-epsilon") {
        StartErasure::Drop
    } else {
        StartErasure::Retain
    };

    ConversionOptions::new().start_erasure(start_erasure)
}

fn run(matches: &ArgMatches) -> Result<(), GrammarError> {
    let name = matches
        .get_one::<String>("grammar")
        .map(String::as_str)
        .unwrap_or("sample");

    let cfg = sample_grammar(name)?;
    info!("converting sample grammar `{name}`");

    let conversion = Conversion::run(&cfg, &options(matches))?;

    if matches.get_flag("stages") {
        for (stage, grammar) in conversion.stages() {
            println!("{stage}:\n{}", grammar.listing());
        }
    } else {
        println!("Context-free grammar:\n{}", cfg.definition());
    }

    println!("Chomsky normal form:\n{}", conversion.cnf.definition());

    if matches.get_flag("summary") {
        println!("{}", conversion.summary());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
