use std::io;
use std::process::ExitCode;

use log::{error, info};
use rs_chain_core::io::{read_bounded, read_file, INPUT_CEILING};
use rs_chain_core::model::generation_input::GenerationInput;
use rs_chain_core::model::graph_builder::GraphBuilder;
use rs_chain_core::model::walk::render;
use rs_chain_core::token::{tokenize, Token};
use rs_chain_core::{ChainError, Result};

/// Reads text, builds the chain and prints one generated walk.
///
/// Arguments are `key=value` pairs:
/// - `input=<path>`: read this file instead of stdin
/// - `length=<n>`: number of generated tokens (default 50)
/// - `seed=<u64>`: fixed seed for a reproducible walk
/// - `start=first|random|custom:<token>`: first token of the walk
/// - `direction=forward|reverse`: which token of a pair is the edge source
fn run() -> Result<()> {
    let mut input = GenerationInput::new();
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.strip_prefix("input=") {
            Some(p) => path = Some(p.to_owned()),
            None => input.apply_arg(&arg)?,
        }
    }

    // Input is bounded; an empty read is the only user-facing failure
    let text = match path {
        Some(p) => read_file(p)?,
        None => read_bounded(io::stdin().lock(), INPUT_CEILING)?,
    };

    let stream = tokenize(&text);
    info!("{} tokens read", stream.len());
    let first = stream.peek().map(Token::text).transpose()?;

    let chain = GraphBuilder::from_stream(&stream, input.direction)?.freeze();
    if chain.keys().is_empty() {
        return Err(ChainError::NoTransitionableKeys);
    }

    let mut rng = input.rng();
    let words = chain.generate(&input, first, &mut rng)?;
    print!("{}", render(&words));

    chain.release();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
