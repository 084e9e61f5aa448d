// src/main.rs

//! Entry point: parse the command line, build the polynomial store,
//! rasterize every curve, and write the image.

mod color;
mod config;
mod expr;
mod graph;
mod poly;
mod ppm;
mod rasterizer;

use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use crate::config::{CliArgs, Config};
use crate::expr::parse_polynomial;
use crate::graph::Graph;
use crate::poly::Polynomial;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Help goes to stdout and exits 0; every other argument problem is a
    // configuration error: usage to stderr, exit 1.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            process::exit(0);
        }
        Err(err) => {
            eprint!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = Config::from_args(args);
    debug!("configuration: {:?}", config);

    let polynomials = args
        .equations
        .iter()
        .map(|equation| {
            parse_polynomial(equation, config.parse_mode)
                .with_context(|| format!("could not parse '{equation}'"))
        })
        .collect::<Result<Vec<Polynomial>>>()?;

    let mut graph = Graph::new(config, polynomials);
    rasterizer::draw(&mut graph);

    ppm::write_image(
        &graph.config.output,
        &graph.grid,
        graph.config.foreground,
        graph.config.background,
    )
}
