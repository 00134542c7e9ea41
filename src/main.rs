use {
  crate::{
    app::App,
    arguments::Arguments,
    counts::{Counts, Label, Row},
    error::Error,
    invocation::Invocation,
    metric::{Metric, MetricSet},
    source::{FileSystem, Source},
  },
  clap::Parser,
  std::{
    collections::BTreeSet,
    env,
    ffi::OsString,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Read, Write},
    iter, process,
  },
};

mod app;
mod arguments;
mod counts;
mod error;
mod invocation;
mod metric;
mod source;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  pretty_env_logger::init();

  if let Err(error) = Arguments::from_env().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
