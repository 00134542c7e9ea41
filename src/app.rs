use super::*;

pub(crate) struct App<S, W> {
  invocation: Invocation,
  output: W,
  source: S,
}

impl<S: Source, W: Write> App<S, W> {
  pub(crate) fn new(invocation: Invocation, source: S, output: W) -> Self {
    Self {
      invocation,
      output,
      source,
    }
  }

  fn emit(&mut self, row: Row) -> Result<(), Error> {
    writeln!(self.output, "{row}")
      .and_then(|()| self.output.flush())
      .map_err(|source| Error::Write { source })
  }

  fn measure(&self, name: &str, content: &[u8]) -> Result<Counts, Error> {
    Counts::measure(content, &self.invocation.metrics).map_err(|error| Error::Encoding {
      name: name.into(),
      offset: error.valid_up_to(),
    })
  }

  /// Writes one row per target in order, then a total row when there was
  /// more than one target. Rows already written stay written if a later
  /// target fails.
  pub(crate) fn run(mut self) -> Result<(), Error> {
    log::debug!(
      "metrics: {:?}, targets: {:?}",
      self.invocation.metrics.emitted().collect::<Vec<Metric>>(),
      self.invocation.targets
    );

    if self.invocation.targets.is_empty() {
      let content = self
        .source
        .stdin()
        .map_err(|source| Error::Stdin { source })?;

      let counts = self.measure("standard input", &content)?;

      return self.emit(Row {
        counts: &counts,
        label: Label::Stdin,
      });
    }

    let targets = std::mem::take(&mut self.invocation.targets);

    let mut rows = Vec::with_capacity(targets.len());

    for name in &targets {
      log::debug!("measuring {name}");

      let content = self.source.read(name).map_err(|source| Error::Read {
        name: name.clone(),
        source,
      })?;

      let counts = self.measure(name, &content)?;

      self.emit(Row {
        counts: &counts,
        label: Label::Target(name),
      })?;

      rows.push(counts);
    }

    // Every row shares `self.invocation.metrics`, so there is no total only
    // when there was a single target.
    match Counts::total(&rows) {
      Some(total) => self.emit(Row {
        counts: &total,
        label: Label::Total,
      })?,
      None => debug_assert_eq!(rows.len(), 1),
    }

    Ok(())
  }
}
