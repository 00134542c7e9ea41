use super::*;

/// Requested metrics plus target names, in command-line order.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Invocation {
  pub(crate) metrics: MetricSet,
  pub(crate) targets: Vec<String>,
}

impl Invocation {
  /// Any argument starting with `-` is a flag, everything else is a target.
  pub(crate) fn resolve<I, S>(arguments: I) -> Result<Self, Error>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let (flags, targets): (Vec<String>, Vec<String>) = arguments
      .into_iter()
      .map(Into::into)
      .partition(|argument| argument.starts_with('-'));

    let mut invalid = flags
      .iter()
      .filter(|flag| Metric::from_flag(flag).is_none())
      .cloned()
      .collect::<Vec<String>>();

    if !invalid.is_empty() {
      invalid.sort();
      invalid.dedup();
      return Err(Error::InvalidOption { options: invalid });
    }

    Ok(Self {
      metrics: flags
        .iter()
        .filter_map(|flag| Metric::from_flag(flag))
        .collect(),
      targets,
    })
  }
}
