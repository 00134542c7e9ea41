use super::*;

/// A measurable property of content. Variant order is emission order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Metric {
  Lines,
  Words,
  Bytes,
  Chars,
}

impl Metric {
  pub(crate) fn from_flag(flag: &str) -> Option<Self> {
    match flag {
      "-l" => Some(Self::Lines),
      "-w" => Some(Self::Words),
      "-c" => Some(Self::Bytes),
      "-m" => Some(Self::Chars),
      _ => None,
    }
  }
}

const DEFAULT: &[Metric] = &[Metric::Lines, Metric::Words, Metric::Bytes];

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MetricSet(BTreeSet<Metric>);

impl MetricSet {
  pub(crate) fn contains(&self, metric: Metric) -> bool {
    self.emitted().any(|emitted| emitted == metric)
  }

  /// Metrics in emission order. An empty set emits lines, words and bytes.
  pub(crate) fn emitted(&self) -> impl Iterator<Item = Metric> + '_ {
    let default = if self.0.is_empty() { DEFAULT } else { &[] };

    self.0.iter().chain(default).copied()
  }
}

impl FromIterator<Metric> for MetricSet {
  fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_flag_recognized() {
    assert_eq!(Metric::from_flag("-l"), Some(Metric::Lines));
    assert_eq!(Metric::from_flag("-w"), Some(Metric::Words));
    assert_eq!(Metric::from_flag("-c"), Some(Metric::Bytes));
    assert_eq!(Metric::from_flag("-m"), Some(Metric::Chars));
  }

  #[test]
  fn from_flag_unrecognized() {
    for flag in ["-x", "-", "--lines", "-lw", "l", "-L"] {
      assert_eq!(Metric::from_flag(flag), None, "{flag}");
    }
  }

  #[test]
  fn empty_set_emits_default() {
    let set = MetricSet::default();

    assert_eq!(
      set.emitted().collect::<Vec<Metric>>(),
      vec![Metric::Lines, Metric::Words, Metric::Bytes]
    );

    assert_eq!(set.emitted().count(), 3);
    assert!(!set.contains(Metric::Chars));
  }

  #[test]
  fn emission_order_ignores_selection_order() {
    let set = [Metric::Chars, Metric::Lines, Metric::Bytes, Metric::Words]
      .into_iter()
      .collect::<MetricSet>();

    assert_eq!(
      set.emitted().collect::<Vec<Metric>>(),
      vec![Metric::Lines, Metric::Words, Metric::Bytes, Metric::Chars]
    );
  }

  #[test]
  fn duplicates_collapse() {
    let set = [Metric::Words, Metric::Words, Metric::Chars]
      .into_iter()
      .collect::<MetricSet>();

    assert_eq!(set.emitted().count(), 2);

    assert_eq!(
      set,
      [Metric::Chars, Metric::Words].into_iter().collect::<MetricSet>()
    );
  }
}
