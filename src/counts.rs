use {super::*, std::str::Utf8Error};

/// Counts for one content, in the emission order of the set it was measured
/// under.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Counts {
  metrics: MetricSet,
  values: Vec<usize>,
}

#[derive(Debug, Default)]
struct Tally {
  bytes: usize,
  chars: usize,
  lines: usize,
  words: usize,
}

impl Tally {
  fn get(&self, metric: Metric) -> usize {
    match metric {
      Metric::Lines => self.lines,
      Metric::Words => self.words,
      Metric::Bytes => self.bytes,
      Metric::Chars => self.chars,
    }
  }

  fn scan(&mut self, text: &str) {
    let mut chars = text.chars().peekable();
    let mut in_line = false;
    let mut in_word = false;

    while let Some(c) = chars.next() {
      self.chars += 1;

      if is_whitespace(c) {
        in_word = false;
      } else if !in_word {
        self.words += 1;
        in_word = true;
      }

      if is_line_boundary(c) {
        if c == '\r' && chars.peek() == Some(&'\n') {
          chars.next();
          self.chars += 1;
        }

        self.lines += 1;
        in_line = false;
      } else {
        in_line = true;
      }
    }

    if in_line {
      self.lines += 1;
    }
  }
}

fn is_line_boundary(c: char) -> bool {
  matches!(
    c,
    '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
  )
}

fn is_whitespace(c: char) -> bool {
  c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Counts {
  /// Measure `content` under `metrics` in a single pass.
  ///
  /// Characters are only defined for valid UTF-8, so requesting them on
  /// anything else fails. Lines and words alone tolerate invalid sequences,
  /// each of which counts as one non-whitespace character.
  pub(crate) fn measure(content: &[u8], metrics: &MetricSet) -> Result<Self, Utf8Error> {
    let mut tally = Tally {
      bytes: content.len(),
      ..Default::default()
    };

    if metrics.contains(Metric::Chars) {
      tally.scan(std::str::from_utf8(content)?);
    } else if metrics.contains(Metric::Lines) || metrics.contains(Metric::Words) {
      tally.scan(&String::from_utf8_lossy(content));
    }

    Ok(Self {
      metrics: metrics.clone(),
      values: metrics.emitted().map(|metric| tally.get(metric)).collect(),
    })
  }

  /// Column-wise sum of two or more rows measured under the same metrics.
  pub(crate) fn total(rows: &[Counts]) -> Option<Self> {
    let (first, rest) = rows.split_first()?;

    if rest.is_empty() || rest.iter().any(|row| row.metrics != first.metrics) {
      return None;
    }

    let mut total = first.clone();

    for row in rest {
      for (sum, value) in total.values.iter_mut().zip(&row.values) {
        *sum += value;
      }
    }

    Some(total)
  }

  pub(crate) fn values(&self) -> &[usize] {
    &self.values
  }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Label<'a> {
  Stdin,
  Target(&'a str),
  Total,
}

/// One output line: the counts, then the label if there is one.
#[derive(Debug)]
pub(crate) struct Row<'a> {
  pub(crate) counts: &'a Counts,
  pub(crate) label: Label<'a>,
}

impl Display for Row<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for (i, value) in self.counts.values().iter().enumerate() {
      if i > 0 {
        write!(f, " ")?;
      }

      write!(f, "{value}")?;
    }

    match self.label {
      Label::Stdin => Ok(()),
      Label::Target(name) => write!(f, " {name}"),
      Label::Total => write!(f, " total"),
    }
  }
}
