use {super::*, thiserror::Error as ThisError};

#[derive(Debug, ThisError)]
pub(crate) enum Error {
  #[error("{name}: invalid UTF-8 at byte {offset}")]
  Encoding { name: String, offset: usize },

  #[error("invalid option(s): {}", .options.join(", "))]
  InvalidOption { options: Vec<String> },

  #[error("{name}: {source}")]
  Read {
    name: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to read standard input: {source}")]
  Stdin {
    #[source]
    source: io::Error,
  },

  #[error("failed to write output: {source}")]
  Write {
    #[source]
    source: io::Error,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_option_lists_flags() {
    let error = Error::InvalidOption {
      options: vec!["-q".into(), "-x".into()],
    };

    assert_eq!(error.to_string(), "invalid option(s): -q, -x");
  }

  #[test]
  fn read_names_target() {
    let error = Error::Read {
      name: "missing.txt".into(),
      source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };

    assert_eq!(error.to_string(), "missing.txt: No such file or directory");
  }
}
