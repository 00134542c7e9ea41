use super::*;

/// Print line, word, byte and character counts for each file, or for
/// standard input when no file is given.
#[derive(Debug, Parser)]
#[command(disable_help_flag = true)]
pub(crate) struct Arguments {
  /// -l lines, -w words, -c bytes, -m characters, and the files to count
  #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
  arguments: Vec<String>,
}

impl Arguments {
  pub(crate) fn from_env() -> Self {
    Self::verbatim(env::args_os())
  }

  /// Parse with an escape in front of the user's tokens, so clap hands every
  /// one of them over as a value, a literal `--` included.
  fn verbatim<I, T>(arguments: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
  {
    let mut arguments = arguments.into_iter().map(Into::<OsString>::into);

    Self::parse_from(
      arguments
        .next()
        .into_iter()
        .chain(iter::once(OsString::from("--")))
        .chain(arguments),
    )
  }

  pub(crate) fn run(self) -> Result {
    let invocation = Invocation::resolve(self.arguments)?;

    App::new(invocation, FileSystem, io::stdout().lock()).run()?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(arguments: &[&str]) -> Vec<String> {
    Arguments::verbatim(iter::once("wc").chain(arguments.iter().copied())).arguments
  }

  #[test]
  fn flags_reach_the_resolver() {
    assert_eq!(parse(&["-l", "a.txt", "-w"]), vec!["-l", "a.txt", "-w"]);
  }

  #[test]
  fn unknown_flags_reach_the_resolver() {
    assert_eq!(parse(&["-x", "-h", "--help"]), vec!["-x", "-h", "--help"]);
  }

  #[test]
  fn double_dash_reaches_the_resolver() {
    assert_eq!(parse(&["--", "a.txt"]), vec!["--", "a.txt"]);
    assert_eq!(parse(&["a.txt", "--", "-l"]), vec!["a.txt", "--", "-l"]);
  }

  #[test]
  fn no_arguments() {
    assert!(parse(&[]).is_empty());
  }
}
