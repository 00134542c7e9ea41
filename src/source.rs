use super::*;

/// Where content comes from. Implementations hand back raw bytes exactly as
/// stored.
pub(crate) trait Source {
  fn read(&self, name: &str) -> io::Result<Vec<u8>>;

  fn stdin(&self) -> io::Result<Vec<u8>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FileSystem;

impl Source for FileSystem {
  fn read(&self, name: &str) -> io::Result<Vec<u8>> {
    fs::read(name)
  }

  fn stdin(&self) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    io::stdin().lock().read_to_end(&mut content)?;
    Ok(content)
  }
}
