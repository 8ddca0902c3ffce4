use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Format {
  Csv,
  Json,
}

impl FromStr for Format {
  type Err = Error;

  fn from_str(format: &str) -> Result<Self> {
    match format {
      "csv" => Ok(Self::Csv),
      "json" => Ok(Self::Json),
      _ => Err(Error::InvalidFormat {
        format: format.to_string(),
      }),
    }
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::Csv => "csv",
      Self::Json => "json",
    })
  }
}
