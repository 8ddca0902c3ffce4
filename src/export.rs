use super::*;

#[derive(Debug)]
pub(crate) struct Export {
  pub(crate) contents: Vec<u8>,
  pub(crate) filename: String,
}

impl Export {
  const BYTE_ORDER_MARK: &str = "\u{feff}";

  const NO_COMMENTS: &str = "No comments found.";

  const TITLE_LENGTH: usize = 30;

  fn csv(thread: &Thread) -> Result<Vec<u8>> {
    let mut contents = Self::BYTE_ORDER_MARK.as_bytes().to_vec();

    let rows = FlatCommentRow::flatten(&thread.comments);

    if rows.is_empty() {
      contents.extend_from_slice(Self::NO_COMMENTS.as_bytes());
      return Ok(contents);
    }

    let mut writer = csv::WriterBuilder::new()
      .terminator(csv::Terminator::CRLF)
      .from_writer(contents);

    writer.write_record(FlatCommentRow::HEADER)?;

    for row in &rows {
      writer.write_record(row.record())?;
    }

    writer.into_inner().map_err(|error| Error::Csv {
      source: error.into_error().into(),
    })
  }

  fn file_stem(title: &str) -> String {
    let title = title
      .replace(' ', "_")
      .replace('/', "")
      .chars()
      .take(Self::TITLE_LENGTH)
      .collect::<String>();

    format!("reddit_{title}")
  }

  fn json(thread: &Thread) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(thread)
      .map_err(|source| Error::Serialize { source })
  }

  pub(crate) fn new(thread: &Thread, format: Format) -> Result<Self> {
    let stem = Self::file_stem(&thread.post.title);

    let (contents, filename) = match format {
      Format::Csv => (Self::csv(thread)?, format!("{stem}_comments.csv")),
      Format::Json => (Self::json(thread)?, format!("{stem}.json")),
    };

    info!(
      %format,
      filename = %filename,
      bytes = contents.len(),
      "exported thread"
    );

    Ok(Self { contents, filename })
  }
}
