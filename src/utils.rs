use super::*;

const FALLBACK_WIDTH: usize = 80;

pub(crate) fn decode_html(text: &str) -> String {
  html_escape::decode_html_entities(text).into_owned()
}

pub(crate) fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn html_to_text(html: &str, width: usize) -> String {
  html2text::from_read(html.as_bytes(), width.max(1)).map_or_else(
    |_| plain_text(html),
    |text| text.trim_end().to_owned(),
  )
}

/// Removes markup, leaving each text node entity-decoded and trimmed, joined
/// with single spaces.
pub(crate) fn plain_text(html: &str) -> String {
  fn flush(node: &mut String, nodes: &mut Vec<String>) {
    let decoded = decode_html(node.trim());

    let text = decoded.trim();

    if !text.is_empty() {
      nodes.push(text.to_string());
    }

    node.clear();
  }

  let mut nodes = Vec::new();
  let mut node = String::new();
  let mut inside_tag = false;

  for ch in html.chars() {
    match ch {
      '<' if !inside_tag => {
        flush(&mut node, &mut nodes);
        inside_tag = true;
      }
      '>' if inside_tag => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ => node.push(ch),
    }
  }

  if !inside_tag {
    flush(&mut node, &mut nodes);
  }

  nodes.join(" ")
}

pub(crate) fn terminal_width() -> usize {
  crossterm::terminal::size()
    .map(|(columns, _)| usize::from(columns))
    .ok()
    .filter(|&columns| columns > 0)
    .unwrap_or(FALLBACK_WIDTH)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_html_unescapes_one_level() {
    assert_eq!(
      decode_html("&lt;b&gt;hi&lt;/b&gt; &amp;amp;"),
      "<b>hi</b> &amp;"
    );
  }

  #[test]
  fn plain_text_strips_tags_and_decodes_entities() {
    assert_eq!(
      plain_text(
        "<p>Hello &amp; <i>goodbye</i></p>\n<ul><li>First</li><li>Second</li></ul>"
      ),
      "Hello & goodbye First Second"
    );
  }

  #[test]
  fn plain_text_resolves_decoded_body() {
    assert_eq!(plain_text(&decode_html("&lt;b&gt;hi&lt;/b&gt;")), "hi");
  }

  #[test]
  fn plain_text_keeps_whitespace_inside_a_text_node() {
    assert_eq!(
      plain_text("<div class=\"md\"><p>two  spaces</p>\n</div>"),
      "two  spaces"
    );
  }

  #[test]
  fn plain_text_keeps_escaped_angle_brackets_as_text() {
    assert_eq!(plain_text("<p>a &lt; b &gt; c</p>"), "a < b > c");
  }

  #[test]
  fn plain_text_of_empty_input_is_empty() {
    assert_eq!(plain_text(""), "");
    assert_eq!(plain_text("<br/>\n<hr>"), "");
  }

  #[test]
  fn plain_text_keeps_link_text() {
    assert_eq!(
      plain_text("<p>see <a href=\"https://example.com\">this</a>.</p>"),
      "see this ."
    );
  }

  #[test]
  fn format_points_handles_singular_and_plural() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(2), "2 points");
    assert_eq!(format_points(0), "0 points");
    assert_eq!(format_points(-3), "-3 points");
  }

  #[test]
  fn html_to_text_renders_paragraphs() {
    assert!(html_to_text("<p>hello there</p>", 40).contains("hello there"));
  }
}
