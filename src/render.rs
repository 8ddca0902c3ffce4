use super::*;

const INDENT: &str = "  ";

const MIN_BODY_WIDTH: usize = 20;

fn push_block(output: &mut String, indent: &str, text: &str) {
  for line in text.lines() {
    output.push_str(indent);
    output.push_str(line);
    output.push('\n');
  }
}

/// Plain-text view of a thread: the post, then every comment in reply order,
/// indented by depth.
pub(crate) fn render(thread: &Thread, width: usize) -> String {
  let Thread { comments, post } = thread;

  let mut output = String::new();

  push_block(&mut output, "", &post.title);
  push_block(
    &mut output,
    "",
    &format!("{} by {}", format_points(post.score), post.author),
  );
  push_block(&mut output, "", &post.url);

  let selftext = html_to_text(&post.selftext, width);

  if !selftext.is_empty() {
    output.push('\n');
    push_block(&mut output, "", &selftext);
  }

  output.push('\n');

  if comments.is_empty() {
    output.push_str("No comments yet.\n");
    return output;
  }

  let mut pending = comments
    .iter()
    .rev()
    .map(|comment| (comment, 0))
    .collect::<Vec<(&Comment, usize)>>();

  while let Some((comment, depth)) = pending.pop() {
    let indent = INDENT.repeat(depth);

    push_block(
      &mut output,
      &indent,
      &format!("{} • {}", comment.author, format_points(comment.score)),
    );

    let body_width = width.saturating_sub(indent.len()).max(MIN_BODY_WIDTH);

    push_block(&mut output, &indent, &html_to_text(&comment.body, body_width));

    output.push('\n');

    pending.extend(
      comment
        .replies
        .iter()
        .rev()
        .map(|reply| (reply, depth + 1)),
    );
  }

  output
}
