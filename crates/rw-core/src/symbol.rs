/// Trim and uppercase a ticker typed by the user.
///
/// Returns `None` when nothing is left, in which case no request should be made.
pub fn normalize_symbol(input: &str) -> Option<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_uppercase())
  }
}
