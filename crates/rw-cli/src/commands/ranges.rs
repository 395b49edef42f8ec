use crate::render::render_ranges;

pub fn execute() {
  println!("{}", render_ranges());
}
