use super::{Formatter, ToTs};

/// A JSDoc block followed by a newline, so the documented declaration
/// starts on its own line at the same indentation.
pub(super) struct Docs<'a>(pub(super) &'a str);

impl ToTs for Docs<'_> {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str("/**");

        for line in self.0.lines() {
            f.newline();

            let line = line.trim_end().replace("*/", "*\\/");
            if line.is_empty() {
                f.dst.push_str(" *");
            } else {
                f.dst.push_str(" * ");
                f.dst.push_str(&line);
            }
        }

        f.newline();
        f.dst.push_str(" */");
        f.newline();
    }
}
