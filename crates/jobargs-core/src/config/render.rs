//! Line-oriented rendering shared by the config records

use std::fmt;

pub(super) const INDENT: &str = "    ";

/// Write `name: value`, or just `name:` when the value renders empty.
pub(super) fn field(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    let value = value.to_string();
    if value.is_empty() {
        writeln!(f, "{}:", name)
    } else {
        writeln!(f, "{}: {}", name, value)
    }
}

/// Write a `name (count)` header followed by one indented line per item.
pub(super) fn items<I>(f: &mut fmt::Formatter<'_>, name: &str, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: fmt::Display,
{
    let items = items.into_iter();
    writeln!(f, "{} ({})", name, items.len())?;
    for item in items {
        writeln!(f, "{}{}", INDENT, item)?;
    }
    Ok(())
}

/// Renders time samples as `[a, b, ...]`.
pub(super) struct Samples<'a>(pub &'a [f64]);

impl fmt::Display for Samples<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, sample) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sample)?;
        }
        f.write_str("]")
    }
}
