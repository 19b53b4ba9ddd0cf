use std::{
    fmt::{self, Display},
    io,
};

use redwood_tree::Tree;

/// The indentation added for each level of depth.
pub const INDENT: &str = "    ";

/// Writes the text form of `tree` into `out`.
pub fn write_tree<T, W>(tree: &Tree<T>, mut out: W) -> fmt::Result
where
    T: Display,
    W: fmt::Write,
{
    for item in tree.outline() {
        for _ in 0..item.depth {
            out.write_str(INDENT)?;
        }
        match item.node {
            Some(node) => writeln!(out, "{} {}", node.value(), node.color())?,
            None => writeln!(out, "null")?,
        }
    }
    Ok(())
}

/// Renders the text form of `tree`.
///
/// Fails only when a value's `Display` implementation does.
pub fn render<T: Display>(tree: &Tree<T>) -> Result<String, fmt::Error> {
    let mut text = String::new();
    write_tree(tree, &mut text)?;
    Ok(text)
}

/// Writes the text form of `tree` to `out` and flushes it.
///
/// A value that fails to format surfaces as an [`io::ErrorKind::Other`]
/// error, the way [`io::Write::write_fmt`] reports it.
pub fn write_to<T, W>(tree: &Tree<T>, out: W) -> io::Result<()>
where
    T: Display,
    W: io::Write,
{
    let mut adapter = Adapter { out, error: None };
    match write_tree(tree, &mut adapter) {
        Ok(()) => adapter.out.flush(),
        Err(fmt::Error) => Err(adapter
            .error
            .take()
            .unwrap_or_else(|| io::Error::other("a value could not be formatted"))),
    }
}

/// Forwards formatted text to an `io::Write`, keeping the first I/O error.
struct Adapter<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for Adapter<W> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.out.write_all(text.as_bytes()).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}
