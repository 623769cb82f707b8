// std imports
use std::{
    borrow::Cow,
    fmt::{self, Write as _},
    path::Path,
};

// third-party imports
use owo_colors::{OwoColorize, Style};

// ---

pub trait HighlightQuoted {
    type Output: fmt::Display;

    fn hlq(self) -> Self::Output;
}

impl<'a, S> HighlightQuoted for &'a S
where
    S: fmt::Display,
{
    type Output = Highlighted<Quoted<&'a S>>;

    fn hlq(self) -> Self::Output {
        Highlighted(Quoted(self))
    }
}

impl<'a> HighlightQuoted for &'a Path {
    type Output = Highlighted<Quoted<Converted<&'a Path>>>;

    fn hlq(self) -> Self::Output {
        Highlighted(Quoted(Converted(self)))
    }
}

// ---

pub struct Highlighted<S>(S);

impl<S> fmt::Display for Highlighted<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.style(HIGHLIGHT))
    }
}

// ---

pub struct Quoted<S>(S);

impl<S> fmt::Display for Quoted<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        write!(&mut buf, "{}", self.0)?;
        write!(f, "{:?}", buf)
    }
}

// ---

pub struct Converted<T>(T);

impl<'a> fmt::Display for Converted<&'a Path> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: Cow<'a, str> = self.0.to_string_lossy();
        f.write_str(&s)
    }
}

// ---

/// Underlines a byte offset of a single-line text, for pointing at a problem in user input.
pub struct Caret<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl fmt::Display for Caret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let offset = self.offset.min(self.text.len());
        let column = self.text.get(..offset).map(|s| s.chars().count()).unwrap_or(offset);
        writeln!(f, "    {}", self.text)?;
        write!(f, "    {:column$}{}", "", "^".style(CARET))
    }
}

// ---

const HIGHLIGHT: Style = Style::new().yellow();
const CARET: Style = Style::new().red().bold();

#[cfg(test)]
mod tests;
