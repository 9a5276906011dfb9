use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

use anyhow::Context;

use crate::difference::absent_from;
use crate::slicing::{letters, SliceExt};

/// Renders a sequence as `[a, b, c]`.
pub struct Listing<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

pub struct Demo {
    pub letters: Vec<char>,
    pub authors: Vec<String>,
    pub readers: BTreeSet<String>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            letters: letters('a'..='z'),
            authors: ["Dmitry", "Alice", "Bob"].map(String::from).to_vec(),
            readers: ["Alice", "Carol"].map(String::from).into(),
        }
    }
}

impl Demo {
    pub fn first_letters(&self) -> anyhow::Result<&[char]> {
        self.letters
            .slice_inclusive(0..=2)
            .with_context(|| format!("0..=2 out of range for {} letters", self.letters.len()))
    }

    pub fn new_readers(&self) -> Vec<&String> {
        let found = absent_from(&self.readers, &self.authors);
        log::debug!(
            "{} of {} readers are not authors, excluded {}",
            found.len(),
            self.readers.len(),
            Listing(self.reader_authors().as_slice())
        );
        found
    }

    /// Readers who are also authors, i.e. the ones `new_readers` drops.
    pub fn reader_authors(&self) -> Vec<&String> {
        self.readers
            .iter()
            .filter(|r| self.authors.contains(*r))
            .collect()
    }

    /// Writes the sliced letters and the readers who are not authors, one line each.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        log::debug!("{} letters", self.letters.len());
        writeln!(out, "{}", Listing(self.first_letters()?))?;
        writeln!(out, "{}", Listing(self.new_readers().as_slice()))?;
        out.flush()?;
        Ok(())
    }
}
