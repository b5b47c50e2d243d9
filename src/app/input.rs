use std::io::{self, BufRead, Write};

use super::App;

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Update,
    List,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Anything that is not 1-5 is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Delete),
            3 => Some(Self::Update),
            4 => Some(Self::List),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drop a trailing `\n` or `\r\n`, keeping all other bytes
fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    /// Read one line. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut line);
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    /// Print `label` and read the answer on the same line
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{} ", label)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Prompt for each label in turn, stopping early at end of input
    pub fn prompt_all<const N: usize>(
        &mut self,
        labels: [&str; N],
    ) -> io::Result<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (answer, label) in answers.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Some(line) => *answer = line,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }
}
