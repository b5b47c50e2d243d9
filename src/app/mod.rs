//! Console Application
//!
//! Blocking menu loop that reads choices and field values from an input
//! stream and drives the [`Store`].

mod actions;
mod config;
mod input;

use std::io::{self, BufRead, Write};

use crate::store::Store;

pub use config::AppConfig;
pub use input::MenuChoice;

const BANNER_RULE: &str = "=============================================";

pub struct App<R, W, E> {
    store: Store,
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    pub fn new(store: Store, input: R, out: W, err: E) -> Self {
        Self {
            store,
            input,
            out,
            err,
        }
    }

    /// Loop until the exit choice or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out, "Goodbye!")?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(choice) => {
                    if self.execute(choice)? {
                        break;
                    }
                }
                None => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }

        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", BANNER_RULE)?;
        writeln!(self.out, "Welcome to the User Database CLI")?;
        writeln!(self.out, "{}", BANNER_RULE)?;
        writeln!(self.out, "Choose an option below:")?;
        writeln!(self.out)?;
        writeln!(self.out, "1. Add User")?;
        writeln!(self.out, "2. Delete User")?;
        writeln!(self.out, "3. Update User")?;
        writeln!(self.out, "4. List Users")?;
        writeln!(self.out, "5. Exit")?;
        writeln!(self.out)?;
        write!(self.out, "Your choice: ")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_output(self) -> (W, E) {
        (self.out, self.err)
    }
}
