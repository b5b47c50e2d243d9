use std::io::{self, BufRead, Write};

use crate::db::Record;
use crate::store::Outcome;

use super::input::MenuChoice;
use super::App;

const SEPARATOR: &str = "------------------------";

impl<R: BufRead, W: Write, E: Write> App<R, W, E> {
    /// Run one menu choice. Returns `true` when the loop should stop.
    pub fn execute(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::Add => self.add_user(),
            MenuChoice::Delete => self.delete_user(),
            MenuChoice::Update => self.update_user(),
            MenuChoice::List => self.list_users().map(|()| false),
            MenuChoice::Exit => {
                writeln!(self.out, "Goodbye!")?;
                Ok(true)
            }
        }
    }

    fn add_user(&mut self) -> io::Result<bool> {
        writeln!(self.out)?;
        let labels = ["Name:", "Address:", "Gender:", "Favorite Movie:", "Favorite Book:"];
        let Some([name, address, gender, movie, book]) = self.prompt_all(labels)? else {
            return Ok(true);
        };

        let outcome = self.store.create(&Record::new(name, address, gender, movie, book));
        self.report(&outcome)?;
        Ok(false)
    }

    fn delete_user(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Enter name to delete:")? else {
            return Ok(true);
        };

        let outcome = self.store.delete(&name);
        self.report(&outcome)?;
        Ok(false)
    }

    fn update_user(&mut self) -> io::Result<bool> {
        let labels = [
            "Enter name to update:",
            "New Address:",
            "New Gender:",
            "New Favorite Movie:",
            "New Favorite Book:",
        ];
        let Some([name, address, gender, movie, book]) = self.prompt_all(labels)? else {
            return Ok(true);
        };

        let outcome = self.store.update(&Record::new(name, address, gender, movie, book));
        self.report(&outcome)?;
        Ok(false)
    }

    fn list_users(&mut self) -> io::Result<()> {
        let out = &mut self.out;
        let mut written = Ok(());
        let outcome = self.store.list(|record| {
            if written.is_ok() {
                written = write_record(out, &record);
            }
        });
        written?;

        self.report(&outcome)
    }

    /// Successes go to stdout, failures to stderr
    fn report(&mut self, outcome: &Outcome) -> io::Result<()> {
        if outcome.is_success() {
            writeln!(self.out, "{}", outcome)
        } else {
            writeln!(self.err, "{}", outcome)
        }
    }
}

fn write_record(out: &mut impl Write, record: &Record) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Name: {}", record.name)?;
    writeln!(out, "Address: {}", record.address)?;
    writeln!(out, "Gender: {}", record.gender)?;
    writeln!(out, "Favorite Movie: {}", record.favorite_movie)?;
    writeln!(out, "Favorite Book: {}", record.favorite_book)?;
    writeln!(out, "{}", SEPARATOR)
}
