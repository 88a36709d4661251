use std::io::{BufRead, Write};
use std::str::FromStr;

pub mod arrays;
pub mod two_pointers;

/// Fast input reader for interview-style line-oriented input
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn next_line(&mut self) -> String {
        let mut input = String::new();
        self.reader.read_line(&mut input).expect("Failed read");
        input.trim().to_string()
    }

    /// Parse a single value from the next line
    pub fn parse<T: FromStr>(&mut self) -> T
    where
        T::Err: std::fmt::Debug,
    {
        self.next_line().parse().expect("Failed parse")
    }

    /// Parse a whitespace-separated list of values from the next line
    pub fn parse_vec<T: FromStr>(&mut self) -> Vec<T>
    where
        T::Err: std::fmt::Debug,
    {
        self.next_line()
            .split_whitespace()
            .map(|token| token.parse().expect("Failed parse"))
            .collect()
    }
}

/// Fast output writer (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        write!(self.0, "{}", value).expect("Failed write");
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub(crate) fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

pub type SolveFn = fn(&mut Scanner, &mut Writer);

/// A named group of tasks, each a solve function driven by stdin/stdout
pub struct TaskGroup {
    name: &'static str,
    tasks: Vec<(&'static str, SolveFn)>,
}

impl TaskGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, task: &'static str, solve_fn: SolveFn) -> Self {
        self.tasks.push((task, solve_fn));
        self
    }

    /// Run the named task against stdin, writing its output to stdout
    pub fn run(&self, task: &str) {
        let Some((_, solve_fn)) = self.tasks.iter().find(|(name, _)| *name == task) else {
            eprintln!("Unknown task '{}' in group '{}'. Available tasks:", task, self.name);
            for (name, _) in &self.tasks {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        };

        let mut scanner = Scanner::new(std::io::stdin().lock());
        let mut writer = Writer::new();
        solve_fn(&mut scanner, &mut writer);

        let output = writer.into_string().expect("Output is not valid UTF-8");
        print!("{}", output);
    }
}

/// Test utilities for driving solve functions against in-memory input
pub mod testing {
    use super::*;
    use std::io::Cursor;

    /// Run a solve function over a string input and capture its output
    pub fn run_solver<F>(input: &str, solve_fn: F) -> String
    where
        F: FnOnce(&mut Scanner, &mut Writer),
    {
        let mut scanner = Scanner::new(Cursor::new(input.to_string()));
        let mut writer = Writer::new();
        solve_fn(&mut scanner, &mut writer);
        writer.into_string().expect("Output is not valid UTF-8")
    }
}
