use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::InputError;
use crate::scanner::Scanner;

const NAME_PROMPT: &str = "Enter Full Name: ";
const AGE_PROMPT: &str = "Enter your age: ";
const SALARY_PROMPT: &str = "Enter your salary: ";
const MOOD_PROMPT: &str = "Are you happy today? True/False: ";

/// The four answers, collected in the order they were asked.
#[derive(Debug, PartialEq)]
pub struct Profile {
    pub full_name: String,
    pub age: i64,
    pub salary: f64,
    pub mood: bool,
}

impl fmt::Display for Profile {
    // No separator after "Salary"; the summary format is fixed.
    // Debug formatting keeps the fractional part of whole salaries ("0.0").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nAge: {}\nSalary{:?}\nHappy?: {}",
            self.full_name, self.age, self.salary, self.mood
        )
    }
}

/// Conversion from a single whitespace-delimited token.
pub trait FromToken: Sized {
    /// What the token should have looked like, for error messages.
    const EXPECTED: &'static str;

    fn from_token(token: &str) -> Option<Self>;
}

impl FromToken for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl FromToken for f64 {
    const EXPECTED: &'static str = "floating-point number";

    fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl FromToken for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("true") {
            Some(true)
        } else if token.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

pub fn interactive() -> Result<Profile, InputError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_reader(stdin.lock(), stdout.lock())
}

/// Asks the four questions against `reader`, writing prompts and the final
/// summary to `out`. Nothing past the prompts is written unless every
/// answer parses.
pub fn run_with_reader<R: BufRead, W: Write>(reader: R, mut out: W) -> Result<Profile, InputError> {
    let mut scanner = Scanner::new(reader);

    show_prompt(&mut out, NAME_PROMPT)?;
    let full_name = scanner
        .next_line()?
        .ok_or(InputError::MissingInput { field: "full name" })?;
    debug!(field = "full name", value = %full_name, "answered");

    let age: i64 = ask(&mut scanner, &mut out, AGE_PROMPT, "age")?;
    let salary: f64 = ask(&mut scanner, &mut out, SALARY_PROMPT, "salary")?;
    let mood: bool = ask(&mut scanner, &mut out, MOOD_PROMPT, "mood")?;

    let profile = Profile {
        full_name,
        age,
        salary,
        mood,
    };
    write!(out, "\n{profile}")?;
    out.flush()?;

    // Input is released once the summary is out.
    drop(scanner);
    Ok(profile)
}

/// Prints `prompt`, then reads and converts the next token.
pub fn ask<T, R, W>(
    scanner: &mut Scanner<R>,
    out: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<T, InputError>
where
    T: FromToken,
    R: BufRead,
    W: Write,
{
    show_prompt(out, prompt)?;
    let token = scanner
        .next_token()?
        .ok_or(InputError::MissingInput { field })?;

    match T::from_token(&token) {
        Some(value) => {
            debug!(field = field, value = %token, "answered");
            Ok(value)
        }
        None => {
            warn!(field = field, token = %token, expected = T::EXPECTED, "rejected answer");
            Err(InputError::Parse {
                field,
                expected: T::EXPECTED,
                token,
            })
        }
    }
}

fn show_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    out.write_all(prompt.as_bytes())?;
    out.flush()
}
