//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::num;
use std::fmt;
use regex;

/// Type alias for pogcount errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring while measuring transcripts
#[derive(Debug)]
pub enum Error {
    /// A ratio was requested over a zero denominator, named here
    DivisionByZero(&'static str),
    MissingFile(String, Option<io::Error>),
    Metadata(String),
    IOError(io::Error),
    RegexError(regex::Error),
    ParseIntError(num::ParseIntError),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::DivisionByZero(what) => write!(f, "Division by zero: the {} is zero", what),
            Error::MissingFile(ref path, ref opt_err) => {
                write!(f,
                    "The transcript {} must exist but there was a problem opening it. \
                    Wrong directory? The OS error was: ",
                    path)?;
                if let Some(ref err) = *opt_err { write!(f, "{}", err) }
                else { write!(f, "Unknown") }
            },
            Error::Metadata(ref info) => write!(f, "Bad metadata: {}", info),
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::RegexError(ref err) => write!(f, "Bad keyword pattern: {}", err),
            Error::ParseIntError(ref err) => write!(f, "Error parsing integer: {}", err),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::DivisionByZero(_) => None,
            Error::MissingFile(_, Some(ref err)) => Some(err),
            Error::MissingFile(_, None) => None,
            Error::Metadata(_) => None,
            Error::IOError(ref err) => Some(err),
            Error::RegexError(ref err) => Some(err),
            Error::ParseIntError(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::RegexError(err)
    }
}
impl From<num::ParseIntError> for Error {
    fn from(err: num::ParseIntError) -> Self {
        Error::ParseIntError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
