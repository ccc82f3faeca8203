use std::{ffi::OsString, path::PathBuf, str::FromStr};

use otter_asp::{builder::AtomStore, context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    NoPath,
    ParseError(ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a program is required."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen => write!(f, "Failed to open the program."),
        }
    }
}

/// Reads the program at `path` to `context` and writes a report.
/// Results in an [AtomStore] of the names of atoms in the program on success and otherwise a [ReadError].
pub(super) fn read_program(path: &str, context: &mut Context) -> Result<AtomStore, ReadError> {
    let path = match PathBuf::from_str(path) {
        Ok(path) => path,
        Err(_) => return Err(ReadError::NoPath),
    };

    println!("c Reading program from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let store = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_program(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "lp" || extension == "asp" => {
            context.read_program(std::io::BufReader::new(&file))
        }

        Some(unknown) => return Err(ReadError::UnknownExtension(unknown.to_owned())),

        None => context.read_program(std::io::BufReader::new(&file)),
    };

    match store {
        Ok(store) => {
            println!("c Atom count:       {}", context.atom_db.count() - 1);
            println!("c Nogood count:     {}", context.nogood_db.original_count());
            Ok(store)
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
