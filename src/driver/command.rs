//! Command line grammar.

use std::str::FromStr;

use super::DriverError;

/// One line of a command script.
///
/// ```text
/// I <key>   insert
/// R <key>   remove
/// F <key>   find
/// B         rebuild
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<K> {
    Insert(K),
    Remove(K),
    Find(K),
    Rebuild,
}

impl<K: FromStr> Command<K> {
    /// Parse a single command line.
    ///
    /// Tokens are whitespace separated. `B` ignores anything after it.
    ///
    /// # Errors
    /// - `DriverError::UnknownCommand` for an empty line or unknown letter
    /// - `DriverError::MissingKey` if `I`/`R`/`F` has no key
    /// - `DriverError::Parse` if the key does not parse as `K`
    pub fn parse(line: &str) -> Result<Self, DriverError> {
        let mut tokens = line.split_whitespace();
        let letter = tokens
            .next()
            .ok_or_else(|| DriverError::UnknownCommand(line.to_string()))?;

        let build: fn(K) -> Command<K> = match letter {
            "I" => Command::Insert,
            "R" => Command::Remove,
            "F" => Command::Find,
            "B" => return Ok(Command::Rebuild),
            _ => return Err(DriverError::UnknownCommand(line.to_string())),
        };

        let token = tokens
            .next()
            .ok_or_else(|| DriverError::MissingKey(line.to_string()))?;
        let key = token.parse::<K>().map_err(|_| DriverError::Parse {
            what: "key",
            token: token.to_string(),
        })?;
        Ok(build(key))
    }
}
