//! Command execution against a tree.

use std::fmt;

use log::debug;

use super::Command;
use crate::common::{Error, Result};
use crate::MTree;

/// What a command did. `Display` gives the status line printed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<K> {
    Inserted(K),
    AlreadyPresent(K),
    Removed(K),
    NotRemoved(K),
    Found(K),
    NotFound(K),
    Rebuilt,
}

impl<K: fmt::Display> fmt::Display for Outcome<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted(k) => write!(f, "{} has been added to the tree.", k),
            Outcome::AlreadyPresent(k) => write!(f, "The value = {} already in the tree.", k),
            Outcome::Removed(k) => write!(f, "The value = {} has been removed.", k),
            Outcome::NotRemoved(k) => write!(f, "The value = {} not found.", k),
            Outcome::Found(k) => write!(f, "The element with value = {} was found.", k),
            Outcome::NotFound(k) => write!(f, "The element with value = {} not found.", k),
            Outcome::Rebuilt => write!(f, "The tree has been rebuilt."),
        }
    }
}

/// A tree plus the rules for turning commands into outcomes.
///
/// `DuplicateKey` and `KeyNotFound` become outcomes here. Any other tree
/// error is passed back to the caller.
///
/// # Example
/// ```
/// use mwaytree::driver::{Command, Outcome, Session};
///
/// let mut session = Session::new(3, vec![5, 1, 9, 3]).unwrap();
/// assert_eq!(session.execute(Command::Insert(7)), Ok(Outcome::Inserted(7)));
/// assert_eq!(session.execute(Command::Insert(7)), Ok(Outcome::AlreadyPresent(7)));
/// assert_eq!(session.final_list(), "Final list: 1 3 5 7 9 ");
/// ```
#[derive(Debug)]
pub struct Session<K> {
    tree: MTree<K>,
}

impl<K: Ord + Clone> Session<K> {
    /// Build the initial tree.
    ///
    /// # Errors
    /// `Error::InvalidOrder` if `order < 2`.
    pub fn new<I>(order: usize, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        Ok(Self {
            tree: MTree::from_keys(order, initial)?,
        })
    }

    pub fn tree(&self) -> &MTree<K> {
        &self.tree
    }

    /// Run one command.
    ///
    /// # Errors
    /// Tree errors other than `DuplicateKey` on insert and `KeyNotFound` on
    /// remove.
    pub fn execute(&mut self, command: Command<K>) -> Result<Outcome<K>> {
        let outcome = match command {
            Command::Insert(key) => match self.tree.insert(key.clone()) {
                Ok(()) => Outcome::Inserted(key),
                Err(Error::DuplicateKey) => Outcome::AlreadyPresent(key),
                Err(e) => return Err(e),
            },
            Command::Remove(key) => match self.tree.remove(&key) {
                Ok(()) => Outcome::Removed(key),
                Err(Error::KeyNotFound) => Outcome::NotRemoved(key),
                Err(e) => return Err(e),
            },
            Command::Find(key) => {
                if self.tree.search(&key) {
                    Outcome::Found(key)
                } else {
                    Outcome::NotFound(key)
                }
            }
            Command::Rebuild => {
                self.tree.rebuild();
                debug!("rebuilt: {}", self.tree.stats());
                Outcome::Rebuilt
            }
        };
        Ok(outcome)
    }
}

impl<K: Ord + Clone + fmt::Display> Session<K> {
    /// The closing line: every key in ascending order, each followed by a space.
    pub fn final_list(&self) -> String {
        let mut line = String::from("Final list: ");
        for key in self.tree.collect_values() {
            line.push_str(&key.to_string());
            line.push(' ');
        }
        line
    }
}
