// This file is part of volleyball-club.
//
// volleyball-club is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// volleyball-club is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The document store behind the club.
//!
//! Every collection is a map from document id to document. Writes replace
//! whole documents, so two writers race with last-write-wins semantics.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    accounts::{Account, User},
    error::StoreError,
    matches::Match,
    player::Player,
    team::Team,
};

const ID_LENGTH: usize = 20;

pub type Collection<D> = BTreeMap<String, D>;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Database {
    #[serde(default)]
    pub players: Collection<Player>,
    #[serde(default)]
    pub teams: Collection<Team>,
    #[serde(default)]
    pub matches: Collection<Match>,
    #[serde(default)]
    pub users: Collection<User>,
    #[serde(default)]
    pub accounts: Collection<Account>,
}

/// A record type stored in one of the [`Database`] collections.
pub trait Document: Clone + Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    fn collection(database: &Database) -> &Collection<Self>;

    fn collection_mut(database: &mut Database) -> &mut Collection<Self>;

    /// Called with the key a document is stored under.
    fn assign_id(&mut self, _id: &str) {}
}

#[must_use]
pub fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

pub trait Backend {
    /// # Errors
    ///
    /// If the backend can't be reached.
    fn database(&self) -> Result<&Database, StoreError>;

    /// Applies `change` and persists the result if it succeeded.
    ///
    /// # Errors
    ///
    /// If `change` fails or the result can't be persisted.
    fn transaction<T, F>(&mut self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Database) -> Result<T, StoreError>;

    /// # Errors
    ///
    /// If the backend can't be reached.
    fn get_all<D: Document>(&self) -> Result<Vec<D>, StoreError> {
        Ok(D::collection(self.database()?).values().cloned().collect())
    }

    /// # Errors
    ///
    /// If the backend can't be reached.
    fn get<D: Document>(&self, id: &str) -> Result<Option<D>, StoreError> {
        Ok(D::collection(self.database()?).get(id).cloned())
    }

    /// Stores a document under a fresh id and returns the id.
    ///
    /// # Errors
    ///
    /// If the write fails.
    fn add<D: Document>(&mut self, mut document: D) -> Result<String, StoreError> {
        self.transaction(|database| {
            let collection = D::collection_mut(database);

            let mut id = generate_id();
            while collection.contains_key(&id) {
                id = generate_id();
            }

            document.assign_id(&id);
            collection.insert(id.clone(), document);
            debug!("{} add {id}", D::COLLECTION);

            Ok(id)
        })
    }

    /// Creates or overwrites the document stored under `id`.
    ///
    /// # Errors
    ///
    /// If the write fails.
    fn set<D: Document>(&mut self, id: &str, mut document: D) -> Result<(), StoreError> {
        self.transaction(|database| {
            document.assign_id(id);
            D::collection_mut(database).insert(id.to_string(), document);
            debug!("{} set {id}", D::COLLECTION);

            Ok(())
        })
    }

    /// Changes part of an existing document.
    ///
    /// # Errors
    ///
    /// If there is no document under `id` or the write fails.
    fn update<D, F>(&mut self, id: &str, change: F) -> Result<(), StoreError>
    where
        D: Document,
        F: FnOnce(&mut D),
    {
        self.transaction(|database| {
            let Some(document) = D::collection_mut(database).get_mut(id) else {
                return Err(StoreError::NotFound {
                    collection: D::COLLECTION,
                    id: id.to_string(),
                });
            };

            change(document);
            debug!("{} update {id}", D::COLLECTION);

            Ok(())
        })
    }

    /// Deleting a missing document is not an error.
    ///
    /// # Errors
    ///
    /// If the write fails.
    fn delete<D: Document>(&mut self, id: &str) -> Result<(), StoreError> {
        self.transaction(|database| {
            D::collection_mut(database).remove(id);
            debug!("{} delete {id}", D::COLLECTION);

            Ok(())
        })
    }
}

/// Keeps everything in memory. `offline` makes every call fail, which is how
/// a lost connection to the store looks to the club.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    pub database: Database,
    pub offline: bool,
}

impl Backend for MemoryBackend {
    fn database(&self) -> Result<&Database, StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable);
        }

        Ok(&self.database)
    }

    fn transaction<T, F>(&mut self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Database) -> Result<T, StoreError>,
    {
        if self.offline {
            return Err(StoreError::Unavailable);
        }

        change(&mut self.database)
    }
}

/// Persists the whole database to one RON file after every write.
#[derive(Clone, Debug)]
pub struct RonBackend {
    path: PathBuf,
    database: Database,
}

impl RonBackend {
    /// Loads `path`, or starts empty if it doesn't exist yet.
    ///
    /// # Errors
    ///
    /// If the file can't be read or isn't a valid database.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let database = match fs::read_to_string(&path) {
            Ok(string) => ron::from_str(&string)?,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("{} not found, starting with an empty database", path.display());
                Database::default()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, database })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, database: &Database) -> Result<(), StoreError> {
        let string = ron::ser::to_string_pretty(database, ron::ser::PrettyConfig::default())?;
        let mut file = File::create(&self.path)?;
        file.write_all(string.as_bytes())?;

        Ok(())
    }
}

impl Backend for RonBackend {
    fn database(&self) -> Result<&Database, StoreError> {
        Ok(&self.database)
    }

    fn transaction<T, F>(&mut self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Database) -> Result<T, StoreError>,
    {
        let mut database = self.database.clone();
        let value = change(&mut database)?;
        self.save(&database)?;
        self.database = database;

        Ok(value)
    }
}
