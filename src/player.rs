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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::{Collection, Database, Document};

pub const DEFAULT_PHOTO: &str = "images/default-player.png";

/// The roster seeded into an empty players collection.
pub const DEFAULT_PLAYERS: [&str; 25] = [
    "Акаро Дмитрий",
    "Баландин Максим",
    "Баринова Арина",
    "Барычев Артём",
    "Евгений Колесников",
    "Зайцев Сергей",
    "Затолока Матвей",
    "Кабанов Макар",
    "Калашин Фёдор",
    "Комаров Александр",
    "Красин Глеб",
    "Максимов Максим",
    "Малов Кирилл",
    "Машков Иван",
    "Никита Матягин",
    "Поникаровских Артём",
    "Скиба Фёдор",
    "Скребень Александр",
    "Чесноков Константин",
    "Шамсиддинов Давид",
    "Щедров Даниил",
    "Щедров Макар",
    "Якубовский Кирилл",
    "Канищев Евгений",
    "Мартынцев Даниил",
];

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Player {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default = "default_photo")]
    pub photo: String,
}

impl Player {
    /// A player that has not been stored yet.
    #[must_use]
    pub fn new(name: &str, photo: Option<&str>) -> Self {
        Self {
            id: String::new(),
            name: name.trim().to_string(),
            photo: photo.map_or_else(default_photo, ToString::to_string),
        }
    }

    /// Seeded players get a photo named after them.
    #[must_use]
    pub fn seeded(name: &str) -> Self {
        Self::new(name, Some(&format!("images/{name}.png")))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

impl Document for Player {
    const COLLECTION: &'static str = "players";

    fn collection(database: &Database) -> &Collection<Self> {
        &database.players
    }

    fn collection_mut(database: &mut Database) -> &mut Collection<Self> {
        &mut database.players
    }

    fn assign_id(&mut self, id: &str) {
        self.id = id.to_string();
    }
}

pub(crate) fn default_photo() -> String {
    DEFAULT_PHOTO.to_string()
}
