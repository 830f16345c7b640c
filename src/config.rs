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

use std::{fs, io::ErrorKind, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    auth::MIN_PASSWORD_LENGTH, locale::Locale, matches::DEFAULT_POINTS_SETS, player::DEFAULT_PHOTO,
    set_score::SetRule,
};

pub const CONFIG_FILE: &str = "config.ron";

/// Settings read from `config.ron` in the data folder. Missing fields take
/// their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Signing in with this email makes the new user an admin.
    pub admin_email: String,
    /// Usernames sign in as `username@email_domain`.
    pub email_domain: String,
    pub set_rule: SetRule,
    pub default_photo: String,
    pub default_points_sets: u8,
    pub locale: Locale,
    pub min_username_length: usize,
    pub min_password_length: usize,
    /// Seed the default roster when the players collection is empty.
    pub seed_default_players: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_email: "admin@volleyball.ru".to_string(),
            email_domain: "volleyball.ru".to_string(),
            set_rule: SetRule::default(),
            default_photo: DEFAULT_PHOTO.to_string(),
            default_points_sets: DEFAULT_POINTS_SETS,
            locale: Locale::default(),
            min_username_length: 3,
            min_password_length: MIN_PASSWORD_LENGTH,
            seed_default_players: true,
        }
    }
}

impl Config {
    /// Reads the config, falling back to the defaults when there is no file.
    ///
    /// # Errors
    ///
    /// If the file exists but can't be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(string) => ron::from_str(&string).map_err(|error| {
                anyhow::Error::msg(format!("RON: {}: {error}", path.display()))
            }),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("{} not found, using the default config", path.display());
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_takes_defaults() -> anyhow::Result<()> {
        let config: Config = ron::from_str(
            r#"(
                admin_email: "captain@club.org",
                set_rule: WinByTwo(target: 25),
                locale: Russian,
            )"#,
        )?;

        assert_eq!(config.admin_email, "captain@club.org");
        assert_eq!(
            config.set_rule,
            SetRule::WinByTwo {
                target: 25,
                deciding_target: 15
            }
        );
        assert_eq!(config.locale, Locale::Russian);
        assert_eq!(config.email_domain, "volleyball.ru");
        assert_eq!(config.min_password_length, 6);

        Ok(())
    }

    #[test]
    fn missing_file_is_default() -> anyhow::Result<()> {
        let config = Config::load(Path::new("/nonexistent/volleyball-club/config.ron"))?;
        assert_eq!(config, Config::default());

        Ok(())
    }
}
