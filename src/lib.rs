//! Roster, team and match tracking for a volleyball club.
//!
//! The library holds the data model, standings calculation, storage and
//! the per-session actions. The `volleyball-club-server` binary serves them
//! over TCP.
//!
//! ## Message Protocol
//!
//! After a text handshake every line is a RON encoded [`message::Command`]
//! and is answered by a [`message::Reply`].

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

#![deny(clippy::panic)]

use std::{
    io::{BufRead, BufReader, Write},
    net::TcpStream,
};

rust_i18n::i18n!();

pub mod accounts;
pub mod auth;
pub mod club;
pub mod config;
pub mod error;
pub mod locale;
pub mod matches;
pub mod message;
pub mod player;
pub mod role;
pub mod set_score;
pub mod standings;
pub mod state;
pub mod status;
pub mod store;
pub mod team;
pub mod utils;

pub const HOME: &str = "volleyball-club";
pub const DATABASE_FILE: &str = "database.ron";
pub const SERVER_PORT: &str = ":49200";
pub const VERSION_ID: &str = "5c1b0a7e";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 The volleyball-club developers

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 The volleyball-club developers
Licensed under the AGPLv3"
);

/// # Errors
///
/// If read fails.
pub fn read_response(reader: &mut BufReader<TcpStream>) -> anyhow::Result<String> {
    let mut reply = String::new();
    reader.read_line(&mut reply)?;
    Ok(reply)
}

/// # Errors
///
/// If write fails.
pub fn write_command(command: &str, stream: &mut TcpStream) -> anyhow::Result<()> {
    stream.write_all(command.as_bytes())?;
    if !command.ends_with('\n') {
        stream.write_all(b"\n")?;
    }
    Ok(())
}
