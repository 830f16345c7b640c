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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

mod command_line;
mod remove_connection;

use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use clap::Parser;
use log::{debug, error, info};
use volleyball_club::{
    DATABASE_FILE, SERVER_PORT, VERSION_ID,
    club::Club,
    config::{CONFIG_FILE, Config},
    error::ClubError,
    locale::Locale,
    message::Command,
    state::AppState,
    store::{Backend, MemoryBackend, RonBackend},
    utils::{self, create_data_folder, data_file},
};

use crate::{command_line::Args, remove_connection::RemoveConnection};

type Message = (String, Option<Sender<String>>);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger("volleyball_club_server", args.debug, args.systemd);

    if args.man {
        return Args::generate_man_page();
    }

    create_data_folder()?;
    let config = Config::load(&args.config.unwrap_or_else(|| data_file(CONFIG_FILE)))?;

    let mut address = "[::]".to_string();
    address.push_str(SERVER_PORT);

    let listener = match TcpListener::bind(&address) {
        Ok(listener) => listener,
        Err(error) => {
            error!("TcpLister::bind: {error}");

            address = "0.0.0.0".to_string();
            address.push_str(SERVER_PORT);
            TcpListener::bind(&address)?
        }
    };

    info!("listening on {address} ...");

    if args.skip_the_data_file {
        serve(listener, Club::new(MemoryBackend::default(), config))
    } else {
        let backend = RonBackend::open(data_file(DATABASE_FILE))?;
        info!("using {}", backend.path().display());
        serve(listener, Club::new(backend, config))
    }
}

fn serve<B>(listener: TcpListener, mut club: Club<B>) -> anyhow::Result<()>
where
    B: Backend + Send + 'static,
{
    if club.config().seed_default_players {
        club.init_default_data();
    }

    let auth_events = club.subscribe();
    thread::spawn(move || {
        for event in auth_events {
            debug!("{event:?}");
        }
    });

    let locale = club.config().locale;
    let (tx, rx) = mpsc::channel();
    let mut server = Server::new(club);
    thread::spawn(move || server.handle_messages(&rx));

    for (index, stream) in (1..).zip(listener.incoming()) {
        let stream = match stream {
            Ok(stream) => stream,
            Err(error) => {
                error!("stream: {error}");
                continue;
            }
        };

        let tx = tx.clone();
        thread::spawn(move || {
            if let Err(error) = login(index, stream, &tx, locale) {
                error!("login: {error}");
            }
        });
    }

    Ok(())
}

/// Runs one connection: the handshake, then one reply per command line.
fn login(
    index: usize,
    mut stream: TcpStream,
    tx: &Sender<Message>,
    locale: Locale,
) -> anyhow::Result<()> {
    let _remove_connection = RemoveConnection {
        index,
        tx: tx.clone(),
    };

    let mut reader = BufReader::new(stream.try_clone()?);
    let mut buf = String::new();
    let (client_tx, client_rx) = mpsc::channel();
    let mut login_successful = false;

    for _ in 0..100 {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(anyhow::Error::msg("the user quit without logging in"));
        }

        let line = buf.trim();
        if line.chars().any(|ch| ch.is_control()) {
            return Err(anyhow::Error::msg(
                "there are control characters in the username or password",
            ));
        }

        let (version_id, rest) = next_word(line);
        let (kind, rest) = next_word(rest);
        if !matches!(kind, "login" | "register" | "guest") {
            let message = ClubError::BadHandshake.localized(locale);
            stream.write_all(format!("? login {message}\n").as_bytes())?;
            continue;
        }

        if version_id != VERSION_ID {
            let message = ClubError::VersionMismatch.localized(locale);
            stream.write_all(format!("? login {message}\n").as_bytes())?;
            continue;
        }

        debug!("{index} {kind} {}", next_word(rest).0);

        tx.send((format!("{index} {kind} {rest}"), Some(client_tx.clone())))?;
        let reply = client_rx.recv()?;
        stream.write_all(format!("{reply}\n").as_bytes())?;

        if reply.starts_with("= login") {
            login_successful = true;
            break;
        }
    }

    if !login_successful {
        return Err(anyhow::Error::msg("the user failed to login"));
    }

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }

        let line = buf.trim();
        if line.is_empty() {
            break;
        }

        tx.send((format!("{index} command {line}"), Some(client_tx.clone())))?;
        let reply = client_rx.recv()?;
        stream.write_all(format!("{reply}\n").as_bytes())?;
    }

    Ok(())
}

/// Splits off the first word. The rest keeps the whitespace inside it, so a
/// password may contain spaces.
fn next_word(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim_start()))
}

/// Owns the club. Every connection talks to it through one channel, so the
/// actions run one at a time.
struct Server<B> {
    club: Club<B>,
    states: HashMap<usize, AppState>,
}

impl<B: Backend> Server<B> {
    fn new(club: Club<B>) -> Self {
        Self {
            club,
            states: HashMap::new(),
        }
    }

    fn handle_messages(&mut self, rx: &Receiver<Message>) {
        for (message, option_tx) in rx {
            if let Some(reply) = self.handle_message(&message)
                && let Some(tx) = option_tx
                && let Err(error) = tx.send(reply)
            {
                error!("handle_messages: {error}");
            }
        }
    }

    fn handle_message(&mut self, message: &str) -> Option<String> {
        let (index, rest) = message.split_once(' ')?;
        let index: usize = index.parse().ok()?;
        let (kind, rest) = rest.split_once(' ').unwrap_or((rest, ""));

        match kind {
            "login" | "register" => Some(self.login(index, kind, rest)),
            "guest" => {
                let mut state = AppState::default();
                state.load_all(&self.club);
                self.states.insert(index, state);
                info!("{index} guest connected");
                Some("= login guest".to_string())
            }
            "command" => Some(self.command(index, rest)),
            "disconnect" => {
                if let Some(state) = self.states.remove(&index) {
                    let username = state.session.map_or_else(
                        || "guest".to_string(),
                        |session| session.username,
                    );
                    info!("{index} {username} disconnected");
                }
                None
            }
            _ => {
                error!("{index} unknown message: {kind}");
                let locale = self.club.config().locale;
                Some(format!("? login {}", ClubError::BadHandshake.localized(locale)))
            }
        }
    }

    fn login(&mut self, index: usize, kind: &str, rest: &str) -> String {
        let (username, password) = next_word(rest);

        let mut state = AppState::default();
        let result = if kind == "register" {
            state.register(&mut self.club, username, password).cloned()
        } else {
            state.login(&mut self.club, username, password).cloned()
        };

        match result {
            Ok(session) => {
                info!("{index} {session} connected");
                self.states.insert(index, state);
                format!("= login {} {}", session.username, session.role)
            }
            Err(error) => {
                debug!("{index} {username} {kind}: {error}");
                format!("? login {}", error.localized(self.club.config().locale))
            }
        }
    }

    fn command(&mut self, index: usize, line: &str) -> String {
        let locale = self.club.config().locale;

        let Some(state) = self.states.get_mut(&index) else {
            return format!("? {}", ClubError::NotSignedIn.localized(locale));
        };

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(error) => {
                return format!(
                    "? {}",
                    ClubError::BadCommand(error.to_string()).localized(locale)
                );
            }
        };
        debug!("{index} {command}");

        match command.execute(state, &mut self.club) {
            Ok(reply) => format!("= {reply}"),
            Err(error) => {
                info!("{index} {error}");
                format!("? {}", error.localized(locale))
            }
        }
    }
}
