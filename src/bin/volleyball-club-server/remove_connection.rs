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

use std::sync::mpsc::Sender;

/// Drops the connection's session however its thread ends.
#[derive(Debug)]
pub(crate) struct RemoveConnection {
    pub index: usize,
    pub tx: Sender<(String, Option<Sender<String>>)>,
}

impl Drop for RemoveConnection {
    fn drop(&mut self) {
        let _ok = self.tx.send((format!("{} disconnect", self.index), None));
    }
}
