use std::io;

use pawn_duel::console::session::GameSession;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::new(stdin.lock(), stdout.lock());
    session.run()
}
