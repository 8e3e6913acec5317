//! Interactive terminal client for the guestbook. One command, one
//! network call; every failure is terminal for that action and leaves
//! the local state as it was.

mod backend;
mod commands;
mod session;

use std::time::Instant;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use guestbook_store::{StoreClient, StoreConfig};
use guestbook_types::models::GuestbookEntry;
use guestbook_types::validate::NewEntry;

use backend::{Backend, GatewayClient};
use commands::Command;
use session::Session;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let backend = pick_backend()?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new();

    println!(
        "Guestbook ({} backend). Type `help` for commands.",
        backend.label()
    );

    // Initial fetch, same as a page load.
    match rt.block_on(backend.fetch()) {
        Ok(entries) => {
            session.replace(entries);
            render(&session);
        }
        Err(err) => eprintln!("Fetch failed: {err}"),
    }

    loop {
        let line = match rl.readline("guestbook> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(line.as_str());

        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(commands::ParseError::Empty) => continue,
            Err(commands::ParseError::Unknown(word)) => {
                eprintln!("Unknown command `{word}`. Try `help`.");
                continue;
            }
            Err(commands::ParseError::MissingArg(usage)) => {
                eprintln!("Usage: {usage}");
                continue;
            }
        };

        match command {
            Command::List => render(&session),
            Command::Refresh => match rt.block_on(backend.fetch()) {
                Ok(entries) => {
                    session.replace(entries);
                    render(&session);
                }
                Err(err) => eprintln!("Fetch failed: {err}"),
            },
            Command::Search(query) => {
                session.set_query(query);
                render(&session);
            }
            Command::Post => post(&mut rl, &rt, &backend, &mut session),
            Command::Delete(id) => delete(&mut rl, &rt, &backend, &mut session, &id),
            Command::Help => println!("{}", commands::HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

/// `--direct` drives the store client itself; the default goes through
/// the HTTP gateway.
fn pick_backend() -> anyhow::Result<Backend> {
    if std::env::args().any(|a| a == "--direct") {
        let store = StoreClient::new(StoreConfig::from_env()?)?;
        Ok(Backend::Direct(store))
    } else {
        let base_url = std::env::var("GUESTBOOK_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".into());
        Ok(Backend::Gateway(GatewayClient::new(base_url)))
    }
}

/// The "form": one prompt per field, validated before any network call.
/// A validation failure aborts the submit with nothing sent.
fn post(rl: &mut DefaultEditor, rt: &tokio::runtime::Runtime, backend: &Backend, session: &mut Session) {
    let name = match rl.readline("Name: ") {
        Ok(line) => line,
        Err(_) => return,
    };
    let mood = match rl.readline("Tag (optional): ") {
        Ok(line) => line,
        Err(_) => return,
    };
    let message = match rl.readline("Message: ") {
        Ok(line) => line,
        Err(_) => return,
    };

    let draft = match NewEntry::new(&name, Some(mood.as_str()), &message) {
        Ok(draft) => draft,
        Err(err) => {
            eprintln!("Not sent: {err}");
            return;
        }
    };

    match rt.block_on(backend.submit(&draft)) {
        Ok(created) => {
            session.prepend(created);
            session.show_toast("Saved", Instant::now());
            render(session);
        }
        Err(err) => eprintln!("Insert failed: {err}"),
    }
}

/// Confirmed delete: resolve the id locally, ask, then call the backend
/// and only drop the entry once the store has confirmed.
fn delete(
    rl: &mut DefaultEditor,
    rt: &tokio::runtime::Runtime,
    backend: &Backend,
    session: &mut Session,
    id: &str,
) {
    let Some(id) = session.resolve(id) else {
        eprintln!("No entry matches that id.");
        return;
    };

    match rl.readline("Delete this entry? [y/N] ") {
        Ok(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
        _ => return,
    }

    match rt.block_on(backend.delete(id)) {
        Ok(()) => {
            session.remove(id);
            session.show_toast("Deleted", Instant::now());
            render(session);
        }
        Err(err) => eprintln!("Delete failed: {err}"),
    }
}

fn render(session: &Session) {
    let visible = session.visible();
    let now = Instant::now();

    print!(
        "-- {} entries, showing {}",
        session.total(),
        visible.len()
    );
    if !session.query().is_empty() {
        print!(" (search: {:?})", session.query());
    }
    if let Some(toast) = session.toast(now) {
        print!("  [{toast}]");
    }
    println!(" --");

    if visible.is_empty() {
        println!("No entries found.");
        return;
    }
    for entry in visible {
        print_entry(entry);
    }
}

fn print_entry(entry: &GuestbookEntry) {
    let id = entry.id.to_string();
    let short_id = &id[..8];
    let when = entry
        .created_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M");
    match &entry.mood {
        Some(mood) => println!("{short_id}  {} [{mood}]  {when}", entry.name),
        None => println!("{short_id}  {}  {when}", entry.name),
    }
    println!("          {}", entry.message);
}
