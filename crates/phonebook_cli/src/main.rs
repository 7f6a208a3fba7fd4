//! `phonebook` binary: drives the contact store from command-line input.
//!
//! Each invocation opens the storage namespace, initializes the store,
//! applies one command, then prints notifications and the contact list.

mod cli;
mod render;

use clap::Parser;
use cli::{Cli, Command, GlobalOpts};
use log::{error, info};
use phonebook_core::db::{open_db, open_db_in_memory};
use phonebook_core::{
    core_version, default_log_level, init_logging, ContactStore, KeyValueStore, NewContact,
    SqliteKeyValueStore, UuidIdGenerator,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli.global) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(global: &GlobalOpts) -> Result<(), Box<dyn Error>> {
    let Some(dir) = global.log_dir.as_deref() else {
        return Ok(());
    };
    let dir = dir.to_str().ok_or("log directory is not valid UTF-8")?;
    let level = global.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, dir)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Command::Version = cli.command {
        println!("phonebook_core version={}", core_version());
        return Ok(());
    }

    let conn = if cli.global.memory {
        open_db_in_memory()?
    } else {
        open_db(cli.global.db_path())?
    };
    let storage = SqliteKeyValueStore::new(&conn);
    let mut store = ContactStore::new(storage, UuidIdGenerator).with_storage_key(cli.global.key);
    store.initialize()?;

    execute(&mut store, cli.command)?;

    for notification in store.take_notifications() {
        let line = render::render_notification(&notification);
        if notification.is_error() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
    let visible = store.filtered_contacts();
    let rendered = render::render_contacts(store.contacts().len(), &visible);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn execute<S: KeyValueStore>(
    store: &mut ContactStore<S, UuidIdGenerator>,
    command: Command,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::List { filter } => store.set_filter(filter),
        Command::Add { name, number } => {
            // Same path as the add form: open it, fill the name, submit.
            store.toggle_modal();
            store.set_draft_name(name.clone());
            store.submit_new_contact(NewContact::new(name, number))?;
        }
        Command::Delete { id } => {
            store.delete_contact(&id)?;
        }
        Command::Clear => {
            store.clear_storage()?;
            info!("event=cli_clear module=cli status=ok");
        }
        Command::Version => {}
    }
    Ok(())
}
