use addressbook::api::{AddressBookApi, CmdMessage, CmdResult};
use addressbook::error::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

mod args;
mod cli;
use args::{Cli, Commands, Line};
use cli::print::{print_messages, print_result};

const MESSAGE_WELCOME: &str = "Welcome to your Address Book! Type `help` to see the commands.";
const MESSAGE_GOODBYE: &str = "Exiting Address Book as requested ...";
const PROMPT: &str = "Enter command: ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: AddressBookApi,
    json: bool,
    interactive: bool,
}

enum Flow {
    Continue,
    Exit,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::setup::init_logging(cli.verbose);

    let config = cli::setup::load_config(cli.config_dir.as_deref())?;
    debug!(?config, "config loaded");

    let mut ctx = AppContext {
        api: AddressBookApi::from_config(&config),
        json: cli.json,
        interactive: io::stdin().is_terminal(),
    };

    if ctx.interactive {
        print_messages(&[CmdMessage::info(MESSAGE_WELCOME)]);
        prompt()?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if !tokens.is_empty() {
            match Line::try_parse_from(tokens) {
                Ok(parsed) => match handle_command(&mut ctx, parsed.command) {
                    Ok(Flow::Exit) => return Ok(()),
                    Ok(Flow::Continue) => {}
                    // command errors end the command, never the session
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(e) => report_parse_error(&e),
            }
        }

        if ctx.interactive {
            prompt()?;
        }
    }

    Ok(())
}

fn handle_command(ctx: &mut AppContext, command: Commands) -> Result<Flow> {
    let result = match command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => ctx
            .api
            .add_person(&name.join(" "), &phone, &email, &address.join(" "))?,
        Commands::Delete { index } => ctx.api.delete_person(&index)?,
        Commands::List => ctx.api.list_persons()?,
        Commands::Find { keywords } => ctx.api.find_persons(&keywords)?,
        Commands::Favorite { keywords } => ctx.api.favorite(&keywords)?,
        Commands::Favorites => ctx.api.list_favorites()?,
        Commands::Clear => ctx.api.clear()?,
        Commands::Help => ctx.api.help()?,
        Commands::Exit => {
            let goodbye = CmdResult::default().with_message(CmdMessage::info(MESSAGE_GOODBYE));
            print_result(&goodbye, ctx.json)?;
            return Ok(Flow::Exit);
        }
    };

    print_result(&result, ctx.json)?;
    Ok(Flow::Continue)
}

fn report_parse_error(e: &clap::Error) {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => print!("{}", e),
        _ => eprint!("{}", e),
    }
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}
