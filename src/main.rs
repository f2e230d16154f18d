mod args;
mod config;
mod reader;
mod writer;

use tbl::input::{Command, InputEvent};
use tbl::{Registry, RegistryError, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut registry = Registry::new();

    process_commands(&mut registry)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&registry)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the command script and run every command against the registry
fn process_commands(registry: &mut Registry) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputEvent>() {
        log::debug!("Parsing record into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_event into Command: {input_event:?}");
        let command = match input_event.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        // a failed command is reported and the script carries on
        if let Err(e) = run_command(registry, command) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

fn run_command(
    registry: &mut Registry,
    command: Command,
) -> std::result::Result<(), RegistryError> {
    log::debug!("Running command: {command:?}");

    match command {
        Command::RegisterClient {
            cpf,
            name,
            birth_date,
            address,
        } => {
            registry.register_client(cpf, name, birth_date, address)?;
        }
        Command::OpenAccount { cpf } => {
            let account = registry.open_account(&cpf)?;
            log::info!(
                "Account opened. Branch: {} - Account: {} - Client: {}",
                account.branch(),
                account.number(),
                cpf
            );
        }
        Command::Transact { cpf, kind, amount } => {
            let client = registry.find_client(&cpf)?;
            let number = registry.first_account_of(client)?.number();

            registry.apply(&cpf, number, kind, amount)?;
            log::info!("{kind} of {amount} on account {number} succeeded");
        }
        Command::Statement { cpf } => {
            let client = registry.find_client(&cpf)?;
            let number = registry.first_account_of(client)?.number();

            let statement = registry.statement(number)?;

            // stdout only carries the account listing
            eprintln!("{}", writer::format_statement(&statement));
        }
    }

    Ok(())
}

/// Build the account listing, and write it to stdout
fn report_to_std_out(registry: &Registry) -> Result {
    let report = registry.build_report()?;
    log::debug!("Successfully built reports for {} accounts", report.len());

    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing reports...");
    for account_report in report.iter() {
        log::debug!("Serializing report: {account_report:?}");
        wtr.serialize(account_report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
