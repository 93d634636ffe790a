use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain,
    domain::contact::Contact,
    infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Contacts => {
            let messenger = bootstrap::compose_messenger(&context.config);
            for line in contact_lines(messenger.contacts()) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn contact_lines(contacts: &[Contact]) -> Vec<String> {
    contacts
        .iter()
        .map(|contact| {
            format!(
                "{}\t{}\t{}",
                contact.id, contact.display_name, contact.photo_ref
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::default_seed;

    #[test]
    fn contact_lines_are_tab_separated() {
        let lines = contact_lines(&default_seed());

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1\tJaimin\thttps://i.pravatar.cc/150?img=1");
    }
}
