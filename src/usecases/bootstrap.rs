use std::{path::Path, time::Duration};

use anyhow::Result;

use crate::{
    domain::contact::{default_seed, Contact, ContactId},
    infra::{
        self,
        clock::{SystemClock, TimestampIds},
        config::{AppConfig, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
    },
    ui::StdinEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        messenger::Messenger,
        reply_simulator::ReplySimulator,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let mut context = build_context(&FileConfigAdapter::new(config_path))?;
    context.log_guard = infra::logging::init(&context.config.logging)?;

    Ok(context)
}

pub fn compose_shell(context: &AppContext) -> Result<ShellComposition> {
    let tick = Duration::from_millis(context.config.shell.tick_ms);
    let event_source = StdinEventSource::new(tick)?;
    let orchestrator = DefaultShellOrchestrator::new(compose_messenger(&context.config));

    Ok(ShellComposition {
        event_source: Box::new(event_source),
        orchestrator: Box::new(orchestrator),
    })
}

pub fn compose_messenger(config: &AppConfig) -> Messenger {
    let replies = ReplySimulator::new(
        Duration::from_millis(config.replies.delay_ms),
        config.replies.text.clone(),
    );

    Messenger::new(
        seed_contacts(config),
        replies,
        Box::new(SystemClock),
        Box::new(TimestampIds::default()),
    )
}

fn build_context(adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config))
}

fn seed_contacts(config: &AppConfig) -> Vec<Contact> {
    match &config.contacts {
        Some(contacts) => contacts
            .iter()
            .map(|contact| Contact {
                id: ContactId::new(contact.id.clone()),
                display_name: contact.name.clone(),
                photo_ref: contact.photo.clone(),
            })
            .collect(),
        None => default_seed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{config::ContactConfig, stubs::StubConfigAdapter};

    #[test]
    fn builds_context_with_default_config() {
        let context = build_context(&StubConfigAdapter).expect("context should build");

        assert_eq!(context.config, AppConfig::default());
        assert!(context.log_guard.is_none());
    }

    #[test]
    fn builds_context_from_missing_file_with_defaults() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./missing-config.toml")));

        let context = build_context(&adapter).expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
    }

    #[test]
    fn messenger_uses_default_seed_when_config_has_no_contacts() {
        let messenger = compose_messenger(&AppConfig::default());

        let names: Vec<_> = messenger
            .contacts()
            .iter()
            .map(|c| c.display_name.as_str())
            .collect();
        assert_eq!(names, ["Jaimin", "Shlok", "Myntra", "Zeel", "Laksh"]);
    }

    #[test]
    fn messenger_uses_configured_contacts() {
        let config = AppConfig {
            contacts: Some(vec![ContactConfig {
                id: "ada".to_owned(),
                name: "Ada".to_owned(),
                photo: "https://example.com/ada.png".to_owned(),
            }]),
            ..AppConfig::default()
        };

        let messenger = compose_messenger(&config);

        assert_eq!(messenger.contacts().len(), 1);
        assert_eq!(
            messenger.contact(&ContactId::new("ada")).map(|c| c.photo_ref.as_str()),
            Some("https://example.com/ada.png")
        );
    }
}
