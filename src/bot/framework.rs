use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, GatewayIntents};
use tracing::{error, info, warn};

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::commands;
use crate::config::Settings;
use crate::constants::policy::{COMMAND_PREFIX, RECONNECT_SCAN_LIMIT};
use crate::handlers::event_handler::event_handler;
use crate::services::history::backfill;

pub async fn run(settings: Settings, denylist: Vec<String>) -> Result<(), Error> {
    let data = Arc::new(Data::new(settings.clone(), denylist));

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::warnings::warnings(),
                commands::warnings::clearwarnings(),
                commands::moderation::warn(),
                commands::moderation::ban(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.to_string()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!("Command error: {:?}", error);
                            let _ = ctx.say(format!("Error: {}", error)).await;
                        }
                        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
                            let _ = ctx.say(format!("Invalid argument: {}", error)).await;
                        }
                        poise::FrameworkError::UnknownCommand { .. } => {
                            // Ordinary chatter can start with the prefix; the
                            // denylist scan has already seen the message
                        }
                        err => {
                            error!("Framework error: {:?}", err);
                        }
                    }
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, _framework| {
            Box::pin(async move {
                info!("Bot connected as {}", ready.user.name);

                // Sweep recent history in every guild once the cache has had a
                // moment to populate. Best-effort: a failed guild scan is
                // logged and the next guild still runs.
                let ctx_clone = ctx.clone();
                let data_clone = data.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
                    info!("Checking message history...");
                    for guild_id in ctx_clone.cache.guilds() {
                        match backfill::scan_guild(
                            &ctx_clone,
                            &data_clone,
                            guild_id,
                            RECONNECT_SCAN_LIMIT,
                        )
                        .await
                        {
                            Ok(scanned) => {
                                info!("Scanned {} messages in guild {}", scanned, guild_id);
                            }
                            Err(e) => {
                                warn!("History scan failed for guild {}: {:?}", guild_id, e);
                            }
                        }
                    }
                    info!("Finished checking message history");
                });

                Ok(data)
            })
        })
        .build();

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&settings.discord_token, intents)
        .framework(framework)
        .await
        .map_err(Error::Serenity)?;

    info!("Starting Discord client...");
    client.start().await.map_err(Error::Serenity)
}
