use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, FullEvent};
use tracing::{error, info, warn};

use crate::bot::data::Data;
use crate::bot::error::Error;
use crate::constants::policy::GUILD_JOIN_SCAN_LIMIT;
use crate::handlers::message;
use crate::services::history::backfill;

pub async fn event_handler(
    ctx: &serenity::Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, Arc<Data>, Error>,
    data: &Arc<Data>,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot, .. } => {
            info!(
                "Bot ready as {} in {} guilds",
                data_about_bot.user.name,
                data_about_bot.guilds.len()
            );
        }

        FullEvent::Message { new_message } => {
            // Prefix commands are dispatched by the framework; everything
            // else about the message is handled here
            if let Err(e) = message::handle_message(ctx, data, new_message).await {
                error!("Message handler error: {:?}", e);
            }
        }

        FullEvent::GuildCreate { guild, is_new } => {
            // GuildCreate also fires while the gateway streams existing
            // guilds after startup; only a genuine join gets the deep scan
            if is_new.unwrap_or(false) {
                info!("Joined new guild: {} ({})", guild.name, guild.id);
                let ctx = ctx.clone();
                let data = data.clone();
                let guild_id = guild.id;
                tokio::spawn(async move {
                    info!("Checking message history for new guild {}...", guild_id);
                    match backfill::scan_guild(&ctx, &data, guild_id, GUILD_JOIN_SCAN_LIMIT).await
                    {
                        Ok(scanned) => {
                            info!("Scanned {} messages in new guild {}", scanned, guild_id);
                        }
                        Err(e) => {
                            warn!("History scan failed for new guild {}: {:?}", guild_id, e);
                        }
                    }
                });
            }
        }

        _ => {}
    }

    Ok(())
}
