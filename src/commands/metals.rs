use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::widget_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    msg.channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default().embed(widget_service::create_primer_embed()),
        )
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
