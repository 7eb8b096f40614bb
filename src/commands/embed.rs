use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::widget_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let config = super::load_config(ctx).await?;
    let embed = widget_service::create_snippet_embed(&config.widget_url);

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
