use serenity::builder::CreateEmbed;

pub const DEFAULT_WIDGET_URL: &str = "YOUR_WIDGET_URL";

/// HTML loader snippet for embedding the ticker on another site
pub fn embed_snippet(widget_url: &str) -> String {
    format!(
        r#"<script> (function(d) {{
    var s = d.createElement("script");
    s.src = "{}";
    d.body.appendChild(s);
}})(document); </script>"#,
        widget_url
    )
}

pub fn metals_primer() -> &'static str {
    "Precious metals like **Gold** and **Silver** are commodities often used in investment and trading. \
     The prices of these metals fluctuate based on various economic factors, such as inflation, market demand, \
     and geopolitical stability.\n\
     - **Gold** is often considered a safe-haven investment during uncertain times.\n\
     - **Silver** is also used in industrial applications, which affects its price."
}

pub fn create_snippet_embed(widget_url: &str) -> CreateEmbed {
    CreateEmbed::default()
        .title("🧩 Integrate this widget into your website")
        .description(format!(
            "To integrate this price ticker into your website, copy the following HTML code:\n```html\n{}\n```",
            embed_snippet(widget_url)
        ))
        .color(0x00b0f4)
}

pub fn create_primer_embed() -> CreateEmbed {
    CreateEmbed::default()
        .title("📚 Precious Metals 101")
        .description(metals_primer())
        .color(0xffd700)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_substitutes_url() {
        let snippet = embed_snippet("https://cdn.example.com/ticker.js");
        assert!(snippet.starts_with("<script>"));
        assert!(snippet.contains(r#"s.src = "https://cdn.example.com/ticker.js";"#));
        assert!(snippet.contains("})(document);"));
        assert!(snippet.ends_with("</script>"));
    }

    #[test]
    fn test_default_snippet_keeps_placeholder() {
        assert!(embed_snippet(DEFAULT_WIDGET_URL).contains("\"YOUR_WIDGET_URL\""));
    }

    #[test]
    fn test_primer_mentions_both_metals() {
        let primer = metals_primer();
        assert!(primer.contains("safe-haven"));
        assert!(primer.contains("industrial applications"));
    }
}
