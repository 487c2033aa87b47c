use anyhow::Result;
use blmail_html::HtmlPolicy;
use blmail_render::minify;
use blmail_render::render;
use blmail_render::validate_market_copy;
use blmail_render::Market;
use blmail_render::TemplateKind;
use blmail_tags::closing_sequence_count;
use blmail_tags::CLOSING_SEQUENCE;
use clap::Parser;

use crate::args::Args;
use crate::commands::load_settings;
use crate::commands::plural;
use crate::commands::Command;
use crate::exit::Exit;
use crate::report::validate_template_with;

#[derive(Debug, Parser)]
pub struct Render {
    /// Storefront to render for: cs, sk, de, pl, hu, sl or hr.
    #[arg(long)]
    market: Market,

    /// order-confirmation, bank-transfer, payment-confirmed or order-shipped.
    #[arg(long)]
    kind: TemplateKind,

    /// Print the template as generated, with line breaks and indentation.
    #[arg(long)]
    no_minify: bool,
}

impl Command for Render {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let settings = load_settings(args)?;
        let policy = HtmlPolicy::from_settings(&settings);

        let copy = validate_market_copy(self.market);
        for warning in &copy.warnings {
            eprintln!("warning: {warning}");
        }
        if !copy.valid {
            for error in &copy.errors {
                eprintln!("error: {error}");
            }
            let count = copy.errors.len();
            let word = plural(count, "field", "fields");
            return Ok(Exit::error().with_message(format!(
                "Market {} is missing text for {count} {word}.",
                self.market
            )));
        }

        let generated = render(self.market, self.kind);
        // Settings `debug = true` keeps output readable, like --no-minify.
        let html = if self.no_minify || settings.debug() {
            generated
        } else {
            minify(&generated)
        };

        // BaseLinker ends the item-list block at the first `)]`, so any other
        // occurrence silently truncates the row.
        let closing = closing_sequence_count(&html);
        if closing != 1 {
            anyhow::bail!(
                "{}/{} template contains `{CLOSING_SEQUENCE}` {closing} times, expected exactly once",
                self.market,
                self.kind
            );
        }

        let report = validate_template_with(&html, &policy);
        tracing::info!(
            market = %self.market,
            kind = %self.kind,
            size = report.html.size,
            valid = report.valid,
            "validated generated template"
        );

        if !report.valid {
            for error in &report.all_errors {
                eprintln!("error: {error}");
            }
            for warning in &report.all_warnings {
                eprintln!("warning: {warning}");
            }
            let count = report.all_errors.len();
            let word = plural(count, "error", "errors");
            return Ok(Exit::error().with_message(format!(
                "Generated {}/{} template failed validation with {count} {word}.",
                self.market, self.kind
            )));
        }

        for warning in &report.all_warnings {
            eprintln!("warning: {warning}");
        }
        println!("{html}");
        Ok(Exit::success())
    }
}
